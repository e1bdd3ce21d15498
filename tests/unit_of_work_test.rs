//! Change-set semantics of the unit of work.

mod common;

use company_manager::domain::{CompanyType, UserProfile};
use company_manager::errors::AppError;
use company_manager::infra::{Persistence, UnitOfWork};

use common::{acme, maria, seed, setup_db};

#[tokio::test]
async fn test_save_with_nothing_staged_is_false() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    assert!(!uow.save_changes().await.unwrap());
}

#[tokio::test]
async fn test_writes_across_repositories_commit_together() {
    let db = setup_db().await;
    let uow = Persistence::new(db.clone());

    uow.company_types()
        .create(CompanyType::new("Retail"))
        .await
        .unwrap();
    uow.user_profiles()
        .create(UserProfile::new("Manager"))
        .await
        .unwrap();
    assert!(uow.save_changes().await.unwrap());

    // A second unit of work over the same store sees both rows
    let reader = Persistence::new(db);
    assert_eq!(reader.company_types().list().await.unwrap().len(), 1);
    assert_eq!(reader.user_profiles().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_flush_rolls_back_every_write() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    uow.company_types()
        .create(CompanyType::new("Retail"))
        .await
        .unwrap();
    // No company type 999 exists, so this insert breaks the foreign key
    uow.companies().create(acme(999)).await.unwrap();

    let err = uow.save_changes().await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    assert!(uow.company_types().list().await.unwrap().is_empty());
    assert!(uow.companies().list().await.unwrap().is_empty());

    // The failed change-set is gone
    assert!(!uow.save_changes().await.unwrap());
}

#[tokio::test]
async fn test_update_of_missing_row_affects_nothing() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    let mut ghost = CompanyType::new("Ghost");
    ghost.id = 77;
    uow.company_types().update(ghost).await.unwrap();

    assert!(!uow.save_changes().await.unwrap());
}

#[tokio::test]
async fn test_deleting_referenced_row_is_a_foreign_key_violation() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    uow.company_types()
        .delete(seeded.company_type.clone())
        .await
        .unwrap();
    let err = uow.save_changes().await.unwrap_err();

    assert!(err.is_foreign_key_violation());
    assert_eq!(
        uow.company_types().get(seeded.company_type.id).await.unwrap(),
        Some(seeded.company_type)
    );
}

#[tokio::test]
async fn test_deleting_company_with_users_is_a_foreign_key_violation() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    uow.users()
        .create(maria(seeded.profile.id, seeded.company.id))
        .await
        .unwrap();
    assert!(uow.save_changes().await.unwrap());

    uow.companies().delete(seeded.company.clone()).await.unwrap();
    let err = uow.save_changes().await.unwrap_err();

    assert!(err.is_foreign_key_violation());
    assert_eq!(err.code(), "REFERENCE_CONFLICT");
    assert!(uow.companies().get(seeded.company.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_close_reports_discarded_writes() {
    let db = setup_db().await;
    let uow: Box<dyn UnitOfWork> = Box::new(Persistence::new(db.clone()));

    uow.company_types()
        .create(CompanyType::new("Retail"))
        .await
        .unwrap();
    uow.user_profiles()
        .create(UserProfile::new("Manager"))
        .await
        .unwrap();

    assert_eq!(uow.close().await, 2);

    let reader = Persistence::new(db);
    assert!(reader.company_types().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_close_after_commit_discards_nothing() {
    let db = setup_db().await;
    let uow: Box<dyn UnitOfWork> = Box::new(Persistence::new(db));

    uow.company_types()
        .create(CompanyType::new("Retail"))
        .await
        .unwrap();
    uow.save_changes().await.unwrap();

    assert_eq!(uow.close().await, 0);
}
