//! Repository behaviour against a migrated in-memory database.

mod common;

use company_manager::domain::{CompanyType, User, UserProfile};
use company_manager::errors::AppError;
use company_manager::infra::{Persistence, UnitOfWork};

use common::{acme, maria, seed, setup_db};

#[tokio::test]
async fn test_create_assigns_id_on_commit() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    let pending = uow
        .company_types()
        .create(CompanyType::new("Retail"))
        .await
        .unwrap();
    assert!(!pending.is_resolved());

    assert!(uow.save_changes().await.unwrap());

    let stored = pending.get().unwrap();
    assert!(stored.id > 0);
    assert_eq!(stored.name, "Retail");

    let fetched = uow.company_types().get(stored.id).await.unwrap();
    assert_eq!(fetched, Some(stored));
}

#[tokio::test]
async fn test_create_ignores_supplied_id() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    let mut profile = UserProfile::new("Auditor");
    profile.id = 42;
    let pending = uow.user_profiles().create(profile).await.unwrap();
    uow.save_changes().await.unwrap();

    assert_eq!(pending.get().unwrap().id, 1);
    assert_eq!(uow.user_profiles().get(42).await.unwrap(), None);
}

#[tokio::test]
async fn test_staged_writes_are_invisible_until_commit() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    uow.company_types()
        .create(CompanyType::new("Retail"))
        .await
        .unwrap();
    assert!(uow.company_types().list().await.unwrap().is_empty());
    assert_eq!(uow.pending_writes().await, 1);

    uow.save_changes().await.unwrap();
    assert_eq!(uow.company_types().list().await.unwrap().len(), 1);
    assert_eq!(uow.pending_writes().await, 0);
}

#[tokio::test]
async fn test_non_positive_ids_are_rejected() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    for id in [0, -1] {
        assert!(matches!(
            uow.company_types().get(id).await,
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            uow.companies().get_by_id(id).await,
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            uow.users().list_by_company(id).await,
            Err(AppError::InvalidArgument(_))
        ));
    }

    let unsaved = CompanyType::new("Retail");
    assert!(matches!(
        uow.company_types().update(unsaved.clone()).await,
        Err(AppError::InvalidArgument(_))
    ));
    assert!(matches!(
        uow.company_types().delete(unsaved).await,
        Err(AppError::InvalidArgument(_))
    ));
    assert_eq!(uow.pending_writes().await, 0);
}

#[tokio::test]
async fn test_update_replaces_row() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    let mut neighbour = acme(seeded.company_type.id);
    neighbour.trade_name = "Globex".to_string();
    neighbour.tax_id = "98.765.432/0001-10".to_string();
    let pending = uow.companies().create(neighbour).await.unwrap();
    assert!(uow.save_changes().await.unwrap());
    let neighbour = pending.get().unwrap();

    let mut company = seeded.company.clone();
    company.trade_name = "Acme Stores".to_string();
    uow.companies().update(company).await.unwrap();
    assert!(uow.save_changes().await.unwrap());

    let stored = uow.companies().get(seeded.company.id).await.unwrap().unwrap();
    assert_eq!(stored.trade_name, "Acme Stores");
    assert_eq!(stored.legal_name, "Acme Ltd");

    let untouched = uow.companies().get(neighbour.id).await.unwrap().unwrap();
    assert_eq!(untouched, neighbour);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    let pending = uow
        .user_profiles()
        .create(UserProfile::new("Temp"))
        .await
        .unwrap();
    uow.save_changes().await.unwrap();
    let profile = pending.get().unwrap();

    uow.user_profiles().delete(profile.clone()).await.unwrap();
    assert!(uow.save_changes().await.unwrap());
    assert_eq!(uow.user_profiles().get(profile.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_company_reads_load_company_type() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    let all = uow.companies().list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].trade_name, "Acme");
    assert_eq!(all[0].company_type.as_ref().unwrap().name, "Retail");

    let one = uow
        .companies()
        .get_by_id(seeded.company.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(one.company_type, Some(seeded.company_type.clone()));

    // The generic read never loads associations
    let plain = uow.companies().get(seeded.company.id).await.unwrap().unwrap();
    assert!(plain.company_type.is_none());

    assert_eq!(uow.companies().get_by_id(999).await.unwrap(), None);
}

#[tokio::test]
async fn test_list_by_type_filters() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    let unused = uow
        .company_types()
        .create(CompanyType::new("Wholesale"))
        .await
        .unwrap();
    uow.save_changes().await.unwrap();

    let retail = uow
        .companies()
        .list_by_type(seeded.company_type.id)
        .await
        .unwrap();
    assert_eq!(retail.len(), 1);

    let wholesale = uow
        .companies()
        .list_by_type(unused.get().unwrap().id)
        .await
        .unwrap();
    assert!(wholesale.is_empty());
}

#[tokio::test]
async fn test_user_reads_load_profile_and_company() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    let pending = uow
        .users()
        .create(maria(seeded.profile.id, seeded.company.id))
        .await
        .unwrap();
    uow.save_changes().await.unwrap();
    let id = pending.get().unwrap().id;

    let user = uow.users().get_by_id(id).await.unwrap().unwrap();
    assert_eq!(user.user_profile.as_ref().unwrap().name, "Manager");
    assert_eq!(user.company.as_ref().unwrap().trade_name, "Acme");

    assert_eq!(uow.users().list_all().await.unwrap().len(), 1);
    assert_eq!(
        uow.users()
            .list_by_company(seeded.company.id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        uow.users()
            .list_by_profile(seeded.profile.id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(uow.users().list_by_profile(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tax_id_exists_is_scoped_to_company() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    let other = uow
        .companies()
        .create(acme(seeded.company_type.id))
        .await
        .unwrap();
    uow.users()
        .create(maria(seeded.profile.id, seeded.company.id))
        .await
        .unwrap();
    uow.save_changes().await.unwrap();
    let other_id = other.get().unwrap().id;

    let users = uow.users();
    assert!(users
        .tax_id_exists("111.111.111-11", seeded.company.id)
        .await
        .unwrap());
    assert!(!users.tax_id_exists("111.111.111-11", other_id).await.unwrap());
    assert!(!users
        .tax_id_exists("222.222.222-22", seeded.company.id)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_repository_does_not_enforce_tax_id_uniqueness() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    let first = maria(seeded.profile.id, seeded.company.id);
    let second = User::new(
        "Maria Souza",
        first.tax_id.clone(),
        seeded.profile.id,
        seeded.company.id,
    );
    uow.users().create(first).await.unwrap();
    uow.users().create(second).await.unwrap();

    assert!(uow.save_changes().await.unwrap());
    assert_eq!(uow.users().list().await.unwrap().len(), 2);
}
