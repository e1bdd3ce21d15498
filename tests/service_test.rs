//! Service-level checks in front of the repositories.

mod common;

use company_manager::domain::{CompanyType, User, UserProfile};
use company_manager::errors::AppError;
use company_manager::infra::Persistence;
use company_manager::services::{
    CompanyService, CompanyTypeService, UserProfileService, UserService,
};
use company_manager::types::SelectOption;

use common::{acme, maria, seed, setup_db};

#[tokio::test]
async fn test_company_type_crud() {
    let db = setup_db().await;
    let uow = Persistence::new(db);
    let service = CompanyTypeService::new(&uow);

    assert!(service.list().await.unwrap().is_empty());

    let created = service.create(CompanyType::new("Retail")).await.unwrap();
    assert!(created.id > 0);

    let renamed = CompanyType {
        name: "Retail & Co".to_string(),
        ..created.clone()
    };
    let updated = service.update(created.id, renamed).await.unwrap();
    assert_eq!(service.get(created.id).await.unwrap(), updated);

    let deleted = service.delete(created.id).await.unwrap();
    assert_eq!(deleted.name, "Retail & Co");
    assert!(matches!(service.get(created.id).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_requires_matching_ids() {
    let db = setup_db().await;
    let uow = Persistence::new(db);
    let service = UserProfileService::new(&uow);

    let created = service.create(UserProfile::new("Manager")).await.unwrap();

    let result = service.update(created.id + 1, created.clone()).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut missing = created.clone();
    missing.id = 500;
    let result = service.update(500, missing).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let db = setup_db().await;
    let uow = Persistence::new(db);

    let result = CompanyTypeService::new(&uow).delete(12).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_company_requires_existing_company_type() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);
    let service = CompanyService::new(&uow);

    let result = service.create(acme(999)).await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid company type"));

    let mut moved = seeded.company.clone();
    moved.company_type_id = 999;
    let result = service.update(seeded.company.id, moved).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let created = service.create(acme(seeded.company_type.id)).await.unwrap();
    assert!(created.company_type.is_none());
    assert_eq!(service.get(created.id).await.unwrap().company_type, Some(seeded.company_type));
}

#[tokio::test]
async fn test_empty_company_listings_are_not_found() {
    let db = setup_db().await;
    let uow = Persistence::new(db);
    let service = CompanyService::new(&uow);

    assert!(matches!(service.list().await, Err(AppError::NotFound)));
    assert!(matches!(service.list_by_type(1).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_user_create_rejects_tax_id_taken_in_company() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);
    let service = UserService::new(&uow);

    service
        .create(maria(seeded.profile.id, seeded.company.id))
        .await
        .unwrap();

    let duplicate = User::new(
        "Maria Souza",
        "111.111.111-11",
        seeded.profile.id,
        seeded.company.id,
    );
    let result = service.create(duplicate).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_user_create_allows_same_tax_id_in_other_company() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    let other = CompanyService::new(&uow)
        .create(acme(seeded.company_type.id))
        .await
        .unwrap();
    let service = UserService::new(&uow);

    service
        .create(maria(seeded.profile.id, seeded.company.id))
        .await
        .unwrap();
    let second = service
        .create(maria(seeded.profile.id, other.id))
        .await
        .unwrap();

    assert_eq!(second.company_id, other.id);
    assert_eq!(service.list_by_company(other.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_requires_existing_profile_and_company() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);
    let service = UserService::new(&uow);

    let result = service.create(maria(999, seeded.company.id)).await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid user profile"));

    let result = service.create(maria(seeded.profile.id, 999)).await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid company"));

    let user = service
        .create(maria(seeded.profile.id, seeded.company.id))
        .await
        .unwrap();
    let mut moved = user.clone();
    moved.company_id = 999;
    assert!(matches!(
        service.update(user.id, moved).await,
        Err(AppError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_user_delete_returns_removed_user() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);
    let service = UserService::new(&uow);

    let user = service
        .create(maria(seeded.profile.id, seeded.company.id))
        .await
        .unwrap();

    let deleted = service.delete(user.id).await.unwrap();
    assert_eq!(deleted.id, user.id);
    assert!(matches!(service.list().await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_select_options_are_ordered_by_id() {
    let db = setup_db().await;
    let seeded = seed(&db).await;
    let uow = Persistence::new(db);

    CompanyTypeService::new(&uow)
        .create(CompanyType::new("Wholesale"))
        .await
        .unwrap();

    let types = CompanyService::new(&uow).type_options().await.unwrap();
    assert_eq!(
        types,
        vec![
            SelectOption::new(seeded.company_type.id, "Retail"),
            SelectOption::new(seeded.company_type.id + 1, "Wholesale"),
        ]
    );

    let options = UserService::new(&uow).options().await.unwrap();
    assert_eq!(options.profiles, vec![SelectOption::new(seeded.profile.id, "Manager")]);
    assert_eq!(options.companies, vec![SelectOption::new(seeded.company.id, "Acme")]);
    assert_eq!(options.companies[0].value, seeded.company.id.to_string());
}
