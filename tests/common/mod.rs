//! Shared setup for integration tests.
//!
//! Every test gets its own in-memory SQLite database with the real
//! migrations applied. The pool is pinned to a single connection so the
//! database lives as long as the pool does.

#![allow(dead_code)]

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use company_manager::domain::{Company, CompanyType, User, UserProfile};
use company_manager::infra::{Migrator, Persistence, UnitOfWork};

pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = SeaDatabase::connect(options)
        .await
        .expect("in-memory sqlite should open");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}

pub fn acme(company_type_id: i32) -> Company {
    Company::new(
        "Acme",
        "Acme Ltd",
        "12.345.678/0001-99",
        "123 Main St",
        company_type_id,
    )
}

pub fn maria(user_profile_id: i32, company_id: i32) -> User {
    User::new("Maria Silva", "111.111.111-11", user_profile_id, company_id)
}

/// Stored fixture: one company type, one profile, one company.
pub struct Seed {
    pub company_type: CompanyType,
    pub profile: UserProfile,
    pub company: Company,
}

pub async fn seed(db: &DatabaseConnection) -> Seed {
    let uow = Persistence::new(db.clone());

    let company_type = uow
        .company_types()
        .create(CompanyType::new("Retail"))
        .await
        .unwrap();
    let profile = uow
        .user_profiles()
        .create(UserProfile::new("Manager"))
        .await
        .unwrap();
    assert!(uow.save_changes().await.unwrap());

    let company_type = company_type.get().unwrap();
    let company = uow
        .companies()
        .create(acme(company_type.id))
        .await
        .unwrap();
    assert!(uow.save_changes().await.unwrap());

    Seed {
        company_type,
        profile: profile.get().unwrap(),
        company: company.get().unwrap(),
    }
}
