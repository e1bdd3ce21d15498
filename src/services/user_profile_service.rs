//! User profile use cases.

use crate::domain::UserProfile;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

use super::crud;

pub struct UserProfileService<'a> {
    uow: &'a dyn UnitOfWork,
}

impl<'a> UserProfileService<'a> {
    pub fn new(uow: &'a dyn UnitOfWork) -> Self {
        Self { uow }
    }

    pub async fn list(&self) -> AppResult<Vec<UserProfile>> {
        self.uow.user_profiles().list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<UserProfile> {
        self.uow.user_profiles().get(id).await?.ok_or_not_found()
    }

    pub async fn create(&self, profile: UserProfile) -> AppResult<UserProfile> {
        crud::create(self.uow, self.uow.user_profiles(), profile).await
    }

    pub async fn update(&self, id: i32, profile: UserProfile) -> AppResult<UserProfile> {
        crud::ensure_same_id(id, profile.id)?;
        crud::update(self.uow, self.uow.user_profiles(), profile).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<UserProfile> {
        crud::delete::<UserProfile, _>(self.uow, self.uow.user_profiles(), id).await
    }
}
