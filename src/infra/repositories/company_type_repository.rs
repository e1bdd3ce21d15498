//! Company type and user profile repositories.
//!
//! Neither needs queries beyond the generic contract; they exist as named
//! seams so the unit of work can hand out one of each.

use crate::domain::{CompanyType, UserProfile};

use super::base::{Repository, Store};

pub trait CompanyTypeRepository: Repository<CompanyType> {}

impl CompanyTypeRepository for Store<CompanyType> {}

pub trait UserProfileRepository: Repository<UserProfile> {}

impl UserProfileRepository for Store<UserProfile> {}
