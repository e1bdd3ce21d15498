//! Generic repository over any stored record.
//!
//! `Store<T>` serves reads from the committed connection and stages writes
//! in the shared [`Session`]. Nothing it does is durable until the owning
//! unit of work saves its changes.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, IntoActiveModel, QueryFilter,
};
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use super::session::{Applied, Session, Staged};
use crate::errors::{AppError, AppResult};

/// How the primary key is written when a record becomes a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// Leave the id out so the store assigns one on insert
    Assign,
    /// Key the row by an existing id without writing it
    Keep(i32),
}

impl Identity {
    pub fn into_value(self) -> ActiveValue<i32> {
        match self {
            Identity::Assign => ActiveValue::NotSet,
            Identity::Keep(id) => ActiveValue::Unchanged(id),
        }
    }
}

/// A domain entity backed by one table with an integer identity.
pub trait Record: Clone + Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: IntoActiveModel<Self::ActiveModel> + FromQueryResult + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;

    /// Human readable name used in messages
    const KIND: &'static str;

    fn id(&self) -> i32;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Every stored column as an active model. Associations are not written.
    fn into_row(self, identity: Identity) -> Self::ActiveModel;

    fn from_model(model: Self::Model) -> Self;
}

/// Handle returned by `create`, filled with the stored record once the
/// insert has been committed.
#[derive(Debug, Clone)]
pub struct Pending<T> {
    slot: Arc<OnceLock<T>>,
}

impl<T: Clone> Pending<T> {
    fn new() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// The stored record, including its assigned id. `None` until committed.
    pub fn get(&self) -> Option<T> {
        self.slot.get().cloned()
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.get().is_some()
    }
}

/// CRUD contract shared by every repository.
///
/// Writes are staged only. Ids that are not positive are rejected with
/// `AppError::InvalidArgument` before the store is touched.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Every row, without associations
    async fn list(&self) -> AppResult<Vec<T>>;

    async fn get(&self, id: i32) -> AppResult<Option<T>>;

    /// Stage an insert. Any id on `entity` is ignored.
    async fn create(&self, entity: T) -> AppResult<Pending<T>>;

    /// Stage a full-row replace keyed by `entity.id()`
    async fn update(&self, entity: T) -> AppResult<()>;

    /// Stage removal of the row keyed by `entity.id()`
    async fn delete(&self, entity: T) -> AppResult<()>;
}

/// Reject ids the store could never have assigned.
pub(crate) fn ensure_identity(kind: &str, id: i32) -> AppResult<i32> {
    if id <= 0 {
        return Err(AppError::invalid_argument(format!(
            "{} id must be a positive integer, got {}",
            kind, id
        )));
    }
    Ok(id)
}

/// Session-bound repository for one record type.
pub struct Store<T> {
    session: Arc<Session>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Store<T> {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            _record: PhantomData,
        }
    }

    pub(crate) fn db(&self) -> &DatabaseConnection {
        self.session.connection()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for Store<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        let models = T::Entity::find().all(self.db()).await?;
        Ok(models.into_iter().map(T::from_model).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<T>> {
        let id = ensure_identity(T::KIND, id)?;
        let model = T::Entity::find()
            .filter(T::id_column().eq(id))
            .one(self.db())
            .await?;

        Ok(model.map(T::from_model))
    }

    async fn create(&self, entity: T) -> AppResult<Pending<T>> {
        let pending = Pending::new();
        let write = Write::<T>::Insert {
            row: entity.into_row(Identity::Assign),
            slot: pending.slot.clone(),
        };
        self.session.stage(Box::new(write)).await;
        Ok(pending)
    }

    async fn update(&self, entity: T) -> AppResult<()> {
        let id = ensure_identity(T::KIND, entity.id())?;
        let write = Write::<T>::Update {
            id,
            row: entity.into_row(Identity::Keep(id)),
        };
        self.session.stage(Box::new(write)).await;
        Ok(())
    }

    async fn delete(&self, entity: T) -> AppResult<()> {
        let id = ensure_identity(T::KIND, entity.id())?;
        self.session.stage(Box::new(Write::<T>::Delete { id })).await;
        Ok(())
    }
}

/// One staged statement against the table behind `R`.
enum Write<R: Record> {
    Insert {
        row: R::ActiveModel,
        slot: Arc<OnceLock<R>>,
    },
    Update {
        id: i32,
        row: R::ActiveModel,
    },
    Delete {
        id: i32,
    },
}

#[async_trait]
impl<R: Record> Staged for Write<R> {
    async fn apply(self: Box<Self>, txn: &DatabaseTransaction) -> Result<Applied, DbErr> {
        match *self {
            Write::Insert { row, slot } => {
                let stored = R::from_model(row.insert(txn).await?);
                Ok(Applied {
                    rows: 1,
                    publish: Some(Box::new(move || {
                        let _ = slot.set(stored);
                    })),
                })
            }
            Write::Update { id, row } => {
                let result = R::Entity::update_many()
                    .set(row)
                    .filter(R::id_column().eq(id))
                    .exec(txn)
                    .await?;
                Ok(Applied {
                    rows: result.rows_affected,
                    publish: None,
                })
            }
            Write::Delete { id } => {
                let result = R::Entity::delete_many()
                    .filter(R::id_column().eq(id))
                    .exec(txn)
                    .await?;
                Ok(Applied {
                    rows: result.rows_affected,
                    publish: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_values() {
        assert_eq!(Identity::Assign.into_value(), ActiveValue::NotSet);
        assert_eq!(Identity::Keep(7).into_value(), ActiveValue::Unchanged(7));
    }

    #[test]
    fn test_ensure_identity() {
        assert_eq!(ensure_identity("company", 3).unwrap(), 3);
        assert!(matches!(
            ensure_identity("company", 0),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            ensure_identity("company", -1),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pending_resolves_once() {
        let pending: Pending<i32> = Pending::new();
        assert!(!pending.is_resolved());
        assert_eq!(pending.get(), None);

        let _ = pending.slot.set(5);
        let _ = pending.slot.set(6);
        assert!(pending.is_resolved());
        assert_eq!(pending.get(), Some(5));
    }
}
