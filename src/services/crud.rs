//! Write paths shared by every service.
//!
//! Each helper stages through a repository and commits through the unit of
//! work that owns it. A commit that affects no rows is reported as a bad
//! request.

use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{Record, Repository, UnitOfWork};

/// Commit the unit of work, treating "nothing written" as a failure.
pub(crate) async fn commit(uow: &dyn UnitOfWork, kind: &str) -> AppResult<()> {
    if uow.save_changes().await? {
        Ok(())
    } else {
        Err(AppError::bad_request(format!("Failed to save {}", kind)))
    }
}

/// Reject updates whose body names a different record than the path.
pub(crate) fn ensure_same_id(path_id: i32, body_id: i32) -> AppResult<()> {
    if path_id != body_id {
        return Err(AppError::bad_request(format!(
            "Id in path ({}) does not match id in body ({})",
            path_id, body_id
        )));
    }
    Ok(())
}

/// Fail with a bad request when a referenced record does not exist.
pub(crate) async fn ensure_reference<T, R>(repo: &R, id: i32) -> AppResult<()>
where
    T: Record,
    R: Repository<T> + ?Sized,
{
    let found = if id > 0 { repo.get(id).await? } else { None };
    if found.is_none() {
        return Err(AppError::bad_request(format!("Invalid {}", T::KIND)));
    }
    Ok(())
}

pub(crate) async fn create<T, R>(uow: &dyn UnitOfWork, repo: &R, entity: T) -> AppResult<T>
where
    T: Record,
    R: Repository<T> + ?Sized,
{
    let pending = repo.create(entity).await?;
    commit(uow, T::KIND).await?;

    let stored = pending
        .get()
        .ok_or_else(|| AppError::internal(format!("{} insert committed without a row", T::KIND)))?;
    tracing::info!(kind = T::KIND, id = stored.id(), "Record created");
    Ok(stored)
}

/// Replace an existing record. Callers check path/body agreement first.
pub(crate) async fn update<T, R>(uow: &dyn UnitOfWork, repo: &R, entity: T) -> AppResult<T>
where
    T: Record,
    R: Repository<T> + ?Sized,
{
    repo.get(entity.id()).await?.ok_or_not_found()?;
    repo.update(entity.clone()).await?;
    commit(uow, T::KIND).await?;

    tracing::info!(kind = T::KIND, id = entity.id(), "Record updated");
    Ok(entity)
}

/// Remove a record, returning it as it was before removal.
pub(crate) async fn delete<T, R>(uow: &dyn UnitOfWork, repo: &R, id: i32) -> AppResult<T>
where
    T: Record,
    R: Repository<T> + ?Sized,
{
    let existing = repo.get(id).await?.ok_or_not_found()?;
    repo.delete(existing.clone()).await?;
    commit(uow, T::KIND).await?;

    tracing::info!(kind = T::KIND, id, "Record deleted");
    Ok(existing)
}

/// Turn an empty eager listing into a not-found result.
pub(crate) fn non_empty<T>(items: Vec<T>) -> AppResult<Vec<T>> {
    if items.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(items)
}
