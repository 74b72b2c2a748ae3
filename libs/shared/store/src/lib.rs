use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shared_models::error::AppError;

/// A storable domain entity. Ids are assigned by the store on insert.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Resource name used in not-found errors.
    const RESOURCE: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Key-value CRUD contract shared by every store.
#[async_trait]
pub trait Repository<T: Entity> {
    async fn get(&self, id: i64) -> Option<T>;
    async fn add(&self, entity: T) -> T;
    async fn update(&self, entity: T) -> Result<T, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn all(&self) -> Vec<T>;
}

struct Rows<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Rows<T> {
    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory repository. Rows are kept in insertion order and handed out as
/// clones; stored state changes only through the CRUD calls, never through a
/// previously returned value.
pub struct InMemoryStore<T> {
    inner: Arc<RwLock<Rows<T>>>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Rows {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Insertion-order scan with a predicate.
    pub async fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let guard = self.inner.read().await;
        guard.rows.iter().filter(|row| pred(row)).cloned().collect()
    }

    /// Inserts unless an existing row matches `conflict`. The check and the
    /// insert happen under one write lock, so two racing calls for the same
    /// slot cannot both commit. Returns the rejected entity on conflict.
    pub async fn add_unless<F>(&self, mut entity: T, conflict: F) -> Result<T, T>
    where
        F: Fn(&T) -> bool,
    {
        let mut guard = self.inner.write().await;
        if guard.rows.iter().any(|row| conflict(row)) {
            return Err(entity);
        }
        let id = guard.assign_id();
        entity.set_id(id);
        guard.rows.push(entity.clone());
        Ok(entity)
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryStore<T> {
    async fn get(&self, id: i64) -> Option<T> {
        let guard = self.inner.read().await;
        guard.rows.iter().find(|row| row.id() == id).cloned()
    }

    async fn add(&self, mut entity: T) -> T {
        let mut guard = self.inner.write().await;
        let id = guard.assign_id();
        entity.set_id(id);
        guard.rows.push(entity.clone());
        entity
    }

    async fn update(&self, entity: T) -> Result<T, AppError> {
        let mut guard = self.inner.write().await;
        match guard.rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(T::RESOURCE, entity.id())),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut guard = self.inner.write().await;
        match guard.rows.iter().position(|row| row.id() == id) {
            Some(index) => {
                guard.rows.remove(index);
                Ok(())
            }
            None => Err(AppError::not_found(T::RESOURCE, id)),
        }
    }

    async fn all(&self) -> Vec<T> {
        self.inner.read().await.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        body: String,
    }

    impl Entity for Note {
        const RESOURCE: &'static str = "Note";

        fn id(&self) -> i64 {
            self.id
        }

        fn set_id(&mut self, id: i64) {
            self.id = id;
        }
    }

    fn note(body: &str) -> Note {
        Note {
            id: 0,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn add_assigns_monotonic_ids_starting_at_one() {
        let store = InMemoryStore::new();
        let first = store.add(note("a")).await;
        let second = store.add(note("b")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(
            store.all().await.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn reads_return_copies_not_live_references() {
        let store = InMemoryStore::new();
        let stored = store.add(note("original")).await;

        let mut fetched = store.get(stored.id).await.unwrap();
        fetched.body = "mutated locally".to_string();

        // The store only changes through an explicit update call.
        assert_eq!(store.get(stored.id).await.unwrap().body, "original");

        store.update(fetched.clone()).await.unwrap();
        assert_eq!(store.get(stored.id).await.unwrap().body, "mutated locally");
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let store = InMemoryStore::new();
        let ghost = Note {
            id: 42,
            body: "ghost".to_string(),
        };

        assert!(store.update(ghost).await.is_err());
        assert!(store.delete(42).await.is_err());
    }

    #[tokio::test]
    async fn add_unless_rejects_on_conflict() {
        let store = InMemoryStore::new();
        store.add(note("taken")).await;

        let rejected = store
            .add_unless(note("dup"), |existing| existing.body == "taken")
            .await;
        assert!(rejected.is_err());

        let accepted = store
            .add_unless(note("taken"), |existing| existing.body == "free")
            .await;
        assert!(accepted.is_ok());
        assert_eq!(store.all().await.len(), 2);
    }
}
