//! In-memory implementation of link repository.
//!
//! Backs integration tests and local experimentation with the same
//! observable contract as the PostgreSQL implementation: short-code
//! uniqueness, conditional owner-scoped writes, and recency ordering.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Default)]
struct Store {
    rows: Vec<Link>,
    next_id: i64,
}

/// In-memory repository guarded by a mutex.
///
/// The lock is never held across an await point.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: Mutex<Store>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn code_conflict(short_code: &str) -> AppError {
        AppError::conflict(
            "Short code already exists",
            json!({ "short_code": short_code }),
        )
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.inner.lock().expect("link store lock poisoned");

        if store
            .rows
            .iter()
            .any(|row| row.short_code == new_link.short_code)
        {
            return Err(Self::code_conflict(&new_link.short_code));
        }

        store.next_id += 1;
        let now = Utc::now();
        let link = Link::new(
            store.next_id,
            new_link.owner_id,
            new_link.original_url,
            new_link.short_code,
            now,
            now,
        );

        store.rows.push(link.clone());
        Ok(link)
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        let store = self.inner.lock().expect("link store lock poisoned");

        let mut links: Vec<Link> = store
            .rows
            .iter()
            .filter(|row| row.owner_id == owner_id)
            .cloned()
            .collect();

        // Timestamp ties are broken by id so the ordering stays
        // deterministic under rapid insertion.
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let store = self.inner.lock().expect("link store lock poisoned");

        Ok(store
            .rows
            .iter()
            .find(|row| row.short_code == short_code)
            .cloned())
    }

    async fn update(
        &self,
        id: i64,
        owner_id: &str,
        update: LinkUpdate,
    ) -> Result<Option<Link>, AppError> {
        let mut store = self.inner.lock().expect("link store lock poisoned");

        let Some(position) = store
            .rows
            .iter()
            .position(|row| row.id == id && row.owner_id == owner_id)
        else {
            return Ok(None);
        };

        if store
            .rows
            .iter()
            .any(|row| row.id != id && row.short_code == update.short_code)
        {
            return Err(Self::code_conflict(&update.short_code));
        }

        let row = &mut store.rows[position];
        row.original_url = update.original_url;
        row.short_code = update.short_code;
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64, owner_id: &str) -> Result<Option<Link>, AppError> {
        let mut store = self.inner.lock().expect("link store lock poisoned");

        let Some(position) = store
            .rows
            .iter()
            .position(|row| row.id == id && row.owner_id == owner_id)
        else {
            return Ok(None);
        };

        Ok(Some(store.rows.remove(position)))
    }
}
