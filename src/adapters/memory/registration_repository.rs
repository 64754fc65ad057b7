//! In-memory registration repository.
//!
//! Useful for tests and local development. Uniqueness is checked and the
//! row inserted under one write lock, matching the unique index of the
//! Postgres adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RegistrationId, Timestamp};
use crate::domain::registration::{ProgramType, Registration, RegistrationStatus};
use crate::ports::RegistrationRepository;

/// In-memory storage for registrations, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistrationRepository {
    rows: Arc<RwLock<Vec<Registration>>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored registrations.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn insert(&self, registration: &Registration) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.email() == registration.email()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEmail,
                "Email already registered",
            ));
        }
        rows.push(registration.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Registration>, DomainError> {
        let rows = self.rows.read().await;
        let mut list: Vec<Registration> = rows.iter().rev().cloned().collect();
        // Stable sort keeps later inserts first among equal timestamps.
        list.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(list)
    }

    async fn update_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
        now: Timestamp,
    ) -> Result<Option<Registration>, DomainError> {
        let mut rows = self.rows.write().await;
        Ok(rows.iter_mut().find(|r| r.id() == id).map(|r| {
            r.set_status(status, now);
            r.clone()
        }))
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        Ok(self.rows.read().await.len() as u64)
    }

    async fn count_by_status(&self, status: RegistrationStatus) -> Result<u64, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| r.status() == status).count() as u64)
    }

    async fn count_by_program(&self, program: ProgramType) -> Result<u64, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| r.program_type() == program).count() as u64)
    }
}
