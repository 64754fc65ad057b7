//! PostgreSQL implementation of RegistrationRepository.
//!
//! Persists Registration aggregates to the `registrations` table. The
//! table's unique index on `email` is what rejects duplicate submissions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, EmailAddress, RegistrationId, Timestamp,
};
use crate::domain::registration::{
    ExperienceLevel, ProgramType, Registration, RegistrationStatus, SchedulePreference,
};
use crate::ports::RegistrationRepository;

use super::error::{column, db_error, insert_error, parse_enum};

const COLUMNS: &str = "id, first_name, last_name, email, phone, current_role_title, \
    experience_level, program_type, areas_of_interest, schedule_preference, \
    goals_expectations, terms_accepted, status, created_at, updated_at";

/// PostgreSQL implementation of RegistrationRepository.
#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn insert(&self, registration: &Registration) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO registrations (
                id, first_name, last_name, email, phone, current_role_title,
                experience_level, program_type, areas_of_interest, schedule_preference,
                goals_expectations, terms_accepted, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(registration.id().as_uuid())
        .bind(registration.first_name())
        .bind(registration.last_name())
        .bind(registration.email().as_str())
        .bind(registration.phone())
        .bind(registration.current_role_title())
        .bind(registration.experience_level().as_str())
        .bind(registration.program_type().as_str())
        .bind(registration.areas_of_interest())
        .bind(registration.schedule_preference().map(|s| s.as_str()))
        .bind(registration.goals_expectations())
        .bind(registration.terms_accepted())
        .bind(registration.status().as_str())
        .bind(registration.created_at().as_datetime())
        .bind(registration.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error("insert registration", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM registrations WHERE id = $1", COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch registration", e))?;

        row.map(|r| row_to_registration(&r)).transpose()
    }

    async fn list_newest_first(&self) -> Result<Vec<Registration>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM registrations ORDER BY created_at DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list registrations", e))?;

        rows.iter().map(row_to_registration).collect()
    }

    async fn update_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
        now: Timestamp,
    ) -> Result<Option<Registration>, DomainError> {
        let row = sqlx::query(&format!(
            "UPDATE registrations SET status = $2, updated_at = $3 WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(status.as_str())
        .bind(now.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update registration status", e))?;

        row.map(|r| row_to_registration(&r)).transpose()
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM registrations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count registrations", e))?;

        Ok(result.0 as u64)
    }

    async fn count_by_status(&self, status: RegistrationStatus) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM registrations WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count registrations by status", e))?;

        Ok(result.0 as u64)
    }

    async fn count_by_program(&self, program: ProgramType) -> Result<u64, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM registrations WHERE program_type = $1")
                .bind(program.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("count registrations by program", e))?;

        Ok(result.0 as u64)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_registration(row: &PgRow) -> Result<Registration, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let email: String = column(row, "email")?;
    let experience_level: String = column(row, "experience_level")?;
    let program_type: String = column(row, "program_type")?;
    let schedule_preference: Option<String> = column(row, "schedule_preference")?;
    let status: String = column(row, "status")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    let schedule_preference = schedule_preference
        .map(|s| parse_enum("schedule_preference", &s, SchedulePreference::from_wire))
        .transpose()?;

    Ok(Registration::reconstitute(
        RegistrationId::from_uuid(id),
        column(row, "first_name")?,
        column(row, "last_name")?,
        EmailAddress::from_trusted(email),
        column(row, "phone")?,
        column(row, "current_role_title")?,
        parse_enum("experience_level", &experience_level, ExperienceLevel::from_wire)?,
        parse_enum("program_type", &program_type, ProgramType::from_wire)?,
        column(row, "areas_of_interest")?,
        schedule_preference,
        column(row, "goals_expectations")?,
        column(row, "terms_accepted")?,
        parse_enum("status", &status, RegistrationStatus::from_wire)?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
