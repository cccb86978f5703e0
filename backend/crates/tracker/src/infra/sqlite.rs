//! SQLite Repository Implementation

use chrono::NaiveDate;
use kernel::id::{ApplicationId, UserId};
use sqlx::SqlitePool;

use crate::domain::entities::{Application, NewApplication};
use crate::domain::repository::ApplicationRepository;
use crate::domain::value_objects::ApplicationStatus;
use crate::error::TrackerResult;

/// SQLite-backed application repository
#[derive(Clone)]
pub struct SqliteTrackerRepository {
    pool: SqlitePool,
}

impl SqliteTrackerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `applications` table and its owner index.
    ///
    /// The `users` table must already exist for the foreign key.
    pub async fn ensure_schema(&self) -> TrackerResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS applications (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                company      TEXT NOT NULL,
                role         TEXT NOT NULL,
                date_applied DATE NOT NULL,
                status       TEXT NOT NULL DEFAULT 'Applied',
                user_id      INTEGER NOT NULL REFERENCES users(id)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_applications_user_id ON applications(user_id)",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!("applications table ready");

        Ok(())
    }
}

impl ApplicationRepository for SqliteTrackerRepository {
    async fn insert(&self, application: &NewApplication) -> TrackerResult<Application> {
        let result = sqlx::query(
            r#"
            INSERT INTO applications (company, role, date_applied, status, user_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&application.company)
        .bind(&application.role)
        .bind(application.date_applied)
        .bind(application.status.as_str())
        .bind(application.owner_id.value())
        .execute(&self.pool)
        .await?;

        Ok(application
            .clone()
            .into_application(ApplicationId::new(result.last_insert_rowid())))
    }

    async fn find_by_id(
        &self,
        application_id: ApplicationId,
    ) -> TrackerResult<Option<Application>> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, company, role, date_applied, status, user_id
            FROM applications
            WHERE id = ?1
            "#,
        )
        .bind(application_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ApplicationRow::into_application))
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TrackerResult<Vec<Application>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, company, role, date_applied, status, user_id
            FROM applications
            WHERE user_id = ?1
            "#,
        )
        .bind(owner_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(ApplicationRow::into_application)
            .collect())
    }

    async fn update_status(
        &self,
        application_id: ApplicationId,
        status: &ApplicationStatus,
    ) -> TrackerResult<Option<Application>> {
        let mut tx = self.pool.begin().await?;

        let affected = sqlx::query("UPDATE applications SET status = ?1 WHERE id = ?2")
            .bind(status.as_str())
            .bind(application_id.value())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if affected == 0 {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, company, role, date_applied, status, user_id
            FROM applications
            WHERE id = ?1
            "#,
        )
        .bind(application_id.value())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(row.into_application()))
    }

    async fn delete(&self, application_id: ApplicationId) -> TrackerResult<bool> {
        let affected = sqlx::query("DELETE FROM applications WHERE id = ?1")
            .bind(application_id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    company: String,
    role: String,
    date_applied: NaiveDate,
    status: String,
    user_id: i64,
}

impl ApplicationRow {
    fn into_application(self) -> Application {
        Application {
            application_id: ApplicationId::new(self.id),
            company: self.company,
            role: self.role,
            date_applied: self.date_applied,
            status: ApplicationStatus::from_db(self.status),
            owner_id: UserId::new(self.user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteTrackerRepository {
        let pool = platform::database::connect_in_memory().await.unwrap();
        sqlx::query(
            "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, username TEXT NOT NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO users (username) VALUES ('bill'), ('ada')")
            .execute(&pool)
            .await
            .unwrap();

        let repo = SqliteTrackerRepository::new(pool);
        repo.ensure_schema().await.unwrap();
        repo
    }

    fn new_application(owner: i64, company: &str, status: &str) -> NewApplication {
        NewApplication::new(
            UserId::new(owner),
            company,
            "Engineer",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ApplicationStatus::new(status).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = repo().await;
        let created = repo
            .insert(&new_application(1, "Acme", "Applied"))
            .await
            .unwrap();

        let found = repo
            .find_by_id(created.application_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.company, "Acme");
        assert_eq!(found.date_applied.to_string(), "2024-01-01");
        assert_eq!(found.status.as_str(), "Applied");
        assert_eq!(found.owner_id.value(), 1);

        assert!(
            repo.find_by_id(ApplicationId::new(999))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_list_by_owner_is_scoped() {
        let repo = repo().await;
        repo.insert(&new_application(1, "Acme", "Applied"))
            .await
            .unwrap();
        repo.insert(&new_application(1, "Globex", "Offer"))
            .await
            .unwrap();
        repo.insert(&new_application(2, "Initech", "Applied"))
            .await
            .unwrap();

        let bills = repo.list_by_owner(UserId::new(1)).await.unwrap();
        assert_eq!(bills.len(), 2);
        assert!(bills.iter().all(|a| a.owner_id.value() == 1));

        let adas = repo.list_by_owner(UserId::new(2)).await.unwrap();
        assert_eq!(adas.len(), 1);
        assert_eq!(adas[0].company, "Initech");
    }

    #[tokio::test]
    async fn test_unknown_owner_violates_foreign_key() {
        let repo = repo().await;
        assert!(
            repo.insert(&new_application(42, "Acme", "Applied"))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_update_status_and_delete() {
        let repo = repo().await;
        let created = repo
            .insert(&new_application(1, "Acme", "Applied"))
            .await
            .unwrap();

        let updated = repo
            .update_status(
                created.application_id,
                &ApplicationStatus::new("Interview").unwrap(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status.as_str(), "Interview");
        assert_eq!(updated.company, "Acme");

        assert!(repo.delete(created.application_id).await.unwrap());
        assert!(!repo.delete(created.application_id).await.unwrap());
        assert!(
            repo.update_status(
                created.application_id,
                &ApplicationStatus::new("Offer").unwrap()
            )
            .await
            .unwrap()
            .is_none()
        );
    }
}
