//! SQLite Repository Implementation

use kernel::id::UserId;
use sqlx::SqlitePool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    access_token::AccessToken, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist yet
    pub async fn ensure_schema(&self) -> AuthResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                token    TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("users table ready");

        Ok(())
    }
}

impl UserRepository for SqliteAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password, token)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password.as_str())
        .bind(user.token.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // Lost a race with a concurrent signup for the same name
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                AuthError::UsernameTaken
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(user
            .clone()
            .into_user(UserId::new(result.last_insert_rowid())))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password, token
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_token(&self, token: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password, token
            FROM users
            WHERE token = ?1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)",
        )
        .bind(user_name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    token: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::new(self.id),
            user_name: UserName::from_db(self.username),
            password: UserPassword::from_db(self.password),
            token: AccessToken::from_db(self.token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteAuthRepository {
        let pool = platform::database::connect_in_memory().await.unwrap();
        let repo = SqliteAuthRepository::new(pool);
        repo.ensure_schema().await.unwrap();
        repo
    }

    fn new_user(name: &str) -> NewUser {
        NewUser::new(
            UserName::new(name).unwrap(),
            UserPassword::new("1234").unwrap(),
            32,
        )
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = repo().await;
        let a = repo.create(&new_user("bill")).await.unwrap();
        let b = repo.create(&new_user("ada")).await.unwrap();
        assert_ne!(a.user_id, b.user_id);
        assert_eq!(a.user_name.as_str(), "bill");
    }

    #[tokio::test]
    async fn test_duplicate_insert_maps_to_username_taken() {
        let repo = repo().await;
        repo.create(&new_user("bill")).await.unwrap();
        let err = repo.create(&new_user("bill")).await.unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_find_by_user_name_and_token() {
        let repo = repo().await;
        let created = repo.create(&new_user("bill")).await.unwrap();

        let by_name = repo
            .find_by_user_name(&UserName::new("bill").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_name.user_id, created.user_id);
        assert!(by_name.password.matches("1234"));

        let by_token = repo
            .find_by_token(created.token.as_str())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_token.user_id, created.user_id);

        assert!(repo.find_by_token("nope").await.unwrap().is_none());
        assert!(
            repo.find_by_user_name(&UserName::new("Bill").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_exists_by_user_name() {
        let repo = repo().await;
        let name = UserName::new("bill").unwrap();
        assert!(!repo.exists_by_user_name(&name).await.unwrap());
        repo.create(&new_user("bill")).await.unwrap();
        assert!(repo.exists_by_user_name(&name).await.unwrap());
    }
}
