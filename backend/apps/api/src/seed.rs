//! Optional startup user

use auth::application::{SignUpInput, SignUpUseCase};
use auth::{AuthConfig, AuthError, SqliteAuthRepository};
use std::sync::Arc;

use crate::config::SeedUser;

/// Sign up the seed user unless the name is already registered
pub async fn ensure_seed_user(repo: SqliteAuthRepository, seed: &SeedUser) -> anyhow::Result<()> {
    let use_case = SignUpUseCase::new(Arc::new(repo), Arc::new(AuthConfig::default()));

    let input = SignUpInput {
        user_name: seed.username.clone(),
        password: seed.password.clone(),
    };

    match use_case.execute(input).await {
        Ok(user) => {
            tracing::info!(user_id = %user.user_id, username = %seed.username, "Seed user created");
            Ok(())
        }
        Err(AuthError::UsernameTaken) => {
            tracing::info!(username = %seed.username, "Seed user already exists");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = platform::database::connect_in_memory().await.unwrap();
        let repo = SqliteAuthRepository::new(pool.clone());
        repo.ensure_schema().await.unwrap();

        let seed = SeedUser {
            username: "bill".to_string(),
            password: "1234".to_string(),
        };
        ensure_seed_user(repo.clone(), &seed).await.unwrap();
        ensure_seed_user(repo, &seed).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
