//! Authenticated Principal
//!
//! The identity that the auth middleware resolves from a bearer token and
//! hands to downstream handlers through request extensions.

use crate::id::UserId;

/// The user on whose behalf a request runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub username: String,
}

impl Principal {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Whether this principal owns a record with the given owner id
    pub fn owns(&self, owner_id: UserId) -> bool {
        self.user_id == owner_id
    }
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| crate::error::app_error::AppError::unauthorized("Not authenticated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owns() {
        let principal = Principal::new(UserId::new(1), "bill");
        assert!(principal.owns(UserId::new(1)));
        assert!(!principal.owns(UserId::new(2)));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_extractor_rejects_without_extension() {
        use axum::extract::FromRequestParts;

        let (mut parts, _) = http::Request::new(()).into_parts();
        let err = Principal::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);

        let principal = Principal::new(UserId::new(9), "ada");
        parts.extensions.insert(principal.clone());
        let resolved = Principal::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(resolved, principal);
    }
}
