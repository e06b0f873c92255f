//! User lookup

use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::LookupResponse,
    repositories::UserStore,
};

/// Fetch a user by the raw `id` query value.
///
/// A missing, empty or non-numeric id is reported like an unknown one.
pub async fn lookup(store: &dyn UserStore, raw_id: Option<&str>) -> ApiResult<LookupResponse> {
    let id = raw_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(ApiError::Forbidden)?;

    match store.find_by_id(id).await? {
        Some(user) => {
            info!("Found user {}", id);
            Ok(LookupResponse { user: user.into() })
        }
        None => {
            info!("No user with id {}", id);
            Err(ApiError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::User, repositories::MemoryUserStore};

    async fn seeded() -> MemoryUserStore {
        let store = MemoryUserStore::new();
        store
            .insert(&User {
                id: 0,
                name: "alice1".to_string(),
                email: "a@b.com".to_string(),
                password: "p".to_string(),
                create_at: "Wed, 01 Nov 2023 18:20:30 GMT".to_string(),
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_lookup_existing_user_includes_password() {
        let store = seeded().await;

        let response = lookup(&store, Some("0")).await.unwrap();
        assert_eq!(response.user.name, "alice1");
        assert_eq!(response.user.email, "a@b.com");
        assert_eq!(response.user.password, "p");
        assert_eq!(response.user.create_at, "Wed, 01 Nov 2023 18:20:30 GMT");
    }

    #[tokio::test]
    async fn test_lookup_missing_or_unknown_id_is_forbidden() {
        let store = seeded().await;

        for raw in [None, Some(""), Some("7"), Some("abc"), Some("-1")] {
            let err = lookup(&store, raw).await.unwrap_err();
            assert!(matches!(err, ApiError::Forbidden), "{raw:?}");
        }
    }
}
