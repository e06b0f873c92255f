//! User registration

use chrono::{DateTime, FixedOffset, Utc};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{RegisteredUser, Registration, RegistrationData, RegistrationResponse, User},
    repositories::UserStore,
};

/// Display format of the creation timestamp, e.g. `Wed, 01 Nov 2023 18:20:30 GMT`.
/// The digits are local to the configured offset even though the suffix reads GMT.
const CREATED_AT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Render `now` in the service's display timezone
pub fn format_created_at(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset)
        .format(CREATED_AT_FORMAT)
        .to_string()
}

/// Register a validated user.
///
/// The new id is the row count read just before the insert. Two registrations
/// racing between the count and the insert receive the same id.
pub async fn register(
    store: &dyn UserStore,
    registration: Registration,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> ApiResult<RegistrationResponse> {
    if store.email_exists(&registration.email).await? {
        info!("Email already registered: {}", registration.email);
        return Err(ApiError::Conflict);
    }
    info!("Email not registered yet: {}", registration.email);

    let id = store.count_users().await?;
    let create_at = format_created_at(now, offset);
    info!("Assigning id {} at {}", id, create_at);

    let user = User {
        id,
        name: registration.name,
        email: registration.email,
        password: registration.password,
        create_at,
    };
    store.insert(&user).await?;
    info!("User {} stored", user.id);

    Ok(RegistrationResponse {
        data: RegistrationData {
            user: RegisteredUser {
                id: user.id,
                name: user.name,
                email: user.email,
            },
            request_date: user.create_at,
        },
    })
}
