use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use livra_fcm_shared::{FCMClient, MulticastSendResult};

/// Read-only access to a user's registered device endpoints.
#[async_trait]
pub trait DeviceTokenStore: Send + Sync {
    /// Registration tokens for the user whose revocation marker is unset.
    async fn active_tokens(&self, user_id: Uuid) -> sqlx::Result<Vec<String>>;
}

/// Postgres-backed token store over `user_fcm_tokens`. Registration and
/// revocation of tokens belong to the mobile app flow; this side never
/// writes the table.
pub struct PgDeviceTokenStore {
    db: PgPool,
}

impl PgDeviceTokenStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeviceTokenStore for PgDeviceTokenStore {
    async fn active_tokens(&self, user_id: Uuid) -> sqlx::Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT token
            FROM user_fcm_tokens
            WHERE user_id = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|(token,)| token).collect())
    }
}

/// Fans one notification out to every active device of a user.
///
/// Delivery is best-effort: no error escapes this service, so the business
/// operation that triggered the notification cannot be failed by
/// notification plumbing.
pub struct PushService {
    store: Arc<dyn DeviceTokenStore>,
    fcm: Arc<FCMClient>,
}

impl PushService {
    pub fn new(store: Arc<dyn DeviceTokenStore>, fcm: Arc<FCMClient>) -> Self {
        Self { store, fcm }
    }

    /// Send `title`/`body` to every active device of `user_id`.
    ///
    /// Returns the per-device outcomes when a batch ran, `None` when nothing
    /// was sent (no eligible devices, store failure, or no access token).
    pub async fn notify_user(
        &self,
        user_id: Uuid,
        title: &str,
        body: &str,
        data: HashMap<String, String>,
    ) -> Option<MulticastSendResult> {
        let tokens = match self.store.active_tokens(user_id).await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Failed to load device tokens for user {}: {}", user_id, e);
                return None;
            }
        };

        if tokens.is_empty() {
            return None;
        }

        match self.fcm.send_multicast(&tokens, title, body, data).await {
            Ok(result) => {
                info!(
                    "Push fan-out for user {}: {} delivered, {} failed",
                    user_id, result.success_count, result.failure_count
                );
                Some(result)
            }
            Err(e) => {
                warn!("Push fan-out for user {} aborted: {}", user_id, e);
                None
            }
        }
    }
}
