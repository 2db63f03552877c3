/// Livra FCM Shared Library
///
/// This library provides the Firebase Cloud Messaging (FCM) client used to
/// deliver push notifications to courier devices across the Livra backend.
///
/// It handles:
/// - Service-account assertion signing (RS256)
/// - OAuth2 jwt-bearer token exchange with caching
/// - Single and multicast message delivery with per-device failure isolation

pub mod client;
pub mod errors;
pub mod models;

pub use client::FCMClient;
pub use errors::FCMError;
pub use models::{FCMSendResult, MulticastSendResult, ServiceAccountKey};
