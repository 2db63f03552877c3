/// Livra KYC Admin Backend
///
/// Administrative handlers for reviewing courier identity-verification
/// submissions: listing, fetching, approving, and pushing the approval
/// notification to the applicant's devices.
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

use std::sync::Arc;

use crate::config::Config;
use crate::db::Database;
use crate::services::PushService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub push: Arc<PushService>,
}
