mod submissions;

use axum::Router;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().nest("/kyc/submissions", submissions::routes())
}
