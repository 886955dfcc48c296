use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{account, auth},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/accounts/{id}", get(account::get_one))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/register-request", post(auth::register_request))
        .route("/auth/activation", get(auth::activation))
        .route("/auth/me", get(auth::me))
}
