use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::DataDto,
    server::{error::AppError, service::account::AccountService, state::AppState},
};

/// GET /accounts/{id} - Get the composed account record
///
/// Returns the account with its role, profiles, avatar, and statistics under
/// the fixed read projection: no password hash, no API key, no internal
/// foreign-key columns; related commissions as id lists ordered newest-first.
///
/// # Path Parameters
/// - `id`: Account id (i32)
///
/// # Returns
/// - `200 OK`: Composed account record
/// - `404 Not Found`: No account with that id
/// - `500 Internal Server Error`: Database error during composition
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);

    let Some(detail) = account_service.get_account_detail(id).await? else {
        return Err(AppError::NotFound("No such account was found.".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(DataDto {
            success: true,
            message: "Record retrieved.".to_string(),
            data: detail.into_dto(),
        }),
    ))
}
