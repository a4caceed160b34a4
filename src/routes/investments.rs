use axum::extract::{Path, State};
use axum::{Json, Router};
use axum::routing::{get, post};
use http::StatusCode;
use tracing::{info, error};

use crate::errors::AppError;
use crate::models::{CreateInvestment, Investment, InvestmentWithProjection, UpdateInvestment};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/investments", post(create_investment))
        .route(
            "/investments/:id",
            get(get_investment).put(update_investment).delete(delete_investment),
        )
        .route("/users/:user_id/investments", get(list_investments))
}

pub async fn list_investments(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<InvestmentWithProjection>>, AppError> {
    info!("GET /users/{}/investments - Fetching investments", user_id);
    let investments = state.investments.list_by_owner(user_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investments for user {}: {}", user_id, e);
            e
        })?;
    Ok(Json(investments))
}

pub async fn get_investment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Investment>, AppError> {
    info!("GET /investments/{} - Fetching investment", id);
    let investment = state.investments.get_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investment {}: {}", id, e);
            e
        })?
        .ok_or_else(|| {
            error!("Investment {} not found", id);
            AppError::NotFound(format!("Investment {} not found", id))
        })?;
    Ok(Json(investment))
}

#[axum::debug_handler]
pub async fn create_investment(
    State(state): State<AppState>,
    Json(data): Json<CreateInvestment>,
) -> Result<(StatusCode, Json<Investment>), AppError> {
    info!("POST /investments - Creating investment for user {}", data.user_id);
    let investment = state.investments.create(data)
        .await
        .map_err(|e| {
            error!("Failed to create investment: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(investment)))
}

pub async fn update_investment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateInvestment>,
) -> Result<Json<Investment>, AppError> {
    info!("PUT /investments/{} - Updating investment", id);
    let investment = state.investments.update(id, data)
        .await
        .map_err(|e| {
            error!("Failed to update investment {}: {}", id, e);
            e
        })?;
    Ok(Json(investment))
}

pub async fn delete_investment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Investment>, AppError> {
    info!("DELETE /investments/{} - Deleting investment", id);
    let investment = state.investments.delete(id)
        .await
        .map_err(|e| {
            error!("Failed to delete investment {}: {}", id, e);
            e
        })?;
    Ok(Json(investment))
}
