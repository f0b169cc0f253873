//! `GET /categories`

use axum::{Json, extract::State};
use tracing::info;

use crate::dto::{CategoriesResponse, category_map};
use crate::error::ApiError;
use crate::state::ApiState;

/// List all categories as an id → type map.
pub async fn list_categories(
    State(state): State<ApiState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    info!("Listing categories");

    let categories = state.categories.list_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}
