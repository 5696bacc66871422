use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateProductRequest, CreatedProduct, MessageResponse, Product, UpdateProductRequest},
    queries::product_queries,
};

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreatedProduct>)> {
    let id = product_queries::create(&state.db, &payload).await?;

    Ok((StatusCode::CREATED, Json(CreatedProduct { id })))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::find_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(AppError::product_not_found)?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    if product_queries::update(&state.db, id, &payload).await? == 0 {
        return Err(AppError::product_not_found());
    }

    // The row can vanish between the two statements.
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(AppError::product_not_found)?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    if product_queries::delete(&state.db, id).await? == 0 {
        return Err(AppError::product_not_found());
    }

    Ok(Json(MessageResponse {
        message: "Producto eliminado correctamente".to_string(),
    }))
}
