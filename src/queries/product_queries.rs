use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateProductRequest, Product, UpdateProductRequest},
};

pub async fn create(pool: &PgPool, req: &CreateProductRequest) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO producto1 (nombre_producto, descripcion_producto, imagen_producto)
        VALUES ($1, $2, $3)
        RETURNING identificador
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.image_url)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM producto1")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM producto1 WHERE identificador = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Returns the number of rows affected.
pub async fn update(pool: &PgPool, id: i32, req: &UpdateProductRequest) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE producto1
        SET
            nombre_producto = $1,
            descripcion_producto = $2,
            imagen_producto = $3
        WHERE identificador = $4
        "#,
    )
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.image_url)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM producto1 WHERE identificador = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
