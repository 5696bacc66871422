use serde::{Deserialize, Serialize};

/// A row of `producto1`, serialized with its column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    #[serde(rename = "identificador")]
    #[sqlx(rename = "identificador")]
    pub id: i32,
    #[serde(rename = "nombre_producto")]
    #[sqlx(rename = "nombre_producto")]
    pub name: String,
    #[serde(rename = "descripcion_producto")]
    #[sqlx(rename = "descripcion_producto")]
    pub description: Option<String>,
    #[serde(rename = "imagen_producto")]
    #[sqlx(rename = "imagen_producto")]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(rename = "nombre_producto")]
    pub name: Option<String>,
    #[serde(rename = "descripcion_producto")]
    pub description: Option<String>,
    #[serde(rename = "imagen_url")]
    pub image_url: Option<String>,
}

/// Every field is written on update; an omitted field becomes NULL.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(rename = "nombre_producto")]
    pub name: Option<String>,
    #[serde(rename = "descripcion_producto")]
    pub description: Option<String>,
    #[serde(rename = "imagen_producto")]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedProduct {
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
