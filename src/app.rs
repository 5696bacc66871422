use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use sqlx::PgPool;
use std::{path::PathBuf, sync::Arc};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{
    config::{AppConfig, CorsConfig, ImageHostConfig, ServerConfig, load_s3_client},
    database,
    error::{AppError, Result},
    routes,
    services::{CloudinaryHost, ImageHost, S3ImageHost},
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub images: Arc<dyn ImageHost>,
    pub upload_dir: PathBuf,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let images = image_host(&config.image_host).await;

    tokio::fs::create_dir_all(&config.upload.dir).await?;

    let state = AppState {
        db: pool,
        images,
        upload_dir: config.upload.dir.clone(),
    };

    router(state, &config.server, &config.cors)
}

pub async fn image_host(config: &ImageHostConfig) -> Arc<dyn ImageHost> {
    match config {
        ImageHostConfig::Cloudinary(cloudinary) => Arc::new(CloudinaryHost::new(cloudinary.clone())),
        ImageHostConfig::S3(s3) => {
            let client = load_s3_client(s3).await;
            Arc::new(S3ImageHost::new(
                client,
                s3.bucket.clone(),
                s3.assets_url.clone(),
            ))
        }
    }
}

pub fn router(state: AppState, server: &ServerConfig, cors: &CorsConfig) -> Result<Router> {
    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(server.max_body_size))
        .layer(cors_layer(cors)?)
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let allow_origin = match &config.allowed_origins {
        None => AllowOrigin::any(),
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| {
                    origin.parse::<HeaderValue>().map_err(|_| {
                        AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        }
    };

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(allow_origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CloudinaryConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    fn server() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_body_size: 1024,
        }
    }

    async fn state() -> AppState {
        let images = image_host(&ImageHostConfig::Cloudinary(CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "123456".to_string(),
            api_secret: "s3cr3t".to_string(),
            folder: None,
        }))
        .await;

        AppState {
            db: PgPoolOptions::new()
                .connect_lazy("postgres://postgres@localhost/productos_test")
                .unwrap(),
            images,
            upload_dir: std::env::temp_dir(),
        }
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/productos")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let app = router(state().await, &server(), &CorsConfig { allowed_origins: None }).unwrap();

        let response = app.oneshot(preflight("http://tienda.test")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn cors_list_only_echoes_known_origins() {
        let cors = CorsConfig {
            allowed_origins: Some(vec!["http://tienda.test".to_string()]),
        };
        let app = router(state().await, &server(), &cors).unwrap();

        let allowed = app.clone().oneshot(preflight("http://tienda.test")).await.unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://tienda.test"
        );

        let denied = app.oneshot(preflight("http://other.test")).await.unwrap();
        assert!(
            denied
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn invalid_cors_origin_is_a_config_error() {
        let cors = CorsConfig {
            allowed_origins: Some(vec!["bad\norigin".to_string()]),
        };

        let err = router(state().await, &server(), &cors).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let app = router(state().await, &server(), &CorsConfig { allowed_origins: None }).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/productos")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(
                        r#"{{"nombre_producto": "{}"}}"#,
                        "x".repeat(4096)
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
