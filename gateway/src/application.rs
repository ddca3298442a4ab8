use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{
    handler::Handler,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    BoxError, Extension, Router, Server,
};
use primitives::config::Environment;
use serde::{Deserialize, Deserializer};
use slog::{error, info, Logger};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// an error used when deserializing a [`EnvConfig`] instance from environment variables
/// see [`EnvConfig::from_env()`]
pub use envy::Error as EnvError;

use crate::{
    db::DocumentStore,
    routes::{
        assets::list_assets,
        cluster::{list_app_ids, list_store_codes},
        health::health,
        not_found,
    },
    Application,
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IP_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0));
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017/crosspromo_assets";
pub const DEFAULT_MONGODB_COLLECTION: &str = "appdynamicdatas";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Deserialize, Clone)]
pub struct EnvConfig {
    /// Defaults to `Development`: [`Environment::default()`]
    #[serde(default)]
    pub env: Environment,
    /// The port on which the Gateway REST API will be accessible.
    #[serde(default = "default_port")]
    /// Defaults to `3000`: [`DEFAULT_PORT`]
    pub port: u16,
    /// The address on which the Gateway REST API will be accessible.
    /// `0.0.0.0` can be used for Docker.
    /// `127.0.0.1` can be used for locally running servers.
    #[serde(default = "default_ip_addr")]
    /// Defaults to `0.0.0.0`: [`DEFAULT_IP_ADDR`]
    pub ip_addr: IpAddr,
    /// Defaults to a locally running MongoDB server: [`DEFAULT_MONGODB_URL`]
    #[serde(default = "default_mongodb_url")]
    pub mongodb_url: String,
    #[serde(default = "default_mongodb_collection")]
    pub mongodb_collection: String,
    /// The only origin allowed to make Cross-Origin requests.
    #[serde(deserialize_with = "header_value", default = "default_cors_origin")]
    /// Defaults to the local dashboard: [`DEFAULT_CORS_ORIGIN`]
    pub cors_origin: HeaderValue,
}

impl EnvConfig {
    /// Deserialize the application [`EnvConfig`] from Environment variables.
    pub fn from_env() -> Result<Self, EnvError> {
        envy::from_env()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip_addr, self.port)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            port: default_port(),
            ip_addr: default_ip_addr(),
            mongodb_url: default_mongodb_url(),
            mongodb_collection: default_mongodb_collection(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn header_value<'de, D>(deserializer: D) -> Result<HeaderValue, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    HeaderValue::from_str(&value).map_err(serde::de::Error::custom)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_ip_addr() -> IpAddr {
    DEFAULT_IP_ADDR
}
fn default_mongodb_url() -> String {
    DEFAULT_MONGODB_URL.to_string()
}
fn default_mongodb_collection() -> String {
    DEFAULT_MONGODB_COLLECTION.to_string()
}
fn default_cors_origin() -> HeaderValue {
    HeaderValue::from_static(DEFAULT_CORS_ORIGIN)
}

/// Allows only the given origin, with credentials.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([CONTENT_TYPE]))
        .allow_credentials(true)
}

/// The Gateway REST API
pub fn router<S: DocumentStore + 'static>(app: Arc<Application<S>>) -> Router {
    let cors = cors_layer(app.config.cors_origin.clone());

    Router::new()
        .route("/api/assets", get(list_assets::<S>))
        .route("/api/storeCodes", get(list_store_codes::<S>))
        .route("/api/appIds", get(list_app_ids::<S>))
        .route("/api/health", get(health))
        .fallback(not_found.into_service())
        .layer(
            // keeps the order from top to bottom!
            ServiceBuilder::new().layer(Extension(app)).layer(cors),
        )
}

impl<S: DocumentStore + 'static> Application<S> {
    /// Starts the `axum` `Server` and serves until `Ctrl+C` is received.
    pub async fn run(self, socket_addr: SocketAddr) -> Result<(), BoxError> {
        let logger = self.logger.clone();
        info!(&logger, "Listening on socket address: {}!", socket_addr; "cors_origin" => ?self.config.cors_origin);

        let server = Server::try_bind(&socket_addr)?
            .serve(router(Arc::new(self)).into_make_service())
            .with_graceful_shutdown(shutdown_signal(logger.clone()));

        if let Err(e) = server.await {
            error!(&logger, "server error: {}", e; "main" => "run");
        }

        Ok(())
    }
}

async fn shutdown_signal(logger: Logger) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(&logger, "Shutting down"),
        Err(error) => error!(&logger, "Failed to listen for the shutdown signal"; "error" => %error),
    }
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        http::{
            header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN},
            Request, StatusCode,
        },
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::test_util::{body_to_string, setup_dummy_app};

    fn env_vars(vars: &[(&str, &str)]) -> Vec<(String, String)> {
        vars.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn config_defaults() {
        let config = envy::from_iter::<_, EnvConfig>(env_vars(&[])).expect("Should deserialize");

        assert_eq!(Environment::Development, config.env);
        assert_eq!(
            SocketAddr::from(([0, 0, 0, 0], 3000)),
            config.socket_addr()
        );
        assert_eq!(DEFAULT_MONGODB_URL, config.mongodb_url);
        assert_eq!(DEFAULT_MONGODB_COLLECTION, config.mongodb_collection);
        assert_eq!(default_cors_origin(), config.cors_origin);
    }

    #[test]
    fn config_from_environment_variables() {
        let config = envy::from_iter::<_, EnvConfig>(env_vars(&[
            ("ENV", "production"),
            ("PORT", "8080"),
            ("IP_ADDR", "127.0.0.1"),
            ("MONGODB_URL", "mongodb://mongo:27017/waterfalls"),
            ("MONGODB_COLLECTION", "documents"),
            ("CORS_ORIGIN", "https://dashboard.example.com"),
        ]))
        .expect("Should deserialize");

        assert_eq!(Environment::Production, config.env);
        assert_eq!(
            SocketAddr::from(([127, 0, 0, 1], 8080)),
            config.socket_addr()
        );
        assert_eq!("mongodb://mongo:27017/waterfalls", config.mongodb_url);
        assert_eq!("documents", config.mongodb_collection);
        assert_eq!(
            HeaderValue::from_static("https://dashboard.example.com"),
            config.cors_origin
        );
    }

    #[test]
    fn malformed_port_is_an_error() {
        let result = envy::from_iter::<_, EnvConfig>(env_vars(&[("PORT", "three thousand")]));

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn cors_allows_the_configured_origin_with_credentials() {
        let app = setup_dummy_app(vec![]);

        let request = Request::builder()
            .uri("/api/health")
            .header(ORIGIN, DEFAULT_CORS_ORIGIN)
            .body(Body::empty())
            .expect("Should build Request");

        let response = router(app).oneshot(request).await.expect("Should respond");

        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(
            Some(&HeaderValue::from_static(DEFAULT_CORS_ORIGIN)),
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN)
        );
        assert_eq!(
            Some(&HeaderValue::from_static("true")),
            response.headers().get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = setup_dummy_app(vec![]);

        let request = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .expect("Should build Request");

        let response = router(app).oneshot(request).await.expect("Should respond");

        assert_eq!(StatusCode::NOT_FOUND, response.status());
        assert_eq!(r#"{"error":"Not found"}"#, body_to_string(response).await);
    }
}
