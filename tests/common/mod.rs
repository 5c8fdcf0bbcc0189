// Not every util is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Extension, Router};
use tower::ServiceExt;

use file_gateway::{object_storage::ObjectStorage, routes, types::Environment};

/// Setup test environment variables with static LocalStack-style credentials
///
/// Presigning is a local computation, so signing works against these
/// credentials without a running LocalStack.
pub fn setup_test_env() {
    std::env::set_var("AWS_ACCESS_KEY_ID", "test");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "test");
    std::env::set_var("AWS_REGION", "us-east-1");

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup with the router and its real dependencies
pub struct TestContext {
    pub router: Router,
    pub environment: Environment,
    pub s3_client: Arc<S3Client>,
    pub bucket_name: String,
}

impl TestContext {
    pub async fn new() -> Self {
        setup_test_env();

        // Use development environment for tests (LocalStack endpoint)
        let environment = Environment::Development;

        let s3_config = environment.s3_client_config().await;
        let s3_client = Arc::new(S3Client::from_conf(s3_config));
        let bucket_name = environment
            .bucket_name()
            .expect("development bucket name should resolve");

        let object_storage = Arc::new(ObjectStorage::new(
            s3_client.clone(),
            bucket_name.clone(),
            environment.upload_expires_secs(),
            environment.download_expires_secs(),
        ));

        let router = routes::handler()
            .layer(Extension(environment.clone()))
            .layer(Extension(object_storage));

        Self {
            router,
            environment,
            s3_client,
            bucket_name,
        }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_request(
        &self,
        method: &str,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }
}
