//! Credential-initialization endpoint client.

use async_trait::async_trait;
use common::config::{ConnectionConfig, RetryPolicy};
use common::errors::{AppError, AppResult};
use common::models::EndpointResponse;

/// Something that can be asked to create the default credentials.
#[async_trait]
pub trait CredentialsEndpoint: Send + Sync {
    /// Issues one request. Any received response is `Ok`, whatever its status.
    async fn create_default_credentials(&self) -> AppResult<EndpointResponse>;

    /// Human-readable target, used in logs.
    fn target(&self) -> String;
}

/// HTTP implementation backed by `reqwest`.
pub struct HttpCredentialsEndpoint {
    config: ConnectionConfig,
    http_client: reqwest::Client,
}

impl HttpCredentialsEndpoint {
    /// Builds a client with the policy's connect and read timeouts.
    pub fn new(config: ConnectionConfig, policy: &RetryPolicy) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(policy.connect_timeout)
            .read_timeout(policy.read_timeout)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl CredentialsEndpoint for HttpCredentialsEndpoint {
    async fn create_default_credentials(&self) -> AppResult<EndpointResponse> {
        let response = self
            .http_client
            .post(self.config.endpoint_url())
            .basic_auth(&self.config.login, Some(&self.config.password))
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(request_failed)?;

        Ok(EndpointResponse { status, body })
    }

    fn target(&self) -> String {
        self.config.endpoint_url()
    }
}

/// Flattens the whole source chain so the cause (timeout, refused, DNS) survives.
fn request_failed(e: reqwest::Error) -> AppError {
    AppError::ExternalService(format!("{:#}", anyhow::Error::from(e)))
}
