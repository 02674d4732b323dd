//! `gloo-net` transport for the host authentication endpoints.

use crate::core::errors::extract_server_error;
use crate::core::ports::{AuthTransport, LoginRequest, SetValueRequest};
use crate::error::TransportError;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct HttpTransport;

impl HttpTransport {
    async fn rejection(response: Response) -> TransportError {
        let status = response.status();
        match response.text().await {
            Ok(body) => TransportError::Rejected {
                status,
                raw: extract_server_error(&body),
            },
            Err(err) => TransportError::Network {
                detail: err.to_string(),
            },
        }
    }
}

#[async_trait(?Send)]
impl AuthTransport for HttpTransport {
    async fn login(&self, request: LoginRequest) -> Result<(), TransportError> {
        let response = Request::post(&request.url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .header(&request.csrf_header, &request.csrf_token)
            .body(request.body)
            .send()
            .await
            .map_err(network)?;
        if response.ok() {
            return Ok(());
        }
        Err(Self::rejection(response).await)
    }

    async fn set_value(&self, request: SetValueRequest) -> Result<(), TransportError> {
        let response = Request::post(&request.url)
            .header("Accept", "application/json")
            .header(&request.csrf_header, &request.csrf_token)
            .json(&request.payload)
            .map_err(|err| TransportError::Encode {
                detail: err.to_string(),
            })?
            .send()
            .await
            .map_err(network)?;
        if response.ok() {
            return Ok(());
        }
        Err(Self::rejection(response).await)
    }
}

fn network(err: gloo_net::Error) -> TransportError {
    TransportError::Network {
        detail: err.to_string(),
    }
}
