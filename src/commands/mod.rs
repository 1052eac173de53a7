//! REST Command Wrappers
//!
//! Frontend bindings to the profile endpoints, organized by domain.
//! Every mutating request carries the CSRF header.

mod about_me;
mod location;
mod project;
mod skill;
mod social;

use std::rc::Rc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{self, AppConfig};
use crate::error::{ApiError, ApiResult};

pub use about_me::AboutMeBackend;
pub use location::LocationBackend;
pub use project::ProjectApi;
pub use skill::SkillApi;
pub use social::SocialLinkApi;

/// Header Django reads the anti-forgery token from
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Shared HTTP client bound to the page configuration
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Rc<AppConfig>,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let token = if method == Method::GET {
            None
        } else {
            config::csrf_token()
        };
        self.request_with_token(method, path, token)
    }

    /// Builder for `path`; mutating methods carry `token` in the CSRF header
    fn request_with_token(&self, method: Method, path: &str, token: Option<String>) -> RequestBuilder {
        let mutating = method != Method::GET;
        let builder = self.http.request(method, self.config.url(path));
        if !mutating {
            return builder;
        }
        match token {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => {
                log::warn!("No CSRF token on page, sending {} without it", path);
                builder
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        read_json(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, path).json(body).send().await?;
        read_json(response).await
    }

    /// Request whose success is signalled by the status alone
    async fn send_empty(&self, method: Method, path: &str) -> ApiResult<()> {
        let response = self.request(method, path).send().await?;
        check_status(&response)
    }
}

fn check_status(response: &Response) -> ApiResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status { status: status.as_u16() })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `{success?, error?}` body returned by endpoints that only acknowledge
#[derive(Debug, Default, Deserialize)]
struct Ack {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

impl Ack {
    fn into_result(self, noun: &str) -> ApiResult<()> {
        if let Some(error) = self.error {
            return Err(ApiError::Server(error));
        }
        match self.success {
            Some(false) => Err(ApiError::Server(format!("The server rejected the {}", noun))),
            _ => Ok(()),
        }
    }
}

/// Decode an acknowledgement.
///
/// An empty body or JSON without an ack object counts as success; a body
/// that is not JSON at all (a login page, a proxy error) does not.
fn parse_ack(body: &str, noun: &str) -> ApiResult<()> {
    if body.trim().is_empty() {
        return Ok(());
    }
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match serde_json::from_value::<Ack>(value) {
        Ok(ack) => ack.into_result(noun),
        Err(_) => Ok(()),
    }
}

async fn read_ack(response: Response, noun: &str) -> ApiResult<()> {
    check_status(&response)?;
    let body = response.text().await?;
    parse_ack(&body, noun)
}
