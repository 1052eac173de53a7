//! About Me Command

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::{ApiError, ApiResult};

#[derive(Serialize)]
struct AboutMeArgs<'a> {
    #[serde(rename = "aboutMe")]
    about_me: &'a str,
}

/// Echo of the saved text, or a business error
#[derive(Debug, Default, Deserialize)]
struct AboutMeResponse {
    #[serde(rename = "aboutMe", default)]
    about_me: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AboutMeResponse {
    fn into_saved(self, sent: &str) -> ApiResult<String> {
        match self.error {
            Some(error) => Err(ApiError::Server(error)),
            None => Ok(self.about_me.unwrap_or_else(|| sent.to_string())),
        }
    }
}

#[async_trait(?Send)]
pub trait AboutMeBackend {
    /// Store the text and return what the server saved
    async fn save_about_me(&self, text: &str) -> ApiResult<String>;
}

#[async_trait(?Send)]
impl AboutMeBackend for ApiClient {
    async fn save_about_me(&self, text: &str) -> ApiResult<String> {
        let response: AboutMeResponse = self
            .send_json(
                Method::POST,
                &self.config().endpoints.about_me,
                &AboutMeArgs { about_me: text },
            )
            .await?;
        response.into_saved(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_echo_or_sent_text() {
        let echoed: AboutMeResponse = serde_json::from_str(r#"{"aboutMe": "Backend dev"}"#).unwrap();
        assert_eq!(echoed.into_saved("ignored").unwrap(), "Backend dev");

        let bare: AboutMeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.into_saved("Sent text").unwrap(), "Sent text");
    }

    #[test]
    fn test_response_error() {
        let failed: AboutMeResponse =
            serde_json::from_str(r#"{"error": "Profile not found"}"#).unwrap();
        assert_eq!(
            failed.into_saved("x"),
            Err(ApiError::Server("Profile not found".to_string()))
        );
    }
}
