//! Social Link Commands

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Platform, SocialLink};
use crate::sync::CollectionApi;

#[derive(Serialize)]
struct SocialLinkArgs<'a> {
    platform: Platform,
    url: &'a str,
    display_name: Option<&'a str>,
}

impl<'a> From<&'a SocialLink> for SocialLinkArgs<'a> {
    fn from(link: &'a SocialLink) -> Self {
        Self {
            platform: link.platform,
            url: link.url.trim(),
            display_name: link.display_name.as_deref(),
        }
    }
}

#[derive(Clone)]
pub struct SocialLinkApi {
    client: ApiClient,
}

impl SocialLinkApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}{}", self.client.config().endpoints.social_links, suffix)
    }
}

#[async_trait(?Send)]
impl CollectionApi for SocialLinkApi {
    type Item = SocialLink;
    type Draft = SocialLink;
    type Patch = SocialLink;

    fn noun(&self) -> &'static str {
        "social link"
    }

    async fn list(&self) -> ApiResult<Vec<SocialLink>> {
        self.client.get_json(&self.path("")).await
    }

    async fn create(&self, link: &SocialLink) -> ApiResult<SocialLink> {
        self.client
            .send_json(Method::POST, &self.path("/add"), &SocialLinkArgs::from(link))
            .await
    }

    async fn update(&self, current: &SocialLink, link: &SocialLink) -> ApiResult<SocialLink> {
        let id = current
            .id
            .ok_or(ApiError::Precondition("social link has not been saved"))?;
        self.client
            .send_json(Method::PUT, &self.path(&format!("/{}", id)), &SocialLinkArgs::from(link))
            .await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.client
            .send_empty(Method::DELETE, &self.path(&format!("/{}/delete", id)))
            .await
    }

    fn is_noop(&self, current: &SocialLink, link: &SocialLink) -> bool {
        current == link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_serialize_platform_lowercase() {
        let link = SocialLink {
            id: Some(4),
            platform: Platform::Stackoverflow,
            url: " https://stackoverflow.com/u/1 ".to_string(),
            display_name: None,
        };
        let json = serde_json::to_value(SocialLinkArgs::from(&link)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "platform": "stackoverflow",
                "url": "https://stackoverflow.com/u/1",
                "display_name": null
            })
        );
    }

    #[test]
    fn test_update_of_unsaved_link_is_not_sent() {
        let api = SocialLinkApi::new(ApiClient::new(crate::config::AppConfig::default()));
        let link = SocialLink {
            id: None,
            platform: Platform::Github,
            url: "https://github.com/me".to_string(),
            display_name: None,
        };
        let result = futures::executor::block_on(api.update(&link, &link));
        assert_eq!(
            result,
            Err(ApiError::Precondition("social link has not been saved"))
        );
    }
}
