//! Project Commands
//!
//! Portfolio CRUD. Mutations answer with `{success, project|error}`.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use super::{read_json, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::{Project, ProjectDraft};
use crate::sync::CollectionApi;

/// Response envelope of the project endpoints
#[derive(Debug, Deserialize)]
struct ProjectEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    project: Option<Project>,
    #[serde(default)]
    error: Option<String>,
}

impl ProjectEnvelope {
    fn into_project(self) -> ApiResult<Project> {
        match self.into_ack()? {
            Some(project) => Ok(project),
            None => Err(ApiError::Decode("response has no project".to_string())),
        }
    }

    fn into_ack(self) -> ApiResult<Option<Project>> {
        if self.success {
            Ok(self.project)
        } else {
            Err(ApiError::Server(self.error.unwrap_or_default()))
        }
    }
}

#[derive(Clone)]
pub struct ProjectApi {
    client: ApiClient,
}

impl ProjectApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}{}", self.client.config().endpoints.projects, suffix)
    }
}

#[async_trait(?Send)]
impl CollectionApi for ProjectApi {
    type Item = Project;
    type Draft = ProjectDraft;
    type Patch = ProjectDraft;

    fn noun(&self) -> &'static str {
        "project"
    }

    async fn list(&self) -> ApiResult<Vec<Project>> {
        self.client.get_json(&self.path("")).await
    }

    async fn create(&self, draft: &ProjectDraft) -> ApiResult<Project> {
        let envelope: ProjectEnvelope = self
            .client
            .send_json(Method::POST, &self.path("/add"), &draft.to_payload())
            .await?;
        envelope.into_project()
    }

    async fn update(&self, current: &Project, draft: &ProjectDraft) -> ApiResult<Project> {
        let id = current
            .id
            .ok_or(ApiError::Precondition("project has not been saved"))?;
        let envelope: ProjectEnvelope = self
            .client
            .send_json(Method::PUT, &self.path(&format!("/update/{}", id)), &draft.to_payload())
            .await?;
        envelope.into_project()
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = self
            .client
            .request(Method::DELETE, &self.path(&format!("/delete/{}", id)))
            .send()
            .await?;
        let envelope: ProjectEnvelope = read_json(response).await?;
        envelope.into_ack().map(drop)
    }

    fn is_noop(&self, current: &Project, draft: &ProjectDraft) -> bool {
        let payload = draft.to_payload();
        current.title == payload.title
            && current.description == payload.description
            && current.technologies == payload.technologies
            && current.github_link == payload.github_link
            && current.demo_link == payload.demo_link
    }
}
