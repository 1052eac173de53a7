//! Skill Commands
//!
//! Bindings for the skill catalog and the skills attached to a profile.
//! The skill endpoints only acknowledge; the stored item is rebuilt from
//! the request.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::{read_ack, ApiClient};
use crate::error::{ApiError, ApiResult};
use crate::models::{CatalogSkill, ListingSkill, SkillDraft, SkillLevel};
use crate::sync::CollectionApi;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddSkillArgs {
    #[serde(rename = "skillId")]
    skill_id: u32,
    #[serde(rename = "skillLevel")]
    skill_level: u8,
}

#[derive(Serialize)]
struct UpdateLevelArgs {
    #[serde(rename = "skillId")]
    skill_id: u32,
    #[serde(rename = "newLevel")]
    new_level: u8,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

#[derive(Clone)]
pub struct SkillApi {
    client: ApiClient,
}

impl SkillApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Full skill catalog for the add-skill search
    pub async fn fetch_catalog(&self) -> ApiResult<Vec<CatalogSkill>> {
        let path = &self.client.config().endpoints.skill_catalog;
        let catalog: Vec<CatalogSkill> = self.client.get_json(path).await?;
        log::debug!("Fetched {} catalog skills", catalog.len());
        Ok(catalog)
    }
}

#[async_trait(?Send)]
impl CollectionApi for SkillApi {
    type Item = ListingSkill;
    type Draft = SkillDraft;
    type Patch = SkillLevel;

    fn noun(&self) -> &'static str {
        "skill"
    }

    async fn list(&self) -> ApiResult<Vec<ListingSkill>> {
        self.client
            .get_json(&self.client.config().endpoints.listing_skills)
            .await
    }

    async fn create(&self, draft: &SkillDraft) -> ApiResult<ListingSkill> {
        let (Some(skill_id), Some(level)) = (draft.skill_id, draft.level.and_then(SkillLevel::from_value)) else {
            return Err(ApiError::Precondition("skill draft was not validated"));
        };
        let args = AddSkillArgs {
            skill_id,
            skill_level: level.value(),
        };
        let response = self
            .client
            .request(Method::POST, &self.client.config().endpoints.add_skill)
            .json(&args)
            .send()
            .await?;
        read_ack(response, self.noun()).await?;
        Ok(ListingSkill {
            id: skill_id,
            name: draft.name.trim().to_string(),
            level,
        })
    }

    async fn update(&self, current: &ListingSkill, level: &SkillLevel) -> ApiResult<ListingSkill> {
        let args = UpdateLevelArgs {
            skill_id: current.id,
            new_level: level.value(),
        };
        let response = self
            .client
            .request(Method::POST, &self.client.config().endpoints.update_skill_level)
            .json(&args)
            .send()
            .await?;
        read_ack(response, self.noun()).await?;
        Ok(ListingSkill {
            level: *level,
            ..current.clone()
        })
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = self
            .client
            .request(Method::POST, &self.client.config().endpoints.remove_skill)
            .json(&IdArgs { id })
            .send()
            .await?;
        read_ack(response, self.noun()).await
    }

    /// Same catalog id and same display name
    fn is_duplicate(&self, existing: &ListingSkill, draft: &SkillDraft) -> bool {
        draft.skill_id == Some(existing.id) && draft.name.trim() == existing.name
    }

    fn is_noop(&self, current: &ListingSkill, level: &SkillLevel) -> bool {
        current.level == *level
    }
}
