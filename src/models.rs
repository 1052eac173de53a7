//! Frontend Models
//!
//! Data structures matching the profile endpoints' JSON.

use serde::{Deserialize, Serialize};

use crate::sync::CollectionItem;

/// Skill catalog entry (`GET /get_skills`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSkill {
    pub id: u32,
    pub name: String,
}

/// Proficiency level, shown as three bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn value(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(SkillLevel::Beginner),
            2 => Some(SkillLevel::Intermediate),
            3 => Some(SkillLevel::Advanced),
            _ => None,
        }
    }

    /// Parse a form value such as `"2"`
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::from_value)
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("invalid skill level {}", value))
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.value()
    }
}

/// Skill attached to a profile or job listing.
///
/// `id` is the catalog id of the skill, so it is known before the skill is
/// added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSkill {
    pub id: u32,
    pub name: String,
    pub level: SkillLevel,
}

/// Add-skill form contents.
///
/// `level` stays raw so an unselected or out-of-range value can be reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillDraft {
    pub skill_id: Option<u32>,
    pub name: String,
    pub level: Option<u8>,
}

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(rename = "githubLink", default)]
    pub github_link: Option<String>,
    #[serde(rename = "demoLink", default)]
    pub demo_link: Option<String>,
}

/// Add/edit project form contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: String,
    pub demo_link: String,
}

impl ProjectDraft {
    /// Prefill an edit form from a saved project
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            github_link: project.github_link.clone().unwrap_or_default(),
            demo_link: project.demo_link.clone().unwrap_or_default(),
        }
    }

    /// Request body: trimmed text, blank links sent as `null`
    pub fn to_payload(&self) -> ProjectPayload {
        fn link(raw: &str) -> Option<String> {
            let raw = raw.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        }
        ProjectPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            technologies: self.technologies.clone(),
            github_link: link(&self.github_link),
            demo_link: link(&self.demo_link),
        }
    }

    /// Add a technology badge; blank input and repeats are ignored
    pub fn add_technology(&mut self, raw: &str) -> bool {
        let tech = raw.trim();
        if tech.is_empty() || self.technologies.iter().any(|t| t == tech) {
            return false;
        }
        self.technologies.push(tech.to_string());
        true
    }

    pub fn remove_technology(&mut self, tech: &str) {
        self.technologies.retain(|t| t != tech);
    }
}

/// JSON body for `POST /projects/add` and `PUT /projects/update/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(rename = "githubLink")]
    pub github_link: Option<String>,
    #[serde(rename = "demoLink")]
    pub demo_link: Option<String>,
}

/// Social platform of a profile link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Platform {
    Website,
    Github,
    Linkedin,
    Gitlab,
    Stackoverflow,
    Medium,
    Devto,
    Portfolio,
    #[default]
    Other,
}

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::Website,
        Platform::Github,
        Platform::Linkedin,
        Platform::Gitlab,
        Platform::Stackoverflow,
        Platform::Medium,
        Platform::Devto,
        Platform::Portfolio,
        Platform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Website => "website",
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Gitlab => "gitlab",
            Platform::Stackoverflow => "stackoverflow",
            Platform::Medium => "medium",
            Platform::Devto => "devto",
            Platform::Portfolio => "portfolio",
            Platform::Other => "other",
        }
    }

    /// Unknown names map to `Other`
    pub fn from_name(name: &str) -> Self {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .unwrap_or(Platform::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Website => "Personal Website",
            Platform::Github => "GitHub",
            Platform::Linkedin => "LinkedIn",
            Platform::Gitlab => "GitLab",
            Platform::Stackoverflow => "Stack Overflow",
            Platform::Medium => "Medium",
            Platform::Devto => "Dev.to",
            Platform::Portfolio => "Portfolio",
            Platform::Other => "Other",
        }
    }

    /// Bootstrap icon name
    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Website => "globe",
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Gitlab => "gitlab",
            Platform::Stackoverflow => "stack-overflow",
            Platform::Medium => "medium",
            Platform::Devto => "dev",
            Platform::Portfolio => "briefcase",
            Platform::Other => "link-45deg",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Platform::Website | Platform::Other => "text-secondary",
            Platform::Github | Platform::Medium | Platform::Devto => "text-dark",
            Platform::Linkedin => "text-primary",
            Platform::Gitlab => "text-danger",
            Platform::Stackoverflow => "text-warning",
            Platform::Portfolio => "text-info",
        }
    }
}

impl From<String> for Platform {
    fn from(name: String) -> Self {
        Platform::from_name(&name)
    }
}

/// Social profile link; `id` is `None` until the server stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub platform: Platform,
    pub url: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SocialLink {
    /// Blank row added from the edit modal
    pub fn unsaved() -> Self {
        Self {
            id: None,
            platform: Platform::Other,
            url: String::new(),
            display_name: None,
        }
    }

    /// Display name, falling back to the URL
    pub fn shown_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.url,
        }
    }
}

/// Geocoder search result (Nominatim `format=json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    pub place_id: u64,
    pub display_name: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
}

/// Data the server template embeds in the page (`window.PROFILE_DATA`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSeed {
    pub about_me: String,
    pub location: String,
    /// Projects rendered with the page; `None` means fetch them
    pub projects: Option<Vec<Project>>,
}

// ========================
// Collection Items
// ========================

impl CollectionItem for ListingSkill {
    type Id = u32;

    fn id(&self) -> Option<u32> {
        Some(self.id)
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl CollectionItem for Project {
    type Id = u32;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl CollectionItem for SocialLink {
    type Id = u32;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn label(&self) -> String {
        self.platform.label().to_string()
    }
}
