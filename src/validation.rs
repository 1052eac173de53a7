//! Form Validation
//!
//! Field-presence checks run before any request is sent.

use crate::error::FieldError;
use crate::models::{ProjectDraft, SkillDraft, SkillLevel, SocialLink};

pub const PROJECT_TITLE_MAX: usize = 100;
pub const PROJECT_DESCRIPTION_MAX: usize = 250;
pub const ABOUT_ME_MAX: usize = 250;

/// Anything that can be checked before it is sent to the server
pub trait Validate {
    /// All failing fields; empty when valid
    fn validate(&self) -> Vec<FieldError>;
}

impl Validate for SkillDraft {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() || self.skill_id.is_none() {
            errors.push(FieldError::NameRequired);
        }
        if self.level.and_then(SkillLevel::from_value).is_none() {
            errors.push(FieldError::LevelRequired);
        }
        errors
    }
}

impl Validate for SkillLevel {
    fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}

impl Validate for ProjectDraft {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::TitleRequired);
        } else if char_len(self.title.trim()) > PROJECT_TITLE_MAX {
            errors.push(FieldError::TooLong { field: "Title", max: PROJECT_TITLE_MAX });
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::DescriptionRequired);
        } else if char_len(self.description.trim()) > PROJECT_DESCRIPTION_MAX {
            errors.push(FieldError::TooLong {
                field: "Description",
                max: PROJECT_DESCRIPTION_MAX,
            });
        }
        errors
    }
}

impl Validate for SocialLink {
    fn validate(&self) -> Vec<FieldError> {
        if self.url.trim().is_empty() {
            vec![FieldError::UrlRequired]
        } else {
            Vec::new()
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// "N characters remaining" counter under a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub remaining: i64,
}

impl CharCounter {
    pub fn new(text: &str, max: usize) -> Self {
        Self {
            remaining: max as i64 - char_len(text) as i64,
        }
    }

    pub fn over_limit(&self) -> bool {
        self.remaining < 0
    }

    pub fn label(&self) -> String {
        format!("{} characters remaining", self.remaining)
    }
}
