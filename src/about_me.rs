//! About Me Editor
//!
//! Inline editor state: the saved text plus an explicit viewing/editing
//! mode. The component drives it and performs the request.

use crate::error::{ApiResult, FieldError};
use crate::toast::Toast;
use crate::validation::{CharCounter, ABOUT_ME_MAX};

pub const EMPTY_ABOUT_ME: &str = "No information provided yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing { draft: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutMeEditor {
    saved: String,
    mode: EditorMode,
}

impl AboutMeEditor {
    pub fn new(saved: impl Into<String>) -> Self {
        Self {
            saved: saved.into(),
            mode: EditorMode::Viewing,
        }
    }

    pub fn saved(&self) -> &str {
        &self.saved
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Editing { draft } => Some(draft),
            EditorMode::Viewing => None,
        }
    }

    /// Switch to editing with the saved text as the draft
    pub fn begin_edit(&mut self) {
        self.mode = EditorMode::Editing {
            draft: self.saved.clone(),
        };
    }

    /// Ignored while viewing
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditorMode::Editing { draft } = &mut self.mode {
            *draft = text.into();
        }
    }

    pub fn cancel(&mut self) {
        self.mode = EditorMode::Viewing;
    }

    /// Counter for the draft, `None` while viewing
    pub fn counter(&self) -> Option<CharCounter> {
        self.draft().map(|draft| CharCounter::new(draft, ABOUT_ME_MAX))
    }

    /// Text shown in viewing mode
    pub fn display_text(&self) -> &str {
        if self.saved.trim().is_empty() {
            EMPTY_ABOUT_ME
        } else {
            &self.saved
        }
    }

    /// Text to send, or the reason it cannot be sent
    pub fn prepare_save(&self) -> Result<String, FieldError> {
        let draft = self.draft().unwrap_or(&self.saved).trim();
        if CharCounter::new(draft, ABOUT_ME_MAX).over_limit() {
            return Err(FieldError::TooLong {
                field: "About me",
                max: ABOUT_ME_MAX,
            });
        }
        Ok(draft.to_string())
    }

    /// Apply the server's answer; a failure keeps the draft open
    pub fn finish_save(&mut self, result: ApiResult<String>) -> Toast {
        match result {
            Ok(text) => {
                self.saved = text;
                self.mode = EditorMode::Viewing;
                Toast::success("About me updated successfully")
            }
            Err(e) => {
                log::error!("Error updating about me: {}", e);
                match e.server_message() {
                    Some(message) => Toast::error(message),
                    None => Toast::error("Failed to update about me"),
                }
            }
        }
    }
}
