//! UI Components
//!
//! Profile panels and the shared pieces they are built from.

mod about_me_card;
mod delete_confirm_button;
mod location_search;
mod modal_frame;
mod projects_panel;
mod skill_search;
mod skills_panel;
mod social_links_panel;
mod toast_host;

pub use about_me_card::AboutMeCard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use location_search::LocationField;
pub use projects_panel::ProjectsPanel;
pub use skills_panel::SkillsPanel;
pub use social_links_panel::SocialLinksPanel;
pub use toast_host::ToastHost;
