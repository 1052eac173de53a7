//! Render Projections
//!
//! Pure functions from a collection to the rows a panel displays. Panels
//! call them again after every change instead of patching the DOM.

use crate::models::{CatalogSkill, ListingSkill, Project, SkillLevel, SocialLink};

/// One row of the skills list
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    pub id: u32,
    pub dom_id: String,
    pub name: String,
    pub level: SkillLevel,
    pub level_label: &'static str,
    pub bar_class: &'static str,
    pub bar_width: &'static str,
}

/// Bootstrap progress-bar colour and width for a level
pub fn level_bar(level: SkillLevel) -> (&'static str, &'static str) {
    match level {
        SkillLevel::Beginner => ("bg-success", "33%"),
        SkillLevel::Intermediate => ("bg-warning", "66%"),
        SkillLevel::Advanced => ("bg-danger", "100%"),
    }
}

pub fn skill_rows(skills: &[ListingSkill]) -> Vec<SkillRow> {
    skills
        .iter()
        .map(|skill| {
            let (bar_class, bar_width) = level_bar(skill.level);
            SkillRow {
                id: skill.id,
                dom_id: format!("skill-{}", skill.id),
                name: skill.name.clone(),
                level: skill.level,
                level_label: skill.level.label(),
                bar_class,
                bar_width,
            }
        })
        .collect()
}

/// The three clickable bars of the level picker.
///
/// Bars up to the selected level are filled with that level's colour.
pub fn level_bars(selected: Option<SkillLevel>) -> Vec<(SkillLevel, &'static str)> {
    let (filled, _) = selected.map(level_bar).unwrap_or(("bg-secondary", ""));
    SkillLevel::ALL
        .into_iter()
        .map(|bar| {
            let class = match selected {
                Some(level) if bar.value() <= level.value() => filled,
                _ => "bg-light",
            };
            (bar, class)
        })
        .collect()
}

/// Catalog entries whose name contains `query`, ignoring case
pub fn filter_catalog<'a>(catalog: &'a [CatalogSkill], query: &str) -> Vec<&'a CatalogSkill> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|skill| needle.is_empty() || skill.name.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: Option<u32>,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|project| ProjectCard {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            github_link: project.github_link.clone().filter(|l| !l.trim().is_empty()),
            demo_link: project.demo_link.clone().filter(|l| !l.trim().is_empty()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLinkRow {
    pub id: Option<u32>,
    pub icon_class: String,
    pub label: &'static str,
    pub name: String,
    pub url: String,
}

pub fn social_link_rows(links: &[SocialLink]) -> Vec<SocialLinkRow> {
    links
        .iter()
        .map(|link| SocialLinkRow {
            id: link.id,
            icon_class: format!("bi bi-{} {} me-2", link.platform.icon(), link.platform.color()),
            label: link.platform.label(),
            name: link.shown_name().to_string(),
            url: link.url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;

    fn skill(id: u32, name: &str, level: SkillLevel) -> ListingSkill {
        ListingSkill { id, name: name.to_string(), level }
    }

    #[test]
    fn test_skill_rows_keep_order_and_bars() {
        let rows = skill_rows(&[
            skill(5, "Rust", SkillLevel::Advanced),
            skill(2, "SQL", SkillLevel::Beginner),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].dom_id, "skill-5");
        assert_eq!((rows[0].bar_class, rows[0].bar_width), ("bg-danger", "100%"));
        assert_eq!((rows[1].bar_class, rows[1].bar_width), ("bg-success", "33%"));
        assert_eq!(level_bar(SkillLevel::Intermediate), ("bg-warning", "66%"));
    }

    #[test]
    fn test_removed_skill_not_rendered() {
        let mut skills = vec![skill(1, "Rust", SkillLevel::Beginner), skill(2, "Go", SkillLevel::Beginner)];
        skills.retain(|s| s.id != 1);
        assert!(skill_rows(&skills).iter().all(|row| row.id != 1));
    }

    #[test]
    fn test_level_bars_fill_up_to_selection() {
        let bars = level_bars(Some(SkillLevel::Intermediate));
        assert_eq!(
            bars,
            vec![
                (SkillLevel::Beginner, "bg-warning"),
                (SkillLevel::Intermediate, "bg-warning"),
                (SkillLevel::Advanced, "bg-light"),
            ]
        );
        assert!(level_bars(None).iter().all(|(_, class)| *class == "bg-light"));
    }

    #[test]
    fn test_filter_catalog_case_insensitive() {
        let catalog = vec![
            CatalogSkill { id: 1, name: "JavaScript".to_string() },
            CatalogSkill { id: 2, name: "Java".to_string() },
            CatalogSkill { id: 3, name: "Rust".to_string() },
        ];
        let ids: Vec<u32> = filter_catalog(&catalog, "jAVa").iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(filter_catalog(&catalog, "  ").len(), 3);
    }

    #[test]
    fn test_social_rows_icon_and_fallback_name() {
        let rows = social_link_rows(&[SocialLink {
            id: Some(1),
            platform: Platform::Github,
            url: "https://github.com/me".to_string(),
            display_name: None,
        }]);
        assert_eq!(rows[0].icon_class, "bi bi-github text-dark me-2");
        assert_eq!(rows[0].label, "GitHub");
        assert_eq!(rows[0].name, "https://github.com/me");
    }

    #[test]
    fn test_project_cards_hide_blank_links() {
        let cards = project_cards(&[Project {
            id: Some(3),
            title: "Jobit".to_string(),
            description: "Job board".to_string(),
            technologies: vec![],
            github_link: Some(" ".to_string()),
            demo_link: Some("https://jobit.dev".to_string()),
        }]);
        assert_eq!(cards[0].github_link, None);
        assert_eq!(cards[0].demo_link.as_deref(), Some("https://jobit.dev"));
    }
}
