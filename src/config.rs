//! Page Configuration
//!
//! Endpoint paths and geocoder settings, read once at start-up from an
//! optional `<script id="app-config" type="application/json">` element.
//! Missing keys fall back to the defaults below.

use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::error::ConfigError;

/// Id of the element carrying the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "app-config";
/// Page global holding the CSRF token, when the template renders one
pub const CSRF_GLOBAL: &str = "CSRF_TOKEN";
/// Cookie Django stores the CSRF token in
pub const CSRF_COOKIE: &str = "csrftoken";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Prefix for every endpoint path; empty means same origin
    pub api_base: String,
    pub endpoints: Endpoints,
    pub geocoder: GeocoderConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            endpoints: Endpoints::default(),
            geocoder: GeocoderConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoints {
    pub skill_catalog: String,
    pub listing_skills: String,
    pub add_skill: String,
    pub remove_skill: String,
    pub update_skill_level: String,
    pub about_me: String,
    pub social_links: String,
    pub projects: String,
    pub update_location: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            skill_catalog: "/get_skills".to_string(),
            listing_skills: "/get_user_skills".to_string(),
            add_skill: "/add_skill".to_string(),
            remove_skill: "/remove-skill".to_string(),
            update_skill_level: "/update_skill_level".to_string(),
            about_me: "/update_about_me".to_string(),
            social_links: "/social-links".to_string(),
            projects: "/projects".to_string(),
            update_location: "/update-location".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeocoderConfig {
    pub url: String,
    pub min_query_len: usize,
    pub limit: u32,
    pub debounce_ms: u32,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: "https://nominatim.openstreetmap.org/search".to_string(),
            min_query_len: 3,
            limit: 5,
            debounce_ms: 300,
        }
    }
}

impl AppConfig {
    /// Parse the JSON configuration text
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Configured log level, `Info` when unrecognised
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Configuration of the current page.
    ///
    /// Without a config element the defaults apply; the API base falls back
    /// to the page origin.
    pub fn from_page() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
        let element = window
            .document()
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID));

        let mut config = match element.and_then(|el| el.text_content()) {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw)?,
            _ => Self::default(),
        };
        if config.api_base.is_empty() {
            if let Ok(origin) = window.location().origin() {
                config.api_base = origin;
            }
        }
        Ok(config)
    }
}

/// Read a page global (`window[name]`) into `T`
pub fn read_global<T: DeserializeOwned>(name: &str) -> Option<T> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Ignoring malformed page global {}: {}", name, e);
            None
        }
    }
}

/// CSRF token from the page global, else from the cookie
pub fn csrf_token() -> Option<String> {
    if let Some(token) = read_global::<String>(CSRF_GLOBAL).filter(|t| !t.is_empty()) {
        return Some(token);
    }
    let document = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

/// Value of cookie `name` in a `document.cookie` string, percent-decoded
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(percent_decode_str(value).decode_utf8_lossy().into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{"apiBase": "https://jobit.dev/", "endpoints": {"projects": "/api/projects"}}"#,
        )
        .unwrap();
        assert_eq!(config.endpoints.projects, "/api/projects");
        assert_eq!(config.endpoints.add_skill, "/add_skill");
        assert_eq!(config.geocoder.min_query_len, 3);
        assert_eq!(config.url("/api/projects"), "https://jobit.dev/api/projects");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_url_keeps_absolute() {
        let config = AppConfig::default();
        assert_eq!(config.url("/get_skills"), "/get_skills");
        assert_eq!(
            config.url("https://nominatim.openstreetmap.org/search"),
            "https://nominatim.openstreetmap.org/search"
        );
    }

    #[test]
    fn test_log_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=a%2Bb%3D; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("a+b="));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
