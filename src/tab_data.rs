/// Data structures for Tabber

use serde::{Deserialize, Serialize};

/// Host-assigned tab identifier. Unique among open tabs at any instant, but
/// ids are reused by the browser once a tab closes.
pub type TabId = i32;

pub const TITLE_PLACEHOLDER: &str = "No Title";
pub const URL_PLACEHOLDER: &str = "N/A";
pub const FAVICON_PLACEHOLDER: &str = "https://via.placeholder.com/16";

/// Raw tab descriptor as reported by the host browser's tab query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostTab {
    pub id: TabId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "favIconUrl")]
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// Normalized view-model record for one open tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub fav_icon_url: String,
    pub is_favorite: bool,
    /// Epoch milliseconds at the moment the list was fetched, not the tab's
    /// actual creation time.
    pub opened_at: f64,
}

impl Tab {
    /// Build a record from a host descriptor, substituting placeholders for
    /// missing or empty display fields.
    pub fn from_host(host: &HostTab, now_ms: f64) -> Tab {
        Tab {
            id: host.id,
            title: or_placeholder(host.title.as_deref(), TITLE_PLACEHOLDER),
            url: or_placeholder(host.url.as_deref(), URL_PLACEHOLDER),
            fav_icon_url: or_placeholder(host.fav_icon_url.as_deref(), FAVICON_PLACEHOLDER),
            is_favorite: false,
            opened_at: now_ms,
        }
    }
}

// An empty string from the host counts as missing.
fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host_keeps_present_fields() {
        let host = HostTab {
            id: 1,
            title: Some("Google".to_string()),
            url: Some("https://google.com".to_string()),
            fav_icon_url: Some("https://google.com/favicon.ico".to_string()),
            active: true,
        };

        let tab = Tab::from_host(&host, 1_700_000_000_000.0);

        assert_eq!(tab.id, 1);
        assert_eq!(tab.title, "Google");
        assert_eq!(tab.url, "https://google.com");
        assert_eq!(tab.fav_icon_url, "https://google.com/favicon.ico");
        assert!(!tab.is_favorite);
        assert_eq!(tab.opened_at, 1_700_000_000_000.0);
    }

    #[test]
    fn test_from_host_substitutes_placeholders() {
        let host = HostTab {
            id: 5,
            title: Some(String::new()),
            url: None,
            fav_icon_url: None,
            active: false,
        };

        let tab = Tab::from_host(&host, 0.0);

        assert_eq!(tab.id, 5);
        assert_eq!(tab.title, TITLE_PLACEHOLDER);
        assert_eq!(tab.url, URL_PLACEHOLDER);
        assert_eq!(tab.fav_icon_url, FAVICON_PLACEHOLDER);
        assert!(!tab.is_favorite);
    }

    #[test]
    fn test_host_tab_field_names() {
        // The host reports camelCase fields and omits absent ones entirely.
        let json = r#"{"id": 7, "title": "Rust", "favIconUrl": "https://rust-lang.org/favicon.ico", "active": true}"#;

        let host: HostTab = serde_json::from_str(json).unwrap();

        assert_eq!(host.id, 7);
        assert_eq!(host.title.as_deref(), Some("Rust"));
        assert_eq!(host.url, None);
        assert_eq!(
            host.fav_icon_url.as_deref(),
            Some("https://rust-lang.org/favicon.ico")
        );
        assert!(host.active);
    }

    #[test]
    fn test_host_tab_minimal_descriptor() {
        let host: HostTab = serde_json::from_str(r#"{"id": 2}"#).unwrap();

        assert_eq!(host.id, 2);
        assert_eq!(host.title, None);
        assert!(!host.active);
    }
}
