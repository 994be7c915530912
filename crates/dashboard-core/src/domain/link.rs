//! Link Entity
//!
//! A saved bookmark plus the URL helpers used to decorate its card.

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

use super::entity::Entity;
use super::id::EntityId;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Characters left as-is in the `domain` query parameter
const DOMAIN_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'.').remove(b'-');

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(with = "super::date", default = "super::date::fallback_date")]
    pub added_date: NaiveDate,
}

impl Link {
    pub fn new(id: EntityId, title: impl Into<String>, url: impl Into<String>, added_date: NaiveDate) -> Self {
        let url = url.into();
        let favicon = favicon_url(&url);
        Self {
            id,
            title: title.into(),
            url,
            description: String::new(),
            tags: Vec::new(),
            favicon,
            added_date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn hostname(&self) -> Option<String> {
        link_hostname(&self.url)
    }

    /// Stored favicon, or one derived from the URL for links saved without it
    pub fn favicon(&self) -> Option<String> {
        self.favicon.clone().or_else(|| favicon_url(&self.url))
    }
}

impl Entity for Link {
    const KIND: &'static str = "link";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Host of an absolute URL as a browser reports it: lowercased,
/// IDNA-encoded, percent-decoded.
///
/// Returns `None` when the URL does not parse or has no host.
pub fn link_hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}

/// Favicon service URL for the link's host, `None` when the URL is malformed
pub fn favicon_url(url: &str) -> Option<String> {
    let host = link_hostname(url)?;
    let domain = utf8_percent_encode(&host, DOMAIN_SET);
    Some(format!("{}?domain={}&sz=32", FAVICON_SERVICE, domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_extraction() {
        assert_eq!(link_hostname("https://github.com"), Some("github.com".to_string()));
        assert_eq!(
            link_hostname("https://user:pw@Medium.com:8443/article-xyz?x=1"),
            Some("medium.com".to_string())
        );
        assert_eq!(link_hostname("http://[::1]:8080/"), Some("[::1]".to_string()));
    }

    #[test]
    fn test_malformed_urls_have_no_host() {
        assert_eq!(link_hostname("not a url"), None);
        assert_eq!(link_hostname("https://"), None);
        assert_eq!(link_hostname("://example.com"), None);
        assert_eq!(link_hostname("https://exa mple.com"), None);
        assert_eq!(favicon_url("example.com"), None);
    }

    #[test]
    fn test_hostname_matches_browser_parsing() {
        // No slashes after a special scheme
        assert_eq!(link_hostname("https:github.com").as_deref(), Some("github.com"));
        // Backslash ends the host like a slash
        assert_eq!(link_hostname("http://example.com\\docs").as_deref(), Some("example.com"));
        assert_eq!(link_hostname("https://münchen.de/").as_deref(), Some("xn--mnchen-3ya.de"));
        assert_eq!(link_hostname("https://exa%41mple.com/").as_deref(), Some("exaample.com"));
        assert_eq!(link_hostname("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_favicon_url_encodes_domain() {
        assert_eq!(
            favicon_url("https://openai.com/research").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=openai.com&sz=32")
        );
    }
}
