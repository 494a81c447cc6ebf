use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

/// Social-media services whose links render as embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedProvider {
    Youtube,
    Twitter,
    Instagram,
    Unknown,
}

impl EmbedProvider {
    /// Every provider that can actually be embedded.
    pub const KNOWN: [EmbedProvider; 3] = [Self::Youtube, Self::Twitter, Self::Instagram];

    /// Hostnames served by this provider.
    pub fn hosts(self) -> &'static [&'static str] {
        match self {
            Self::Youtube => &["youtube.com", "youtu.be"],
            Self::Twitter => &["twitter.com", "x.com"],
            Self::Instagram => &["instagram.com"],
            Self::Unknown => &[],
        }
    }

    /// Finds the provider serving `host`, or `Unknown`.
    ///
    /// Matches the host itself and any subdomain of it (`www.`, `m.`).
    pub fn for_host(host: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|provider| provider.hosts().iter().any(|known| host_matches(host, known)))
            .unwrap_or(Self::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Unknown => "unknown",
        }
    }

    /// Pulls the content id for this provider out of `url`.
    pub(crate) fn extract_id(self, url: &Url) -> Option<String> {
        let id = match self {
            Self::Youtube => {
                if url.host_str().is_some_and(|h| host_matches(h, "youtu.be")) {
                    Some(url.path().trim_start_matches('/').to_string())
                } else {
                    url.query_pairs()
                        .find(|(key, _)| key == "v")
                        .map(|(_, value)| value.into_owned())
                }
            }
            Self::Twitter => capture(status_regex(), url.path()),
            Self::Instagram => capture(post_regex(), url.path()),
            Self::Unknown => None,
        };
        id.filter(|id| !id.is_empty())
    }
}

impl fmt::Display for EmbedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn host_matches(host: &str, known: &str) -> bool {
    host == known
        || host
            .strip_suffix(known)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn capture(regex: &Regex, path: &str) -> Option<String> {
    regex
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn status_regex() -> &'static Regex {
    static STATUS_REGEX: OnceLock<Regex> = OnceLock::new();
    STATUS_REGEX.get_or_init(|| Regex::new(r"/status/(\d+)").expect("Invalid status regex"))
}

fn post_regex() -> &'static Regex {
    static POST_REGEX: OnceLock<Regex> = OnceLock::new();
    POST_REGEX.get_or_init(|| Regex::new(r"/p/([^/]+)").expect("Invalid post regex"))
}
