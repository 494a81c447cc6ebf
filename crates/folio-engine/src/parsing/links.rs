use std::sync::OnceLock;

use regex::Regex;

use super::{
    scanner::{Scanner, tile},
    segment::{Segment, SegmentKind},
};
use crate::embeds::{classify, is_embeddable};

/// Turns embeddable URLs that stand alone on a line into `Embed` segments.
///
/// URLs inside running text and links to hosts that are not embed
/// providers are left as text. A provider link whose id cannot be found
/// still becomes an `Embed` with provider `unknown`, so the renderer can
/// fall back to a plain link.
pub struct EmbedScanner;

impl EmbedScanner {
    pub const NAME: &'static str = "embed";

    fn regex() -> &'static Regex {
        static URL_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
        URL_LINE_REGEX.get_or_init(|| {
            Regex::new(r"(?m)^[ \t]*(https?://[^\s<>\[\]]+)[ \t]*\r?$")
                .expect("Invalid URL line regex")
        })
    }
}

/// Removes trailing punctuation that's typically not part of URLs.
fn trim_url(url: &str) -> &str {
    url.trim_end_matches(['.', ',', ':', ';', '!', '?', ')', ']', '}'])
}

impl Scanner for EmbedScanner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan_at(&self, base: usize, text: &str) -> Vec<Segment> {
        let matches = Self::regex().captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?.range();
            let url = trim_url(caps.get(1)?.as_str());
            if !is_embeddable(url) {
                return None;
            }
            let info = classify(url);
            let kind = SegmentKind::Embed {
                provider: info.provider,
                id: info.id,
                source_url: url.to_string(),
            };
            Some((whole, Ok(kind)))
        });
        tile(base, text, Self::NAME, matches)
    }
}
