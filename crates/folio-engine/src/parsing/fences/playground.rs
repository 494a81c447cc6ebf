use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use super::{FenceDialect, FenceError, parse_header, scan_fences};
use crate::parsing::{scanner::Scanner, segment::Segment, segment::SegmentKind};

/// Interactive code playground: ```` ```playground {"language":"ts","readOnly":false} ````.
pub struct PlaygroundFence;

/// Header keys a playground fence understands. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlaygroundHeader {
    language: String,
    read_only: bool,
    height: String,
}

impl Default for PlaygroundHeader {
    fn default() -> Self {
        Self {
            language: "javascript".to_string(),
            read_only: true,
            height: "500px".to_string(),
        }
    }
}

impl FenceDialect for PlaygroundFence {
    const NAME: &'static str = "playground";

    fn regex() -> &'static Regex {
        static PLAYGROUND_REGEX: OnceLock<Regex> = OnceLock::new();
        PLAYGROUND_REGEX.get_or_init(|| {
            Regex::new(r"```playground[ \t]*(?:\{(.*)\})?[ \t]*\r?\n([\s\S]*?)```")
                .expect("Invalid playground fence regex")
        })
    }

    fn parse(caps: &Captures<'_>) -> Result<SegmentKind, FenceError> {
        let header: PlaygroundHeader = parse_header(caps.get(1).map(|m| m.as_str()))?;
        let code = caps.get(2).map_or("", |m| m.as_str()).trim();

        Ok(SegmentKind::Playground {
            language: header.language,
            read_only: header.read_only,
            height: header.height,
            code: code.to_string(),
        })
    }
}

impl Scanner for PlaygroundFence {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan_at(&self, base: usize, text: &str) -> Vec<Segment> {
        scan_fences::<Self>(base, text)
    }
}
