use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{FenceDialect, FenceError, scan_fences};
use crate::parsing::{scanner::Scanner, segment::Segment, segment::SegmentKind};

/// Diagram fence: ```` ```mermaid ```` with the diagram source as its body.
///
/// The definition is handed to the renderer as-is, so this dialect never
/// fails to parse.
pub struct MermaidFence;

impl FenceDialect for MermaidFence {
    const NAME: &'static str = "mermaid";

    fn regex() -> &'static Regex {
        static MERMAID_REGEX: OnceLock<Regex> = OnceLock::new();
        MERMAID_REGEX.get_or_init(|| {
            Regex::new(r"```mermaid[ \t]*\r?\n([\s\S]*?)```").expect("Invalid mermaid fence regex")
        })
    }

    fn parse(caps: &Captures<'_>) -> Result<SegmentKind, FenceError> {
        let definition = caps.get(1).map_or("", |m| m.as_str()).trim();
        Ok(SegmentKind::Diagram {
            definition: definition.to_string(),
        })
    }
}

impl Scanner for MermaidFence {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan_at(&self, base: usize, text: &str) -> Vec<Segment> {
        scan_fences::<Self>(base, text)
    }
}
