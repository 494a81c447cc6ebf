use serde::{Deserialize, Serialize};

use super::{
    fences::{ChartFence, CodeFence, MermaidFence, PlaygroundFence},
    links::EmbedScanner,
    scanner::Scanner,
    segment::Segment,
    span::Span,
};

/// A content dialect the pipeline can recognize.
///
/// The declaration order is the order the pipeline applies them in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Chart,
    Playground,
    Mermaid,
    Code,
    Embed,
}

impl Dialect {
    /// The fenced dialects, in pipeline order.
    pub const FENCES: [Dialect; 4] = [Self::Chart, Self::Playground, Self::Mermaid, Self::Code];

    pub fn scanner(self) -> &'static dyn Scanner {
        match self {
            Self::Chart => &ChartFence,
            Self::Playground => &PlaygroundFence,
            Self::Mermaid => &MermaidFence,
            Self::Code => &CodeFence,
            Self::Embed => &EmbedScanner,
        }
    }
}

/// The ordered segments of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDoc {
    pub segments: Vec<Segment>,
}

/// Applies a fixed sequence of scanners to a document.
///
/// Each pass only re-scans the `Text` segments left by earlier passes, so a
/// typed segment is never looked at again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    dialects: Vec<Dialect>,
}

impl Default for Pipeline {
    /// All fence dialects; embeds off.
    fn default() -> Self {
        Self::from_dialects(&Dialect::FENCES)
    }
}

impl Pipeline {
    /// Builds a pipeline running `dialects`.
    ///
    /// The pipeline order is fixed (chart, playground, mermaid, code, embed)
    /// regardless of the order given; duplicates are ignored.
    pub fn from_dialects(dialects: &[Dialect]) -> Self {
        let mut dialects = dialects.to_vec();
        dialects.sort_unstable();
        dialects.dedup();
        Self { dialects }
    }

    /// Adds embed recognition on the text left after fence scanning.
    pub fn with_embeds(mut self) -> Self {
        if !self.dialects.contains(&Dialect::Embed) {
            self.dialects.push(Dialect::Embed);
        }
        self
    }

    pub fn dialects(&self) -> &[Dialect] {
        &self.dialects
    }

    pub fn parse(&self, document: &str) -> ParsedDoc {
        let mut segments = vec![];
        if !document.is_empty() {
            segments.push(Segment::text(Span::new(0, document.len()), document));
        }

        for dialect in &self.dialects {
            let scanner = dialect.scanner();
            segments = segments
                .into_iter()
                .flat_map(|segment| {
                    if segment.is_text() {
                        scanner.scan_at(segment.span.start, segment.span.slice(document))
                    } else {
                        vec![segment]
                    }
                })
                .collect();
            log::trace!("{} pass left {} segments", scanner.name(), segments.len());
        }

        log::trace!(
            "parsed {} bytes into {} segments",
            document.len(),
            segments.len()
        );
        ParsedDoc { segments }
    }
}

/// Parses `document` with the default pipeline.
pub fn parse_document(document: &str) -> ParsedDoc {
    Pipeline::default().parse(document)
}
