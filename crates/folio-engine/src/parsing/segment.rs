use serde::Serialize;
use serde_json::{Map, Value};

use crate::embeds::EmbedProvider;

use super::span::Span;

/// One atomic, typed unit of parsed content.
///
/// Serializes flat as `{"span": {..}, "type": "chart", "chartType": ..}` so a
/// renderer can switch on `type` and read camelCase fields directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Source text this segment was produced from, fence delimiters included.
    pub span: Span,
    #[serde(flatten)]
    pub kind: SegmentKind,
}

/// The renderable payload of a [`Segment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SegmentKind {
    /// Literal passthrough, left for a downstream markdown renderer.
    Text { content: String },
    /// A generic fenced code block.
    Code {
        language: String,
        filename: String,
        code: String,
        highlighted_lines: Vec<u32>,
    },
    /// A ```` ```chart ```` fence.
    Chart {
        chart_type: String,
        /// Chart data from the fence body, with the header's `title` merged in.
        data: Map<String, Value>,
        /// Remaining header options; never contains `type` or `title`.
        options: Map<String, Value>,
    },
    /// A ```` ```mermaid ```` fence. The definition is not parsed further.
    Diagram { definition: String },
    /// A ```` ```playground ```` fence.
    Playground {
        language: String,
        read_only: bool,
        height: String,
        code: String,
    },
    /// A bare social-media URL standing alone on a line.
    Embed {
        provider: EmbedProvider,
        id: Option<String>,
        source_url: String,
    },
}

impl Segment {
    pub fn new(span: Span, kind: SegmentKind) -> Self {
        Self { span, kind }
    }

    pub fn text(span: Span, content: impl Into<String>) -> Self {
        Self {
            span,
            kind: SegmentKind::Text {
                content: content.into(),
            },
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, SegmentKind::Text { .. })
    }

    /// Returns the content of a `Text` segment.
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            SegmentKind::Text { content } => Some(content),
            _ => None,
        }
    }
}

impl SegmentKind {
    /// The serialized `type` tag of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            SegmentKind::Text { .. } => "text",
            SegmentKind::Code { .. } => "code",
            SegmentKind::Chart { .. } => "chart",
            SegmentKind::Diagram { .. } => "diagram",
            SegmentKind::Playground { .. } => "playground",
            SegmentKind::Embed { .. } => "embed",
        }
    }
}
