use serde::Serialize;

use crate::parsing::{
    segment::{Segment, SegmentKind},
    span::preview,
};

#[derive(Serialize)]
pub struct Snap {
    pub segments: Vec<SegmentSnap>,
}

#[derive(Serialize)]
pub struct SegmentSnap {
    pub kind: String,
    pub span: String,
    pub text: String,
}

fn describe(kind: &SegmentKind) -> String {
    match kind {
        SegmentKind::Text { .. } => "Text".to_string(),
        SegmentKind::Code {
            language, filename, ..
        } if filename.is_empty() => format!("Code({language})"),
        SegmentKind::Code {
            language, filename, ..
        } => format!("Code({language}:{filename})"),
        SegmentKind::Chart { chart_type, .. } => format!("Chart({chart_type})"),
        SegmentKind::Diagram { .. } => "Diagram".to_string(),
        SegmentKind::Playground { language, .. } => format!("Playground({language})"),
        SegmentKind::Embed {
            provider, id: Some(id), ..
        } => format!("Embed({provider}:{id})"),
        SegmentKind::Embed { provider, .. } => format!("Embed({provider})"),
    }
}

pub fn normalize(document: &str, segments: &[Segment]) -> Snap {
    let segments = segments
        .iter()
        .map(|s| SegmentSnap {
            kind: describe(&s.kind),
            span: format!("{}..{}", s.span.start, s.span.end),
            text: preview(document, s.span, 60),
        })
        .collect();

    Snap { segments }
}
