use crate::parsing::segment::{Segment, SegmentKind};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Segment spans are contiguous, start at 0 and end at the document length
/// - No `Text` segment is empty
/// - Each `Text` segment's content equals the document text under its span
/// - No chart options contain `type` or `title`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(document: &str, segments: &[Segment]) {
    let mut expected_start = 0;
    for s in segments {
        assert!(
            s.span.start == expected_start,
            "gap or overlap before {:?} (expected start {})",
            s.span,
            expected_start
        );
        assert!(
            s.span.start < s.span.end && s.span.end <= document.len(),
            "empty or out of bounds span: {:?} (document len: {})",
            s.span,
            document.len()
        );
        match &s.kind {
            SegmentKind::Text { content } => assert_eq!(
                content,
                s.span.slice(document),
                "text content differs from source at {:?}",
                s.span
            ),
            SegmentKind::Chart { options, .. } => assert!(
                !options.contains_key("type") && !options.contains_key("title"),
                "chart options keep header fields at {:?}",
                s.span
            ),
            _ => {}
        }
        expected_start = s.span.end;
    }
    assert!(
        expected_start == document.len(),
        "segments end at {} but document len is {}",
        expected_start,
        document.len()
    );
}

/// Rebuilds the source text from segment spans.
pub fn reconstruct(document: &str, segments: &[Segment]) -> String {
    segments.iter().map(|s| s.span.slice(document)).collect()
}
