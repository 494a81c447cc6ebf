use std::ops::Range;

use super::{
    fences::FenceError,
    segment::{Segment, SegmentKind},
    span::Span,
};

/// Recognizes one content dialect and splits text into typed segments.
///
/// Scanners are stateless and independent of each other: each one only
/// recognizes its own dialect and passes everything else through as
/// [`SegmentKind::Text`], so they can be composed in any order.
pub trait Scanner: Send + Sync {
    /// Short dialect name used in log output.
    fn name(&self) -> &'static str;

    /// Scans `text`, which starts at byte offset `base` of the document.
    ///
    /// The returned segments tile `base..base + text.len()` exactly.
    fn scan_at(&self, base: usize, text: &str) -> Vec<Segment>;

    /// Scans a whole document.
    fn scan(&self, document: &str) -> Vec<Segment> {
        self.scan_at(0, document)
    }
}

/// Tiles `text` with the given matches and the plain text between them.
///
/// Matches must be ordered and non-overlapping, with ranges local to `text`.
/// A match whose parse failed is downgraded to a `Text` segment covering
/// the entire match, leaving its neighbours untouched. Empty gaps produce
/// no segment.
pub(crate) fn tile<I>(base: usize, text: &str, dialect: &str, matches: I) -> Vec<Segment>
where
    I: IntoIterator<Item = (Range<usize>, Result<SegmentKind, FenceError>)>,
{
    let mut out = vec![];
    let mut cursor = 0;

    fn flush_text(out: &mut Vec<Segment>, base: usize, text: &str, local: Range<usize>) {
        if local.end > local.start {
            out.push(Segment::text(
                Span::offset(base, local.clone()),
                &text[local],
            ));
        }
    }

    for (range, parsed) in matches {
        flush_text(&mut out, base, text, cursor..range.start);
        let span = Span::offset(base, range.clone());
        match parsed {
            Ok(kind) => out.push(Segment::new(span, kind)),
            Err(err) => {
                log::debug!("{dialect} block at {span:?} left as text: {err}");
                out.push(Segment::text(span, &text[range.clone()]));
            }
        }
        cursor = range.end;
    }

    flush_text(&mut out, base, text, cursor..text.len());
    out
}
