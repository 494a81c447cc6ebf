//! # Fenced Blocks
//!
//! One scanner per fence dialect, all sharing the same scan loop.
//!
//! ## Dialects
//!
//! - **`chart`**: ```` ```chart {"type":"bar", ..} ```` with a JSON data body
//! - **`playground`**: ```` ```playground {"language":"ts", ..} ```` with a source body
//! - **`mermaid`**: ```` ```mermaid ```` with a diagram definition body
//! - **`code`**: ```` ```<lang>[:filename] [{lines}] ```` with a source body
//!
//! Each dialect owns its regex and the parse from captures to a
//! [`SegmentKind`]. The shared loop (`scan_fences`) finds matches left to
//! right and fills the gaps with text. A parse failure never escapes: the
//! whole fence, delimiters included, is kept as a `Text` segment.

pub mod chart;
pub mod code;
pub mod mermaid;
pub mod playground;

pub use chart::ChartFence;
pub use code::CodeFence;
pub use mermaid::MermaidFence;
pub use playground::PlaygroundFence;

use regex::{Captures, Regex};
use serde::de::DeserializeOwned;

use super::{
    scanner::tile,
    segment::{Segment, SegmentKind},
};

/// Why a matched fence could not become a typed segment.
#[derive(Debug, thiserror::Error)]
pub enum FenceError {
    #[error("malformed header: {0}")]
    Header(#[source] serde_json::Error),
    #[error("malformed body: {0}")]
    Body(#[source] serde_json::Error),
    #[error("chart data must be a JSON object, found {found}")]
    DataNotObject { found: &'static str },
    #[error("header field `{field}` must be a string")]
    FieldType { field: &'static str },
    #[error("invalid highlighted line list `{0}`")]
    LineRange(String),
}

/// The per-dialect half of a fence scanner.
pub trait FenceDialect {
    const NAME: &'static str;

    /// Regex matching one whole fence, opening to closing backticks.
    fn regex() -> &'static Regex;

    /// Turns the captures of one match into a segment.
    fn parse(caps: &Captures<'_>) -> Result<SegmentKind, FenceError>;
}

/// Runs the shared fence scan loop for dialect `D`.
pub(crate) fn scan_fences<D: FenceDialect>(base: usize, text: &str) -> Vec<Segment> {
    let matches = D::regex().captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?.range();
        Some((whole, D::parse(&caps)))
    });
    tile(base, text, D::NAME, matches)
}

/// Parses a fence header captured without its surrounding braces.
///
/// The header is re-wrapped in `{}` and read as a JSON object. An absent
/// header reads as `{}`, so `T`'s serde defaults apply.
pub(crate) fn parse_header<T: DeserializeOwned>(inner: Option<&str>) -> Result<T, FenceError> {
    let json = format!("{{{}}}", inner.unwrap_or_default());
    serde_json::from_str(&json).map_err(FenceError::Header)
}
