//! # Content Parsing
//!
//! Decomposes a post body into an ordered sequence of typed [`Segment`]s:
//! text, code, charts, diagrams, playgrounds and embeds.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the document
//! - **`segment`**: `Segment` and its `SegmentKind` payloads
//! - **`scanner`**: the `Scanner` trait and the shared tiling loop
//! - **`fences`**: one scanner per fence dialect (chart, playground, mermaid, code)
//! - **`links`**: `EmbedScanner` for standalone social-media URLs
//! - **`pipeline`**: `Pipeline` composing scanners in a fixed order
//! - **`snapshot`**: invariant checks and a normalized form for snapshot tests
//!
//! ## Key Invariants
//!
//! - Segments tile the document: slicing it with each span in order
//!   reproduces the source exactly
//! - No `Text` segment is empty
//! - Malformed fences are never dropped; they stay as `Text`

pub mod fences;
pub mod links;
pub mod pipeline;
pub mod scanner;
pub mod segment;
pub mod snapshot;
pub mod span;

pub use pipeline::{Dialect, ParsedDoc, Pipeline, parse_document};
pub use scanner::Scanner;
pub use segment::{Segment, SegmentKind};

#[cfg(test)]
mod tests;
