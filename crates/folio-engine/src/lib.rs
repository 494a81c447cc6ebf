pub mod embeds;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use embeds::{EmbedError, EmbedInfo, EmbedProvider, classify, is_embeddable};
pub use io::*;
pub use parsing::{
    Dialect, ParsedDoc, Pipeline, Scanner, Segment, SegmentKind, parse_document, span::Span,
};
