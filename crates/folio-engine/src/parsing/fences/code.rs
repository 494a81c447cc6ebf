use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{FenceDialect, FenceError, scan_fences};
use crate::parsing::{scanner::Scanner, segment::Segment, segment::SegmentKind};

/// Generic code fence: ```` ```<lang>[:filename] [{1,3-5}] ````.
///
/// The filename runs to the highlight list or the end of the line, so it may
/// contain spaces. Anything else after the language (`rust ignore`) is
/// accepted and dropped, so every opening line with an info string opens a
/// fence.
///
/// Runs last among the fence dialects, so any fence still in text by then
/// (including `chart`/`playground`/`mermaid` keywords that failed their own
/// dialect without a header) is treated as code in that language.
pub struct CodeFence;

impl CodeFence {
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";
}

/// Removes leading blank lines and trailing whitespace, keeping the
/// indentation of the first code line.
fn trim_code(body: &str) -> &str {
    let body = body.trim_end();
    let mut start = 0;
    for line in body.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    &body[start..]
}

/// Parses a highlight list such as `1,3-5` into sorted, unique line numbers.
///
/// Line numbers are 1-based; lines past the end of the code are dropped.
fn parse_line_list(list: &str, line_count: u32) -> Result<Vec<u32>, FenceError> {
    let bad = || FenceError::LineRange(list.to_string());
    let number = |s: &str| match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(bad()),
        Ok(n) => Ok(n),
    };

    let mut lines = vec![];
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((from, to)) => {
                let (from, to) = (number(from)?, number(to)?);
                if from > to {
                    return Err(bad());
                }
                lines.extend(from..=to.min(line_count));
            }
            None => {
                let n = number(part)?;
                if n <= line_count {
                    lines.push(n);
                }
            }
        }
    }
    lines.sort_unstable();
    lines.dedup();
    Ok(lines)
}

impl FenceDialect for CodeFence {
    const NAME: &'static str = "code";

    fn regex() -> &'static Regex {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_REGEX.get_or_init(|| {
            Regex::new(
                r"```([\w+#.-]+)?(?::([^`\r\n{]*))?(?:[ \t]*\{([^}\n]*)\})?[^`\r\n]*\r?\n([\s\S]*?)```",
            )
            .expect("Invalid code fence regex")
        })
    }

    fn parse(caps: &Captures<'_>) -> Result<SegmentKind, FenceError> {
        let language = caps
            .get(1)
            .map_or(Self::DEFAULT_LANGUAGE, |m| m.as_str());
        let filename = caps.get(2).map_or("", |m| m.as_str().trim());
        let code = trim_code(caps.get(4).map_or("", |m| m.as_str()));

        let highlighted_lines = match caps.get(3) {
            Some(list) => {
                let line_count = u32::try_from(code.lines().count()).unwrap_or(u32::MAX);
                parse_line_list(list.as_str(), line_count)?
            }
            None => vec![],
        };

        Ok(SegmentKind::Code {
            language: language.to_string(),
            filename: filename.to_string(),
            code: code.to_string(),
            highlighted_lines,
        })
    }
}

impl Scanner for CodeFence {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan_at(&self, base: usize, text: &str) -> Vec<Segment> {
        scan_fences::<Self>(base, text)
    }
}
