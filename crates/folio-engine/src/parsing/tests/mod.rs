//! Cross-dialect tests for the parsing module.
//!
//! Every document here goes through the full pipeline and the invariant
//! checker, so tiling and losslessness are asserted on each case.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::parsing::{
    Pipeline, Segment, SegmentKind,
    snapshot::{self, invariants::reconstruct},
    span::Span,
};

fn parse_checked(md: &str) -> Vec<Segment> {
    let doc = Pipeline::default().with_embeds().parse(md);
    snapshot::invariants(md, &doc.segments);
    doc.segments
}

#[rstest]
#[case::empty("")]
#[case::plain("Hello, world.\n")]
#[case::only_fence("```\nhello\n```")]
#[case::unclosed_fence("```rust\nfn main() {\n")]
#[case::stray_backticks("``` ``` ```")]
#[case::adjacent_fences("```a\n1\n``````b\n2\n```")]
#[case::crlf("text\r\n```mermaid\r\nA\r\n```\r\nhttps://youtu.be/x1\r\nend")]
#[case::unicode("Ünïcödé ✓\n```py:naïve.py\nprint('é')\n```\n日本語")]
#[case::broken_everything(
    "```chart {nope}\n?\n```\n```playground {\"readOnly\":1}\nx\n```\n```rust {9-1}\nx\n```"
)]
fn segments_reconstruct_the_document(#[case] md: &str) {
    let segments = parse_checked(md);
    assert_eq!(reconstruct(md, &segments), md);
    assert!(
        segments
            .iter()
            .filter_map(Segment::as_text)
            .all(|content| !content.is_empty())
    );
}

#[test]
fn chart_happy_path() {
    let md = "```chart {\"type\":\"bar\",\"title\":\"Sales\"}\n{\"labels\":[\"A\",\"B\"],\"datasets\":[]}\n```";
    let segments = parse_checked(md);

    assert_eq!(segments.len(), 1);
    let SegmentKind::Chart {
        chart_type,
        data,
        options,
    } = &segments[0].kind
    else {
        panic!("expected chart, got {:?}", segments[0].kind);
    };
    assert_eq!(chart_type, "bar");
    assert_eq!(data["title"], "Sales");
    assert_eq!(data["labels"], json!(["A", "B"]));
    assert!(options.is_empty());
}

#[test]
fn malformed_chart_fence_is_one_text_segment() {
    let md = "```chart {bad json}\nnot json```";
    assert_eq!(
        parse_checked(md),
        vec![Segment::text(Span::new(0, md.len()), md)]
    );
}

#[test]
fn code_fence_default_language() {
    let md = "```\nhello\n```";
    assert_eq!(
        parse_checked(md)[0].kind,
        SegmentKind::Code {
            language: "plaintext".into(),
            filename: "".into(),
            code: "hello".into(),
            highlighted_lines: vec![],
        }
    );
}

#[test]
fn mixed_document_ordering() {
    let md = "Some intro.\n\n```chart\n{\"labels\":[]}\n```\n\nSome more.\n\n```rust\nlet x = 1;\n```";
    let tags: Vec<_> = parse_checked(md).iter().map(|s| s.kind.tag()).collect();
    assert_eq!(tags, vec!["text", "chart", "text", "code"]);
}

#[test]
fn malformed_fence_does_not_disturb_neighbours() {
    let md = "A\n```chart {x}\n1\n```\nB\n```mermaid\ngraph LR\n```\nC";
    let segments = parse_checked(md);

    let tags: Vec<_> = segments.iter().map(|s| s.kind.tag()).collect();
    assert_eq!(tags, vec!["text", "text", "text", "diagram", "text"]);
    assert_eq!(segments[1].as_text(), Some("```chart {x}\n1\n```"));
}

#[test]
fn crlf_fence_bodies_are_trimmed() {
    let md = "```mermaid\r\ngraph TD\r\n```";
    let segments = parse_checked(md);

    assert_eq!(
        segments[0].kind,
        SegmentKind::Diagram {
            definition: "graph TD".into()
        }
    );
}

#[test]
fn filename_with_spaces_keeps_following_fences_intact() {
    let md = "```ts:my file.ts\nA\n```\nprose paragraph\n```rust\nfn x(){}\n```";
    let segments = parse_checked(md);

    assert_eq!(
        segments,
        vec![
            Segment::new(
                Span::new(0, 22),
                SegmentKind::Code {
                    language: "ts".into(),
                    filename: "my file.ts".into(),
                    code: "A".into(),
                    highlighted_lines: vec![],
                }
            ),
            Segment::text(Span::new(22, 39), "\nprose paragraph\n"),
            Segment::new(
                Span::new(39, md.len()),
                SegmentKind::Code {
                    language: "rust".into(),
                    filename: String::new(),
                    code: "fn x(){}".into(),
                    highlighted_lines: vec![],
                }
            ),
        ]
    );
}
