use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

use super::{FenceDialect, FenceError, parse_header, scan_fences};
use crate::parsing::{scanner::Scanner, segment::Segment, segment::SegmentKind};

/// Chart fence: ```` ```chart {"type":"bar","title":"X", ..} ```` over a JSON body.
///
/// `type` becomes the chart type and `title` moves into the data record;
/// every other header key is passed through as an option.
pub struct ChartFence;

impl ChartFence {
    pub const DEFAULT_TYPE: &'static str = "line";
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FenceDialect for ChartFence {
    const NAME: &'static str = "chart";

    fn regex() -> &'static Regex {
        static CHART_REGEX: OnceLock<Regex> = OnceLock::new();
        CHART_REGEX.get_or_init(|| {
            Regex::new(r"```chart[ \t]*(?:\{(.*)\})?[ \t]*\r?\n([\s\S]*?)```")
                .expect("Invalid chart fence regex")
        })
    }

    fn parse(caps: &Captures<'_>) -> Result<SegmentKind, FenceError> {
        let mut options: Map<String, Value> = parse_header(caps.get(1).map(|m| m.as_str()))?;
        let body = caps.get(2).map_or("", |m| m.as_str());

        let mut data = match serde_json::from_str(body).map_err(FenceError::Body)? {
            Value::Object(data) => data,
            other => {
                return Err(FenceError::DataNotObject {
                    found: json_kind(&other),
                });
            }
        };

        let chart_type = match options.remove("type") {
            None => Self::DEFAULT_TYPE.to_string(),
            Some(Value::String(chart_type)) => chart_type,
            Some(_) => return Err(FenceError::FieldType { field: "type" }),
        };
        if let Some(title) = options.remove("title") {
            data.insert("title".to_string(), title);
        }

        Ok(SegmentKind::Chart {
            chart_type,
            data,
            options,
        })
    }
}

impl Scanner for ChartFence {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn scan_at(&self, base: usize, text: &str) -> Vec<Segment> {
        scan_fences::<Self>(base, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::span::Span;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn header_fields_split_between_type_data_and_options() {
        let doc = "```chart {\"type\":\"bar\",\"title\":\"Sales\"}\n{\"labels\":[\"A\",\"B\"],\"datasets\":[]}\n```";
        let out = ChartFence.scan(doc);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].span, Span::new(0, doc.len()));
        let SegmentKind::Chart {
            chart_type,
            data,
            options,
        } = &out[0].kind
        else {
            panic!("expected chart, got {:?}", out[0].kind);
        };
        assert_eq!(chart_type, "bar");
        assert_eq!(data["title"], "Sales");
        assert_eq!(data["labels"], json!(["A", "B"]));
        assert!(!options.contains_key("type"));
        assert!(!options.contains_key("title"));
    }

    #[test]
    fn extra_header_keys_become_options() {
        let doc = "```chart {\"type\":\"pie\",\"stacked\":true,\"legend\":{\"position\":\"top\"}}\n{}\n```";
        let out = ChartFence.scan(doc);

        assert_eq!(
            out[0].kind,
            SegmentKind::Chart {
                chart_type: "pie".into(),
                data: Map::new(),
                options: object(json!({"stacked": true, "legend": {"position": "top"}})),
            }
        );
    }

    #[test]
    fn missing_header_uses_default_type() {
        let out = ChartFence.scan("```chart\n{\"labels\":[]}\n```");
        let SegmentKind::Chart {
            chart_type,
            options,
            ..
        } = &out[0].kind
        else {
            panic!("expected chart");
        };
        assert_eq!(chart_type, ChartFence::DEFAULT_TYPE);
        assert!(options.is_empty());
    }

    #[rstest]
    #[case::bad_header("```chart {bad json}\nnot json```")]
    #[case::bad_body("```chart {\"type\":\"bar\"}\nnot json\n```")]
    #[case::empty_body("```chart\n```")]
    #[case::array_body("```chart\n[1, 2, 3]\n```")]
    #[case::non_string_type("```chart {\"type\":3}\n{}\n```")]
    fn malformed_fence_downgrades_to_whole_text(#[case] doc: &str) {
        let out = ChartFence.scan(doc);
        assert_eq!(out, vec![Segment::text(Span::new(0, doc.len()), doc)]);
    }

    #[test]
    fn downgrade_leaves_neighbours_intact() {
        let doc = "before\n```chart {oops}\n{}\n```\nmiddle\n```chart\n{\"a\":1}\n```\nafter";
        let out = ChartFence.scan(doc);

        let tags: Vec<_> = out.iter().map(|s| s.kind.tag()).collect();
        assert_eq!(tags, vec!["text", "text", "text", "chart", "text"]);
        assert_eq!(out[1].as_text(), Some("```chart {oops}\n{}\n```"));
        assert_eq!(out[4].as_text(), Some("\nafter"));
    }

    #[test]
    fn body_capture_stops_at_first_closing_fence() {
        let doc = "```chart\n{\"a\":1}\n```\n\n```chart\n{\"b\":2}\n```";
        let out = ChartFence.scan(doc);

        let charts: Vec<_> = out.iter().filter(|s| !s.is_text()).collect();
        assert_eq!(charts.len(), 2);
        assert_eq!(out[1].as_text(), Some("\n\n"));
    }

    #[test]
    fn other_fences_pass_through() {
        let doc = "```rust\nfn main() {}\n```";
        assert_eq!(
            ChartFence.scan(doc),
            vec![Segment::text(Span::new(0, doc.len()), doc)]
        );
    }
}
