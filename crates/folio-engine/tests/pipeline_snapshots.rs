use folio_engine::parsing::{Pipeline, snapshot};

#[test]
fn fixture_mixed_post() {
    assert_fixture("mixed_post");
}

#[test]
fn fixture_broken_fences() {
    assert_fixture("broken_fences");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = Pipeline::default().with_embeds().parse(&md);
    snapshot::invariants(&md, &doc.segments);

    let snap = snapshot::normalize(&md, &doc.segments);
    insta::assert_json_snapshot!(name, snap);
}

/// Every fixture must come back byte for byte from its segment spans.
#[test]
fn fixtures_are_lossless() {
    for name in ["mixed_post", "broken_fences"] {
        let md = std::fs::read_to_string(format!(
            "{}/tests/fixtures/{name}.md",
            env!("CARGO_MANIFEST_DIR")
        ))
        .unwrap();

        let doc = folio_engine::parse_document(&md);
        assert_eq!(
            snapshot::invariants::reconstruct(&md, &doc.segments),
            md,
            "{name} did not reconstruct"
        );
    }
}

/// The segment JSON a renderer receives uses camelCase field names.
#[test]
fn renderer_json_shape() {
    let md = "```ts:a.ts {1}\nlet a = 1;\n```";
    let doc = folio_engine::parse_document(md);

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "segments": [{
                "span": { "start": 0, "end": md.len() },
                "type": "code",
                "language": "ts",
                "filename": "a.ts",
                "code": "let a = 1;",
                "highlightedLines": [1],
            }]
        })
    );
}
