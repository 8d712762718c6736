//! Tests for the graph renderer module

use elementary_cycles::detector::enumerate;
use elementary_cycles::graph::{GraphModel, GraphRenderer};

/// A build pipeline with one feedback loop and one self-loop
fn pipeline() -> GraphModel {
    GraphModel::from_adjacency([
        ("fetch", vec!["parse"]),
        ("parse", vec!["check"]),
        ("check", vec!["parse", "emit"]),
        ("emit", vec!["link"]),
        ("link", vec!["link"]),
    ])
    .unwrap()
}

fn render_with(
    highlight: bool,
    render: impl Fn(&GraphRenderer, &GraphModel, &mut Vec<u8>) -> miette::Result<()>,
) -> String {
    let graph = pipeline();
    let renderer = GraphRenderer::new(highlight);
    let mut output = Vec::new();
    render(&renderer, &graph, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_ascii_highlights_only_cycle_members() {
    let output = render_with(true, |r, g, out| {
        r.render_ascii("pipeline", g, &enumerate(g), out)
    });

    assert!(output.contains("│ parse ⚠️  IN CYCLE"));
    assert!(output.contains("│ check ⚠️  IN CYCLE"));
    assert!(output.contains("│ link ⚠️  IN CYCLE"));
    assert!(output.contains("\nfetch\n"));
    assert!(output.contains("\nemit\n"));
    assert!(output.contains("→ link ⚠️  [CYCLE]"));
    assert!(output.contains("├── → parse ⚠️  [CYCLE]"));
    assert!(output.contains("└── → emit\n"));
}

#[test]
fn test_mermaid_declares_every_vertex_and_edge() {
    let output = render_with(true, |r, g, out| {
        r.render_mermaid("pipeline", g, &enumerate(g), out)
    });

    assert!(output.starts_with("---\ntitle: pipeline\n---\ngraph LR\n"));
    for (i, name) in ["fetch", "parse", "check", "emit", "link"].iter().enumerate() {
        assert!(output.contains(&format!("v{i}[\"{name}\"]")));
    }
    assert_eq!(output.matches(" --> ").count(), 6);
    assert_eq!(output.matches("linkStyle").count(), 6);
    assert!(output.contains("v4 --> v4"));
}

#[test]
fn test_dot_without_highlighting_uses_normal_colors() {
    let output = render_with(false, |r, g, out| {
        r.render_dot("pipeline", g, &enumerate(g), out)
    });

    assert!(!output.contains("#FF6500"));
    assert!(!output.contains("#F57C00"));
    assert!(output.contains(r##""check" -> "parse" [color="#64B5F6", penwidth=2];"##));
    assert!(output.trim_end().ends_with('}'));
}
