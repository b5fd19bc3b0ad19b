use hookguide::{parse, ContentSection, Document};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_document() -> Document {
    let text = std::fs::read_to_string(fixture_path("hooks-guide.md")).unwrap();
    parse(&text)
}

#[test]
fn test_fixture_parts_and_hooks() {
    let doc = fixture_document();

    assert_eq!(doc.title, "React Hooks & Next.js Hooks Guide");
    assert_eq!(doc.parts.len(), 2);

    let part1 = &doc.parts[0];
    assert_eq!(part1.title, "Part 1: React Hooks");
    assert_eq!(
        part1.description.as_deref(),
        Some("Hooks that ship with React itself.")
    );
    // The placeholder hook has no content and is dropped
    let titles: Vec<&str> = part1.hooks.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["1. useState", "2. useEffect"]);

    let part2 = &doc.parts[1];
    assert_eq!(part2.title, "Part 2: Next.js Hooks");
    assert_eq!(part2.hooks.len(), 1);
}

#[test]
fn test_fixture_use_state_sections_in_order() {
    let doc = fixture_document();
    let hook = &doc.parts[0].hooks[0];

    let kinds: Vec<&str> = hook.content.iter().map(ContentSection::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "heading", "paragraph", "heading", "code", "heading", "paragraph", "code", "heading",
            "list", "divider"
        ]
    );

    assert_eq!(
        hook.content[1],
        ContentSection::Paragraph {
            text: "`useState` adds **local state** to a function component. It returns the current value and a setter.".to_string()
        }
    );
    assert_eq!(
        hook.content[3],
        ContentSection::CodeBlock {
            text: "const [state, setState] = useState(initialValue);".to_string(),
            language: Some("tsx".to_string()),
        }
    );
    assert_eq!(
        hook.content[8],
        ContentSection::List {
            items: vec![
                "Never call hooks inside conditions".to_string(),
                "State updates are *asynchronous* and batched".to_string(),
            ]
        }
    );
}

#[test]
fn test_fixture_table_drops_separator() {
    let doc = fixture_document();
    let hook = &doc.parts[0].hooks[1];

    assert_eq!(
        hook.content,
        vec![ContentSection::Table {
            headers: vec!["Dependency array".to_string(), "Runs".to_string()],
            rows: vec![
                vec!["none".to_string(), "after every render".to_string()],
                vec!["`[]`".to_string(), "once after mount".to_string()],
            ],
        }]
    );
}

#[test]
fn test_fixture_skipped_regions_never_appear() {
    let doc = fixture_document();
    let json = serde_json::to_string(&doc).unwrap();

    assert!(!json.contains("table of contents text"));
    assert!(!json.contains("https://react.dev"));
    // The summary table under the skip marker does not join the last hook
    let last_hook = &doc.parts[1].hooks[0];
    assert!(last_hook
        .content
        .iter()
        .all(|s| !matches!(s, ContentSection::Table { .. })));
    assert_eq!(last_hook.content.len(), 2);
}

#[test]
fn test_config_fixture_is_valid() {
    let config = hookguide::GuideConfig::load(fixture_path("hookguide.toml")).unwrap();

    assert_eq!(config.title.as_deref(), Some("Fixture Guide"));
    assert_eq!(config.markers().parts, vec!["Part 1", "Part 2"]);
}

#[test]
fn test_custom_part_markers() {
    let mut markers = hookguide::Markers::default();
    markers.parts = vec!["Chapter".to_string()];

    let doc = hookguide::parse_with_markers(
        "# Chapter One\nintro\n## 1. docker compose\nUp the stack\n# Part 1\n## 2. docker volumes\nbody\n",
        &markers,
    );

    assert_eq!(doc.parts.len(), 1);
    assert_eq!(doc.parts[0].title, "Chapter One");
    // "# Part 1" is an ordinary heading here; its hook still belongs to the chapter
    assert_eq!(doc.parts[0].hooks.len(), 2);
}
