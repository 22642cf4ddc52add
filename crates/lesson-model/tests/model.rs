//! Tests for lesson-model types.

use lesson_model::{
    Catalog, Chapter, ChapterId, Curriculum, LessonGroup, MatchMode, ModelError, Script,
};

#[test]
fn chapter_id_rejects_zero() {
    assert_eq!(ChapterId::new(0), Err(ModelError::InvalidChapterId(0)));
    assert_eq!(ChapterId::new(7).map(ChapterId::get), Ok(7));
}

#[test]
fn chapter_deserializes_and_ignores_page_content() {
    let json = r#"[
        {"id": 1, "title": "Verbs in Marathi", "url": "https://example.org/verbs", "content": "<p>..</p>"},
        {"id": 2, "title": "Numbers", "content": {"rows": [1, 2, 3]}}
    ]"#;
    let chapters: Vec<Chapter> = serde_json::from_str(json).expect("parse chapters");
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].url.as_deref(), Some("https://example.org/verbs"));
    assert_eq!(chapters[1].url, None);
}

#[test]
fn chapter_with_zero_id_fails_to_deserialize() {
    let json = r#"{"id": 0, "title": "Broken"}"#;
    assert!(serde_json::from_str::<Chapter>(json).is_err());
}

#[test]
fn catalog_lookup_by_id() {
    let catalog = Catalog::new(vec![
        Chapter::new(ChapterId::new(4).unwrap(), "Idioms"),
        Chapter::new(ChapterId::new(83).unwrap(), "Idioms Part2"),
    ])
    .unwrap();
    assert!(catalog.contains(ChapterId::new(83).unwrap()));
    assert!(!catalog.contains(ChapterId::new(5).unwrap()));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn curriculum_rejects_blank_group_name() {
    let curriculum = Curriculum::new(vec![
        LessonGroup::new("Vocabulary", ["Numbers"]),
        LessonGroup::new("  ", ["Colours"]),
    ]);
    assert_eq!(
        curriculum.validate(),
        Err(ModelError::EmptyGroupName { index: 1 })
    );
}

#[test]
fn curriculum_counts_entries() {
    let curriculum = Curriculum::new(vec![
        LessonGroup::new("A", ["one", "two"]),
        LessonGroup::new("B", ["three"]),
    ])
    .with_language("marathi");
    assert_eq!(curriculum.entry_count(), 3);
    assert_eq!(curriculum.language.as_deref(), Some("marathi"));
}

#[test]
fn options_parse_from_str() {
    assert_eq!("Gujarati".parse::<Script>(), Ok(Script::Gujarati));
    assert_eq!("positional".parse::<MatchMode>(), Ok(MatchMode::Positional));
    assert!("fuzzy".parse::<MatchMode>().is_err());
    assert!(MatchMode::Positional.is_total());
    assert!(!MatchMode::Layered.is_total());
}

#[test]
fn options_serialize_snake_case() {
    let json = serde_json::to_string(&(Script::Devanagari, MatchMode::Layered)).unwrap();
    assert_eq!(json, r#"["devanagari","layered"]"#);
}
