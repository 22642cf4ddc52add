use std::fs;
use std::path::{Path, PathBuf};

use lesson_cli::pipeline::{RunOptions, explain, run};
use lesson_ingest::{InputPlan, Language, OverrideSource};
use lesson_map::Strategy;
use lesson_model::{ChapterId, MatchMode};
use tempfile::TempDir;

const CHAPTERS: &str = r#"[
    {"id": 1, "title": "Verbs in Marathi – Part 1", "url": "https://example.org/1"},
    {"id": 2, "title": "Verbs in Marathi – Part 2", "url": "https://example.org/2"},
    {"id": 3, "title": "Numbers in Marathi"},
    {"id": 4, "title": "Idioms and Phrases in Marathi"},
    {"id": 5, "title": "Colours in Marathi"}
]"#;

const CURRICULUM: &str = r#"{
    "groups": [
        {"name": "Grammar", "titles": ["Verbs in Marathi", "Verbs in Marathi Part 2"]},
        {"name": "Vocabulary", "titles": ["Numbers in Marathi", "Weather report"]}
    ]
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn options(dir: &Path) -> RunOptions {
    RunOptions {
        plan: InputPlan {
            catalog: Some(write(dir, "chapters.json", CHAPTERS)),
            curriculum: Some(write(dir, "curriculum.json", CURRICULUM)),
            ..InputPlan::default()
        },
        output: dir.join("out").join("lessons_structure.json"),
        report: Some(dir.join("out").join("review.json")),
        dry_run: false,
        hint_threshold: 0.0,
    }
}

fn id(value: u64) -> Option<ChapterId> {
    Some(ChapterId::new(value).unwrap())
}

#[test]
fn run_writes_structure_and_report() {
    let dir = TempDir::new().unwrap();
    let options = options(dir.path());
    let result = run(&options).unwrap();

    assert_eq!(result.mode, MatchMode::Layered);
    assert_eq!(result.chapter_count, 5);
    assert_eq!(result.unmatched(), 1);
    assert_eq!(result.written.len(), 2);

    let grammar = &result.reconciliation.structure.major_lessons[0];
    assert_eq!(grammar.sublessons[0].chapter_id, id(1));
    assert_eq!(grammar.sublessons[1].chapter_id, id(2));

    let structure: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&options.output).unwrap()).unwrap();
    assert_eq!(structure["majorLessons"][1]["sublessons"][1]["chapterId"], serde_json::Value::Null);

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(options.report.as_ref().unwrap()).unwrap(),
    )
    .unwrap();
    assert_eq!(report["unmatched"][0]["title"], "Weather report");
    assert_eq!(report["unclaimedChapters"].as_array().unwrap().len(), 2);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let options = RunOptions {
        dry_run: true,
        ..options(dir.path())
    };
    let result = run(&options).unwrap();
    assert!(result.written.is_empty());
    assert!(!options.output.exists());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn positional_mode_assigns_every_entry_while_chapters_last() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.plan.mode = Some(MatchMode::Positional);
    let result = run(&options).unwrap();

    assert_eq!(result.unmatched(), 0);
    let report = &result.reconciliation.report;
    assert_eq!(report.positional_count(), 2);
    let second_part = &result.reconciliation.structure.major_lessons[0].sublessons[1];
    assert_eq!(second_part.chapter_id, id(2));
    let weather = &result.reconciliation.structure.major_lessons[1].sublessons[1];
    assert_eq!(weather.chapter_id, id(4));
}

const IDIOMS: &str = r#"{
    "groups": [{"name": "Idioms", "titles": [
        "Idioms and Phrases in Marathi / different sentence formation in Marathi",
        "Idioms and Phrases in Marathi / different sentence formation in Marathi Part2"
    ]}]
}"#;

fn idioms_options(dir: &Path, overrides: OverrideSource) -> RunOptions {
    let catalog = write(
        dir,
        "chapters.json",
        r#"[
            {"id": 4, "title": "Idioms and Phrases in Marathi"},
            {"id": 83, "title": "Idioms and Phrases in Marathi Part2"}
        ]"#,
    );
    RunOptions {
        plan: InputPlan {
            language: Some(Language::Marathi),
            catalog: Some(catalog),
            curriculum: Some(write(dir, "curriculum.json", IDIOMS)),
            overrides,
            ..InputPlan::default()
        },
        output: dir.join("lessons_structure.json"),
        report: None,
        dry_run: true,
        hint_threshold: 0.6,
    }
}

#[test]
fn builtin_overrides_apply_to_marathi_idioms() {
    let dir = TempDir::new().unwrap();
    let result = run(&idioms_options(dir.path(), OverrideSource::Default)).unwrap();

    let entries = &result.reconciliation.report.entries;
    assert_eq!(entries[0].chapter_id, id(4));
    assert_eq!(entries[0].strategy, Some(Strategy::Override));
    assert_eq!(entries[1].chapter_id, id(83));
    assert_eq!(entries[1].strategy, Some(Strategy::Override));
    assert_eq!(result.reconciliation.report.matched, 2);
}

#[test]
fn disabled_overrides_fall_back_to_text_matching() {
    let dir = TempDir::new().unwrap();
    let result = run(&idioms_options(dir.path(), OverrideSource::Disabled)).unwrap();

    let entries = &result.reconciliation.report.entries;
    assert_eq!(entries[0].chapter_id, id(4));
    assert_eq!(entries[0].strategy, Some(Strategy::ReverseContainment));
    assert!(entries.iter().all(|e| e.strategy != Some(Strategy::Override)));
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.plan.catalog = Some(dir.path().join("absent.json"));
    let error = run(&options).unwrap_err();
    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn explain_lists_every_strategy_in_chain_order() {
    let dir = TempDir::new().unwrap();
    let options = options(dir.path());
    let explanation = explain(&options.plan, "Verbs in Marathi Part 2").unwrap();

    assert_eq!(explanation.normalized, "verbs in marathi part 2");
    assert!(explanation.later_part);
    assert_eq!(explanation.keywords, vec!["marathi", "part", "verbs"]);
    let strategies: Vec<_> = explanation.rows.iter().map(|r| r.strategy).collect();
    assert_eq!(strategies, Strategy::chain(MatchMode::Layered).to_vec());

    let first_hit = explanation
        .rows
        .iter()
        .find(|r| r.chapter_id.is_some())
        .unwrap();
    assert_eq!(first_hit.strategy, Strategy::KeywordOverlap);
    assert_eq!(first_hit.chapter_id, id(2));
    assert_eq!(
        first_hit.chapter_title.as_deref(),
        Some("Verbs in Marathi – Part 2")
    );
}
