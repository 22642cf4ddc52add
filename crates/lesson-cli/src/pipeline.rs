//! Run orchestration: resolved inputs in, reconciled structure and review
//! report out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use lesson_ingest::{InputPlan, Inputs, Language, load_inputs};
use lesson_map::{MatchEngine, Reconciliation, Strategy, reconcile};
use lesson_model::{ChapterId, MatchMode};
use lesson_output::{ReviewReport, write_report, write_structure};
use tracing::{info, info_span};

/// Structure file written when neither the command line nor a profile names one.
pub const DEFAULT_OUTPUT: &str = "lessons_structure.json";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub plan: InputPlan,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub dry_run: bool,
    pub hint_threshold: f32,
}

#[derive(Debug)]
pub struct RunResult {
    pub language: Option<Language>,
    pub mode: MatchMode,
    pub chapter_count: usize,
    pub reconciliation: Reconciliation,
    pub review: ReviewReport,
    /// Files actually written; empty on a dry run.
    pub written: Vec<PathBuf>,
}

impl RunResult {
    pub fn unmatched(&self) -> usize {
        self.reconciliation.report.unmatched
    }
}

pub fn run(options: &RunOptions) -> Result<RunResult> {
    let Inputs {
        language,
        catalog,
        curriculum,
        overrides,
        mode,
        settings,
    } = load_inputs(&options.plan).context("load inputs")?;
    let span = info_span!("run", language = language.map_or("custom", |l| l.name()));
    let _guard = span.enter();

    let engine = MatchEngine::new(&catalog, overrides, mode, settings);
    let reconciliation = reconcile(&engine, &curriculum);
    let review = ReviewReport::build(
        &reconciliation,
        &catalog,
        language.map(|l| l.name()),
        settings,
        options.hint_threshold,
    );

    let mut written = Vec::new();
    if options.dry_run {
        info!("dry run, skipping output files");
    } else {
        write_structure(&options.output, &reconciliation.structure).with_context(|| {
            format!("write lesson structure {}", options.output.display())
        })?;
        written.push(options.output.clone());
        if let Some(path) = &options.report {
            write_report(path, &review)
                .with_context(|| format!("write review report {}", path.display()))?;
            written.push(path.clone());
        }
    }

    Ok(RunResult {
        language,
        mode,
        chapter_count: catalog.len(),
        reconciliation,
        review,
        written,
    })
}

/// One row of an explanation: what a strategy would pick on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainRow {
    pub strategy: Strategy,
    pub chapter_id: Option<ChapterId>,
    pub chapter_title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Explanation {
    pub title: String,
    pub normalized: String,
    pub keywords: Vec<String>,
    pub later_part: bool,
    pub mode: MatchMode,
    pub rows: Vec<ExplainRow>,
}

pub fn explain(plan: &InputPlan, title: &str) -> Result<Explanation> {
    let Inputs {
        catalog,
        overrides,
        mode,
        settings,
        ..
    } = load_inputs(plan).context("load inputs")?;
    let engine = MatchEngine::new(&catalog, overrides, mode, settings);
    let rows = engine
        .explain(title)
        .into_iter()
        .map(|probe| ExplainRow {
            strategy: probe.strategy,
            chapter_id: probe.chapter_id,
            chapter_title: probe
                .chapter_id
                .and_then(|id| catalog.get(id))
                .map(|c| c.title.clone()),
        })
        .collect();
    Ok(Explanation {
        title: title.to_string(),
        normalized: lesson_map::normalize(title),
        keywords: lesson_map::keywords(title, settings.script).into_iter().collect(),
        later_part: lesson_map::is_part_two_or_higher(title),
        mode,
        rows,
    })
}
