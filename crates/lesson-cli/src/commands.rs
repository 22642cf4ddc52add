use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use lesson_ingest::{InputPlan, Language, MatcherProfile, OverrideSource, Profile};
use lesson_map::Strategy;
use lesson_model::MatchMode;
use tracing::debug;

use crate::cli::{ExplainArgs, ReconcileArgs, SourceArgs};
use crate::summary::{apply_table_style, print_explanation};
use lesson_cli::pipeline::{self, DEFAULT_OUTPUT, RunOptions, RunResult};

pub fn run_reconcile(args: &ReconcileArgs) -> Result<RunResult> {
    let (plan, profile) = plan_from_args(&args.source)?;
    let output = args
        .output
        .clone()
        .or(profile.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let report = args.report.clone().or(profile.report);
    let options = RunOptions {
        plan,
        output,
        report,
        dry_run: args.dry_run,
        hint_threshold: args.hint_threshold,
    };
    pipeline::run(&options)
}

pub fn run_explain(args: &ExplainArgs) -> Result<()> {
    let (plan, _) = plan_from_args(&args.source)?;
    let explanation = pipeline::explain(&plan, &args.title)?;
    print_explanation(&explanation);
    Ok(())
}

pub fn run_curricula() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        "Language",
        "Script",
        "Mode",
        "Groups",
        "Entries",
        "Overrides",
    ]);
    apply_table_style(&mut table);
    for language in Language::ALL {
        let curriculum = language
            .curriculum()
            .with_context(|| format!("load built-in {language} curriculum"))?;
        let overrides = language
            .overrides()
            .with_context(|| format!("load built-in {language} overrides"))?;
        table.add_row(vec![
            language.name().to_string(),
            language.script().to_string(),
            language.default_mode().to_string(),
            curriculum.groups.len().to_string(),
            curriculum.entry_count().to_string(),
            overrides.len().to_string(),
        ]);
    }
    println!("{table}");
    println!("Strategies (layered): {}", chain_labels(MatchMode::Layered));
    println!(
        "Strategies (positional): {}",
        chain_labels(MatchMode::Positional)
    );
    Ok(())
}

/// Stack command-line choices over the profile named by `--config`, if any.
fn plan_from_args(args: &SourceArgs) -> Result<(InputPlan, Profile)> {
    let profile = match &args.config {
        Some(path) => {
            Profile::load(path).with_context(|| format!("load profile {}", path.display()))?
        }
        None => Profile::default(),
    };
    let from_profile = InputPlan::from_profile(&profile).context("read profile")?;

    let overrides = if args.no_overrides {
        OverrideSource::Disabled
    } else {
        args.overrides
            .clone()
            .map_or(OverrideSource::Default, OverrideSource::File)
    };
    let from_cli = InputPlan {
        language: args.language.map(Language::from),
        catalog: args.catalog.clone(),
        curriculum: args.curriculum.clone(),
        overrides,
        mode: args.mode.map(MatchMode::from),
        matcher: MatcherProfile {
            script: args.script.map(Into::into),
            ..MatcherProfile::default()
        },
    };
    let plan = from_cli.layered_over(from_profile);
    debug!(?plan, "resolved input plan");
    Ok((plan, profile))
}

fn chain_labels(mode: MatchMode) -> String {
    Strategy::chain(mode)
        .iter()
        .map(Strategy::label)
        .collect::<Vec<_>>()
        .join(" -> ")
}
