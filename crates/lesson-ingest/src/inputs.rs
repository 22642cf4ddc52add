//! Resolution of everything a reconciliation run needs.
//!
//! Three layers feed a run: built-in language defaults, a [`Profile`], and
//! explicit command-line choices. [`InputPlan`] describes one layer;
//! [`InputPlan::layered_over`] stacks them and [`load_inputs`] turns the
//! result into loaded data.

use std::path::PathBuf;

use lesson_map::{MatcherSettings, OverrideTable};
use lesson_model::{Catalog, Curriculum, MatchMode};
use tracing::info;

use crate::builtin::Language;
use crate::catalog::load_catalog;
use crate::curriculum::load_curriculum;
use crate::error::{IngestError, Result};
use crate::overrides::load_overrides;
use crate::profile::{MatcherProfile, Profile};

/// Where the override table comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverrideSource {
    /// The built-in table of the selected language, or none without one.
    #[default]
    Default,
    File(PathBuf),
    Disabled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPlan {
    pub language: Option<Language>,
    pub catalog: Option<PathBuf>,
    pub curriculum: Option<PathBuf>,
    pub overrides: OverrideSource,
    pub mode: Option<MatchMode>,
    pub matcher: MatcherProfile,
}

impl InputPlan {
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let language = profile
            .language
            .as_deref()
            .map(str::parse::<Language>)
            .transpose()?;
        let overrides = if profile.no_overrides {
            OverrideSource::Disabled
        } else {
            profile
                .overrides
                .clone()
                .map_or(OverrideSource::Default, OverrideSource::File)
        };
        Ok(Self {
            language,
            catalog: profile.catalog.clone(),
            curriculum: profile.curriculum.clone(),
            overrides,
            mode: profile.mode,
            matcher: profile.matcher,
        })
    }

    /// Stack `self` on top of `lower`: anything set here wins.
    #[must_use]
    pub fn layered_over(self, lower: InputPlan) -> InputPlan {
        InputPlan {
            language: self.language.or(lower.language),
            catalog: self.catalog.or(lower.catalog),
            curriculum: self.curriculum.or(lower.curriculum),
            overrides: match self.overrides {
                OverrideSource::Default => lower.overrides,
                explicit => explicit,
            },
            mode: self.mode.or(lower.mode),
            matcher: lower.matcher.merged_with(&self.matcher),
        }
    }
}

/// Loaded, validated inputs of one run.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub language: Option<Language>,
    pub catalog: Catalog,
    pub curriculum: Curriculum,
    pub overrides: OverrideTable,
    pub mode: MatchMode,
    pub settings: MatcherSettings,
}

/// Load the catalog, curriculum and override table named by `plan` and settle
/// mode and matcher settings.
///
/// Without an explicit curriculum the language's built-in one is used. Mode
/// and script fall back to the language defaults, then to layered and
/// Devanagari.
pub fn load_inputs(plan: &InputPlan) -> Result<Inputs> {
    let catalog_path = plan
        .catalog
        .as_deref()
        .ok_or(IngestError::MissingInput { what: "catalog" })?;
    let catalog = load_catalog(catalog_path)?;

    let curriculum = match (&plan.curriculum, plan.language) {
        (Some(path), _) => load_curriculum(path)?,
        (None, Some(language)) => language.curriculum()?,
        (None, None) => return Err(IngestError::MissingInput { what: "curriculum" }),
    };

    let overrides = match (&plan.overrides, plan.language) {
        (OverrideSource::File(path), _) => load_overrides(path)?,
        (OverrideSource::Default, Some(language)) => language.overrides()?,
        (OverrideSource::Default, None) | (OverrideSource::Disabled, _) => OverrideTable::new(),
    };

    let mode = plan
        .mode
        .or(plan.language.map(|l| l.default_mode()))
        .unwrap_or_default();
    let mut base = MatcherSettings::default();
    if let Some(language) = plan.language {
        base = base.with_script(language.script());
    }
    let settings = plan.matcher.apply(base);

    info!(
        language = plan.language.map_or("custom", |l| l.name()),
        mode = %mode,
        script = %settings.script,
        chapters = catalog.len(),
        entries = curriculum.entry_count(),
        overrides = overrides.len(),
        "inputs ready"
    );

    Ok(Inputs {
        language: plan.language,
        catalog,
        curriculum,
        overrides,
        mode,
        settings,
    })
}
