#![deny(unsafe_code)]

//! Input side of a reconciliation run: catalogs, curricula, override tables,
//! profiles and the built-in language pipelines.

pub mod builtin;
pub mod catalog;
pub mod curriculum;
pub mod error;
pub mod inputs;
pub mod overrides;
pub mod profile;

pub use builtin::Language;
pub use catalog::{load_catalog, parse_catalog};
pub use curriculum::{load_curriculum, parse_curriculum};
pub use error::{IngestError, Result};
pub use inputs::{InputPlan, Inputs, OverrideSource, load_inputs};
pub use overrides::{load_overrides, parse_overrides};
pub use profile::{MatcherProfile, Profile};
