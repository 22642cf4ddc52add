pub mod catalog;
pub mod curriculum;
pub mod error;
pub mod ids;
pub mod options;
pub mod structure;

pub use catalog::{Catalog, Chapter};
pub use curriculum::{Curriculum, LessonGroup};
pub use error::{ModelError, Result};
pub use ids::ChapterId;
pub use options::{MatchMode, Script};
pub use structure::{LessonStructure, MajorLesson, Sublesson};
