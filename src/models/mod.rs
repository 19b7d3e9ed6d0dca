//! Degree planning domain models.
//!
//! Provides the input types (`Course`, `CourseCatalog`, and the JSON
//! `CatalogDocument` they are loaded from) and the output types
//! (`Semester`, `Schedule`).
//!
//! # Domain Mappings
//!
//! | u-curriculum | Job-shop analogue |
//! |--------------|-------------------|
//! | Course | Task |
//! | Prerequisite | Precedence edge |
//! | Semester | Time bucket with capacity |
//! | Credit cap | Bucket capacity |

mod catalog;
mod course;
mod schedule;

pub use catalog::{CatalogDocument, CatalogMetadata, CourseCatalog, DEFAULT_MAX_CREDITS};
pub use course::{Course, Season, DEFAULT_DIFFICULTY};
pub use schedule::{Schedule, Semester};
