//! Degree planning for the U-Engine ecosystem.
//!
//! Turns a course catalog with prerequisites, credit weights, and seasonal
//! offerings into a multi-semester plan under a per-semester credit cap.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Season`, `CourseCatalog`,
//!   `CatalogDocument`, `Semester`, `Schedule`
//! - **`graph`**: Prerequisite graph, topological order, cycle detection
//! - **`dispatching`**: Rules and rule engine that rank eligible courses
//! - **`scheduler`**: Greedy `SemesterPlanner` and `WorkloadKpi`
//! - **`validation`**: Catalog input checks and independent schedule validation
//! - **`error`**: `PlanError`
//!
//! # Example
//!
//! ```
//! use u_curriculum::dispatching::OptimizeMode;
//! use u_curriculum::models::CatalogDocument;
//! use u_curriculum::scheduler::build_schedule;
//! use u_curriculum::validation::validate_plan;
//!
//! let json = r#"{
//!     "metadata": { "university": "Example U", "max_credits_per_semester": 24 },
//!     "courses": {
//!         "CS101": { "name": "Intro", "credits": 12, "offered": ["fall"] },
//!         "CS201": { "name": "Data Structures", "credits": 12, "prereqs": ["CS101"] }
//!     }
//! }"#;
//!
//! let (meta, catalog) = CatalogDocument::from_json_str(json)?.into_parts()?;
//! let cap = meta.max_credits_per_semester;
//! let schedule = build_schedule(&catalog, cap, OptimizeMode::Fastest)?;
//!
//! assert_eq!(schedule.len(), 2);
//! assert!(validate_plan(&catalog, &schedule, cap).is_valid());
//! # Ok::<(), u_curriculum::error::PlanError>(())
//! ```
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod graph;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{PlanError, PlanResult};
