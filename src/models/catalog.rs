//! Course catalog and catalog document models.
//!
//! The catalog is the read-only input to planning. It keeps courses in
//! insertion order, which is the order the dependency graph seeds its
//! queue from and the final tie-breaker for every heuristic.
//!
//! # Document Shape
//!
//! ```json
//! {
//!   "metadata": { "university": "Example U", "max_credits_per_semester": 36 },
//!   "courses": {
//!     "CS101": { "name": "Intro", "credits": 12 },
//!     "CS201": { "name": "Data Structures", "credits": 12,
//!                "prereqs": ["CS101"], "offered": ["spring"], "difficulty": 3 }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Course, Season, DEFAULT_DIFFICULTY};
use crate::error::{PlanError, PlanResult};
use crate::validation::validate_catalog;

/// Credit cap used when a document does not state one.
pub const DEFAULT_MAX_CREDITS: u32 = 36;

/// A validated, insertion-ordered set of courses.
#[derive(Debug, Clone, Serialize)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl CourseCatalog {
    /// Builds a catalog, normalizing and validating the courses.
    ///
    /// Duplicate prerequisite and season entries within a course are
    /// collapsed (first occurrence kept). Fails with
    /// [`PlanError::MalformedCatalog`] on duplicate IDs, unknown
    /// prerequisites, zero credits, zero difficulty, or empty offerings.
    /// Prerequisite cycles are accepted here; they surface when the
    /// courses are ordered.
    pub fn new(courses: Vec<Course>) -> PlanResult<Self> {
        let courses: Vec<Course> = courses.into_iter().map(normalize).collect();
        validate_catalog(&courses).map_err(|errors| PlanError::MalformedCatalog { errors })?;

        let index = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        Ok(Self { courses, index })
    }

    /// Looks up a course by ID.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.index.get(course_id).map(|&i| &self.courses[i])
    }

    /// Position of a course in insertion order.
    pub fn index_of(&self, course_id: &str) -> Option<usize> {
        self.index.get(course_id).copied()
    }

    /// Whether a course exists.
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// Credit weight of a course.
    pub fn credits_of(&self, course_id: &str) -> Option<u32> {
        self.get(course_id).map(|c| c.credits)
    }

    /// Courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Iterates courses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Course IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|c| c.id.as_str())
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of all course credits.
    pub fn total_credits(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credits)).sum()
    }
}

fn normalize(mut course: Course) -> Course {
    let mut seen = Vec::with_capacity(course.prereqs.len());
    course.prereqs.retain(|p| {
        if seen.contains(p) {
            false
        } else {
            seen.push(p.clone());
            true
        }
    });
    let mut offered = Vec::with_capacity(2);
    for season in course.offered {
        if !offered.contains(&season) {
            offered.push(season);
        }
    }
    course.offered = offered;
    course
}

/// Program-level metadata from a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Institution name.
    #[serde(default)]
    pub university: String,
    /// Credit cap per semester.
    #[serde(default = "default_max_credits", alias = "max_credits")]
    pub max_credits_per_semester: u32,
}

fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS
}

/// A parsed catalog document (metadata + courses in document order).
///
/// The document is not validated until [`CatalogDocument::into_parts`].
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub metadata: CatalogMetadata,
    #[serde(deserialize_with = "courses_in_order")]
    pub courses: Vec<Course>,
}

impl CatalogDocument {
    /// Parses a document from JSON text.
    pub fn from_json_str(json: &str) -> PlanResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the courses and splits the document.
    pub fn into_parts(self) -> PlanResult<(CatalogMetadata, CourseCatalog)> {
        let catalog = CourseCatalog::new(self.courses)?;
        Ok((self.metadata, catalog))
    }
}

/// Course body as it appears under its ID key.
#[derive(Deserialize)]
struct CourseEntry {
    name: String,
    credits: u32,
    #[serde(default)]
    prereqs: Vec<String>,
    #[serde(default = "all_seasons")]
    offered: Vec<Season>,
    #[serde(default)]
    difficulty: Option<u32>,
}

fn all_seasons() -> Vec<Season> {
    Season::ALL.to_vec()
}

impl CourseEntry {
    fn into_course(self, id: String) -> Course {
        Course {
            id,
            name: self.name,
            credits: self.credits,
            prereqs: self.prereqs,
            offered: self.offered,
            difficulty: self.difficulty.unwrap_or(DEFAULT_DIFFICULTY),
        }
    }
}

// Visits the course map entry by entry so document order survives.
fn courses_in_order<'de, D>(deserializer: D) -> Result<Vec<Course>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedCourses;

    impl<'de> Visitor<'de> for OrderedCourses {
        type Value = Vec<Course>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of course id to course")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut courses = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, entry)) = map.next_entry::<String, CourseEntry>()? {
                courses.push(entry.into_course(id));
            }
            Ok(courses)
        }
    }

    deserializer.deserialize_map(OrderedCourses)
}
