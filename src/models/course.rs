//! Course model.
//!
//! A course is the unit being scheduled: it carries a credit weight,
//! prerequisite links, the seasons it is taught in, and a difficulty
//! rating used by the balanced heuristic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default difficulty when a course does not specify one.
pub const DEFAULT_DIFFICULTY: u32 = 1;

/// Academic season of a semester slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Fall,
    Spring,
}

impl Season {
    /// Both seasons, in plan order.
    pub const ALL: [Season; 2] = [Season::Fall, Season::Spring];

    /// Season of a 0-indexed slot. Plans start in fall and alternate.
    #[inline]
    pub fn for_slot(slot: usize) -> Self {
        if slot % 2 == 0 {
            Season::Fall
        } else {
            Season::Spring
        }
    }

    /// Lowercase name, as used in catalog documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Fall => "fall",
            Season::Spring => "spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Fall => f.write_str("Fall"),
            Season::Spring => f.write_str("Spring"),
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fall" => Ok(Season::Fall),
            "spring" => Ok(Season::Spring),
            other => Err(format!("unknown season '{other}'")),
        }
    }
}

/// A course in a degree program.
///
/// Defaults are resolved at construction: no prerequisites, offered in
/// both seasons, difficulty [`DEFAULT_DIFFICULTY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (e.g. "CS101").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Credit weight counted against the semester cap.
    pub credits: u32,
    /// Identifiers of courses that must be completed in an earlier semester.
    pub prereqs: Vec<String>,
    /// Seasons in which the course is taught.
    pub offered: Vec<Season>,
    /// Relative difficulty (higher = harder).
    pub difficulty: u32,
}

impl Course {
    /// Creates a course with the given ID and credit weight.
    pub fn new(id: impl Into<String>, credits: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            credits,
            prereqs: Vec::new(),
            offered: Season::ALL.to_vec(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a prerequisite course ID.
    pub fn with_prereq(mut self, prereq: impl Into<String>) -> Self {
        self.prereqs.push(prereq.into());
        self
    }

    /// Adds several prerequisite course IDs.
    pub fn with_prereqs<I, S>(mut self, prereqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prereqs.extend(prereqs.into_iter().map(Into::into));
        self
    }

    /// Restricts the course to the given seasons.
    pub fn offered_in(mut self, seasons: &[Season]) -> Self {
        self.offered = seasons.to_vec();
        self
    }

    /// Restricts the course to a single season.
    pub fn only_in(self, season: Season) -> Self {
        self.offered_in(&[season])
    }

    /// Sets the difficulty rating.
    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Whether the course is taught in the given season.
    #[inline]
    pub fn is_offered_in(&self, season: Season) -> bool {
        self.offered.contains(&season)
    }

    /// Whether `course_id` is a direct prerequisite of this course.
    #[inline]
    pub fn requires(&self, course_id: &str) -> bool {
        self.prereqs.iter().any(|p| p == course_id)
    }
}
