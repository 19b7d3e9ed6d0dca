//! Schedule (solution) model.
//!
//! A schedule is the ordered list of non-empty semesters produced by the
//! planner. Each semester records its calendar slot, season, assigned
//! courses, and credit total.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Season;

/// One semester of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// 1-based calendar slot. Skipped (empty) slots still advance this.
    pub number: usize,
    /// Season of the slot.
    pub season: Season,
    /// Assigned course IDs, in the order they were packed.
    pub courses: Vec<String>,
    /// Sum of the assigned courses' credits.
    pub credits: u32,
}

impl Semester {
    /// Creates an empty semester for a 1-based slot number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            season: Season::for_slot(number.saturating_sub(1)),
            courses: Vec::new(),
            credits: 0,
        }
    }

    /// Adds a course and its credits.
    pub fn add_course(&mut self, course_id: impl Into<String>, credits: u32) {
        self.courses.push(course_id.into());
        self.credits = self.credits.saturating_add(credits);
    }

    /// Academic year of the slot (1-based).
    #[inline]
    pub fn year(&self) -> usize {
        (self.number + 1) / 2
    }

    /// Human-readable label, e.g. "Fall 1" or "Spring 2".
    pub fn label(&self) -> String {
        format!("{} {}", self.season, self.year())
    }

    /// Whether a course is assigned to this semester.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c == course_id)
    }

    /// Whether nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} credits): {}",
            self.label(),
            self.credits,
            self.courses.join(", ")
        )
    }
}

/// A complete degree plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Non-empty semesters in chronological order.
    pub semesters: Vec<Semester>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a semester.
    pub fn add_semester(&mut self, semester: Semester) {
        self.semesters.push(semester);
    }

    /// Number of semesters in the plan.
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Whether the plan has no semesters.
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Iterates semesters in order.
    pub fn iter(&self) -> impl Iterator<Item = &Semester> {
        self.semesters.iter()
    }

    /// Plain course lists, one per semester.
    pub fn course_lists(&self) -> Vec<Vec<String>> {
        self.semesters.iter().map(|s| s.courses.clone()).collect()
    }

    /// Position (0-indexed, within this plan) of the semester holding a course.
    pub fn semester_of(&self, course_id: &str) -> Option<usize> {
        self.semesters.iter().position(|s| s.contains(course_id))
    }

    /// Credit totals per semester.
    pub fn credits_per_semester(&self) -> Vec<u32> {
        self.semesters.iter().map(|s| s.credits).collect()
    }

    /// Sum of credits across the plan.
    pub fn total_credits(&self) -> u64 {
        self.semesters.iter().map(|s| u64::from(s.credits)).sum()
    }

    /// Number of scheduled courses.
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(|s| s.courses.len()).sum()
    }

    /// Calendar slots spanned, counting skipped slots in between.
    pub fn span(&self) -> usize {
        self.semesters.last().map(|s| s.number).unwrap_or(0)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for semester in &self.semesters {
            writeln!(f, "{semester}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        let mut fall = Semester::new(1);
        fall.add_course("A", 12);
        fall.add_course("B", 6);
        let mut spring = Semester::new(4);
        spring.add_course("C", 12);
        s.add_semester(fall);
        s.add_semester(spring);
        s
    }

    #[test]
    fn test_semester_season_and_label() {
        let s1 = Semester::new(1);
        assert_eq!(s1.season, Season::Fall);
        assert_eq!(s1.label(), "Fall 1");

        let s2 = Semester::new(2);
        assert_eq!(s2.season, Season::Spring);
        assert_eq!(s2.label(), "Spring 1");

        let s3 = Semester::new(3);
        assert_eq!(s3.label(), "Fall 2");
        assert_eq!(Semester::new(4).label(), "Spring 2");
    }

    #[test]
    fn test_semester_credits_accumulate() {
        let s = sample_schedule();
        assert_eq!(s.semesters[0].credits, 18);
        assert_eq!(s.credits_per_semester(), vec![18, 12]);
        assert_eq!(s.total_credits(), 30);
        assert_eq!(s.course_count(), 3);
    }

    #[test]
    fn test_large_credit_totals() {
        let mut first = Semester::new(1);
        first.add_course("A", u32::MAX);
        first.add_course("B", 1);
        assert_eq!(first.credits, u32::MAX);

        let mut second = Semester::new(2);
        second.add_course("C", u32::MAX);
        let mut s = Schedule::new();
        s.add_semester(first);
        s.add_semester(second);
        assert_eq!(s.total_credits(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_schedule_lookup() {
        let s = sample_schedule();
        assert_eq!(s.semester_of("A"), Some(0));
        assert_eq!(s.semester_of("C"), Some(1));
        assert_eq!(s.semester_of("Z"), None);
        assert_eq!(
            s.course_lists(),
            vec![vec!["A".to_string(), "B".to_string()], vec!["C".to_string()]]
        );
        assert_eq!(s.span(), 4);
    }

    #[test]
    fn test_display() {
        let s = sample_schedule();
        assert_eq!(s.semesters[0].to_string(), "Fall 1 (18 credits): A, B");
        assert_eq!(
            s.to_string(),
            "Fall 1 (18 credits): A, B\nSpring 2 (12 credits): C\n"
        );
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.total_credits(), 0);
        assert_eq!(s.span(), 0);
    }
}
