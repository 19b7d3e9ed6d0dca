//! Workload metrics (KPIs) for a degree plan.
//!
//! Computes the per-semester figures a workload chart plots, plus summary
//! statistics describing how evenly the load is spread.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Semesters | Number of non-empty semesters |
//! | Span | Calendar slots from first slot to last planned semester |
//! | Credits by semester | Credit total per semester |
//! | Difficulty by semester | Summed difficulty per semester |
//! | Mean / Std Dev | Of credits by semester (population) |
//! | Spread | Max minus min semester credits |

use crate::models::{CourseCatalog, Schedule};

/// Workload indicators for a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadKpi {
    /// Number of semesters with at least one course.
    pub semester_count: usize,
    /// Calendar slots spanned, including skipped slots.
    pub span: usize,
    /// Sum of all credits.
    pub total_credits: u64,
    /// Credit total per semester, in plan order.
    pub credits_by_semester: Vec<u32>,
    /// Summed course difficulty per semester, in plan order.
    pub difficulty_by_semester: Vec<u64>,
    /// Heaviest semester (credits).
    pub max_credits: u32,
    /// Lightest semester (credits).
    pub min_credits: u32,
    /// Mean credits per semester.
    pub mean_credits: f64,
    /// Population standard deviation of credits per semester.
    pub credit_std_dev: f64,
}

impl WorkloadKpi {
    /// Computes KPIs from a schedule and its catalog.
    ///
    /// Difficulty uses catalog ratings; courses absent from the catalog
    /// contribute nothing.
    pub fn calculate(schedule: &Schedule, catalog: &CourseCatalog) -> Self {
        let credits_by_semester = schedule.credits_per_semester();
        let difficulty_by_semester: Vec<u64> = schedule
            .iter()
            .map(|s| {
                s.courses
                    .iter()
                    .filter_map(|c| catalog.get(c))
                    .map(|c| u64::from(c.difficulty))
                    .sum::<u64>()
            })
            .collect();

        let count = credits_by_semester.len();
        let total_credits: u64 = credits_by_semester.iter().copied().map(u64::from).sum();

        let (mean_credits, credit_std_dev) = if count == 0 {
            (0.0, 0.0)
        } else {
            let mean = total_credits as f64 / count as f64;
            let variance = credits_by_semester
                .iter()
                .map(|&c| (c as f64 - mean).powi(2))
                .sum::<f64>()
                / count as f64;
            (mean, variance.sqrt())
        };

        Self {
            semester_count: count,
            span: schedule.span(),
            total_credits,
            max_credits: credits_by_semester.iter().copied().max().unwrap_or(0),
            min_credits: credits_by_semester.iter().copied().min().unwrap_or(0),
            credits_by_semester,
            difficulty_by_semester,
            mean_credits,
            credit_std_dev,
        }
    }

    /// Difference between the heaviest and lightest semester.
    pub fn credit_spread(&self) -> u32 {
        self.max_credits - self.min_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Semester};

    fn catalog() -> CourseCatalog {
        CourseCatalog::new(vec![
            Course::new("A", 12).with_difficulty(4),
            Course::new("B", 6).with_difficulty(2),
            Course::new("C", 6),
        ])
        .unwrap()
    }

    fn schedule() -> Schedule {
        let mut s = Schedule::new();
        let mut first = Semester::new(1);
        first.add_course("A", 12);
        first.add_course("B", 6);
        let mut second = Semester::new(3);
        second.add_course("C", 6);
        s.add_semester(first);
        s.add_semester(second);
        s
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = WorkloadKpi::calculate(&schedule(), &catalog());
        assert_eq!(kpi.semester_count, 2);
        assert_eq!(kpi.span, 3);
        assert_eq!(kpi.total_credits, 24);
        assert_eq!(kpi.credits_by_semester, vec![18, 6]);
        assert_eq!(kpi.difficulty_by_semester, vec![6, 1]);
        assert_eq!(kpi.max_credits, 18);
        assert_eq!(kpi.min_credits, 6);
        assert!((kpi.mean_credits - 12.0).abs() < 1e-10);
        // |18-12| = |6-12| = 6 → std dev 6
        assert!((kpi.credit_std_dev - 6.0).abs() < 1e-10);
        assert_eq!(kpi.credit_spread(), 12);
    }

    #[test]
    fn test_kpi_difficulty_beyond_u32() {
        let catalog = CourseCatalog::new(vec![
            Course::new("HARD", 6).with_difficulty(u32::MAX),
            Course::new("MID", 6).with_difficulty(2),
        ])
        .unwrap();
        let mut semester = Semester::new(1);
        semester.add_course("HARD", 6);
        semester.add_course("MID", 6);
        let mut schedule = Schedule::new();
        schedule.add_semester(semester);

        let kpi = WorkloadKpi::calculate(&schedule, &catalog);
        assert_eq!(kpi.difficulty_by_semester, vec![u64::from(u32::MAX) + 2]);
        assert_eq!(kpi.total_credits, 12);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = WorkloadKpi::calculate(&Schedule::new(), &catalog());
        assert_eq!(kpi.semester_count, 0);
        assert_eq!(kpi.total_credits, 0);
        assert_eq!(kpi.credit_spread(), 0);
        assert!((kpi.mean_credits - 0.0).abs() < 1e-10);
        assert!((kpi.credit_std_dev - 0.0).abs() < 1e-10);
    }
}
