//! Greedy semester planner and workload KPIs.
//!
//! # Algorithm
//!
//! `SemesterPlanner` fills semesters in chronological order from the
//! topological order of the catalog, packing eligible courses under the
//! credit cap in the order chosen by the dispatching rule engine. It is a
//! greedy heuristic: it does not minimize semesters or balance load
//! globally, and it never backtracks.
//!
//! # KPI
//!
//! `WorkloadKpi` computes per-semester credit and difficulty totals plus
//! load-balance statistics.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Kahn (1962), "Topological sorting of large networks"

mod kpi;
mod planner;

pub use kpi::WorkloadKpi;
pub use planner::{
    build_schedule, PlannerConfig, SemesterPlanner, DEFAULT_SLOT_LIMIT_FACTOR, DEFAULT_STALL_LIMIT,
};
