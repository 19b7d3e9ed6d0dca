//! Planning context for dispatching rule evaluation.

use std::collections::HashMap;

use crate::graph::DependencyGraph;
use crate::models::CourseCatalog;

/// Planning state passed to dispatching rules.
///
/// Dependent counts and topological positions are fixed for a planning
/// run, so the context is computed once before the first semester.
#[derive(Debug, Clone, Default)]
pub struct PlanningContext {
    /// Direct dependents per course (course_id → count).
    pub dependent_counts: HashMap<String, usize>,
    /// Position of each course in the topological order.
    pub topo_positions: HashMap<String, usize>,
}

impl PlanningContext {
    /// Builds a context from a catalog, its graph, and a topological order.
    pub fn from_graph(catalog: &CourseCatalog, graph: &DependencyGraph, order: &[String]) -> Self {
        let dependent_counts = catalog
            .ids()
            .map(|id| (id.to_owned(), graph.dependent_count(id)))
            .collect();
        let topo_positions = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        Self {
            dependent_counts,
            topo_positions,
        }
    }

    /// Sets the dependent count for a course.
    pub fn with_dependents(mut self, course_id: impl Into<String>, count: usize) -> Self {
        self.dependent_counts.insert(course_id.into(), count);
        self
    }

    /// Sets the topological position for a course.
    pub fn with_topo_position(mut self, course_id: impl Into<String>, position: usize) -> Self {
        self.topo_positions.insert(course_id.into(), position);
        self
    }
}
