//! Prerequisite dependency graph.
//!
//! Orders courses so that every prerequisite precedes its dependents, and
//! detects prerequisite cycles.
//!
//! # Algorithm
//! Kahn's algorithm with a FIFO queue seeded in catalog order. The
//! in-degree table built at construction is never mutated; each call to
//! [`DependencyGraph::topological_order`] works on a scratch copy, so the
//! graph can be queried any number of times.
//!
//! # Complexity
//! O(V + E) time and O(V) scratch space per call.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks"

use std::collections::{HashMap, VecDeque};

use crate::error::{PlanError, PlanResult};
use crate::models::CourseCatalog;

/// Directed graph of prerequisite → dependent edges over a catalog.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Course IDs in catalog order; node `i` is `ids[i]`.
    ids: Vec<String>,
    /// Course ID → node.
    index: HashMap<String, usize>,
    /// Number of prerequisites per node.
    in_degree: Vec<usize>,
    /// Forward adjacency: prerequisite → courses that require it.
    dependents: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Builds the graph from a validated catalog.
    pub fn new(catalog: &CourseCatalog) -> Self {
        let n = catalog.len();
        let ids: Vec<String> = catalog.ids().map(str::to_owned).collect();
        let index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let mut in_degree = vec![0; n];
        let mut dependents = vec![Vec::new(); n];

        for (node, course) in catalog.iter().enumerate() {
            for prereq in &course.prereqs {
                // Catalog validation guarantees the prerequisite exists.
                if let Some(from) = catalog.index_of(prereq) {
                    dependents[from].push(node);
                    in_degree[node] += 1;
                }
            }
        }

        Self {
            ids,
            index,
            in_degree,
            dependents,
        }
    }

    /// Number of courses in the graph.
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of prerequisite edges.
    pub fn edge_count(&self) -> usize {
        self.in_degree.iter().sum()
    }

    /// Courses that list `course_id` as a direct prerequisite, in catalog order.
    pub fn dependents_of(&self, course_id: &str) -> Vec<&str> {
        self.position(course_id)
            .map(|i| {
                self.dependents[i]
                    .iter()
                    .map(|&d| self.ids[d].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of courses that list `course_id` as a direct prerequisite.
    pub fn dependent_count(&self, course_id: &str) -> usize {
        self.position(course_id)
            .map(|i| self.dependents[i].len())
            .unwrap_or(0)
    }

    /// Orders all courses so each prerequisite precedes its dependents.
    ///
    /// Among simultaneously available courses, catalog order wins.
    ///
    /// # Errors
    /// [`PlanError::CycleDetected`] if some courses can never be released,
    /// listing those courses in catalog order.
    ///
    /// # Example
    /// ```
    /// use u_curriculum::graph::DependencyGraph;
    /// use u_curriculum::models::{Course, CourseCatalog};
    ///
    /// let catalog = CourseCatalog::new(vec![
    ///     Course::new("B", 6).with_prereq("A"),
    ///     Course::new("A", 6),
    /// ]).unwrap();
    /// let order = DependencyGraph::new(&catalog).topological_order().unwrap();
    /// assert_eq!(order, vec!["A", "B"]);
    /// ```
    pub fn topological_order(&self) -> PlanResult<Vec<String>> {
        let n = self.ids.len();
        let mut remaining = self.in_degree.clone();

        let mut queue: VecDeque<usize> = (0..n).filter(|&i| remaining[i] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &next in &self.dependents[node] {
                remaining[next] -= 1;
                if remaining[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        if order.len() < n {
            let unresolved: Vec<String> = (0..n)
                .filter(|&i| remaining[i] > 0)
                .map(|i| self.ids[i].clone())
                .collect();
            tracing::debug!(
                unresolved = unresolved.len(),
                "topological sort stopped on a cycle"
            );
            return Err(PlanError::CycleDetected { unresolved });
        }

        tracing::debug!(courses = n, "topological sort complete");
        Ok(order.into_iter().map(|i| self.ids[i].clone()).collect())
    }

    fn position(&self, course_id: &str) -> Option<usize> {
        self.index.get(course_id).copied()
    }
}

/// Orders a catalog's courses by prerequisites.
///
/// Shorthand for `DependencyGraph::new(catalog).topological_order()`.
pub fn topological_order(catalog: &CourseCatalog) -> PlanResult<Vec<String>> {
    DependencyGraph::new(catalog).topological_order()
}
