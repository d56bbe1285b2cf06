//! Topic Sequencing
//!
//! Orders topics so prerequisites are studied before dependents, via Kahn's
//! topological sort over the prerequisite graph (edge prerequisite -> topic).
//!
//! Cycle policy: sequencing never fails. Topics caught in a prerequisite
//! cycle are appended to the result in their original relative order, and the
//! result carries an explicit `had_cycle` flag so callers can log or alert
//! instead of inferring the degradation from the order alone.

use std::collections::{HashMap, VecDeque};

use crate::plan::Topic;

/// Outcome of a sequencing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceResult {
    /// Topic names, prerequisites before dependents where the graph allows
    pub order: Vec<String>,
    /// The prerequisite graph contained at least one cycle; the tail of
    /// `order` is best-effort
    pub had_cycle: bool,
}

/// Dependency-aware topic sequencer
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicSequencer;

impl TopicSequencer {
    /// Create a sequencer
    pub fn new() -> Self {
        Self
    }

    /// Order topic names so every prerequisite precedes its dependents
    ///
    /// Prerequisite names that do not match any topic in `topics` are
    /// ignored: the collaborator supplying the graph may reference material
    /// outside this scheduling run, and an unknown prerequisite must not
    /// deadlock the sort. Ties resolve in the insertion order of `topics`.
    pub fn sequence(
        &self,
        topics: &[Topic],
        prerequisites: &HashMap<String, Vec<String>>,
    ) -> SequenceResult {
        let index_of: HashMap<&str, usize> = topics
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.as_str(), i))
            .collect();

        let mut in_degree = vec![0_usize; topics.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); topics.len()];

        for (topic_name, prereqs) in prerequisites {
            let Some(&topic_idx) = index_of.get(topic_name.as_str()) else {
                continue;
            };
            for prereq in prereqs {
                if let Some(&prereq_idx) = index_of.get(prereq.as_str()) {
                    in_degree[topic_idx] += 1;
                    dependents[prereq_idx].push(topic_idx);
                }
            }
        }

        // Dependents were collected in map iteration order; sort each edge
        // list so the walk is deterministic.
        for edges in &mut dependents {
            edges.sort_unstable();
        }

        let mut queue: VecDeque<usize> = (0..topics.len())
            .filter(|&i| in_degree[i] == 0)
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(topics.len());
        let mut placed = vec![false; topics.len()];

        while let Some(idx) = queue.pop_front() {
            placed[idx] = true;
            order.push(topics[idx].name.clone());
            for &dep in &dependents[idx] {
                in_degree[dep] -= 1;
                if in_degree[dep] == 0 {
                    queue.push_back(dep);
                }
            }
        }

        let had_cycle = order.len() < topics.len();
        if had_cycle {
            tracing::warn!(
                unresolved = topics.len() - order.len(),
                "Cyclic prerequisites detected; appending unresolved topics in input order"
            );
            for (i, topic) in topics.iter().enumerate() {
                if !placed[i] {
                    order.push(topic.name.clone());
                }
            }
        }

        SequenceResult { order, had_cycle }
    }
}

// ============================================================================
// TESTS
// ============================================================================
