//! Depth-bounded caller propagation.
//!
//! When an identifier matches inside a function, every caller of that
//! function is affected too, and so on up the call graph. The search walks
//! that chain breadth-first with an explicit worklist so it terminates on
//! any graph shape, cycles included.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

/// Read access to the callers of a function.
pub trait CallGraph {
    /// Returns the functions that call `function`.
    fn callers(&self, function: &str) -> &[String];
}

impl CallGraph for HashMap<String, Vec<String>> {
    fn callers(&self, function: &str) -> &[String] {
        self.get(function).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A caller reached by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagatedCall {
    /// The calling function.
    pub function: String,
    /// Distance from the nearest seed, starting at 1.
    pub depth: usize,
    /// The callee through which the caller was reached.
    pub via: String,
}

/// Breadth-first caller search with its own visited set.
///
/// Functions visited by one [`run`](Self::run) are skipped by the next until
/// [`reset`](Self::reset) is called.
#[derive(Debug, Clone)]
pub struct PropagationSearch {
    max_depth: usize,
    visited: HashSet<String>,
}

impl PropagationSearch {
    /// Creates a search that follows callers up to `max_depth` levels.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            visited: HashSet::new(),
        }
    }

    /// Returns true if `function` was already reached or seeded.
    #[must_use]
    pub fn is_visited(&self, function: &str) -> bool {
        self.visited.contains(function)
    }

    /// Forgets every visited function.
    pub fn reset(&mut self) {
        self.visited.clear();
    }

    /// Returns the callers of `seeds` in breadth-first order.
    ///
    /// Seeds themselves are not reported. Each function appears at most
    /// once, at the smallest depth it can be reached from.
    pub fn run<G, I, S>(&mut self, graph: &G, seeds: I) -> Vec<PropagatedCall>
    where
        G: CallGraph + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut worklist = VecDeque::new();
        for seed in seeds {
            let seed = seed.into();
            if self.visited.insert(seed.clone()) {
                worklist.push_back((seed, 0));
            }
        }

        let mut found = Vec::new();
        while let Some((function, depth)) = worklist.pop_front() {
            if depth >= self.max_depth {
                continue;
            }

            for caller in graph.callers(&function) {
                if !self.visited.insert(caller.clone()) {
                    continue;
                }
                worklist.push_back((caller.clone(), depth + 1));
                found.push(PropagatedCall {
                    function: caller.clone(),
                    depth: depth + 1,
                    via: function.clone(),
                });
            }
        }

        debug!(found = found.len(), max_depth = self.max_depth, "propagated to callers");
        found
    }
}
