//! Provides the building blocks for search algorithms

use tracing::debug;

use crate::errors::{Endpoint, Result, SearchError};
use crate::traits::SearchSpace;

pub(crate) mod astar;
pub(crate) mod basic;
pub mod visited;

/// Trait used to implement the frontier of a search: nodes which
/// have been discovered but not yet processed.
///
/// The order in which items come back out of [Frontier::pop]
/// is what distinguishes one search algorithm from another.
pub trait Frontier {
    type Item;

    fn push(&mut self, item: Self::Item);

    fn pop(&mut self) -> Option<Self::Item>;

    /// The item the next call to [Frontier::pop] would return.
    fn peek(&self) -> Option<&Self::Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tuning knobs shared by the path searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up after expanding this many nodes.
    pub limit: Option<usize>,

    /// Emit a progress event every this many expansions.
    pub verbose: Option<usize>,
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_verbose(mut self, every: usize) -> Self {
        self.verbose = Some(every);
        self
    }

    pub(crate) fn counter(&self) -> StepCounter {
        StepCounter {
            current: 0,
            limit: self.limit,
            verbose: self.verbose.filter(|&every| every > 0),
        }
    }
}

/// Counts expansions against the limit in [SearchOptions].
#[derive(Debug)]
pub(crate) struct StepCounter {
    current: usize,
    limit: Option<usize>,
    verbose: Option<usize>,
}

impl StepCounter {
    pub(crate) fn increment(&mut self, frontier: usize) -> Result<()> {
        self.current += 1;

        if let Some(every) = self.verbose {
            if self.current % every == 0 {
                debug!(steps = self.current, frontier, "search progress");
            }
        }

        match self.limit {
            Some(maximum) if self.current > maximum => {
                Err(SearchError::StepLimitExhausted(maximum))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn steps(&self) -> usize {
        self.current
    }
}

/// Both ends of a path search must be passable before any work is done.
pub(crate) fn check_endpoints<S>(space: &S, start: &S::Node, goal: &S::Node) -> Result<()>
where
    S: SearchSpace,
{
    if !space.is_passable(start) {
        return Err(SearchError::InvalidEndpoint(Endpoint::Start));
    }
    if !space.is_passable(goal) {
        return Err(SearchError::InvalidEndpoint(Endpoint::Goal));
    }
    Ok(())
}

/// Follow parent links back from the goal, then reverse
/// so the path reads from start to goal.
pub(crate) fn trace_path<N, F>(goal: N, parent: F) -> Vec<N>
where
    N: Copy,
    F: Fn(&N) -> Option<N>,
{
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(previous) = parent(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_follows_parents() {
        let parents = [None, Some(0), Some(1), Some(1)];
        assert_eq!(trace_path(3, |n: &usize| parents[*n]), vec![0, 1, 3]);
        assert_eq!(trace_path(0, |n: &usize| parents[*n]), vec![0]);
    }

    #[test]
    fn step_limit() {
        let mut counter = SearchOptions::default().with_limit(2).counter();
        assert!(counter.increment(0).is_ok());
        assert!(counter.increment(0).is_ok());
        assert_eq!(
            counter.increment(0),
            Err(SearchError::StepLimitExhausted(2))
        );
        assert_eq!(counter.steps(), 3);
    }

    #[test]
    fn unlimited_by_default() {
        let mut counter = SearchOptions::default().with_verbose(0).counter();
        for _ in 0..1_000 {
            counter.increment(1).unwrap();
        }
        assert_eq!(counter.steps(), 1_000);
    }
}
