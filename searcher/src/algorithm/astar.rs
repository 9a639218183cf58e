//! A* search over a [SearchSpace] with unit step costs.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BinaryHeap, HashMap};
use std::default::Default;

use tracing::{debug, trace};

use super::visited::{ClosedSet, VisitedSet};
use super::{check_endpoints, trace_path, Frontier, SearchOptions};
use crate::errors::{Result, SearchError};
use crate::traits::SearchSpace;

/// A node on the A* frontier, with the cost to reach it (`g`)
/// and the estimated cost from it to the goal (`h`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<N> {
    pub node: N,
    pub g: usize,
    pub h: f64,
}

impl<N> Scored<N> {
    /// Estimated total cost of a path through this node.
    pub fn f(&self) -> f64 {
        self.g as f64 + self.h
    }
}

/// Frontier entry stamped with its insertion order.
#[derive(Debug)]
struct Ranked<N> {
    scored: Scored<N>,
    seq: u64,
}

impl<N> PartialEq for Ranked<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Ranked<N> {}

impl<N> Ord for Ranked<N> {
    // Reversed, so the max-heap pops the lowest f, then the
    // lowest h, then whichever was pushed first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .scored
            .f()
            .total_cmp(&self.scored.f())
            .then_with(|| other.scored.h.total_cmp(&self.scored.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Ranked<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-cost frontier for A*.
///
/// A node may be pushed again when a cheaper way to reach it turns up.
/// The older entry stays in the queue and is discarded by the search
/// when it is eventually popped.
#[derive(Debug)]
pub struct AStarQueue<N> {
    queue: BinaryHeap<Ranked<N>>,
    pushed: u64,
}

impl<N> Default for AStarQueue<N> {
    fn default() -> Self {
        AStarQueue {
            queue: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<N> Frontier for AStarQueue<N> {
    type Item = Scored<N>;

    fn pop(&mut self) -> Option<Self::Item> {
        self.queue.pop().map(|r| r.scored)
    }

    fn push(&mut self, item: Self::Item) {
        self.queue.push(Ranked {
            scored: item,
            seq: self.pushed,
        });
        self.pushed += 1;
    }

    fn peek(&self) -> Option<&Self::Item> {
        self.queue.peek().map(|r| &r.scored)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Best known way to reach a node.
#[derive(Debug, Clone, Copy)]
struct Record<N> {
    g: usize,
    h: f64,
    parent: Option<N>,
}

impl<N> Record<N> {
    fn scored(&self, node: N) -> Scored<N> {
        Scored {
            node,
            g: self.g,
            h: self.h,
        }
    }
}

/// Find the shortest path from `start` to `goal`.
///
/// The returned path includes both endpoints. Fails with
/// [SearchError::InvalidEndpoint] when either end is not passable,
/// and with [SearchError::Unreachable] when no path exists.
pub fn astar<S>(space: &S, start: S::Node, goal: S::Node) -> Result<Vec<S::Node>>
where
    S: SearchSpace,
{
    astar_with_options(space, start, goal, &SearchOptions::default())
}

pub fn astar_with_options<S>(
    space: &S,
    start: S::Node,
    goal: S::Node,
    options: &SearchOptions,
) -> Result<Vec<S::Node>>
where
    S: SearchSpace,
{
    check_endpoints(space, &start, &goal)?;
    debug!(?start, ?goal, "starting A* search");

    let mut counter = options.counter();
    let mut records: HashMap<S::Node, Record<S::Node>> = HashMap::new();
    let mut closed = ClosedSet::default();
    let mut queue = AStarQueue::default();

    let origin = Record {
        g: 0,
        h: space.heuristic(&start, &goal),
        parent: None,
    };
    queue.push(origin.scored(start));
    records.insert(start, origin);

    while let Some(current) = queue.pop() {
        if current.node == goal {
            let path = trace_path(goal, |n| records.get(n).and_then(|r| r.parent));
            debug!(
                length = path.len(),
                expanded = counter.steps(),
                "A* search reached goal"
            );
            return Ok(path);
        }

        // Stale entries: the node was finalized already, or a
        // cheaper route to it was found after this entry was pushed.
        if closed.is_visited(&current.node) {
            continue;
        }
        if records
            .get(&current.node)
            .map_or(false, |r| r.g < current.g)
        {
            continue;
        }

        closed.mark_visited(current.node);
        counter.increment(queue.len())?;
        trace!(node = ?current.node, g = current.g, f = current.f(), "expanding");

        let g = current.g + 1;
        for next in space.successors(&current.node) {
            if closed.is_visited(&next) {
                continue;
            }
            if records.get(&next).map_or(false, |r| r.g <= g) {
                continue;
            }

            let record = Record {
                g,
                h: space.heuristic(&next, &goal),
                parent: Some(current.node),
            };
            queue.push(record.scored(next));
            records.insert(next, record);
        }
    }

    debug!(expanded = counter.steps(), "A* search exhausted");
    Err(SearchError::Unreachable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::helpers::Field;
    use crate::errors::Endpoint;

    fn scored(node: u8, g: usize, h: f64) -> Scored<u8> {
        Scored { node, g, h }
    }

    #[test]
    fn queue_orders_by_cost() {
        let mut queue = AStarQueue::default();
        assert!(queue.is_empty());
        queue.push(scored(0, 5, 1.0));
        queue.push(scored(1, 2, 2.0));
        queue.push(scored(2, 1, 3.0));
        queue.push(scored(3, 4, 0.0));

        // 1, 2 and 3 tie on f = 4 and come out by lowest h.
        assert_eq!(queue.peek().map(|s| s.node), Some(3));
        let order: Vec<u8> = std::iter::from_fn(|| queue.pop()).map(|s| s.node).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn queue_ties_pop_first_pushed() {
        let mut queue = AStarQueue::default();
        queue.push(scored(7, 1, 1.0));
        queue.push(scored(8, 1, 1.0));
        queue.push(scored(9, 1, 1.0));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop().map(|s| s.node), Some(7));
        assert_eq!(queue.pop().map(|s| s.node), Some(8));
        assert_eq!(queue.pop().map(|s| s.node), Some(9));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn open_field() {
        let field = Field::new(5);
        let path = astar(&field, (0, 0), (4, 4)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], (0, 0));
        assert_eq!(path[8], (4, 4));
    }

    #[test]
    fn around_a_wall() {
        let field = Field::new(5).wall(&[(0, 2), (1, 2), (2, 2), (3, 2)]);
        let path = astar(&field, (0, 0), (0, 4)).unwrap();
        assert_eq!(path.len(), 13);
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1);
            assert!(field.is_passable(&b));
        }
    }

    #[test]
    fn same_start_and_goal() {
        let field = Field::new(2);
        assert_eq!(astar(&field, (1, 1), (1, 1)).unwrap(), vec![(1, 1)]);
    }

    #[test]
    fn enclosed_goal() {
        let field = Field::new(5).wall(&[(1, 2), (2, 1), (2, 3), (3, 2)]);
        assert_eq!(astar(&field, (0, 0), (2, 2)), Err(SearchError::Unreachable));
    }

    #[test]
    fn invalid_endpoints() {
        let field = Field::new(3).wall(&[(1, 1)]);
        assert_eq!(
            astar(&field, (1, 1), (0, 0)),
            Err(SearchError::InvalidEndpoint(Endpoint::Start))
        );
        assert_eq!(
            astar(&field, (0, 0), (1, 1)),
            Err(SearchError::InvalidEndpoint(Endpoint::Goal))
        );
        assert_eq!(
            astar(&field, (-1, 0), (0, 0)),
            Err(SearchError::InvalidEndpoint(Endpoint::Start))
        );
    }

    #[test]
    fn deterministic() {
        let field = Field::new(8).wall(&[(3, 3), (3, 4), (4, 3)]);
        let first = astar(&field, (0, 0), (7, 7)).unwrap();
        let second = astar(&field, (0, 0), (7, 7)).unwrap();
        assert_eq!(first, second);
    }

    /// Small directed space where `a` looks further from the goal than it is.
    ///
    /// The search reaches `c` through `b` and `d` first, then finds the
    /// shorter route through `a`, leaving a stale entry for `c` behind.
    struct Shortcut;

    const S: char = 's';
    const A: char = 'a';
    const B: char = 'b';
    const C: char = 'c';
    const D: char = 'd';
    const G: char = 'g';

    impl SearchSpace for Shortcut {
        type Node = char;

        fn is_passable(&self, node: &char) -> bool {
            "sabcdqrg".contains(*node)
        }

        fn successors(&self, node: &char) -> Vec<char> {
            match *node {
                S => vec![A, B],
                A => vec![C],
                B => vec![D],
                D => vec![C],
                C => vec!['q'],
                'q' => vec!['r'],
                'r' => vec![G],
                _ => vec![],
            }
        }

        fn heuristic(&self, node: &char, _goal: &char) -> f64 {
            // Admissible (a is 4 steps out) but not consistent.
            if *node == A {
                1.5
            } else {
                0.0
            }
        }
    }

    #[test]
    fn cheaper_route_replaces_record() {
        let path = astar(&Shortcut, S, G).unwrap();
        assert_eq!(path, vec![S, A, C, 'q', 'r', G]);
    }

    #[test]
    fn stale_entries_are_not_expanded() {
        // s, b, d, a, c, q and r are each expanded once.
        let options = SearchOptions::default().with_limit(7);
        assert!(astar_with_options(&Shortcut, S, G, &options).is_ok());

        let options = SearchOptions::default().with_limit(6);
        assert_eq!(
            astar_with_options(&Shortcut, S, G, &options),
            Err(SearchError::StepLimitExhausted(6))
        );
    }

    #[test]
    fn step_limit() {
        let field = Field::new(20);
        let options = SearchOptions::default().with_limit(3);
        assert_eq!(
            astar_with_options(&field, (0, 0), (19, 19), &options),
            Err(SearchError::StepLimitExhausted(3))
        );

        let options = SearchOptions::default().with_limit(1_000);
        assert!(astar_with_options(&field, (0, 0), (19, 19), &options).is_ok());
    }
}
