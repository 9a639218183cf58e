pub use bfs::{bfs, path as bfs_path, path_with_options as bfs_path_with_options, BreadthQueue};
pub use dfs::{
    dfs, path as dfs_path, path_with_options as dfs_path_with_options, DepthQueue, DfsVariant,
};

mod bfs {
    use std::collections::{HashMap, VecDeque};
    use std::default::Default;

    use tracing::debug;

    use crate::algorithm::visited::{ClosedSet, VisitedList, VisitedSet};
    use crate::algorithm::{check_endpoints, trace_path, Frontier, SearchOptions};
    use crate::errors::{Result, SearchError};
    use crate::graph::{Graph, NodeId};
    use crate::traits::SearchSpace;

    /// First in, first out frontier.
    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> Frontier for BreadthQueue<S> {
        type Item = S;

        fn pop(&mut self) -> Option<Self::Item> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Item) {
            self.queue.push_back(item);
        }

        fn peek(&self) -> Option<&Self::Item> {
            self.queue.front()
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    /// Breadth-first traversal of every node reachable from `start`.
    ///
    /// Nodes come back in level order, and within a level in the
    /// order they were discovered. Nodes which can't be reached
    /// are left out.
    pub fn bfs(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
        graph.check(start)?;

        let mut visited = VisitedList::new(graph.len());
        let mut queue = BreadthQueue::default();
        let mut order = Vec::with_capacity(graph.len());

        // Nodes are marked when they are enqueued, so
        // nothing is ever queued twice.
        visited.mark_visited(start);
        queue.push(start);

        while let Some(node) = queue.pop() {
            order.push(node);
            for &next in graph.neighbors(node)? {
                if visited.mark_visited(next) {
                    queue.push(next);
                }
            }
        }

        debug!(start, visited = order.len(), "breadth-first traversal complete");
        Ok(order)
    }

    /// Shortest path by breadth-first search.
    pub fn path<S>(space: &S, start: S::Node, goal: S::Node) -> Result<Vec<S::Node>>
    where
        S: SearchSpace,
    {
        path_with_options(space, start, goal, &SearchOptions::default())
    }

    pub fn path_with_options<S>(
        space: &S,
        start: S::Node,
        goal: S::Node,
        options: &SearchOptions,
    ) -> Result<Vec<S::Node>>
    where
        S: SearchSpace,
    {
        check_endpoints(space, &start, &goal)?;

        let mut counter = options.counter();
        let mut visited = ClosedSet::default();
        let mut parents: HashMap<S::Node, S::Node> = HashMap::new();
        let mut queue = BreadthQueue::default();

        visited.mark_visited(start);
        queue.push(start);

        while let Some(node) = queue.pop() {
            if node == goal {
                let path = trace_path(goal, |n| parents.get(n).copied());
                debug!(
                    length = path.len(),
                    expanded = counter.steps(),
                    "breadth-first search reached goal"
                );
                return Ok(path);
            }

            counter.increment(queue.len())?;
            for next in space.successors(&node) {
                if visited.mark_visited(next) {
                    parents.insert(next, node);
                    queue.push(next);
                }
            }
        }

        debug!(expanded = counter.steps(), "breadth-first search exhausted");
        Err(SearchError::Unreachable)
    }
}

mod dfs {
    use std::default::Default;

    use tracing::debug;

    use crate::algorithm::visited::{ClosedSet, VisitedList, VisitedSet};
    use crate::algorithm::{check_endpoints, Frontier, SearchOptions};
    use crate::errors::{Result, SearchError};
    use crate::graph::{Graph, NodeId};
    use crate::traits::SearchSpace;

    /// Last in, first out frontier.
    #[derive(Debug)]
    pub struct DepthQueue<S> {
        stack: Vec<S>,
    }

    impl<S> Default for DepthQueue<S> {
        fn default() -> Self {
            DepthQueue { stack: Vec::new() }
        }
    }

    impl<S> Frontier for DepthQueue<S> {
        type Item = S;

        fn pop(&mut self) -> Option<Self::Item> {
            self.stack.pop()
        }

        fn push(&mut self, item: Self::Item) {
            self.stack.push(item);
        }

        fn peek(&self) -> Option<&Self::Item> {
            self.stack.last()
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    /// How [dfs] keeps track of where to backtrack to.
    ///
    /// The two variants visit the same set of nodes, but not always
    /// in the same order. The recursive variant explores neighbors
    /// first to last. The iterative variant pushes every neighbor
    /// onto its stack and so pops them last to first: for the edges
    /// `2 -> 0, 2 -> 3` the recursive variant descends into `0` first
    /// and the iterative one into `3`.
    ///
    /// The recursive variant uses the call stack, so its depth grows
    /// with the longest path it explores. Prefer the iterative variant
    /// for large graphs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DfsVariant {
        Recursive,
        Iterative,
    }

    impl Default for DfsVariant {
        fn default() -> Self {
            DfsVariant::Iterative
        }
    }

    /// Depth-first traversal of every node reachable from `start`.
    pub fn dfs(graph: &Graph, start: NodeId, variant: DfsVariant) -> Result<Vec<NodeId>> {
        graph.check(start)?;

        let mut visited = VisitedList::new(graph.len());
        let mut order = Vec::with_capacity(graph.len());

        match variant {
            DfsVariant::Recursive => recurse(graph, start, &mut visited, &mut order)?,
            DfsVariant::Iterative => iterate(graph, start, &mut visited, &mut order)?,
        }

        debug!(start, ?variant, visited = order.len(), "depth-first traversal complete");
        Ok(order)
    }

    fn recurse(
        graph: &Graph,
        node: NodeId,
        visited: &mut VisitedList,
        order: &mut Vec<NodeId>,
    ) -> Result<()> {
        visited.mark_visited(node);
        order.push(node);

        for &next in graph.neighbors(node)? {
            if !visited.is_visited(&next) {
                recurse(graph, next, visited, order)?;
            }
        }
        Ok(())
    }

    fn iterate(
        graph: &Graph,
        start: NodeId,
        visited: &mut VisitedList,
        order: &mut Vec<NodeId>,
    ) -> Result<()> {
        let mut stack = DepthQueue::default();
        stack.push(start);

        while let Some(node) = stack.pop() {
            // Nodes can be on the stack more than once, only
            // the first one popped counts.
            if !visited.mark_visited(node) {
                continue;
            }
            order.push(node);

            for &next in graph.neighbors(node)? {
                stack.push(next);
            }
        }
        Ok(())
    }

    /// Find a path by depth-first backtracking.
    ///
    /// Successors are tried in order and the first one to lead to the
    /// goal wins, so the path is not necessarily the shortest.
    pub fn path<S>(space: &S, start: S::Node, goal: S::Node) -> Result<Vec<S::Node>>
    where
        S: SearchSpace,
    {
        path_with_options(space, start, goal, &SearchOptions::default())
    }

    pub fn path_with_options<S>(
        space: &S,
        start: S::Node,
        goal: S::Node,
        options: &SearchOptions,
    ) -> Result<Vec<S::Node>>
    where
        S: SearchSpace,
    {
        check_endpoints(space, &start, &goal)?;
        if start == goal {
            return Ok(vec![start]);
        }

        let mut counter = options.counter();
        let mut visited = ClosedSet::default();

        // Each frame holds a node on the current path and
        // the successors of it which remain to be tried.
        let mut stack = DepthQueue::default();
        visited.mark_visited(start);
        stack.push((start, space.successors(&start).into_iter()));

        loop {
            let next = match stack.stack.last_mut() {
                Some((_, remaining)) => remaining.next(),
                None => break,
            };

            match next {
                Some(node) if visited.mark_visited(node) => {
                    counter.increment(stack.len())?;
                    if node == goal {
                        let mut path: Vec<S::Node> =
                            stack.stack.iter().map(|(n, _)| *n).collect();
                        path.push(node);
                        debug!(
                            length = path.len(),
                            expanded = counter.steps(),
                            "depth-first search reached goal"
                        );
                        return Ok(path);
                    }
                    stack.push((node, space.successors(&node).into_iter()));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }

        debug!(expanded = counter.steps(), "depth-first search exhausted");
        Err(SearchError::Unreachable)
    }
}
