//! A* maze solver with a fully deterministic exploration order.

use std::collections::BTreeSet;

use maze_core::Square;

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::node::{NodeId, SearchNode};
use crate::path::reconstruct;
use crate::traits::SearchGrid;

/// Solver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Stop after this many expansions and report [`Outcome::Truncated`].
    /// `None` searches until the goal is found or the frontier is empty.
    pub max_expansions: Option<usize>,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The goal was reached; the path is non-empty.
    Found,
    /// The frontier ran out: the goal is unreachable.
    Exhausted,
    /// The expansion cap was hit before either of the above.
    Truncated,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Squares removed from the frontier and expanded. The goal is not
    /// expanded and is not counted.
    pub expanded: usize,
    /// Nodes created, the start node included.
    pub discovered: usize,
    /// Times a frontier node got a cheaper path.
    pub improved: usize,
    /// Largest frontier heap size seen, stale entries included.
    pub max_frontier: usize,
}

/// The result of a search, detached from the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub outcome: Outcome,
    /// Start to goal inclusive, empty unless `outcome` is `Found`.
    pub path: Vec<Square>,
    /// Every finalized square; always a superset of `path`.
    pub explored: BTreeSet<Square>,
    /// `explored` in the order squares were finalized.
    pub expansion_order: Vec<Square>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of steps on the path, or `None` if there is no path.
    pub fn path_cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// A single-use A* search.
///
/// Construction runs the search to completion; the accessors then report
/// its result. Squares are explored in order of `f = g + h` with `h` the
/// Manhattan distance to the goal, ties broken by smaller `h`, then smaller
/// row, then smaller column. The goal test happens when a node reaches the
/// top of the frontier, never when it is generated, so the first path found
/// is a shortest one.
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Solution,
}

impl Solver {
    /// Solve `grid` without an expansion cap.
    pub fn new<G: SearchGrid + ?Sized>(grid: &G) -> Self {
        Self::with_config(grid, SolverConfig::default())
    }

    /// Solve `grid` with the given configuration.
    pub fn with_config<G: SearchGrid + ?Sized>(grid: &G, config: SolverConfig) -> Self {
        let bounds = grid.bounds();
        let start = grid.start();
        let goal = grid.goal();

        let mut stats = SearchStats::default();
        let mut explored = BTreeSet::new();
        let mut order = Vec::new();
        let mut path = Vec::new();

        log::debug!("solving {bounds} maze from {start} to {goal}");

        let Some(start_idx) = bounds.index(start) else {
            log::warn!("start square {start} is outside the {bounds} maze");
            return Self::finish(Outcome::Exhausted, path, explored, order, stats);
        };

        let mut nodes: Vec<SearchNode> = Vec::new();
        // Flat index of a square -> its node, if discovered.
        let mut slots: Vec<Option<NodeId>> = vec![None; bounds.len()];
        let mut frontier = Frontier::new();

        let mut root = SearchNode::new(start, manhattan(start, goal));
        root.set_g(0);
        root.open = true;
        frontier.push(0, &root);
        nodes.push(root);
        slots[start_idx] = Some(0);
        stats.discovered = 1;
        stats.max_frontier = 1;

        let outcome = loop {
            let Some(ci) = frontier.peek(&nodes) else {
                break Outcome::Exhausted;
            };
            let current = nodes[ci].square();

            if current == goal {
                explored.insert(current);
                order.push(current);
                path = reconstruct(&nodes, ci);
                break Outcome::Found;
            }

            if config
                .max_expansions
                .is_some_and(|cap| stats.expanded >= cap)
            {
                break Outcome::Truncated;
            }

            frontier.pop(&nodes);
            nodes[ci].open = false;
            explored.insert(current);
            order.push(current);
            stats.expanded += 1;

            let current_g = nodes[ci].g();
            log::trace!(
                "expand {current} g={current_g} f={} open={}",
                nodes[ci].f(),
                frontier.len()
            );

            for s in current.neighbors_4() {
                let Some(si) = bounds.index(s) else {
                    continue;
                };
                // A discovered node that is no longer open has been expanded.
                let closed = matches!(slots[si], Some(id) if !nodes[id].open);
                if closed || grid.is_blocked(s) {
                    continue;
                }
                let tentative_g = current_g + 1;

                let id = match slots[si] {
                    None => {
                        let id = nodes.len();
                        nodes.push(SearchNode::new(s, manhattan(s, goal)));
                        slots[si] = Some(id);
                        stats.discovered += 1;
                        id
                    }
                    Some(id) if tentative_g < nodes[id].g() => {
                        stats.improved += 1;
                        id
                    }
                    Some(_) => continue,
                };

                let n = &mut nodes[id];
                n.set_parent(Some(ci));
                n.set_g(tentative_g);
                n.open = true;
                frontier.push(id, n);
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        };

        log::debug!(
            "search {:?}: path of {} squares, {} explored, {} expanded",
            outcome,
            path.len(),
            explored.len(),
            stats.expanded
        );

        Self::finish(outcome, path, explored, order, stats)
    }

    fn finish(
        outcome: Outcome,
        path: Vec<Square>,
        explored: BTreeSet<Square>,
        expansion_order: Vec<Square>,
        stats: SearchStats,
    ) -> Self {
        Self {
            solution: Solution {
                outcome,
                path,
                explored,
                expansion_order,
                stats,
            },
        }
    }

    /// The path from start to goal, both included; empty if none was found.
    pub fn path(&self) -> &[Square] {
        &self.solution.path
    }

    /// Every square that was finalized. Always a superset of [`path`].
    ///
    /// [`path`]: Self::path
    pub fn explored(&self) -> &BTreeSet<Square> {
        &self.solution.explored
    }

    /// Explored squares in the order they were finalized.
    pub fn expansion_order(&self) -> &[Square] {
        &self.solution.expansion_order
    }

    pub fn outcome(&self) -> Outcome {
        self.solution.outcome
    }

    pub fn stats(&self) -> SearchStats {
        self.solution.stats
    }

    /// Number of steps on the path, or `None` if there is no path.
    pub fn path_cost(&self) -> Option<usize> {
        self.solution.path_cost()
    }

    pub fn into_solution(self) -> Solution {
        self.solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Maze;

    fn sq(row: i32, column: i32) -> Square {
        Square::new(row, column)
    }

    fn obstacles() -> Maze {
        Maze::new(3, 4, sq(2, 0), sq(1, 3), [sq(1, 1), sq(2, 2)]).unwrap()
    }

    #[test]
    fn no_obstacles_goes_straight() {
        let maze = Maze::new(2, 13, sq(0, 0), sq(0, 12), []).unwrap();
        let solver = Solver::new(&maze);
        let expected: Vec<_> = (0..=12).map(|c| sq(0, c)).collect();
        assert_eq!(solver.path(), expected.as_slice());
        let expected_explored: BTreeSet<_> = expected.iter().copied().collect();
        assert_eq!(solver.explored(), &expected_explored);
        assert_eq!(solver.outcome(), Outcome::Found);
        assert_eq!(solver.path_cost(), Some(12));
    }

    #[test]
    fn obstacles_go_around() {
        let solver = Solver::new(&obstacles());
        let expected = vec![
            sq(2, 0),
            sq(1, 0),
            sq(0, 0),
            sq(0, 1),
            sq(0, 2),
            sq(0, 3),
            sq(1, 3),
        ];
        assert_eq!(solver.path(), expected.as_slice());
        let mut expected_explored: BTreeSet<_> = expected.into_iter().collect();
        expected_explored.insert(sq(2, 1));
        assert_eq!(solver.explored(), &expected_explored);
    }

    #[test]
    fn expansion_order_follows_tie_breaks() {
        let solver = Solver::new(&obstacles());
        // (1,0) and (2,1) tie on f and h; the smaller row goes first.
        assert_eq!(
            solver.expansion_order(),
            &[
                sq(2, 0),
                sq(1, 0),
                sq(2, 1),
                sq(0, 0),
                sq(0, 1),
                sq(0, 2),
                sq(0, 3),
                sq(1, 3),
            ]
        );
        let stats = solver.stats();
        assert_eq!(stats.expanded, 7);
        // (1,2) is discovered but never expanded.
        assert_eq!(stats.discovered, 9);
    }

    #[test]
    fn start_equals_goal() {
        let maze = Maze::new(3, 3, sq(1, 1), sq(1, 1), []).unwrap();
        let solver = Solver::new(&maze);
        assert_eq!(solver.path(), &[sq(1, 1)]);
        assert_eq!(solver.explored().len(), 1);
        assert_eq!(solver.path_cost(), Some(0));
        assert_eq!(solver.stats().expanded, 0);
    }

    #[test]
    fn walled_off_goal_exhausts_component() {
        // Goal sealed off in the right column.
        let maze = Maze::new(
            3,
            4,
            sq(0, 0),
            sq(1, 3),
            [sq(0, 2), sq(1, 2), sq(2, 2)],
        )
        .unwrap();
        let solver = Solver::new(&maze);
        assert_eq!(solver.outcome(), Outcome::Exhausted);
        assert!(solver.path().is_empty());
        assert_eq!(solver.path_cost(), None);
        let component: BTreeSet<_> = [sq(0, 0), sq(0, 1), sq(1, 0), sq(1, 1), sq(2, 0), sq(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(solver.explored(), &component);
    }

    #[test]
    fn detour_around_wall_is_shortest() {
        let maze: Maze = "\
#######
#     #
#S## G#
#     #
#######
"
        .parse()
        .unwrap();
        let solver = Solver::new(&maze);
        assert_eq!(solver.outcome(), Outcome::Found);
        assert_eq!(solver.path_cost(), Some(6));
        assert_eq!(solver.path().first(), Some(&maze.start()));
        assert_eq!(solver.path().last(), Some(&maze.goal()));
    }

    #[test]
    fn expansion_cap_truncates() {
        let maze = Maze::new(2, 13, sq(0, 0), sq(0, 12), []).unwrap();
        let solver = Solver::with_config(
            &maze,
            SolverConfig {
                max_expansions: Some(5),
            },
        );
        assert_eq!(solver.outcome(), Outcome::Truncated);
        assert!(solver.path().is_empty());
        assert_eq!(solver.explored().len(), 5);
        assert_eq!(solver.stats().expanded, 5);
    }

    #[test]
    fn cap_does_not_hide_a_goal_on_top() {
        let maze = Maze::new(1, 3, sq(0, 0), sq(0, 2), []).unwrap();
        let solver = Solver::with_config(
            &maze,
            SolverConfig {
                max_expansions: Some(2),
            },
        );
        assert_eq!(solver.outcome(), Outcome::Found);
        assert_eq!(solver.path().len(), 3);
    }

    #[test]
    fn expanded_squares_are_never_reopened() {
        // The goal is two columns from the start but the search has to go
        // all the way round the wall.
        let maze: Maze = "\
########
#      #
# #### #
#S#G   #
########
"
        .parse()
        .unwrap();
        let solver = Solver::new(&maze);
        assert_eq!(solver.outcome(), Outcome::Found);
        assert_eq!(solver.path_cost(), Some(12));
        let order = solver.expansion_order();
        let unique: BTreeSet<_> = order.iter().copied().collect();
        assert_eq!(unique.len(), order.len());
        assert_eq!(solver.explored(), &unique);
        assert_eq!(solver.stats().expanded + 1, order.len());
    }

    #[test]
    fn repeated_solves_agree() {
        let a = Solver::new(&obstacles()).into_solution();
        let b = Solver::new(&obstacles()).into_solution();
        assert_eq!(a, b);
    }
}
