//! Breadth-first reference searches.
//!
//! Uninformed and independent of the A* bookkeeping, these give ground truth
//! for shortest step counts and reachability on small mazes.

use std::collections::{BTreeSet, VecDeque};

use maze_core::Square;

use crate::node::UNREACHABLE;
use crate::traits::SearchGrid;

/// Step distance from `from` to every square, [`UNREACHABLE`] where no
/// orthogonal path of open squares exists. Indexed row-major.
pub fn bfs_map<G: SearchGrid + ?Sized>(grid: &G, from: Square) -> Vec<i32> {
    let bounds = grid.bounds();
    let mut dist = vec![UNREACHABLE; bounds.len()];
    let Some(si) = bounds.index(from) else {
        return dist;
    };
    if grid.is_blocked(from) {
        return dist;
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let d = dist[ci];
        for n in bounds.square(ci).neighbors_4() {
            let Some(ni) = bounds.index(n) else {
                continue;
            };
            if dist[ni] != UNREACHABLE || grid.is_blocked(n) {
                continue;
            }
            dist[ni] = d + 1;
            queue.push_back(ni);
        }
    }
    dist
}

/// Shortest step count from `from` to `to`, or `None` if unreachable.
pub fn bfs_distance<G: SearchGrid + ?Sized>(grid: &G, from: Square, to: Square) -> Option<usize> {
    let i = grid.bounds().index(to)?;
    match bfs_map(grid, from)[i] {
        UNREACHABLE => None,
        d => Some(d as usize),
    }
}

/// Every square reachable from `from`, `from` included when it is open.
pub fn reachable<G: SearchGrid + ?Sized>(grid: &G, from: Square) -> BTreeSet<Square> {
    let bounds = grid.bounds();
    bfs_map(grid, from)
        .into_iter()
        .enumerate()
        .filter(|&(_, d)| d != UNREACHABLE)
        .map(|(i, _)| bounds.square(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Maze;

    const SPLIT: &str = "\
######
#S # #
#  #G#
#  # #
######
";

    #[test]
    fn distance_on_open_maze() {
        let maze = Maze::new(4, 4, Square::new(0, 0), Square::new(3, 3), []).unwrap();
        assert_eq!(bfs_distance(&maze, maze.start(), maze.goal()), Some(6));
        assert_eq!(bfs_distance(&maze, maze.start(), maze.start()), Some(0));
    }

    #[test]
    fn unreachable_goal() {
        let maze: Maze = SPLIT.parse().unwrap();
        assert_eq!(bfs_distance(&maze, maze.start(), maze.goal()), None);
        let component = reachable(&maze, maze.start());
        assert_eq!(component.len(), 6);
        assert!(component.contains(&Square::new(2, 1)));
        assert!(!component.contains(&maze.goal()));
    }

    #[test]
    fn out_of_bounds_source() {
        let maze: Maze = SPLIT.parse().unwrap();
        assert!(reachable(&maze, Square::new(-1, 0)).is_empty());
        assert_eq!(bfs_distance(&maze, Square::new(9, 9), maze.goal()), None);
    }

    #[test]
    fn blocked_source_reaches_nothing() {
        let maze: Maze = SPLIT.parse().unwrap();
        assert!(reachable(&maze, Square::new(0, 2)).is_empty());
    }
}
