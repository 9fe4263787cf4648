//! Drawing a search result on top of a maze.

use std::collections::HashSet;

use crate::geom::Square;
use crate::maze::Maze;

/// Rune for squares on the path.
pub const PATH: char = '.';
/// Rune for squares that were explored but are not on the path.
pub const EXPLORED: char = '+';

/// Render `maze` with `path` drawn as [`PATH`] and the remaining `explored`
/// squares as [`EXPLORED`]. Start, goal and walls keep their own runes.
pub fn render_solution<'a>(
    maze: &Maze,
    path: &[Square],
    explored: impl IntoIterator<Item = &'a Square>,
) -> String {
    let on_path: HashSet<Square> = path.iter().copied().collect();
    let explored: HashSet<Square> = explored.into_iter().copied().collect();
    maze.render_with(|s| {
        if on_path.contains(&s) {
            Some(PATH)
        } else if explored.contains(&s) {
            Some(EXPLORED)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_path_and_explored() {
        let maze = Maze::new(2, 4, Square::new(0, 0), Square::new(0, 3), [Square::new(1, 3)])
            .unwrap();
        let path = [
            Square::new(0, 0),
            Square::new(0, 1),
            Square::new(0, 2),
            Square::new(0, 3),
        ];
        let explored = [Square::new(1, 0), Square::new(1, 3)];
        let out = render_solution(&maze, &path, path.iter().chain(explored.iter()));
        let expected = "######\n\
                        #S..G#\n\
                        #+  ##\n\
                        ######\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn rendered_solution_parses_back() {
        let maze = Maze::new(2, 3, Square::new(1, 0), Square::new(0, 2), []).unwrap();
        let path = [
            Square::new(1, 0),
            Square::new(0, 0),
            Square::new(0, 1),
            Square::new(0, 2),
        ];
        let out = render_solution(&maze, &path, &[Square::new(1, 1)]);
        let back: Maze = out.parse().unwrap();
        assert_eq!(back, maze);
    }
}
