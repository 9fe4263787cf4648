use maze_core::Square;

use crate::node::{NodeId, SearchNode};

/// Walk parent links from `last` back to the start node and return the
/// squares in start-to-`last` order, both ends included.
pub(crate) fn reconstruct(nodes: &[SearchNode], last: NodeId) -> Vec<Square> {
    let mut path = Vec::new();
    let mut cur = Some(last);
    while let Some(id) = cur {
        let node = &nodes[id];
        path.push(node.square());
        cur = node.parent();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_parents_to_the_root() {
        let mut nodes: Vec<SearchNode> = [(0, 0), (0, 1), (1, 1), (1, 2)]
            .into_iter()
            .map(|(r, c)| SearchNode::new(Square::new(r, c), 0))
            .collect();
        nodes[1].set_parent(Some(0));
        nodes[2].set_parent(Some(1));
        nodes[3].set_parent(Some(2));
        assert_eq!(
            reconstruct(&nodes, 3),
            vec![
                Square::new(0, 0),
                Square::new(0, 1),
                Square::new(1, 1),
                Square::new(1, 2),
            ]
        );
        assert_eq!(reconstruct(&nodes, 1), vec![Square::new(0, 0), Square::new(0, 1)]);
    }

    #[test]
    fn root_alone() {
        let nodes = vec![SearchNode::new(Square::new(3, 3), 0)];
        assert_eq!(reconstruct(&nodes, 0), vec![Square::new(3, 3)]);
    }
}
