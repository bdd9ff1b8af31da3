// Distance graph: symmetric weighted adjacency matrix over location indices

use crate::error::{Result, RouteError};
use crate::models::{Distance, LocationId};
use petgraph::graph::UnGraph;

/// Immutable, validated road distances between every pair of locations
///
/// A stored weight of `0` between two distinct locations means there is no
/// direct road. Solvers read the matrix through [`edge`](Self::edge), which
/// turns that convention into an explicit `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceGraph {
    size: usize,
    /// Row-major `size * size` weights
    weights: Vec<Distance>,
}

impl DistanceGraph {
    /// Builds the graph from matrix rows, checking that the matrix is
    /// non-empty, square, zero on the diagonal and symmetric, and that the
    /// sum of all roads fits in a [`Distance`]
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(RouteError::MalformedGraph(
                "distance matrix is empty".to_string(),
            ));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(RouteError::MalformedGraph(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
        }

        for i in 0..size {
            if rows[i][i] != 0 {
                return Err(RouteError::MalformedGraph(format!(
                    "diagonal entry ({}, {}) is {}, expected 0",
                    i, i, rows[i][i]
                )));
            }
            for j in (i + 1)..size {
                if rows[i][j] != rows[j][i] {
                    return Err(RouteError::MalformedGraph(format!(
                        "entries ({}, {}) = {} and ({}, {}) = {} differ",
                        i, j, rows[i][j], j, i, rows[j][i]
                    )));
                }
            }
        }

        // Every simple path uses each road at most once, so bounding the sum
        // of all roads bounds every distance the solvers can accumulate
        let mut total: Distance = 0;
        for i in 0..size {
            for j in (i + 1)..size {
                total = total.checked_add(rows[i][j]).ok_or_else(|| {
                    RouteError::MalformedGraph(format!(
                        "total road distance overflows at ({}, {})",
                        i, j
                    ))
                })?;
            }
        }

        Ok(Self {
            size,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of locations covered by the matrix
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Fails with `InvalidIndex` unless `index` is a location of this graph
    pub(crate) fn check(&self, index: LocationId) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(RouteError::InvalidIndex {
                index,
                len: self.size,
            })
        }
    }

    /// Raw matrix entry, `0` included
    pub fn weight(&self, from: LocationId, to: LocationId) -> Result<Distance> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.weights[from * self.size + to])
    }

    /// Direct road between two distinct locations, if any
    pub fn edge(&self, from: LocationId, to: LocationId) -> Result<Option<Distance>> {
        let weight = self.weight(from, to)?;
        Ok((from != to && weight != 0).then_some(weight))
    }

    /// Locations reachable by a direct road from `from`, in index order
    pub fn neighbors(
        &self,
        from: LocationId,
    ) -> Result<impl Iterator<Item = (LocationId, Distance)> + '_> {
        self.check(from)?;
        let row = &self.weights[from * self.size..(from + 1) * self.size];
        Ok(row
            .iter()
            .enumerate()
            .filter(move |&(to, &weight)| to != from && weight != 0)
            .map(|(to, &weight)| (to, weight)))
    }

    /// Exports the roads as an undirected petgraph graph
    ///
    /// Node `i` carries location index `i`; absent roads produce no edge.
    pub fn to_ungraph(&self) -> UnGraph<LocationId, Distance> {
        let mut graph = UnGraph::with_capacity(self.size, self.size * self.size / 2);
        let nodes: Vec<_> = (0..self.size).map(|id| graph.add_node(id)).collect();

        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let weight = self.weights[i * self.size + j];
                if weight != 0 {
                    graph.add_edge(nodes[i], nodes[j], weight);
                }
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> DistanceGraph {
        DistanceGraph::from_rows(vec![
            vec![0, 4, 0],
            vec![4, 0, 9],
            vec![0, 9, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_weight_and_symmetry() {
        let graph = create_test_graph();
        for i in 0..graph.len() {
            assert_eq!(graph.weight(i, i).unwrap(), 0);
            for j in 0..graph.len() {
                assert_eq!(graph.weight(i, j).unwrap(), graph.weight(j, i).unwrap());
            }
        }
        assert_eq!(graph.weight(1, 2).unwrap(), 9);
    }

    #[test]
    fn test_edge_treats_zero_as_absent() {
        let graph = create_test_graph();
        assert_eq!(graph.edge(0, 1).unwrap(), Some(4));
        assert_eq!(graph.edge(0, 2).unwrap(), None);
        assert_eq!(graph.edge(1, 1).unwrap(), None);
    }

    #[test]
    fn test_invalid_index() {
        let graph = create_test_graph();
        assert!(matches!(
            graph.weight(0, 3),
            Err(RouteError::InvalidIndex { index: 3, len: 3 })
        ));
        assert!(graph.edge(7, 0).is_err());
        assert!(graph.neighbors(3).is_err());
    }

    #[test]
    fn test_neighbors() {
        let graph = create_test_graph();
        let neighbors: Vec<_> = graph.neighbors(1).unwrap().collect();
        assert_eq!(neighbors, vec![(0, 4), (2, 9)]);
        let neighbors: Vec<_> = graph.neighbors(2).unwrap().collect();
        assert_eq!(neighbors, vec![(1, 9)]);
    }

    #[test]
    fn test_rejects_non_square() {
        let result = DistanceGraph::from_rows(vec![vec![0, 1], vec![1, 0, 2]]);
        assert!(matches!(result, Err(RouteError::MalformedGraph(_))));
    }

    #[test]
    fn test_rejects_asymmetric() {
        let result = DistanceGraph::from_rows(vec![vec![0, 1], vec![2, 0]]);
        assert!(matches!(result, Err(RouteError::MalformedGraph(msg)) if msg.contains("differ")));
    }

    #[test]
    fn test_rejects_non_zero_diagonal() {
        let result = DistanceGraph::from_rows(vec![vec![0, 1], vec![1, 3]]);
        assert!(matches!(result, Err(RouteError::MalformedGraph(_))));
    }

    #[test]
    fn test_rejects_overflowing_total() {
        // A-B at the limit plus B-C could not be summed along A-B-C
        let result = DistanceGraph::from_rows(vec![
            vec![0, Distance::MAX, 0],
            vec![Distance::MAX, 0, 1],
            vec![0, 1, 0],
        ]);
        assert!(matches!(result, Err(RouteError::MalformedGraph(msg)) if msg.contains("overflows")));
    }

    #[test]
    fn test_accepts_total_at_limit() {
        let graph = DistanceGraph::from_rows(vec![
            vec![0, Distance::MAX - 1, 0],
            vec![Distance::MAX - 1, 0, 1],
            vec![0, 1, 0],
        ])
        .unwrap();
        assert_eq!(graph.edge(0, 1).unwrap(), Some(Distance::MAX - 1));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(DistanceGraph::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_to_ungraph_skips_absent_roads() {
        let graph = create_test_graph().to_ungraph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }
}
