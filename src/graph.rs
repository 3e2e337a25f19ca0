//! Implementation of a simple, undirected graph data structure with basic static and dynamic
//! functions. Nodes are plain indices into an arena; a deleted node keeps its slot so indices
//! stay stable while a solver shrinks its private copy.

use fxhash::FxHashSet;
use std::cmp::Reverse;

/// A simple undirected graph datastructure that supports dynamic behaviour.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct DyUGraph {
    adj_list: Vec<Option<FxHashSet<usize>>>,
}

// Static functions
impl DyUGraph {

    /// Creates a graph with `n` isolated nodes `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        DyUGraph {
            adj_list: vec![Some(FxHashSet::default()); n],
        }
    }

    /// Returns an `Iterator` over all nodes that have not yet been deleted, in index order.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i,adj)| adj.as_ref().map(|_| i))
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the amount of reserved nodes of `self`. Deleted or not.
    pub fn num_reserved(&self) -> usize {
        self.adj_list.len()
    }

    /// Checks if `node` is reserved and not deleted.
    pub fn contains(&self, node: usize) -> bool {
        matches!(self.adj_list.get(node), Some(Some(_)))
    }

    /// Returns the neighborhood of `node`, or `None` if `node` was deleted or never existed.
    pub fn neighbors(&self, node: usize) -> Option<&FxHashSet<usize>> {
        self.adj_list.get(node).and_then(|adj| adj.as_ref())
    }

    /// Returns the degree of `node`, or `None` if `node` was deleted.
    /// A self-loop counts once.
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.neighbors(node).map(|neighbors| neighbors.len())
    }

    /// Returns the node with the highest degree. Among several nodes of maximum degree the one
    /// with the smallest index wins.
    pub fn max_degree_node(&self) -> Option<usize> {
        self.nodes()
            .max_by_key(|node| (self.degree(*node).expect("`node` exists"), Reverse(*node)))
    }

    /// Returns an iterator over all edges `(a, b)` with `a <= b`.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj_list
            .iter()
            .enumerate()
            .filter_map(|(i,adj)| adj.as_ref().map(|adj| (i, adj)))
            .flat_map(|(i,adj)| {
                adj.iter()
                    .filter(move |neigh| i <= **neigh)
                    .map(move |neigh| (i, *neigh))
            })
    }

    /// Returns the number of remaining edges.
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        if let Some(neighs) = self.neighbors(edge.0) {
            return neighs.contains(&edge.1)
        }
        false
    }

    /// Checks if any edge remains.
    pub fn has_edges(&self) -> bool {
        self.adj_list
            .iter()
            .any(|adj| adj.as_ref().map_or(false, |neighs| !neighs.is_empty()))
    }

    /// Checks if `self` is empty (holds no undeleted nodes).
    pub fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

}

// Dynamic functions
impl DyUGraph {

    /// Inserts the undirected edge `{src, trg}`.
    /// Returns `false` if the edge already existed or if either node is missing.
    pub fn add_edge(&mut self, src: usize, trg: usize) -> bool {
        if !self.contains(src) || !self.contains(trg) {
            return false
        }
        let fresh = self.adj_list[src].as_mut().expect("`src` exists").insert(trg);
        self.adj_list[trg].as_mut().expect("`trg` exists").insert(src);
        fresh
    }

    /// Tries to delete `node`.
    /// Returns the old neighborhood of `node` or `None` if nothing was deleted.
    pub fn delete_node(&mut self, node: usize) -> Option<FxHashSet<usize>> {
        let opt_neighbors = self.adj_list.get_mut(node).and_then(|adj| adj.take());
        if let Some(neighborhood) = opt_neighbors.as_ref() {
            for neighbor in neighborhood.iter() {
                if let Some(ref mut nn) = self.adj_list[*neighbor] {
                    nn.remove(&node);
                }
            }
        }
        opt_neighbors
    }

}
