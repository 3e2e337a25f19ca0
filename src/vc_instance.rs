use crate::graph::DyUGraph;
use crate::cust_error::{GraphError, ImportError};
use fxhash::FxHashMap;
use std::fmt;
use std::io::BufRead;

/// A labeled, undirected graph on which the vertex cover solvers operate.
///
/// Vertices are identified by string labels to the outside and by their construction index
/// internally. Both the vertex and the edge order given at construction are kept, since the
/// solvers break ties and iterate in exactly that order.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct VCInstance {
    pub(crate) graph: DyUGraph,
    labels: Vec<String>,
    index: FxHashMap<String, usize>,
    /// Deduplicated edges in insertion order, oriented as first given.
    edge_list: Vec<(usize, usize)>,
}

/// A set of vertex labels, ordered by the construction order of the graph it was computed on.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Cover {
    vertices: Vec<String>,
}

impl VCInstance {

    /// Builds an instance from vertex labels and edges given as label pairs.
    ///
    /// Repeated labels collapse onto their first occurrence, as do repeated edges (in either
    /// orientation). Fails with `GraphError::InvalidEdge` if an edge references a label that is
    /// not among `vertices`.
    pub fn build<V, S, E, T>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        let mut labels = Vec::new();
        let mut index = FxHashMap::default();
        for label in vertices {
            let label = label.into();
            if !index.contains_key(&label) {
                index.insert(label.clone(), labels.len());
                labels.push(label);
            }
        }
        let mut graph = DyUGraph::with_nodes(labels.len());
        let mut edge_list = Vec::new();
        for (src, trg) in edges {
            let (src, trg) = (src.as_ref(), trg.as_ref());
            match (index.get(src), index.get(trg)) {
                (Some(&u), Some(&v)) => {
                    if graph.add_edge(u, v) {
                        edge_list.push((u, v));
                    }
                },
                _ => return Err(GraphError::InvalidEdge { src: src.to_owned(), trg: trg.to_owned() }),
            }
        }
        Ok(VCInstance {
            graph,
            labels,
            index,
            edge_list,
        })
    }

    /// Returns the index of `label`.
    pub(crate) fn node(&self, label: &str) -> Result<usize, GraphError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(label.to_owned()))
    }

    /// Returns the label of `node`.
    pub(crate) fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    /// Returns the edges as node pairs in insertion order.
    pub(crate) fn edge_list(&self) -> &[(usize, usize)] {
        &self.edge_list
    }

    /// Turns a set of nodes into a `Cover`, ordered by construction index.
    pub(crate) fn cover_from<I: IntoIterator<Item = usize>>(&self, nodes: I) -> Cover {
        let mut nodes: Vec<usize> = nodes.into_iter().collect();
        nodes.sort_unstable();
        nodes.dedup();
        Cover {
            vertices: nodes.into_iter().map(|node| self.labels[node].clone()).collect(),
        }
    }

    /// Returns an `Iterator` over all vertex labels in construction order.
    pub fn vertices(&self) -> impl Iterator<Item=&str> + '_ {
        self.graph.nodes().map(move |node| self.label(node))
    }

    /// Returns an `Iterator` over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item=(&str, &str)> + '_ {
        self.edge_list
            .iter()
            .map(move |(src, trg)| (self.label(*src), self.label(*trg)))
    }

    pub fn num_vertices(&self) -> usize {
        self.index.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_list.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the neighbors of `label` in construction order.
    pub fn neighbors(&self, label: &str) -> Result<Vec<&str>, GraphError> {
        let node = self.node(label)?;
        let mut neighbors: Vec<usize> = self.graph
            .neighbors(node)
            .expect("indexed nodes are never deleted")
            .iter()
            .copied()
            .collect();
        neighbors.sort_unstable();
        Ok(neighbors.into_iter().map(|neigh| self.label(neigh)).collect())
    }

    /// Returns the number of edges incident to `label`.
    pub fn degree(&self, label: &str) -> Result<usize, GraphError> {
        let node = self.node(label)?;
        Ok(self.graph.degree(node).expect("indexed nodes are never deleted"))
    }

    /// Removes `label` and all its incident edges.
    /// Returns the former neighbors in construction order, or `GraphError::UnknownVertex` if
    /// `label` is not (or no longer) part of `self`.
    pub fn remove_vertex(&mut self, label: &str) -> Result<Vec<String>, GraphError> {
        let node = self.node(label)?;
        let mut old_neighbors: Vec<usize> = self.graph
            .delete_node(node)
            .expect("indexed nodes are never deleted")
            .into_iter()
            .collect();
        old_neighbors.sort_unstable();
        self.index.remove(label);
        self.edge_list.retain(|(src, trg)| *src != node && *trg != node);
        Ok(old_neighbors.into_iter().map(|neigh| self.labels[neigh].clone()).collect())
    }

    /// Checks if `cover` only holds vertices of `self` and touches every edge.
    pub fn validate_solution(&self, cover: &Cover) -> bool {
        let mut in_cover = vec![false; self.labels.len()];
        for label in cover.iter() {
            match self.index.get(label) {
                Some(&node) => in_cover[node] = true,
                None => return false,
            }
        }
        self.edge_list
            .iter()
            .all(|(src, trg)| in_cover[*src] || in_cover[*trg])
    }

}

impl VCInstance {

    /// Reads an instance from a line based listing:
    /// `c` starts a comment line, `v <label>...` declares vertices and `e <src> <trg>`
    /// declares an edge. Empty lines are ignored.
    pub fn read_list<R: BufRead>(list: R) -> Result<Self, ImportError> {
        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        for line in list.lines() {
            let line = line?;
            let mut s = line.split_whitespace();
            match s.next() {
                None | Some("c") => continue,
                Some("v") => vertices.extend(s.map(str::to_owned)),
                Some("e") => {
                    let src = s.next().ok_or(ImportError::InputMalformedError)?.to_owned();
                    let trg = s.next().ok_or(ImportError::InputMalformedError)?.to_owned();
                    if s.next().is_some() { return Err(ImportError::InputMalformedError); }
                    edges.push((src, trg));
                },
                Some(_) => return Err(ImportError::InputMalformedError),
            }
        }
        Ok(VCInstance::build(vertices, edges)?)
    }

}

impl Cover {

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.vertices.iter().any(|vertex| vertex == label)
    }

    pub fn iter(&self) -> impl Iterator<Item=&str> + '_ {
        self.vertices.iter().map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.vertices
    }

}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.vertices.join(", "))
    }
}
