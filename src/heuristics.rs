//! Greedy heuristic for the Vertex Cover Problem.

use crate::vc_instance::{VCInstance, Cover};

impl VCInstance {

    /// Computes a cover by repeatedly adding the node with the highest degree to the solution
    /// and deleting it from a private copy of the graph, until no edge remains.
    ///
    /// Among several nodes of maximum degree the one declared first wins, so the result is
    /// reproducible. The cover is valid but not necessarily minimum, and this max-degree rule
    /// carries no constant approximation guarantee.
    pub fn high_degree_heuristic(&self) -> Cover {
        let mut clone = self.graph.clone();
        let mut solution = Vec::new();
        while clone.has_edges() {
            let max_node = clone
                .max_degree_node()
                .expect("`clone` has edges and thus nodes");
            log::debug!(
                "greedy: picking {} with degree {}",
                self.label(max_node),
                clone.degree(max_node).expect("`max_node` exists"),
            );
            clone.delete_node(max_node);
            solution.push(max_node);
        }
        log::info!("greedy: found cover of size {}", solution.len());
        self.cover_from(solution)
    }

}
