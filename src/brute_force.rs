//! Exact minimum vertex cover by exhaustive search over subsets of increasing size.

use crate::vc_instance::{VCInstance, Cover};
use crate::budget::SearchBudget;
use crate::cust_error::ProcessingError;
use itertools::Itertools;

/// Number of subset evaluations between two budget checks.
const CHECK_INTERVAL: u64 = 64;

impl VCInstance {

    /// Finds a minimum vertex cover by trying all subsets of size 1, 2, ... in lexicographic
    /// order over the construction order of the vertices. The first subset that covers every
    /// edge is returned, so ties between minimum covers are broken by that order.
    ///
    /// The search is exponential in the number of vertices. `budget` is consulted once before
    /// the search starts (vertex limit) and every `CHECK_INTERVAL` evaluated subsets, starting
    /// with the first one (deadline, cancellation). An instance without edges returns the
    /// empty cover right away.
    ///
    /// `ProcessingError::NoCoverFound` is only returned if the full vertex set does not cover
    /// the instance, which can not happen for a consistent `VCInstance`.
    pub fn brute_force(&self, budget: &SearchBudget) -> Result<Cover, ProcessingError> {
        if self.num_edges() == 0 {
            return Ok(Cover::default())
        }
        let nodes: Vec<usize> = self.graph.nodes().collect();
        budget.check_size(nodes.len())?;
        let mut in_subset = vec![false; self.graph.num_reserved()];
        let mut evaluated: u64 = 0;
        for k in 1..=nodes.len() {
            log::debug!("brute force: trying subsets of size {}", k);
            for subset in nodes.iter().copied().combinations(k) {
                if evaluated % CHECK_INTERVAL == 0 {
                    budget.check()?;
                }
                evaluated += 1;
                if self.covers(&subset, &mut in_subset) {
                    log::info!("brute force: found cover of size {} after {} subsets", k, evaluated);
                    return Ok(self.cover_from(subset))
                }
            }
        }
        Err(ProcessingError::NoCoverFound)
    }

    /// Checks if `subset` touches every edge. `in_subset` is scratch space of size
    /// `num_reserved` and is all `false` again on return.
    fn covers(&self, subset: &[usize], in_subset: &mut [bool]) -> bool {
        for node in subset {
            in_subset[*node] = true;
        }
        let covered = self.edge_list()
            .iter()
            .all(|(src, trg)| in_subset[*src] || in_subset[*trg]);
        for node in subset {
            in_subset[*node] = false;
        }
        covered
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cust_error::AbortReason;
    use crate::vc_instance::tests::{edgeless, letters, pentagon};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use std::time::Instant;

    /// Size of a minimum cover, found by walking all bit masks.
    fn min_cover_size(ins: &VCInstance) -> usize {
        let n = ins.num_vertices();
        let edges: Vec<(usize, usize)> = ins.edge_list().to_vec();
        (0u32..(1 << n))
            .filter(|&mask| edges.iter().all(|&(u, v)| mask & (1u32 << u) != 0 || mask & (1u32 << v) != 0))
            .map(|mask| mask.count_ones() as usize)
            .min()
            .expect("the full mask is a cover")
    }

    fn random_instance(rng: &mut StdRng, n: usize, p: f64) -> VCInstance {
        let vertices: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
        let mut edges = Vec::new();
        for u in 0..n {
            for v in u + 1..n {
                if rng.gen_bool(p) {
                    edges.push((vertices[u].clone(), vertices[v].clone()));
                }
            }
        }
        VCInstance::build(vertices, edges).unwrap()
    }

    #[test]
    fn pentagon_test() {
        // The default graph is the 5-cycle P1-P2-P4-P5-P3, an odd cycle needs 3 vertices.
        let ins = pentagon();
        let cover = ins.brute_force(&SearchBudget::unlimited()).unwrap();
        assert_eq!(cover.len(), 3);
        assert_eq!(cover.len(), min_cover_size(&ins));
        assert!(ins.validate_solution(&cover));
        assert_eq!(cover.labels(), &["P1", "P2", "P5"]);
    }

    #[test]
    fn letters_test() {
        let ins = letters();
        let cover = ins.brute_force(&SearchBudget::unlimited()).unwrap();
        assert_eq!(cover.labels(), &["B", "C"]);
    }

    #[test]
    fn edgeless_test() {
        let ins = edgeless(&["A", "B", "C"]);
        assert!(ins.brute_force(&SearchBudget::unlimited()).unwrap().is_empty());
        assert!(VCInstance::default().brute_force(&SearchBudget::unlimited()).unwrap().is_empty());
    }

    #[test]
    fn self_loop_test() {
        let ins = VCInstance::build(["A", "B"], [("A", "A")]).unwrap();
        let cover = ins.brute_force(&SearchBudget::unlimited()).unwrap();
        assert_eq!(cover.labels(), &["A"]);
    }

    #[test]
    fn removed_vertex_test() {
        let mut ins = letters();
        ins.remove_vertex("C").unwrap();
        let cover = ins.brute_force(&SearchBudget::unlimited()).unwrap();
        assert_eq!(cover.labels(), &["B"]);
    }

    #[test]
    fn abort_test() {
        let ins = pentagon();
        let flag = Arc::new(AtomicBool::new(true));
        let res = ins.brute_force(&SearchBudget::unlimited().with_cancel_flag(flag));
        assert_eq!(res, Err(ProcessingError::Aborted(AbortReason::Cancelled)));
        let res = ins.brute_force(&SearchBudget::unlimited().with_deadline(Instant::now()));
        assert_eq!(res, Err(ProcessingError::Aborted(AbortReason::DeadlineExceeded)));
        let res = ins.brute_force(&SearchBudget::unlimited().with_max_vertices(4));
        assert_eq!(res, Err(ProcessingError::Aborted(AbortReason::TooManyVertices { vertices: 5, limit: 4 })));
    }

    #[test]
    fn random_minimality_test() {
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..40 {
            let ins = random_instance(&mut rng, 2 + round % 8, 0.4);
            let cover = ins.brute_force(&SearchBudget::unlimited()).unwrap();
            assert!(ins.validate_solution(&cover));
            assert_eq!(cover.len(), min_cover_size(&ins));
            // Same instance, same answer.
            assert_eq!(ins.brute_force(&SearchBudget::unlimited()).unwrap(), cover);
        }
    }

}
