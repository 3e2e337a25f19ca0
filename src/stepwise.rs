//! Edge-by-edge construction of a vertex cover that exposes its state after every edge, so a
//! front end can replay the construction one frame at a time.

use crate::vc_instance::{VCInstance, Cover};
use std::iter::FusedIterator;

/// The state after one edge has been processed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CoverStep<'a> {
    /// 0-based position of `edge` in the edge order.
    pub step: usize,
    pub edge: (&'a str, &'a str),
    /// The vertex this step added to the cover, if `edge` was not covered yet.
    pub added: Option<&'a str>,
    /// All edges processed so far, including `edge`.
    pub covered_edges: Vec<(&'a str, &'a str)>,
    /// The cover so far, in order of addition.
    pub cover: Vec<&'a str>,
}

/// Lazy sequence of `CoverStep`s, see `VCInstance::cover_steps`.
#[derive(Debug, Clone)]
pub struct CoverSteps<'a> {
    instance: &'a VCInstance,
    next: usize,
    in_cover: Vec<bool>,
    covered_edges: Vec<(&'a str, &'a str)>,
    cover: Vec<&'a str>,
}

impl<'a> Iterator for CoverSteps<'a> {
    type Item = CoverStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let instance = self.instance;
        let &(src, trg) = instance.edge_list().get(self.next)?;
        let edge = (instance.label(src), instance.label(trg));
        let mut added = None;
        if !self.in_cover[src] && !self.in_cover[trg] {
            self.in_cover[src] = true;
            self.cover.push(edge.0);
            added = Some(edge.0);
        }
        self.covered_edges.push(edge);
        let step = CoverStep {
            step: self.next,
            edge,
            added,
            covered_edges: self.covered_edges.clone(),
            cover: self.cover.clone(),
        };
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.instance.num_edges() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CoverSteps<'_> {}

impl FusedIterator for CoverSteps<'_> {}

impl VCInstance {

    /// Returns a fresh lazy sequence with one `CoverStep` per edge, in edge insertion order.
    /// Whenever neither endpoint of the current edge is in the cover yet, its first endpoint is
    /// added. The cover of the last step covers the whole graph.
    ///
    /// Every call starts from an empty cover, and dropping the sequence early is fine.
    pub fn cover_steps(&self) -> CoverSteps<'_> {
        CoverSteps {
            instance: self,
            next: 0,
            in_cover: vec![false; self.graph.num_reserved()],
            covered_edges: Vec::with_capacity(self.num_edges()),
            cover: Vec::new(),
        }
    }

    /// Runs `cover_steps` to the end and returns the resulting cover.
    pub fn edge_by_edge_cover(&self) -> Cover {
        let mut steps = self.cover_steps();
        steps.by_ref().for_each(drop);
        self.cover_from(
            steps.in_cover
                .iter()
                .enumerate()
                .filter_map(|(node, in_cover)| in_cover.then_some(node))
        )
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vc_instance::tests::{edgeless, letters, pentagon};

    #[test]
    fn letters_steps_test() {
        let ins = letters();
        let steps: Vec<CoverStep> = ins.cover_steps().collect();
        assert_eq!(steps.len(), ins.num_edges());
        // A-B adds A, A-C is covered, B-D adds B, C-D adds C, C-E is covered.
        let added: Vec<Option<&str>> = steps.iter().map(|step| step.added).collect();
        assert_eq!(added, vec![Some("A"), None, Some("B"), Some("C"), None]);
        assert_eq!(steps[2].edge, ("B", "D"));
        assert_eq!(steps[2].covered_edges, vec![("A", "B"), ("A", "C"), ("B", "D")]);
        assert_eq!(steps[2].cover, vec!["A", "B"]);
        let last = steps.last().unwrap();
        assert_eq!(last.step, 4);
        assert_eq!(last.cover, vec!["A", "B", "C"]);
        assert_eq!(last.covered_edges.len(), 5);
    }

    #[test]
    fn final_cover_valid_test() {
        for ins in [letters(), pentagon()] {
            let cover = ins.edge_by_edge_cover();
            assert!(ins.validate_solution(&cover));
        }
    }

    #[test]
    fn restart_and_early_stop_test() {
        let ins = pentagon();
        let mut steps = ins.cover_steps();
        assert_eq!(steps.len(), 5);
        let first = steps.next().unwrap();
        assert_eq!(steps.len(), 4);
        drop(steps);
        // A new sequence starts from scratch.
        assert_eq!(ins.cover_steps().next().unwrap(), first);
        assert_eq!(ins.cover_steps().collect::<Vec<_>>(), ins.cover_steps().collect::<Vec<_>>());
    }

    #[test]
    fn edgeless_test() {
        let ins = edgeless(&["A", "B"]);
        assert_eq!(ins.cover_steps().count(), 0);
        assert!(ins.edge_by_edge_cover().is_empty());
    }

    #[test]
    fn exhausted_stays_exhausted_test() {
        let ins = letters();
        let mut steps = ins.cover_steps();
        steps.by_ref().for_each(drop);
        assert!(steps.next().is_none());
        assert_eq!(steps.len(), 0);
    }

}
