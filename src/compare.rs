//! Runs several cover strategies on the same instance and reports their results side by side.

use crate::vc_instance::{VCInstance, Cover};
use crate::budget::SearchBudget;
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Method {
    Greedy,
    BruteForce,
}

impl Method {

    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::BruteForce => "brute_force",
        }
    }

}

/// What one method produced: a cover, or the reason it did not produce one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    Cover(Cover),
    Failed(String),
}

impl Outcome {

    pub fn cover(&self) -> Option<&Cover> {
        match self {
            Self::Cover(cover) => Some(cover),
            Self::Failed(_) => None,
        }
    }

}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Comparison {
    greedy: Cover,
    brute_force: Outcome,
}

impl Comparison {

    /// Returns the result of `method`.
    pub fn get(&self, method: Method) -> Outcome {
        match method {
            Method::Greedy => Outcome::Cover(self.greedy.clone()),
            Method::BruteForce => self.brute_force.clone(),
        }
    }

    /// The greedy cover, which is always present.
    pub fn greedy(&self) -> &Cover {
        &self.greedy
    }

    pub fn brute_force(&self) -> &Outcome {
        &self.brute_force
    }

    /// Returns `(method name, outcome)` pairs in report order.
    pub fn entries(&self) -> Vec<(&'static str, Outcome)> {
        [Method::Greedy, Method::BruteForce]
            .into_iter()
            .map(|method| (method.name(), self.get(method)))
            .collect()
    }

}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Greedy Cover: {}", self.greedy)?;
        match &self.brute_force {
            Outcome::Cover(cover) => write!(f, "Brute Force Cover: {}", cover),
            Outcome::Failed(reason) => write!(f, "Brute Force: {}", reason),
        }
    }
}

impl VCInstance {

    /// Runs the greedy heuristic and the exact search on `self`.
    ///
    /// The exact search runs under `budget`. If it fails or gets aborted, the failure is
    /// recorded as `Outcome::Failed` and the greedy cover is reported anyway.
    pub fn compare(&self, budget: &SearchBudget) -> Comparison {
        let greedy = self.high_degree_heuristic();
        let brute_force = match self.brute_force(budget) {
            Ok(cover) => Outcome::Cover(cover),
            Err(e) => {
                log::warn!("compare: brute force gave no cover: {}", e);
                Outcome::Failed(e.to_string())
            },
        };
        Comparison {
            greedy,
            brute_force,
        }
    }

}
