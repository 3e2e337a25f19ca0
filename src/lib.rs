pub mod graph;
pub mod cust_error;
pub mod vc_instance;
pub mod budget;
pub mod brute_force;
pub mod heuristics;
pub mod stepwise;
pub mod compare;
