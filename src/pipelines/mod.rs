pub mod annotate;
pub mod cache;
pub mod self_check;
pub mod sentiment;
pub mod stats;
