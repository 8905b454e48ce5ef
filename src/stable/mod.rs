pub mod insertion;
pub mod merge;
