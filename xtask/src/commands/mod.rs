//! Command family implementations.

pub mod manifests;
