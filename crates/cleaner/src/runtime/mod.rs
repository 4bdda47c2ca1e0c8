//! Runtime module — process lifecycle: boot, then one pass of the cleanup pipeline.

pub mod boot;
pub mod run;
