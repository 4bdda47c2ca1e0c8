// Domain-driven module structure for the Docker cleaner.

// Core infrastructure
pub mod conf;
pub mod docker;
pub mod client;
pub mod error;

// Domain modules
pub mod filter;
pub mod confirm;
pub mod action;
pub mod runtime;
