//! # Firejob Runner
//!
//! The execution engine for firejob jobs: compiles the request body to
//! canonical JSON, issues the HTTP request exactly once, and folds every
//! outcome (success, error-status response, or transport failure) into a
//! single [`ResponseData`] shape. A scheduler loop driving [`Runner::run`]
//! never has to handle an error path of its own.

pub mod body;
pub mod error;
pub mod response;
pub mod runner;

pub use error::RequestError;
pub use response::ResponseData;
pub use runner::Runner;
