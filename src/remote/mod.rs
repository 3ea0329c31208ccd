//! Remote clients for the hosting API and the oracle proxy.
//!
//! Both clients absorb failures at this boundary: the repository browser
//! degrades to empty collections, the oracle to a fixed sentinel string.
//! Nothing in this module returns an `Err` to the interactive layer.

pub mod github;
pub mod oracle;

pub use github::{FILE_STREAM_ERROR, GithubClient, RepoBrowser};
pub use oracle::{HttpOracle, ORACLE_OFFLINE, Oracle};
