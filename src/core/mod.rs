//! Tree model, path resolution, and report extraction.
//!
//! This module provides the foundational pieces for normalizing a parsed
//! bureau response: the [`TreeNode`] document shape, the dotted-path
//! [`resolve`] walk, and [`normalize`] which assembles a [`CreditReport`].

mod error;
mod extract;
mod resolve;
mod tree;
mod types;

pub use error::*;
pub use extract::*;
pub use resolve::*;
pub use tree::*;
pub use types::*;
