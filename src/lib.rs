//! # inprofile
//!
//! Credit bureau report normalization: turns an Experian INProfile credit
//! report, delivered as the loosely-structured document tree a generic
//! markup parser produces, into a flat [`CreditReport`] ready for storage
//! and display.
//!
//! The source tree is hostile in shape. Any node may be absent, every
//! repeatable element arrives as a single-element sequence even when it is
//! logically scalar, and leaf values show up either as bare strings or as
//! wrapper objects carrying text plus attributes. [`resolve`] walks dotted
//! field paths over that shape and always comes back with a plain string;
//! [`normalize`] assembles the three report sections from their known
//! locations in the tree. Both are total functions: a missing node is an
//! empty field, never an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use inprofile::core::{TreeNode, normalize};
//!
//! let root = TreeNode::map([(
//!     "INProfileResponse",
//!     TreeNode::map([(
//!         "SCORE",
//!         TreeNode::seq([TreeNode::map([(
//!             "BureauScore",
//!             TreeNode::seq([TreeNode::text("772")]),
//!         )])]),
//!     )]),
//! )]);
//!
//! let report = normalize(&root);
//! assert_eq!(report.identity.credit_score, "772");
//! assert!(report.accounts.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Tree model, path resolver, report extraction |
//! | `xml` | Bureau XML ingestion via quick-xml |
//! | `json` | Tree conversion to and from `serde_json::Value` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod xml;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
