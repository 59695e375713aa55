//! Mapping engine
//!
//! A mapping call builds (or receives) a target bean, then runs two passes:
//!
//! 1. [`defaults`] copies same-name fields of compatible type (skipped when
//!    same-name copying is off)
//! 2. [`overrides`] fills `#[transfer(source = "...")]` fields from their
//!    named source field, bridging instants and epoch milliseconds through
//!    [`bridge`]
//!
//! The last write wins, so explicit bindings always beat the same-name pass.
//!
//! # Example
//!
//! ```
//! use beancopy_core::{copy_bean_with, Bean};
//!
//! #[derive(Debug, Default, Bean)]
//! struct Source {
//!     str1: String,
//!     int1: i32,
//!     int2: i32,
//! }
//!
//! #[derive(Debug, Default, Bean)]
//! struct Target {
//!     str1: String,
//!     #[transfer(source = "str1")]
//!     str2: String,
//!     #[transfer(source = "int2")]
//!     int1: i32,
//!     int2: i32,
//! }
//!
//! let source = Source { str1: "1".into(), int1: 1, int2: 2 };
//! let target: Target = copy_bean_with(&source, false).unwrap();
//! assert_eq!(target.str2, "1");
//! assert_eq!(target.int1, 2);
//! assert_eq!(target.str1, "");
//! ```
//!
//! Copyright (c) 2025 Beancopy Team
//! Licensed under the Apache-2.0 license

pub mod bridge;
pub mod copier;
pub mod defaults;
pub mod overrides;


pub use bridge::{bridge, needs_bridge};
pub use copier::{
    copy_bean, copy_bean_into, copy_bean_into_with, copy_bean_list, copy_bean_list_with,
    copy_bean_with, BeanCopier,
};
pub use defaults::copy_defaults;
pub use overrides::apply_overrides;
