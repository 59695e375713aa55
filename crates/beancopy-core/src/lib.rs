//! Beancopy Core - annotation-driven object-to-object field mapping
//!
//! Given a source bean and a target type, this crate builds a target whose
//! fields are populated from the source: same-name fields are copied by
//! default, and `#[transfer(source = "...")]` bindings on the target override
//! names and bridge instants to epoch milliseconds (and back).
//!
//! # Main Components
//!
//! - **Reflection**: the [`Bean`] trait, generated by `#[derive(Bean)]`
//! - **Value Model**: [`FieldType`], [`FieldValue`], [`FieldDescriptor`]
//! - **Mapping Engine**: [`BeanCopier`] and the `copy_bean*` functions
//! - **Configuration**: [`MapperConfig`], loadable from TOML/JSON and the environment
//! - **Error Handling**: [`Error`] using `thiserror`
//!
//! # Example
//!
//! ```
//! use beancopy_core::{copy_bean, Bean, Result};
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Default, Bean)]
//! struct OrderRecord {
//!     order_no: String,
//!     created_at: DateTime<Utc>,
//! }
//!
//! #[derive(Debug, Default, Bean)]
//! struct OrderView {
//!     order_no: String,
//!     #[transfer(source = "created_at")]
//!     created_ms: i64,
//! }
//!
//! fn example() -> Result<()> {
//!     let record = OrderRecord {
//!         order_no: "A-17".to_string(),
//!         created_at: DateTime::<Utc>::from_timestamp_millis(1_554_768_000_000).unwrap(),
//!     };
//!     let view: OrderView = copy_bean(&record)?;
//!     assert_eq!(view.order_no, "A-17");
//!     assert_eq!(view.created_ms, 1_554_768_000_000);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Lets `#[derive(Bean)]` output resolve `::beancopy_core` inside this crate.
extern crate self as beancopy_core;

pub mod bean;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod transfer;
pub mod types;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use bean::{Bean, BeanField};
pub use beancopy_derive::Bean;
pub use config::{MapperConfig, MismatchPolicy};
pub use error::{Error, Result};
pub use snapshot::snapshot;
pub use transfer::{
    copy_bean, copy_bean_into, copy_bean_into_with, copy_bean_list, copy_bean_list_with,
    copy_bean_with, BeanCopier,
};
pub use types::{FieldDescriptor, FieldType, FieldValue, ValueKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
