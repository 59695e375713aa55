//! Beancopy Derive - `#[derive(Bean)]` for Beancopy mapping
//!
//! Generates the field table and by-name accessors that `beancopy-core`
//! uses to map one struct onto another. Field-level `#[transfer(...)]`
//! attributes bind a target field to a differently named source field.
//!
//! # Attributes
//!
//! - `#[transfer(source = "name")]` on a field: pull this field from the
//!   source field `name`, overriding the same-name pass
//! - `#[transfer(skip)]` on a field: hide the field from mapping
//! - `#[transfer(constructor = "path")]` on the struct: build instances with
//!   `path()`, a `fn() -> Result<Self, E>`; `Default::default()` otherwise
//!
//! ```ignore
//! #[derive(Default, Bean)]
//! struct OrderView {
//!     #[transfer(source = "order_no")]
//!     number: String,
//!     #[transfer(source = "created_at")]
//!     created_ms: i64,
//!     #[transfer(skip)]
//!     lines: Vec<LineView>,
//! }
//! ```

mod expand;
mod parse;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive `beancopy_core::Bean` for a struct with named fields
#[proc_macro_derive(Bean, attributes(transfer))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    parse::BeanDef::from_derive_input(&input)
        .map(|def| expand::expand(&def))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
