//! Contains the `Helper` trait and other types useful for creating and using helpers.
//!
//! A helper is any type which implements the [`Helper`][`crate::helper::Helper`] trait.
//! Helpers live in a [`Context`][`crate::Context`] next to plain values, and are
//! added with [`insert_helper`][`crate::Context::insert_helper()`].
//!
//! Given this expression:
//!
//! ```html
//! {{ getClassNamesByStatus disabled prefix }}
//! ```
//!
//! The head "getClassNamesByStatus" is resolved first. When it names a helper, the
//! remaining words "disabled" and "prefix" are resolved as well, and the helper is
//! called with their values in order. A word that cannot be resolved is passed as
//! `None`.
//!
//! When the head names a plain value instead, the arguments are ignored and the value
//! itself is rendered.
//!
//! # Examples
//!
//! ```rust
//! use brace::{
//!     helper::serde::{json, Value},
//!     Context, Error,
//! };
//!
//! fn get_class_names_by_status(arguments: &[Option<&Value>]) -> Result<Value, Error> {
//!     let disabled = matches!(arguments.first(), Some(Some(Value::Bool(true))));
//!     let prefix = match arguments.get(1) {
//!         Some(Some(Value::String(prefix))) => prefix.as_str(),
//!         _ => "",
//!     };
//!
//!     if disabled {
//!         Ok(json!(format!("{prefix}disabled")))
//!     } else {
//!         Ok(json!(""))
//!     }
//! }
//!
//! let context = Context::new()
//!     .with_must("disabled", true)
//!     .with_must("prefix", "item-")
//!     .with_helper("getClassNamesByStatus", get_class_names_by_status);
//!
//! let result = brace::render(
//!     r#"<div class="{{getClassNamesByStatus disabled prefix}}"></div>"#,
//!     &context,
//! );
//!
//! assert_eq!(result.unwrap(), r#"<div class="item-disabled"></div>"#);
//! ```
//!
//! If a helper returns an [`Error`] without a visualization, one is generated that
//! points to the helper name in the template.

pub mod serde {
    //! Contains types from `serde_json`.
    pub use serde_json::*;
}

pub use crate::log::Error;

use serde_json::Value;

/// Describes a type which can be called from an expression.
pub trait Helper: Sync + Send {
    /// Execute the helper with the resolved arguments and return a new Value.
    ///
    /// An argument that could not be resolved is `None`.
    fn call(&self, arguments: &[Option<&Value>]) -> Result<Value, Error>;
}

/// Allows any function matching the signature of `call` to be used as a `Helper`,
/// instead of requiring a struct be created.
impl<F> Helper for F
where
    F: Fn(&[Option<&Value>]) -> Result<Value, Error> + Sync + Send,
{
    fn call(&self, arguments: &[Option<&Value>]) -> Result<Value, Error> {
        self(arguments)
    }
}
