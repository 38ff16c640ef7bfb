//! Bind environment variables into typed configuration records
//!
//! `envbind` fills a struct from environment variables, driven by one compact
//! option string per field. The option string names the variable, marks it
//! as required or gives it a default, and may bound numeric values.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(EnvBind)]` plus `#[env("...")]` per field
//! - **Nested records**: fields whose type derives `EnvBind` are bound recursively
//! - **Type-checked schema**: unsupported field types are rejected at compile time
//! - **Bounds**: `min`/`max` on integer and float fields
//! - **Pluggable source**: bind from the process environment or any map
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, EnvBind)]
//! struct Config {
//!     #[env("name=HOST,required")]
//!     pub host: String,
//!
//!     #[env("name=PORT,default=8080")]
//!     pub port: u16,
//!
//!     #[env("name=WORKERS,default=4,min=1,max=64")]
//!     pub workers: u32,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("HOST", "localhost");
//! #     std::env::remove_var("PORT");
//! #     std::env::remove_var("WORKERS");
//! let config = Config::from_env()?;
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 8080);
//! #     Ok(())
//! # }
//! ```
//!
//! # Options
//!
//! | Option | Meaning |
//! |--------|---------|
//! | `name=VAR` | Environment variable to read (must not be empty) |
//! | `required` | Fail with [`BindError::MissingRequired`] when `VAR` is unset or empty |
//! | `default=VALUE` | Value used when `VAR` is unset or empty |
//! | `min=N`, `max=N` | Inclusive bounds, numeric fields only |
//!
//! Bounds are compared in the field's own type: integer fields against the
//! bound rounded inward to an integer, float fields against the bound rounded
//! to the field's precision. `NaN` is outside every range.
//!
//! Options are separated by commas and surrounding whitespace is ignored.
//! A field without `#[env]` (or without `name`) is never found in the
//! environment and keeps its default, or its zero value.
//!
//! # Supported field types
//!
//! `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`, `u64`, `usize`,
//! `f32`, `f64`, `String`, `bool`, and structs deriving `EnvBind`.
//!
//! Any other field type is rejected when the record is compiled:
//!
//! ```rust,compile_fail
//! use envbind::EnvBind;
//!
//! #[derive(EnvBind)]
//! struct Config {
//!     #[env("name=TAGS")]
//!     pub tags: Vec<String>,
//! }
//! ```
//!
//! Only records can be bound, and only through a mutable reference:
//!
//! ```rust,compile_fail
//! let mut port: u16 = 0;
//! let _ = envbind::bind(&mut port);
//! ```
//!
//! ```rust,compile_fail
//! use envbind::EnvBind;
//!
//! #[derive(EnvBind)]
//! enum Mode {
//!     Fast,
//!     Slow,
//! }
//! ```
//!
//! ```rust,compile_fail
//! use envbind::EnvBind;
//!
//! #[derive(EnvBind)]
//! struct Port(#[env("name=PORT")] u16);
//! ```
//!
//! # Errors
//!
//! Binding stops at the first failing field and returns a [`BindError`].
//! Fields bound before the failure keep their new values.

mod coerce;
mod env;
mod error;
mod rule;
mod schema;

pub use env::{Environment, ProcessEnv};
pub use envbind_derive::EnvBind;
pub use error::{BindError, Bound};
pub use rule::BindingRule;
pub use schema::{bind, bind_with, EnvBind, EnvField, Field, FieldKind};

// Used by macro-generated code
#[doc(hidden)]
pub mod __private {
    pub use crate::schema::bind_nested;
}
