//! Record schemas and the walker that binds them field by field.

use std::fmt;

use crate::env::{Environment, ProcessEnv};
use crate::error::BindError;

/// Type tag of a field in a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `i8`, `i16`, `i32`, `i64`, `isize`
    Signed,
    /// `u8`, `u16`, `u32`, `u64`, `usize`
    Unsigned,
    /// `f32`, `f64`
    Float,
    /// `String`
    String,
    /// `bool`
    Bool,
    /// A nested struct deriving `EnvBind`
    Record,
}

impl FieldKind {
    /// Whether `min`/`max` bounds may be declared for this kind.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Signed | Self::Unsigned | Self::Float)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Signed => "signed integer",
            Self::Unsigned => "unsigned integer",
            Self::Float => "floating point",
            Self::String => "string",
            Self::Bool => "boolean",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

/// Descriptor of one field of a record `R`, generated by `#[derive(EnvBind)]`.
pub struct Field<R> {
    /// Identifier of the field in the struct definition.
    pub ident: &'static str,
    /// Type tag of the field.
    pub kind: FieldKind,
    /// Raw `#[env("...")]` annotation, empty when the field has none.
    pub annotation: &'static str,
    /// Binds this field of the record from the environment.
    pub bind: fn(&mut R, &dyn Environment) -> Result<(), BindError>,
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("kind", &self.kind)
            .field("annotation", &self.annotation)
            .finish_non_exhaustive()
    }
}

/// A type that can be stored in a field of a bindable record.
///
/// Implemented for the supported leaf types and, through
/// `#[derive(EnvBind)]`, for records themselves so they can be nested.
#[diagnostic::on_unimplemented(
    message = "unsupported field type `{Self}`",
    label = "this type cannot be bound from an environment variable",
    note = "supported field types are integers, `f32`, `f64`, `String`, `bool` and structs deriving `EnvBind`"
)]
pub trait EnvField: Sized {
    /// Type tag reported in the record schema.
    const KIND: FieldKind;

    /// The value a field holds before it is bound.
    fn zero() -> Self;

    /// Bind `slot` using the field's identifier and annotation.
    #[doc(hidden)]
    fn bind_field(
        slot: &mut Self,
        field: &'static str,
        annotation: &str,
        env: &dyn Environment,
    ) -> Result<(), BindError>;
}

/// A record whose fields can be bound from environment variables.
///
/// Implement it with `#[derive(EnvBind)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a bindable record",
    label = "expected a struct deriving `EnvBind`",
    note = "only structs with named fields can be bound; add `#[derive(EnvBind)]` to the struct"
)]
pub trait EnvBind: EnvField {
    /// Fields of the record in declaration order.
    fn schema() -> Vec<Field<Self>>;

    /// Build a zero-valued record and bind it from the process environment.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] encountered while binding.
    fn from_env() -> Result<Self, BindError> {
        let mut record = Self::zero();
        bind(&mut record)?;
        Ok(record)
    }
}

/// Bind `target` from the process environment.
///
/// See [`bind_with`].
pub fn bind<T: EnvBind>(target: &mut T) -> Result<(), BindError> {
    bind_with(target, &ProcessEnv)
}

/// Bind every field of `target` from `env`, in declaration order.
///
/// Nested records are rebuilt from their zero value and bound recursively.
///
/// # Errors
///
/// Returns the first error encountered. Fields before the failing one have
/// already been overwritten; the remaining ones are left untouched.
pub fn bind_with<T: EnvBind>(target: &mut T, env: &dyn Environment) -> Result<(), BindError> {
    let record = std::any::type_name::<T>();

    for field in T::schema() {
        tracing::trace!(record, field = field.ident, kind = %field.kind, "binding field");
        (field.bind)(target, env)?;
    }

    Ok(())
}

/// Bind a nested record field (used by macro-generated code)
#[doc(hidden)]
pub fn bind_nested<T: EnvBind>(
    slot: &mut T,
    field: &'static str,
    annotation: &str,
    env: &dyn Environment,
) -> Result<(), BindError> {
    if !annotation.trim().is_empty() {
        tracing::warn!(field, annotation, "annotation on a nested record is ignored");
    }

    let mut inner = T::zero();
    bind_with(&mut inner, env)?;
    *slot = inner;

    tracing::debug!(field, record = std::any::type_name::<T>(), "bound nested record");
    Ok(())
}
