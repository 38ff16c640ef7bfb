//! Resolution and coercion of leaf field values

use crate::env::Environment;
use crate::error::{BindError, Bound};
use crate::rule::BindingRule;
use crate::schema::{EnvField, FieldKind};

/// A leaf type that is parsed from a single environment variable value.
trait Leaf: Sized {
    const KIND: FieldKind;

    fn zero() -> Self;

    /// Convert a non-empty raw value, enforcing the rule's constraints.
    fn coerce(raw: &str, rule: &BindingRule) -> Result<Self, BindError>;
}

/// Resolve the raw value for `rule`.
///
/// The variable wins when it is set to a non-empty value. Otherwise a
/// required field fails and an optional one falls back to its default,
/// which may itself be empty.
pub(crate) fn resolve(rule: &BindingRule, env: &dyn Environment) -> Result<String, BindError> {
    let value = if rule.name.is_empty() {
        None
    } else {
        env.var(&rule.name)
    };

    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ if rule.required => Err(BindError::missing(&rule.name)),
        _ => {
            if !rule.default.is_empty() {
                tracing::debug!(name = %rule.name, default = %rule.default, "environment variable not set, using default");
            }
            Ok(rule.default.clone())
        }
    }
}

fn bind_leaf<T: Leaf>(
    slot: &mut T,
    field: &'static str,
    annotation: &str,
    env: &dyn Environment,
) -> Result<(), BindError> {
    let rule = BindingRule::parse(field, annotation, T::KIND)?;
    let raw = resolve(&rule, env)?;

    *slot = if raw.is_empty() {
        T::zero()
    } else {
        T::coerce(&raw, &rule)?
    };
    Ok(())
}

/// Comparison of a parsed number against `f64` bounds in the number's own
/// domain: integers against the nearest integer bound, floats against the
/// bound rounded to the field's precision.
trait Bounded: Copy {
    fn below(self, min: f64) -> bool;

    fn above(self, max: f64) -> bool;

    fn widen(self) -> f64;
}

fn check_bounds<T: Bounded>(rule: &BindingRule, value: T) -> Result<(), BindError> {
    let bound = match (rule.min, rule.max) {
        (Some(min), _) if value.below(min) => Bound::Min(min),
        (_, Some(max)) if value.above(max) => Bound::Max(max),
        _ => return Ok(()),
    };

    Err(BindError::OutOfRange {
        name: rule.name.clone(),
        value: value.widen(),
        bound,
    })
}

/// Parse a boolean literal: `1`, `t`, `T`, `TRUE`, `true`, `True` and their
/// false counterparts.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

macro_rules! impl_number {
    ($kind:expr, $zero:expr => $($ty:ty),+) => {$(
        impl Leaf for $ty {
            const KIND: FieldKind = $kind;

            fn zero() -> Self {
                $zero
            }

            fn coerce(raw: &str, rule: &BindingRule) -> Result<Self, BindError> {
                let value = raw
                    .parse::<$ty>()
                    .map_err(|_| BindError::invalid_number::<$ty>(&rule.name, raw))?;
                check_bounds(rule, value)?;
                Ok(value)
            }
        }
    )+};
}

// i128 holds every supported integer; bounds saturate when converted.
macro_rules! impl_bounded_integer {
    ($($ty:ty),+) => {$(
        impl Bounded for $ty {
            fn below(self, min: f64) -> bool {
                (self as i128) < (min.ceil() as i128)
            }

            fn above(self, max: f64) -> bool {
                (self as i128) > (max.floor() as i128)
            }

            fn widen(self) -> f64 {
                self as f64
            }
        }
    )+};
}

// NaN falls outside every range.
macro_rules! impl_bounded_float {
    ($($ty:ty),+) => {$(
        impl Bounded for $ty {
            fn below(self, min: f64) -> bool {
                self.is_nan() || self < min as $ty
            }

            fn above(self, max: f64) -> bool {
                self.is_nan() || self > max as $ty
            }

            fn widen(self) -> f64 {
                self as f64
            }
        }
    )+};
}

impl_number!(FieldKind::Signed, 0 => i8, i16, i32, i64, isize);
impl_number!(FieldKind::Unsigned, 0 => u8, u16, u32, u64, usize);
impl_number!(FieldKind::Float, 0.0 => f32, f64);

impl_bounded_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_bounded_float!(f32, f64);

impl Leaf for String {
    const KIND: FieldKind = FieldKind::String;

    fn zero() -> Self {
        String::new()
    }

    fn coerce(raw: &str, _rule: &BindingRule) -> Result<Self, BindError> {
        Ok(raw.to_string())
    }
}

impl Leaf for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn zero() -> Self {
        false
    }

    fn coerce(raw: &str, rule: &BindingRule) -> Result<Self, BindError> {
        parse_bool(raw).ok_or_else(|| BindError::InvalidBoolean {
            name: rule.name.clone(),
            value: raw.to_string(),
        })
    }
}

macro_rules! impl_env_field {
    ($($ty:ty),+) => {$(
        impl EnvField for $ty {
            const KIND: FieldKind = <$ty as Leaf>::KIND;

            fn zero() -> Self {
                <$ty as Leaf>::zero()
            }

            fn bind_field(
                slot: &mut Self,
                field: &'static str,
                annotation: &str,
                env: &dyn Environment,
            ) -> Result<(), BindError> {
                bind_leaf(slot, field, annotation, env)
            }
        }
    )+};
}

impl_env_field!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, bool);
