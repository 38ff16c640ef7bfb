//! Parsing of per-field `#[env("...")]` option strings into binding rules.
//!
//! An option string is a comma separated list of options:
//!
//! ```text
//! annotation := option (',' option)*
//! option     := 'required' | key '=' value
//! key        := 'name' | 'default' | 'min' | 'max'
//! ```
//!
//! Whitespace around each option is ignored and empty options are skipped,
//! so an empty string is a valid annotation that produces the default rule.

use crate::error::BindError;
use crate::schema::FieldKind;

/// Options recognized in an annotation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionKey {
    Required,
    Name,
    Default,
    Min,
    Max,
}

impl OptionKey {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "required" => Some(Self::Required),
            "name" => Some(Self::Name),
            "default" => Some(Self::Default),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    /// Whether the option is written as `key=value` rather than a bare flag.
    fn takes_value(self) -> bool {
        !matches!(self, Self::Required)
    }
}

/// How a single leaf field is resolved from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingRule {
    /// Environment variable to read. Empty when no `name` option was given,
    /// in which case the variable is always treated as absent.
    pub name: String,

    /// Fail with [`BindError::MissingRequired`] when the variable is not set.
    pub required: bool,

    /// Literal used when the variable is not set and the field is optional.
    pub default: String,

    /// Inclusive lower bound for numeric fields.
    pub min: Option<f64>,

    /// Inclusive upper bound for numeric fields.
    pub max: Option<f64>,
}

impl BindingRule {
    /// Parse the annotation of the field `field`, whose type is `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MalformedOption`] when an option is unknown, is
    /// missing its parameter (or has one it doesn't take), when `name` is
    /// empty, or when `min`/`max` are used on a non-numeric field, are not
    /// numbers, or describe an empty range.
    pub fn parse(field: &str, annotation: &str, kind: FieldKind) -> Result<Self, BindError> {
        let mut rule = Self::default();

        for fragment in annotation.split(',') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }

            let (key, value) = match fragment.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value)),
                None => (fragment, None),
            };

            let option = OptionKey::from_key(key)
                .ok_or_else(|| BindError::malformed(field, key, "unknown option"))?;

            let value = match (option.takes_value(), value) {
                (true, Some(value)) => value,
                (true, None) => {
                    return Err(BindError::malformed(field, key, "option must have a parameter"))
                }
                (false, Some(_)) => {
                    return Err(BindError::malformed(field, key, "option takes no parameter"))
                }
                (false, None) => "",
            };

            match option {
                OptionKey::Required => rule.required = true,
                OptionKey::Name => {
                    if value.is_empty() {
                        return Err(BindError::malformed(
                            field,
                            key,
                            "option must have a parameter",
                        ));
                    }
                    rule.name = value.to_string();
                }
                OptionKey::Default => rule.default = value.to_string(),
                OptionKey::Min => rule.min = Some(parse_bound(field, key, value, kind)?),
                OptionKey::Max => rule.max = Some(parse_bound(field, key, value, kind)?),
            }
        }

        if let (Some(min), Some(max)) = (rule.min, rule.max) {
            if min > max {
                return Err(BindError::malformed(
                    field,
                    "min",
                    format!("minimum {} is greater than maximum {}", min, max),
                ));
            }
        }

        Ok(rule)
    }
}

fn parse_bound(field: &str, key: &str, value: &str, kind: FieldKind) -> Result<f64, BindError> {
    if !kind.is_numeric() {
        return Err(BindError::malformed(
            field,
            key,
            format!("bounds only apply to numeric fields, not {}", kind),
        ));
    }

    match value.trim().parse::<f64>() {
        Ok(bound) if !bound.is_nan() => Ok(bound),
        _ => Err(BindError::malformed(
            field,
            key,
            format!("'{}' is not a number", value),
        )),
    }
}
