//! Attribute parsing for `#[env("...")]` annotations.
//!
//! The macro only extracts the option string; its contents are parsed and
//! validated by `envbind` when the record is bound.

use syn::{Field, LitStr};

/// Parsed `#[env(...)]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw option string, e.g. `"name=PORT,default=8080"`.
    ///
    /// Empty when the field carries no `#[env]` attribute.
    pub annotation: String,
}

impl FieldAttrs {
    /// Extract the `#[env("...")]` attribute from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    ///
    /// # Errors
    ///
    /// Fails when `#[env]` appears more than once or its argument is not a
    /// single string literal.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        let mut seen = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if seen {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate env attribute; combine options into one string, e.g. #[env(\"name=PORT,default=8080\")]",
                ));
            }
            seen = true;

            let lit: LitStr = attr.parse_args().map_err(|e| {
                syn::Error::new(
                    e.span(),
                    "expected a single option string, e.g. #[env(\"name=PORT,required\")]",
                )
            })?;
            attrs.annotation = lit.value();
        }

        Ok(attrs)
    }
}
