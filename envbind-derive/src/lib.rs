//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `EnvBind` derive macro
///
/// Generates the record schema used by `envbind::bind`, and makes the record
/// usable as a nested field of another record.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("name=VAR")]`: Environment variable to read
/// - `#[env("name=VAR,required")]`: Fail when the variable is not set
/// - `#[env("name=VAR,default=value")]`: Fallback when the variable is not set
/// - `#[env("name=VAR,min=1,max=10")]`: Bounds for numeric fields
///
/// Fields whose type derives `EnvBind` are bound recursively and take no
/// attribute.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "EnvBind only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "EnvBind only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut zero_initializers = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let ident = field_name.to_string();

        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };
        let annotation = attrs.annotation;

        descriptors.push(quote! {
            ::envbind::Field::<Self> {
                ident: #ident,
                kind: <#field_type as ::envbind::EnvField>::KIND,
                annotation: #annotation,
                bind: |__record: &mut Self, __env: &dyn ::envbind::Environment| {
                    <#field_type as ::envbind::EnvField>::bind_field(
                        &mut __record.#field_name,
                        #ident,
                        #annotation,
                        __env,
                    )
                },
            }
        });

        zero_initializers.push(quote! {
            #field_name: <#field_type as ::envbind::EnvField>::zero()
        });
    }

    let expanded = quote! {
        impl #impl_generics ::envbind::EnvField for #struct_name #ty_generics #where_clause {
            const KIND: ::envbind::FieldKind = ::envbind::FieldKind::Record;

            fn zero() -> Self {
                Self {
                    #(#zero_initializers),*
                }
            }

            fn bind_field(
                slot: &mut Self,
                field: &'static str,
                annotation: &str,
                env: &dyn ::envbind::Environment,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                ::envbind::__private::bind_nested(slot, field, annotation, env)
            }
        }

        impl #impl_generics ::envbind::EnvBind for #struct_name #ty_generics #where_clause {
            fn schema() -> ::std::vec::Vec<::envbind::Field<Self>> {
                ::std::vec![
                    #(#descriptors),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
