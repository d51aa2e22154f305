//! `#[derive(ApiParams)]` marks a struct as an apigen parameter struct and
//! registers the `apivalidator` field attribute so annotated sources compile.
//!
//! The binding code itself is produced ahead of time by the `apigen` generator;
//! the derive only checks that every `apivalidator` attribute carries a single
//! string literal and otherwise expands to nothing.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Lit, LitStr, Meta};

const TAG_ATTRIBUTE: &str = "apivalidator";

fn check_tag(attr: &Attribute) -> syn::Result<LitStr> {
    match &attr.meta {
        Meta::List(list) => list.parse_args::<LitStr>(),
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(expr) => match &expr.lit {
                Lit::Str(s) => Ok(s.clone()),
                other => Err(syn::Error::new_spanned(other, "apivalidator expects a string literal")),
            },
            other => Err(syn::Error::new_spanned(other, "apivalidator expects a string literal")),
        },
        Meta::Path(path) => Err(syn::Error::new_spanned(
            path,
            "apivalidator expects a tag, e.g. #[apivalidator(\"required,min=1\")]",
        )),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ApiParams can only be derived for structs",
            ))
        }
    };
    let mut errors: Option<syn::Error> = None;
    let mut push = |err: syn::Error| match errors.as_mut() {
        Some(all) => all.combine(err),
        None => errors = Some(err),
    };
    match &data.fields {
        Fields::Named(named) => {
            for field in &named.named {
                for attr in field.attrs.iter().filter(|a| a.path().is_ident(TAG_ATTRIBUTE)) {
                    if let Err(err) = check_tag(attr) {
                        push(err);
                    }
                }
            }
        }
        Fields::Unnamed(unnamed) => {
            for field in &unnamed.unnamed {
                if let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident(TAG_ATTRIBUTE)) {
                    push(syn::Error::new_spanned(
                        attr,
                        "apivalidator is only supported on named fields",
                    ));
                }
            }
        }
        Fields::Unit => {}
    }
    match errors {
        Some(err) => Err(err),
        None => Ok(TokenStream2::new()),
    }
}

/// Registers `#[apivalidator(...)]` on the fields of a parameter struct.
#[proc_macro_derive(ApiParams, attributes(apivalidator))]
pub fn derive_api_params(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
