use super::types::{Declaration, FieldDecl, MethodDecl, ParamDecl, SourceDescription, StructDecl};
use crate::error::GenError;
use quote::ToTokens;
use syn::{Attribute, Expr, Fields, FnArg, ImplItem, Item, Lit, LitStr, Meta, Type};

/// Name of the field attribute carrying validation tags
pub const TAG_ATTRIBUTE: &str = "apivalidator";

/// Produces a [`SourceDescription`] from source text
///
/// The generator core only consumes the description, so tests can build one by
/// hand and alternative front ends can plug in here.
pub trait SourceDiscovery {
    /// Describe the declarations found in `source`
    fn discover(&self, source: &str) -> Result<SourceDescription, GenError>;
}

/// Discovery over a Rust source file parsed with `syn`
///
/// Looks at top-level structs, free functions and the functions of `impl`
/// blocks, in file order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SynDiscovery;

impl SourceDiscovery for SynDiscovery {
    fn discover(&self, source: &str) -> Result<SourceDescription, GenError> {
        let file = syn::parse_file(source).map_err(|e| GenError::Parse {
            message: e.to_string(),
        })?;

        let mut items = Vec::new();
        for item in &file.items {
            match item {
                Item::Struct(item) => items.push(Declaration::Struct(struct_decl(item)?)),
                Item::Fn(item) => items.push(Declaration::Method(method_decl(
                    &item.sig,
                    &item.attrs,
                    None,
                ))),
                Item::Impl(item) => {
                    let receiver = type_ident(&item.self_ty);
                    for impl_item in &item.items {
                        if let ImplItem::Fn(f) = impl_item {
                            items.push(Declaration::Method(method_decl(
                                &f.sig,
                                &f.attrs,
                                receiver.clone(),
                            )));
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(SourceDescription { items })
    }
}

fn struct_decl(item: &syn::ItemStruct) -> Result<StructDecl, GenError> {
    let name = item.ident.to_string();
    let mut fields = Vec::new();
    match &item.fields {
        Fields::Named(named) => {
            for field in &named.named {
                let Some(ident) = &field.ident else {
                    continue;
                };
                let field_name = ident.to_string();
                let tag = field_tag(&field.attrs).map_err(|e| GenError::Parse {
                    message: format!("{}.{}: {}", name, field_name, e),
                })?;
                fields.push(FieldDecl {
                    name: field_name,
                    type_name: render_type(&field.ty),
                    tag,
                });
            }
        }
        Fields::Unnamed(unnamed) => {
            if unnamed
                .unnamed
                .iter()
                .any(|f| f.attrs.iter().any(|a| a.path().is_ident(TAG_ATTRIBUTE)))
            {
                return Err(GenError::Parse {
                    message: format!("{}: apivalidator is only supported on named fields", name),
                });
            }
        }
        Fields::Unit => {}
    }
    Ok(StructDecl { name, fields })
}

fn field_tag(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut tag = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident(TAG_ATTRIBUTE)) {
        let lit = match &attr.meta {
            Meta::List(list) => list.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => s.clone(),
                    other => return Err(syn::Error::new_spanned(other, "expected a string literal")),
                },
                other => return Err(syn::Error::new_spanned(other, "expected a string literal")),
            },
            Meta::Path(path) => return Err(syn::Error::new_spanned(path, "expected a tag string")),
        };
        tag = Some(lit.value());
    }
    Ok(tag)
}

fn method_decl(sig: &syn::Signature, attrs: &[Attribute], receiver: Option<String>) -> MethodDecl {
    let mut has_self_receiver = false;
    let mut params = Vec::new();
    for input in &sig.inputs {
        match input {
            FnArg::Receiver(_) => has_self_receiver = true,
            FnArg::Typed(pat) => params.push(ParamDecl {
                type_name: type_ident(&pat.ty),
            }),
        }
    }
    MethodDecl {
        name: sig.ident.to_string(),
        receiver,
        has_self_receiver,
        params,
        doc: doc_text(attrs),
    }
}

/// Join `///` lines, dropping the single space rustdoc puts after the slashes
fn doc_text(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|a| a.path().is_ident("doc"))
        .filter_map(|a| match &a.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => Some(s.value()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .flat_map(|chunk| {
            chunk
                .lines()
                .map(|line| line.strip_prefix(' ').unwrap_or(line).to_string())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Last path segment of a plain, non-generic path type
fn type_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            let last = path.path.segments.last()?;
            if last.arguments.is_empty() {
                Some(last.ident.to_string())
            } else {
                None
            }
        }
        Type::Group(group) => type_ident(&group.elem),
        Type::Paren(paren) => type_ident(&paren.elem),
        _ => None,
    }
}

/// Render a type compactly (`std::string::String`, `Option<String>`, `&str`)
fn render_type(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace("& ", "&")
}
