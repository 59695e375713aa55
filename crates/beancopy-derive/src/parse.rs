//! Attribute parsing for the Bean derive macro.
//!
//! ```text
//! BeanDef
//! ├── ident: Ident             (struct name)
//! ├── generics: Generics
//! ├── constructor: Option<ExprPath>  (#[transfer(constructor = "...")])
//! └── fields: Vec<FieldDef>    (declaration order, skipped fields removed)
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── name: String     (unraw'd identifier)
//!         ├── ty: Type
//!         └── source: Option<LitStr>  (#[transfer(source = "...")])
//! ```

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, ExprPath, Fields, Generics, Ident, LitStr, Type};

const ATTR: &str = "transfer";

pub struct BeanDef {
    pub ident: Ident,
    pub generics: Generics,
    pub constructor: Option<ExprPath>,
    pub fields: Vec<FieldDef>,
}

pub struct FieldDef {
    pub ident: Ident,
    pub name: String,
    pub ty: Type,
    pub source: Option<LitStr>,
}

impl BeanDef {
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "Bean can only be derived for structs with named fields",
                    ))
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Bean can only be derived for structs",
                ))
            }
        };

        let constructor = parse_struct_attrs(input)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = field.ident.clone() else {
                continue;
            };
            let attrs = parse_field_attrs(field)?;
            if attrs.skip {
                continue;
            }
            fields.push(FieldDef {
                name: ident.unraw().to_string(),
                ident,
                ty: field.ty.clone(),
                source: attrs.source,
            });
        }

        Ok(Self {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            constructor,
            fields,
        })
    }
}

fn parse_struct_attrs(input: &DeriveInput) -> syn::Result<Option<ExprPath>> {
    let mut constructor = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("constructor") {
                let lit: LitStr = meta.value()?.parse()?;
                constructor = Some(lit.parse::<ExprPath>()?);
                Ok(())
            } else {
                Err(meta.error("unknown struct-level transfer attribute, expected `constructor`"))
            }
        })?;
    }

    Ok(constructor)
}

#[derive(Default)]
struct FieldAttrs {
    source: Option<LitStr>,
    skip: bool,
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("source") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new_spanned(&lit, "source field name must not be empty"));
                }
                if attrs.source.is_some() {
                    return Err(meta.error("duplicate `source`"));
                }
                attrs.source = Some(lit);
                Ok(())
            } else if meta.path.is_ident("skip") {
                attrs.skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown field-level transfer attribute, expected `source` or `skip`"))
            }
        })?;
    }

    if attrs.skip {
        if let Some(source) = &attrs.source {
            return Err(syn::Error::new_spanned(
                source,
                "`source` cannot be combined with `skip`",
            ));
        }
    }

    Ok(attrs)
}
