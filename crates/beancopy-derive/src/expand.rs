//! Code generation for `#[derive(Bean)]`

use crate::parse::BeanDef;
use proc_macro2::TokenStream;
use quote::quote;

pub fn expand(def: &BeanDef) -> TokenStream {
    let ident = &def.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();

    let descriptors = def.fields.iter().map(|field| {
        let name = &field.name;
        let ty = &field.ty;
        let binding = field
            .source
            .as_ref()
            .map(|source| quote! { .with_source(#source) });
        quote! {
            ::beancopy_core::FieldDescriptor::new(
                #name,
                <#ty as ::beancopy_core::BeanField>::field_type(),
            )#binding
        }
    });

    let read_arms = def.fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        quote! {
            #name => ::std::option::Option::Some(
                ::beancopy_core::BeanField::to_value(&self.#member)
            ),
        }
    });

    let write_arms = def.fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        let ty = &field.ty;
        quote! {
            #name => {
                self.#member = <#ty as ::beancopy_core::BeanField>::from_value(value)
                    .map_err(|rejected| {
                        ::beancopy_core::Error::value_mismatch(
                            #type_name,
                            #name,
                            <#ty as ::beancopy_core::BeanField>::field_type(),
                            &rejected,
                        )
                    })?;
                ::std::result::Result::Ok(())
            }
        }
    });

    let instantiate = match &def.constructor {
        Some(path) => quote! {
            #path().map_err(|err| ::beancopy_core::Error::construction(#type_name, err))
        },
        None => quote! {
            ::std::result::Result::Ok(<Self as ::std::default::Default>::default())
        },
    };

    quote! {
        impl #impl_generics ::beancopy_core::Bean for #ident #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn fields() -> ::std::vec::Vec<::beancopy_core::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn instantiate() -> ::beancopy_core::Result<Self> {
                #instantiate
            }

            fn read_field(
                &self,
                name: &str,
            ) -> ::std::option::Option<::beancopy_core::FieldValue> {
                match name {
                    #(#read_arms)*
                    _ => ::std::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn write_field(
                &mut self,
                name: &str,
                value: ::beancopy_core::FieldValue,
            ) -> ::beancopy_core::Result<()> {
                match name {
                    #(#write_arms)*
                    _ => ::std::result::Result::Err(
                        ::beancopy_core::Error::unknown_field(#type_name, name)
                    ),
                }
            }
        }
    }
}
