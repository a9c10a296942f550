//! 可注入类型派生宏实现

use crate::utils::{extract_inject_key, is_option_type};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: &DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Injectable 只支持具名字段的结构体",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Injectable 只能用于结构体",
            ))
        }
    };

    let mut keys = Vec::new();
    let mut initializers = Vec::new();

    for field in fields {
        let ident = &field.ident;
        match extract_inject_key(field)? {
            Some(key) => {
                let position = keys.len();
                let accessor = if is_option_type(&field.ty) {
                    quote! { optional }
                } else {
                    quote! { required }
                };
                initializers.push(quote! { #ident: deps.#accessor(#position)? });
                keys.push(key);
            }
            None => {
                initializers.push(quote! { #ident: ::core::default::Default::default() });
            }
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::registry_common::Injectable for #struct_name #ty_generics #where_clause {
            fn wants() -> &'static [&'static str] {
                &[#(#keys),*]
            }

            #[allow(unused_variables)]
            fn construct(
                deps: ::registry_common::Dependencies,
            ) -> ::core::result::Result<Self, ::registry_common::BoxError> {
                ::core::result::Result::Ok(Self {
                    #(#initializers),*
                })
            }
        }
    })
}
