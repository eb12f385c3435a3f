extern crate proc_macro;

use case::CaseExt;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed, Ident, Path};

const CORE_CRATE_NAME: &str = "wandersphere-core";

/// Derives `Model<E>` for a struct whose named fields all implement `Update<E>`.
///
/// The env is given with `#[model(Env)]`. A `<Name>Field` enum is generated as well,
/// one variant per field, so that actions can be targeted at a single field.
#[proc_macro_derive(Model, attributes(model))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let core_ident = get_core_ident();
    let env = match get_model_env(&input) {
        Ok(env) => env,
        Err(error) => return error.to_compile_error().into(),
    };
    let named = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => {
            return syn::Error::new(
                input.ident.span(),
                "#[derive(Model)] is only defined for structs with named fields",
            )
            .to_compile_error()
            .into()
        }
    };
    let vis = &input.vis;
    let name = &input.ident;
    let field_enum_ident = format_ident!("{}Field", name);
    let variants = named
        .iter()
        .filter_map(|field| {
            field.ident.as_ref().map(|ident| {
                let variant = Ident::new(&ident.to_string().to_camel(), ident.span());
                (ident, &field.ty, variant)
            })
        })
        .collect::<Vec<_>>();
    let variant_idents = variants.iter().map(|(_, _, variant)| variant);
    let field_updates = variants.iter().map(|(ident, ty, variant)| {
        quote! {
            let field_effects = <#ty as #core_ident::runtime::Update<#env>>::update(&mut self.#ident, msg);
            if field_effects.has_changed {
                fields.push(#field_enum_ident::#variant);
            }
            effects.extend(field_effects);
        }
    });
    let field_match_arms = variants.iter().map(|(ident, ty, variant)| {
        quote! {
            #field_enum_ident::#variant => {
                let field_effects = <#ty as #core_ident::runtime::Update<#env>>::update(&mut self.#ident, msg);
                let fields = if field_effects.has_changed {
                    vec![#field_enum_ident::#variant]
                } else {
                    vec![]
                };
                (field_effects.into_iter().collect(), fields)
            }
        }
    });
    let expanded = quote! {
        #[derive(Clone, Copy, PartialEq, Eq, Debug, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        #vis enum #field_enum_ident {
            #(#variant_idents),*
        }

        impl #core_ident::runtime::Model<#env> for #name {
            type Field = #field_enum_ident;

            fn update(
                &mut self,
                msg: &#core_ident::runtime::msg::Msg,
            ) -> (
                ::std::vec::Vec<#core_ident::runtime::Effect>,
                ::std::vec::Vec<Self::Field>,
            ) {
                let mut effects = ::std::vec::Vec::new();
                let mut fields = ::std::vec::Vec::new();
                #(#field_updates)*
                (effects, fields)
            }

            fn update_field(
                &mut self,
                msg: &#core_ident::runtime::msg::Msg,
                field: &Self::Field,
            ) -> (
                ::std::vec::Vec<#core_ident::runtime::Effect>,
                ::std::vec::Vec<Self::Field>,
            ) {
                match field {
                    #(#field_match_arms),*
                }
            }
        }
    };
    TokenStream::from(expanded)
}

fn get_model_env(input: &DeriveInput) -> syn::Result<Path> {
    input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("model"))
        .ok_or_else(|| {
            syn::Error::new(
                input.ident.span(),
                "#[model(Env)] attribute is required by #[derive(Model)]",
            )
        })?
        .parse_args::<Path>()
}

fn get_core_ident() -> TokenStream2 {
    match crate_name(CORE_CRATE_NAME) {
        Ok(FoundCrate::Itself) => quote!(crate),
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::wandersphere_core),
    }
}
