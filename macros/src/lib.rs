use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model struct from a struct with 3 or 4 component fields.
///
/// The struct gets a `new` constructor, conversions to and from an array of
/// its components and an implementation of `crate::models::Model`. The model
/// must provide an inherent `to_rgb(&self) -> crate::color::Components`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let count = input.fields.len();
    if count != 3 && count != 4 {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.len() != count {
        return quote! {
            compile_error!("Model fields must be named.")
        }
        .into();
    }

    // Make sure the component fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let indices = (0..count).map(syn::Index::from).collect::<Vec<_>>();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new model from its components.
            pub fn new(
                #(#field_names: crate::color::Component,)*
            ) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            /// Return the components of this model in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#field_names,)*]
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                Self::new(#(value[#indices],)*)
            }
        }

        impl From<#struct_name> for [crate::color::Component; #count] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }

        impl crate::models::Model for #struct_name {
            fn to_color(&self, alpha: u8) -> crate::color::Color {
                crate::color::Color::from_components(self.to_rgb(), alpha)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
