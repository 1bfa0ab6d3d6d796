//! Derive macro generating the `goc` codec impls for user structs.
//!
//! `#[derive(Wire)]` expands to `Encode`, `Decode` and `Wire` impls that
//! walk the fields in declared order, wrap per-field failures with the
//! field name, and describe the type with a static struct shape. The goc
//! wire universe has no enum kind, so deriving on an enum or union is a
//! compile error rather than a runtime `Unsupported` failure.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned as _;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericParam, Generics, Index};

/// Derives `goc::Encode`, `goc::Decode` and `goc::Wire` for a struct,
/// encoding the fields in declared order.
#[proc_macro_derive(Wire)]
pub fn derive_wire(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input).unwrap_or_else(|e| e.to_compile_error()).into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => data.fields.clone(),
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                input.span(),
                "`derive(Wire)` supports only structs: the goc wire universe has no enum kind",
            ));
        }
    };

    let ident = &input.ident;
    let name = ident.to_string();

    let generics = add_wire_bounds(input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Field-less structs leave the cursors untouched.
    let has_fields = fields.iter().next().is_some();
    let dst = if has_fields { quote!(dst) } else { quote!(_dst) };
    let src = if has_fields { quote!(src) } else { quote!(_src) };

    let encode_fields = fields.iter().enumerate().map(|(position, field)| {
        let (accessor, label) = member(position, field);
        quote! {
            ::goc::Encode::encode(&self.#accessor, dst)
                .map_err(|e| ::goc::EncodeError::for_field(#name, #label, e))?;
        }
    });

    let size_fields = fields.iter().enumerate().map(|(position, field)| {
        let (accessor, _) = member(position, field);
        quote! { + ::goc::Encode::size(&self.#accessor) }
    });

    let decode_body = match &fields {
        Fields::Named(named) => {
            let decoders = named.named.iter().map(|field| {
                let field_ident = field.ident.as_ref().expect("named field");
                let label = field_ident.to_string();
                quote! {
                    #field_ident: ::goc::Decode::decode(src)
                        .map_err(|e| ::goc::DecodeError::for_field(#name, #label, e))?,
                }
            });
            quote! { Ok(Self { #(#decoders)* }) }
        }
        Fields::Unnamed(unnamed) => {
            let decoders = unnamed.unnamed.iter().enumerate().map(|(position, _)| {
                let label = position.to_string();
                quote! {
                    ::goc::Decode::decode(src)
                        .map_err(|e| ::goc::DecodeError::for_field(#name, #label, e))?,
                }
            });
            quote! { Ok(Self(#(#decoders)*)) }
        }
        Fields::Unit => quote! { Ok(Self) },
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::goc::Encode for #ident #ty_generics #where_clause {
            fn encode(&self, #dst: &mut ::goc::WriteCursor<'_>) -> ::goc::EncodeResult<()> {
                #(#encode_fields)*
                Ok(())
            }

            fn name(&self) -> &'static str {
                #name
            }

            fn size(&self) -> usize {
                0usize #(#size_fields)*
            }
        }

        #[automatically_derived]
        impl #impl_generics ::goc::Decode for #ident #ty_generics #where_clause {
            fn decode(#src: &mut ::goc::ReadCursor<'_>) -> ::goc::DecodeResult<Self> {
                #decode_body
            }
        }

        #[automatically_derived]
        impl #impl_generics ::goc::Wire for #ident #ty_generics #where_clause {
            const SHAPE: &'static ::goc::Shape =
                &::goc::Shape::strukt(#name, ::core::mem::size_of::<#ident #ty_generics>());
        }
    })
}

/// Returns the member accessor and the label used in layer-context errors.
fn member(position: usize, field: &syn::Field) -> (TokenStream2, String) {
    match &field.ident {
        Some(field_ident) => (quote! { #field_ident }, field_ident.to_string()),
        None => {
            let index = Index::from(position);
            (quote! { #index }, position.to_string())
        }
    }
}

/// Adds a `::goc::Wire` bound to every type parameter, so generic structs
/// derive cleanly when instantiated with wire types.
fn add_wire_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(syn::parse_quote!(::goc::Wire));
        }
    }

    generics
}
