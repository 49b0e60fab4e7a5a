use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Lifetime, LifetimeParam, Meta, parse_macro_input};

/// Derive macro for `FromRow` trait.
///
/// Generates an implementation that matches column names to struct fields.
/// Every field must have a column of the same name; a missing one is an
/// `Error::MissingColumn`. Columns are converted with `FromValue`.
///
/// # Example
///
/// ```ignore
/// #[derive(FromRow)]
/// struct User {
///     id: i32,
///     name: Option<String>,
/// }
/// ```
///
/// A struct with a lifetime parameter borrows from the message payload through
/// its first lifetime:
///
/// ```ignore
/// #[derive(FromRow)]
/// struct UserRef<'a> {
///     id: i32,
///     name: &'a str,
/// }
/// ```
///
/// # Strict Mode
///
/// By default, unknown columns are silently skipped. Use `#[from_row(strict)]`
/// to error on unknown columns:
///
/// ```ignore
/// #[derive(FromRow)]
/// #[from_row(strict)]
/// struct User {
///     id: i32,
///     name: String,
/// }
/// ```
#[proc_macro_derive(FromRow, attributes(from_row))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    // Check for #[from_row(strict)]
    let strict = input.attrs.iter().any(|attr| {
        if !attr.path().is_ident("from_row") {
            return false;
        }
        match &attr.meta {
            Meta::List(list) => list.tokens.to_string().contains("strict"),
            _ => false,
        }
    });

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "FromRow only supports structs with named fields",
                ));
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "FromRow only supports structs")),
    };

    let field_names: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let field_types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    let field_name_strs: Vec<_> = field_names.iter().map(|n| n.to_string()).collect();

    // Row lifetime: the struct's first lifetime, or a fresh one
    let mut impl_generics_src = input.generics.clone();
    let row_lifetime = match input.generics.lifetimes().next() {
        Some(param) => param.lifetime.clone(),
        None => {
            let lifetime = Lifetime::new("'__row", proc_macro2::Span::call_site());
            impl_generics_src
                .params
                .insert(0, GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())));
            lifetime
        }
    };
    let (impl_generics, _, _) = impl_generics_src.split_for_impl();
    let (_, ty_generics, where_clause) = input.generics.split_for_impl();

    let slot_decls = field_names.iter().zip(field_types.iter()).map(|(name, ty)| {
        quote! {
            let mut #name: ::core::option::Option<#ty> = ::core::option::Option::None;
        }
    });

    let match_arms = field_names
        .iter()
        .zip(field_types.iter())
        .zip(field_name_strs.iter())
        .map(|((name, ty), name_str)| {
            quote! {
                #name_str => {
                    #name = ::core::option::Option::Some(
                        <#ty as ::zero_cql::raw::FromValue<#row_lifetime>>::from_value(__value)?,
                    );
                }
            }
        });

    // Generate fallback arm based on strict mode
    let fallback_arm = if strict {
        quote! {
            __unknown => {
                return Err(::zero_cql::error::Error::UnknownColumn(__unknown.to_string()));
            }
        }
    } else {
        quote! {
            _ => {}
        }
    };

    let field_inits = field_names
        .iter()
        .zip(field_name_strs.iter())
        .map(|(name, name_str)| {
            quote! {
                #name: #name.ok_or(::zero_cql::error::Error::MissingColumn(#name_str))?
            }
        });

    Ok(quote! {
        impl #impl_generics ::zero_cql::raw::FromRow<#row_lifetime> for #name #ty_generics #where_clause {
            fn from_row(
                __row: ::zero_cql::row::Row<#row_lifetime>,
            ) -> ::zero_cql::error::Result<Self> {
                #(#slot_decls)*

                let (__columns, __values) = __row.into_parts();
                for (__column, __value) in __columns.iter().zip(__values) {
                    match __column.name.as_str() {
                        #(#match_arms)*
                        #fallback_arm
                    }
                }

                Ok(Self {
                    #(#field_inits),*
                })
            }
        }
    })
}
