use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Data, DataStruct, DeriveInput, Error, Fields, Ident, Result, Token,
    parse_macro_input,
};

/// Derives `rwa_query::Searchable` from a `#[search(field, ...)]` attribute.
///
/// Every listed field must be a named field whose type implements
/// `AsRef<str>`. Fields are returned in attribute order.
#[proc_macro_derive(Searchable, attributes(search))]
pub fn derive_searchable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_searchable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_searchable(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let search_attr = find_search_attr(&input.attrs)?;
    let spec = search_attr.parse_args::<SearchSpec>()?;
    let known = named_fields(input)?;

    for field in &spec.fields {
        if !known.iter().any(|k| k == field) {
            return Err(Error::new_spanned(
                field,
                format!("`{field}` is not a named field of `{}`", input.ident),
            ));
        }
    }

    let name = &input.ident;
    let fields = &spec.fields;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics rwa_query::Searchable for #name #ty_generics #where_clause {
            fn search_fields(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![
                    #( ::core::convert::AsRef::<str>::as_ref(&self.#fields) ),*
                ]
            }
        }
    })
}

fn find_search_attr(attrs: &[Attribute]) -> Result<&Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("search"))
        .ok_or_else(|| Error::new(Span::call_site(), "missing #[search(...)] attribute"))
}

fn named_fields(input: &DeriveInput) -> Result<Vec<Ident>> {
    match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => Ok(named
            .named
            .iter()
            .filter_map(|field| field.ident.clone())
            .collect()),
        _ => Err(Error::new_spanned(
            &input.ident,
            "Searchable can only be derived for structs with named fields",
        )),
    }
}

struct SearchSpec {
    fields: Vec<Ident>,
}

impl Parse for SearchSpec {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let fields: Punctuated<Ident, Token![,]> = Punctuated::parse_terminated(input)?;

        if fields.is_empty() {
            return Err(input.error("expected at least one field in #[search(...)]"));
        }

        Ok(Self {
            fields: fields.into_iter().collect(),
        })
    }
}
