use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Result, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

/// Primitives with a matching `put_*` method on `FieldSink`.
const PRIMITIVES: [&str; 8] = ["u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64"];

pub(crate) fn expand_fields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`Fields` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`Fields` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut labels = HashSet::new();

    for field in &fields {
        if !labels.insert(field.label.value()) {
            Err(Error::new_spanned(
                &field.label,
                "Field labels must be unique.",
            ))?
        }
    }

    let calls = fields.iter().map(|field| {
        let FieldMetadata {
            name,
            primitive,
            label,
        } = field;

        let method = format_ident!("put_{}", primitive);

        quote! { o.#method(#label, self.#name); }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl Fields for #name {
            fn publish(&self, o: &mut dyn FieldSink) {
                #(#calls)*
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    primitive: Ident,
    label: LitStr,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let FieldAttribute { label } = attr.meta.require_list()?.parse_args()?;

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have a primitive integer type.",
            ))?
        };

        let Some(primitive) = path.path.get_ident() else {
            Err(Error::new_spanned(
                &path.path,
                "Field must have a primitive integer type.",
            ))?
        };

        if !PRIMITIVES.iter().any(|p| primitive == *p) {
            Err(Error::new_spanned(
                primitive,
                "Field must have a primitive integer type.",
            ))?
        }

        Ok(Some(Self {
            name,
            primitive: primitive.clone(),
            label,
        }))
    }
}

#[derive(Debug)]
struct FieldAttribute {
    label: LitStr,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let label = input.parse::<LitStr>()?;
        Ok(Self { label })
    }
}
