use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, GenericArgument, Ident, LitStr, PathArguments, PathSegment, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Derive macro for nodes of an owning singly linked list.
///
/// The struct must have a `next` field holding the owned link to the
/// following node, and may have a `value` field holding the payload.
#[proc_macro_derive(ChainNode, attributes(node))]
pub fn chain_node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::singly_list };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            let node_attr = attr.parse_args::<NodeAttribute>()?;
            let path = node_attr.crate_path;
            crate_path = quote! { #path };
            break;
        }
    }

    let traits_path = quote! { #crate_path::linked_list::traits };

    let (next_field, value_field) = named_fields(input)?;

    let next_field = next_field.ok_or_else(|| {
        syn::Error::new_spanned(struct_name, "Struct must have a field named 'next'")
    })?;
    check_link_type(&next_field.ty)?;

    let link_impl = quote! {
        impl #impl_generics #traits_path::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn link(&self) -> &#traits_path::Chain<Self> {
                &self.next
            }

            #[inline]
            fn link_mut(&mut self) -> &mut #traits_path::Chain<Self> {
                &mut self.next
            }
        }

        impl #impl_generics #traits_path::ChainNode for #struct_name #ty_generics #where_clause {}
    };

    // Generate `NodeWithData` trait implementation if `value` field exists
    let data_impl = match value_field {
        Some(value_field) => {
            let data_type = &value_field.ty;
            quote! {
                impl #impl_generics #traits_path::NodeWithData for #struct_name #ty_generics #where_clause {
                    type Data = #data_type;

                    #[inline]
                    fn data(&self) -> &Self::Data {
                        &self.value
                    }

                    #[inline]
                    fn data_mut(&mut self) -> &mut Self::Data {
                        &mut self.value
                    }

                    #[inline]
                    fn into_data(self) -> Self::Data {
                        self.value
                    }
                }
            }
        }
        None => quote! {},
    };

    Ok(quote! {
        #link_impl
        #data_impl
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<(Option<Field>, Option<Field>)> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    else {
        return Err(syn::Error::new_spanned(
            input,
            "ChainNode derive macro only supports structs with named fields",
        ));
    };

    let mut next_field = None;
    let mut value_field = None;

    for field in fields.named.iter() {
        if let Some(ident) = &field.ident {
            match ident.to_string().as_str() {
                "next" => next_field = Some(field.clone()),
                "value" => value_field = Some(field.clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "Unexpected field name: expected 'next' or 'value'",
                    ));
                }
            }
        }
    }

    Ok((next_field, value_field))
}

/// The `next` field must be spelled as a `Chain<..>` or an `Option<Box<..>>`.
fn check_link_type(link_type: &Type) -> syn::Result<()> {
    let Some(last) = last_segment(link_type) else {
        return Err(syn::Error::new_spanned(link_type, "Field 'next' must be a Chain type"));
    };

    let boxed = first_type_argument(last)
        .and_then(last_segment)
        .is_some_and(|segment| segment.ident == "Box");

    match last.ident.to_string().as_str() {
        "Chain" => Ok(()),
        "Option" if boxed => Ok(()),
        "Option" => Err(syn::Error::new_spanned(
            link_type,
            "Field 'next' must hold a boxed node: 'Option<Box<_>>'",
        )),
        _ => Err(syn::Error::new_spanned(
            &last.ident,
            "Field 'next' must be one of 'Chain' or 'Option<Box<_>>'",
        )),
    }
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    let Type::Path(TypePath { path, .. }) = ty else {
        return None;
    };
    path.segments.last()
}

fn first_type_argument(segment: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use syn::{parse_quote, DeriveInput};

    use super::expand;

    fn error_of(input: DeriveInput) -> String {
        match expand(&input) {
            Ok(_) => panic!("expected the derive to be rejected"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_expands_chain_and_option_box_links() {
        let chain: DeriveInput = parse_quote! {
            struct Node<T> { next: Chain<Node<T>>, value: T }
        };
        let tokens = expand(&chain).unwrap().to_string();
        assert!(tokens.contains("NodeWithData"));
        assert!(tokens.contains(":: singly_list :: linked_list :: traits"));

        let option_box: DeriveInput = parse_quote! {
            #[node(crate_path = "crate")]
            struct Marker { next: Option<Box<Marker>> }
        };
        let tokens = expand(&option_box).unwrap().to_string();
        assert!(tokens.contains("crate :: linked_list :: traits"));
        assert!(!tokens.contains("NodeWithData"));
    }

    #[test]
    fn test_rejects_unexpected_field() {
        let input: DeriveInput = parse_quote! {
            struct Tagged { next: Chain<Tagged>, value: u32, extra: u8 }
        };
        assert_eq!(
            error_of(input),
            "Unexpected field name: expected 'next' or 'value'"
        );
    }

    #[test]
    fn test_rejects_missing_next() {
        let input: DeriveInput = parse_quote! {
            struct Loose { value: u32 }
        };
        assert_eq!(error_of(input), "Struct must have a field named 'next'");
    }

    #[test]
    fn test_rejects_unboxed_option() {
        let input: DeriveInput = parse_quote! {
            struct Numbered { next: Option<u32>, value: u32 }
        };
        assert_eq!(
            error_of(input),
            "Field 'next' must hold a boxed node: 'Option<Box<_>>'"
        );

        let input: DeriveInput = parse_quote! {
            struct Listed { next: Vec<Listed> }
        };
        assert_eq!(
            error_of(input),
            "Field 'next' must be one of 'Chain' or 'Option<Box<_>>'"
        );
    }

    #[test]
    fn test_rejects_tuple_struct_and_enum() {
        let tuple: DeriveInput = parse_quote! {
            struct Pair(Chain<Pair>, u32);
        };
        let enumeration: DeriveInput = parse_quote! {
            enum Either { Left, Right }
        };
        let expected = "ChainNode derive macro only supports structs with named fields";
        assert_eq!(error_of(tuple), expected);
        assert_eq!(error_of(enumeration), expected);
    }

    #[test]
    fn test_rejects_unknown_attribute_key() {
        let input: DeriveInput = parse_quote! {
            #[node(path = "crate")]
            struct Node { next: Chain<Node> }
        };
        assert_eq!(error_of(input), "expected attribute `crate_path`");
    }
}
