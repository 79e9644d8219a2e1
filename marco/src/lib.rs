use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Derive `get_<field>()` (cloned) and `get_<field>_ref()` accessors
/// for every named field of a struct.
#[proc_macro_derive(Getter)]
pub fn derive_getter(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "Getter needs named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Getter can only be derived for structs")
                .to_compile_error()
                .into()
        }
    };

    let getters = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let ty = &field.ty;
        let (getter, getter_ref) = getter_names(&field_name.to_string());
        let getter = Ident::new(&getter, Span::call_site());
        let getter_ref = Ident::new(&getter_ref, Span::call_site());
        Some(quote! {
            #[allow(dead_code)]
            pub fn #getter(&self) -> #ty {
                ::std::clone::Clone::clone(&self.#field_name)
            }

            #[allow(dead_code)]
            pub fn #getter_ref(&self) -> &#ty {
                &self.#field_name
            }
        })
    });

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#getters)*
        }
    };
    TokenStream::from(expanded)
}

fn getter_names(field: &str) -> (String, String) {
    let field = field.trim_start_matches("r#");
    (format!("get_{}", field), format!("get_{}_ref", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getter_names() {
        assert_eq!(
            getter_names("scenario"),
            ("get_scenario".to_string(), "get_scenario_ref".to_string())
        );
        assert_eq!(
            getter_names("r#type"),
            ("get_type".to_string(), "get_type_ref".to_string())
        );
    }
}
