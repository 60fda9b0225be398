use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, TypeParamBound, parse_macro_input, parse_quote};

/// Derive macro for implementing the `JobProperty` marker trait.
///
/// ```rust,ignore
/// #[derive(JobProperty)]
/// struct TemplateProperty { sync_description: bool }
/// ```
#[proc_macro_derive(JobProperty)]
pub fn derive_job_property(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_job_property(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_job_property(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "JobProperty types are tracked by type id and cannot borrow",
        ));
    }

    let mut generics = input.generics.clone();
    let bounds = property_param_bounds();
    for param in generics.type_params_mut() {
        param.bounds.extend(bounds.iter().cloned());
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::eztemplates::JobProperty for #name #ty_generics #where_clause {}
    })
}

// Type parameters must satisfy the trait's own supertraits.
fn property_param_bounds() -> [TypeParamBound; 3] {
    [
        parse_quote!(::std::marker::Send),
        parse_quote!(::std::marker::Sync),
        parse_quote!('static),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_params_get_property_bounds() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> { inner: T }
        };
        let expanded = expand_job_property(input).unwrap().to_string();
        assert!(expanded.contains("JobProperty for Wrapper < T >"));
        assert!(expanded.contains(":: std :: marker :: Send"));
        assert!(expanded.contains("'static"));
    }

    #[test]
    fn test_lifetimes_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Borrowed<'a> { name: &'a str }
        };
        let err = expand_job_property(input).unwrap_err();
        assert!(err.to_string().contains("cannot borrow"));
    }
}
