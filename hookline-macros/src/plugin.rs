//! `#[plugin]` expansion.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    FnArg, Ident, ItemFn, LitStr, ReturnType, Token,
    parse::{Parse, ParseStream},
};

/// Arguments for the `#[plugin]` macro.
pub(crate) struct PluginArgs {
    /// Explicit plugin name.
    pub name: Option<LitStr>,
    /// Submit to the catalog.
    pub catalog: bool,
}

impl Parse for PluginArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut catalog = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "name" => {
                    input.parse::<Token![=]>()?;
                    name = Some(input.parse::<LitStr>()?);
                }
                "catalog" => catalog = true,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        if let Some(lit) = &name {
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "plugin name must not be empty"));
            }
        }

        Ok(PluginArgs { name, catalog })
    }
}

pub(crate) fn expand(args: PluginArgs, input: ItemFn) -> syn::Result<TokenStream> {
    let sig = &input.sig;

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "plugin initializers run synchronously and cannot be async",
        ));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "plugin initializers cannot be generic",
        ));
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        return Err(syn::Error::new_spanned(
            ty,
            "plugin initializers must not return a value",
        ));
    }

    let mut inputs = sig.inputs.iter();
    let (core_pat, core_ty) = match (inputs.next(), inputs.next()) {
        (Some(FnArg::Typed(pat_type)), None) => (&pat_type.pat, &pat_type.ty),
        _ => {
            return Err(syn::Error::new_spanned(
                &sig.inputs,
                "plugin initializer must take exactly one argument: fn(core: &mut dyn CoreApi)",
            ));
        }
    };

    let fn_name = &sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let attrs = &input.attrs;
    let plugin_name = args
        .name
        .unwrap_or_else(|| LitStr::new(&fn_name.to_string(), fn_name.span()));

    let catalog_entry = args.catalog.then(|| {
        let factory = format_ident!("__hookline_make_{}", fn_name);
        quote! {
            #[doc(hidden)]
            fn #factory(_: &::hookline::HookName) -> ::std::boxed::Box<dyn ::hookline::Plugin> {
                ::std::boxed::Box::new(#fn_name)
            }

            ::hookline::inventory::submit! {
                ::hookline::catalog::PluginEntry::new(#plugin_name, #factory)
            }
        }
    });

    Ok(quote! {
        #(#attrs)*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #fn_vis struct #fn_name;

        impl ::hookline::Plugin for #fn_name {
            fn name(&self) -> &str {
                #plugin_name
            }

            fn init(self: ::std::boxed::Box<Self>, #core_pat: #core_ty) #fn_block
        }

        #catalog_entry
    })
}
