use proc_macro::TokenStream;
use syn::{ItemFn, parse_macro_input};

mod plugin;

/// Turn a plugin initializer function into a [`Plugin`] type.
///
/// The function keeps its name, which becomes a unit struct implementing
/// `Plugin`. Its single argument is the façade handed over at load time.
///
/// ```rust,ignore
/// use hookline::prelude::*;
///
/// #[hookline::plugin(name = "audit", catalog)]
/// fn audit(core: &mut dyn CoreApi) {
///     core.on(hooks::AFTER_PROCESS, |record| {
///         tracing::info!(%record, "audited");
///         Ok(())
///     });
/// }
///
/// let host = HostBuilder::new(Identity).plugin(audit).build();
/// ```
///
/// Arguments:
/// - `name = "..."`: plugin name (defaults to the function name)
/// - `catalog`: also submit the plugin to the link-time catalog under that name
///
/// [`Plugin`]: https://docs.rs/hookline/latest/hookline/trait.Plugin.html
#[proc_macro_attribute]
pub fn plugin(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as plugin::PluginArgs);
    let input = parse_macro_input!(item as ItemFn);

    plugin::expand(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
