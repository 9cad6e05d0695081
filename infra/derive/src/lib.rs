#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! This crate provides attribute macros to simplify boilerplate associated with
//! infrastructure components like the specialized async runtime.
//!
//! ## Usage
//! Add the crate as a dependency of proc-macro consumers inside the workspace:
//! ```toml
//! [dependencies]
//! maison-derive = { workspace = true }
//! ```
//!
//! See each macro's docstring for examples; they are `ignore`d to avoid compiling in this
//! crate, but can be copied into consuming crates' tests/examples as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the specialized Tokio runtime.
///
/// This macro transforms an `async fn main` into a standard `fn main` that initializes
/// a pre-configured Tokio runtime based on the specified performance profile.
///
/// # Arguments
///
/// * `high_performance` - Optimized for high-throughput server environments.
/// * `memory_efficient` - Optimized for low-footprint tooling or edge environments.
/// * `default` - Uses the default configuration (worker threads auto-detected).
///
/// # Examples
///
/// ```rust,ignore
/// #[maison_runtime::main(high_performance)]
/// async fn main() -> Result<(), ()> {
/// # Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro to define a standard API data model.
///
/// Ensures consistency across all DTOs in the platform by injecting common
/// behaviors and constraints.
///
/// # Injected Behaviors
///
/// * **Derives**: Automatically adds `Debug`, `Serialize`, and `Deserialize` if missing.
/// * **`OpenAPI`**: Conditionally adds `utoipa::ToSchema` when the `server` feature is enabled.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
///
/// # Arguments
///
/// * `rename_all = "camelCase"` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Disables strict field checking.
///
/// # Example
///
/// ```rust,ignore
/// use maison_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct WaitlistRequest {
///     pub email: String,
///     pub display_name: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Wraps a standard async function and integrates it with `utoipa`.
///
/// # Arguments
///
/// Accepts standard `utoipa::path` arguments such as `get`, `post`, `path = "..."`,
/// `responses(...)`, and `tag = "..."`.
///
/// # Example
///
/// ```rust,ignore
/// use maison_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> Result<(), ()> {
///     // ...
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// Transforms a standard enum into a fully-featured error type integrated with
/// the Maison infrastructure.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]`
///   field, enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides specialized `From<&str>` and `From<String>`
///   implementations if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`).
/// 4. Tuple or unit variants are rejected to keep error wiring explicit and reliable.
///
/// # Example
///
/// ```rust,ignore
/// use maison_derive::maison_error;
/// use std::borrow::Cow;
///
/// #[maison_error]
/// pub enum BackendError {
///     #[error("HTTP error{}: {source}", format_context(.context))]
///     Http {
///         #[source]
///         source: reqwest::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn maison_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a Vertical Slice handle.
///
/// This macro transforms a struct into a full Slice pattern:
/// 1. Generates a thread-safe `Arc` wrapper.
/// 2. Implements `Deref` for transparent access to the inner state.
/// 3. Implements `FeatureSlice` for registration in the Kernel.
///
/// # Example
/// ```rust,ignore
/// #[maison_derive::maison_slice]
/// pub struct Launch {
///     pub phase: Option<LaunchPhase>,
/// }
///
/// fn init() -> Launch {
///     let inner = LaunchInner { phase: None };
///     Launch::new(inner)
/// }
/// ```
#[proc_macro_attribute]
pub fn maison_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
