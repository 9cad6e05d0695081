use std::borrow::Cow;

/// A specialized [`CheckoutError`] enum of this crate.
#[maison_derive::maison_error]
pub enum CheckoutError {
    /// Configuration errors for the payment collaborator.
    #[error("Checkout config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal checkout error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
