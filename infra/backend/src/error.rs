use std::borrow::Cow;

/// A specialized [`BackendError`] enum of this crate.
#[maison_derive::maison_error]
pub enum BackendError {
    /// Missing or malformed builder parameters.
    #[error("Backend validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The backend project was unreachable or unhealthy.
    #[error("Backend connection error{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Transport-level HTTP failure.
    #[error("Backend HTTP error{}: {source}", format_context(.context))]
    Http {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },
    /// The backend answered with a non-success status.
    #[error("Backend service error{}: {message}", format_context(.context))]
    Service { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The destructive-action confirmation token did not match.
    #[error("Reset confirmation rejected{}: {message}", format_context(.context))]
    Confirmation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal backend error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
