use std::borrow::Cow;

/// A specialized [`WaitlistError`] enum of this crate.
#[maison_derive::maison_error]
pub enum WaitlistError {
    /// Configuration errors for the mailing-list collaborator.
    #[error("Waitlist config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Transport-level HTTP failure.
    #[error("Waitlist HTTP error{}: {source}", format_context(.context))]
    Http {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },
    /// The mailing-list service answered with a non-success status.
    #[error("Waitlist service error{}: {message}", format_context(.context))]
    Service { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal waitlist error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
