use std::borrow::Cow;

/// A specialized [`LaunchError`] enum of this crate.
#[maison_derive::maison_error]
pub enum LaunchError {
    /// Configuration errors for the launch switchboard.
    #[error("Launch config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal launch error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
