//! Shared string constants.

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for storefront endpoints.
pub const STORE_TAG: &str = "Store";

/// Route of the public holding page; the one door that is always open.
pub const HOLDING_PAGE: &str = "/";

/// Confirmation token required by the administrative reset call.
/// The exact literal must be supplied by the operator; anything else is
/// rejected before any network traffic happens.
pub const RESET_CONFIRMATION: &str = "ERASE EVERYTHING";
