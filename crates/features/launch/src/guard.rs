//! Route guard enforcing the `public_access` capability.
//!
//! While the site is behind the rope, every side door answers with a redirect
//! to the holding page instead of content. The guard fails closed: a missing
//! switchboard slice is treated like a dark site.

use crate::Launch;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use maison_domain::constants::HOLDING_PAGE;
use maison_kernel::prelude::ApiState;
use tracing::debug;

/// Paths that stay reachable even without public access: the holding page
/// itself, the health probe, and the switchboard status the front end needs
/// to render the holding state.
const OPEN_PATHS: &[&str] = &[HOLDING_PAGE, "/health", "/launch"];

pub async fn public_access_guard(
    State(state): State<ApiState>,
    request: Request,
    next: Next,
) -> Response {
    let public_access =
        state.get_slice::<Launch>().is_some_and(|launch| launch.flags.public_access());

    if public_access || OPEN_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    debug!(path = %request.uri().path(), "Side door redirected to the holding page");
    Redirect::temporary(HOLDING_PAGE).into_response()
}
