use crate::Launch;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use maison_derive::{api_handler, api_model};
use maison_domain::constants::STORE_TAG;
use maison_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// Launch switchboard status consumed by the front end
pub struct LaunchStatus {
    /// Active phase literal; absent for static-profile deployments
    phase: Option<String>,
    /// Whether the primary navigation renders
    show_navigation: bool,
    /// Whether checkout is live
    enable_payments: bool,
    /// Whether purchases are replaced by the waitlist
    waitlist_mode: bool,
    /// Whether non-home routes are reachable
    public_access: bool,
}

impl From<&Launch> for LaunchStatus {
    fn from(launch: &Launch) -> Self {
        let flags = launch.flags;
        Self {
            phase: launch.profile.phase().map(|phase| phase.to_string()),
            show_navigation: flags.show_navigation(),
            enable_payments: flags.enable_payments(),
            waitlist_mode: flags.waitlist_mode(),
            public_access: flags.public_access(),
        }
    }
}

#[api_handler(
    get,
    path = "/launch",
    responses((status = OK, description = "Current launch switchboard", body = LaunchStatus)),
    tag = STORE_TAG,
)]
pub(crate) async fn launch_status_handler(State(state): State<ApiState>) -> Response {
    match state.try_get_slice::<Launch>() {
        Ok(launch) => Json(LaunchStatus::from(launch)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Launch switchboard missing from state");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

pub fn launch_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(launch_status_handler))
}
