use crate::Waitlist;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maison_derive::{api_handler, api_model};
use maison_domain::constants::STORE_TAG;
use maison_kernel::prelude::ApiState;
use maison_launch::Launch;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// Waitlist join request
pub struct JoinRequest {
    /// Address to subscribe
    email: String,
    /// Optional display name for the list entry
    display_name: Option<String>,
}

#[api_model]
/// Waitlist join acknowledgement
pub struct JoinResponse {
    /// Correlation id for support lookups
    request_id: String,
    /// Whether the mailing list accepted the address
    joined: bool,
}

#[api_handler(
    post,
    path = "/waitlist",
    request_body = JoinRequest,
    responses(
        (status = ACCEPTED, description = "Join attempt processed", body = JoinResponse),
        (status = NOT_FOUND, description = "Waitlist mode is not active"),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid email address"),
    ),
    tag = STORE_TAG,
)]
pub(crate) async fn join_waitlist_handler(
    State(state): State<ApiState>,
    Json(body): Json<JoinRequest>,
) -> Response {
    // The surface only exists while the switchboard says so.
    let waitlist_mode =
        state.get_slice::<Launch>().is_some_and(|launch| launch.flags.waitlist_mode());
    if !waitlist_mode {
        return StatusCode::NOT_FOUND.into_response();
    }

    let email = body.email.trim();
    if email.is_empty() || !email.contains('@') {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    match state.try_get_slice::<Waitlist>() {
        Ok(waitlist) => {
            let receipt = waitlist.join(email, body.display_name.as_deref()).await;
            let response =
                JoinResponse { request_id: receipt.request_id, joined: receipt.joined };
            (StatusCode::ACCEPTED, Json(response)).into_response()
        },
        Err(e) => {
            tracing::error!(error = %e, "Waitlist slice missing from state");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

pub fn waitlist_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(join_waitlist_handler))
}
