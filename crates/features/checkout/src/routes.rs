use crate::Checkout;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maison_derive::{api_handler, api_model};
use maison_domain::capabilities::CapabilityFlags;
use maison_domain::constants::STORE_TAG;
use maison_kernel::prelude::ApiState;
use maison_launch::Launch;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// What the checkout surface offers right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceMode {
    /// Payments are live; mount the payment element.
    Purchase,
    /// Purchases are replaced by the waitlist affordance.
    Waitlist,
    /// Payments are enabled but the collaborator is unconfigured.
    Unavailable,
}

#[api_model]
/// Checkout surface descriptor
pub struct CheckoutSurface {
    mode: SurfaceMode,
    /// Present only in purchase mode
    publishable_key: Option<String>,
    /// Where to join instead, in waitlist mode
    waitlist_path: Option<String>,
}

#[api_model]
/// A prepared checkout session
pub struct SessionResponse {
    session_id: String,
    publishable_key: String,
}

fn active_flags(state: &ApiState) -> CapabilityFlags {
    // Fail closed: no switchboard means no capabilities.
    state.get_slice::<Launch>().map_or_else(CapabilityFlags::empty, |launch| launch.flags)
}

#[api_handler(
    get,
    path = "/checkout",
    responses(
        (status = OK, description = "Checkout surface for the current phase", body = CheckoutSurface),
        (status = NOT_FOUND, description = "The surface does not exist in this phase"),
    ),
    tag = STORE_TAG,
)]
pub(crate) async fn checkout_surface_handler(State(state): State<ApiState>) -> Response {
    let flags = active_flags(&state);

    if flags.waitlist_mode() {
        let surface = CheckoutSurface {
            mode: SurfaceMode::Waitlist,
            publishable_key: None,
            waitlist_path: Some("/waitlist".to_owned()),
        };
        return Json(surface).into_response();
    }
    if !flags.enable_payments() {
        // Neither payments nor waitlist: the surface must not render at all.
        return StatusCode::NOT_FOUND.into_response();
    }

    let provider = state
        .get_slice::<Checkout>()
        .and_then(|checkout| checkout.provider.clone());
    let surface = match provider {
        Some(provider) => CheckoutSurface {
            mode: SurfaceMode::Purchase,
            publishable_key: Some(provider.publishable_key().to_owned()),
            waitlist_path: None,
        },
        None => CheckoutSurface {
            mode: SurfaceMode::Unavailable,
            publishable_key: None,
            waitlist_path: None,
        },
    };
    Json(surface).into_response()
}

#[api_handler(
    post,
    path = "/checkout/session",
    responses(
        (status = CREATED, description = "Session prepared", body = SessionResponse),
        (status = CONFLICT, description = "Waitlist mode is active; join instead"),
        (status = NOT_FOUND, description = "The surface does not exist in this phase"),
        (status = SERVICE_UNAVAILABLE, description = "Payment collaborator unconfigured"),
    ),
    tag = STORE_TAG,
)]
pub(crate) async fn create_session_handler(State(state): State<ApiState>) -> Response {
    let flags = active_flags(&state);

    if flags.waitlist_mode() {
        return StatusCode::CONFLICT.into_response();
    }
    if !flags.enable_payments() {
        return StatusCode::NOT_FOUND.into_response();
    }

    let provider = state
        .get_slice::<Checkout>()
        .and_then(|checkout| checkout.provider.clone());
    match provider {
        Some(provider) => {
            let session = provider.create_session();
            let response = SessionResponse {
                session_id: session.session_id,
                publishable_key: session.publishable_key,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        },
        None => {
            tracing::warn!("Checkout session requested but no payment provider is configured");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        },
    }
}

pub fn checkout_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(checkout_surface_handler))
        .routes(routes!(create_session_handler))
}
