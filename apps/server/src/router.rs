use axum::{Router, middleware};
use maison::kernel::prelude::ApiState;
use maison::server::router::{
    checkout_router, launch_router, public_access_guard, system_router, waitlist_router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object.
    // The public-access guard wraps every storefront route; while the site is
    // behind the rope, side doors answer with a redirect to the holding page.
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(system_router())
        .merge(launch_router())
        .merge(waitlist_router())
        .merge(checkout_router())
        .layer(middleware::from_fn_with_state(state.clone(), public_access_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Merge all routes and then apply the state to the final router
    Router::new().merge(openapi_routes).merge(scalar_routes)
}
