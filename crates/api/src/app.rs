use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    activity_logs::activity_logs, booking_status::update_booking_status,
    checkout::start_checkout, checkout_verify::verify_checkout, conversation::conversation,
    create_booking::create_booking, create_property::create_property,
    create_review::create_review, current_user::current_user_details,
    get_property::get_property, health::health_check, list_applications::list_applications,
    list_properties::list_properties, login::login, logout::logout,
    manager_properties::manager_properties, my_bookings::my_bookings,
    paystack_webhook::paystack_webhook, property_availability::property_availability,
    property_bookings::property_bookings, property_reviews::property_reviews,
    property_status::update_property_status, register::register,
    review_application::review_application, send_message::send_message,
    submit_application::submit_application, update_property::update_property,
};
use axum::{middleware, response::IntoResponse, routing::get, routing::post, Router};
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::SecurityConfig;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    // rate limiting configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    let public_router = create_public_routers(metric_handle);

    let protected_router = create_secured_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(middleware::from_fn(https_redirect_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // disable rate limiting in test environment
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}

fn create_secured_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/current_user", get(current_user_details))
        .route("/api/logout", post(logout))
        .route(
            "/api/manager/properties",
            get(manager_properties).post(create_property),
        )
        .route(
            "/api/manager/properties/{property_id}",
            axum::routing::put(update_property),
        )
        .route(
            "/api/properties/{property_id}/status",
            axum::routing::patch(update_property_status),
        )
        .route(
            "/api/properties/{property_id}/bookings",
            get(property_bookings),
        )
        .route("/api/bookings", post(create_booking).get(my_bookings))
        .route(
            "/api/bookings/{booking_id}/status",
            axum::routing::patch(update_booking_status),
        )
        .route("/api/checkout/{booking_id}", post(start_checkout))
        .route("/api/reviews", post(create_review))
        .route("/api/messages", post(send_message))
        .route("/api/messages/{peer_id}", get(conversation))
        .route("/api/admin/applications", get(list_applications))
        .route(
            "/api/admin/applications/{application_id}",
            axum::routing::patch(review_application),
        )
        .route("/api/admin/logs", get(activity_logs))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_public_routers(metric_handle: PrometheusHandle) -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/properties", get(list_properties))
        .route("/api/properties/{property_id}", get(get_property))
        .route(
            "/api/properties/{property_id}/availability",
            get(property_availability),
        )
        .route(
            "/api/properties/{property_id}/reviews",
            get(property_reviews),
        )
        .route("/api/applications", post(submit_application))
        .route("/api/checkout/verify", get(verify_checkout))
        .route("/webhooks/paystack", post(paystack_webhook))
        .route("/api/health", get(health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
}

async fn https_redirect_middleware(
    req: axum::extract::Request,
    next: middleware::Next,
) -> Result<axum::response::Response, (axum::http::StatusCode, String)> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        let headers = req.headers();
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok());

        if let Some("http") = proto {
            let host = headers
                .get("host")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");

            let uri = req.uri();
            let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
            let redirect_url = format!("https://{}{}", host, path_and_query);

            return Ok(axum::response::Redirect::permanent(&redirect_url).into_response());
        }
    }

    Ok(next.run(req).await)
}
