use crate::handlers::{
    activity_logs::__path_activity_logs, booking_status::__path_update_booking_status,
    checkout::__path_start_checkout, checkout_verify::__path_verify_checkout,
    conversation::__path_conversation, create_booking::__path_create_booking,
    create_property::__path_create_property, create_review::__path_create_review,
    current_user::__path_current_user_details, get_property::__path_get_property,
    health::__path_health_check, list_applications::__path_list_applications,
    list_properties::__path_list_properties, login::__path_login, logout::__path_logout,
    manager_properties::__path_manager_properties, my_bookings::__path_my_bookings,
    paystack_webhook::__path_paystack_webhook,
    property_availability::__path_property_availability,
    property_bookings::__path_property_bookings, property_reviews::__path_property_reviews,
    property_status::__path_update_property_status, register::__path_register,
    review_application::__path_review_application, send_message::__path_send_message,
    submit_application::__path_submit_application, update_property::__path_update_property,
};
use cresthaven_primitives::models::dtos::auth_dto::RegisterRequest;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        register, login, logout, current_user_details, health_check,
        list_properties, get_property, property_availability, create_property,
        update_property, manager_properties, update_property_status,
        create_booking, my_bookings, property_bookings, update_booking_status,
        start_checkout, verify_checkout, paystack_webhook,
        create_review, property_reviews,
        send_message, conversation,
        submit_application, list_applications, review_application,
        activity_logs
    ),
    components(schemas(RegisterRequest)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Properties", description = "Listing catalogue"),
        (name = "Bookings", description = "Reservation lifecycle"),
        (name = "Checkout", description = "Payment initialization and verification"),
        (name = "Admin", description = "Administrative endpoints")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
