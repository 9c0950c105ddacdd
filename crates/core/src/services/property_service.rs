use crate::app_state::AppState;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::property_repository::PropertyRepository;
use crate::security::Claims;
use crate::services::activity_service::ActivityService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::booking_dto::BookingDatesDto;
use cresthaven_primitives::models::dtos::property_dto::{CreatePropertyRequest, PropertyFilter};
use cresthaven_primitives::models::entities::enum_types::{
    BillingPeriod, CurrencyCode, PropertyStatus, UserRole,
};
use cresthaven_primitives::models::entities::property::{
    NewProperty, Property, PropertyChangeset,
};
use cresthaven_primitives::utility::slugify;
use tracing::{error, info};
use uuid::Uuid;

pub struct PropertyService;

impl PropertyService {
    pub async fn create_property(
        state: &AppState,
        claims: &Claims,
        req: CreatePropertyRequest,
    ) -> Result<Property, ApiError> {
        let manager_id = claims.user_id()?;

        if claims.role == UserRole::Resident {
            return Err(ApiError::Forbidden(
                "Only property managers may list properties".into(),
            ));
        }

        let mut conn = state.db.get().map_err(|_| {
            error!("property.create: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let suffix = Uuid::new_v4().simple().to_string();
        let slug = slugify(&req.title, &suffix[..5]);

        let property = PropertyRepository::create(
            &mut conn,
            NewProperty {
                manager_id,
                title: &req.title,
                slug: &slug,
                description: &req.description,
                property_type: req.property_type,
                address: &req.address,
                city: &req.city,
                country: &req.country,
                bedrooms: req.bedrooms,
                bathrooms: req.bathrooms,
                square_feet: req.square_feet,
                price_per_month: req.price_per_month,
                currency: req.currency.unwrap_or(CurrencyCode::USD),
                billing_period: req.billing_period.unwrap_or(BillingPeriod::PerMonth),
                amenities: serde_json::json!(req.amenities),
                status: PropertyStatus::Available,
            },
        )?;

        let _ = ActivityService::log_event(
            state,
            Some(manager_id),
            "property.create",
            Some("property"),
            Some(&property.id.to_string()),
            serde_json::json!({ "title": property.title, "slug": property.slug }),
            None,
        )
        .await;

        info!(
            property_id = %property.id,
            manager_id = %manager_id,
            "Property listed"
        );

        Ok(property)
    }

    pub async fn get_property(
        state: &AppState,
        id_or_slug: &str,
    ) -> Result<Property, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("property.get: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let property = match Uuid::parse_str(id_or_slug) {
            Ok(id) => PropertyRepository::find_by_id(&mut conn, id)?,
            Err(_) => PropertyRepository::find_by_slug(&mut conn, id_or_slug)?,
        };

        property.ok_or_else(|| ApiError::NotFound("Property does not exist".into()))
    }

    pub async fn list_properties(
        state: &AppState,
        filter: PropertyFilter,
    ) -> Result<Vec<Property>, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("property.list: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        PropertyRepository::list(&mut conn, &filter)
    }

    /// Date ranges currently held against a property, for availability
    /// display on the listing page.
    pub async fn occupied_dates(
        state: &AppState,
        property_id: Uuid,
    ) -> Result<Vec<BookingDatesDto>, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("property.dates: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        if !PropertyRepository::exists(&mut conn, property_id)? {
            return Err(ApiError::NotFound("Property does not exist".into()));
        }

        BookingRepository::occupied_dates(&mut conn, property_id)
    }

    /// Manager's own portfolio.
    pub async fn list_by_manager(
        state: &AppState,
        claims: &Claims,
    ) -> Result<Vec<Property>, ApiError> {
        let manager_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("property.portfolio: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        PropertyRepository::list_by_manager(&mut conn, manager_id)
    }

    /// Full-field edit. Ownership rule matches status updates: the managing
    /// user or an administrator.
    pub async fn update_property(
        state: &AppState,
        claims: &Claims,
        property_id: Uuid,
        req: CreatePropertyRequest,
    ) -> Result<Property, ApiError> {
        let actor_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("property.update: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let existing = PropertyRepository::find_by_id(&mut conn, property_id)?
            .ok_or_else(|| ApiError::NotFound("Property does not exist".into()))?;

        if actor_id != existing.manager_id && !claims.is_admin() {
            return Err(ApiError::Forbidden(
                "Only the property's manager or an administrator may update it".into(),
            ));
        }

        let property = PropertyRepository::update(
            &mut conn,
            property_id,
            PropertyChangeset {
                title: &req.title,
                description: &req.description,
                property_type: req.property_type,
                address: &req.address,
                city: &req.city,
                country: &req.country,
                bedrooms: req.bedrooms,
                bathrooms: req.bathrooms,
                square_feet: req.square_feet,
                price_per_month: req.price_per_month,
                currency: req.currency.unwrap_or(existing.currency),
                billing_period: req.billing_period.unwrap_or(existing.billing_period),
                amenities: serde_json::json!(req.amenities),
                updated_at: chrono::Utc::now(),
            },
        )?;

        let _ = ActivityService::log_event(
            state,
            Some(actor_id),
            "property.update",
            Some("property"),
            Some(&property_id.to_string()),
            serde_json::json!({ "title": property.title }),
            None,
        )
        .await;

        info!(property_id = %property_id, "Property updated");

        Ok(property)
    }

    pub async fn update_status(
        state: &AppState,
        claims: &Claims,
        property_id: Uuid,
        status: PropertyStatus,
    ) -> Result<Property, ApiError> {
        let actor_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("property.status: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let manager_id = PropertyRepository::manager_of(&mut conn, property_id)?
            .ok_or_else(|| ApiError::NotFound("Property does not exist".into()))?;

        if actor_id != manager_id && !claims.is_admin() {
            return Err(ApiError::Forbidden(
                "Only the property's manager or an administrator may update it".into(),
            ));
        }

        let property = PropertyRepository::update_status(&mut conn, property_id, status)?;

        let _ = ActivityService::log_event(
            state,
            Some(actor_id),
            "property.status_update",
            Some("property"),
            Some(&property_id.to_string()),
            serde_json::json!({ "status": status }),
            None,
        )
        .await;

        Ok(property)
    }
}
