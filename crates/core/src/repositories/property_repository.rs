use chrono::Utc;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::property_dto::PropertyFilter;
use cresthaven_primitives::models::entities::enum_types::PropertyStatus;
use cresthaven_primitives::models::entities::property::{
    NewProperty, Property, PropertyChangeset,
};
use cresthaven_primitives::schema::properties;
use diesel::prelude::*;
use uuid::Uuid;

pub struct PropertyRepository;

impl PropertyRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_property: NewProperty,
    ) -> Result<Property, ApiError> {
        diesel::insert_into(properties::table)
            .values(&new_property)
            .get_result::<Property>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Property>, ApiError> {
        properties::table
            .find(id)
            .first::<Property>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_slug(
        conn: &mut PgConnection,
        slug: &str,
    ) -> Result<Option<Property>, ApiError> {
        properties::table
            .filter(properties::slug.eq(slug))
            .first::<Property>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn exists(conn: &mut PgConnection, id: Uuid) -> Result<bool, ApiError> {
        use diesel::dsl::{exists, select};

        select(exists(properties::table.find(id)))
            .get_result::<bool>(conn)
            .map_err(ApiError::from)
    }

    pub fn manager_of(conn: &mut PgConnection, id: Uuid) -> Result<Option<Uuid>, ApiError> {
        properties::table
            .find(id)
            .select(properties::manager_id)
            .first::<Uuid>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list(
        conn: &mut PgConnection,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, ApiError> {
        let mut query = properties::table
            .filter(properties::status.eq(PropertyStatus::Available))
            .into_boxed();

        if let Some(city) = &filter.city {
            query = query.filter(properties::city.ilike(format!("%{}%", city)));
        }
        if let Some(property_type) = filter.property_type {
            query = query.filter(properties::property_type.eq(property_type));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(properties::price_per_month.ge(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(properties::price_per_month.le(max_price));
        }
        if let Some(bedrooms) = filter.bedrooms {
            query = query.filter(properties::bedrooms.ge(bedrooms));
        }

        query
            .order(properties::created_at.desc())
            .load::<Property>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_manager(
        conn: &mut PgConnection,
        manager_id: Uuid,
    ) -> Result<Vec<Property>, ApiError> {
        properties::table
            .filter(properties::manager_id.eq(manager_id))
            .order(properties::created_at.desc())
            .load::<Property>(conn)
            .map_err(ApiError::from)
    }

    pub fn update(
        conn: &mut PgConnection,
        id: Uuid,
        changes: PropertyChangeset,
    ) -> Result<Property, ApiError> {
        diesel::update(properties::table.find(id))
            .set(&changes)
            .get_result::<Property>(conn)
            .map_err(ApiError::from)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        id: Uuid,
        status: PropertyStatus,
    ) -> Result<Property, ApiError> {
        diesel::update(properties::table.find(id))
            .set((
                properties::status.eq(status),
                properties::updated_at.eq(Utc::now()),
            ))
            .get_result::<Property>(conn)
            .map_err(ApiError::from)
    }
}
