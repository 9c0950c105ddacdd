use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use cresthaven_primitives::models::entities::enum_types::{
    BillingPeriod, CurrencyCode, PropertyStatus, PropertyType, UserRole,
};
use cresthaven_primitives::models::entities::property::{NewProperty, Property};
use cresthaven_primitives::models::entities::user::{NewUser, User};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use std::env;
use uuid::Uuid;

fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

fn establish_connection() -> PgConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

fn main() {
    dotenv().ok();
    println!("🌱 Seeding database...");

    let mut conn = establish_connection();

    clean_db(&mut conn);

    let manager_id = seed_user(
        &mut conn,
        "manager@cresthaven.com",
        "Maya Mensah",
        "manager123!A",
        UserRole::PropertyManager,
    );
    let resident_id = seed_user(
        &mut conn,
        "resident@cresthaven.com",
        "Theo Park",
        "resident123!A",
        UserRole::Resident,
    );
    seed_user(
        &mut conn,
        "admin@cresthaven.com",
        "Admin",
        "admin123!Abc",
        UserRole::SuperAdmin,
    );

    seed_property(
        &mut conn,
        manager_id,
        "Seaside Villa",
        "villa-seaside-demo1",
        PropertyType::Villa,
        20_000, // $200.00 per night
        BillingPeriod::PerNight,
    );
    seed_property(
        &mut conn,
        manager_id,
        "Downtown Studio",
        "studio-downtown-demo1",
        PropertyType::Studio,
        90_000, // $900.00 per month
        BillingPeriod::PerMonth,
    );

    println!("Seeded manager {} and resident {}", manager_id, resident_id);
    println!("✅ Database seeded successfully!");
}

fn clean_db(conn: &mut PgConnection) {
    use diesel::sql_query;
    println!("🧹 Cleaning database...");
    sql_query(
        "TRUNCATE users, properties, bookings, reviews, messages, manager_applications, \
         activity_logs, blacklisted_tokens CASCADE",
    )
    .execute(conn)
    .expect("Error truncating tables");
}

fn seed_user(
    conn: &mut PgConnection,
    u_email: &str,
    u_name: &str,
    u_password: &str,
    u_role: UserRole,
) -> Uuid {
    use cresthaven_primitives::schema::users;

    let existing = users::table
        .filter(users::email.eq(u_email))
        .first::<User>(conn)
        .optional()
        .unwrap();

    if let Some(user) = existing {
        println!("User {} already exists", u_email);
        return user.id;
    }

    let hashed = hash_password(u_password);

    let user: User = diesel::insert_into(users::table)
        .values(NewUser {
            email: u_email,
            password_hash: &hashed,
            full_name: Some(u_name),
            phone: None,
            role: u_role,
        })
        .get_result(conn)
        .expect("Error inserting user");

    println!("Created user {} ({})", u_email, user.id);
    user.id
}

fn seed_property(
    conn: &mut PgConnection,
    manager: Uuid,
    title: &str,
    slug: &str,
    kind: PropertyType,
    rate: i64,
    period: BillingPeriod,
) -> Uuid {
    use cresthaven_primitives::schema::properties;

    let property: Property = diesel::insert_into(properties::table)
        .values(NewProperty {
            manager_id: manager,
            title,
            slug,
            description: "A demonstration listing created by the seeder.",
            property_type: kind,
            address: "1 Harbour Road",
            city: "Accra",
            country: "Ghana",
            bedrooms: 3,
            bathrooms: 2,
            square_feet: Some(1400),
            price_per_month: rate,
            currency: CurrencyCode::USD,
            billing_period: period,
            amenities: serde_json::json!(["wifi", "pool", "parking"]),
            status: PropertyStatus::Available,
        })
        .get_result(conn)
        .expect("Error inserting property");

    println!("Created property {} ({})", title, property.id);
    property.id
}
