use std::sync::Arc;

use dotenv::dotenv;
use log::info;

use tour_booking_system::build_rocket;
use tour_booking_system::db::{MongoStore, SharedStore};

#[rocket::launch]
async fn rocket() -> _ {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let database_name =
        std::env::var("DATABASE_NAME").unwrap_or_else(|_| "gulf_tours".to_string());

    // Connect to the document store
    let store = MongoStore::connect(&database_url, &database_name)
        .await
        .expect("Failed to connect to database");
    info!("connected to database {}", database_name);

    let store: SharedStore = Arc::new(store);

    build_rocket(store)
}
