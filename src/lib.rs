#[macro_use]
extern crate rocket;
extern crate rocket_okapi;

pub mod db;
pub mod models;
pub mod routes;
pub mod services;
pub mod swagger;
pub mod utils;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::make_swagger_ui;

use crate::db::SharedStore;
use crate::services::booking_service::BookingService;
use crate::services::content_service::ContentService;
use crate::services::seed_service::SeedService;

// Assemble the application around an injected store so tests can run the
// full HTTP surface against a double
pub fn build_rocket(store: SharedStore) -> Rocket<Build> {
    let content_service = ContentService::new(store.clone());
    let booking_service = BookingService::new(store.clone());
    let seed_service = SeedService::new(store.clone());

    rocket::build()
        .manage(store)
        .manage(content_service)
        .manage(booking_service)
        .manage(seed_service)
        .mount(
            "/",
            openapi_get_routes![
                routes::system_route::root,
                routes::system_route::test_database,
                routes::system_route::seed,
                routes::content_route::get_trips,
                routes::content_route::get_faqs,
                routes::content_route::get_reviews,
                routes::booking_route::create_booking,
                routes::booking_route::create_inquiry,
                routes::booking_route::add_review,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger::swagger_ui()))
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
