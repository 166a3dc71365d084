pub mod booking_service;
pub mod content_service;
pub mod seed_service;
