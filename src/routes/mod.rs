pub mod booking_route;
pub mod content_route;
pub mod system_route;
