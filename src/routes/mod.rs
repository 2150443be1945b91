pub mod person_routes;
pub mod portal_routes;
pub mod registration_routes;
