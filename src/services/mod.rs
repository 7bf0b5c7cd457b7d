pub mod book_service;
pub mod catalog_service;
pub mod slider_service;
