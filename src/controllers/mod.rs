pub mod availability_controller;
pub mod booking_controller;
pub mod catalog_controller;
