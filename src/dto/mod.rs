pub mod booking_dto;
