pub mod admin;
pub mod home;
pub mod hotel_details;
pub mod login;
pub mod my_bookings;
pub mod profile;
pub mod register;
pub mod room_booking;
