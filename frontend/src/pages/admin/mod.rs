pub mod bookings;
pub mod dashboard;
pub mod hotels;
pub mod rooms;
pub mod users;
