use yew_router::prelude::*;

/// One variant per screen; the router renders the matching page component.
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/hotels/:id")]
    HotelDetails { id: i64 },
    #[at("/hotels/:id/rooms/:room_id/book")]
    RoomBooking { id: i64, room_id: i64 },
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[at("/my-bookings")]
    MyBookings,
    #[at("/admin")]
    Admin,
    #[at("/admin/hotels")]
    AdminHotels,
    #[at("/admin/hotels/:id/rooms")]
    AdminRooms { id: i64 },
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/bookings")]
    AdminBookings,
    #[not_found]
    #[at("/404")]
    NotFound,
}
