use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;
use crate::routes::Route;
use crate::services::session::{self, Session};

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::Home /> },
        Route::HotelDetails { id } => html! { <pages::hotel_details::HotelDetails {id} /> },
        Route::RoomBooking { id, room_id } => {
            html! { <pages::room_booking::RoomBooking hotel_id={id} {room_id} /> }
        }
        Route::Login => html! { <pages::login::Login /> },
        Route::Register => html! { <pages::register::Register /> },
        Route::Profile => html! { <pages::profile::Profile /> },
        Route::MyBookings => html! { <pages::my_bookings::MyBookings /> },
        Route::Admin => html! { <pages::admin::dashboard::AdminDashboard /> },
        Route::AdminHotels => html! { <pages::admin::hotels::AdminHotels /> },
        Route::AdminRooms { id } => html! { <pages::admin::rooms::AdminRooms hotel_id={id} /> },
        Route::AdminUsers => html! { <pages::admin::users::AdminUsers /> },
        Route::AdminBookings => html! { <pages::admin::bookings::AdminBookings /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h2>{"Page not found"}</h2>
            </div>
        },
    }
}

/// Application root: installs the session context and the browser router.
/// The token is read from storage once here; everything below goes through
/// the [`Session`] handle.
#[function_component(App)]
pub fn app() -> Html {
    let token = use_state(session::stored_token);
    let session = Session::new(token);

    html! {
        <ContextProvider<Session> context={session}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Session>>
    }
}
