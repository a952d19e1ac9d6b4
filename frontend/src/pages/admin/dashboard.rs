use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::hooks::use_require_session;
use crate::routes::Route;

/// Admin landing page, plain links to the management tables. The backend
/// enforces admin rights on every call, so this page only needs a session.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let session = use_require_session();

    if !session.is_authenticated() {
        return html! {};
    }

    html! {
        <>
            <Header />
            <div class="admin-dashboard">
                <h2>{"Administration"}</h2>
                <div class="admin-cards">
                    <Link<Route> to={Route::AdminHotels} classes="admin-card">
                        <h3>{"Hotels"}</h3>
                        <p>{"Create, edit and delete hotels and their rooms"}</p>
                    </Link<Route>>
                    <Link<Route> to={Route::AdminUsers} classes="admin-card">
                        <h3>{"Users"}</h3>
                        <p>{"Manage user accounts and admin rights"}</p>
                    </Link<Route>>
                    <Link<Route> to={Route::AdminBookings} classes="admin-card">
                        <h3>{"Bookings"}</h3>
                        <p>{"Review all bookings across hotels"}</p>
                    </Link<Route>>
                </div>
            </div>
            <Footer />
        </>
    }
}
