use shared::{Booking, BookingDetails, Keyed};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::hooks::{use_collection, use_require_session, use_session_expired, FetchStatus};
use crate::routes::Route;

/// Lifecycle of the details modal. The user and hotel behind a booking are
/// fetched lazily, only when a row is inspected.
#[derive(Debug, Clone, PartialEq)]
enum DetailsView {
    Closed,
    Loading,
    Ready(BookingDetails),
    Failed(String),
}

/// Read-only list of every booking in the system. Bookings are edited and
/// cancelled by their owners, not from here.
#[function_component(AdminBookings)]
pub fn admin_bookings() -> Html {
    let session = use_require_session();
    let session_expired = use_session_expired();
    let details = use_state(|| DetailsView::Closed);

    let bookings = {
        let api = session.api();
        use_collection::<Booking, _, _>(
            move || {
                let api = api.clone();
                async move { api.list_bookings().await }
            },
            session_expired.clone(),
        )
    };

    {
        let bookings = bookings.clone();
        let authenticated = session.is_authenticated();
        use_effect_with((), move |_| {
            if authenticated {
                bookings.load();
            }
            || ()
        });
    }

    let open_details = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let details = details.clone();
        move |booking: &Booking| {
            let session = session.clone();
            let session_expired = session_expired.clone();
            let details = details.clone();
            let booking = booking.clone();
            Callback::from(move |_: MouseEvent| {
                let session = session.clone();
                let session_expired = session_expired.clone();
                let details = details.clone();
                let booking = booking.clone();
                details.set(DetailsView::Loading);
                spawn_local(async move {
                    match session.api().booking_details(booking).await {
                        Ok(enriched) => details.set(DetailsView::Ready(enriched)),
                        Err(e) => {
                            if e.is_unauthorized() {
                                session_expired.emit(());
                            } else {
                                details.set(DetailsView::Failed(e.to_string()));
                            }
                        }
                    }
                });
            })
        }
    };

    let on_details_close = {
        let details = details.clone();
        Callback::from(move |_| details.set(DetailsView::Closed))
    };

    if !session.is_authenticated() {
        return html! {};
    }

    html! {
        <>
            <Header />
            <div class="admin-page">
                <nav class="breadcrumb">
                    <Link<Route> to={Route::Admin} classes="breadcrumb-link">
                        {"Administration"}
                    </Link<Route>>
                    <span class="breadcrumb-current">{"Bookings"}</span>
                </nav>

                <div class="admin-page-header">
                    <h2>{"Bookings"}</h2>
                </div>

                {match bookings.status() {
                    FetchStatus::Pending => html! {
                        <p class="loading">{"Loading bookings..."}</p>
                    },
                    FetchStatus::Failed(message) => html! {
                        <p class="error-message">{message}</p>
                    },
                    FetchStatus::Ready if bookings.is_empty() => html! {
                        <p>{"No bookings."}</p>
                    },
                    FetchStatus::Ready => html! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>{"Start"}</th>
                                    <th>{"End"}</th>
                                    <th>{"People"}</th>
                                    <th>{"Breakfast"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for bookings.items().iter().map(|booking| {
                                    html! {
                                        <tr key={booking.key()}>
                                            <td>{booking.start_date.to_string()}</td>
                                            <td>{booking.end_date.to_string()}</td>
                                            <td>{booking.nbr_people}</td>
                                            <td>{if booking.breakfast { "Yes" } else { "No" }}</td>
                                            <td class="admin-actions">
                                                <button
                                                    class="action-icon details-icon"
                                                    onclick={open_details(booking)}
                                                >
                                                    {"Details"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    },
                }}
            </div>

            {match &*details {
                DetailsView::Closed => html! {},
                DetailsView::Loading => html! {
                    <Modal title="Booking Details" on_close={on_details_close.clone()}>
                        <p class="loading">{"Loading details..."}</p>
                    </Modal>
                },
                DetailsView::Failed(message) => html! {
                    <Modal
                        title="Booking Details"
                        error={Some(message.clone())}
                        on_close={on_details_close.clone()}
                    >
                        <p>{"Could not load this booking."}</p>
                    </Modal>
                },
                DetailsView::Ready(enriched) => html! {
                    <Modal title="Booking Details" on_close={on_details_close.clone()}>
                        <div class="booking-details">
                            <p><strong>{"Booked by: "}</strong>{&enriched.user_pseudo}</p>
                            <p><strong>{"Hotel: "}</strong>{&enriched.hotel_name}</p>
                            <p><strong>{"Address: "}</strong>{&enriched.hotel_address}</p>
                            <p><strong>{"Dates: "}</strong>{format!(
                                "{} - {}",
                                enriched.booking.start_date, enriched.booking.end_date
                            )}</p>
                            <p><strong>{"People: "}</strong>{enriched.booking.nbr_people}</p>
                            <p><strong>{"Breakfast: "}</strong>{
                                if enriched.booking.breakfast { "Yes" } else { "No" }
                            }</p>
                        </div>
                    </Modal>
                },
            }}

            <Footer />
        </>
    }
}
