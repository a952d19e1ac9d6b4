use shared::{Hotel, NewBooking, Room};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::hooks::{use_require_session, use_session_expired};
use crate::routes::Route;
use crate::services::date_utils::parse_stay_dates;

#[derive(Properties, PartialEq)]
pub struct RoomBookingProps {
    pub hotel_id: i64,
    pub room_id: i64,
}

#[function_component(RoomBooking)]
pub fn room_booking(props: &RoomBookingProps) -> Html {
    let session = use_require_session();
    let session_expired = use_session_expired();
    let navigator = use_navigator();
    let room = use_state(|| Option::<Room>::None);
    let hotel = use_state(|| Option::<Hotel>::None);
    let error = use_state(|| Option::<String>::None);

    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let guests = use_state(|| "1".to_string());
    let breakfast = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    {
        let session = session.clone();
        let room = room.clone();
        let hotel = hotel.clone();
        let error = error.clone();
        let authenticated = session.is_authenticated();
        use_effect_with(props.room_id, move |&room_id| {
            if authenticated {
                let api = session.api();
                spawn_local(async move {
                    // Chained fetch: the room failing aborts before the
                    // hotel is requested.
                    match api.room_with_hotel(room_id).await {
                        Ok((room_data, hotel_data)) => {
                            room.set(Some(room_data));
                            hotel.set(Some(hotel_data));
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            }
            || ()
        });
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_breakfast_change = {
        let breakfast = breakfast.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            breakfast.set(input.checked());
        })
    };

    let on_confirm = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let navigator = navigator.clone();
        let room_id = props.room_id;
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let guests = guests.clone();
        let breakfast = breakfast.clone();
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |_: MouseEvent| {
            let (start, end) = match parse_stay_dates(&start_date, &end_date) {
                Ok(dates) => dates,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            let nbr_people = guests.parse::<i32>().unwrap_or(1).max(1);

            let booking = NewBooking {
                room_id,
                start_date: start,
                end_date: end,
                nbr_people,
                breakfast: *breakfast,
            };
            let session = session.clone();
            let session_expired = session_expired.clone();
            let navigator = navigator.clone();
            let form_error = form_error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                form_error.set(None);
                submitting.set(true);
                match session.api().create_booking(&booking).await {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::MyBookings);
                        }
                    }
                    Err(e) => {
                        if e.is_unauthorized() {
                            session_expired.emit(());
                        } else {
                            form_error.set(Some(e.to_string()));
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    if !session.is_authenticated() {
        return html! {};
    }

    if let Some(error) = (*error).as_ref() {
        return html! {
            <>
                <Header />
                <p class="error-message">{error}</p>
                <Footer />
            </>
        };
    }

    let (Some(room), Some(hotel)) = ((*room).clone(), (*hotel).clone()) else {
        return html! {
            <>
                <Header />
                <p class="loading">{"Loading..."}</p>
                <Footer />
            </>
        };
    };

    html! {
        <>
            <Header />
            <div class="room-booking-page">
                <h2>{"Book Your Stay"}</h2>
                <p>{"Complete your booking for this room."}</p>

                <div class="room-booking-hotel-overview">
                    <div class="room-booking-hotel-info">
                        <h3>{&hotel.name}</h3>
                        <p>{&hotel.address}</p>
                        {if let Some(description) = &hotel.description {
                            html! { <p>{description}</p> }
                        } else {
                            html! {}
                        }}
                        {if let Some(rating) = hotel.rating {
                            html! { <p>{format!("★ {:.1} stars", rating)}</p> }
                        } else {
                            html! {}
                        }}
                        <p>
                            {if hotel.breakfast { "✓ Breakfast included" } else { "✗ No breakfast" }}
                        </p>
                        <div class="room-booking-info">
                            <h3>{"Room Information"}</h3>
                            <p>{format!("Beds: {}", room.number_of_beds)}</p>
                            <p>{format!("Price: ${} per night", room.price)}</p>
                        </div>
                    </div>
                </div>

                <h3 class="room-booking-details">{"Booking Details"}</h3>

                {if let Some(message) = (*form_error).as_ref() {
                    html! { <p class="error-message">{message}</p> }
                } else {
                    html! {}
                }}

                <div class="room-booking-form">
                    <div class="room-booking-input-container">
                        <input
                            type="date"
                            value={(*start_date).clone()}
                            oninput={bind(&start_date)}
                            required=true
                        />
                    </div>

                    <div class="room-booking-input-container">
                        <input
                            type="date"
                            value={(*end_date).clone()}
                            oninput={bind(&end_date)}
                            required=true
                        />
                    </div>

                    <div class="room-booking-input-container">
                        <input
                            type="number"
                            min="1"
                            value={(*guests).clone()}
                            oninput={bind(&guests)}
                        />
                    </div>

                    <div class="room-booking-input-container">
                        <label>
                            <input
                                type="checkbox"
                                checked={*breakfast}
                                onchange={on_breakfast_change}
                                disabled={!hotel.breakfast}
                            />
                            {"Breakfast"}
                        </label>
                    </div>
                </div>

                <div class="room-booking-button">
                    <button onclick={on_confirm} disabled={*submitting}>
                        {if *submitting { "Booking..." } else { "Confirm Booking" }}
                    </button>
                </div>
            </div>
            <Footer />
        </>
    }
}
