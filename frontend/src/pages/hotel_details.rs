use shared::{Hotel, Room};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::hooks::use_session;
use crate::routes::Route;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct HotelDetailsProps {
    pub id: i64,
}

/// Public hotel page: the hotel record plus its rooms. Clicking a room
/// goes to the booking screen when a session exists, to login otherwise.
#[function_component(HotelDetails)]
pub fn hotel_details(props: &HotelDetailsProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let hotel = use_state(|| Option::<Hotel>::None);
    let rooms = use_state(Vec::<Room>::new);
    let error = use_state(|| Option::<String>::None);

    {
        let hotel = hotel.clone();
        let rooms = rooms.clone();
        let error = error.clone();
        use_effect_with(props.id, move |&id| {
            let api = ApiClient::new();
            {
                let api = api.clone();
                let hotel = hotel.clone();
                let error = error.clone();
                spawn_local(async move {
                    match api.get_hotel(id).await {
                        Ok(data) => hotel.set(Some(data)),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            }
            spawn_local(async move {
                match api.rooms_for_hotel(id).await {
                    Ok(data) => rooms.set(data),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
            || ()
        });
    }

    let on_room_click = |room_id: i64| {
        let session = session.clone();
        let navigator = navigator.clone();
        let hotel_id = props.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                if session.is_authenticated() {
                    navigator.push(&Route::RoomBooking { id: hotel_id, room_id });
                } else {
                    navigator.push(&Route::Login);
                }
            }
        })
    };

    if let Some(error) = (*error).as_ref() {
        return html! {
            <>
                <Header />
                <p class="error-message">{error}</p>
                <Footer />
            </>
        };
    }

    let Some(hotel) = (*hotel).clone() else {
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
            <div class="hotel-details">
                <div class="hotel-info">
                    <h2>{&hotel.name}</h2>
                    <p class="location">{&hotel.address}</p>
                    {if let Some(description) = &hotel.description {
                        html! { <p class="description">{description}</p> }
                    } else {
                        html! {}
                    }}
                    {if let Some(rating) = hotel.rating {
                        html! { <div class="rating">{format!("★ {:.1}", rating)}</div> }
                    } else {
                        html! {}
                    }}
                    <p class="breakfast">
                        {if hotel.breakfast { "✓ Breakfast included" } else { "✗ No breakfast" }}
                    </p>
                </div>

                <h3 class="rooms-title">{"Available Rooms"}</h3>
                <div class="rooms-list">
                    {if rooms.is_empty() {
                        html! { <p>{"No rooms available."}</p> }
                    } else {
                        html! {
                            <>
                                {for rooms.iter().map(|room| {
                                    html! {
                                        <div
                                            key={room.id}
                                            class="room-card"
                                            onclick={on_room_click(room.id)}
                                        >
                                            <div class="room-beds">
                                                {format!("{} beds", room.number_of_beds)}
                                            </div>
                                            <div class="price">
                                                {format!("${} per night", room.price)}
                                            </div>
                                        </div>
                                    }
                                })}
                            </>
                        }
                    }}
                </div>
            </div>
            <Footer />
        </>
    }
}
