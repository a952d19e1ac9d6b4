use shared::Hotel;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HotelCardProps {
    pub hotel: Hotel,
}

/// Search-result card; clicking it opens the hotel's detail page.
#[function_component(HotelCard)]
pub fn hotel_card(props: &HotelCardProps) -> Html {
    let navigator = use_navigator();
    let hotel = &props.hotel;

    let on_click = {
        let navigator = navigator.clone();
        let id = hotel.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::HotelDetails { id });
            }
        })
    };

    html! {
        <div class="hotel-card" onclick={on_click}>
            <div class="hotel-info">
                <h3>{&hotel.name}</h3>
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
        </div>
    }
}
