use shared::Hotel;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hotel_card::HotelCard;
use crate::components::search_bar::SearchBar;
use crate::hooks::{use_collection, FetchStatus};
use crate::services::api::ApiClient;

/// Landing screen: hotel search over the public endpoint. The initial load
/// is the same call a search with empty fields would issue.
#[function_component(Home)]
pub fn home() -> Html {
    let hotels = use_collection::<Hotel, _, _>(
        || async { ApiClient::new().search_hotels("", "", 10).await },
        Callback::noop(),
    );

    {
        let hotels = hotels.clone();
        use_effect_with((), move |_| {
            hotels.load();
            || ()
        });
    }

    let on_results = {
        let hotels = hotels.clone();
        Callback::from(move |outcome: Result<Vec<Hotel>, String>| match outcome {
            Ok(results) => hotels.set_all(results),
            Err(message) => hotels.set_failed(message),
        })
    };

    html! {
        <>
            <Header />

            <div class="home">
                <div class="home-content">
                    <h1>{"Book Smart, Stay Better"}</h1>
                    <p>{"Find your perfect stay today"}</p>

                    <SearchBar {on_results} />

                    <div class="hotel-list">
                        {match hotels.status() {
                            FetchStatus::Pending => html! {
                                <p class="loading">{"Loading hotels..."}</p>
                            },
                            FetchStatus::Failed(message) => html! {
                                <p class="error-message">{message}</p>
                            },
                            FetchStatus::Ready if hotels.is_empty() => html! {
                                <p class="no-results">{"No hotels found. Try a different search."}</p>
                            },
                            FetchStatus::Ready => html! {
                                <>
                                    {for hotels.items().into_iter().map(|hotel| {
                                        let key = hotel.id;
                                        html! { <HotelCard {key} {hotel} /> }
                                    })}
                                </>
                            },
                        }}
                    </div>
                </div>
            </div>

            <Footer />
        </>
    }
}
