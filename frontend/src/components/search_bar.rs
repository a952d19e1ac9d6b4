use shared::Hotel;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const SEARCH_LIMIT: u32 = 10;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Fired with the search outcome; the owning screen swaps its view
    /// collection or its error message accordingly.
    pub on_results: Callback<Result<Vec<Hotel>, String>>,
}

/// Hotel search with a location autocomplete fed from the known hotel
/// addresses. Empty fields search unfiltered.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let name = use_state(String::new);
    let location = use_state(String::new);
    let known_locations = use_state(Vec::<String>::new);
    let show_dropdown = use_state(|| false);

    // The autocomplete corpus: every distinct address currently known to
    // the backend, fetched once on mount.
    {
        let known_locations = known_locations.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().list_hotels().await {
                    Ok(hotels) => {
                        let mut addresses: Vec<String> =
                            hotels.into_iter().map(|hotel| hotel.address).collect();
                        addresses.sort();
                        addresses.dedup();
                        known_locations.set(addresses);
                    }
                    Err(e) => {
                        Logger::warn("search-bar", &format!("could not load locations: {}", e));
                    }
                }
            });
            || ()
        });
    }

    let suggestions: Vec<String> = if location.is_empty() {
        Vec::new()
    } else {
        let needle = location.to_lowercase();
        known_locations
            .iter()
            .filter(|address| address.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_location_input = {
        let location = location.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            show_dropdown.set(!value.is_empty());
            location.set(value);
        })
    };

    let select_location = |address: String| {
        let location = location.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            location.set(address.clone());
            show_dropdown.set(false);
        })
    };

    let on_search = {
        let name = name.clone();
        let location = location.clone();
        let show_dropdown = show_dropdown.clone();
        let on_results = props.on_results.clone();
        Callback::from(move |_: MouseEvent| {
            let name = (*name).clone();
            let location = (*location).clone();
            let on_results = on_results.clone();
            show_dropdown.set(false);
            Logger::debug(
                "search-bar",
                &format!("searching name='{}' location='{}'", name, location),
            );
            spawn_local(async move {
                let outcome = ApiClient::new()
                    .search_hotels(&name, &location, SEARCH_LIMIT)
                    .await
                    .map_err(|e| e.to_string());
                on_results.emit(outcome);
            });
        })
    };

    html! {
        <div class="search-bar">
            <div class="input-container">
                <input
                    type="text"
                    placeholder="Hotel Name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
            </div>

            <div class="input-container autocomplete">
                <input
                    type="text"
                    placeholder="Location"
                    value={(*location).clone()}
                    oninput={on_location_input}
                />
                {if *show_dropdown && !suggestions.is_empty() {
                    html! {
                        <ul class="autocomplete-dropdown">
                            {for suggestions.iter().map(|address| {
                                html! {
                                    <li onclick={select_location(address.clone())}>
                                        {address}
                                    </li>
                                }
                            })}
                        </ul>
                    }
                } else {
                    html! {}
                }}
            </div>

            <button onclick={on_search}>{"Search"}</button>
        </div>
    }
}
