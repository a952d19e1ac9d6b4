use shared::{Hotel, HotelUpdate, Keyed, NewHotel};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::hooks::{use_collection, use_draft, use_require_session, use_session_expired, FetchStatus};
use crate::routes::Route;

#[derive(Debug, Clone, Default, PartialEq)]
struct HotelForm {
    name: String,
    address: String,
    description: String,
    /// Kept as entered; parsed on submit so a half-typed value never
    /// snaps back under the user.
    rating: String,
    breakfast: bool,
}

impl HotelForm {
    fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            address: hotel.address.clone(),
            description: hotel.description.clone().unwrap_or_default(),
            rating: hotel.rating.map(|r| r.to_string()).unwrap_or_default(),
            breakfast: hotel.breakfast,
        }
    }

    fn validate(&self) -> Result<(String, String, Option<String>, Option<f32>), String> {
        let name = self.name.trim();
        let address = self.address.trim();
        if name.is_empty() || address.is_empty() {
            return Err("Name and address are required.".to_string());
        }
        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        let rating = parse_rating(&self.rating)?;
        Ok((name.to_string(), address.to_string(), description, rating))
    }
}

/// Parse the optional rating field. Blank means unrated, anything else
/// must be a number between 0 and 5.
fn parse_rating(input: &str) -> Result<Option<f32>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f32>() {
        Ok(value) if (0.0..=5.0).contains(&value) => Ok(Some(value)),
        _ => Err("Rating must be a number between 0 and 5.".to_string()),
    }
}

#[function_component(AdminHotels)]
pub fn admin_hotels() -> Html {
    let session = use_require_session();
    let session_expired = use_session_expired();

    let hotels = {
        let api = session.api();
        use_collection::<Hotel, _, _>(
            move || {
                let api = api.clone();
                async move { api.list_hotels().await }
            },
            session_expired.clone(),
        )
    };

    {
        let hotels = hotels.clone();
        let authenticated = session.is_authenticated();
        use_effect_with((), move |_| {
            if authenticated {
                hotels.load();
            }
            || ()
        });
    }

    let draft = use_draft::<HotelForm>();
    let delete = use_draft::<()>();

    let on_create = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.open_create(HotelForm::default()))
    };

    let open_edit = {
        let draft = draft.clone();
        move |hotel: &Hotel| {
            let draft = draft.clone();
            let key = hotel.key();
            let seed = HotelForm::from_hotel(hotel);
            Callback::from(move |_: MouseEvent| draft.open_edit(key, seed.clone()))
        }
    };

    let open_delete = {
        let delete = delete.clone();
        move |hotel: &Hotel| {
            let delete = delete.clone();
            let key = hotel.key();
            Callback::from(move |_: MouseEvent| delete.open_edit(key, ()))
        }
    };

    let on_submit = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let hotels = hotels.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let state = draft.state();
            let Some(form) = state.draft().cloned() else {
                return;
            };
            let (name, address, description, rating) = match form.validate() {
                Ok(fields) => fields,
                Err(message) => {
                    draft.fail(message);
                    return;
                }
            };
            let selected = state.selected();
            let session = session.clone();
            let session_expired = session_expired.clone();
            let hotels = hotels.clone();
            let draft = draft.clone();
            let breakfast = form.breakfast;
            spawn_local(async move {
                draft.begin_submit();
                let api = session.api();
                let result = match selected {
                    None => {
                        let new_hotel = NewHotel {
                            name,
                            address,
                            description,
                            rating,
                            breakfast,
                        };
                        api.create_hotel(&new_hotel).await.map(|created| {
                            hotels.insert(created);
                        })
                    }
                    Some(id) => {
                        let update = HotelUpdate {
                            name: Some(name),
                            address: Some(address),
                            description,
                            rating,
                            breakfast: Some(breakfast),
                        };
                        api.update_hotel(id, &update).await.map(|updated| {
                            hotels.replace(updated);
                        })
                    }
                };
                match result {
                    Ok(()) => draft.succeed(),
                    Err(e) => {
                        if e.is_unauthorized() {
                            session_expired.emit(());
                        } else {
                            draft.fail(e.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_delete_confirm = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let hotels = hotels.clone();
        let delete = delete.clone();
        Callback::from(move |_| {
            let Some(id) = delete.state().selected() else {
                return;
            };
            let session = session.clone();
            let session_expired = session_expired.clone();
            let hotels = hotels.clone();
            let delete = delete.clone();
            spawn_local(async move {
                delete.begin_submit();
                match session.api().delete_hotel(id).await {
                    Ok(()) => {
                        hotels.remove(id);
                        delete.succeed();
                    }
                    Err(e) => {
                        if e.is_unauthorized() {
                            session_expired.emit(());
                        } else {
                            delete.fail(e.to_string());
                        }
                    }
                }
            });
        })
    };

    if !session.is_authenticated() {
        return html! {};
    }

    let draft_state = draft.state();
    let delete_state = delete.state();

    html! {
        <>
            <Header />
            <div class="admin-page">
                <nav class="breadcrumb">
                    <Link<Route> to={Route::Admin} classes="breadcrumb-link">
                        {"Administration"}
                    </Link<Route>>
                    <span class="breadcrumb-current">{"Hotels"}</span>
                </nav>

                <div class="admin-page-header">
                    <h2>{"Hotels"}</h2>
                    <button class="add-button" onclick={on_create}>{"Add Hotel"}</button>
                </div>

                {match hotels.status() {
                    FetchStatus::Pending => html! {
                        <p class="loading">{"Loading hotels..."}</p>
                    },
                    FetchStatus::Failed(message) => html! {
                        <p class="error-message">{message}</p>
                    },
                    FetchStatus::Ready if hotels.is_empty() => html! {
                        <p>{"No hotels yet."}</p>
                    },
                    FetchStatus::Ready => html! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Address"}</th>
                                    <th>{"Rating"}</th>
                                    <th>{"Breakfast"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for hotels.items().iter().map(|hotel| {
                                    html! {
                                        <tr key={hotel.key()}>
                                            <td>{&hotel.name}</td>
                                            <td>{&hotel.address}</td>
                                            <td>{hotel
                                                .rating
                                                .map(|r| format!("{r:.1}"))
                                                .unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{if hotel.breakfast { "Yes" } else { "No" }}</td>
                                            <td class="admin-actions">
                                                <Link<Route>
                                                    to={Route::AdminRooms { id: hotel.id }}
                                                    classes="action-icon rooms-icon"
                                                >
                                                    {"Rooms"}
                                                </Link<Route>>
                                                <button
                                                    class="action-icon edit-icon"
                                                    onclick={open_edit(hotel)}
                                                >
                                                    {"Edit"}
                                                </button>
                                                <button
                                                    class="action-icon delete-icon"
                                                    onclick={open_delete(hotel)}
                                                >
                                                    {"Delete"}
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

            {if let Some(form) = draft_state.draft().cloned() {
                let editing = draft_state.selected().is_some();
                let bind_field = |apply: fn(HotelForm, String) -> HotelForm| {
                    let draft = draft.clone();
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        draft.edit(apply(form.clone(), input.value()));
                    })
                };
                let on_description = {
                    let draft = draft.clone();
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        draft.edit(HotelForm {
                            description: input.value(),
                            ..form.clone()
                        });
                    })
                };
                let on_breakfast = {
                    let draft = draft.clone();
                    let form = form.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        draft.edit(HotelForm {
                            breakfast: input.checked(),
                            ..form.clone()
                        });
                    })
                };
                let on_cancel = {
                    let draft = draft.clone();
                    Callback::from(move |_: MouseEvent| draft.cancel())
                };
                let on_close = {
                    let draft = draft.clone();
                    Callback::from(move |_| draft.cancel())
                };

                html! {
                    <Modal
                        title={if editing { "Edit Hotel" } else { "Add Hotel" }}
                        error={draft_state.error().map(str::to_string)}
                        {on_close}
                    >
                        <form class="modal-form">
                            <label for="hotel-name">{"Name*:"}</label>
                            <input
                                id="hotel-name"
                                type="text"
                                value={form.name.clone()}
                                oninput={bind_field(|f, v| HotelForm { name: v, ..f })}
                            />

                            <label for="hotel-address">{"Address*:"}</label>
                            <input
                                id="hotel-address"
                                type="text"
                                value={form.address.clone()}
                                oninput={bind_field(|f, v| HotelForm { address: v, ..f })}
                            />

                            <label for="hotel-description">{"Description:"}</label>
                            <textarea
                                id="hotel-description"
                                value={form.description.clone()}
                                oninput={on_description}
                            />

                            <label for="hotel-rating">{"Rating (0-5):"}</label>
                            <input
                                id="hotel-rating"
                                type="number"
                                min="0"
                                max="5"
                                step="0.1"
                                value={form.rating.clone()}
                                oninput={bind_field(|f, v| HotelForm { rating: v, ..f })}
                            />

                            <div class="modal-checkbox">
                                <label for="hotel-breakfast">{"Breakfast available:"}</label>
                                <input
                                    id="hotel-breakfast"
                                    type="checkbox"
                                    checked={form.breakfast}
                                    onchange={on_breakfast}
                                />
                            </div>

                            <div class="modal-buttons">
                                <button
                                    type="button"
                                    class="cancel-button"
                                    onclick={on_cancel}
                                    disabled={draft_state.is_submitting()}
                                >
                                    {"Cancel"}
                                </button>
                                <button
                                    type="button"
                                    class="save-button"
                                    onclick={on_submit.clone()}
                                    disabled={draft_state.is_submitting()}
                                >
                                    {if draft_state.is_submitting() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
            } else {
                html! {}
            }}

            {if delete_state.is_open() {
                let on_cancel = {
                    let delete = delete.clone();
                    Callback::from(move |_| delete.cancel())
                };
                html! {
                    <ConfirmModal
                        title="Confirm Delete"
                        message="Are you sure you want to delete this hotel? Its rooms will be deleted too."
                        error={delete_state.error().map(str::to_string)}
                        busy={delete_state.is_submitting()}
                        on_confirm={on_delete_confirm.clone()}
                        on_cancel={on_cancel}
                    />
                }
            } else {
                html! {}
            }}

            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_rating_means_unrated() {
        assert_eq!(parse_rating(""), Ok(None));
        assert_eq!(parse_rating("   "), Ok(None));
    }

    #[test]
    fn rating_in_range_parses() {
        assert_eq!(parse_rating("4.5"), Ok(Some(4.5)));
        assert_eq!(parse_rating("0"), Ok(Some(0.0)));
        assert_eq!(parse_rating("5"), Ok(Some(5.0)));
    }

    #[test]
    fn rating_out_of_range_or_garbage_is_rejected() {
        assert!(parse_rating("5.1").is_err());
        assert!(parse_rating("-1").is_err());
        assert!(parse_rating("great").is_err());
    }

    #[test]
    fn validation_requires_name_and_address() {
        let form = HotelForm {
            name: "  ".into(),
            address: "1 Main St".into(),
            ..HotelForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn validation_normalizes_optional_fields() {
        let form = HotelForm {
            name: "Hotel California".into(),
            address: "42 Sunset Blvd".into(),
            description: "  ".into(),
            rating: "3.5".into(),
            breakfast: true,
        };
        let (name, address, description, rating) = form.validate().unwrap();
        assert_eq!(name, "Hotel California");
        assert_eq!(address, "42 Sunset Blvd");
        assert_eq!(description, None);
        assert_eq!(rating, Some(3.5));
    }
}
