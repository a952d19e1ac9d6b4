use shared::{Hotel, Keyed, NewRoom, Room, RoomUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::hooks::{use_collection, use_draft, use_require_session, use_session_expired, FetchStatus};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct AdminRoomsProps {
    pub hotel_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct RoomForm {
    price: String,
    beds: String,
}

impl RoomForm {
    fn from_room(room: &Room) -> Self {
        Self {
            price: room.price.to_string(),
            beds: room.number_of_beds.to_string(),
        }
    }

    fn validate(&self) -> Result<(f64, i32), String> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| *p >= 0.0)
            .ok_or_else(|| "Price must be a non-negative number.".to_string())?;
        let beds = self
            .beds
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|b| *b >= 1)
            .ok_or_else(|| "Number of beds must be at least 1.".to_string())?;
        Ok((price, beds))
    }
}

/// Room management for one hotel. The hotel itself is fetched separately
/// for the heading; a failure there does not block the room table.
#[function_component(AdminRooms)]
pub fn admin_rooms(props: &AdminRoomsProps) -> Html {
    let session = use_require_session();
    let session_expired = use_session_expired();
    let hotel = use_state(|| Option::<Hotel>::None);

    let rooms = {
        let api = session.api();
        let hotel_id = props.hotel_id;
        use_collection::<Room, _, _>(
            move || {
                let api = api.clone();
                async move { api.rooms_for_hotel(hotel_id).await }
            },
            session_expired.clone(),
        )
    };

    {
        let session = session.clone();
        let rooms = rooms.clone();
        let hotel = hotel.clone();
        use_effect_with(props.hotel_id, move |&hotel_id| {
            if session.is_authenticated() {
                rooms.load();
                let api = session.api();
                spawn_local(async move {
                    if let Ok(fetched) = api.get_hotel(hotel_id).await {
                        hotel.set(Some(fetched));
                    }
                });
            }
            || ()
        });
    }

    let draft = use_draft::<RoomForm>();
    let delete = use_draft::<()>();

    let on_create = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.open_create(RoomForm::default()))
    };

    let open_edit = {
        let draft = draft.clone();
        move |room: &Room| {
            let draft = draft.clone();
            let key = room.key();
            let seed = RoomForm::from_room(room);
            Callback::from(move |_: MouseEvent| draft.open_edit(key, seed.clone()))
        }
    };

    let open_delete = {
        let delete = delete.clone();
        move |room: &Room| {
            let delete = delete.clone();
            let key = room.key();
            Callback::from(move |_: MouseEvent| delete.open_edit(key, ()))
        }
    };

    let on_submit = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let rooms = rooms.clone();
        let draft = draft.clone();
        let hotel_id = props.hotel_id;
        Callback::from(move |_: MouseEvent| {
            let state = draft.state();
            let Some(form) = state.draft().cloned() else {
                return;
            };
            let (price, beds) = match form.validate() {
                Ok(fields) => fields,
                Err(message) => {
                    draft.fail(message);
                    return;
                }
            };
            let selected = state.selected();
            let session = session.clone();
            let session_expired = session_expired.clone();
            let rooms = rooms.clone();
            let draft = draft.clone();
            spawn_local(async move {
                draft.begin_submit();
                let api = session.api();
                let result = match selected {
                    None => {
                        let new_room = NewRoom {
                            hotel_id,
                            price,
                            number_of_beds: beds,
                        };
                        api.create_room(&new_room).await.map(|created| {
                            rooms.insert(created);
                        })
                    }
                    Some(id) => {
                        let update = RoomUpdate {
                            price: Some(price),
                            number_of_beds: Some(beds),
                        };
                        api.update_room(id, &update).await.map(|updated| {
                            rooms.replace(updated);
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
        let rooms = rooms.clone();
        let delete = delete.clone();
        Callback::from(move |_| {
            let Some(id) = delete.state().selected() else {
                return;
            };
            let session = session.clone();
            let session_expired = session_expired.clone();
            let rooms = rooms.clone();
            let delete = delete.clone();
            spawn_local(async move {
                delete.begin_submit();
                match session.api().delete_room(id).await {
                    Ok(()) => {
                        rooms.remove(id);
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
    let hotel_name = hotel
        .as_ref()
        .map(|h| h.name.clone())
        .unwrap_or_else(|| format!("Hotel #{}", props.hotel_id));

    html! {
        <>
            <Header />
            <div class="admin-page">
                <nav class="breadcrumb">
                    <Link<Route> to={Route::Admin} classes="breadcrumb-link">
                        {"Administration"}
                    </Link<Route>>
                    <Link<Route> to={Route::AdminHotels} classes="breadcrumb-link">
                        {"Hotels"}
                    </Link<Route>>
                    <span class="breadcrumb-current">{hotel_name.clone()}</span>
                </nav>

                <div class="admin-page-header">
                    <h2>{format!("Rooms - {hotel_name}")}</h2>
                    <button class="add-button" onclick={on_create}>{"Add Room"}</button>
                </div>

                {match rooms.status() {
                    FetchStatus::Pending => html! {
                        <p class="loading">{"Loading rooms..."}</p>
                    },
                    FetchStatus::Failed(message) => html! {
                        <p class="error-message">{message}</p>
                    },
                    FetchStatus::Ready if rooms.is_empty() => html! {
                        <p>{"This hotel has no rooms yet."}</p>
                    },
                    FetchStatus::Ready => html! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>{"Price per night"}</th>
                                    <th>{"Beds"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for rooms.items().iter().map(|room| {
                                    html! {
                                        <tr key={room.key()}>
                                            <td>{format!("${}", room.price)}</td>
                                            <td>{room.number_of_beds}</td>
                                            <td class="admin-actions">
                                                <button
                                                    class="action-icon edit-icon"
                                                    onclick={open_edit(room)}
                                                >
                                                    {"Edit"}
                                                </button>
                                                <button
                                                    class="action-icon delete-icon"
                                                    onclick={open_delete(room)}
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
                let bind_field = |apply: fn(RoomForm, String) -> RoomForm| {
                    let draft = draft.clone();
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        draft.edit(apply(form.clone(), input.value()));
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
                        title={if editing { "Edit Room" } else { "Add Room" }}
                        error={draft_state.error().map(str::to_string)}
                        {on_close}
                    >
                        <form class="modal-form">
                            <label for="room-price">{"Price per night*:"}</label>
                            <input
                                id="room-price"
                                type="number"
                                min="0"
                                step="0.01"
                                value={form.price.clone()}
                                oninput={bind_field(|f, v| RoomForm { price: v, ..f })}
                            />

                            <label for="room-beds">{"Number of beds*:"}</label>
                            <input
                                id="room-beds"
                                type="number"
                                min="1"
                                value={form.beds.clone()}
                                oninput={bind_field(|f, v| RoomForm { beds: v, ..f })}
                            />

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
                        message="Are you sure you want to delete this room?"
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
    fn valid_fields_parse() {
        let form = RoomForm {
            price: "129.50".into(),
            beds: "2".into(),
        };
        assert_eq!(form.validate(), Ok((129.50, 2)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let form = RoomForm {
            price: "-10".into(),
            beds: "2".into(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn zero_beds_is_rejected() {
        let form = RoomForm {
            price: "80".into(),
            beds: "0".into(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn garbage_input_is_rejected() {
        let form = RoomForm {
            price: "cheap".into(),
            beds: "two".into(),
        };
        assert!(form.validate().is_err());
    }
}
