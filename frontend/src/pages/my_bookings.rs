use shared::{BookingStay, BookingUpdate, Keyed};
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
use crate::services::date_utils::parse_stay_dates;

/// Draft for the edit modal, mirroring the editable booking fields as the
/// form inputs hold them.
#[derive(Debug, Clone, Default, PartialEq)]
struct StayForm {
    start_date: String,
    end_date: String,
    guests: String,
    breakfast: bool,
}

#[function_component(MyBookings)]
pub fn my_bookings() -> Html {
    let session = use_require_session();
    let session_expired = use_session_expired();

    let stays = {
        let api = session.api();
        use_collection::<BookingStay, _, _>(
            move || {
                let api = api.clone();
                async move {
                    // The booking list hangs off the current user, so the
                    // chain starts at /users/me.
                    let me = api.current_user().await?;
                    api.stays_for_user(me.id).await
                }
            },
            session_expired.clone(),
        )
    };

    {
        let stays = stays.clone();
        let authenticated = session.is_authenticated();
        use_effect_with((), move |_| {
            if authenticated {
                stays.load();
            }
            || ()
        });
    }

    let edit = use_draft::<StayForm>();
    let delete = use_draft::<()>();

    let open_edit = {
        let edit = edit.clone();
        move |stay: &BookingStay| {
            let edit = edit.clone();
            let key = stay.key();
            let seed = StayForm {
                start_date: stay.booking.start_date.to_string(),
                end_date: stay.booking.end_date.to_string(),
                guests: stay.booking.nbr_people.to_string(),
                breakfast: stay.booking.breakfast,
            };
            Callback::from(move |_: MouseEvent| edit.open_edit(key, seed.clone()))
        }
    };

    let open_delete = {
        let delete = delete.clone();
        move |stay: &BookingStay| {
            let delete = delete.clone();
            let key = stay.key();
            Callback::from(move |_: MouseEvent| delete.open_edit(key, ()))
        }
    };

    let on_edit_submit = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let stays = stays.clone();
        let edit = edit.clone();
        Callback::from(move |_: MouseEvent| {
            let state = edit.state();
            let (Some(id), Some(form)) = (state.selected(), state.draft().cloned()) else {
                return;
            };
            let (start, end) = match parse_stay_dates(&form.start_date, &form.end_date) {
                Ok(dates) => dates,
                Err(message) => {
                    edit.fail(message);
                    return;
                }
            };
            let update = BookingUpdate {
                start_date: Some(start),
                end_date: Some(end),
                nbr_people: Some(form.guests.parse().unwrap_or(1).max(1)),
                breakfast: Some(form.breakfast),
                ..BookingUpdate::default()
            };
            let session = session.clone();
            let session_expired = session_expired.clone();
            let stays = stays.clone();
            let edit = edit.clone();
            spawn_local(async move {
                edit.begin_submit();
                match session.api().update_booking(id, &update).await {
                    Ok(updated) => {
                        // Keep the enrichment, swap the booking underneath.
                        if let Some(stay) = stays.items().into_iter().find(|s| s.key() == id) {
                            stays.replace(BookingStay {
                                booking: updated,
                                ..stay
                            });
                        }
                        edit.succeed();
                    }
                    Err(e) => {
                        if e.is_unauthorized() {
                            session_expired.emit(());
                        } else {
                            edit.fail(e.to_string());
                        }
                    }
                }
            });
        })
    };

    let on_delete_confirm = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let stays = stays.clone();
        let delete = delete.clone();
        Callback::from(move |_| {
            let Some(id) = delete.state().selected() else {
                return;
            };
            let session = session.clone();
            let session_expired = session_expired.clone();
            let stays = stays.clone();
            let delete = delete.clone();
            spawn_local(async move {
                delete.begin_submit();
                match session.api().delete_booking(id).await {
                    Ok(()) => {
                        stays.remove(id);
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

    let edit_state = edit.state();
    let delete_state = delete.state();

    html! {
        <>
            <Header />
            <div class="my-bookings-page">
                <nav class="breadcrumb">
                    <Link<Route> to={Route::Profile} classes="breadcrumb-link">
                        {"My Profile"}
                    </Link<Route>>
                    <span class="breadcrumb-current">{"My Bookings"}</span>
                </nav>

                <h2>{"My Bookings"}</h2>

                {match stays.status() {
                    FetchStatus::Pending => html! {
                        <p class="loading">{"Loading bookings..."}</p>
                    },
                    FetchStatus::Failed(message) => html! {
                        <p class="error-message">{message}</p>
                    },
                    FetchStatus::Ready if stays.is_empty() => html! {
                        <p>
                            {"No bookings yet. "}
                            <Link<Route> to={Route::Home}>{"Book a stay now!"}</Link<Route>>
                        </p>
                    },
                    FetchStatus::Ready => html! {
                        <div class="my-bookings-list">
                            {for stays.items().iter().map(|stay| {
                                html! {
                                    <div key={stay.key()} class="my-booking-card">
                                        <div class="booking-card-actions">
                                            <button
                                                class="action-icon edit-icon"
                                                onclick={open_edit(stay)}
                                            >
                                                {"Edit"}
                                            </button>
                                            <button
                                                class="action-icon delete-icon"
                                                onclick={open_delete(stay)}
                                            >
                                                {"Delete"}
                                            </button>
                                        </div>
                                        <div class="my-booking-info">
                                            <h3>{&stay.hotel_name}</h3>
                                            <p>{&stay.hotel_address}</p>
                                            <p>{format!("Beds: {}", stay.number_of_beds)}</p>
                                            <p>{format!("Price: ${} per night", stay.price)}</p>
                                            <p>{format!("Guests: {}", stay.booking.nbr_people)}</p>
                                            <p>{format!(
                                                "{} - {}",
                                                stay.booking.start_date, stay.booking.end_date
                                            )}</p>
                                            <p>{if stay.booking.breakfast {
                                                "Breakfast included"
                                            } else {
                                                "Breakfast not included"
                                            }}</p>
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    },
                }}
            </div>

            {if let Some(form) = edit_state.draft().cloned() {
                let bind_field = |apply: fn(StayForm, String) -> StayForm| {
                    let edit = edit.clone();
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        edit.edit(apply(form.clone(), input.value()));
                    })
                };
                let on_breakfast = {
                    let edit = edit.clone();
                    let form = form.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        edit.edit(StayForm {
                            breakfast: input.checked(),
                            ..form.clone()
                        });
                    })
                };
                let on_cancel = {
                    let edit = edit.clone();
                    Callback::from(move |_: MouseEvent| edit.cancel())
                };
                let on_close = {
                    let edit = edit.clone();
                    Callback::from(move |_| edit.cancel())
                };

                html! {
                    <Modal
                        title="Edit Booking"
                        error={edit_state.error().map(str::to_string)}
                        {on_close}
                    >
                        <form class="modal-form">
                            <label for="edit-start-date">{"Start Date*:"}</label>
                            <input
                                id="edit-start-date"
                                type="date"
                                value={form.start_date.clone()}
                                oninput={bind_field(|f, v| StayForm { start_date: v, ..f })}
                            />

                            <label for="edit-end-date">{"End Date*:"}</label>
                            <input
                                id="edit-end-date"
                                type="date"
                                value={form.end_date.clone()}
                                oninput={bind_field(|f, v| StayForm { end_date: v, ..f })}
                            />

                            <label for="edit-guests">{"Number of people*:"}</label>
                            <input
                                id="edit-guests"
                                type="number"
                                min="1"
                                value={form.guests.clone()}
                                oninput={bind_field(|f, v| StayForm { guests: v, ..f })}
                            />

                            <div class="modal-checkbox">
                                <label for="edit-breakfast">{"Breakfast:"}</label>
                                <input
                                    id="edit-breakfast"
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
                                    disabled={edit_state.is_submitting()}
                                >
                                    {"Cancel"}
                                </button>
                                <button
                                    type="button"
                                    class="save-button"
                                    onclick={on_edit_submit.clone()}
                                    disabled={edit_state.is_submitting()}
                                >
                                    {if edit_state.is_submitting() { "Saving..." } else { "Save" }}
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
                        message="Are you sure you want to delete this booking?"
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
