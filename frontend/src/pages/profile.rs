use shared::{User, UserUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::hooks::{use_draft, use_require_session, use_session_expired};
use crate::routes::Route;

#[derive(Debug, Clone, Default, PartialEq)]
struct ProfileForm {
    email: String,
    pseudo: String,
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_require_session();
    let session_expired = use_session_expired();
    let navigator = use_navigator();
    let user = use_state(|| Option::<User>::None);
    let error = use_state(|| Option::<String>::None);
    let edit = use_draft::<ProfileForm>();

    {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let user = user.clone();
        let error = error.clone();
        let authenticated = session.is_authenticated();
        use_effect_with((), move |_| {
            if authenticated {
                let api = session.api();
                spawn_local(async move {
                    match api.current_user().await {
                        Ok(profile) => user.set(Some(profile)),
                        Err(e) => {
                            if e.is_unauthorized() {
                                session_expired.emit(());
                            } else {
                                error.set(Some(e.to_string()));
                            }
                        }
                    }
                });
            }
            || ()
        });
    }

    if !session.is_authenticated() {
        return html! {};
    }

    let open_edit = {
        let edit = edit.clone();
        let user = user.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(user) = (*user).as_ref() {
                edit.open_edit(
                    user.id,
                    ProfileForm {
                        email: user.email.clone(),
                        pseudo: user.pseudo.clone(),
                    },
                );
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_delete_account = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let navigator = navigator.clone();
        let user = user.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = user.as_ref().map(|u| u.id) else {
                return;
            };
            let session = session.clone();
            let session_expired = session_expired.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            spawn_local(async move {
                match session.api().delete_user(id).await {
                    Ok(()) => {
                        session.logout();
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Register);
                        }
                    }
                    Err(e) => {
                        if e.is_unauthorized() {
                            session_expired.emit(());
                        } else {
                            error.set(Some(e.to_string()));
                        }
                    }
                }
            });
        })
    };

    let on_edit_submit = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let user = user.clone();
        let edit = edit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let state = edit.state();
            let (Some(id), Some(form)) = (state.selected(), state.draft().cloned()) else {
                return;
            };
            let update = UserUpdate {
                email: Some(form.email),
                pseudo: Some(form.pseudo),
                ..UserUpdate::default()
            };
            let session = session.clone();
            let session_expired = session_expired.clone();
            let user = user.clone();
            let edit = edit.clone();
            spawn_local(async move {
                edit.begin_submit();
                match session.api().update_user(id, &update).await {
                    Ok(updated) => {
                        user.set(Some(updated));
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

    let edit_state = edit.state();

    html! {
        <>
            <Header />

            <div class="profile-content">
                <h2>{"My Profile"}</h2>

                {if let Some(error) = (*error).as_ref() {
                    html! { <p class="error-message">{error}</p> }
                } else {
                    html! {}
                }}

                <div class="profile-cards">
                    <div class="profile-card">
                        <h3>{"User Information"}</h3>
                        {if let Some(user) = (*user).as_ref() {
                            html! {
                                <>
                                    <p><strong>{"Email: "}</strong>{&user.email}</p>
                                    <p><strong>{"Pseudo: "}</strong>{&user.pseudo}</p>

                                    <div class="profile-buttons">
                                        <button class="logout-button" onclick={on_logout}>
                                            {"Logout"}
                                        </button>
                                        <button class="edit-button" onclick={open_edit}>
                                            {"Edit"}
                                        </button>
                                        <button class="delete-button" onclick={on_delete_account}>
                                            {"Delete Account"}
                                        </button>
                                    </div>
                                </>
                            }
                        } else {
                            html! { <p>{"Loading profile..."}</p> }
                        }}
                    </div>

                    <div class="profile-card">
                        <h3>{"My Bookings"}</h3>
                        <p>{"Check your reservations and upcoming stays."}</p>
                        <Link<Route> to={Route::MyBookings} classes="profile-view-all-bookings">
                            {"View My Bookings"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            {if let Some(form) = edit_state.draft().cloned() {
                let on_email_input = {
                    let edit = edit.clone();
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        edit.edit(ProfileForm {
                            email: input.value(),
                            ..form.clone()
                        });
                    })
                };
                let on_pseudo_input = {
                    let edit = edit.clone();
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        edit.edit(ProfileForm {
                            pseudo: input.value(),
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
                        title="Edit Profile"
                        error={edit_state.error().map(str::to_string)}
                        {on_close}
                    >
                        <form onsubmit={on_edit_submit}>
                            <label for="email">{"Email*:"}</label>
                            <input
                                id="email"
                                type="email"
                                value={form.email.clone()}
                                oninput={on_email_input}
                                required=true
                            />

                            <label for="pseudo">{"Pseudo*:"}</label>
                            <input
                                id="pseudo"
                                type="text"
                                value={form.pseudo.clone()}
                                oninput={on_pseudo_input}
                                required=true
                            />

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
                                    type="submit"
                                    class="save-button"
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

            <Footer />
        </>
    }
}
