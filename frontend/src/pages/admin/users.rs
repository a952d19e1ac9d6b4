use shared::{Keyed, NewUser, User, UserUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::hooks::{use_collection, use_draft, use_require_session, use_session_expired, FetchStatus};
use crate::routes::Route;

#[derive(Debug, Clone, Default, PartialEq)]
struct UserForm {
    email: String,
    pseudo: String,
    /// Only meaningful when creating; edits never touch the password.
    password: String,
    is_admin: bool,
}

impl UserForm {
    fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            pseudo: user.pseudo.clone(),
            password: String::new(),
            is_admin: user.is_admin,
        }
    }
}

/// User administration. Accounts are never deleted from here; users delete
/// themselves from their profile page.
#[function_component(AdminUsers)]
pub fn admin_users() -> Html {
    let session = use_require_session();
    let session_expired = use_session_expired();

    let users = {
        let api = session.api();
        use_collection::<User, _, _>(
            move || {
                let api = api.clone();
                async move { api.list_users().await }
            },
            session_expired.clone(),
        )
    };

    {
        let users = users.clone();
        let authenticated = session.is_authenticated();
        use_effect_with((), move |_| {
            if authenticated {
                users.load();
            }
            || ()
        });
    }

    let draft = use_draft::<UserForm>();

    let on_create = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.open_create(UserForm::default()))
    };

    let open_edit = {
        let draft = draft.clone();
        move |user: &User| {
            let draft = draft.clone();
            let key = user.key();
            let seed = UserForm::from_user(user);
            Callback::from(move |_: MouseEvent| draft.open_edit(key, seed.clone()))
        }
    };

    let on_submit = {
        let session = session.clone();
        let session_expired = session_expired.clone();
        let users = users.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let state = draft.state();
            let Some(form) = state.draft().cloned() else {
                return;
            };
            let email = form.email.trim().to_string();
            let pseudo = form.pseudo.trim().to_string();
            if email.is_empty() || pseudo.is_empty() {
                draft.fail("Email and pseudo are required.".to_string());
                return;
            }
            let selected = state.selected();
            if selected.is_none() && form.password.is_empty() {
                draft.fail("Password is required.".to_string());
                return;
            }
            let session = session.clone();
            let session_expired = session_expired.clone();
            let users = users.clone();
            let draft = draft.clone();
            spawn_local(async move {
                draft.begin_submit();
                let api = session.api();
                let result = match selected {
                    None => {
                        let new_user = NewUser {
                            email,
                            pseudo,
                            password: form.password.clone(),
                        };
                        api.create_user(&new_user).await.map(|created| {
                            users.insert(created);
                        })
                    }
                    Some(id) => {
                        let update = UserUpdate {
                            email: Some(email),
                            pseudo: Some(pseudo),
                            is_admin: Some(form.is_admin),
                            ..UserUpdate::default()
                        };
                        api.update_user(id, &update).await.map(|updated| {
                            users.replace(updated);
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

    if !session.is_authenticated() {
        return html! {};
    }

    let draft_state = draft.state();
    let editing = draft_state.selected().is_some();

    html! {
        <>
            <Header />
            <div class="admin-page">
                <nav class="breadcrumb">
                    <Link<Route> to={Route::Admin} classes="breadcrumb-link">
                        {"Administration"}
                    </Link<Route>>
                    <span class="breadcrumb-current">{"Users"}</span>
                </nav>

                <div class="admin-page-header">
                    <h2>{"Users"}</h2>
                    <button class="add-button" onclick={on_create}>{"Add User"}</button>
                </div>

                {match users.status() {
                    FetchStatus::Pending => html! {
                        <p class="loading">{"Loading users..."}</p>
                    },
                    FetchStatus::Failed(message) => html! {
                        <p class="error-message">{message}</p>
                    },
                    FetchStatus::Ready if users.is_empty() => html! {
                        <p>{"No users."}</p>
                    },
                    FetchStatus::Ready => html! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>{"Pseudo"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Admin"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for users.items().iter().map(|user| {
                                    html! {
                                        <tr key={user.key()}>
                                            <td>{&user.pseudo}</td>
                                            <td>{&user.email}</td>
                                            <td>{if user.is_admin { "Yes" } else { "No" }}</td>
                                            <td class="admin-actions">
                                                <button
                                                    class="action-icon edit-icon"
                                                    onclick={open_edit(user)}
                                                >
                                                    {"Edit"}
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
                let bind_field = |apply: fn(UserForm, String) -> UserForm| {
                    let draft = draft.clone();
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        draft.edit(apply(form.clone(), input.value()));
                    })
                };
                let on_is_admin = {
                    let draft = draft.clone();
                    let form = form.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        draft.edit(UserForm {
                            is_admin: input.checked(),
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
                        title={if editing { "Edit User" } else { "Add User" }}
                        error={draft_state.error().map(str::to_string)}
                        {on_close}
                    >
                        <form class="modal-form">
                            <label for="user-email">{"Email*:"}</label>
                            <input
                                id="user-email"
                                type="email"
                                value={form.email.clone()}
                                oninput={bind_field(|f, v| UserForm { email: v, ..f })}
                            />

                            <label for="user-pseudo">{"Pseudo*:"}</label>
                            <input
                                id="user-pseudo"
                                type="text"
                                value={form.pseudo.clone()}
                                oninput={bind_field(|f, v| UserForm { pseudo: v, ..f })}
                            />

                            {if editing {
                                html! {
                                    <div class="modal-checkbox">
                                        <label for="user-is-admin">{"Administrator:"}</label>
                                        <input
                                            id="user-is-admin"
                                            type="checkbox"
                                            checked={form.is_admin}
                                            onchange={on_is_admin}
                                        />
                                    </div>
                                }
                            } else {
                                html! {
                                    <>
                                        <label for="user-password">{"Password*:"}</label>
                                        <input
                                            id="user-password"
                                            type="password"
                                            value={form.password.clone()}
                                            oninput={bind_field(|f, v| UserForm { password: v, ..f })}
                                        />
                                    </>
                                }
                            }}

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

            <Footer />
        </>
    }
}
