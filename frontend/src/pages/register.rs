use shared::NewUser;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::routes::Route;
use crate::services::api::ApiClient;

#[function_component(Register)]
pub fn register() -> Html {
    let navigator = use_navigator();
    let email = use_state(String::new);
    let pseudo = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let email = email.clone();
        let pseudo = pseudo.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The one check done client-side; everything else is the
            // backend's call.
            if *password != *confirm_password {
                error.set(Some("Passwords do not match!".to_string()));
                return;
            }

            let navigator = navigator.clone();
            let user = NewUser {
                email: (*email).clone(),
                pseudo: (*pseudo).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                error.set(None);
                submitting.set(true);
                match ApiClient::new().create_user(&user).await {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <>
            <Header />

            <div class="register-content">
                <h3>{"Create your account"}</h3>

                {if let Some(error) = (*error).as_ref() {
                    html! { <p class="error-message">{error}</p> }
                } else {
                    html! {}
                }}

                <form class="register-form" onsubmit={on_submit}>
                    <div class="input-container">
                        <input
                            type="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={bind(&email)}
                            required=true
                        />
                    </div>

                    <div class="input-container">
                        <input
                            type="text"
                            placeholder="Username"
                            value={(*pseudo).clone()}
                            oninput={bind(&pseudo)}
                            required=true
                        />
                    </div>

                    <div class="input-container">
                        <input
                            type="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={bind(&password)}
                            required=true
                        />
                    </div>

                    <div class="input-container">
                        <input
                            type="password"
                            placeholder="Confirm Password"
                            value={(*confirm_password).clone()}
                            oninput={bind(&confirm_password)}
                            required=true
                        />
                    </div>

                    <button type="submit" disabled={*submitting}>
                        {if *submitting { "Registering..." } else { "Register" }}
                    </button>
                    <div class="login-div">
                        {"Already have an account? "}
                        <span onclick={go_login}>{"Login"}</span>
                    </div>
                </form>
            </div>

            <Footer />
        </>
    }
}
