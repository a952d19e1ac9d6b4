use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::hooks::use_session;
use crate::routes::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            let navigator = navigator.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                error.set(None);
                submitting.set(true);
                match session.api().login(&username, &password).await {
                    Ok(response) => {
                        session.login(response.access_token);
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(_) => {
                        error.set(Some(
                            "Invalid username or password. Please try again.".to_string(),
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_register = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Register);
            }
        })
    };

    html! {
        <>
            <Header />

            <div class="login-content">
                <h3>{"Log in to access your account"}</h3>

                {if let Some(error) = (*error).as_ref() {
                    html! { <p class="error-message">{error}</p> }
                } else {
                    html! {}
                }}

                <form class="login-form" onsubmit={on_submit}>
                    <div class="input-container">
                        <input
                            type="text"
                            placeholder="Username"
                            value={(*username).clone()}
                            oninput={on_username_input}
                            required=true
                        />
                    </div>

                    <div class="input-container">
                        <input
                            type="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            required=true
                        />
                    </div>

                    <button type="submit" disabled={*submitting}>
                        {if *submitting { "Logging in..." } else { "Login" }}
                    </button>
                    <div class="register-div">
                        {"Don't have an account? "}
                        <span onclick={go_register}>{"Register"}</span>
                    </div>
                </form>
            </div>

            <Footer />
        </>
    }
}
