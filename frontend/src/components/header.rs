use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;
use crate::services::logging::Logger;

/// Sticky navigation bar. Shows the sign-in button for anonymous visitors,
/// the profile button for authenticated ones, and the admin entry when the
/// backend reports the admin flag on the current user.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let is_admin = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let is_admin = is_admin.clone();
        let session = session.clone();
        use_effect_with(session.token(), move |token| {
            if token.is_some() {
                let api = session.api();
                spawn_local(async move {
                    match api.current_user().await {
                        Ok(user) => is_admin.set(user.is_admin),
                        Err(e) => {
                            // Not fatal for the header; the guarded screens
                            // deal with expiry themselves.
                            Logger::warn("header", &format!("could not fetch current user: {}", e));
                            is_admin.set(false);
                        }
                    }
                });
            } else {
                is_admin.set(false);
            }
            || ()
        });
    }

    let go = |route: Route| {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links_class = if *menu_open {
        "header-links open"
    } else {
        "header-links"
    };

    html! {
        <header class="sticky-header">
            <div class="header-content">
                <h2 class="logo" onclick={go(Route::Home)}>{"Horizon Hotels"}</h2>
                <button class="menu-toggle" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
                <div class={links_class}>
                    <nav>
                        <ul>
                            <li onclick={go(Route::Home)}>{"Hotels"}</li>
                        </ul>
                    </nav>
                    {if *is_admin {
                        html! {
                            <button class="admin-button" onclick={go(Route::Admin)}>
                                {"Admin"}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                    {if session.is_authenticated() {
                        html! {
                            <button class="profile-button" onclick={go(Route::Profile)}>
                                {"My Profile"}
                            </button>
                        }
                    } else {
                        html! {
                            <button class="login-button" onclick={go(Route::Login)}>
                                {"Sign In"}
                            </button>
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
