use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::logging::Logger;
use crate::services::session::Session;

/// The session context installed at the application root.
#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("session context is provided at the app root")
}

/// Screen guard: without a stored token, navigate to the login screen on
/// mount, before any data fetch is issued. Returns the session either way;
/// guarded screens render nothing while the redirect is in flight.
#[hook]
pub fn use_require_session() -> Session {
    let session = use_session();
    let navigator = use_navigator();

    use_effect_with(session.is_authenticated(), move |authenticated| {
        if !authenticated {
            if let Some(navigator) = navigator {
                navigator.push(&Route::Login);
            }
        }
        || ()
    });

    session
}

/// Uniform expiry policy: a 401/403 on any authenticated request clears the
/// token and returns to the login screen, whichever screen it hit.
#[hook]
pub fn use_session_expired() -> Callback<()> {
    let session = use_session();
    let navigator = use_navigator();

    Callback::from(move |_| {
        Logger::warn("session", "authenticated request rejected, clearing token");
        session.logout();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
