use crate::prelude::*;

/// Builds the page's [`Session`] and makes it available to every component
/// below the current owner.
pub fn provide_session(settings: &Settings) -> Session {
    let session = Session::from_browser(settings);
    provide_context(session.clone());
    session
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// Click handler for logging out of the session in context.
fn logout_handler() -> impl Fn() + Clone + 'static {
    let session = use_session();
    move || session.logout()
}

#[component]
pub fn LogoutButton() -> impl IntoView {
    let logout = logout_handler();
    view! { <button on:click=move |_| logout()>"Log Out"</button> }
}

#[component]
pub fn SessionUser() -> impl IntoView {
    let user = use_session().user_signal();
    view! {
        <Show
            when=move || !user.get().is_empty()
            fallback=|| view! { <A href="/login">"Log In"</A> }
        >
            <span class="user">{move || user.get()}</span>
            <LogoutButton/>
        </Show>
    }
}
