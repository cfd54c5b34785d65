use crate::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let settings = Settings::load();
    provide_session(&settings);
    provide_context(settings);

    view! {
        <Router>
            <header>
                <A href="/">
                    <h1>"Drive"</h1>
                </A>
                <SessionUser/>
            </header>
            <hr/>
            <main>
                <Routes>
                    <Route path="" view=Home/>
                    <Route path="login" view=Login/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    let session = use_session();
    let token = session.token_signal();
    let user = session.user_signal();
    view! {
        <Show
            when=move || !token.get().is_empty()
            fallback=|| view! { <p>"You are not logged in."</p> }
        >
            <p>"Signed in as " {move || user.get()}</p>
        </Show>
    }
}
