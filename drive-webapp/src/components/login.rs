use crate::api;
use crate::prelude::*;

/// Exchanges credentials for a token and records it in `session`.
async fn submit(
    session: Session,
    settings: Settings,
    request: requests::Login,
) -> Result<(), api::Error> {
    let response = api::login(&settings, &request).await.map_err(|e| {
        tracing::warn!("login failed: {}", e);
        e
    })?;
    session.login(&response, &handles::User::new(request.email));
    Ok(())
}

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let settings = expect_context::<Settings>();
    let token = session.token_signal();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let action = create_action(move |request: &requests::Login| {
        submit(session.clone(), settings.clone(), request.clone())
    });
    let error = move || {
        action
            .value()
            .with(|value| match value {
                Some(Err(e)) => Some(e.to_string()),
                _ => None,
            })
    };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        action.dispatch(requests::Login {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <Show when=move || token.get().is_empty() fallback=|| view! { "You are logged in!" }>
            <form on:submit=on_submit>
                <h2>"Log In"</h2>
                <div>
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        name="email"
                        placeholder="Email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || action.pending().get()>
                    "Log In"
                </button>
                {move || error().map(|e| view! { <p class="error">"Failed to log in: " {e}</p> })}
            </form>
        </Show>
    }
}
