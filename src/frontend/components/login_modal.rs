use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Button, ErrorAlert, Modal, PasswordInput, TextInput};
use crate::frontend::state::use_site;

#[component]
pub fn LoginModal() -> impl IntoView {
    let site = use_site();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let close = Callback::new(move |_: ()| {
        site.login_open.set(false);
        password.set(String::new());
        error.set(None);
    });

    let submit = move || {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        spawn_local(async move {
            let api = site.api();
            let mut guard = site.session.get_untracked();
            let result = guard
                .login(&api, &username.get_untracked(), &password.get_untracked())
                .await;
            site.session.set(guard);
            pending.set(false);

            match result {
                Ok(()) => {
                    password.set(String::new());
                    site.login_open.set(false);
                    site.admin_open.set(site.session_snapshot().is_admin());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Show when=move || site.login_open.get()>
            <Modal title="Admin Login" on_close=close>
                <form
                    class="space-y-5"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    {move || error.get().map(|message| view! { <ErrorAlert message=message /> })}
                    <TextInput
                        label="Username"
                        name="username"
                        required=true
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                    />
                    <PasswordInput
                        label="Password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                    />
                    <Button button_type="submit" loading=pending loading_text="Signing in...">
                        "Sign In"
                    </Button>
                </form>
            </Modal>
        </Show>
    }
}
