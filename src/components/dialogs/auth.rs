//! Shared-secret authentication dialog.

use leptos::{ev, html, prelude::*};

use super::{Modal, css};
use crate::app::{AppContext, Dialog};

/// Asks for the shared secret and exchanges it for a bearer token.
///
/// The secret field is cleared after every attempt. Enter submits.
#[component]
pub fn AuthDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let secret_ref: NodeRef<html::Input> = NodeRef::new();

    let submit = move || {
        let Some(input) = secret_ref.get() else {
            return;
        };
        let secret = input.value();
        input.set_value("");
        ctx.close_dialog();
        ctx.authenticate(secret);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <Show when=move || ctx.dialog.get() == Dialog::Authenticate>
            <Modal title="Authenticate">
                <label class=css::label for="authenticate-secret">"Secret"</label>
                <input
                    id="authenticate-secret"
                    class=css::input
                    type="password"
                    autocomplete="current-password"
                    node_ref=secret_ref
                    on:keydown=on_keydown
                />
                <button class=css::primary on:click=move |_| submit()>
                    "Authenticate"
                </button>
            </Modal>
        </Show>
    }
}
