//! Top bar with the title and the authenticate/upload actions.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, Dialog};
use crate::components::icons as ic;
use crate::config::APP_TITLE;

stylance::import_crate_style!(css, "src/components/toolbar.module.css");

/// Toolbar component.
///
/// The lock opens the authentication dialog and shows as unlocked once the
/// private tier is active; the upload action only appears then.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let authenticated = Signal::derive(move || ctx.is_authenticated());
    let lock_title = Signal::derive(move || {
        if authenticated.get() {
            "Authenticated"
        } else {
            "Authenticate"
        }
    });

    view! {
        <header class=css::bar>
            <span class=css::title>{APP_TITLE}</span>
            <div class=css::actions>
                <button
                    class=css::iconButton
                    title=move || lock_title.get()
                    on:click=move |_| ctx.open(Dialog::Authenticate)
                >
                    {move || if authenticated.get() {
                        view! { <Icon icon=ic::UNLOCK /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::LOCK /> }.into_any()
                    }}
                </button>
                <Show when=move || authenticated.get()>
                    <button
                        class=css::iconButton
                        title="Upload"
                        on:click=move |_| ctx.open(Dialog::Upload)
                    >
                        <Icon icon=ic::UPLOAD />
                    </button>
                </Show>
            </div>
        </header>
    }
}
