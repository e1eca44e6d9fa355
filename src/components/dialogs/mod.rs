//! Modal dialogs for authentication and uploads.

mod auth;
mod upload;

pub use auth::AuthDialog;
pub use upload::UploadDialog;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/dialogs/dialogs.module.css");

/// Shared modal frame with a title and close button.
#[component]
fn Modal(title: &'static str, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::backdrop on:click=move |_| ctx.close_dialog()>
            <div class=css::modal on:click=|ev| ev.stop_propagation()>
                <div class=css::header>
                    <h2 class=css::title>{title}</h2>
                    <button class=css::close title="Close" on:click=move |_| ctx.close_dialog()>
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
