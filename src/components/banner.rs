//! Tag filter banner, message slots and license footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::LICENSE_TEXT;
use crate::core::query;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/banner.module.css");

/// Describes the active tag filter and offers to drop it.
///
/// Tags come from the page URL, so removing them means reloading.
#[component]
pub fn TagsBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let text = Memo::new(move |_| ctx.view.state.with(|s| query::tags_banner(s.tags())));

    view! {
        <Show when=move || text.with(Option::is_some)>
            <div class=css::banner>
                <Icon icon=ic::TAG />
                <span>{move || text.get().unwrap_or_default()}</span>
                <button class=css::linkButton on:click=move |_| dom::reload_without_query()>
                    "Show all images"
                </button>
            </div>
        </Show>
    }
}

/// Success and error slots.
#[component]
pub fn Messages() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::messages>
            <p class=css::success>{move || ctx.view.success.get()}</p>
            <p class=css::error>{move || ctx.view.error.get()}</p>
        </div>
    }
}

#[component]
pub fn LicenseFooter() -> impl IntoView {
    view! {
        <footer class=css::license>{LICENSE_TEXT}</footer>
    }
}
