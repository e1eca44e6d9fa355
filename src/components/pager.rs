//! First/previous/next pagination controls.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Affordances, Navigation};

stylance::import_crate_style!(css, "src/components/pager.module.css");

/// Pagination controls for the current page.
///
/// Controls stay disabled until a listing has been rendered.
#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let affordances = Memo::new(move |_| {
        ctx.view
            .page
            .with(|p| p.as_ref().map(|p| p.affordances).unwrap_or_default())
    });
    let current_page = Signal::derive(move || ctx.view.state.with(|s| s.page()));
    let disabled = move |pick: fn(&Affordances) -> bool| move || !pick(&affordances.get());

    view! {
        <nav class=css::pager>
            <button
                class=css::pageButton
                title="First page"
                disabled=disabled(|a| a.can_go_first)
                on:click=move |_| ctx.navigate(Navigation::First)
            >
                <Icon icon=ic::FIRST_PAGE />
            </button>
            <button
                class=css::pageButton
                title="Previous page"
                disabled=disabled(|a| a.can_go_prev)
                on:click=move |_| ctx.navigate(Navigation::Prev)
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <span class=css::currentPage>{move || current_page.get()}</span>
            <button
                class=css::pageButton
                title="Next page"
                disabled=disabled(|a| a.can_go_next)
                on:click=move |_| ctx.navigate(Navigation::Next)
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </nav>
    }
}
