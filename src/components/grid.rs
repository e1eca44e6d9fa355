//! Thumbnail grid of the current page.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::GRID_COLUMNS;
use crate::models::ImageLinks;

stylance::import_crate_style!(css, "src/components/grid.module.css");

/// Renders the listed images in rows; each thumbnail opens the original.
#[component]
pub fn ImageGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let rows = Memo::new(move |_| {
        ctx.view.page.with(|page| {
            page.as_ref()
                .map(|p| p.links.chunks(GRID_COLUMNS).map(<[ImageLinks]>::to_vec).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });
    let is_empty = Signal::derive(move || {
        ctx.view
            .page
            .with(|p| p.as_ref().is_some_and(|p| p.is_empty()))
    });

    view! {
        <section class=css::grid>
            <Show when=move || is_empty.get()>
                <p class=css::empty>"No images on this page."</p>
            </Show>
            {move || rows.get()
                .into_iter()
                .map(|row| view! {
                    <div class=css::row>
                        {row.into_iter()
                            .map(|links| view! {
                                <a class=css::tile href=links.full target="_blank" rel="noopener">
                                    <img class=css::thumbnail src=links.thumbnail loading="lazy" />
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                })
                .collect::<Vec<_>>()
            }
        </section>
    }
}
