//! Multi-file upload dialog.

use leptos::{html, prelude::*};

use super::{Modal, css};
use crate::app::{AppContext, Dialog};
use crate::core::query::split_tags;
use crate::models::AccessTier;
use crate::utils::BrowserFile;

/// Picks files, target tier and tags, then starts the upload batch.
///
/// The file field is cleared on submit; tags are kept since they are often
/// reused between uploads.
#[component]
pub fn UploadDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let files_ref: NodeRef<html::Input> = NodeRef::new();
    let tier_ref: NodeRef<html::Select> = NodeRef::new();
    let tags = RwSignal::new(String::new());

    let submit = move |_| {
        let files = files_ref
            .get()
            .map(|input| {
                let files = input
                    .files()
                    .map(|list| BrowserFile::from_list(&list))
                    .unwrap_or_default();
                input.set_value("");
                files
            })
            .unwrap_or_default();
        let target = tier_ref
            .get()
            .and_then(|select| AccessTier::from_wire(&select.value()))
            .unwrap_or_default();

        ctx.close_dialog();
        ctx.upload(files, target, split_tags(&tags.get_untracked()));
    };

    view! {
        <Show when=move || ctx.dialog.get() == Dialog::Upload>
            <Modal title="Upload images">
                <label class=css::label for="upload-files">"Files"</label>
                <input
                    id="upload-files"
                    class=css::input
                    type="file"
                    accept="image/*"
                    multiple=true
                    node_ref=files_ref
                />
                <label class=css::label for="upload-tier">"Access"</label>
                <select id="upload-tier" class=css::input node_ref=tier_ref>
                    {AccessTier::UPLOAD_TARGETS
                        .into_iter()
                        .map(|tier| view! { <option value=tier.as_str()>{tier.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <label class=css::label for="upload-tags">"Tags (comma separated)"</label>
                <input
                    id="upload-tags"
                    class=css::input
                    type="text"
                    bind:value=tags
                />
                <button class=css::primary on:click=submit>
                    "Upload"
                </button>
            </Modal>
        </Show>
    }
}
