//! Root application module.
//!
//! Contains the main App component, AppContext definition, the signal-backed
//! [`GalleryView`] and application-level setup logic following Leptos
//! conventions.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{
    AuthDialog, ImageGrid, LicenseFooter, Messages, Pager, TagsBanner, Toolbar, UploadDialog,
};
use crate::config;
use crate::core::query;
use crate::core::{GalleryApi, GallerySession, GalleryView, SessionTokenStore};
use crate::models::{AccessTier, GalleryPage, GalleryState, Navigation};
use crate::utils::{BrowserFile, FetchTransport, dom};

/// Session type used in the browser.
pub type BrowserSession = GallerySession<FetchTransport, SessionTokenStore, SignalView>;

// ============================================================================
// SignalView
// ============================================================================

/// [`GalleryView`] that writes session results into Leptos signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct SignalView {
    /// Tier, page and tags of the current view.
    pub state: RwSignal<GalleryState>,
    /// Last rendered page; `None` while nothing is shown.
    pub page: RwSignal<Option<GalleryPage>>,
    /// Error slot.
    pub error: RwSignal<String>,
    /// Success slot.
    pub success: RwSignal<String>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(GalleryState::default()),
            page: RwSignal::new(None),
            error: RwSignal::new(String::new()),
            success: RwSignal::new(String::new()),
        }
    }

    pub fn clear_messages(&self) {
        self.error.set(String::new());
        self.success.set(String::new());
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryView for SignalView {
    fn on_state_changed(&self, state: &GalleryState) {
        self.state.set(state.clone());
    }

    fn on_list_result(&self, page: &GalleryPage) {
        self.page.set(Some(page.clone()));
    }

    fn on_list_cleared(&self) {
        self.page.set(None);
    }

    fn on_error(&self, message: &str) {
        self.error.set(message.to_string());
    }

    fn on_success(&self, message: &str) {
        self.success.set(message.to_string());
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Which modal dialog is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    None,
    Authenticate,
    Upload,
}

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`. User actions are turned
/// into session operations spawned on the local executor.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered session results.
    pub view: SignalView,
    /// Currently open dialog.
    pub dialog: RwSignal<Dialog>,
    session: StoredValue<Rc<BrowserSession>, LocalStorage>,
}

impl AppContext {
    /// Creates the context and its session from the page's location.
    ///
    /// The tag filter is read once from the query string here and never
    /// changes for this page view.
    pub fn new() -> Self {
        let view = SignalView::new();
        let tags = query::tags_from_query(&dom::location_search());
        let base = config::api_base_for_host(&dom::location_hostname());
        let api = GalleryApi::new(FetchTransport::new(), base);
        let session = GallerySession::new(api, SessionTokenStore::new(), view, tags);

        Self {
            view,
            dialog: RwSignal::new(Dialog::None),
            session: StoredValue::new_local(Rc::new(session)),
        }
    }

    fn session(&self) -> Rc<BrowserSession> {
        self.session.get_value()
    }

    /// Whether the private tier is active.
    pub fn is_authenticated(&self) -> bool {
        self.view
            .state
            .with(|s| s.access_tier() == AccessTier::Private)
    }

    pub fn open(&self, dialog: Dialog) {
        self.dialog.set(dialog);
    }

    pub fn close_dialog(&self) {
        self.dialog.set(Dialog::None);
    }

    /// Publish the initial state and list its first page.
    pub fn load(&self) {
        let session = self.session();
        spawn_local(async move { session.load().await });
    }

    pub fn navigate(&self, navigation: Navigation) {
        let session = self.session();
        spawn_local(async move { session.navigate(navigation).await });
    }

    pub fn authenticate(&self, secret: String) {
        self.view.clear_messages();
        let session = self.session();
        spawn_local(async move {
            // Failures are already in the error slot.
            let _ = session.authenticate(&secret).await;
        });
    }

    pub fn upload(&self, files: Vec<BrowserFile>, target: AccessTier, tags: Vec<String>) {
        self.view.clear_messages();
        let session = self.session();
        spawn_local(async move {
            session.upload(&files, target, &tags).await;
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the initial listing
/// - Renders the gallery page and its dialogs
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load();

    view! {
        <Toolbar />
        <main class="gallery">
            <TagsBanner />
            <Messages />
            <Pager />
            <ImageGrid />
            <Pager />
            <LicenseFooter />
        </main>
        <AuthDialog />
        <UploadDialog />
    }
}
