//! Gallery session: drives state transitions, list refreshes,
//! authentication and upload batches.
//!
//! The session owns the [`GalleryState`] and reports everything through a
//! [`GalleryView`]. It is shared as `Rc<GallerySession<..>>` between
//! spawned futures; no `RefCell` borrow is held across an `.await`.

use std::cell::RefCell;

use leptos::logging::{log, warn};

use crate::core::api::{GalleryApi, Transport};
use crate::core::error::{GalleryError, ValidationError};
use crate::core::list::ListClient;
use crate::core::query::{self, RequestTracker};
use crate::core::reporter;
use crate::core::token::TokenStore;
use crate::core::upload::{FileSource, UploadPipeline};
use crate::models::{AccessTier, GalleryPage, GalleryState, Navigation, UploadOutcome};

/// Message shown after a successful authentication.
pub const AUTHENTICATED_MESSAGE: &str = "Successfully authenticated!";

/// Receives session results for rendering.
pub trait GalleryView {
    /// The state changed; a list request for it is about to be issued.
    fn on_state_changed(&self, state: &GalleryState);
    /// The latest list request succeeded.
    fn on_list_result(&self, page: &GalleryPage);
    /// The latest list request resolved; drop whatever is rendered.
    fn on_list_cleared(&self);
    fn on_error(&self, message: &str);
    fn on_success(&self, message: &str);
}

/// Client-side session of one page view.
pub struct GallerySession<T, S, V> {
    api: GalleryApi<T>,
    tokens: S,
    view: V,
    state: RefCell<GalleryState>,
    tracker: RequestTracker,
}

impl<T, S, V> GallerySession<T, S, V>
where
    T: Transport,
    S: TokenStore,
    V: GalleryView,
{
    /// Start a session with the page-load tag filter.
    ///
    /// A token left in the store by an earlier load in this tab puts the
    /// session straight into the private tier.
    pub fn new(api: GalleryApi<T>, tokens: S, view: V, tags: Vec<String>) -> Self {
        let mut state = GalleryState::new(tags);
        if tokens.is_authenticated() {
            state = state.authenticated();
        }
        Self {
            api,
            tokens,
            view,
            state: RefCell::new(state),
            tracker: RequestTracker::new(),
        }
    }

    pub fn state(&self) -> GalleryState {
        self.state.borrow().clone()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Initial render: publish the state and list its page.
    pub async fn load(&self) {
        self.view.on_state_changed(&self.state.borrow());
        self.refresh().await;
    }

    /// Issue one list request for the current state.
    ///
    /// The response is rendered only if no newer request was issued in the
    /// meantime; otherwise it is discarded.
    pub async fn refresh(&self) {
        let state = self.state();
        let token = self.tokens.get();
        let generation = self.tracker.begin();
        log!(
            "list {} page {} tags {:?} ({})",
            state.access_tier().as_str(),
            state.page(),
            state.tags(),
            generation
        );

        let outcome = ListClient::new(&self.api)
            .fetch_page(state.access_tier(), state.page(), state.tags(), &token)
            .await;

        if !self.tracker.is_latest(generation) {
            log!("discarding stale list response ({})", generation);
            return;
        }

        self.view.on_list_cleared();
        match outcome {
            Ok(result) => {
                let page = query::interpret(self.api.base(), state.page(), result);
                self.view.on_list_result(&page);
            }
            Err(err) => {
                warn!("list failed: {}", err);
                self.view.on_error(&reporter::render(&err));
            }
        }
    }

    /// Move between pages and list the new page.
    pub async fn navigate(&self, navigation: Navigation) {
        let next = self.state.borrow().navigated(navigation);
        self.transition(next);
        self.refresh().await;
    }

    /// Exchange the shared secret for a bearer token.
    ///
    /// On success the token is stored, the session switches to the private
    /// tier at page 1 and the list is refreshed. Failures, including a token
    /// that could not be stored, are reported to the view and leave the state
    /// untouched; the error is also returned.
    pub async fn authenticate(&self, secret: &str) -> Result<(), GalleryError> {
        if let Err(err) = self.store_token(secret).await {
            warn!("authentication failed: {}", err);
            self.view.on_error(&reporter::render(&err));
            return Err(err);
        }
        self.view.on_success(AUTHENTICATED_MESSAGE);

        let next = self.state.borrow().authenticated();
        self.transition(next);
        self.refresh().await;
        Ok(())
    }

    /// Upload a batch of files concurrently.
    ///
    /// Each file succeeds or fails on its own and is reported as it
    /// resolves. Once the batch is dispatched the session returns to page 1
    /// and refreshes alongside the uploads. Outcomes are returned in
    /// selection order.
    pub async fn upload<F: FileSource>(
        &self,
        files: &[F],
        target: AccessTier,
        tags: &[String],
    ) -> Vec<UploadOutcome> {
        if files.is_empty() {
            let err = GalleryError::from(ValidationError::NoFilesSelected);
            self.view.on_error(&reporter::render(&err));
            return Vec::new();
        }

        let token = self.tokens.get();
        let token = token.as_str();
        let total = files.len();
        let pipeline = UploadPipeline::new(&self.api);
        let pipeline = &pipeline;

        let uploads = files.iter().enumerate().map(|(i, file)| async move {
            let outcome = pipeline.run(file, token, target, tags, i + 1, total).await;
            self.report_upload(&outcome);
            outcome
        });
        let batch = futures::future::join_all(uploads);

        let next = self.state.borrow().upload_completed();
        self.transition(next);

        let (outcomes, ()) = futures::join!(batch, self.refresh());
        outcomes
    }

    async fn store_token(&self, secret: &str) -> Result<(), GalleryError> {
        let response = self.api.authenticate(secret).await?;
        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or(ValidationError::EmptyToken)?;
        self.tokens.set(&token)?;
        Ok(())
    }

    fn report_upload(&self, outcome: &UploadOutcome) {
        match &outcome.result {
            Ok(stored) => {
                log!("uploaded {} as {}", outcome.original_name, stored);
                self.view.on_success(&outcome.success_message());
            }
            Err(err) => {
                warn!("upload of {} failed: {}", outcome.original_name, err);
                self.view.on_error(&reporter::render(err));
            }
        }
    }

    fn transition(&self, next: GalleryState) {
        *self.state.borrow_mut() = next;
        self.view.on_state_changed(&self.state.borrow());
    }
}
