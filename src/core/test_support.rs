//! In-memory collaborators for exercising the session core natively.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::core::api::{Method, Transport};
use crate::core::error::{GalleryError, TokenStoreError};
use crate::core::session::GalleryView;
use crate::core::token::TokenStore;
use crate::core::upload::FileSource;
use crate::models::{GalleryPage, GalleryState};

type Reply = Result<String, GalleryError>;

#[derive(Clone, Debug)]
pub struct SentRequest {
    pub method: Method,
    pub url: String,
    pub body: String,
}

#[derive(Default)]
struct Script {
    requests: Vec<SentRequest>,
    replies: HashMap<String, VecDeque<Reply>>,
    pending: Vec<Option<oneshot::Sender<Reply>>>,
}

/// Transport that records requests and answers from a per-endpoint script.
///
/// Unscripted endpoints answer `{}`. In deferred mode every request stays
/// pending until [`ScriptedTransport::resolve`] is called for its index.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
    deferred: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    /// Queue a reply for the endpoint path (e.g. `/list`).
    pub fn respond(&self, path: &str, reply: Reply) {
        self.script
            .borrow_mut()
            .replies
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Complete the deferred request with the given index.
    pub fn resolve(&self, index: usize, reply: Reply) {
        let sender = self.script.borrow_mut().pending[index].take();
        if let Some(sender) = sender {
            let _ = sender.send(reply);
        }
    }

    pub fn requests(&self) -> Vec<SentRequest> {
        self.script.borrow().requests.clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, method: Method, url: &str, body: String) -> Result<String, GalleryError> {
        let receiver = {
            let mut script = self.script.borrow_mut();
            script.requests.push(SentRequest {
                method,
                url: url.to_string(),
                body,
            });
            if !self.deferred {
                let path = url
                    .rsplit_once('/')
                    .map(|(_, p)| format!("/{}", p))
                    .unwrap_or_default();
                let reply = script
                    .replies
                    .get_mut(&path)
                    .and_then(VecDeque::pop_front);
                return reply.unwrap_or_else(|| Ok("{}".to_string()));
            }
            let (sender, receiver) = oneshot::channel();
            script.pending.push(Some(sender));
            receiver
        };

        receiver.await.unwrap_or_else(|_| {
            Err(GalleryError::Transport {
                status_text: "abort".to_string(),
            })
        })
    }
}

/// Token store kept in memory.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<String>,
    read_only: bool,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(token.to_string()),
            read_only: false,
        }
    }

    /// A store whose writes always fail, like a full or blocked sessionStorage.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        if self.read_only {
            return Err(TokenStoreError::WriteFailed);
        }
        *self.token.borrow_mut() = token.to_string();
        Ok(())
    }

    fn get(&self) -> String {
        self.token.borrow().clone()
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        self.token.borrow_mut().clear();
        Ok(())
    }
}

/// Everything a [`RecordingView`] was told, in order.
#[derive(Clone, Debug)]
pub enum ViewEvent {
    State(GalleryState),
    Page(GalleryPage),
    Cleared,
    Error(String),
    Success(String),
}

#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn pages(&self) -> Vec<GalleryPage> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Page(page) => Some(page.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_page(&self) -> Option<GalleryPage> {
        self.pages().pop()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Success(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }
}

impl GalleryView for RecordingView {
    fn on_state_changed(&self, state: &GalleryState) {
        self.events.borrow_mut().push(ViewEvent::State(state.clone()));
    }

    fn on_list_result(&self, page: &GalleryPage) {
        self.events.borrow_mut().push(ViewEvent::Page(page.clone()));
    }

    fn on_list_cleared(&self) {
        self.events.borrow_mut().push(ViewEvent::Cleared);
    }

    fn on_error(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Error(message.to_string()));
    }

    fn on_success(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Success(message.to_string()));
    }
}

/// File whose contents are already in memory.
pub struct MemoryFile {
    name: String,
    bytes: Vec<u8>,
    reads: Cell<usize>,
}

impl MemoryFile {
    pub fn new(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            bytes,
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl FileSource for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn read(&self) -> Result<Vec<u8>, GalleryError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.bytes.clone())
    }
}
