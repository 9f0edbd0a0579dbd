//! Control surface bridge: the only channel between a control panel and the
//! render surface.
//!
//! Pushes are fire-and-forget and never report an outcome. Pulls ask the
//! surface for its current state through a reply channel. Because pushes are
//! queued, a control that needs the state *after* its own push waits
//! [`SETTLE_DELAY`] before pulling; a pull that arrives late still sees the
//! latest state.
//!
//! No validation happens here. Clamping belongs to the layout and the
//! pagination engine.

use std::thread;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::layout::LayoutUpdate;
use crate::pagination::PageInfo;
use crate::store::CardStore;
use crate::surface::{RenderSurface, SurfaceCommand, SurfaceFrame};

/// How long a control waits after a push before pulling state.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug)]
enum Request {
    Command(SurfaceCommand),
    PageInfo(oneshot::Sender<Option<PageInfo>>),
    Frame(oneshot::Sender<SurfaceFrame>),
}

/// Handle to a running render surface. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ControlBridge {
    queue: mpsc::UnboundedSender<Request>,
}

impl ControlBridge {
    /// Run `surface` as a task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(surface: RenderSurface) -> Self {
        let (queue, requests) = mpsc::unbounded_channel();
        tokio::spawn(run_async(surface, requests));
        Self { queue }
    }

    /// Run `surface` on its own thread, independent of any runtime.
    pub fn spawn_dedicated(surface: RenderSurface) -> std::io::Result<Self> {
        let (queue, requests) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("render-surface".to_string())
            .spawn(move || run_blocking(surface, requests))?;
        Ok(Self { queue })
    }

    /// A bridge with no surface behind it: pushes are dropped and pulls
    /// return `None`.
    pub fn disconnected() -> Self {
        let (queue, _) = mpsc::unbounded_channel();
        Self { queue }
    }

    /// Whether the surface is still accepting requests.
    pub fn is_connected(&self) -> bool {
        !self.queue.is_closed()
    }

    /// Queue a command. A closed surface drops it silently.
    pub fn push(&self, command: SurfaceCommand) {
        if let Err(error) = self.queue.send(Request::Command(command)) {
            debug!(request = ?error.0, "render surface is gone, push dropped");
        }
    }

    pub fn load(&self, store: CardStore) {
        self.push(SurfaceCommand::Load(store));
    }

    pub fn show_message(&self, text: impl Into<String>) {
        self.push(SurfaceCommand::ShowMessage(text.into()));
    }

    /// Apply a layout update and re-derive the page from it.
    pub fn apply_layout(&self, update: LayoutUpdate) {
        self.push(SurfaceCommand::SetLayout(update));
        self.push(SurfaceCommand::Relayout);
    }

    pub fn navigate(&self, delta: i64) {
        self.push(SurfaceCommand::Navigate(delta));
    }

    pub fn go_to_page(&self, target: i64) {
        self.push(SurfaceCommand::GoToPage(target));
    }

    pub fn set_flip_all(&self, flip_all: bool) {
        self.push(SurfaceCommand::SetFlipAll(flip_all));
    }

    pub fn toggle_card(&self, slot: usize) {
        self.push(SurfaceCommand::ToggleCard(slot));
    }

    pub fn hover(&self, slot: usize, entered: bool) {
        self.push(SurfaceCommand::Hover { slot, entered });
    }

    pub fn resize(&self) {
        self.push(SurfaceCommand::Resize);
    }

    /// Current pagination state, or `None` when the surface is gone or has
    /// no grid yet.
    pub async fn page_info(&self) -> Option<PageInfo> {
        let (reply, response) = oneshot::channel();
        self.queue.send(Request::PageInfo(reply)).ok()?;
        response.await.ok().flatten()
    }

    /// What the surface is showing, or `None` when it is gone.
    pub async fn frame(&self) -> Option<SurfaceFrame> {
        let (reply, response) = oneshot::channel();
        self.queue.send(Request::Frame(reply)).ok()?;
        response.await.ok()
    }

    /// Wait for earlier pushes to settle, then pull the page state.
    pub async fn settled_page_info(&self) -> Option<PageInfo> {
        tokio::time::sleep(SETTLE_DELAY).await;
        self.page_info().await
    }
}

fn serve(surface: &mut RenderSurface, request: Request) {
    match request {
        Request::Command(command) => surface.handle(command),
        Request::PageInfo(reply) => {
            let _ = reply.send(surface.page_info());
        }
        Request::Frame(reply) => {
            let _ = reply.send(surface.frame());
        }
    }
}

async fn run_async(mut surface: RenderSurface, mut requests: mpsc::UnboundedReceiver<Request>) {
    info!("render surface started");
    while let Some(request) = requests.recv().await {
        serve(&mut surface, request);
    }
    info!("render surface stopped");
}

fn run_blocking(mut surface: RenderSurface, mut requests: mpsc::UnboundedReceiver<Request>) {
    info!("render surface started on dedicated thread");
    while let Some(request) = requests.blocking_recv() {
        serve(&mut surface, request);
    }
    info!("render surface stopped");
}
