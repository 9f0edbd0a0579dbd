//! Headless rendering: load a deck, drive the surface through the bridge and
//! write the resulting page.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use cardgrid_core::html::{message_page, render_page};
use cardgrid_core::{
    CardStore, ControlBridge, GridRenderer, HostCollection, LayoutState, MathJax, RenderSurface,
    SurfaceFrame,
};
use cardgrid_ingest::Collection;

use crate::types::{GridSummary, RenderOptions, RenderOutcome, RenderResult};

/// Opens the collection and runs [`render_collection`] on a single-threaded
/// runtime.
pub fn run_render(options: &RenderOptions) -> Result<RenderResult> {
    let span = info_span!("render", collection = %options.collection.display());
    let _guard = span.enter();

    let mut collection = Collection::open(&options.collection)
        .with_context(|| format!("open collection {}", options.collection.display()))?;
    if let Some(deck) = &options.deck {
        collection
            .select_deck(deck)
            .with_context(|| format!("select deck {deck}"))?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("start runtime")?;
    runtime.block_on(render_collection(&collection, options))
}

/// Pushes the current deck and layout to a fresh surface, waits for it to
/// settle and writes whatever it shows.
pub async fn render_collection(
    collection: &Collection,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let renderer = if options.math {
        GridRenderer::new(MathJax)
    } else {
        GridRenderer::default()
    };
    let bridge = ControlBridge::spawn(RenderSurface::new(LayoutState::default(), renderer));

    match collection.cards_for_current_deck(options.limit) {
        Ok(cards) => bridge.load(CardStore::build(&cards)),
        Err(error) => {
            warn!(%error, "nothing to preview");
            bridge.show_message(error.message());
        }
    }
    bridge.apply_layout(options.layout);
    if let Some(page) = options.page {
        bridge.go_to_page(page);
    }

    let page = bridge.settled_page_info().await;
    let Some(frame) = bridge.frame().await else {
        bail!("render surface stopped before producing a frame");
    };

    let (html, outcome) = match frame {
        SurfaceFrame::Grid(document) => {
            let summary = GridSummary {
                cards: document.item_count(),
                page: page.unwrap_or_else(|| document.page()),
                visible: document.visible_range(),
                layout: *document.layout(),
                math: document.needs_math(),
            };
            (render_page(&document), RenderOutcome::Grid(summary))
        }
        SurfaceFrame::Message(text) => (message_page(&text), RenderOutcome::Message(text)),
        SurfaceFrame::Blank => bail!("render surface has nothing to show"),
    };

    std::fs::write(&options.output, html)
        .with_context(|| format!("write {}", options.output.display()))?;
    info!(output = %options.output.display(), "wrote preview page");

    Ok(RenderResult {
        output: options.output.clone(),
        deck: collection.current_deck(),
        outcome,
    })
}
