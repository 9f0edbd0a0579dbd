use anyhow::{Context, Result};
use tracing::info;

use cardgrid_cli::render::run_render;
use cardgrid_cli::types::{RenderOptions, RenderResult};
use cardgrid_core::LayoutUpdate;
use cardgrid_core::layout::aspect_from_slider;
use cardgrid_ingest::{Collection, DeckSummary};

use crate::cli::{DecksArgs, RenderArgs};

pub fn run_decks(args: &DecksArgs) -> Result<Vec<DeckSummary>> {
    let collection = Collection::open(&args.collection)
        .with_context(|| format!("open collection {}", args.collection.display()))?;
    let decks = collection.decks();
    info!(decks = decks.len(), "listed decks");
    Ok(decks)
}

pub fn run_render_command(args: &RenderArgs) -> Result<RenderResult> {
    run_render(&render_options(args))
}

fn render_options(args: &RenderArgs) -> RenderOptions {
    let layout = LayoutUpdate {
        columns: args.columns,
        rows: args.rows,
        card_size_px: args.card_size,
        font_size_px: args.font_size,
        aspect_ratio: args.aspect.map(aspect_from_slider),
        flip_all: args.flip_all.then_some(true),
    };
    RenderOptions {
        collection: args.collection.clone(),
        deck: args.deck.clone(),
        layout,
        page: args.page,
        limit: args.limit,
        output: args.output.clone(),
        math: !args.no_math,
    }
}
