use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cardgrid_cli::types::{GridSummary, RenderOutcome, RenderResult};
use cardgrid_ingest::DeckSummary;

pub fn print_decks(decks: &[DeckSummary]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Deck"), header_cell("Cards"), header_cell("File")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut total = 0usize;
    for deck in decks {
        total += deck.cards;
        let cards = if deck.cards == 0 {
            dim_cell(0)
        } else {
            Cell::new(deck.cards)
        };
        table.add_row(vec![
            Cell::new(&deck.name).add_attribute(Attribute::Bold),
            cards,
            dim_cell(deck.path.display()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_render_summary(result: &RenderResult) {
    println!("Output: {}", result.output.display());
    match &result.outcome {
        RenderOutcome::Grid(summary) => print_grid_table(result.deck.as_deref(), summary),
        RenderOutcome::Message(text) => eprintln!("note: {text}"),
    }
}

fn print_grid_table(deck: Option<&str>, summary: &GridSummary) {
    let layout = &summary.layout;
    let visible = if summary.visible.is_empty() {
        "-".to_string()
    } else {
        format!("{}-{}", summary.visible.start + 1, summary.visible.end)
    };

    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    let rows = [
        ("Deck", deck.unwrap_or("-").to_string()),
        ("Cards", summary.cards.to_string()),
        ("Page", summary.page.page.to_string()),
        ("Pages", summary.page.page_count.to_string()),
        ("Visible", visible),
        (
            "Layout",
            format!(
                "{} x {}, {}px cards, {}px text",
                layout.columns, layout.rows, layout.card_size_px, layout.font_size_px
            ),
        ),
        (
            "Aspect",
            format!("{} ({})", layout.aspect_ratio, layout.aspect_label()),
        ),
        ("Flip all", yes_no(layout.flip_all)),
        ("MathJax", yes_no(summary.math)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).fg(Color::Cyan), Cell::new(value)]);
    }
    println!("{table}");
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
