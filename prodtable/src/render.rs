//! Template rendering for CLI output using outstanding

use console::Style;
use outstanding::{render_auto, render_with_output, Theme};
use prodtablelib::{render_html, OutputFormat, ProductRow, RenderOptions, TableView};
use serde::Serialize;

/// Include template at compile time
const PRODUCTS_TABLE_TEMPLATE: &str = include_str!("../templates/products_table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Gap between text columns
const COLUMN_GAP: &str = "  ";

/// Data context for the text table template
#[derive(Debug, Serialize)]
struct TextTableContext {
    /// Pre-padded header labels
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded body rows
    rows: Vec<String>,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("header", Style::new().bold())
}

/// Render a table view in the requested format.
///
/// `output_mode` only affects the text table: `Auto` styles the header when
/// stdout is a terminal, `Text` never does.
pub fn render(
    view: &TableView,
    format: OutputFormat,
    options: &RenderOptions,
    output_mode: OutputMode,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Html => Ok(render_html(view, options)?),
        OutputFormat::Json => {
            let theme = create_theme();
            let json = render_auto(PRODUCTS_TABLE_TEMPLATE, view, &theme, OutputMode::Json)?;
            Ok(with_trailing_newline(json))
        }
        OutputFormat::Text => Ok(with_trailing_newline(render_text(view, output_mode)?)),
    }
}

fn with_trailing_newline(mut output: String) -> String {
    output.truncate(output.trim_end().len());
    output.push('\n');
    output
}

/// Text cells of a body row, in header order
fn row_cells(row: &ProductRow) -> [String; 4] {
    [
        row.image.src.clone(),
        row.title.clone(),
        row.price.to_string(),
        row.colors.clone(),
    ]
}

/// Left-align cells to their column widths and join them
fn pad_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

fn to_text_context(view: &TableView) -> TextTableContext {
    let rows: Vec<[String; 4]> = view.rows.iter().map(row_cells).collect();
    let labels: Vec<&str> = view.headers.iter().map(|h| h.label.as_str()).collect();

    let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator_width =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

    TextTableContext {
        header: pad_line(&labels, &widths),
        separator: "-".repeat(separator_width),
        rows: rows.iter().map(|cells| pad_line(&cells[..], &widths)).collect(),
    }
}

/// Render a table view as left-aligned columns with a styled header
pub fn render_text(
    view: &TableView,
    output_mode: OutputMode,
) -> Result<String, Box<dyn std::error::Error>> {
    let theme = create_theme();
    let context = to_text_context(view);

    let rendered = render_with_output(PRODUCTS_TABLE_TEMPLATE, &context, &theme, output_mode)?;

    Ok(rendered)
}
