//! HTML rendering for a [`TableView`].
//!
//! The table carries inline styles only (no classes), so the markup can be
//! dropped into any page as-is. Row and header keys are written as
//! `data-key` attributes. Cell text and attribute values go through the
//! template engine's HTML auto-escaping.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::options::RenderOptions;
use crate::Result;

use super::image::PLACEHOLDER_IMAGE_URL;
use super::table::{HeaderCell, ProductRow, TableView};

/// Include template at compile time
const PRODUCTS_TABLE_TEMPLATE: &str = include_str!("../../templates/products_table.html");

const TEMPLATE_NAME: &str = "products_table.html";

/// Inline styles for each styled element.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableStyles {
    pub table: &'static str,
    pub header_row: &'static str,
    pub header_cell: &'static str,
    pub cell: &'static str,
    pub image: &'static str,
}

pub const STYLES: TableStyles = TableStyles {
    table: "border-collapse: collapse; margin-left: auto; margin-right: auto",
    header_row: "background-color: #707070",
    header_cell: "font-weight: 400; color: white; padding: 0.5em 1em",
    cell: "border: 1px solid #707070; padding: 0.5em 2em",
    image: "max-width: 150px; padding: 10px 2em",
};

/// Data context for the products table template
#[derive(Debug, Serialize)]
struct HtmlTableContext<'a> {
    /// Wrap the table in a standalone page
    document: bool,
    styles: TableStyles,
    /// Script for images that still have a live error handler. It detaches
    /// itself before pointing the image at the placeholder.
    on_error: String,
    headers: &'a [HeaderCell],
    rows: &'a [ProductRow],
}

fn create_environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template(TEMPLATE_NAME, PRODUCTS_TABLE_TEMPLATE)?;
    Ok(env)
}

/// Render a table view as HTML.
///
/// # Example
///
/// ```rust
/// use prodtablelib::{render_html, render_table, Product, ProductCollection, RenderOptions};
///
/// let mut products = ProductCollection::new();
/// products.insert("mug".to_string(), Product::new("Mug", 800));
///
/// let html = render_html(&render_table(&products), &RenderOptions::new()).unwrap();
/// assert!(html.contains(r#"<tr data-key="product-row-mug">"#));
/// assert!(html.contains("$8.00"));
/// ```
pub fn render_html(view: &TableView, options: &RenderOptions) -> Result<String> {
    let env = create_environment()?;
    let context = HtmlTableContext {
        document: options.document,
        styles: STYLES,
        on_error: format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE_URL}';"),
        headers: &view.headers,
        rows: &view.rows,
    };

    let rendered = env.get_template(TEMPLATE_NAME)?.render(&context)?;
    tracing::trace!(
        rows = view.rows.len(),
        pretty = options.pretty,
        "html rendered"
    );

    if options.pretty {
        Ok(rendered)
    } else {
        Ok(rendered.lines().map(str::trim).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Product, ProductCollection};
    use crate::output::image::ImageEvent;
    use crate::output::table::{render_table, ProductTable};
    use minijinja::HtmlEscape;

    fn blue_shirt() -> ProductCollection {
        let mut products = ProductCollection::new();
        products.insert(
            "blue-shirt".to_string(),
            Product::new("Blue Shirt", 2500).color("blue"),
        );
        products
    }

    fn escaped(text: &str) -> String {
        HtmlEscape(text).to_string()
    }

    #[test]
    fn test_auto_escape() {
        let mut products = ProductCollection::new();
        products.insert(
            "tee".to_string(),
            Product::new(r#"<b>"Tom" & Jerry</b>"#, 1000),
        );
        let html = render_html(&render_table(&products), &RenderOptions::new()).unwrap();

        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;&quot;Tom&quot; &amp; Jerry&lt;"));
    }

    #[test]
    fn test_pretty_table() {
        let html = render_html(&render_table(&blue_shirt()), &RenderOptions::new()).unwrap();
        let placeholder = escaped(PLACEHOLDER_IMAGE_URL);

        let expected = format!(
            r#"<table style="{table}">
  <thead>
    <tr style="{header_row}">
      <th style="{header_cell}" data-key="Image">Image</th>
      <th style="{header_cell}" data-key="Title">Title</th>
      <th style="{header_cell}" data-key="Price">Price</th>
      <th style="{header_cell}" data-key="Number of Colors">Number of Colors</th>
    </tr>
  </thead>
  <tbody>
    <tr data-key="product-row-blue-shirt">
      <td style="{cell}"><img src="{placeholder}" alt="Product Image for Blue Shirt"></td>
      <td style="{cell}">Blue Shirt</td>
      <td style="{cell}">$25.00</td>
      <td style="{cell}">1 Color Available</td>
    </tr>
  </tbody>
</table>
"#,
            table = STYLES.table,
            header_row = STYLES.header_row,
            header_cell = STYLES.header_cell,
            cell = STYLES.cell,
        );

        assert_eq!(html, expected);
    }

    #[test]
    fn test_compact_has_no_newlines() {
        let html = render_html(
            &render_table(&blue_shirt()),
            &RenderOptions::new().pretty(false),
        )
        .unwrap();

        assert!(!html.contains('\n'));
        assert!(html.starts_with("<table "));
        assert!(html.ends_with("</tbody></table>"));
        assert_eq!(html.matches("<tr").count(), 2);
        assert_eq!(html.matches("<th ").count(), 4);
        assert_eq!(html.matches("<td ").count(), 4);
    }

    #[test]
    fn test_document_wrapper() {
        let html = render_html(
            &render_table(&blue_shirt()),
            &RenderOptions::new().document(true),
        )
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
        assert!(html.contains("  <title>Products</title>\n"));
        assert!(html.contains("<body>\n<table style="));
        assert!(html.ends_with("</table>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_featured_image_has_style_and_handler() {
        let mut products = ProductCollection::new();
        products.insert(
            "hat".to_string(),
            Product::new("Hat", 1000).featured_image("https://example.com/hat.png?a=1&b=2"),
        );
        let html = render_html(&render_table(&products), &RenderOptions::new()).unwrap();

        assert!(html.contains(&format!(
            r#"src="{}""#,
            escaped("https://example.com/hat.png?a=1&b=2")
        )));
        assert!(html.contains("a=1&amp;b=2"));
        assert!(html.contains(&format!(r#"style="{}""#, STYLES.image)));
        assert!(html.contains(&format!(
            r#"onerror="{}""#,
            escaped(&format!(
                "this.onerror=null;this.src='{PLACEHOLDER_IMAGE_URL}';"
            ))
        )));
    }

    #[test]
    fn test_replaced_image_drops_handler() {
        let mut products = ProductCollection::new();
        products.insert(
            "hat".to_string(),
            Product::new("Hat", 1000).featured_image("https://example.com/hat.png"),
        );
        let mut table = ProductTable::from_collection(products);
        table.image_event("hat", ImageEvent::LoadFailed).unwrap();

        let html = render_html(&table.render(), &RenderOptions::new()).unwrap();
        assert!(!html.contains("onerror"));
        assert!(!html.contains("hat.png"));
        assert!(html.contains(&format!(r#"src="{}""#, escaped(PLACEHOLDER_IMAGE_URL))));
        assert!(html.contains(&format!(r#"style="{}""#, STYLES.image)));
    }

    #[test]
    fn test_title_is_escaped() {
        let mut products = ProductCollection::new();
        products.insert(
            "tee".to_string(),
            Product::new("<script>alert(1)</script> Tee", 1000),
        );
        let html = render_html(&render_table(&products), &RenderOptions::new()).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
        assert!(html.contains("script&gt; Tee</td>"));
    }

    #[test]
    fn test_empty_collection() {
        let html = render_html(
            &render_table(&ProductCollection::new()),
            &RenderOptions::new().pretty(false),
        )
        .unwrap();
        assert!(html.contains("<tbody></tbody>"));
        assert_eq!(html.matches("<tr").count(), 1);
    }
}
