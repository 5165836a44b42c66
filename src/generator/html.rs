//! Generate HTML from the canvas.
//!
//! Two renderings exist:
//! - the builder view ([`render_canvas`]), which wraps each block with the
//!   drag handle and delete control and shows a placeholder when empty;
//! - the exported document ([`export_document`]), which contains only the
//!   block content inside a fixed page shell.

use crate::config::BuilderConfig;
use crate::editor::canvas::Canvas;
use crate::error::{EditorError, EditorResult};
use crate::model::{BlockId, PlacedBlock};

/// Stylesheet embedded in every exported document. Covers the default
/// appearance of the built-in block types.
pub const BASE_STYLESHEET: &str = r#"        /* Basic Reset */
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: sans-serif; line-height: 1.6; }
        .container { max-width: 1100px; margin: 0 auto; padding: 20px; }

        /* Component Styles */
        .block-header { background: #fff; border-bottom: 1px solid #eee; padding: 15px 0; }
        .block-header .container { display: flex; justify-content: space-between; align-items: center; }
        .block-header nav a { margin-left: 20px; text-decoration: none; color: #333; }

        .block-hero { background: #f8f9fa; padding: 80px 0; text-align: center; }
        .block-hero h1 { font-size: 3rem; margin-bottom: 20px; }
        .block-hero .btn-cta { background: #000; color: #fff; padding: 10px 20px; border: none; border-radius: 4px; margin-top: 20px; cursor: pointer; }

        .block-features { padding: 60px 0; background: #fff; }
        .feature-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 30px; }
        .feature-item { text-align: center; padding: 20px; }

        .block-content { padding: 40px 0; line-height: 1.6; }

        .block-footer { background: #333; color: #fff; padding: 40px 0; text-align: center; }
"#;

/// Concatenate block content in canvas order, one block per line group.
pub fn render_body(blocks: &[PlacedBlock]) -> String {
    let mut out = String::with_capacity(blocks.iter().map(|b| b.content.markup().len() + 1).sum());
    for block in blocks {
        out.push_str(block.content.markup());
        out.push('\n');
    }
    out
}

/// Embed `body` in the fixed document shell.
pub fn wrap_document(body: &str, config: &BuilderConfig) -> String {
    let mut out = String::with_capacity(body.len() + BASE_STYLESHEET.len() + 512);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"{}\">\n",
        html_escape::encode_double_quoted_attribute(&config.lang)
    ));
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!(
        "    <title>{}</title>\n",
        html_escape::encode_text(&config.title)
    ));
    out.push_str("    <style>\n");
    out.push_str(BASE_STYLESHEET);
    out.push_str("    </style>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str(body);
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

/// Export the canvas as a standalone HTML document.
///
/// Fails with [`EditorError::EmptyCanvas`] when there is nothing to export.
#[tracing::instrument(skip_all, fields(blocks = canvas.len()))]
pub fn export_document(canvas: &Canvas, config: &BuilderConfig) -> EditorResult<String> {
    if canvas.is_empty() {
        return Err(EditorError::EmptyCanvas);
    }
    let html = wrap_document(&render_body(canvas.blocks()), config);
    tracing::debug!(bytes = html.len(), "exported document");
    Ok(html)
}

/// Render the export document for previewing. Unlike [`export_document`] an
/// empty canvas yields the shell with an empty body.
pub fn preview_document(canvas: &Canvas, config: &BuilderConfig) -> String {
    wrap_document(&render_body(canvas.blocks()), config)
}

/// Render the builder view of the canvas.
///
/// `dragging` marks the block currently being moved.
pub fn render_canvas(canvas: &Canvas, dragging: Option<BlockId>, config: &BuilderConfig) -> String {
    let mut out = String::new();
    out.push_str("<div id=\"canvas\" class=\"canvas\">\n");
    if canvas.is_empty() {
        out.push_str(&format!(
            "<div class=\"empty-state\"><p>{}</p></div>\n",
            html_escape::encode_text(&config.empty_message)
        ));
    }
    for block in canvas.blocks() {
        let class = if Some(block.id) == dragging {
            "canvas-block dragging"
        } else {
            "canvas-block"
        };
        out.push_str(&format!(
            "<div class=\"{}\" draggable=\"true\" data-block-id=\"{}\" data-block-type=\"{}\">\n",
            class,
            block.id.0,
            html_escape::encode_double_quoted_attribute(block.block_type.as_str())
        ));
        out.push_str("<div class=\"block-actions\"><button class=\"action-btn\" data-action=\"delete\">&times;</button></div>\n");
        out.push_str(block.content.markup());
        out.push_str("\n</div>\n");
    }
    out.push_str("</div>\n");
    out
}
