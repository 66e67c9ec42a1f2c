//! folio: a static portfolio site renderer
//!
//! This crate provides functionality to:
//! - Parse a JSON content document describing page copy
//! - Parse an HTML template annotated with `data-config` paths
//! - Bind resolved content into the template (navigation, skill tags,
//!   project cards, contact methods, plain text)
//! - Update the footer copyright and links
//! - Serialize the bound page back to HTML
//!
//! # Examples
//! ```no_run
//! use folio::{render_page, Result};
//!
//! fn example() -> Result<()> {
//!     let html = render_page("site.json", "index.html")?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```

use chrono::Datelike;
use tracing::{debug, info, instrument};

pub mod bind;
pub mod content;
pub mod error;
pub mod markup;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use bind::{update_footer, Binder, Section, CONFIG_ATTR};
pub use content::{resolve, ContentDocument, ContentParser, Resolved, Value};
pub use error::{
    IOError, LexicalError, RenderError, RenderErrorKind, Result, SecurityError, SemanticError,
    SyntaxError,
};
pub use markup::{Element, FormatConfig, Formatter, HtmlFormatter, Node, TemplateParser};

pub use content::value::values_equal;

/// Renders a complete page: content file + template file in, HTML out.
///
/// The footer year comes from the host clock; tests that need a fixed year
/// drive [`bind::update_footer`] directly.
#[instrument]
pub fn render_page(content_path: &str, template_path: &str) -> Result<String> {
    debug!("Reading content document: {}", content_path);
    let content = utils::read_file(content_path)?;
    let doc = utils::parse_content(&content)?;

    debug!("Reading template: {}", template_path);
    let template = utils::read_file(template_path)?;
    let mut page = utils::parse_template(&template)?;

    info!("Binding content into template");
    Binder::new(&doc).bind(&mut page);
    bind::update_footer(&mut page, &doc, chrono::Local::now().year());

    debug!("Binding completed, serializing");
    utils::render_html(&page)
}
