use crate::{
    content::{json::ContentParser, value::ContentDocument},
    error::{IOError, RenderError, RenderErrorKind, Result},
    markup::{FormatConfig, Formatter, HtmlFormatter, Node, TemplateParser},
};
use std::fs;

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            RenderError::new(RenderErrorKind::IO(IOError::FileNotFound(path.to_string())))
        }
        std::io::ErrorKind::PermissionDenied => RenderError::new(RenderErrorKind::IO(
            IOError::PermissionDenied(path.to_string()),
        )),
        _ => RenderError::new(RenderErrorKind::IO(IOError::ReadError(e.to_string()))),
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => RenderError::new(RenderErrorKind::IO(
            IOError::PermissionDenied(path.to_string()),
        )),
        _ => RenderError::new(RenderErrorKind::IO(IOError::WriteError(e.to_string()))),
    })
}

pub fn parse_content(input: &str) -> Result<ContentDocument> {
    let mut parser = ContentParser::new(input)?;
    ContentDocument::new(parser.parse()?)
}

pub fn parse_template(input: &str) -> Result<Vec<Node>> {
    let mut parser = TemplateParser::new(input)?;
    parser.parse()
}

pub fn render_html(page: &[Node]) -> Result<String> {
    HtmlFormatter.format(page, &FormatConfig::default())
}

pub fn render_html_with(page: &[Node], config: &FormatConfig) -> Result<String> {
    HtmlFormatter.format(page, config)
}
