mod comparison;
mod fixtures;
mod helpers;

pub use comparison::{
    assert_values_equal, collect_elements, compare_values, element_text, first_element,
};
pub use fixtures::{INVALID_CONTENT_SAMPLES, INVALID_TEMPLATE_SAMPLES, SITE_JSON, TEMPLATE_HTML};
pub use helpers::tmp_file_path;

// Re-export common test types/traits
pub use crate::{
    bind::{render, update_footer, Binder, Section, CONFIG_ATTR},
    content::{
        json::ContentParser,
        limits::{DocumentLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_MAP_ENTRIES, DEFAULT_MAX_SIZE},
        path::{resolve, Resolved},
        value::{values_equal, ContentDocument, Value},
    },
    error::{
        IOError, LexicalError, RenderError, RenderErrorKind, Result, SecurityError, SemanticError,
        SyntaxError,
    },
    markup::{
        node::{find_element, find_element_mut},
        Element, FormatConfig, Formatter, HtmlFormatter, Node, TemplateParser,
    },
    render_page,
    utils::{parse_content, parse_template, read_file, render_html, render_html_with, write_file},
};
