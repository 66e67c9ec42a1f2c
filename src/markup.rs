pub mod node;
pub mod serialize;
pub mod template;

pub use node::{find_element_mut, Element, Node};
pub use serialize::{FormatConfig, Formatter, HtmlFormatter};
pub use template::TemplateParser;
