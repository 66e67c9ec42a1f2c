pub mod json;
pub mod lexer;
pub mod limits;
pub mod path;
pub mod value;

pub use json::ContentParser;
pub use path::{resolve, Resolved};
pub use value::{ContentDocument, Value};
