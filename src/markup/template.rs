//! HTML template parser.
//!
//! Parses the page template into a [`Node`] tree so the binding engine can
//! locate `data-config` targets. This handles the practical subset templates
//! are written in: doctype, comments, elements with quoted or bare
//! attributes, void elements, and raw-text `script`/`style` bodies. It is
//! not a general-purpose HTML5 parser and makes no recovery attempts;
//! malformed markup is a syntax error.

use super::node::{is_raw_text_tag, is_void_tag, Element, Node};
use crate::content::limits::{DocumentLimits, ParsingContext};
use crate::error::{LexicalError, RenderError, RenderErrorKind, Result, SyntaxError};

#[derive(Debug)]
pub struct TemplateParser {
    /// Input text as a character array
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Current character being processed
    current_char: Option<char>,
    /// Limits applied while descending
    limits: DocumentLimits,
    /// Depth tracking
    context: ParsingContext,
    /// Location tracking for error messages
    line: usize,
    column: usize,
}

impl TemplateParser {
    /// Creates a new parser over the given template text
    pub fn new(input: &str) -> Result<Self> {
        let limits = DocumentLimits::default();
        limits.validate_input_size(input.len())?;

        let input_vec: Vec<char> = input.chars().collect();
        let current_char = input_vec.first().copied();
        Ok(Self {
            input: input_vec,
            position: 0,
            current_char,
            limits,
            context: ParsingContext::new(),
            line: 1,
            column: 1,
        })
    }

    /// Parses the full template into top-level nodes
    pub fn parse(&mut self) -> Result<Vec<Node>> {
        self.parse_nodes(None)
    }

    fn advance(&mut self) {
        if let Some(c) = self.current_char {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Whether the upcoming input matches `expected` exactly
    fn lookahead(&self, expected: &str) -> bool {
        self.input
            .get(self.position..)
            .is_some_and(|rest| rest.iter().copied().take(expected.len()).eq(expected.chars()))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn error_here(&self, kind: RenderErrorKind) -> RenderError {
        RenderError::new(kind).with_location(self.line, self.column)
    }

    /// Parses sibling nodes until EOF or the close tag of `enclosing`
    fn parse_nodes(&mut self, enclosing: Option<&str>) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        loop {
            match self.current_char {
                None => {
                    if let Some(open) = enclosing {
                        return Err(self.error_here(RenderErrorKind::Syntax(
                            SyntaxError::UnterminatedTag(open.to_string()),
                        )));
                    }
                    return Ok(nodes);
                }
                Some('<') => {
                    if self.lookahead("<!--") {
                        nodes.push(self.parse_comment()?);
                    } else if self.lookahead("<!") {
                        nodes.push(self.parse_doctype()?);
                    } else if self.lookahead("</") {
                        let found = self.parse_close_tag()?;
                        return match enclosing {
                            Some(open) if open.eq_ignore_ascii_case(&found) => Ok(nodes),
                            _ => Err(self.error_here(RenderErrorKind::Syntax(
                                SyntaxError::MismatchedCloseTag {
                                    expected: enclosing.unwrap_or_default().to_string(),
                                    found,
                                },
                            ))),
                        };
                    } else {
                        nodes.push(self.parse_element()?);
                    }
                }
                Some(_) => {
                    let text = self.read_text()?;
                    nodes.push(Node::Text(text));
                }
            }
        }
    }

    /// Reads raw text up to the next tag, decoding entities
    fn read_text(&mut self) -> Result<String> {
        let mut raw = String::new();
        while let Some(c) = self.current_char {
            if c == '<' {
                break;
            }
            raw.push(c);
            self.advance();
        }
        self.limits.validate_string(&raw)?;
        Ok(decode_entities(&raw))
    }

    fn parse_comment(&mut self) -> Result<Node> {
        self.advance_by(4); // consume '<!--'
        let mut body = String::new();
        loop {
            if self.current_char.is_none() {
                return Err(
                    self.error_here(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
                );
            }
            if self.lookahead("-->") {
                self.advance_by(3);
                return Ok(Node::Comment(body));
            }
            if let Some(c) = self.current_char {
                body.push(c);
            }
            self.advance();
        }
    }

    fn parse_doctype(&mut self) -> Result<Node> {
        self.advance_by(2); // consume '<!'
        let mut body = String::new();
        loop {
            match self.current_char {
                None => {
                    return Err(
                        self.error_here(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
                    )
                }
                Some('>') => {
                    self.advance();
                    return Ok(Node::Doctype(body));
                }
                Some(c) => {
                    body.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Consumes `</name>` and returns the tag name
    fn parse_close_tag(&mut self) -> Result<String> {
        self.advance_by(2); // consume '</'
        let name = self.read_tag_name()?;
        self.skip_whitespace();
        if self.current_char != Some('>') {
            return Err(self.error_here(RenderErrorKind::Syntax(SyntaxError::UnterminatedTag(
                name,
            ))));
        }
        self.advance();
        Ok(name)
    }

    fn parse_element(&mut self) -> Result<Node> {
        self.advance(); // consume '<'
        let tag = self.read_tag_name()?;
        let mut element = Element::new(tag.clone());

        // Attributes up to '>' or '/>'
        let self_closed = loop {
            self.skip_whitespace();
            match self.current_char {
                None => {
                    return Err(self.error_here(RenderErrorKind::Syntax(
                        SyntaxError::UnterminatedTag(tag.clone()),
                    )))
                }
                Some('>') => {
                    self.advance();
                    break false;
                }
                Some('/') => {
                    self.advance();
                    if self.current_char == Some('>') {
                        self.advance();
                        break true;
                    }
                    return Err(self.error_here(RenderErrorKind::Syntax(
                        SyntaxError::UnexpectedCharacter('/'),
                    )));
                }
                Some(_) => {
                    let (name, value) = self.parse_attribute()?;
                    element.attrs.push((name, value));
                }
            }
        };

        if self_closed || is_void_tag(&element.tag) {
            return Ok(Node::Element(element));
        }

        if is_raw_text_tag(&element.tag) {
            let raw = self.read_raw_text(&element.tag)?;
            if !raw.is_empty() {
                element.children.push(Node::Text(raw));
            }
            return Ok(Node::Element(element));
        }

        self.context.enter_nested(&self.limits)?;
        element.children = self.parse_nodes(Some(&element.tag))?;
        self.context.exit_nested();
        Ok(Node::Element(element))
    }

    fn read_tag_name(&mut self) -> Result<String> {
        let mut name = String::new();
        while let Some(c) = self.current_char {
            if c.is_ascii_alphanumeric() || c == '-' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if name.is_empty() {
            let found = self.current_char.unwrap_or(' ');
            return Err(self.error_here(RenderErrorKind::Syntax(
                SyntaxError::UnexpectedCharacter(found),
            )));
        }
        Ok(name)
    }

    /// Parses one attribute: `name`, `name=bare`, `name="quoted"`,
    /// `name='quoted'`
    fn parse_attribute(&mut self) -> Result<(String, String)> {
        let mut name = String::new();
        while let Some(c) = self.current_char {
            if c.is_whitespace() || c == '=' || c == '>' || c == '/' {
                break;
            }
            name.push(c);
            self.advance();
        }
        if name.is_empty() {
            let found = self.current_char.unwrap_or(' ');
            return Err(self.error_here(RenderErrorKind::Syntax(SyntaxError::InvalidAttribute(
                found.to_string(),
            ))));
        }

        self.skip_whitespace();
        if self.current_char != Some('=') {
            // Boolean attribute
            return Ok((name, String::new()));
        }
        self.advance(); // consume '='
        self.skip_whitespace();

        let value = match self.current_char {
            Some(quote @ ('"' | '\'')) => {
                self.advance();
                let mut raw = String::new();
                loop {
                    match self.current_char {
                        None => {
                            return Err(self.error_here(RenderErrorKind::Syntax(
                                SyntaxError::InvalidAttribute(name.clone()),
                            )))
                        }
                        Some(c) if c == quote => {
                            self.advance();
                            break;
                        }
                        Some(c) => {
                            raw.push(c);
                            self.advance();
                        }
                    }
                }
                decode_entities(&raw)
            }
            Some(_) => {
                let mut raw = String::new();
                while let Some(c) = self.current_char {
                    if c.is_whitespace() || c == '>' {
                        break;
                    }
                    raw.push(c);
                    self.advance();
                }
                if raw.is_empty() {
                    return Err(self.error_here(RenderErrorKind::Syntax(
                        SyntaxError::InvalidAttribute(name.clone()),
                    )));
                }
                decode_entities(&raw)
            }
            None => {
                return Err(self.error_here(RenderErrorKind::Syntax(
                    SyntaxError::InvalidAttribute(name.clone()),
                )))
            }
        };

        self.limits.validate_string(&value)?;
        Ok((name, value))
    }

    /// Reads verbatim text until the close tag of a raw-text element
    fn read_raw_text(&mut self, tag: &str) -> Result<String> {
        let close_lower = format!("</{}", tag.to_ascii_lowercase());
        let mut raw = String::new();

        loop {
            if self.current_char.is_none() {
                return Err(self.error_here(RenderErrorKind::Syntax(
                    SyntaxError::UnterminatedTag(tag.to_string()),
                )));
            }
            let upcoming: String = self
                .input
                .get(self.position..)
                .map(|rest| {
                    rest.iter()
                        .take(close_lower.len())
                        .collect::<String>()
                        .to_ascii_lowercase()
                })
                .unwrap_or_default();
            if upcoming == close_lower {
                self.advance_by(close_lower.len());
                self.skip_whitespace();
                if self.current_char != Some('>') {
                    return Err(self.error_here(RenderErrorKind::Syntax(
                        SyntaxError::UnterminatedTag(tag.to_string()),
                    )));
                }
                self.advance();
                return Ok(raw);
            }
            if let Some(c) = self.current_char {
                raw.push(c);
            }
            self.advance();
        }
    }
}

/// Decodes the handful of entities templates actually use; unknown entities
/// pass through verbatim
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        let (before, after) = rest.split_at(amp);
        out.push_str(before);
        match after.find(';') {
            Some(semi) if semi <= 8 => {
                let entity = after.get(1..semi).unwrap_or_default();
                match decode_entity(entity) {
                    Some(c) => {
                        out.push(c);
                        rest = after.get(semi + 1..).unwrap_or_default();
                    }
                    None => {
                        out.push('&');
                        rest = after.get(1..).unwrap_or_default();
                    }
                }
            }
            _ => {
                out.push('&');
                rest = after.get(1..).unwrap_or_default();
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        _ => {
            let code = entity.strip_prefix("#x").map_or_else(
                || entity.strip_prefix('#').and_then(|d| d.parse::<u32>().ok()),
                |hex| u32::from_str_radix(hex, 16).ok(),
            )?;
            char::from_u32(code)
        }
    }
}
