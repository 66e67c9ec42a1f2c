/// Full demo content document, matching the shipped portfolio configuration
pub const SITE_JSON: &str = include_str!("../../tests/input/site.json");

/// Full demo template with `data-config` annotations
pub const TEMPLATE_HTML: &str = include_str!("../../tests/input/index.html");

pub const INVALID_CONTENT_SAMPLES: [(&str, &str); 5] = [
    ("{", "Incomplete map"),
    ("[", "Incomplete array"),
    ("}", "Unexpected closing brace"),
    ("{\"a\": 1,}", "Trailing comma"),
    ("invalid", "Invalid token"),
];

pub const INVALID_TEMPLATE_SAMPLES: [(&str, &str); 4] = [
    ("<div>", "Unterminated element"),
    ("<div></span>", "Mismatched close tag"),
    ("<div class=>", "Missing attribute value"),
    ("<!-- unterminated", "Unterminated comment"),
];
