//! Marker literals emitted by the documentation generator
//!
//! These strings are the implicit contract with the generator. They are matched
//! literally, including the leading indentation on the class end marker and the
//! method markers.

/// Start of a class directive. Followed by a space and the class name.
pub const CLASS_MARKER: &str = ".. py:class::";
/// A class directive nested one level, which ends the previous class block.
pub const CLASS_END_MARKER: &str = "  .. py:class::";
/// Method directive. Followed by a space, the method name and `(`.
pub const METHOD_MARKER: &str = "  .. py:method::";
pub const REQUEST_SYNTAX_MARKER: &str = "**Request Syntax**";
pub const RESPONSE_SYNTAX_MARKER: &str = "**Response Syntax**";
pub const RESPONSE_STRUCTURE_MARKER: &str = "**Response Structure**";
/// Field list entry for a request parameter type.
pub const TYPE_MARKER: &str = ":type";
/// Bullet opening a response structure entry.
pub const RESPONSE_PARAM_MARKER: &str = "- **";

/// The kinds of block that can be cut from a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'n> {
    Class(&'n str),
    Method(&'n str),
    RequestSyntax,
    ResponseSyntax,
    RequestParameter(&'n str),
    ResponseParameter(&'n str),
}

impl<'n> BlockKind<'n> {
    /// All labels accepted by [BlockKind::from_label]
    pub const LABELS: [&'static str; 6] = [
        "class",
        "method",
        "request-syntax",
        "response-syntax",
        "request-param",
        "response-param",
    ];

    /// Build a kind from its label. Named kinds need a name; the syntax
    /// sections ignore it.
    pub fn from_label(label: &str, name: Option<&'n str>) -> Option<Self> {
        match (label, name) {
            ("class", Some(name)) => Some(BlockKind::Class(name)),
            ("method", Some(name)) => Some(BlockKind::Method(name)),
            ("request-syntax", _) => Some(BlockKind::RequestSyntax),
            ("response-syntax", _) => Some(BlockKind::ResponseSyntax),
            ("request-param", Some(name)) => Some(BlockKind::RequestParameter(name)),
            ("response-param", Some(name)) => Some(BlockKind::ResponseParameter(name)),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Class(_) => "class",
            BlockKind::Method(_) => "method",
            BlockKind::RequestSyntax => "request-syntax",
            BlockKind::ResponseSyntax => "response-syntax",
            BlockKind::RequestParameter(_) => "request-param",
            BlockKind::ResponseParameter(_) => "response-param",
        }
    }

    /// The class, method or parameter name, if this kind has one
    pub fn name(&self) -> Option<&'n str> {
        match *self {
            BlockKind::Class(name)
            | BlockKind::Method(name)
            | BlockKind::RequestParameter(name)
            | BlockKind::ResponseParameter(name) => Some(name),
            BlockKind::RequestSyntax | BlockKind::ResponseSyntax => None,
        }
    }

    /// The literal that opens this block
    pub fn start_marker(&self) -> String {
        match self {
            BlockKind::Class(name) => format!("{} {}", CLASS_MARKER, name),
            BlockKind::Method(name) => format!("{} {}(", METHOD_MARKER, name),
            BlockKind::RequestSyntax => REQUEST_SYNTAX_MARKER.to_string(),
            BlockKind::ResponseSyntax => RESPONSE_SYNTAX_MARKER.to_string(),
            BlockKind::RequestParameter(name) => format!("{} {}:", TYPE_MARKER, name),
            BlockKind::ResponseParameter(name) => format!("{}{}**", RESPONSE_PARAM_MARKER, name),
        }
    }

    /// The literal whose next occurrence closes this block
    pub fn end_marker(&self) -> &'static str {
        match self {
            BlockKind::Class(_) => CLASS_END_MARKER,
            BlockKind::Method(_) => METHOD_MARKER,
            BlockKind::RequestSyntax | BlockKind::RequestParameter(_) => TYPE_MARKER,
            BlockKind::ResponseSyntax => RESPONSE_STRUCTURE_MARKER,
            BlockKind::ResponseParameter(_) => RESPONSE_PARAM_MARKER,
        }
    }

    /// A literal that must appear somewhere in the document before the start
    /// marker is even searched for.
    pub fn required_section(&self) -> Option<&'static str> {
        match self {
            BlockKind::ResponseParameter(_) => Some(RESPONSE_STRUCTURE_MARKER),
            _ => None,
        }
    }
}
