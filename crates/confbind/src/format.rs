//! Text formats used to map records to and from config files.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{CompactFormatter, PrettyFormatter};
use thiserror::Error;

/// Indentation used by [`JsonFormat::pretty`].
const DEFAULT_INDENT: &str = "  ";

/// Errors raised while converting between a record and config text.
#[derive(Debug, Error)]
pub enum FormatError {
    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON5 decoding failed.
    #[error("json5 error: {0}")]
    Json5(#[from] json5::Error),
    /// Config text was not valid UTF-8, either as read from a file or as
    /// produced by the encoder.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Converts records to and from the text stored in a config file.
///
/// Field inclusion follows the record's serde attributes: `#[serde(default)]`
/// keeps the default for fields missing from the text and
/// `#[serde(skip)]` keeps a field out of the file entirely.
pub trait ConfigFormat: Send + Sync {
    /// Serialize a record to config text.
    fn to_text<T: Serialize>(&self, value: &T) -> Result<String, FormatError>;
    /// Deserialize config text into a record.
    fn from_text<T: DeserializeOwned>(&self, text: &str) -> Result<T, FormatError>;
}

/// Strict JSON, pretty printed by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormat {
    /// Indent for each nesting level; `None` writes compact single-line JSON.
    indent: Option<String>,
    trailing_newline: bool,
}

impl JsonFormat {
    /// Multi-line JSON indented with two spaces.
    pub fn pretty() -> Self {
        Self {
            indent: Some(DEFAULT_INDENT.to_string()),
            trailing_newline: false,
        }
    }

    /// Single-line JSON with no insignificant whitespace.
    pub fn compact() -> Self {
        Self {
            indent: None,
            trailing_newline: false,
        }
    }

    /// Multi-line JSON using `indent` for each nesting level.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: Some(indent.into()),
            trailing_newline: false,
        }
    }

    /// End the written text with a newline.
    pub fn with_trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String, FormatError> {
        let mut buf = Vec::new();
        match &self.indent {
            Some(indent) => {
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
                value.serialize(&mut serializer)?;
            }
            None => {
                let mut serializer =
                    serde_json::Serializer::with_formatter(&mut buf, CompactFormatter);
                value.serialize(&mut serializer)?;
            }
        }
        if self.trailing_newline {
            buf.push(b'\n');
        }
        Ok(String::from_utf8(buf)?)
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::pretty()
    }
}

impl ConfigFormat for JsonFormat {
    fn to_text<T: Serialize>(&self, value: &T) -> Result<String, FormatError> {
        self.encode(value)
    }

    fn from_text<T: DeserializeOwned>(&self, text: &str) -> Result<T, FormatError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Reads JSON5 (comments, unquoted keys, trailing commas) and writes JSON.
///
/// A hand-edited JSON5 file is rewritten as plain JSON on the first save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Json5Format {
    output: JsonFormat,
}

impl Json5Format {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `output` when writing the file back.
    pub fn with_output(output: JsonFormat) -> Self {
        Self { output }
    }
}

impl ConfigFormat for Json5Format {
    fn to_text<T: Serialize>(&self, value: &T) -> Result<String, FormatError> {
        self.output.encode(value)
    }

    fn from_text<T: DeserializeOwned>(&self, text: &str) -> Result<T, FormatError> {
        Ok(json5::from_str(text)?)
    }
}
