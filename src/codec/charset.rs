use core::fmt;
use core::str::FromStr;

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// A resolved character set used to transcode query tokens.
///
/// Resolution follows the WHATWG Encoding Standard label table, so `"utf8"`,
/// `"UTF-8"` and `" utf-8 "` all name the same charset, and `"gbk"`/`"gb2312"`
/// both resolve to GBK.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// Resolve a charset label.
    pub fn for_label(label: &str) -> Result<Self> {
        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => Ok(Self(encoding)),
            None => {
                tracing::debug!(label, "unsupported charset label");
                Err(Error::UnsupportedCharset {
                    label: label.to_string(),
                })
            }
        }
    }

    pub fn utf_8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    pub fn gbk() -> Self {
        Self(encoding_rs::GBK)
    }

    /// Canonical name, e.g. `UTF-8` or `GBK`.
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    pub fn encoding(self) -> &'static Encoding {
        self.0
    }
}

impl From<&'static Encoding> for Charset {
    fn from(encoding: &'static Encoding) -> Self {
        Self(encoding)
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::for_label(s)
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
