use std::fmt;

use crate::{Error, Result};

/// Text encoding used to turn captured bytes back into a string.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Encoding {
    /// UTF-8. The default.
    #[default]
    Utf8,

    /// ISO-8859-1: every byte is the code point of the same value. Never fails.
    Latin1,

    /// 7-bit US-ASCII. Bytes above 0x7F are rejected.
    Ascii,
}

impl Encoding {
    /// Decodes `bytes` into a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] with the offset of the first offending byte if `bytes` is not
    /// valid in this encoding.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes).map_err(|e| Error::Decode {
                encoding: self,
                offset: e.utf8_error().valid_up_to(),
            }),
            Self::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(Error::Decode {
                    encoding: self,
                    offset,
                }),
                None => Ok(bytes.into_iter().map(char::from).collect()),
            },
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
            Self::Ascii => "US-ASCII",
        })
    }
}
