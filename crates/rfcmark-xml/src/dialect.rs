//! Target xml2rfc vocabulary version.

use std::fmt;

/// xml2rfc vocabulary the output is written for.
///
/// Version 2 carries rendering toggles as `<?rfc ...?>` processing
/// instructions; version 3 moves them to attributes on the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8"))]
pub enum Dialect {
    V2,
    #[default]
    V3,
}

impl Dialect {
    /// Numeric version as written in configuration.
    #[must_use]
    pub fn version(self) -> u8 {
        match self {
            Dialect::V2 => 2,
            Dialect::V3 => 3,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version())
    }
}

/// Requested xml2rfc version is neither 2 nor 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported xml2rfc version {0}, expected 2 or 3")]
pub struct UnsupportedDialect(pub u8);

impl TryFrom<u8> for Dialect {
    type Error = UnsupportedDialect;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            2 => Ok(Dialect::V2),
            3 => Ok(Dialect::V3),
            other => Err(UnsupportedDialect(other)),
        }
    }
}
