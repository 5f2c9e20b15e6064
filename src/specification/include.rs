use std::fmt;

/// Names a related field that a query would eagerly load.
///
/// Includes are carried as metadata only. Nothing in this crate joins or loads
/// related data, so an include never changes which entities match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Include {
    path: String,
}

impl Include {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Dotted path of the related field, e.g. `"supplier.address"`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for Include {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Include {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
