use std::fmt;

/// Recipe text as returned by the completion service, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecipe(String);

impl FormattedRecipe {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FormattedRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
