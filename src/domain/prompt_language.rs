use std::fmt;

/// Language of the formatting instructions sent to the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLanguage {
    English,
    Bengali,
}

impl PromptLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptLanguage::English => "English",
            PromptLanguage::Bengali => "Bengali",
        }
    }
}

impl fmt::Display for PromptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
