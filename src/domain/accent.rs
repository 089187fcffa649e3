use std::fmt;

use super::prompt_language::PromptLanguage;

/// Voice settings for the speech synthesis service: an ISO language code
/// plus the Google Translate top-level domain that selects the regional
/// accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub lang: &'static str,
    pub tld: &'static str,
}

/// User-facing accent choice. The five supported values and their
/// (language, tld) pairs form a fixed lookup table; anything else is an
/// unsupported selector and must be rejected where it enters the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentSelector {
    AmericanEnglish,
    BritishEnglish,
    AustralianEnglish,
    BangladeshiEnglish,
    Bengali,
}

impl AccentSelector {
    pub const ALL: [AccentSelector; 5] = [
        AccentSelector::AmericanEnglish,
        AccentSelector::BritishEnglish,
        AccentSelector::AustralianEnglish,
        AccentSelector::BangladeshiEnglish,
        AccentSelector::Bengali,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccentSelector::AmericanEnglish => "American English",
            AccentSelector::BritishEnglish => "British English",
            AccentSelector::AustralianEnglish => "Australian English",
            AccentSelector::BangladeshiEnglish => "Bangladeshi English",
            AccentSelector::Bengali => "Bengali",
        }
    }

    pub fn voice(&self) -> Voice {
        match self {
            AccentSelector::AmericanEnglish => Voice {
                lang: "en",
                tld: "com",
            },
            AccentSelector::BritishEnglish => Voice {
                lang: "en",
                tld: "co.uk",
            },
            AccentSelector::AustralianEnglish => Voice {
                lang: "en",
                tld: "com.au",
            },
            AccentSelector::BangladeshiEnglish => Voice {
                lang: "en",
                tld: "co.in",
            },
            AccentSelector::Bengali => Voice {
                lang: "bn",
                tld: "com",
            },
        }
    }

    /// Language the formatting instructions should be written in. Only the
    /// Bengali accent formats in Bengali; every English accent shares the
    /// English template.
    pub fn prompt_language(&self) -> PromptLanguage {
        match self {
            AccentSelector::Bengali => PromptLanguage::Bengali,
            _ => PromptLanguage::English,
        }
    }

    /// Filename offered for download, e.g. `recipe_voiceover_british_english.mp3`.
    pub fn download_filename(&self) -> String {
        format!(
            "recipe_voiceover_{}.mp3",
            self.as_str().to_lowercase().replace(' ', "_")
        )
    }
}

impl TryFrom<&str> for AccentSelector {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("Unsupported language option: {}", s))
    }
}

impl fmt::Display for AccentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
