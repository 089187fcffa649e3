use std::sync::LazyLock;

use regex::{Captures, Regex};

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*{1,2}|_{1,2}").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#+ ").unwrap());
static STEP_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\.\s*").unwrap());

const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Flatten structured recipe text into a single speech-ready line.
///
/// Emphasis markers and heading markers are stripped character-class-wise,
/// without balance checking. A step number such as `3.` becomes
/// `Step three: ` (spelled out up to ten, digits beyond), and all whitespace
/// runs collapse to single spaces. Pure and deterministic.
pub fn clean_text_for_voiceover(text: &str) -> String {
    let no_emphasis = EMPHASIS.replace_all(text, "");
    let no_headings = HEADING.replace_all(&no_emphasis, "");

    let spoken_steps = STEP_NUMBER.replace_all(&no_headings, |caps: &Captures<'_>| {
        spell_step(&caps[1])
    });

    spoken_steps
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn spell_step(digits: &str) -> String {
    match digits.parse::<usize>() {
        Ok(n) if (1..=NUMBER_WORDS.len()).contains(&n) => {
            format!("Step {}: ", NUMBER_WORDS[n - 1])
        }
        _ => format!("Step {}: ", digits),
    }
}
