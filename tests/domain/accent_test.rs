use voicechef::domain::AccentSelector;

#[test]
fn given_each_supported_selector_when_parsing_then_round_trips() {
    for accent in AccentSelector::ALL {
        let parsed = AccentSelector::try_from(accent.as_str()).unwrap();
        assert_eq!(parsed, accent);
    }
}

#[test]
fn given_unknown_selector_when_parsing_then_returns_error() {
    let result = AccentSelector::try_from("Klingon");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Klingon"));
}

#[test]
fn given_each_accent_when_looking_up_voice_then_matches_fixed_table() {
    let expected = [
        (AccentSelector::AmericanEnglish, "en", "com"),
        (AccentSelector::BritishEnglish, "en", "co.uk"),
        (AccentSelector::AustralianEnglish, "en", "com.au"),
        (AccentSelector::BangladeshiEnglish, "en", "co.in"),
        (AccentSelector::Bengali, "bn", "com"),
    ];
    for (accent, lang, tld) in expected {
        let voice = accent.voice();
        assert_eq!(voice.lang, lang);
        assert_eq!(voice.tld, tld);
    }
}

#[test]
fn given_accent_when_building_download_filename_then_lowercases_with_underscores() {
    assert_eq!(
        AccentSelector::BritishEnglish.download_filename(),
        "recipe_voiceover_british_english.mp3"
    );
    assert_eq!(
        AccentSelector::Bengali.download_filename(),
        "recipe_voiceover_bengali.mp3"
    );
}

#[test]
fn given_accents_when_choosing_prompt_language_then_only_bengali_formats_in_bengali() {
    use voicechef::domain::PromptLanguage;

    assert_eq!(
        AccentSelector::Bengali.prompt_language(),
        PromptLanguage::Bengali
    );
    assert_eq!(
        AccentSelector::BangladeshiEnglish.prompt_language(),
        PromptLanguage::English
    );
}
