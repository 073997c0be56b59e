use isolang::Language;

/// Language utilities for target-language handling
///
/// Target languages are free-form strings passed through to the model, so
/// nothing here validates or rejects. ISO 639-1 (2-letter) and ISO 639-3
/// (3-letter) codes are resolved to English language names for prompts;
/// anything else is used verbatim.
/// Languages commonly requested, shown in the CLI help text. Advisory only.
pub const SUGGESTED_LANGUAGES: [(&str, &str); 10] = [
    ("fr", "French"),
    ("es", "Spanish"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
];

/// Resolve a language argument to the name used in prompts
///
/// `fr` and `fra` both resolve to `French`; an unrecognized string such as
/// `Brazilian Portuguese` is returned unchanged.
pub fn resolve_language_name(language: &str) -> String {
    let normalized = language.trim();

    if let Some(name) = lookup_code(normalized) {
        return name;
    }

    normalized.to_string()
}

/// Look up an ISO 639-1 or ISO 639-3 code, returning the English name
fn lookup_code(code: &str) -> Option<String> {
    let lowercase = code.to_lowercase();

    match lowercase.len() {
        2 => Language::from_639_1(&lowercase).map(|lang| lang.to_name().to_string()),
        3 => Language::from_639_3(&lowercase).map(|lang| lang.to_name().to_string()),
        _ => None,
    }
}
