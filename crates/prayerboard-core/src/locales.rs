//! Supported display languages.
//!
//! Only the code -> name table lives here; the UI string tables are the
//! presentation layer's concern. The names are what the text service
//! receives as the target-language argument.

/// Supported language codes with their display names.
pub const LOCALES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("pt", "Portuguese"),
    ("zh", "Chinese"),
    ("ko", "Korean"),
];

/// Display name for a language code, falling back to English for
/// unknown codes.
pub fn language_name(code: &str) -> &'static str {
    LOCALES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("English")
}

/// Whether translation applies for this code (everything but English).
pub fn needs_translation(code: &str) -> bool {
    code != "en"
}
