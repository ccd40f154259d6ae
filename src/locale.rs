//! Language code handling for the editor's `language` option.

/// Turn a language code (`en-us`) into a locale name (`en_US`).
///
/// Two-letter regions are upper-cased, longer ones (scripts) title-cased.
///
/// ```
/// use tinymce_richtext::locale::to_locale;
///
/// assert_eq!(to_locale("pt-br"), "pt_BR");
/// assert_eq!(to_locale("sr-latn"), "sr_Latn");
/// assert_eq!(to_locale("fr"), "fr");
/// ```
pub fn to_locale(language: &str) -> String {
    let lower = language.to_lowercase();
    let Some((lang, country)) = lower.split_once('-') else {
        return lower;
    };
    let (country, tail) = match country.split_once('-') {
        Some((country, tail)) => (country, Some(tail)),
        None => (country, None),
    };
    let mut country = if country.len() > 2 {
        title_case(country)
    } else {
        country.to_uppercase()
    };
    if let Some(tail) = tail {
        country.push('-');
        country.push_str(tail);
    }
    format!("{lang}_{country}")
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The language name the editor runtime expects.
///
/// The editor ships a single English pack, so a missing language and every
/// regional English variant collapse to `en`.
pub fn editor_language(language: Option<&str>) -> String {
    let locale = match language.map(str::trim) {
        Some(l) if !l.is_empty() => to_locale(&l.replace('_', "-")),
        _ => return "en".to_string(),
    };
    if locale == "en" || locale.starts_with("en_") {
        "en".to_string()
    } else {
        locale
    }
}
