use std::sync::LazyLock;

use regex::Regex;

static MUNICIPALITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmunicipality\b").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Known discrepancies between OSM-style source names and the authoritative
/// village spellings. Keys are the stripped source names, matched exactly.
const CORRECTIONS: &[(&str, &str)] = &[
    ("Agana Heights", "Agaña Heights"),
    ("Agat", "Hågat"),
    ("Asan", "Asan-Maina"),
    ("Hagatna", "Hagåtña"),
    ("Inarajan", "Inalåhan"),
    ("Merizo", "Malesso'"),
    ("Santa Rita", "Sånta Rita-Sumai"),
    ("Talofofo", "Talo'fo'fo"),
    ("Tamuning", "Tamuning-Tumon-Harmon"),
    ("Umatac", "Humåtak"),
];

/// Derive the canonical village id (slug) from a raw source name.
///
/// Strips the standalone word "Municipality", drops apostrophes, folds the
/// diacritics that occur in Guam village names, lowercases, and joins the
/// remaining words with hyphens. The result is lowercase ASCII with hyphens
/// for the handled inputs, but no further punctuation is escaped.
pub fn slug(raw: &str) -> String {
    let stripped = MUNICIPALITY.replace_all(raw, "");
    let folded: String = stripped
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(fold_diacritic)
        .collect();
    let lowered = folded.trim().to_lowercase();
    WHITESPACE.replace_all(&lowered, "-").into_owned()
}

/// Derive the display name from a raw source name: strip "Municipality",
/// collapse whitespace, then apply the corrections table (exact match).
pub fn display_name(raw: &str) -> String {
    let stripped = MUNICIPALITY.replace_all(raw, "");
    let collapsed = WHITESPACE.replace_all(stripped.trim(), " ").into_owned();
    match CORRECTIONS.iter().find(|(from, _)| *from == collapsed) {
        Some((_, to)) => (*to).to_owned(),
        None => collapsed,
    }
}

/// Fold the accented letters appearing in Guam village names to their base
/// letter. Deliberately partial: this is not a general transliteration.
fn fold_diacritic(c: char) -> char {
    match c {
        'å' | 'á' | 'à' | 'â' | 'ä' => 'a',
        'Å' | 'Á' | 'À' | 'Â' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        _ => c,
    }
}
