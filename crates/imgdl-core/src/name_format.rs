//! Filename normalization: strip the Spanish accents and tildes, then lowercase.

/// Accented letters and their plain replacements. Anything not listed passes through.
const ACCENT_MAP: &[(char, char)] = &[
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ú', 'U'),
    ('ñ', 'n'),
    ('Ñ', 'N'),
];

fn strip_accent(c: char) -> char {
    ACCENT_MAP
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Normalizes a filename: maps accented vowels and `ñ`/`Ñ` to their plain
/// letters, then lowercases the whole string.
///
/// Total and pure; the empty string maps to itself.
///
/// # Examples
///
/// - `format_name("Café.PNG")` → `"cafe.png"`
/// - `format_name("ÑOÑO")` → `"nono"`
pub fn format_name(name: &str) -> String {
    name.chars().map(strip_accent).collect::<String>().to_lowercase()
}
