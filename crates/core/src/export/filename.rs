//! Artifact naming.

use chrono::NaiveDate;

use crate::simulation::SimulationResult;

/// Slug used when the client name is missing or has no usable characters.
pub const FALLBACK_SLUG: &str = "cliente";

const FILENAME_PREFIX: &str = "simulacion-credito";

/// Inputs that decide the artifact filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingContext {
    /// Client name as entered, if any.
    pub client_name: Option<String>,
    /// Generation date.
    pub date: NaiveDate,
}

impl NamingContext {
    /// Creates a naming context.
    #[must_use]
    pub fn new(client_name: Option<String>, date: NaiveDate) -> Self {
        Self { client_name, date }
    }

    /// Takes the client name from a simulation result.
    #[must_use]
    pub fn from_result(result: &SimulationResult, date: NaiveDate) -> Self {
        Self::new(result.client_name().map(str::to_string), date)
    }

    /// `simulacion-credito-<slug>-<YYYY-MM-DD>.pdf`
    #[must_use]
    pub fn filename(&self) -> String {
        report_filename(self.client_name.as_deref(), self.date)
    }
}

/// Builds the report filename.
#[must_use]
pub fn report_filename(client_name: Option<&str>, date: NaiveDate) -> String {
    format!(
        "{FILENAME_PREFIX}-{}-{}.pdf",
        slugify(client_name.unwrap_or_default()),
        date.format("%Y-%m-%d")
    )
}

/// Lowercases, strips diacritics, joins words with single hyphens and drops
/// everything that is not an ASCII letter, digit or hyphen.
///
/// Returns `cliente` when nothing is left.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        let c = fold_diacritic(c);
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
