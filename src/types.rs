use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseRow {
    /// Locale code, e.g. `"en"`.
    pub locale: String,
    /// Locale display name, e.g. `"English"`.
    pub name: String,
    pub phrase: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    /// Event time as RFC 3339.
    pub event: String,
    /// Reference time as RFC 3339.
    pub reference: String,
    pub rows: Vec<PhraseRow>,
}
