use crate::ReportData;

/// Serialize the report as a single JSON object.
#[must_use]
pub fn to_json(data: &ReportData) -> String {
    serde_json::to_string(data).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PhraseRow;

    #[test]
    fn to_json_emits_rows_in_order() {
        let data = ReportData {
            event: "2013-08-30T12:00:00Z".to_string(),
            reference: "2013-08-30T13:30:00Z".to_string(),
            rows: vec![
                PhraseRow {
                    locale: "en".to_string(),
                    name: "English".to_string(),
                    phrase: "2 hours ago".to_string(),
                },
                PhraseRow {
                    locale: "zh".to_string(),
                    name: "Chinese".to_string(),
                    phrase: "2 小时前".to_string(),
                },
            ],
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&data)).expect("valid json");
        assert_eq!(value["reference"], "2013-08-30T13:30:00Z");
        assert_eq!(value["rows"][0]["phrase"], "2 hours ago");
        assert_eq!(value["rows"][1]["locale"], "zh");
        assert_eq!(value["rows"][1]["phrase"], "2 小时前");
    }
}
