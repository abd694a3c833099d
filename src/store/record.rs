use crate::errors::AppResult;
use crate::models::{FieldId, WeeklyReport};
use crate::signature::data_uri;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk shape of the report.
///
/// ```json
/// {"weekNumber": 42, "fields": {"name": "…", "start-0": "08:00"}, "signature": "data:image/png;base64,…"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    pub week_number: u32,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl PersistedRecord {
    pub fn from_report(report: &WeeklyReport) -> Self {
        let fields = FieldId::all()
            .into_iter()
            .map(|id| (id.key(), report.field(id).to_string()))
            .collect();

        Self {
            week_number: report.week_number,
            fields,
            signature: report.signature.as_deref().map(data_uri::encode_png),
        }
    }

    /// Rebuild the report. Unknown keys are ignored, missing keys stay empty.
    ///
    /// The signature is decoded separately so that a broken image does not
    /// cost the rest of the form.
    pub fn to_report(&self) -> (WeeklyReport, Option<AppResult<Vec<u8>>>) {
        let mut report = WeeklyReport::empty(self.week_number);

        for (key, value) in &self.fields {
            if let Ok(id) = FieldId::parse(key) {
                report.set_field(id, value.clone());
            }
        }

        let signature = self.signature.as_deref().map(data_uri::decode_png);
        (report, signature)
    }
}
