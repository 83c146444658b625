use serde::Serialize;

/// One randomly assembled nation. Fields are drawn independently, so the
/// capital need not belong to the nationality it is paired with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationRecord {
    pub nationality: String,
    pub capital_city: String,
    pub flag: String,
    pub language: String,
}
