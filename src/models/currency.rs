use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyRecord {
    pub name: String,
    /// ISO-4217 code, drawn independently of `name`.
    pub code: String,
}
