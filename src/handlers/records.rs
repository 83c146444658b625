use axum::Json;

use crate::{
    generator,
    models::{CurrencyRecord, NationRecord},
    provider::CatalogProvider,
};

// Each request owns its provider; nothing is shared between requests.

pub async fn nations() -> Json<Vec<NationRecord>> {
    Json(generator::generate_nations(&mut CatalogProvider::from_entropy()))
}

pub async fn currencies() -> Json<Vec<CurrencyRecord>> {
    Json(generator::generate_currencies(&mut CatalogProvider::from_entropy()))
}
