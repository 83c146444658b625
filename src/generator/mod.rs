use tracing::debug;

use crate::models::{CurrencyRecord, NationRecord};
use crate::provider::RecordProvider;

pub const NATION_BATCH_SIZE: usize = 10;
pub const CURRENCY_BATCH_SIZE: usize = 20;

/// Build a batch of exactly [`NATION_BATCH_SIZE`] nations, in draw order.
pub fn generate_nations(provider: &mut impl RecordProvider) -> Vec<NationRecord> {
    let nations: Vec<NationRecord> = (0..NATION_BATCH_SIZE)
        .map(|_| NationRecord {
            nationality: provider.nationality(),
            capital_city: provider.capital_city(),
            flag: provider.flag(),
            language: provider.language(),
        })
        .collect();

    debug!(count = nations.len(), "Generated nations");
    nations
}

/// Build a batch of exactly [`CURRENCY_BATCH_SIZE`] currencies, in draw order.
pub fn generate_currencies(provider: &mut impl RecordProvider) -> Vec<CurrencyRecord> {
    let currencies: Vec<CurrencyRecord> = (0..CURRENCY_BATCH_SIZE)
        .map(|_| CurrencyRecord {
            name: provider.currency_name(),
            code: provider.currency_code(),
        })
        .collect();

    debug!(count = currencies.len(), "Generated currencies");
    currencies
}
