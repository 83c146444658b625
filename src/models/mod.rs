mod currency;
mod nation;

pub use currency::CurrencyRecord;
pub use nation::NationRecord;
