mod tables;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use self::tables::{
    CAPITAL_CITIES, CURRENCY_CODES, CURRENCY_NAMES, FLAGS, LANGUAGES, NATIONALITIES,
};

/// Source of random values, one generator per semantic category.
///
/// Every call is an independent draw: nothing ties a nationality to the
/// capital or flag returned next, and values may repeat.
pub trait RecordProvider {
    fn nationality(&mut self) -> String;
    fn capital_city(&mut self) -> String;
    fn flag(&mut self) -> String;
    fn language(&mut self) -> String;
    fn currency_name(&mut self) -> String;
    fn currency_code(&mut self) -> String;
}

/// Draws uniformly from the built-in value tables.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    rng: StdRng,
}

impl CatalogProvider {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of values.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, table: &'static [&'static str]) -> String {
        // Tables are non-empty literals, the fallback never triggers
        table.choose(&mut self.rng).copied().unwrap_or_default().to_string()
    }
}

impl RecordProvider for CatalogProvider {
    fn nationality(&mut self) -> String {
        self.pick(NATIONALITIES)
    }

    fn capital_city(&mut self) -> String {
        self.pick(CAPITAL_CITIES)
    }

    fn flag(&mut self) -> String {
        self.pick(FLAGS)
    }

    fn language(&mut self) -> String {
        self.pick(LANGUAGES)
    }

    fn currency_name(&mut self) -> String {
        self.pick(CURRENCY_NAMES)
    }

    fn currency_code(&mut self) -> String {
        self.pick(CURRENCY_CODES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_all(provider: &mut CatalogProvider) -> Vec<String> {
        vec![
            provider.nationality(),
            provider.capital_city(),
            provider.flag(),
            provider.language(),
            provider.currency_name(),
            provider.currency_code(),
        ]
    }

    #[test]
    fn tables_are_non_empty() {
        for table in [
            NATIONALITIES,
            CAPITAL_CITIES,
            FLAGS,
            LANGUAGES,
            CURRENCY_NAMES,
            CURRENCY_CODES,
        ] {
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = CatalogProvider::seeded(7);
        let mut b = CatalogProvider::seeded(7);
        for _ in 0..20 {
            assert_eq!(draw_all(&mut a), draw_all(&mut b));
        }
    }

    #[test]
    fn values_come_from_their_own_category() {
        let mut provider = CatalogProvider::seeded(1234);
        for _ in 0..100 {
            assert!(NATIONALITIES.contains(&provider.nationality().as_str()));
            assert!(CAPITAL_CITIES.contains(&provider.capital_city().as_str()));
            assert!(FLAGS.contains(&provider.flag().as_str()));
            assert!(LANGUAGES.contains(&provider.language().as_str()));
            assert!(CURRENCY_NAMES.contains(&provider.currency_name().as_str()));
            assert!(CURRENCY_CODES.contains(&provider.currency_code().as_str()));
        }
    }

    #[test]
    fn currency_codes_are_three_uppercase_letters() {
        for code in CURRENCY_CODES {
            assert_eq!(code.len(), 3, "{code}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{code}");
        }
    }

    #[test]
    fn flags_are_regional_indicator_pairs() {
        for flag in FLAGS {
            let chars: Vec<char> = flag.chars().collect();
            assert_eq!(chars.len(), 2, "{flag}");
            assert!(chars
                .iter()
                .all(|c| ('\u{1F1E6}'..='\u{1F1FF}').contains(c)));
        }
    }

    #[test]
    fn entropy_provider_draws_from_tables() {
        let mut provider = CatalogProvider::from_entropy();
        assert!(CURRENCY_CODES.contains(&provider.currency_code().as_str()));
    }
}
