use std::collections::HashMap;

/// Curated word -> Zipf lookup for one language
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    zipf: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Create empty frequency table
    pub fn new() -> Self {
        Self {
            zipf: HashMap::new(),
        }
    }

    /// Build from raw entries, lowercasing every key
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let zipf = entries
            .into_iter()
            .map(|(word, value)| (word.to_lowercase(), value))
            .collect();
        Self { zipf }
    }

    /// Zipf value for a word (1.0 rare .. 7.3 ultra-common)
    pub fn zipf(&self, word: &str) -> Option<f64> {
        self.zipf
            .get(word)
            .or_else(|| self.zipf.get(&word.to_lowercase()))
            .copied()
    }

    /// How worth teaching a word is, `default` when the table has no entry
    pub fn usefulness(&self, word: &str, default: f64) -> f64 {
        self.zipf(word).map(usefulness_from_zipf).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.zipf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zipf.is_empty()
    }
}

/// Piecewise usefulness curve peaking between Zipf 3.5 and 4.5
pub fn usefulness_from_zipf(zipf: f64) -> f64 {
    FrequencyBand::from_zipf(zipf).usefulness()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrequencyBand {
    /// >= 6.5, too basic to be worth a flashcard
    UltraCommon,
    VeryCommon,
    Common,
    Core,
    SweetSpot,
    Uncommon,
    Rare,
    /// < 1.5, too obscure for a learner
    Obscure,
}

impl FrequencyBand {
    fn from_zipf(zipf: f64) -> Self {
        match zipf {
            z if z >= 6.5 => FrequencyBand::UltraCommon,
            z if z >= 5.5 => FrequencyBand::VeryCommon,
            z if z >= 4.5 => FrequencyBand::Common,
            z if z >= 4.0 => FrequencyBand::Core,
            z if z >= 3.5 => FrequencyBand::SweetSpot,
            z if z >= 2.5 => FrequencyBand::Uncommon,
            z if z >= 1.5 => FrequencyBand::Rare,
            _ => FrequencyBand::Obscure,
        }
    }

    fn usefulness(&self) -> f64 {
        match self {
            FrequencyBand::UltraCommon => 0.2,
            FrequencyBand::VeryCommon => 0.4,
            FrequencyBand::Common => 0.6,
            FrequencyBand::Core => 0.85,
            FrequencyBand::SweetSpot => 0.95,
            FrequencyBand::Uncommon => 0.8,
            FrequencyBand::Rare => 0.5,
            FrequencyBand::Obscure => 0.2,
        }
    }
}
