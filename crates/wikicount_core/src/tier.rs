/// Prize estimate derived from a run's total word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeTier {
    TopThree,
    TopSeven,
    TopTen,
    Certificate,
    NoWords,
}

impl PrizeTier {
    /// Ascending lower bounds, checked from the highest down.
    const THRESHOLDS: [(u64, PrizeTier); 3] = [
        (40_000, PrizeTier::TopThree),
        (25_000, PrizeTier::TopSeven),
        (15_000, PrizeTier::TopTen),
    ];

    pub fn from_total(total_words: u64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| total_words >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(if total_words > 0 {
                PrizeTier::Certificate
            } else {
                PrizeTier::NoWords
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            PrizeTier::TopThree => "Likely Top 3!",
            PrizeTier::TopSeven => "Likely Top 5-7!",
            PrizeTier::TopTen => "Likely Top 10!",
            PrizeTier::Certificate => "Digital Certificate guaranteed!",
            PrizeTier::NoWords => "Check internet connection or article names!",
        }
    }

    pub fn prize(self) -> Option<&'static str> {
        match self {
            PrizeTier::TopThree => Some("৬,০০০-১০,০০০ টাকা"),
            PrizeTier::TopSeven => Some("২,০০০-৪,০০০ টাকা"),
            PrizeTier::TopTen => Some("২,০০০ টাকা"),
            PrizeTier::Certificate | PrizeTier::NoWords => None,
        }
    }
}
