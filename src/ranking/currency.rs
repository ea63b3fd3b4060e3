/// Currency tiers in ascending value order. The derived `Ord` is the
/// precedence used when concatenating buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Alchemy,
    Fusing,
    Chaos,
    Exalted,
}

impl Currency {
    pub const ALL: [Currency; 4] = [
        Currency::Alchemy,
        Currency::Fusing,
        Currency::Chaos,
        Currency::Exalted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Currency::Alchemy => "alchemy",
            Currency::Fusing => "fusing",
            Currency::Chaos => "chaos",
            Currency::Exalted => "exalted",
        }
    }

    /// Position in the precedence table, 0 for the cheapest tier.
    pub fn tier(self) -> usize {
        self as usize
    }

    /// Returns the tier whose label occurs in `price`, or `None` when the
    /// price is denominated in anything else.
    pub fn classify(price: &str) -> Option<Currency> {
        Self::split_price(price).map(|(_, currency)| currency)
    }

    /// Splits `"12 chaos"` into the magnitude text `"12"` and its tier.
    pub fn split_price(price: &str) -> Option<(&str, Currency)> {
        // ASCII lowering keeps byte offsets valid for slicing `price`.
        let lowered = price.to_ascii_lowercase();
        Self::ALL.iter().find_map(|&currency| {
            lowered
                .find(currency.label())
                .map(|at| (price[..at].trim(), currency))
        })
    }
}
