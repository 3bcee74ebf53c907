use serde::{Deserialize, Serialize};

/// Interface language offered by the preference menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Arabic,
    French,
    Spanish,
    German,
    Amharic,
    Chinese,
    Italian,
}

/// Horizontal layout direction derived from the active language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl Language {
    /// All selectable languages, in menu order
    pub fn all() -> [Language; 8] {
        [
            Language::English,
            Language::Arabic,
            Language::French,
            Language::Spanish,
            Language::German,
            Language::Amharic,
            Language::Chinese,
            Language::Italian,
        ]
    }

    /// Display name, also the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Amharic => "Amharic",
            Language::Chinese => "Chinese",
            Language::Italian => "Italian",
        }
    }

    /// Parse a persisted language name. Unknown values return `None` so
    /// callers can fall back to the default instead of failing.
    pub fn from_str(value: &str) -> Option<Language> {
        Language::all().into_iter().find(|l| l.as_str() == value)
    }

    /// Document language tag exposed to the windowing layer
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Chinese => "zh",
            Language::Amharic => "am",
            _ => "en",
        }
    }

    /// Layout direction. Arabic is the only right-to-left language offered.
    pub fn direction(&self) -> TextDirection {
        match self {
            Language::Arabic => TextDirection::RightToLeft,
            _ => TextDirection::LeftToRight,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display currency for pricing and checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Aed,
    Eur,
    Gbp,
    Sar,
    Etb,
    Cny,
    Zar,
}

impl Currency {
    /// All selectable currencies, in menu order
    pub fn all() -> [Currency; 8] {
        [
            Currency::Usd,
            Currency::Aed,
            Currency::Eur,
            Currency::Gbp,
            Currency::Sar,
            Currency::Etb,
            Currency::Cny,
            Currency::Zar,
        ]
    }

    /// ISO-style code, also the persisted representation
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aed => "AED",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Sar => "SAR",
            Currency::Etb => "ETB",
            Currency::Cny => "CNY",
            Currency::Zar => "ZAR",
        }
    }

    /// Parse a persisted currency code. Unknown values return `None` so
    /// callers can fall back to the default instead of failing.
    pub fn from_code(value: &str) -> Option<Currency> {
        Currency::all().into_iter().find(|c| c.code() == value)
    }

    /// Symbol shown in front of prices
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Aed => "AED",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Sar => "SAR",
            Currency::Etb => "Br",
            Currency::Cny => "¥",
            Currency::Zar => "R",
        }
    }

    /// Fixed demo conversion rate from USD. The showroom never fetches live
    /// rates; these only have to look plausible on the pricing cards.
    pub fn rate_from_usd(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Aed => 3.67,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
            Currency::Sar => 3.75,
            Currency::Etb => 57.0,
            Currency::Cny => 7.25,
            Currency::Zar => 18.4,
        }
    }

    /// Convert a USD amount into this currency at the demo rate
    pub fn convert_from_usd(&self, usd: f64) -> f64 {
        usd * self.rate_from_usd()
    }

    /// Format a USD amount as a price in this currency.
    ///
    /// High-rate currencies round to whole units; the rest keep cents but
    /// drop a trailing `.00` so marketing prices read as "$29", not "$29.00".
    pub fn format_amount(&self, usd: f64) -> String {
        let amount = self.convert_from_usd(usd);
        let number = if self.rate_from_usd() >= 3.0 {
            format!("{:.0}", amount)
        } else {
            let two_places = format!("{:.2}", amount);
            match two_places.strip_suffix(".00") {
                Some(whole) => whole.to_string(),
                None => two_places,
            }
        };
        if self.symbol().chars().count() > 1 {
            format!("{} {}", self.symbol(), number)
        } else {
            format!("{}{}", self.symbol(), number)
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_rtl_only_for_arabic() {
        assert_eq!(Language::Arabic.direction(), TextDirection::RightToLeft);
        for lang in Language::all() {
            if lang != Language::Arabic {
                assert_eq!(lang.direction(), TextDirection::LeftToRight);
            }
        }
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::Arabic.tag(), "ar");
        assert_eq!(Language::Chinese.tag(), "zh");
        assert_eq!(Language::Amharic.tag(), "am");
        assert_eq!(Language::French.tag(), "en");
        assert_eq!(Language::English.tag(), "en");
    }

    #[test]
    fn test_language_parse_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_str(lang.as_str()), Some(lang));
        }
        assert_eq!(Language::from_str("Klingon"), None);
        assert_eq!(Language::from_str(""), None);
        // Case-sensitive on purpose: the persisted value is the display name
        assert_eq!(Language::from_str("english"), None);
    }

    #[test]
    fn test_currency_parse_round_trip() {
        for curr in Currency::all() {
            assert_eq!(Currency::from_code(curr.code()), Some(curr));
        }
        assert_eq!(Currency::from_code("BTC"), None);
        assert_eq!(Currency::from_code("usd"), None);
    }

    #[test]
    fn test_currency_serde_uses_codes() {
        let json = serde_json::to_string(&Currency::Aed).expect("serialize");
        assert_eq!(json, "\"AED\"");
        let back: Currency = serde_json::from_str("\"ZAR\"").expect("deserialize");
        assert_eq!(back, Currency::Zar);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(Currency::Usd.format_amount(29.0), "$29");
        assert_eq!(Currency::Usd.format_amount(0.0), "$0");
        assert_eq!(Currency::Gbp.format_amount(29.0), "£22.91");
        assert_eq!(Currency::Aed.format_amount(29.0), "AED 106");
        assert_eq!(Currency::Etb.format_amount(29.0), "Br 1653");
        assert_eq!(Currency::Zar.format_amount(99.0), "R1822");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
