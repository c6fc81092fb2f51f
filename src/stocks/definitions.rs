// src/stocks/definitions.rs
//! Company metadata used by the history endpoints.
//
//! Three tickers are hard-coded. Extend `default_profile_universe()` with
//! more entries whenever you add tickers.

pub type Symbol = String;

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Ticker whose profile seeds synthesis for symbols we know nothing about.
pub const FALLBACK_SYMBOL: &str = "SPY";
/// Chart colour handed out for symbols without a profile.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Immutable facts about a listed company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    /// NASDAQ / NYSE ticker (e.g. "AAPL").
    pub symbol: Symbol,
    /// Human-readable company name.
    pub display_name: String,
    /// Hex colour the front-end uses for this ticker's chart.
    pub color_tag: String,
    /// Anchor price for the synthetic history.
    pub base_price: f64,
}

/// Convenience factory so call-sites stay concise.
impl CompanyProfile {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>, T3: Into<String>>(
        symbol: T1,
        display_name: T2,
        color_tag: T3,
        base_price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            color_tag: color_tag.into(),
            base_price,
        }
    }
}

/// Name and colour shown next to a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub name: String,
    pub color: String,
}

/// The universe of profiles available when the service boots.
#[inline]
pub fn default_profile_universe() -> Vec<CompanyProfile> {
    vec![
        CompanyProfile::new("AAPL", "Apple", "#A2AAAD", 175.0),
        CompanyProfile::new("TSLA", "Tesla", "#E82127", 250.0),
        CompanyProfile::new("SPY", "S&P 500", "#00BFFF", 450.0),
    ]
}

static PROFILES: Lazy<HashMap<Symbol, CompanyProfile>> = Lazy::new(|| {
    default_profile_universe()
        .into_iter()
        .map(|p| (p.symbol.clone(), p))
        .collect()
});

/// Exact lookup. No fallback.
pub fn profile(symbol: &str) -> Option<&'static CompanyProfile> {
    PROFILES.get(symbol)
}

/// Profile whose base price seeds the synthetic series for `symbol`.
///
/// Unknown tickers borrow the SPY profile.
pub fn synthesis_profile(symbol: &str) -> &'static CompanyProfile {
    profile(symbol)
        .or_else(|| profile(FALLBACK_SYMBOL))
        .unwrap_or_else(|| unreachable!("{FALLBACK_SYMBOL} is part of the default universe"))
}

/// Name and colour for `symbol`.
///
/// Unlike [`synthesis_profile`] this does not fall back to SPY: unknown
/// tickers are shown under their raw symbol with [`DEFAULT_COLOR`].
pub fn display_identity(symbol: &str) -> DisplayIdentity {
    match profile(symbol) {
        Some(p) => DisplayIdentity {
            name: p.display_name.clone(),
            color: p.color_tag.clone(),
        },
        None => DisplayIdentity {
            name: symbol.to_string(),
            color: DEFAULT_COLOR.to_string(),
        },
    }
}

// -----------------------------------------------------------------------------
//  Unit tests: profile table invariants
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_universe_is_consistent() {
        let universe = default_profile_universe();
        assert_eq!(universe.len(), PROFILES.len());
        for p in &universe {
            assert_eq!(profile(&p.symbol), Some(p));
            assert!(p.base_price > 0.0);
            assert!(p.color_tag.starts_with('#') && p.color_tag.len() == 7);
        }
        let mut symbols: Vec<&str> = PROFILES.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        assert_eq!(symbols, vec!["AAPL", "SPY", "TSLA"]);
    }

    #[test]
    fn known_symbol_uses_its_own_profile() {
        assert_eq!(synthesis_profile("AAPL").base_price, 175.0);
        assert_eq!(synthesis_profile("TSLA").base_price, 250.0);
        assert_eq!(
            display_identity("TSLA"),
            DisplayIdentity {
                name: "Tesla".into(),
                color: "#E82127".into()
            }
        );
    }

    #[test]
    fn unknown_symbol_prices_like_spy_but_keeps_its_name() {
        assert_eq!(synthesis_profile("ZZZZ").symbol, "SPY");
        assert_eq!(synthesis_profile("ZZZZ").base_price, 450.0);

        let identity = display_identity("ZZZZ");
        assert_eq!(identity.name, "ZZZZ");
        assert_eq!(identity.color, DEFAULT_COLOR);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(profile("aapl").is_none());
        assert_eq!(display_identity("aapl").name, "aapl");
        assert_eq!(synthesis_profile("aapl").symbol, "SPY");
    }
}
