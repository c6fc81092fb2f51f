// src/stocks/mod.rs
// -----------------
pub mod definitions;

// Re-export the most useful items so callers don’t have to dive
// another level down the path.
pub use definitions::{
    CompanyProfile, DEFAULT_COLOR, DisplayIdentity, FALLBACK_SYMBOL, Symbol,
    default_profile_universe, display_identity, profile, synthesis_profile,
};
