// src/ui/mod.rs
// =============================================================================
// Terminal decoration. Carries no data; only the spinner lives here.
// =============================================================================

mod spinner;

pub use spinner::Spinner;
