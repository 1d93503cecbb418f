//! Time-series utilities used by the orchestrator.
//!
//! Modules include:
//! - `normalize`: reduce provider stamps to a comparable join key
//! - `align`: inner-join an asset series with an FX series and convert
/// Asset × FX alignment and currency conversion.
pub mod align;
/// Join-key normalisation for aware and naive stamps.
pub mod normalize;
