use std::sync::Arc;

use mandi_core::{MandiConnector, MandiError};

/// Connectors for the demos.
///
/// With `MANDI_DEMOS_USE_MOCK` set, the deterministic fixture connector stands in
/// for both Yahoo Finance and Google News so the demos run offline.
///
/// # Errors
/// Returns an error if a live connector cannot build its HTTP client.
pub fn get_connectors() -> Result<Vec<Arc<dyn MandiConnector>>, MandiError> {
    if std::env::var("MANDI_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(vec![Arc::new(mandi_mock::MockConnector::new())]);
    }
    Ok(vec![
        Arc::new(mandi_yfinance::YfConnector::try_new_default()?),
        Arc::new(mandi_gnews::GoogleNewsConnector::try_new_default()?),
    ])
}

/// A builder with every demo connector registered.
///
/// # Errors
/// Propagates connector construction failures.
pub fn builder() -> Result<mandi::MandiBuilder, MandiError> {
    Ok(get_connectors()?
        .into_iter()
        .fold(mandi::Mandi::builder(), mandi::MandiBuilder::with_connector))
}
