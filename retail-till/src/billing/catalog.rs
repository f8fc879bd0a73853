use crate::core::{TillError, TillResult};
use shared::Catalog;
use std::path::Path;
use tracing::{info, instrument};

/// Load the catalog from a JSON list, or the built-in catalog when no path
/// is configured
///
/// Entries need a non-empty name and a non-negative price.
#[instrument]
pub async fn load_catalog(path: Option<&Path>) -> TillResult<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::default());
    };

    let raw = tokio::fs::read_to_string(path).await?;
    let catalog: Catalog = serde_json::from_str(&raw)?;

    if catalog.is_empty() {
        return Err(TillError::Catalog(format!("{} has no items", path.display())));
    }
    if let Some(bad) = catalog
        .items()
        .iter()
        .find(|i| i.name.trim().is_empty() || i.unit_price < 0)
    {
        return Err(TillError::Catalog(format!("invalid entry: {:?}", bad)));
    }

    info!(items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}
