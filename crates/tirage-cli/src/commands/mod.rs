pub mod check;
pub mod generate;

use std::path::Path;

use tirage_core::DeckConfig;

/// Load a configuration file and run the completeness check.
///
/// Both commands go through this so that a broken configuration produces
/// the same report everywhere, before anything else happens.
fn load_and_validate(path: &Path) -> Result<DeckConfig, String> {
    let cfg = DeckConfig::load(path).map_err(|e| e.to_string())?;
    cfg.validate().map_err(|e| e.to_string())?;
    Ok(cfg)
}
