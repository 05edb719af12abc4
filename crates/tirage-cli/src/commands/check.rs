use std::path::Path;

use colored::Colorize;

use tirage_core::config::REQUIRED_POOLS;

pub fn run(config_path: &Path) -> Result<(), String> {
    let cfg = super::load_and_validate(config_path)?;

    println!(
        "{} {} : configuration valide",
        "[OK]".green(),
        config_path.display()
    );

    if let Some(dist) = &cfg.title_distribution {
        let total: u64 = dist.values().map(|&w| u64::from(w)).sum();
        println!("  {} titres, poids total {total}", dist.len());
    }
    for &key in REQUIRED_POOLS {
        println!("  {key}: {} éléments", cfg.pool_or_empty(key).len());
    }
    for key in ["emotions", "appearances", "borders"] {
        match cfg.pool(key) {
            Some(items) => println!("  {key}: {} éléments", items.len()),
            None => println!("  {key}: absent (optionnel)"),
        }
    }

    Ok(())
}
