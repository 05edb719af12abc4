//! Error types for deck generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur while loading a configuration or generating a deck.
///
/// All of these are fatal and surface before any card is generated or any
/// output file is written.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The configuration path does not resolve to a file.
    #[error("fichier de configuration introuvable : {0}")]
    NotFound(PathBuf),

    /// The configuration file is not valid JSON.
    #[error("erreur de décodage JSON dans {path} : {source}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// The underlying JSON error, with line/column diagnostics.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file could not be read.
    #[error("lecture impossible de {path} : {source}")]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Required pools or the title distribution are missing or empty.
    ///
    /// Both lists are complete: validation reports every offending key
    /// in one pass rather than failing on the first.
    #[error("{}", incomplete_report(.missing, .empty))]
    Incomplete {
        /// Keys absent from the configuration.
        missing: Vec<String>,
        /// Keys present but holding no elements (or only zero weights).
        empty: Vec<String>,
    },

    /// The title distribution holds no entry with a positive weight.
    #[error("title_distribution ne contient aucun poids positif")]
    NoPositiveWeight,
}

/// Render the incomplete-configuration report, enumerating every key.
fn incomplete_report(missing: &[String], empty: &[String]) -> String {
    let mut msg = String::from("la configuration JSON est incomplète ou vide :");
    if !missing.is_empty() {
        msg.push_str(&format!("\n- clés manquantes : {}", missing.join(", ")));
    }
    if !empty.is_empty() {
        msg.push_str(&format!(
            "\n- clés vides (doivent contenir des éléments) : {}",
            empty.join(", ")
        ));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_every_key() {
        let err = DeckError::Incomplete {
            missing: vec!["motivations".into(), "traits".into()],
            empty: vec!["objets".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("clés manquantes : motivations, traits"));
        assert!(msg.contains("clés vides"));
        assert!(msg.contains("objets"));
    }

    #[test]
    fn incomplete_omits_empty_sections() {
        let err = DeckError::Incomplete {
            missing: vec![],
            empty: vec!["lieux".into()],
        };
        let msg = err.to_string();
        assert!(!msg.contains("manquantes"));
        assert!(msg.contains("lieux"));
    }

    #[test]
    fn not_found_carries_path() {
        let err = DeckError::NotFound(PathBuf::from("/tmp/absent.json"));
        assert!(err.to_string().contains("/tmp/absent.json"));
    }
}
