//! Deck configuration schema and validation.
//!
//! The configuration is a single JSON document holding the weighted title
//! distribution, one string pool per card slot, and output settings. It is
//! parsed into a typed structure once at load time; validation then reports
//! every missing and every present-but-empty required key in one pass.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Pool keys that must exist and be non-empty for a deck to be generated.
///
/// `emotions`, `appearances` and `borders` are deliberately absent: a deck
/// without them is still valid, the corresponding slots simply stay empty.
pub const REQUIRED_POOLS: &[&str] = &[
    "symbols",
    "table_verbes",
    "lieux",
    "personnages",
    "objets",
    "motivations",
    "traits",
    "sombres_secrets",
    "reactions_amical_hostile",
    "relations_pj_pnj",
];

/// Default number of cards when the configuration does not set one.
const DEFAULT_CARD_COUNT: u32 = 100;

fn default_card_count() -> u32 {
    DEFAULT_CARD_COUNT
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the plain-text deck file.
    pub txt_file: String,
    /// Path of the optional DOCX deck file.
    pub docx_file: String,
    /// Whether the DOCX file should be produced at all.
    pub create_docx: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            txt_file: "deck_oracle.txt".to_string(),
            docx_file: "deck_oracle.docx".to_string(),
            create_docx: true,
        }
    }
}

/// The full deck configuration.
///
/// Every pool is an `Option` so that validation can distinguish a key that
/// is missing from the document (`None`) from one that is present but holds
/// no elements (`Some` of an empty list). Unknown keys in the document are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Title → weight. Controls how often each title appears in the deck.
    pub title_distribution: Option<BTreeMap<String, u32>>,
    /// Card symbols (one per card).
    pub symbols: Option<Vec<String>>,
    /// Action verbs (three per card).
    pub table_verbes: Option<Vec<String>>,
    /// Locations (one per card).
    pub lieux: Option<Vec<String>>,
    /// Characters (one per card).
    pub personnages: Option<Vec<String>>,
    /// Objects (one per card).
    pub objets: Option<Vec<String>>,
    /// Emotions (two per card, optional pool).
    pub emotions: Option<Vec<String>>,
    /// Appearances (one per card, optional pool).
    pub appearances: Option<Vec<String>>,
    /// Motivations (one per card).
    pub motivations: Option<Vec<String>>,
    /// Character traits (three per card).
    pub traits: Option<Vec<String>>,
    /// Dark secrets (one per card).
    pub sombres_secrets: Option<Vec<String>>,
    /// Friendly/hostile reactions (one per card).
    pub reactions_amical_hostile: Option<Vec<String>>,
    /// PC/NPC relations (one per card).
    pub relations_pj_pnj: Option<Vec<String>>,
    /// Dominant themes (up to twelve per card, optional pool).
    pub borders: Option<Vec<String>>,
    /// Default card count offered by the interactive prompt.
    #[serde(default = "default_card_count")]
    pub card_count: u32,
    /// Output file settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title_distribution: None,
            symbols: None,
            table_verbes: None,
            lieux: None,
            personnages: None,
            objets: None,
            emotions: None,
            appearances: None,
            motivations: None,
            traits: None,
            sombres_secrets: None,
            reactions_amical_hostile: None,
            relations_pj_pnj: None,
            borders: None,
            card_count: DEFAULT_CARD_COUNT,
            output: OutputConfig::default(),
        }
    }
}

impl DeckConfig {
    /// Load and parse a configuration file (UTF-8 JSON).
    pub fn load(path: &Path) -> DeckResult<Self> {
        if !path.is_file() {
            return Err(DeckError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DeckError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check that every required pool and the title distribution are present
    /// and non-empty.
    ///
    /// All offending keys are collected before returning, so one run reports
    /// the complete state of the configuration. A `title_distribution` whose
    /// weights sum to zero counts as empty.
    pub fn validate(&self) -> DeckResult<()> {
        let mut missing: Vec<String> = Vec::new();
        let mut empty: Vec<String> = Vec::new();

        match &self.title_distribution {
            None => missing.push("title_distribution".to_string()),
            Some(dist) if dist.values().all(|&w| w == 0) => {
                empty.push("title_distribution".to_string());
            }
            Some(_) => {}
        }

        for &key in REQUIRED_POOLS {
            match self.pool(key) {
                None => missing.push(key.to_string()),
                Some(items) if items.is_empty() => empty.push(key.to_string()),
                Some(_) => {}
            }
        }

        if missing.is_empty() && empty.is_empty() {
            Ok(())
        } else {
            Err(DeckError::Incomplete { missing, empty })
        }
    }

    /// Look up a pool by its configuration key.
    ///
    /// `None` when the key is absent from the document; the assembler and
    /// validation both go through this so key spelling lives in one place.
    pub fn pool(&self, key: &str) -> Option<&[String]> {
        let field = match key {
            "symbols" => &self.symbols,
            "table_verbes" => &self.table_verbes,
            "lieux" => &self.lieux,
            "personnages" => &self.personnages,
            "objets" => &self.objets,
            "emotions" => &self.emotions,
            "appearances" => &self.appearances,
            "motivations" => &self.motivations,
            "traits" => &self.traits,
            "sombres_secrets" => &self.sombres_secrets,
            "reactions_amical_hostile" => &self.reactions_amical_hostile,
            "relations_pj_pnj" => &self.relations_pj_pnj,
            "borders" => &self.borders,
            _ => &None,
        };
        field.as_deref()
    }

    /// A pool's elements, with absent and empty both normalized to `&[]`.
    pub fn pool_or_empty(&self, key: &str) -> &[String] {
        self.pool(key).unwrap_or(&[])
    }
}
