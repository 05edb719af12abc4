//! Card assembly from configured pools.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::DeckConfig;
use crate::select::{pick_many, pick_one};

/// Cap on the number of themes drawn for one card.
const MAX_BORDERS: usize = 12;

/// One assembled oracle card.
///
/// Single-value slots are `None` and multi-value slots are empty when the
/// corresponding pool was absent or empty; such slots are simply left off
/// the rendered card. Cards are immutable once drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card number, 1-based and sequential within a deck.
    pub number: u32,
    /// Card title, assigned from the weighted distribution.
    pub title: String,
    /// Symbol.
    pub symbol: Option<String>,
    /// Three action verbs.
    pub verbs: Vec<String>,
    /// Location.
    pub lieu: Option<String>,
    /// Character.
    pub personnage: Option<String>,
    /// Object.
    pub objet: Option<String>,
    /// Two emotions.
    pub emotions: Vec<String>,
    /// Appearance.
    pub appearance: Option<String>,
    /// Motivation.
    pub motivation: Option<String>,
    /// Three character traits.
    pub traits: Vec<String>,
    /// Dark secret.
    pub secret: Option<String>,
    /// Friendly/hostile reaction.
    pub reaction: Option<String>,
    /// PC/NPC relation.
    pub relation: Option<String>,
    /// Dominant themes, up to twelve.
    pub borders: Vec<String>,
}

impl Card {
    /// A card with a number and a title and every other slot empty.
    pub fn bare(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            symbol: None,
            verbs: Vec::new(),
            lieu: None,
            personnage: None,
            objet: None,
            emotions: Vec::new(),
            appearance: None,
            motivation: None,
            traits: Vec::new(),
            secret: None,
            reaction: None,
            relation: None,
            borders: Vec::new(),
        }
    }

    /// Draw one card from the configured pools.
    ///
    /// Slots are drawn in a fixed order so that a seeded RNG reproduces the
    /// same card: symbol, verbs, lieu, personnage, objet, emotions,
    /// appearance, motivation, traits, secret, reaction, relation, borders.
    pub fn draw(number: u32, title: String, cfg: &DeckConfig, rng: &mut StdRng) -> Self {
        let symbol = single(cfg.pool_or_empty("symbols"), rng);
        let verbs = pick_many(cfg.pool_or_empty("table_verbes"), 3, rng);
        let lieu = single(cfg.pool_or_empty("lieux"), rng);
        let personnage = single(cfg.pool_or_empty("personnages"), rng);
        let objet = single(cfg.pool_or_empty("objets"), rng);
        let emotions = pick_many(cfg.pool_or_empty("emotions"), 2, rng);
        let appearance = single(cfg.pool_or_empty("appearances"), rng);
        let motivation = single(cfg.pool_or_empty("motivations"), rng);
        let traits = pick_many(cfg.pool_or_empty("traits"), 3, rng);
        let secret = single(cfg.pool_or_empty("sombres_secrets"), rng);
        let reaction = single(cfg.pool_or_empty("reactions_amical_hostile"), rng);
        let relation = single(cfg.pool_or_empty("relations_pj_pnj"), rng);
        let border_pool = cfg.pool_or_empty("borders");
        let borders = pick_many(border_pool, MAX_BORDERS.min(border_pool.len()), rng);

        Self {
            number,
            title,
            symbol,
            verbs,
            lieu,
            personnage,
            objet,
            emotions,
            appearance,
            motivation,
            traits,
            secret,
            reaction,
            relation,
            borders,
        }
    }
}

/// One uniform draw, with an empty result normalized to `None`.
fn single(pool: &[String], rng: &mut StdRng) -> Option<String> {
    let value = pick_one(pool, rng);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
