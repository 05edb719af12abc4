//! Deck orchestration and plain-text export.

use rand::rngs::StdRng;

use crate::card::Card;
use crate::config::DeckConfig;
use crate::error::{DeckError, DeckResult};
use crate::render;
use crate::titles::build_title_pool;

/// Header written at the top of the plain-text export.
pub const DECK_TITLE: &str = "LE TAROT DES ROYAUMES OUBLIÉS — DECK GÉNÉRÉ";

/// An ordered run of generated cards, numbered 1..=N without gaps.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generate a full deck of `card_count` cards.
    ///
    /// The configuration is validated first; any failure aborts before a
    /// single card is drawn. The title assignment consumes the RNG entirely
    /// before the first field draw, then cards are assembled in strictly
    /// increasing number order, so a seeded RNG reproduces the whole deck.
    pub fn generate(cfg: &DeckConfig, card_count: u32, rng: &mut StdRng) -> DeckResult<Self> {
        cfg.validate()?;
        let distribution = cfg
            .title_distribution
            .as_ref()
            .ok_or(DeckError::NoPositiveWeight)?;

        let titles = build_title_pool(distribution, card_count as usize, rng)?;
        let cards = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Card::draw(i as u32 + 1, title, cfg, rng))
            .collect();
        Ok(Self { cards })
    }

    /// The generated cards, in number order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Render the whole deck as plain text.
    ///
    /// Deck title, an `=` underline of the same character length, then one
    /// framed block per card with a blank line between blocks.
    pub fn export_text(&self) -> String {
        let mut parts = vec![
            format!("{DECK_TITLE}\n"),
            format!("{}\n", "=".repeat(DECK_TITLE.chars().count())),
        ];
        parts.extend(self.cards.iter().map(render::boxed));
        parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn singleton_config() -> DeckConfig {
        DeckConfig {
            title_distribution: Some(BTreeMap::from([("Le Fou".to_string(), 1)])),
            symbols: Some(vec!["Lune".into()]),
            table_verbes: Some(vec!["Trahir".into()]),
            lieux: Some(vec!["Crypte".into()]),
            personnages: Some(vec!["Barde".into()]),
            objets: Some(vec!["Clé".into()]),
            motivations: Some(vec!["Vengeance".into()]),
            traits: Some(vec!["Rusé".into()]),
            sombres_secrets: Some(vec!["Parjure".into()]),
            reactions_amical_hostile: Some(vec!["Méfiant".into()]),
            relations_pj_pnj: Some(vec!["Rival".into()]),
            ..DeckConfig::default()
        }
    }

    #[test]
    fn single_card_deck_is_deterministic() {
        let cfg = singleton_config();
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::generate(&cfg, 1, &mut rng).unwrap();
        assert_eq!(deck.len(), 1);
        let card = &deck.cards()[0];
        assert_eq!(card.number, 1);
        assert_eq!(card.title, "Le Fou");
        assert_eq!(card.symbol.as_deref(), Some("Lune"));
        assert_eq!(card.lieu.as_deref(), Some("Crypte"));
        assert_eq!(card.secret.as_deref(), Some("Parjure"));
        assert_eq!(card.relation.as_deref(), Some("Rival"));
    }

    #[test]
    fn numbers_are_sequential_without_gaps() {
        let mut cfg = singleton_config();
        cfg.title_distribution = Some(BTreeMap::from([
            ("Le Fou".to_string(), 5),
            ("La Tour".to_string(), 5),
        ]));
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::generate(&cfg, 10, &mut rng).unwrap();
        assert_eq!(deck.len(), 10);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.number, i as u32 + 1);
        }
    }

    #[test]
    fn invalid_config_aborts_before_generation() {
        let mut cfg = singleton_config();
        cfg.motivations = None;
        cfg.objets = Some(vec![]);
        let mut rng = StdRng::seed_from_u64(42);
        let err = Deck::generate(&cfg, 5, &mut rng).unwrap_err();
        match err {
            DeckError::Incomplete { missing, empty } => {
                assert_eq!(missing, vec!["motivations".to_string()]);
                assert_eq!(empty, vec!["objets".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn export_starts_with_title_and_underline() {
        let cfg = singleton_config();
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::generate(&cfg, 2, &mut rng).unwrap();
        let text = deck.export_text();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(DECK_TITLE));
        assert_eq!(lines.next(), Some(""));
        let underline = lines.next().unwrap();
        assert!(underline.chars().all(|c| c == '='));
        assert_eq!(underline.chars().count(), DECK_TITLE.chars().count());
    }

    #[test]
    fn export_separates_blocks_with_blank_lines() {
        let cfg = singleton_config();
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::generate(&cfg, 3, &mut rng).unwrap();
        let text = deck.export_text();
        // Each block ends with its own newline; joining adds the blank line.
        let stars = text.matches("**\n\n**").count();
        assert_eq!(stars, 2);
    }

    #[test]
    fn same_seed_same_deck_text() {
        let mut cfg = singleton_config();
        cfg.symbols = Some(vec!["Lune".into(), "Soleil".into(), "Étoile".into()]);
        cfg.title_distribution = Some(BTreeMap::from([
            ("Le Fou".to_string(), 2),
            ("La Tour".to_string(), 8),
        ]));
        let mut r1 = StdRng::seed_from_u64(99);
        let mut r2 = StdRng::seed_from_u64(99);
        let a = Deck::generate(&cfg, 10, &mut r1).unwrap();
        let b = Deck::generate(&cfg, 10, &mut r2).unwrap();
        assert_eq!(a.export_text(), b.export_text());
    }
}
