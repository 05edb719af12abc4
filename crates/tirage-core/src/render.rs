//! Fixed-width framed text rendering of a card.
//!
//! Widths are computed in characters, not bytes, so accented French
//! content and the em dash in the header line up correctly.

use crate::card::Card;

/// Build the display lines of a card, in their fixed label order.
///
/// The header comes first, then one `"Label : value"` line per populated
/// slot. Multi-value slots join their elements with `", "`. The reaction
/// line keeps its long literal label, and the themes line always comes
/// last. Unpopulated slots produce no line.
pub fn content_lines(card: &Card) -> Vec<String> {
    let mut lines = vec![format!("Carte {} — {}", card.number, card.title)];

    push_single(&mut lines, "Symbole", card.symbol.as_deref());
    push_multi(&mut lines, "Verbes", &card.verbs);
    push_single(&mut lines, "Lieu", card.lieu.as_deref());
    push_single(&mut lines, "Personnage", card.personnage.as_deref());
    push_single(&mut lines, "Objet", card.objet.as_deref());
    push_multi(&mut lines, "Émotions", &card.emotions);
    push_single(&mut lines, "Apparence", card.appearance.as_deref());
    push_single(&mut lines, "Motivation", card.motivation.as_deref());
    push_multi(&mut lines, "Traits", &card.traits);
    push_single(&mut lines, "Secret", card.secret.as_deref());
    push_single(&mut lines, "Relation", card.relation.as_deref());
    push_single(
        &mut lines,
        "Réaction (amical/hostile)",
        card.reaction.as_deref(),
    );
    push_multi(&mut lines, "Thèmes", &card.borders);

    lines
}

/// Render one card as an asterisk-framed block.
///
/// The frame is four characters wider than the longest content line; each
/// content line is padded on the right so that the closing `*` of every
/// line sits in the same column. The block ends with a trailing newline
/// for inter-card separation. A card yielding no content lines renders as
/// an empty string with no frame at all.
pub fn boxed(card: &Card) -> String {
    let lines = content_lines(card);
    if lines.is_empty() {
        return String::new();
    }

    let max_len = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let border = "*".repeat(max_len + 4);

    let mut out = String::with_capacity((max_len + 5) * (lines.len() + 2));
    out.push_str(&border);
    out.push('\n');
    for line in &lines {
        let padding = " ".repeat(max_len - line.chars().count());
        out.push_str(&format!("*{line}{padding} *\n"));
    }
    out.push_str(&border);
    out.push('\n');
    out
}

fn push_single(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => lines.push(format!("{label} : {value}")),
        _ => {}
    }
}

fn push_multi(lines: &mut Vec<String>, label: &str, values: &[String]) {
    if !values.is_empty() {
        lines.push(format!("{label} : {}", values.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_card() -> Card {
        let mut card = Card::bare(7, "La Tour");
        card.symbol = Some("Lune".into());
        card.verbs = vec!["Trahir".into(), "Fuir".into(), "Prier".into()];
        card.lieu = Some("Crypte oubliée".into());
        card.personnage = Some("Barde".into());
        card.objet = Some("Clé".into());
        card.emotions = vec!["Peur".into(), "Joie".into()];
        card.appearance = Some("Balafré".into());
        card.motivation = Some("Vengeance".into());
        card.traits = vec!["Rusé".into(), "Cupide".into(), "Loyal".into()];
        card.secret = Some("Parjure".into());
        card.reaction = Some("Méfiant".into());
        card.relation = Some("Rival".into());
        card.borders = vec!["Feu".into(), "Glace".into()];
        card
    }

    #[test]
    fn bare_card_renders_header_only() {
        let card = Card::bare(1, "X");
        let block = boxed(&card);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3);
        let header = "Carte 1 — X";
        assert_eq!(lines[0], "*".repeat(header.chars().count() + 4));
        assert_eq!(lines[1], format!("*{header} *"));
        assert_eq!(lines[2], lines[0]);
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn label_order_is_fixed_with_themes_last() {
        let card = full_card();
        let lines = content_lines(&card);
        let labels: Vec<&str> = lines
            .iter()
            .skip(1)
            .map(|l| l.split(" : ").next().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Symbole",
                "Verbes",
                "Lieu",
                "Personnage",
                "Objet",
                "Émotions",
                "Apparence",
                "Motivation",
                "Traits",
                "Secret",
                "Relation",
                "Réaction (amical/hostile)",
                "Thèmes",
            ]
        );
    }

    #[test]
    fn multi_value_slots_join_with_commas() {
        let card = full_card();
        let lines = content_lines(&card);
        assert!(lines.contains(&"Verbes : Trahir, Fuir, Prier".to_string()));
        assert!(lines.contains(&"Thèmes : Feu, Glace".to_string()));
    }

    #[test]
    fn unpopulated_slots_produce_no_line() {
        let mut card = Card::bare(2, "Le Fou");
        card.lieu = Some("Crypte".into());
        let lines = content_lines(&card);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Lieu : Crypte");
    }

    #[test]
    fn right_edges_align_for_all_content_lines() {
        let card = full_card();
        let block = boxed(&card);
        let widths: Vec<usize> = block
            .lines()
            .filter(|l| !l.chars().all(|c| c == '*'))
            .map(|l| l.chars().count())
            .collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn frame_width_counts_characters_not_bytes() {
        let mut card = Card::bare(1, "É—É");
        card.lieu = Some("Forêt pétrifiée".into());
        let block = boxed(&card);
        let lines: Vec<&str> = block.lines().collect();
        let longest = "Lieu : Forêt pétrifiée";
        assert_eq!(lines[0].chars().count(), longest.chars().count() + 4);
        // Both content lines end in the same column.
        assert_eq!(lines[1].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn rendering_is_idempotent() {
        let card = full_card();
        assert_eq!(boxed(&card), boxed(&card));
    }
}
