//! DOCX export of a generated deck (cargo feature `docx`).
//!
//! One heading per card followed by one paragraph per populated slot, in
//! the same content order as the text renderer. The symbol paragraph is
//! replaced by an embedded image when a matching file exists next to the
//! working directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph, Pic, Run};

use tirage_core::{Card, Deck};

/// Display width of embedded symbol images: 0.52 inch in EMU.
const SYMBOL_WIDTH_EMU: u32 = 475_488;

/// Image extensions probed for a symbol, in match order.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "webp"];

/// Write the whole deck to a DOCX file.
pub fn save(deck: &Deck, path: &Path) -> Result<(), String> {
    let mut docx = Docx::new();
    for card in deck.cards() {
        docx = add_card(docx, card);
    }

    let file = File::create(path)
        .map_err(|e| format!("création impossible de {} : {e}", path.display()))?;
    docx.build()
        .pack(file)
        .map_err(|e| format!("écriture DOCX impossible dans {} : {e}", path.display()))?;
    Ok(())
}

fn add_card(mut docx: Docx, card: &Card) -> Docx {
    docx = docx.add_paragraph(
        Paragraph::new()
            .style("Heading2")
            .add_run(Run::new().add_text(format!("{} :  {}", card.number, card.title))),
    );

    if let Some(symbol) = card.symbol.as_deref() {
        docx = add_symbol(docx, symbol);
    }
    docx = add_multi(docx, "Action(s) centrale(s)", &card.verbs);
    docx = add_single(docx, "Lieu", card.lieu.as_deref());
    docx = add_single(docx, "Personnage", card.personnage.as_deref());
    docx = add_single(docx, "Objet", card.objet.as_deref());
    docx = add_multi(docx, "Émotions", &card.emotions);
    docx = add_single(docx, "Apparence", card.appearance.as_deref());
    docx = add_single(docx, "Motivation", card.motivation.as_deref());
    docx = add_multi(docx, "Caractère", &card.traits);
    docx = add_single(docx, "Secret", card.secret.as_deref());
    docx = add_single(docx, "Relation", card.relation.as_deref());
    docx = add_single(docx, "Réaction (amical/hostile)", card.reaction.as_deref());
    docx = add_multi(docx, "Thèmes dominants", &card.borders);

    docx.add_paragraph(Paragraph::new())
}

/// Embed the symbol as an image when one is found, else a plain line.
fn add_symbol(docx: Docx, symbol: &str) -> Docx {
    match find_symbol_image(symbol).and_then(|p| fs::read(p).ok()) {
        Some(bytes) => {
            let pic = Pic::new(&bytes).size(SYMBOL_WIDTH_EMU, SYMBOL_WIDTH_EMU);
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_image(pic)))
        }
        None => docx.add_paragraph(text_paragraph("Symbole", symbol)),
    }
}

/// Look for an image file named after the symbol.
///
/// Search order: `./symbols/{symbol}.{ext}` then `./{symbol}.{ext}`, for
/// each extension in [`IMAGE_EXTENSIONS`]; the first existing file wins.
fn find_symbol_image(symbol: &str) -> Option<PathBuf> {
    for base in [Path::new("symbols"), Path::new(".")] {
        for ext in IMAGE_EXTENSIONS {
            let candidate = base.join(format!("{symbol}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn add_single(docx: Docx, label: &str, value: Option<&str>) -> Docx {
    match value {
        Some(value) if !value.is_empty() => docx.add_paragraph(text_paragraph(label, value)),
        _ => docx,
    }
}

fn add_multi(docx: Docx, label: &str, values: &[String]) -> Docx {
    if values.is_empty() {
        docx
    } else {
        docx.add_paragraph(text_paragraph(label, &values.join(", ")))
    }
}

fn text_paragraph(label: &str, value: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(format!("{label} : {value}")))
}
