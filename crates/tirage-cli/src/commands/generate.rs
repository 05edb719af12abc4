use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tirage_core::Deck;

pub fn run(
    config_path: &Path,
    count: Option<u32>,
    seed: Option<u64>,
    txt: Option<&Path>,
    docx: Option<&Path>,
    no_docx: bool,
) -> Result<(), String> {
    let cfg = super::load_and_validate(config_path)?;

    let card_count = match count {
        Some(n) if n > 0 => n,
        Some(_) => return Err("le nombre de cartes doit être supérieur à zéro".into()),
        None => {
            let stdin = io::stdin();
            prompt_card_count(cfg.card_count, &mut stdin.lock(), &mut io::stdout())
                .map_err(|e| e.to_string())?
        }
    };

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let deck = Deck::generate(&cfg, card_count, &mut rng).map_err(|e| e.to_string())?;

    let txt_path = txt.map_or_else(|| PathBuf::from(&cfg.output.txt_file), Path::to_path_buf);
    fs::write(&txt_path, deck.export_text())
        .map_err(|e| format!("écriture impossible dans {} : {e}", txt_path.display()))?;
    println!(
        "{} Fichier texte généré : {}",
        "[OK]".green(),
        txt_path.display()
    );

    if !no_docx && cfg.output.create_docx {
        let docx_path = docx.map_or_else(|| PathBuf::from(&cfg.output.docx_file), Path::to_path_buf);
        write_docx(&deck, &docx_path)?;
    }

    Ok(())
}

#[cfg(feature = "docx")]
fn write_docx(deck: &Deck, path: &Path) -> Result<(), String> {
    crate::docx::save(deck, path)?;
    println!(
        "{} Fichier DOCX généré : {}",
        "[OK]".green(),
        path.display()
    );
    Ok(())
}

#[cfg(not(feature = "docx"))]
fn write_docx(_deck: &Deck, _path: &Path) -> Result<(), String> {
    println!(
        "{} support DOCX non compilé (feature `docx`), DOCX non généré.",
        "[INFO]".blue()
    );
    Ok(())
}

/// Ask the operator how many cards to generate.
///
/// Empty input accepts the configured default; anything that is not a
/// positive integer triggers a warning and another prompt, indefinitely.
/// End of input also accepts the default so that piped stdin cannot spin.
fn prompt_card_count(
    default: u32,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<u32> {
    loop {
        write!(output, "Combien de cartes générer ? (Défaut: {default}) : ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(default);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }

        match trimmed.parse::<u32>() {
            Ok(n) if n > 0 => return Ok(n),
            Ok(_) => writeln!(
                output,
                "{} Le nombre doit être supérieur à zéro.",
                "[ATTENTION]".yellow()
            )?,
            Err(_) => writeln!(
                output,
                "{} Entrée invalide. Veuillez entrer un nombre entier positif.",
                "[ATTENTION]".yellow()
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(default: u32, input: &str) -> (u32, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let n = prompt_card_count(default, &mut reader, &mut output).unwrap();
        (n, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_input_accepts_default() {
        let (n, out) = prompt(100, "\n");
        assert_eq!(n, 100);
        assert!(out.contains("(Défaut: 100)"));
    }

    #[test]
    fn eof_accepts_default() {
        let (n, _) = prompt(7, "");
        assert_eq!(n, 7);
    }

    #[test]
    fn valid_number_is_returned() {
        let (n, _) = prompt(100, "25\n");
        assert_eq!(n, 25);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let (n, _) = prompt(100, "  25  \n");
        assert_eq!(n, 25);
    }

    #[test]
    fn zero_reprompts() {
        let (n, out) = prompt(100, "0\n3\n");
        assert_eq!(n, 3);
        assert!(out.contains("supérieur à zéro"));
    }

    #[test]
    fn garbage_reprompts_until_valid() {
        let (n, out) = prompt(100, "abc\n-4\n12\n");
        assert_eq!(n, 12);
        assert_eq!(out.matches("Entrée invalide").count(), 2);
        assert_eq!(out.matches("Combien de cartes").count(), 3);
    }
}
