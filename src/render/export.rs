//! Sharing the final ranking.
//!
//! The ranking card goes to standard output when it can be piped straight
//! into whatever the user shares with, otherwise it is saved as a file.

use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{render_ranking, render_result};
use crate::i18n::Catalog;
use crate::rules::ScoreSheet;

/// Where the ranking card goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    /// `-` selects standard output; anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            ExportTarget::Stdout
        } else {
            ExportTarget::File(arg.to_path_buf())
        }
    }
}

/// Default file name of an exported ranking, e.g. `papayoo-score.txt`.
#[must_use]
pub fn default_export_name(game: &str) -> PathBuf {
    PathBuf::from(format!("{game}-score.txt"))
}

fn ranking_card<S: ScoreSheet + ?Sized>(sheet: &S, catalog: &Catalog) -> String {
    let mut card = render_ranking(&sheet.ranking(), catalog);
    if let Some(result) = sheet.is_terminal() {
        card.push('\n');
        card.push_str(&render_result(&result, sheet.players(), catalog));
        card.push('\n');
    }
    card
}

/// Write the ranking card. Returns the file written, if any.
pub fn export_ranking<S: ScoreSheet + ?Sized>(
    sheet: &S,
    catalog: &Catalog,
    target: &ExportTarget,
) -> io::Result<Option<PathBuf>> {
    let card = ranking_card(sheet, catalog);
    match target {
        ExportTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(card.as_bytes())?;
            stdout.flush()?;
            Ok(None)
        }
        ExportTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, card)?;
            info!("ranking exported to {}", path.display());
            Ok(Some(path.clone()))
        }
    }
}
