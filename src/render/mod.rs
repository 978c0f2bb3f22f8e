//! Text projections of a score sheet.
//!
//! Rendering reads a `ScoreSheet` and a `Catalog` and returns strings; it
//! never mutates a session. The board table, the final ranking card and
//! the live round total are the three views the CLI prints.

mod export;

use std::fmt::Write as _;

use crate::core::PAPAYOO_POINTS;
use crate::games::papayoo::round_sum;
use crate::i18n::Catalog;
use crate::rules::{GameResult, Ranking, ScoreSheet};

pub use export::{default_export_name, export_ranking, ExportTarget};

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let mut out = String::with_capacity(width.max(len));
    out.push_str(cell);
    for _ in len..width {
        out.push(' ');
    }
    out
}

/// The running score table: one column per player, one row per round and
/// a total row. The dealer's column header is marked with `*`.
#[must_use]
pub fn render_table<S: ScoreSheet + ?Sized>(sheet: &S, catalog: &Catalog) -> String {
    let players = sheet.players();
    let dealer = sheet.dealer().index();

    let header: Vec<String> = players
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == dealer {
                format!("{name}*")
            } else {
                name.clone()
            }
        })
        .collect();

    let mut rows: Vec<(String, Vec<String>)> = (0..sheet.round_count())
        .map(|round| {
            let label = match sheet.round_label(round) {
                Some(marker) => format!("{} {marker}", round + 1),
                None => (round + 1).to_string(),
            };
            let scores = sheet.round_scores(round).unwrap_or(&[]);
            let cells = (0..players.len())
                .map(|i| scores.get(i).copied().unwrap_or(0).to_string())
                .collect();
            (label, cells)
        })
        .collect();

    let totals = sheet.totals();
    rows.push((
        catalog.t("total").to_string(),
        totals.as_slice().iter().map(ToString::to_string).collect(),
    ));

    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(1))
        .max()
        .unwrap_or(1);
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .map(|(_, cells)| cells[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_line = |label: &str, cells: &[String]| {
        let mut line = pad(label, label_width);
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str(" | ");
            line.push_str(&pad(cell, *width));
        }
        line.trim_end().to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", render_line("#", &header));
    let separator_len = label_width + widths.iter().map(|w| w + 3).sum::<usize>();
    let _ = writeln!(out, "{}", "-".repeat(separator_len));
    let total_row = rows.len() - 1;
    for (i, (label, cells)) in rows.iter().enumerate() {
        if i == total_row {
            let _ = writeln!(out, "{}", "-".repeat(separator_len));
        }
        let _ = writeln!(out, "{}", render_line(label, cells));
    }
    out
}

/// Final standings card. Rank 0 carries the trophy; other lines show
/// their 1-based position.
#[must_use]
pub fn render_ranking(ranking: &Ranking, catalog: &Catalog) -> String {
    let name_width = ranking
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", catalog.t("final_res"));
    for standing in ranking.iter() {
        let marker = if standing.position == 0 {
            "🏆".to_string()
        } else {
            format!("{}.", standing.position + 1)
        };
        let _ = writeln!(
            out,
            "{} {}  {:>5}",
            pad(&marker, 3),
            pad(&standing.name, name_width),
            standing.total
        );
    }
    out
}

/// Winner announcement for a finished game.
#[must_use]
pub fn render_result(result: &GameResult, names: &[String], catalog: &Catalog) -> String {
    let name_of = |i: usize| names.get(i).cloned().unwrap_or_default();
    match result {
        GameResult::Winner(p) => catalog.t_with("winner", name_of(p.index())),
        GameResult::Winners(ps) => {
            let joined = ps
                .iter()
                .map(|p| name_of(p.index()))
                .collect::<Vec<_>>()
                .join(", ");
            catalog.t_with("winners", joined)
        }
    }
}

/// Live total of a Papayoo round being entered, with a check mark once it
/// reaches 250.
#[must_use]
pub fn render_hud(fields: &[Option<i32>], catalog: &Catalog) -> String {
    let sum = round_sum(fields);
    let mark = if sum == i64::from(PAPAYOO_POINTS) { "✓" } else { "✗" };
    format!("{} {mark}", catalog.t_with("hud", sum))
}
