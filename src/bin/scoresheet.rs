//! Command-line score sheet for Dutch and Papayoo.
//!
//! Every invocation loads the session from the data directory, applies one
//! command and writes the session back.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Confirm;
use log::debug;

use scoresheet::core::input::{coerce_score, parse_field};
use scoresheet::games::papayoo::deal_table;
use scoresheet::render::{
    default_export_name, export_ranking, render_hud, render_ranking, render_result, render_table,
    ExportTarget,
};
use scoresheet::storage::{clear_session, load_session, save_session};
use scoresheet::{
    auto_complete, Catalog, DutchConfig, DutchOutcome, DutchSession, FileStore,
    Language, LimitMode, PapayooSession, PlayerNameHistory, Preferences, ScoreError, ScoreSheet,
    SessionPhase, Suit, TableConfig,
};

#[derive(Parser)]
#[command(name = "scoresheet")]
#[command(about = "Score sheets for the Dutch and Papayoo card games", version)]
struct Cli {
    /// Directory holding the saved sessions
    #[arg(long, env = "SCORESHEET_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Display language for this invocation (fr or en)
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dutch: lowest total wins, calling Dutch pays off only for the lone lowest
    Dutch {
        #[command(subcommand)]
        action: DutchAction,
    },
    /// Papayoo: 250 points per deal, lowest total wins
    Papayoo {
        #[command(subcommand)]
        action: PapayooAction,
    },
    /// List known player names, optionally filtered by prefix
    History { prefix: Option<String> },
    /// Set the display language, or toggle it when none is given
    Lang { language: Option<Language> },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Score,
    Rounds,
}

impl From<ModeArg> for LimitMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Score => LimitMode::Score,
            ModeArg::Rounds => LimitMode::Rounds,
        }
    }
}

#[derive(Subcommand)]
enum DutchAction {
    /// Register players and start a game
    Start {
        #[arg(required = true)]
        players: Vec<String>,
        /// First dealer, 1-based seat
        #[arg(long, default_value_t = 1)]
        dealer: usize,
        #[arg(long, value_enum, default_value_t = ModeArg::Score)]
        mode: ModeArg,
        /// Score or round limit (defaults to 100 points or 10 rounds)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Record a round of raw scores in seat order
    Round {
        /// Seat (1-based) of the player who called Dutch
        #[arg(long = "dutch")]
        caller: Option<usize>,
        #[arg(allow_negative_numbers = true)]
        scores: Vec<String>,
    },
    Show,
    Ranking,
    /// Write the ranking card to a file, or to stdout with `-`
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Reset {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PapayooAction {
    /// Register players and start a game
    Start {
        #[arg(required = true)]
        players: Vec<String>,
        /// First dealer, 1-based seat
        #[arg(long, default_value_t = 1)]
        dealer: usize,
    },
    /// Select the Papayoo suit rolled on the die
    Color { suit: Suit },
    /// Record a round; `_` leaves a score blank
    Round {
        /// Accept a round that does not total 250
        #[arg(long)]
        force: bool,
        /// Fill the single blank score so the round totals 250
        #[arg(long)]
        auto: bool,
        #[arg(allow_negative_numbers = true)]
        scores: Vec<String>,
    },
    /// Show the running total of a round without recording it
    Check {
        #[arg(allow_negative_numbers = true)]
        scores: Vec<String>,
    },
    /// Replace the scores of a recorded round (1-based)
    Edit {
        round: usize,
        #[arg(long)]
        force: bool,
        #[arg(allow_negative_numbers = true)]
        scores: Vec<String>,
    },
    /// Close the game once every player has dealt
    Finish,
    Show,
    Ranking,
    /// Write the ranking card to a file, or to stdout with `-`
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Print the rules card
    Rules,
}

struct App {
    store: FileStore,
    catalog: Catalog,
}

impl App {
    fn open(cli: &Cli) -> Result<Self> {
        let dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|d| d.join("scoresheet"))
                .context("could not determine a data directory; pass --data-dir")?,
        };
        debug!("data directory: {}", dir.display());
        let store = FileStore::new(dir);
        let language = match cli.lang {
            Some(language) => language,
            None => Preferences::load(&store)?.language,
        };
        Ok(Self {
            store,
            catalog: Catalog::new(language),
        })
    }

    fn warn(&self, err: &ScoreError) -> anyhow::Error {
        debug!("rejected: {err}");
        anyhow!(self.catalog.error_message(err))
    }

    fn remember(&mut self, names: &[String]) -> Result<()> {
        let added = PlayerNameHistory::remember(&mut self.store, names)?;
        debug!("{added} new names in history");
        Ok(())
    }

    fn confirm_reset(&self, yes: bool) -> Result<bool> {
        if yes {
            return Ok(true);
        }
        Ok(Confirm::new()
            .with_prompt(self.catalog.t("confirm_reset"))
            .default(false)
            .interact()?)
    }

    fn export<S: ScoreSheet>(&self, sheet: &S, game: &str, out: Option<PathBuf>) -> Result<()> {
        let target = match out {
            Some(path) => ExportTarget::from_arg(&path),
            None => ExportTarget::File(default_export_name(game)),
        };
        if let Some(path) = export_ranking(sheet, &self.catalog, &target)
            .context("failed to export ranking")?
        {
            println!("{}", self.catalog.t_with("export_saved", path.display()));
        }
        Ok(())
    }

    fn print_result<S: ScoreSheet>(&self, sheet: &S) {
        if let Some(result) = sheet.is_terminal() {
            println!("{}", self.catalog.t("game_over"));
            println!("{}", render_result(&result, sheet.players(), &self.catalog));
        }
    }
}

fn table(players: Vec<String>, dealer: usize) -> TableConfig {
    // Seats are 1-based on the command line; 0 stays out of range.
    TableConfig::new(players).with_dealer(dealer.wrapping_sub(1))
}

fn dutch(app: &mut App, action: DutchAction) -> Result<()> {
    let mut session: DutchSession = load_session(&mut app.store)?;
    let catalog = app.catalog.clone();

    match action {
        DutchAction::Start {
            players,
            dealer,
            mode,
            limit,
        } => {
            let mut config = DutchConfig::new(mode.into());
            if let Some(limit) = limit {
                config = config.with_limit(limit);
            }
            session
                .start(&table(players, dealer), config)
                .map_err(|e| app.warn(&e))?;
            save_session(&mut app.store, &session)?;
            let names = session.players().to_vec();
            app.remember(&names)?;
            println!("{}", render_table(&session, &catalog));
        }
        DutchAction::Round { caller, scores } => {
            let raw: Vec<i32> = scores.iter().map(|s| coerce_score(s)).collect();
            let caller = caller.map(|seat| seat.wrapping_sub(1));
            let round = session
                .record_round(&raw, caller)
                .map_err(|e| app.warn(&e))?;
            save_session(&mut app.store, &session)?;

            println!("{}", catalog.t_with("round_saved", session.round_count()));
            if let (Some(caller), Some(outcome)) = (round.caller, round.outcome()) {
                let name = &session.players()[caller.index()];
                let key = match outcome {
                    DutchOutcome::Bonus => "dutch_bonus",
                    DutchOutcome::Void => "dutch_void",
                    DutchOutcome::Penalty => "dutch_penalty",
                };
                println!("{}", catalog.t_with(key, name));
            }
            println!("{}", render_table(&session, &catalog));
            app.print_result(&session);
        }
        DutchAction::Show => {
            if session.phase() == SessionPhase::Setup {
                println!("{}", catalog.t("no_game"));
                return Ok(());
            }
            println!("{}", render_table(&session, &catalog));
            app.print_result(&session);
        }
        DutchAction::Ranking => {
            print!("{}", render_ranking(&session.ranking(), &catalog));
            app.print_result(&session);
        }
        DutchAction::Export { out } => app.export(&session, "dutch", out)?,
        DutchAction::Reset { yes } => {
            if app.confirm_reset(yes)? {
                session.reset();
                clear_session::<DutchSession>(&mut app.store)?;
                println!("{}", catalog.t("reset_done"));
            } else {
                println!("{}", catalog.t("reset_cancelled"));
            }
        }
    }
    Ok(())
}

fn papayoo(app: &mut App, action: PapayooAction) -> Result<()> {
    let mut session: PapayooSession = load_session(&mut app.store)?;
    let catalog = app.catalog.clone();

    match action {
        PapayooAction::Start { players, dealer } => {
            session
                .start(&table(players, dealer))
                .map_err(|e| app.warn(&e))?;
            save_session(&mut app.store, &session)?;
            let names = session.players().to_vec();
            app.remember(&names)?;
            println!("{}", render_table(&session, &catalog));
        }
        PapayooAction::Color { suit } => {
            session.select_color(suit).map_err(|e| app.warn(&e))?;
            save_session(&mut app.store, &session)?;
            println!("{}", catalog.t_with("color_set", suit));
        }
        PapayooAction::Round {
            force,
            auto,
            scores,
        } => {
            let mut fields: Vec<Option<i32>> = scores.iter().map(|s| parse_field(s)).collect();
            let player_count = session.players().len();
            if fields.len() > player_count {
                return Err(app.warn(&ScoreError::ScoreCount {
                    expected: player_count,
                    got: fields.len(),
                }));
            }
            fields.resize(player_count, None);
            if auto {
                let (seat, value) = auto_complete(&mut fields).map_err(|e| app.warn(&e))?;
                let name = session.players().get(seat).map_or("?", String::as_str);
                println!("{}", catalog.t_with("auto_filled", format!("{name} = {value}")));
            }
            println!("{}", render_hud(&fields, &catalog));

            let was_finishable = session.can_finish();
            session
                .record_round(&fields, force)
                .map_err(|e| app.warn(&e))?;
            save_session(&mut app.store, &session)?;

            println!("{}", catalog.t_with("round_saved", session.round_count()));
            println!("{}", render_table(&session, &catalog));
            if session.can_finish() && !was_finishable {
                println!("{}", catalog.t("final_unlocked"));
            }
        }
        PapayooAction::Check { scores } => {
            let fields: Vec<Option<i32>> = scores.iter().map(|s| parse_field(s)).collect();
            println!("{}", render_hud(&fields, &catalog));
        }
        PapayooAction::Edit {
            round,
            force,
            scores,
        } => {
            let fields: Vec<Option<i32>> = scores.iter().map(|s| parse_field(s)).collect();
            // Round 0 wraps to an index no sheet reaches.
            let index = round.checked_sub(1).unwrap_or(usize::MAX);
            session
                .edit_round(index, &fields, force)
                .map_err(|e| match e {
                    ScoreError::UnknownRound(_) => app.warn(&ScoreError::UnknownRound(round)),
                    other => app.warn(&other),
                })?;
            save_session(&mut app.store, &session)?;
            println!("{}", catalog.t_with("round_edited", round));
            println!("{}", render_table(&session, &catalog));
        }
        PapayooAction::Finish => {
            session.finish().map_err(|e| app.warn(&e))?;
            save_session(&mut app.store, &session)?;
            print!("{}", render_ranking(&session.ranking(), &catalog));
            app.print_result(&session);
        }
        PapayooAction::Show => {
            if session.phase() == SessionPhase::Setup {
                println!("{}", catalog.t("no_game"));
                return Ok(());
            }
            println!("{}", render_table(&session, &catalog));
            if session.phase() == SessionPhase::InProgress {
                let next = session.round_count() + 1;
                match session.active_color() {
                    Some(suit) => println!("{} {suit}", catalog.t_with("dice_label", next)),
                    None => println!("{}", catalog.t_with("dice_label", next)),
                }
                if session.can_finish() {
                    println!("{}", catalog.t("final_unlocked"));
                }
            }
            app.print_result(&session);
        }
        PapayooAction::Ranking => {
            print!("{}", render_ranking(&session.ranking(), &catalog));
            app.print_result(&session);
        }
        PapayooAction::Export { out } => app.export(&session, "papayoo", out)?,
        PapayooAction::Reset { yes } => {
            if app.confirm_reset(yes)? {
                session.reset();
                clear_session::<PapayooSession>(&mut app.store)?;
                println!("{}", catalog.t("reset_done"));
            } else {
                println!("{}", catalog.t("reset_cancelled"));
            }
        }
        PapayooAction::Rules => {
            println!("{}", catalog.t("rules_goal"));
            println!("{}", catalog.t("rules_papayoo"));
            println!("{}", catalog.t("rules_payoo"));
            for players in 3..=6 {
                if let Some(deal) = deal_table(players) {
                    println!(
                        "{}  {} / {}",
                        catalog.t_with("rules_deal", players),
                        deal.dealt,
                        deal.passed
                    );
                }
            }
        }
    }
    Ok(())
}

fn history(app: &App, prefix: Option<String>) -> Result<()> {
    let history = PlayerNameHistory::load(&app.store)?;
    let names: Vec<&str> = match prefix.as_deref() {
        Some(prefix) => history.suggestions(prefix),
        None => history.iter().collect(),
    };
    if names.is_empty() {
        println!("{}", app.catalog.t("history_empty"));
    } else {
        println!("{}", app.catalog.t("history"));
        for name in names {
            println!("  {name}");
        }
    }
    Ok(())
}

fn language(app: &mut App, language: Option<Language>) -> Result<()> {
    let mut preferences = Preferences::load(&app.store)?;
    preferences.language = language.unwrap_or_else(|| preferences.language.toggled());
    preferences.save(&mut app.store)?;
    app.catalog = Catalog::new(preferences.language);
    println!("{}", app.catalog.t_with("lang_set", preferences.language));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut app = App::open(&cli)?;

    match cli.command {
        Commands::Dutch { action } => dutch(&mut app, action),
        Commands::Papayoo { action } => papayoo(&mut app, action),
        Commands::History { prefix } => history(&app, prefix),
        Commands::Lang { language: choice } => language(&mut app, choice),
    }
}
