use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use survivor::search::{search, SearchConfig, Termination};
use survivor_nfl::print::{describe, tabulate};
use survivor_nfl::records::{RecentForm, RecordsConfig};
use survivor_nfl::report::Report;
use survivor_nfl::{chosen, file, records, schedule};

#[derive(Debug, clap::Parser, Clone)]
#[command(about = "Make picks for survivor football")]
struct Args {
    /// starting week
    #[clap(long = "sw", default_value_t = 1)]
    start_week: usize,

    /// ending week
    #[clap(long = "ew", default_value_t = 17)]
    end_week: usize,

    /// file listing the teams already picked, or held back
    #[clap(long, default_value = "chosen.txt")]
    chosen: PathBuf,

    /// schedule as a tab-separated grid
    #[clap(long, default_value = "schedule.txt")]
    schedule: PathBuf,

    /// directory containing the weekly scores (01.txt, 02.txt, ...)
    #[clap(long, default_value = "season")]
    season: PathBuf,

    /// deduplicate the frontier after every week
    #[clap(long)]
    prune: bool,

    /// only pick teams with a composite win probability above the confidence floor
    #[clap(long)]
    strict: bool,

    /// branch on both sides of every matchup, not only on the favourite
    #[clap(long)]
    exhaustive: bool,

    /// number of sequences to show
    #[clap(long, default_value_t = SearchConfig::DEFAULT_TOP_N)]
    n: usize,

    /// abort if the frontier grows beyond this many sequences
    #[clap(long)]
    max_frontier: Option<usize>,

    /// abort if the search runs for longer than this many seconds
    #[clap(long)]
    deadline_secs: Option<u64>,

    /// average recent form over the full window of recent games, even if fewer were played
    #[clap(long)]
    form_window: bool,

    /// write the ranked sequences to a JSON file
    #[clap(long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.start_week == 0 {
            bail!("weeks are numbered from 1");
        }
        if self.start_week > self.end_week {
            bail!("starting week must not be after the ending week");
        }
        if self.n == 0 {
            bail!("at least one sequence must be shown");
        }
        Ok(())
    }

    fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_prune(self.prune)
            .with_strict_confidence(self.strict)
            .with_favourites_only(!self.exhaustive)
            .with_top_n(self.n)
            .with_max_frontier(self.max_frontier)
            .with_deadline(self.deadline_secs.map(Duration::from_secs))
    }

    fn records_config(&self) -> RecordsConfig {
        RecordsConfig {
            recent_form: if self.form_window {
                RecentForm::Window
            } else {
                RecentForm::Played
            },
            ..RecordsConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let schedule = schedule::read_grid(&args.schedule, args.start_week, args.end_week)?;
    let records = records::read_season_dir(&args.season, &args.records_config())?;
    let chosen = chosen::read(&args.chosen)?;
    info!(
        "{} week(s) from week {}, {} team record(s), {} team(s) chosen",
        schedule.len(),
        schedule.week_number(0),
        records.len(),
        chosen.len()
    );

    let outcome = search(&schedule, &records, &chosen, &args.search_config())?;
    if let Termination::WeekEmpty { week } = outcome.termination {
        info!("no team left to pick in week {week}; ranking the sequences from the prior week");
    }
    info!(
        "searched {} week(s) in {}s; {} sequence(s) in the final frontier",
        outcome.weeks.len(),
        outcome.elapsed.as_millis() as f64 / 1_000.,
        outcome.frontier.len()
    );
    info!("best sequences:\n{}", Console::default().render(&tabulate(&outcome.ranked)));
    for sequence in &outcome.ranked {
        println!("\n{}", describe(sequence, &schedule));
    }

    if let Some(out) = &args.out {
        let end_week = schedule.week_number(schedule.len() - 1);
        file::write_json(out, &Report::new(schedule.week_number(0), end_week, &outcome))?;
        info!("wrote {} sequence(s) to {out:?}", outcome.ranked.len());
    }
    Ok(())
}
