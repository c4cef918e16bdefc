use clap::{Args, Parser, Subcommand};
use oddjobs::{
    config::{Config, ConfigStore, FileConfigStore},
    log_streams::{self, CommandFormatter, LogStreamOptions},
    logging,
    practice::{self, PracticeOptions},
};
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::info;

/// small batch helpers for log housekeeping and typing practice
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Finds empty, stale CloudWatch log streams in captured `aws --debug` output, and generates letter-focused typing drills from a word list."
)]
pub struct Cli {
    /// config file to read defaults from
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
    /// print delete commands for empty log streams idle past the cutoff
    LogStreams(LogStreamsArgs),

    /// print typing drills for the least common letters of the practice set
    Practice(PracticeArgs),

    /// show the effective configuration
    Config {
        /// write the effective configuration to the config file
        #[clap(long)]
        save: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LogStreamsArgs {
    /// output of `aws --debug logs describe-log-streams`
    #[clap(short = 'f', long)]
    debug_file: Option<PathBuf>,

    /// only target streams idle for longer than this many days
    #[clap(short = 'd', long)]
    max_age_days: Option<u32>,

    /// reference time in epoch milliseconds (default: now)
    #[clap(long)]
    now: Option<i64>,

    /// emit commands for every stream, not just eligible ones
    #[clap(long)]
    all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PracticeArgs {
    /// word list, one word per line
    #[clap(short = 'w', long)]
    word_list: Option<PathBuf>,

    /// number of most common letters words may use
    #[clap(short = 'l', long)]
    length: Option<usize>,

    /// words per practice letter
    #[clap(short = 'n', long)]
    count: Option<usize>,

    /// practice letters per run
    #[clap(long)]
    letters: Option<usize>,

    /// letters ordered from most to least common
    #[clap(long)]
    ranking: Option<String>,

    /// seed for reproducible drills
    #[clap(long)]
    seed: Option<u64>,
}

impl LogStreamsArgs {
    /// Merge flags over the configured defaults
    fn to_options(&self, cfg: &Config, now_ms: i64) -> LogStreamOptions {
        LogStreamOptions {
            debug_file: self.debug_file.clone().unwrap_or_else(|| cfg.debug_file.clone()),
            max_age_days: self.max_age_days.unwrap_or(cfg.max_age_days),
            now_ms: self.now.unwrap_or(now_ms),
            include_all: self.all,
        }
    }
}

impl PracticeArgs {
    /// Merge flags over the configured defaults
    fn to_options(&self, cfg: &Config) -> PracticeOptions {
        PracticeOptions {
            word_list: self.word_list.clone().unwrap_or_else(|| cfg.word_list.clone()),
            length: self.length.unwrap_or(cfg.practice_length),
            count: self.count.unwrap_or(cfg.sample_count),
            letters_per_run: self.letters.unwrap_or(cfg.letters_per_run),
            ranking: self.ranking.clone().unwrap_or_else(|| cfg.ranking.clone()),
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    // captured once; every stream is judged against the same instant
    let now_ms = chrono::Utc::now().timestamp_millis();
    let cli = Cli::parse();
    logging::init_logging();

    match run(cli, now_ms) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, now_ms: i64) -> Result<(), Box<dyn Error>> {
    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let cfg = store.load();
    info!(command = %cli.command, config = %store.path().display(), "starting");

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Command::LogStreams(args) => {
            let options = args.to_options(&cfg, now_ms);
            log_streams::run(&options, &CommandFormatter::default(), &mut stdout)
        }
        Command::Practice(args) => practice::run(&args.to_options(&cfg), &mut stdout),
        Command::Config { save } => {
            if *save {
                store.save(&cfg)?;
                info!(path = %store.path().display(), "saved config");
            }
            writeln!(stdout, "{}", serde_json::to_string_pretty(&cfg)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "oddjobs",
            "practice",
            "--length",
            "10",
            "--seed",
            "9",
        ]);
        let Command::Practice(args) = cli.command else {
            panic!("expected practice subcommand");
        };
        let options = args.to_options(&Config::default());
        assert_eq!(options.length, 10);
        assert_eq!(options.count, 20);
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.word_list, PathBuf::from("common-words.txt"));
    }

    #[test]
    fn log_streams_defaults_come_from_config() {
        let cli = Cli::parse_from(["oddjobs", "log-streams", "--all"]);
        let Command::LogStreams(args) = cli.command else {
            panic!("expected log-streams subcommand");
        };
        let cfg = Config {
            max_age_days: 3,
            ..Config::default()
        };
        let options = args.to_options(&cfg, 42);
        assert_eq!(options.debug_file, PathBuf::from("/tmp/debug"));
        assert_eq!(options.max_age_days, 3);
        assert_eq!(options.now_ms, 42);
        assert!(options.include_all);
    }

    #[test]
    fn command_names_render_kebab_case() {
        let cli = Cli::parse_from(["oddjobs", "config"]);
        assert_eq!(cli.command.to_string(), "config");
        let cli = Cli::parse_from(["oddjobs", "log-streams"]);
        assert_eq!(cli.command.to_string(), "log-streams");
    }
}
