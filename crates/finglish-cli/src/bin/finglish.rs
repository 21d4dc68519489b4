use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use finglish_cli::commands::{convert_cmd, explain_cmd, read_phrase};
use finglish_cli::die;
use finglish_cli::trace_init::init_tracing;
use finglish_core::converter::RankMode;
use finglish_core::dict::Lexicon;
use finglish_core::settings::{self, settings};

#[derive(Parser)]
#[command(
    name = "finglish",
    about = "Convert Finglish (Latin-transliterated Persian) to Persian script",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Phrase to convert (prompts for one line on stdin when omitted)
    phrase: Vec<String>,

    /// Directory holding the conversion tables and frequency list
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Path to a settings TOML overriding the defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// How per-word candidates are chosen
    #[arg(long, global = true, value_enum)]
    mode: Option<ModeArg>,

    /// Number of results to print (default: output.max_results)
    #[arg(short, long)]
    n: Option<usize>,

    /// Output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log conversion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show every segmentation of a word and the candidates it produced
    Explain {
        /// Transliterated word
        word: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Enumeration,
    Confidence,
}

impl From<ModeArg> for RankMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Enumeration => RankMode::Enumeration,
            ModeArg::Confidence => RankMode::Confidence,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(ref path) = cli.settings {
        let content = die!(fs::read_to_string(path), "Error reading settings: {}");
        die!(settings::init_custom(content), "Error in settings: {}");
    }

    let mut opts = settings().rank_options();
    if let Some(mode) = cli.mode {
        opts.mode = mode.into();
    }

    eprintln!("Loading converters...");
    let lexicon = die!(Lexicon::open(&cli.data_dir), "Error loading data: {}");

    match cli.command {
        Some(Command::Explain { word }) => {
            die!(
                explain_cmd(&lexicon, &word, &opts, cli.json),
                "Error: {}"
            );
        }
        None => {
            let phrase = if cli.phrase.is_empty() {
                die!(read_phrase(), "Error reading input: {}")
            } else {
                cli.phrase.join(" ")
            };
            let n = cli.n.unwrap_or(settings().output.max_results);
            die!(
                convert_cmd(&lexicon, &phrase, n, &opts, cli.json),
                "Error: {}"
            );
        }
    }
}
