//! Huebreed - evolve terminal color schemes from like/dislike feedback

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use huebreed::library::LibraryError;
use huebreed::{ColorScheme, Config, Generator, ReferenceLibrary, Session, paths};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Evolve terminal color schemes from like/dislike feedback
#[derive(Parser, Debug)]
#[command(name = "huebreed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Reference library to use instead of the configured or builtin one
    #[arg(long, global = true, value_name = "PATH")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate schemes without any preference history
    Random {
        /// Number of schemes generated so far in the session
        #[arg(long, default_value_t = 0)]
        total: u64,

        /// How many schemes to generate
        #[arg(long, default_value_t = 1)]
        count: usize,

        #[command(flatten)]
        seed: SeedArg,
    },

    /// Generate a scheme from liked and disliked schemes
    Evolve {
        /// JSON file with one liked scheme or an array of them, oldest first
        #[arg(long, value_name = "FILE")]
        liked: PathBuf,

        /// JSON file with one disliked scheme or an array of them, oldest first
        #[arg(long, value_name = "FILE")]
        disliked: Option<PathBuf>,

        /// Number of schemes generated so far in the session
        #[arg(long, default_value_t = 0)]
        total: u64,

        #[command(flatten)]
        seed: SeedArg,
    },

    /// Mix two schemes slot by slot
    Mix {
        /// First parent scheme
        a: PathBuf,

        /// Second parent scheme
        b: PathBuf,

        /// Session that records both parents as liked
        #[arg(long, value_name = "FILE")]
        session: Option<PathBuf>,

        #[command(flatten)]
        seed: SeedArg,
    },

    /// Deal the next round of schemes for a session
    Deal {
        /// Session file, created if missing
        #[arg(long, value_name = "FILE")]
        session: PathBuf,

        /// Number of schemes in the round (defaults to `cards_per_round`)
        #[arg(long)]
        count: Option<usize>,

        #[command(flatten)]
        seed: SeedArg,
    },

    /// Record a like or dislike in a session
    Vote {
        /// Session file, created if missing
        #[arg(long, value_name = "FILE")]
        session: PathBuf,

        #[command(flatten)]
        target: VoteTarget,
    },

    /// Forget a session's likes and dislikes
    Reset {
        /// Session file
        #[arg(long, value_name = "FILE")]
        session: PathBuf,
    },

    /// List the reference library
    Library {
        /// Only list schemes whose name contains this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Convert a Gogh theme export into a reference library file
    ImportGogh {
        /// Gogh JSON array
        input: PathBuf,

        /// Library file to write
        output: PathBuf,
    },

    /// Show the configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct SeedArg {
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct VoteTarget {
    /// Scheme file to like
    #[arg(long, value_name = "FILE")]
    like: Option<PathBuf>,

    /// Scheme file (or a whole round) to dislike
    #[arg(long, value_name = "FILE")]
    dislike: Option<PathBuf>,
}

/// A scheme file holds either one scheme or an array of them
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemeFile {
    Many(Vec<ColorScheme>),
    One(ColorScheme),
}

#[derive(Serialize)]
struct SessionSummary {
    liked: usize,
    disliked: usize,
    generated: u64,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            liked: session.liked().len(),
            disliked: session.disliked().len(),
            generated: session.generated(),
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    run(cli)
}

/// Log to `<tmp>/huebreed.log` - tail with: `tail -f /tmp/huebreed.log`
///
/// Set `HUEBREED_DEBUG=0-3` to control verbosity (0=off, 1=warn, 2=info, 3=debug).
fn init_logging() {
    let debug_level = std::env::var("HUEBREED_DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);
    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let log_path = paths::log_path();
    let (Some(dir), Some(file)) = (log_path.parent(), log_path.file_name()) else {
        return;
    };
    if let Err(e) = fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let file_appender = tracing_appender::rolling::never(dir, file);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let library_path = cli.library.as_deref();

    match cli.command {
        Commands::Random { total, count, seed } => {
            let library = load_library(library_path, &config)?;
            let generator = Generator::new(&library, config.engine);
            let mut rng = seed.rng()?;
            let schemes: Vec<ColorScheme> = (0..count)
                .map(|_| generator.random_scheme(total, &mut rng))
                .collect();
            print_json(&schemes)
        }
        Commands::Evolve {
            liked,
            disliked,
            total,
            seed,
        } => {
            let library = load_library(library_path, &config)?;
            let generator = Generator::new(&library, config.engine);
            let liked = read_schemes(&liked)?;
            let disliked = disliked
                .as_deref()
                .map(read_schemes)
                .transpose()?
                .unwrap_or_default();
            let mut rng = seed.rng()?;
            print_json(&generator.evolve(&liked, &disliked, total, &mut rng))
        }
        Commands::Mix {
            a,
            b,
            session,
            seed,
        } => cmd_mix(&a, &b, session.as_deref(), seed),
        Commands::Deal {
            session,
            count,
            seed,
        } => {
            let library = load_library(library_path, &config)?;
            let generator = Generator::new(&library, config.engine);
            let count = count.unwrap_or(config.cards_per_round);
            cmd_deal(&session, &generator, count, seed)
        }
        Commands::Vote { session, target } => cmd_vote(&session, target),
        Commands::Reset { session } => cmd_reset(&session),
        Commands::Library { filter } => {
            let library = load_library(library_path, &config)?;
            cmd_library(&library, filter.as_deref())
        }
        Commands::ImportGogh { input, output } => cmd_import_gogh(&input, &output),
        Commands::Config { path } => {
            if path {
                let path = cli.config.unwrap_or_else(Config::default_path);
                println!("{}", path.display());
                Ok(())
            } else {
                print_json(&config)
            }
        }
    }
}

fn cmd_mix(a: &Path, b: &Path, session: Option<&Path>, seed: SeedArg) -> Result<()> {
    let a = read_scheme(a)?;
    let b = read_scheme(b)?;
    let mut rng = seed.rng()?;
    let child = if let Some(path) = session {
        let mut session = Session::load_from(path)?;
        let child = session.mix(&a, &b, &mut rng);
        session.save_to(path)?;
        child
    } else {
        Generator::cross(&a, &b, &mut rng)
    };
    print_json(&child)
}

fn cmd_deal(path: &Path, generator: &Generator<'_>, count: usize, seed: SeedArg) -> Result<()> {
    let mut rng = seed.rng()?;
    let mut session = Session::load_from(path)?;
    let round = session.deal(generator, count, &mut rng);
    session.save_to(path)?;
    print_json(&round)
}

fn cmd_vote(path: &Path, target: VoteTarget) -> Result<()> {
    let mut session = Session::load_from(path)?;
    if let Some(like) = target.like {
        for scheme in read_schemes(&like)? {
            session.like(scheme);
        }
    }
    if let Some(dislike) = target.dislike {
        session.dislike_all(read_schemes(&dislike)?);
    }
    session.save_to(path)?;
    print_json(&SessionSummary::from(&session))
}

fn cmd_reset(path: &Path) -> Result<()> {
    let mut session = Session::load_from(path)?;
    session.clear();
    session.save_to(path)?;
    print_json(&SessionSummary::from(&session))
}

fn cmd_library(library: &ReferenceLibrary, filter: Option<&str>) -> Result<()> {
    let needle = filter.map(str::to_lowercase);
    let names: Vec<&str> = library
        .iter()
        .map(|scheme| scheme.name.as_str())
        .filter(|name| {
            needle
                .as_deref()
                .is_none_or(|needle| name.to_lowercase().contains(needle))
        })
        .collect();
    print_json(&names)
}

fn cmd_import_gogh(input: &Path, output: &Path) -> Result<()> {
    let contents = fs::read_to_string(input)
        .with_context(|| format!("Failed to read Gogh themes from {}", input.display()))?;
    let library = ReferenceLibrary::from_gogh_json(&contents)
        .with_context(|| format!("Failed to import Gogh themes from {}", input.display()))?;
    library.save_to(output)?;
    info!(
        imported = library.len(),
        rejected = library.rejected(),
        "Imported Gogh themes"
    );
    print_json(&serde_json::json!({
        "imported": library.len(),
        "rejected": library.rejected(),
        "output": output.display().to_string(),
    }))
}

impl SeedArg {
    fn rng(self) -> Result<StdRng> {
        match self.seed {
            Some(seed) => Ok(StdRng::seed_from_u64(seed)),
            None => StdRng::try_from_os_rng().context("Failed to seed random generator"),
        }
    }
}

fn load_library(
    path: Option<&Path>,
    config: &Config,
) -> Result<Cow<'static, ReferenceLibrary>, LibraryError> {
    match path.or(config.library_path.as_deref()) {
        Some(path) => ReferenceLibrary::load_from(path).map(Cow::Owned),
        None => ReferenceLibrary::builtin().map(Cow::Borrowed),
    }
}

fn read_schemes(path: &Path) -> Result<Vec<ColorScheme>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schemes from {}", path.display()))?;
    let file: SchemeFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse schemes from {}", path.display()))?;
    let schemes = match file {
        SchemeFile::Many(schemes) => schemes,
        SchemeFile::One(scheme) => vec![scheme],
    };
    for scheme in &schemes {
        scheme
            .validate()
            .with_context(|| format!("Invalid scheme in {}", path.display()))?;
    }
    Ok(schemes)
}

fn read_scheme(path: &Path) -> Result<ColorScheme> {
    read_schemes(path)?
        .into_iter()
        .next()
        .with_context(|| format!("No scheme in {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_random_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["huebreed", "random"])?;
        match cli.command {
            Commands::Random { total, count, seed } => {
                assert_eq!(total, 0);
                assert_eq!(count, 1);
                assert!(seed.seed.is_none());
            }
            _ => return Err("Expected Random command".into()),
        }
        Ok(())
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from([
            "huebreed",
            "deal",
            "--session",
            "s.json",
            "--library",
            "lib.json",
            "--seed",
            "7",
        ])?;
        assert_eq!(cli.library, Some(PathBuf::from("lib.json")));
        match cli.command {
            Commands::Deal {
                session,
                count,
                seed,
            } => {
                assert_eq!(session, PathBuf::from("s.json"));
                assert!(count.is_none());
                assert_eq!(seed.seed, Some(7));
            }
            _ => return Err("Expected Deal command".into()),
        }
        Ok(())
    }

    #[test]
    fn test_cli_vote_requires_exactly_one_target() {
        assert!(Cli::try_parse_from(["huebreed", "vote", "--session", "s.json"]).is_err());
        assert!(
            Cli::try_parse_from([
                "huebreed",
                "vote",
                "--session",
                "s.json",
                "--like",
                "a.json",
                "--dislike",
                "b.json",
            ])
            .is_err()
        );
        assert!(
            Cli::try_parse_from(["huebreed", "vote", "--session", "s.json", "--like", "a.json"])
                .is_ok()
        );
    }

    #[test]
    fn test_cli_import_gogh() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["huebreed", "import-gogh", "in.json", "out.json"])?;
        match cli.command {
            Commands::ImportGogh { input, output } => {
                assert_eq!(input, PathBuf::from("in.json"));
                assert_eq!(output, PathBuf::from("out.json"));
            }
            _ => return Err("Expected ImportGogh command".into()),
        }
        Ok(())
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seeded_rng_is_reproducible() -> Result<(), Box<dyn std::error::Error>> {
        let library = ReferenceLibrary::builtin()?;
        let generator = Generator::new(library, huebreed::EngineConfig::default());
        let seed = SeedArg { seed: Some(42) };
        let first = generator.random_scheme(50, &mut seed.rng()?);
        let second = generator.random_scheme(50, &mut seed.rng()?);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_load_library_prefers_flag_over_config() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = tempfile::TempDir::new()?;
        let flag_path = temp_dir.path().join("flag.json");
        let builtin = ReferenceLibrary::builtin()?;
        let one = ReferenceLibrary::from_schemes(builtin.iter().take(1).cloned());
        one.save_to(&flag_path)?;

        let config = Config {
            library_path: Some(temp_dir.path().join("missing.json")),
            ..Config::default()
        };
        assert_eq!(load_library(Some(flag_path.as_path()), &config)?.len(), 1);
        assert!(load_library(None, &config).is_err());
        assert_eq!(
            load_library(None, &Config::default())?.len(),
            builtin.len()
        );
        Ok(())
    }
}
