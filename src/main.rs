use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verlayout::prelude::*;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Layout(#[from] LayoutError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum PreReleaseArg {
    Alpha,
    Beta,
    Rc,
    Release,
}

impl PreReleaseArg {
    fn to_pre_release(self) -> PreRelease {
        match self {
            PreReleaseArg::Alpha => PreRelease::Alpha,
            PreReleaseArg::Beta => PreRelease::Beta,
            PreReleaseArg::Rc => PreRelease::ReleaseCandidate,
            PreReleaseArg::Release => PreRelease::Release,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More logging on stderr. Repeat for more detail (`-vvv` traces every field)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses a version string and prints its fields
    Parse {
        /// The layout the version is written in
        #[arg(short, long)]
        layout: String,

        /// The version string to parse
        version: String,
    },

    /// Formats a version from its fields
    Format {
        /// The layout to write the version in
        #[arg(short, long)]
        layout: String,

        #[arg(long, default_value_t = 0)]
        major: i64,

        #[arg(long, default_value_t = 0)]
        minor: i64,

        #[arg(long, default_value_t = 0)]
        patch: i64,

        #[arg(long, default_value_t = 0)]
        build: i64,

        /// The pre-release stage
        #[arg(long, value_enum, default_value_t = PreReleaseArg::Release)]
        pre: PreReleaseArg,

        /// Free-form text for an `o` token
        #[arg(long, default_value = "")]
        other: String,
    },

    /// Validates that a version string matches a layout
    Valid {
        /// The layout to validate against
        #[arg(short, long)]
        layout: String,

        /// The version string to validate
        version: String,
    },

    /// Compares two version strings written in the same layout, printing `<`, `=` or `>`
    Compare {
        /// The layout both versions are written in
        #[arg(short, long)]
        layout: String,

        /// The left-hand version string
        left: String,

        /// The right-hand version string
        right: String,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("{}", e);
    }

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the verbosity flags.
fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let level = derive_level(cli.verbose, cli.quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("verlayout={level}")));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

fn derive_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn describe(version: &Version) -> String {
    [
        format!("major={}", version.major),
        format!("minor={}", version.minor),
        format!("patch={}", version.patch),
        format!("pre_release={}", version.pre_release),
        format!("build={}", version.build),
        format!("other={}", version.other),
    ]
    .join("\n")
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Parse { layout, version } => {
            let version = Layout::new(&layout)?.parse_version(&version)?;
            Ok((describe(&version), 0))
        }
        Commands::Format {
            layout,
            major,
            minor,
            patch,
            build,
            pre,
            other,
        } => {
            let version = Version::new(major, minor, patch)
                .with_build(build)
                .with_pre_release(pre.to_pre_release())
                .with_other(other);
            Ok((Layout::new(&layout)?.format_version(&version)?, 0))
        }
        Commands::Valid { layout, version } => {
            // a bad layout is an error, not an invalid version
            let layout = Layout::new(&layout)?;
            Ok(match layout.parse_version(&version) {
                Ok(_) => ("true".to_string(), 0),
                Err(e) => {
                    tracing::info!(%e, "version does not match layout");
                    ("false".to_string(), 1)
                }
            })
        }
        Commands::Compare {
            layout,
            left,
            right,
        } => {
            let layout = Layout::new(&layout)?;
            let left = layout.parse_version(&left)?;
            let right = layout.parse_version(&right)?;
            let symbol = match left.cmp(&right) {
                std::cmp::Ordering::Less => "<",
                std::cmp::Ordering::Equal => "=",
                std::cmp::Ordering::Greater => ">",
            };
            Ok((symbol.to_string(), 0))
        }
    }
}
