use clap::{ArgAction, Parser};
use gogger::Level;

/// Gogger: print one leveled, timestamped log line.
///
/// Builds a logger for --project with the given --time-format and --level,
/// then emits MESSAGE at --severity. Lines below the level are dropped.
///
/// Log lines go to stdout; diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Project tag shown in brackets
    #[arg(long = "project", default_value = "gogger")]
    pub project: String,

    /// Timestamp layout: uk | us | day-first | month-first | any strftime pattern
    #[arg(long = "time-format", default_value = "uk")]
    pub time_format: String,

    /// Color the severity label and project tag
    #[arg(long = "color", action = ArgAction::SetTrue)]
    pub color: bool,

    /// Threshold: 0=verbose, 1=info, 2=warn, 3=error, 4=fatal
    #[arg(long = "level", default_value_t = 1, allow_negative_numbers = true)]
    pub level: i32,

    /// Severity of the message
    #[arg(long = "severity", default_value = "info")]
    pub severity: Level,

    /// Diagnostic verbosity on stderr: 0=warn, 1=info, 2=debug, 3=trace
    #[arg(long = "verbosity", default_value_t = 0)]
    pub verbosity: u8,

    /// Message text; words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl Args {
    /// Resolve a preset name, or pass a custom pattern through.
    pub fn time_pattern(&self) -> &str {
        gogger::preset(&self.time_format).unwrap_or(self.time_format.as_str())
    }

    pub fn message(&self) -> String {
        self.message.join(" ")
    }

    /// Validate numeric constraints that clap doesn't enforce here.
    fn validate(&self) -> anyhow::Result<()> {
        if self.verbosity > 3 {
            anyhow::bail!("--verbosity must be in 0..=3");
        }
        if self.time_format.trim().is_empty() {
            anyhow::bail!("--time-format must not be empty");
        }
        Ok(())
    }
}

/// Parse CLI args in one place so main.rs does not need clap in scope.
pub fn parse() -> Args {
    let args = Args::parse();
    if let Err(e) = args.validate() {
        eprintln!("error: {}", e);
        std::process::exit(2);
    }
    args
}
