#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via the `SORTVIZ_*`
//! prefix; explicit flags win over the environment.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Sort Visualizer — animated bubble, merge, and quick sort

USAGE:
    sortviz-demo [OPTIONS]

OPTIONS:
    --size=N         Number of bars (default: 100)
    --delay-ms=N     Pacing interval per step in milliseconds (default: 50)
    --max-value=N    Exclusive upper bound for bar values (default: 570)
    --help, -h       Show this help message
    --version, -V    Show version

KEYBINDINGS:
    1               Start bubble sort
    2               Start merge sort
    3               Start quick sort
    r               Reset to a fresh random array
    q / Esc / ^C    Quit

Start and reset are ignored while a sort is running; there is no
mid-run cancellation.

ENVIRONMENT VARIABLES:
    SORTVIZ_SIZE             Override --size
    SORTVIZ_DELAY_MS         Override --delay-ms
    SORTVIZ_MAX_VALUE        Override --max-value
    SORTVIZ_EXIT_AFTER_MS    Auto-quit after N milliseconds (for testing)
    SORTVIZ_LOG              Write tracing output to this file";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Number of elements in the array.
    pub size: usize,
    /// Pacing interval in milliseconds.
    pub delay_ms: u64,
    /// Exclusive upper bound for generated values.
    pub max_value: i32,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            size: 100,
            delay_ms: 50,
            max_value: 570,
            exit_after_ms: 0,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags. Prints help/version and
    /// exits for `--help`/`--version`; exits with status 1 on bad input.
    pub fn parse() -> Self {
        let mut opts = Self::default();
        opts.apply_env();

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("sortviz-demo {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Err(message) = opts.apply_arg(other) {
                        eprintln!("{message}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }

    fn apply_env(&mut self) {
        if let Ok(val) = env::var("SORTVIZ_SIZE")
            && let Ok(n) = val.parse()
        {
            self.size = n;
        }
        if let Ok(val) = env::var("SORTVIZ_DELAY_MS")
            && let Ok(n) = val.parse()
        {
            self.delay_ms = n;
        }
        if let Ok(val) = env::var("SORTVIZ_MAX_VALUE")
            && let Ok(n) = val.parse()
        {
            self.max_value = n;
        }
        if let Ok(val) = env::var("SORTVIZ_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            self.exit_after_ms = n;
        }
    }

    /// Apply one `--key=value` argument. Returns a user-facing message on
    /// unknown flags or unparseable values.
    fn apply_arg(&mut self, arg: &str) -> Result<(), String> {
        if let Some(val) = arg.strip_prefix("--size=") {
            self.size = val
                .parse()
                .map_err(|_| format!("Invalid --size value: {val}"))?;
        } else if let Some(val) = arg.strip_prefix("--delay-ms=") {
            self.delay_ms = val
                .parse()
                .map_err(|_| format!("Invalid --delay-ms value: {val}"))?;
        } else if let Some(val) = arg.strip_prefix("--max-value=") {
            self.max_value = val
                .parse()
                .map_err(|_| format!("Invalid --max-value value: {val}"))?;
        } else {
            return Err(format!("Unknown argument: {arg}"));
        }
        Ok(())
    }
}
