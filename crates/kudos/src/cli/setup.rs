use clap::{Parser, Subcommand, ValueEnum};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.2"
/// Format for dev builds: "v0.3.2\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled text when stdout is a terminal
    #[default]
    Term,
    /// Unstyled text
    Plain,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "kudos",
    bin_name = "kudos",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "State is kept in cookies.json under the data directory.\nSet KUDOS_DATA_DIR to use another one."
)]
#[command(about = "Like, dislike and comment, remembered in cookies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputMode::Term, help_heading = "Options")]
    pub output: OutputMode,

    /// Debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Never style output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show counts, your vote and the comments
    #[command(display_order = 1)]
    Show,

    /// Vote like
    #[command(display_order = 2)]
    Like,

    /// Vote dislike
    #[command(display_order = 3)]
    Dislike,

    /// Leave a comment (words are joined with spaces)
    #[command(alias = "c", display_order = 4)]
    Comment {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Take back your vote and clear the comments
    #[command(display_order = 5)]
    Reset,

    /// Interactive session reading clicks from stdin
    #[command(display_order = 10)]
    Session,

    /// Print the raw cookie header
    #[command(display_order = 20)]
    Cookies,

    /// Print the resolved configuration
    #[command(display_order = 21)]
    Config,
}
