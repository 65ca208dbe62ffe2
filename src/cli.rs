use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch local configuration, so no
/// API domain has to be configured or prompted for first.
pub fn is_config_only(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.logout
        || args.version
}

/// EMaster Fuchiboli match-result capture
///
/// Administrator tool for the Fuchiboli league: browse rounds and matches,
/// inspect a match's statistics and close it with the final result.
///
/// Closing a match is irreversible from this tool. The result is described in
/// a TOML sheet (player goals, cards, injuries, own goals and the links to the
/// result images) and sent once after confirmation.
#[derive(Parser, Debug, Default)]
#[command(author = "EMaster", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show a match: scoreboard, both rosters and the summary.
    #[arg(long = "match", value_name = "ID", help_heading = "Matches")]
    pub match_id: Option<i64>,

    /// Close a match with the result described in --result.
    #[arg(
        long = "close",
        value_name = "ID",
        requires = "result",
        conflicts_with = "match_id",
        help_heading = "Matches"
    )]
    pub close: Option<i64>,

    /// TOML result sheet applied before closing.
    #[arg(long = "result", value_name = "FILE", requires = "close", help_heading = "Matches")]
    pub result: Option<PathBuf>,

    /// Skip the confirmation prompt when closing.
    #[arg(short = 'y', long = "yes", requires = "close", help_heading = "Matches")]
    pub yes: bool,

    /// List the rounds of a season's tournament.
    #[arg(
        long = "rounds",
        requires_all = ["season", "tournament"],
        help_heading = "Lists"
    )]
    pub rounds: bool,

    /// List the matches of a round.
    #[arg(long = "round", value_name = "ID", help_heading = "Lists")]
    pub round: Option<i64>,

    /// List a team's matches still waiting for a result.
    #[arg(
        long = "pending",
        value_name = "TEAM",
        requires_all = ["season", "tournament"],
        help_heading = "Lists"
    )]
    pub pending: Option<i64>,

    /// List a team's played matches.
    #[arg(
        long = "played",
        value_name = "TEAM",
        requires_all = ["season", "tournament"],
        help_heading = "Lists"
    )]
    pub played: Option<i64>,

    /// Season id used by --rounds, --pending and --played.
    #[arg(long = "season", value_name = "ID", help_heading = "Lists")]
    pub season: Option<i64>,

    /// Tournament id used by --rounds, --pending and --played.
    #[arg(long = "tournament", value_name = "ID", help_heading = "Lists")]
    pub tournament: Option<i64>,

    /// List the league's teams.
    #[arg(long = "teams", help_heading = "Lists")]
    pub teams: bool,

    /// Print without colors.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Log in as USER. The password is read from the terminal and the session is stored in the config.
    #[arg(long = "login", value_name = "USER", help_heading = "Session")]
    pub login: Option<String>,

    /// Forget the stored session.
    #[arg(long = "logout", help_heading = "Session")]
    pub logout: bool,

    /// Update API domain in config. Will prompt for new domain if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also print logs to the terminal, including debug output.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
