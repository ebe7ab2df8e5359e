//! Argument parsing and command dispatch.

use clap::{Args, Parser, Subcommand, ValueEnum};
use itemboard_api_models::{SortKey, SortOrder};
use url::Url;

use crate::client::{AppContext, CliResult, build_client, parse_url};
use crate::commands::health::handle_health;
use crate::commands::items::{handle_item_add, handle_item_list, handle_item_remove, handle_item_rename};
use crate::telemetry::{LogFormat, init_logging};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.log_format) {
        eprintln!("warning: {err:#}");
    }

    let command = command_label(&cli.command);
    let client = match build_client(cli.timeout) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };
    let ctx = AppContext {
        client,
        base_url: cli.api_url,
    };

    match dispatch(&ctx, cli.command, cli.output).await {
        Ok(()) => {
            tracing::debug!(command, "command succeeded");
            0
        }
        Err(err) => {
            let exit_code = err.exit_code();
            tracing::debug!(command, exit_code, "command failed");
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

async fn dispatch(ctx: &AppContext, command: Command, output: OutputFormat) -> CliResult<()> {
    match command {
        Command::Health => handle_health(ctx, output).await,
        Command::Ls(args) => handle_item_list(ctx, args, output).await,
        Command::Add(args) => handle_item_add(ctx, args, output).await,
        Command::Rename(args) => handle_item_rename(ctx, args, output).await,
        Command::Rm(args) => handle_item_remove(ctx, args).await,
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Health => "health",
        Command::Ls(_) => "ls",
        Command::Add(_) => "add",
        Command::Rename(_) => "rename",
        Command::Rm(_) => "rm",
    }
}

#[derive(Parser)]
#[command(name = "itemboard", about = "Manage items on an Itemboard server")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "ITEMBOARD_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "ITEMBOARD_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogFormat::Pretty,
        help = "Log format for diagnostics written to stderr (filter with RUST_LOG)"
    )]
    pub(crate) log_format: LogFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Probe `GET /api/health`.
    Health,
    /// List one page of items.
    Ls(ItemListArgs),
    /// Create an item.
    Add(ItemAddArgs),
    /// Rename an item.
    Rename(ItemRenameArgs),
    /// Delete an item.
    Rm(ItemRemoveArgs),
}

#[derive(Args, Default)]
pub(crate) struct ItemListArgs {
    #[arg(long, help = "Restore search, sort, order and page from a UI address")]
    pub(crate) view: Option<Url>,
    #[arg(short, long, help = "Case-insensitive name filter")]
    pub(crate) query: Option<String>,
    #[arg(long)]
    pub(crate) page: Option<u32>,
    #[arg(long)]
    pub(crate) limit: Option<u32>,
    #[arg(long, value_parser = parse_sort, help = "id, name or created_at")]
    pub(crate) sort: Option<SortKey>,
    #[arg(long, value_parser = parse_order, help = "asc or desc")]
    pub(crate) order: Option<SortOrder>,
}

#[derive(Args)]
pub(crate) struct ItemAddArgs {
    #[arg(help = "Name of the new item")]
    pub(crate) name: String,
}

#[derive(Args)]
pub(crate) struct ItemRenameArgs {
    #[arg(help = "Item identifier")]
    pub(crate) id: i64,
    #[arg(help = "New name")]
    pub(crate) name: String,
}

#[derive(Args)]
pub(crate) struct ItemRemoveArgs {
    #[arg(help = "Item identifier")]
    pub(crate) id: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

fn parse_sort(input: &str) -> Result<SortKey, String> {
    SortKey::parse(input).ok_or_else(|| {
        let allowed: Vec<_> = SortKey::ALL.iter().map(|key| key.as_str()).collect();
        format!("unknown sort '{input}' (expected one of: {})", allowed.join(", "))
    })
}

fn parse_order(input: &str) -> Result<SortOrder, String> {
    SortOrder::parse(input).ok_or_else(|| format!("unknown order '{input}' (expected asc or desc)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments parse")
    }

    #[test]
    fn list_flags_parse_into_typed_values() {
        let cli = parse(&[
            "itemboard", "ls", "--query", "be", "--sort", "created_at", "--order", "asc", "--page",
            "2",
        ]);
        let Command::Ls(args) = cli.command else {
            panic!("expected ls");
        };
        assert_eq!(args.query.as_deref(), Some("be"));
        assert_eq!(args.sort, Some(SortKey::CreatedAt));
        assert_eq!(args.order, Some(SortOrder::Asc));
        assert_eq!(args.page, Some(2));
    }

    #[test]
    fn invalid_sort_is_rejected() {
        let result = Cli::try_parse_from(["itemboard", "ls", "--sort", "price"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = parse(&[
            "itemboard",
            "rm",
            "7",
            "--output",
            "json",
            "--api-url",
            "http://items.test:8080",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.api_url.as_str(), "http://items.test:8080/");
        assert_eq!(command_label(&cli.command), "rm");
    }

    #[test]
    fn view_urls_must_be_absolute() {
        assert!(Cli::try_parse_from(["itemboard", "ls", "--view", "/items?q=x"]).is_err());
        let cli = parse(&["itemboard", "ls", "--view", "http://localhost:5173/items?q=x"]);
        let Command::Ls(args) = cli.command else {
            panic!("expected ls");
        };
        assert!(args.view.is_some());
    }
}
