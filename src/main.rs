use anyhow::Result;
use clap::Parser;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;

use panelkit::auth::{AUTH_KEY, FileTokenStore, MemoryTokenStore, TokenStore};
use panelkit::commands;
use panelkit::config::ApiConfig;
use panelkit::http::ApiClient;
use panelkit::ui::LogMessages;

/// panelkit - API console
///
/// Issues a single request through the normalizing client and prints the
/// business payload as pretty JSON. Useful for poking at any backend that
/// follows the {code, data, message} envelope convention.
///
/// Examples:
///   panelkit -b https://host/api get /users
///   panelkit -b https://host/api post /login --data '{"user":"alice"}'
#[derive(Parser, Debug)]
#[command(author, version = env!("PANELKIT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (also via PANELKIT_BASE_URL)
    #[arg(
        long = "base-url",
        short = 'b',
        env = "PANELKIT_BASE_URL",
        value_name = "URL",
        global = true
    )]
    base_url: Option<String>,

    /// Bearer credential attached to every request
    #[arg(long, env = "PANELKIT_TOKEN", value_name = "TOKEN", global = true)]
    token: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long = "timeout-ms", value_name = "MS", global = true)]
    timeout_ms: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// GET a path
    Get { path: String },

    /// POST a path with an optional JSON body
    Post {
        path: String,
        /// JSON request body
        #[arg(long, value_name = "JSON")]
        data: Option<String>,
    },

    /// PUT a path with an optional JSON body
    Put {
        path: String,
        /// JSON request body
        #[arg(long, value_name = "JSON")]
        data: Option<String>,
    },

    /// PATCH a path with an optional JSON body
    Patch {
        path: String,
        /// JSON request body
        #[arg(long, value_name = "JSON")]
        data: Option<String>,
    },

    /// DELETE a path
    Delete { path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match cli.base_url {
        Some(base_url) => ApiConfig::new(base_url),
        None => ApiConfig::from_env(),
    };
    if let Some(ms) = cli.timeout_ms {
        config.timeout = Duration::from_millis(ms);
    }

    // An explicit --token wins; otherwise fall back to the credential
    // persisted under the platform config dir.
    let tokens: Arc<dyn TokenStore> = match &cli.token {
        Some(token) => {
            let store = MemoryTokenStore::new();
            store.write(AUTH_KEY, token);
            Arc::new(store)
        }
        None => match FileTokenStore::default_location() {
            Some(store) => Arc::new(store),
            None => Arc::new(MemoryTokenStore::new()),
        },
    };

    let client = ApiClient::builder(config)
        .tokens(tokens)
        .messages(Arc::new(LogMessages))
        .build()?;

    let (method, path, data) = match &cli.command {
        Commands::Get { path } => (Method::GET, path, None),
        Commands::Post { path, data } => (Method::POST, path, data.as_deref()),
        Commands::Put { path, data } => (Method::PUT, path, data.as_deref()),
        Commands::Patch { path, data } => (Method::PATCH, path, data.as_deref()),
        Commands::Delete { path } => (Method::DELETE, path, None),
    };

    commands::request(&client, method, path, data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_get_parsing() {
        let cli = Cli::try_parse_from(["panelkit", "get", "/users"]).unwrap();
        match cli.command {
            Commands::Get { path } => assert_eq!(path, "/users"),
            _ => panic!("Expected Get command"),
        }
        assert_eq!(cli.base_url, None);
        assert_eq!(cli.token, None);
    }

    #[test]
    fn test_cli_post_with_data() {
        let cli = Cli::try_parse_from([
            "panelkit",
            "post",
            "/login",
            "--data",
            r#"{"user":"alice"}"#,
        ])
        .unwrap();
        match cli.command {
            Commands::Post { path, data } => {
                assert_eq!(path, "/login");
                assert_eq!(data.as_deref(), Some(r#"{"user":"alice"}"#));
            }
            _ => panic!("Expected Post command"),
        }
    }

    #[test]
    fn test_cli_global_base_url() {
        let cli =
            Cli::try_parse_from(["panelkit", "--base-url", "http://localhost:9000", "get", "/x"])
                .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_cli_timeout_override() {
        let cli =
            Cli::try_parse_from(["panelkit", "get", "/x", "--timeout-ms", "3000"]).unwrap();
        assert_eq!(cli.timeout_ms, Some(3000));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["panelkit", "/users"]);
        assert!(result.is_err());
    }
}
