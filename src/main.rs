use anyhow::Context;
use stock_insights::alphavantage::AlphaVantageClient;
use stock_insights::config::ProviderConfig;
use stock_insights::transport::{stdio, TransportMode};

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Args {
    mode: TransportMode,
    port: Option<u16>,
    ticker: Option<String>,
    help: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let raw: Vec<String> = std::env::args().collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            std::process::exit(1);
        }
    };

    if args.help {
        print_usage();
        return Ok(());
    }

    // Logs always go to stderr; stdout carries the rendered page
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let provider_config = ProviderConfig::from_env().context("Invalid provider configuration")?;
    tracing::debug!(
        base_url = %provider_config.base_url,
        api_key = %provider_config.api_key,
        "Loaded provider configuration"
    );
    let client = AlphaVantageClient::new(&provider_config)?;

    if let Some(ticker) = args.ticker {
        let mut stdout = tokio::io::stdout();
        let fetched = stdio::run_once(&client, &ticker, &mut stdout).await?;
        if !fetched {
            std::process::exit(2);
        }
        return Ok(());
    }

    tracing::info!("Starting Stock Insights in {} mode...", args.mode);

    match args.mode {
        TransportMode::Stdio => stdio::run_stdio_server(&client).await?,
        TransportMode::Http => run_http_server(args.port, client).await?,
    }

    Ok(())
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                let value = args.get(i + 1).ok_or("--mode requires a value")?;
                parsed.mode = value.parse()?;
                i += 1;
            }
            "--stdio" => parsed.mode = TransportMode::Stdio,
            "--http" => parsed.mode = TransportMode::Http,
            "--port" => {
                let value = args.get(i + 1).ok_or("--port requires a value")?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("Invalid port: {}", value))?;
                parsed.port = Some(port);
                i += 1;
            }
            "--ticker" => {
                let value = args.get(i + 1).ok_or("--ticker requires a value")?;
                parsed.ticker = Some(value.clone());
                i += 1;
            }
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(parsed)
}

/// Print usage information
fn print_usage() {
    println!("Stock Insights - company overview lookup backed by Alpha Vantage");
    println!();
    println!("USAGE:");
    println!("    stock-insights [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>       Front end: stdio or http (default: stdio)");
    println!("    --stdio             Interactive terminal session (shortcut for --mode stdio)");
    println!("    --http              Serve the web form (shortcut for --mode http)");
    println!("    --port <PORT>       Port for the web form (default: 8501)");
    println!("    --ticker <TICKER>   Fetch one ticker, print the overview and exit");
    println!("    --help, -h          Print this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    ALPHAVANTAGE_API_KEY        Alpha Vantage API key (default: demo)");
    println!("    ALPHAVANTAGE_BASE_URL       API base URL (default: https://www.alphavantage.co)");
    println!("    ALPHAVANTAGE_TIMEOUT_SECS   Request timeout in seconds (default: 10)");
    println!("    HTTP_HOST                   Web form bind address (default: 127.0.0.1)");
    println!("    HTTP_PORT                   Web form port (default: 8501)");
    println!("    RUST_LOG                    Logging level (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    # Look up one ticker");
    println!("    stock-insights --ticker AAPL");
    println!();
    println!("    # Serve the web form on a custom port");
    println!("    stock-insights --http --port 8080");
}

#[cfg(feature = "http_transport")]
async fn run_http_server(port: Option<u16>, client: AlphaVantageClient) -> anyhow::Result<()> {
    let config = stock_insights::config::HttpConfig::from_env(port)
        .context("Invalid HTTP configuration")?;
    stock_insights::transport::http::start_http_server(config, client).await?;
    Ok(())
}

#[cfg(not(feature = "http_transport"))]
async fn run_http_server(_port: Option<u16>, _client: AlphaVantageClient) -> anyhow::Result<()> {
    anyhow::bail!("HTTP mode not available - compile with 'http_transport' feature")
}
