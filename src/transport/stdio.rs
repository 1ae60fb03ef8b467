//! Stdio Transport
//!
//! Interactive terminal front end. Each input line is a ticker submission or a
//! `:`-prefixed command. The page is written to stdout; logging goes to stderr.

use crate::alphavantage::OverviewSource;
use crate::error::InsightsError;
use crate::report::formatter::build_list;
use crate::report::page::{INPUT_LABEL, INPUT_PLACEHOLDER};
use crate::report::render::{render_markdown, render_markdown_preamble};
use crate::session::{Banner, Session, NOTHING_TO_PROCEED_MESSAGE};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Submit(String),
    Proceed,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":proceed" => Command::Proceed,
            ":help" => Command::Help,
            ":quit" | ":q" => Command::Quit,
            other => Command::Submit(other.to_string()),
        }
    }
}

fn help_text() -> String {
    let items = vec![
        "<TICKER>   fetch the overview for a ticker".to_string(),
        ":proceed   continue to analysis with the displayed ticker".to_string(),
        ":help      show this list".to_string(),
        ":quit      exit".to_string(),
    ];
    build_list(&items, false)
}

/// Runs the interactive session on the process's stdin and stdout
pub async fn run_stdio_server<S>(source: &S) -> Result<(), InsightsError>
where
    S: OverviewSource + Sync,
{
    tracing::info!("Starting interactive session on stdio");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_interactive(source, stdin, &mut stdout).await?;

    tracing::info!("Interactive session ended");
    Ok(())
}

/// Drives one interactive session until `:quit` or end of input
pub async fn run_interactive<S, R, W>(
    source: &S,
    input: R,
    output: &mut W,
) -> Result<(), InsightsError>
where
    S: OverviewSource + Sync,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut lines = input.lines();

    output.write_all(render_markdown_preamble().as_bytes()).await?;
    output.write_all(help_text().as_bytes()).await?;

    loop {
        output
            .write_all(format!("\n{} ({}): ", INPUT_LABEL, INPUT_PLACEHOLDER).as_bytes())
            .await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let banner = match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                output.write_all(help_text().as_bytes()).await?;
                continue;
            }
            Command::Proceed => match session.proceed() {
                Some(banner) => banner,
                None => Banner::error(NOTHING_TO_PROCEED_MESSAGE),
            },
            Command::Submit(ticker) => session.submit(source, &ticker).await.banner(),
        };

        output.write_all(b"\n").await?;
        output
            .write_all(render_markdown(&session, Some(&banner)).as_bytes())
            .await?;
    }

    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

/// Fetch a single ticker and print the page
///
/// Returns whether the fetch succeeded.
pub async fn run_once<S, W>(source: &S, ticker: &str, output: &mut W) -> Result<bool, InsightsError>
where
    S: OverviewSource + Sync,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let outcome = session.submit(source, ticker).await;

    output.write_all(render_markdown_preamble().as_bytes()).await?;
    output
        .write_all(render_markdown(&session, Some(&outcome.banner())).as_bytes())
        .await?;
    output.flush().await?;

    Ok(outcome.is_success())
}
