use anyhow::{Result, anyhow};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tokio::sync::mpsc;
use tracing::info;

use common::ServerEvent;
use terminal::app::{App, AppCommand};
use terminal::transport::{Transport, normalize_base_url};

#[derive(Parser, Debug)]
#[command(
    name = "codegrid-terminal",
    about = "Terminal client for the Codegrid word game"
)]
struct Args {
    /// Base HTTP URL for the game server (e.g. http://localhost:8080)
    #[arg(long, default_value = "http://localhost:8080")]
    url: String,

    /// Nickname to prefill on the sign-in form
    #[arg(long)]
    nickname: Option<String>,

    /// Bootstrap fragment from a shared link, e.g. "room=den&password=pw"
    #[arg(long)]
    fragment: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    let base_url = normalize_base_url(&args.url)?;
    info!("Connecting to {}", base_url);
    let (mut transport, mut events) = Transport::connect(&base_url).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(args.nickname, args.fragment.as_deref());
    let res = run_app(&mut terminal, &mut app, &mut transport, &mut events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    transport.close().await;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    transport: &mut Transport,
    events: &mut mpsc::UnboundedReceiver<ServerEvent>,
) -> Result<()> {
    let mut input = EventStream::new();

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    return Err(anyhow!("connection to the server was lost"));
                };
                app.handle_server_event(event);
            }
            key = input.next() => {
                let Some(key) = key.transpose()? else {
                    return Ok(());
                };
                if let Event::Key(key) = key {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    if let Some(command) = app.handle_input(key) {
                        match command {
                            AppCommand::Quit => return Ok(()),
                            other => app.handle_command(other, transport).await?,
                        }
                    }
                }
            }
        }
    }
}
