use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use farmiq::banner::{BannerInfo, SessionStats, print_banner, print_session_summary};
use farmiq::commands::{CommandRegistry, CommandResult, SessionContext};
use farmiq::consts::CHAT_REPLY_DELAY;
use farmiq::dashboard::Dashboard;
use farmiq::events::{Event, EventBus};
use farmiq::responder::scripted::ScriptedResponder;
use farmiq::session::chat::ChatSession;
use farmiq::session::prefs::{Language, Preferences};
use farmiq::session::recommend::RecommendationSession;
use farmiq::session::scan::ScanSession;
use farmiq::spinner::Spinner;
use farmiq::transcript::sqlite::SqliteTranscript;

#[derive(Parser)]
#[command(name = "farmiq", version, about = "Your AI farming assistant.")]
struct Cli {
    /// Language preference (cosmetic — displayed text stays English)
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    language: Language,

    /// Assistant reply delay in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Ask a single question and exit (non-interactive)
    #[arg(short, long)]
    ask: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let delay = cli
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(CHAT_REPLY_DELAY);

    let responder = Arc::new(ScriptedResponder::new());
    let transcript = Arc::new(SqliteTranscript::new()?);
    let chat = Arc::new(ChatSession::with_transcript(transcript, responder, delay).await?);

    let bus = Arc::new(EventBus::default());
    let ctx = SessionContext {
        chat: Arc::clone(&chat),
        scans: Arc::new(ScanSession::new()),
        recommender: Arc::new(RecommendationSession::new()),
        dashboard: Arc::new(Dashboard::new()),
        prefs: Arc::new(Preferences::new(cli.language)),
        bus: Arc::clone(&bus),
    };

    // Single question mode
    if let Some(question) = cli.ask {
        if chat.send(&question).await? {
            let reply = chat.wait_reply().await;
            println!("{}", reply);
        }
        return Ok(());
    }

    print_banner(&BannerInfo {
        language: cli.language,
        chat_delay_ms: delay.as_millis(),
        transcript: "ephemeral",
    });

    if let Some(questions) = chat.quick_questions().await? {
        println!("Quick questions:");
        for q in questions {
            println!("  • {q}");
        }
    }

    // The language selection is stored, never rendered. Acknowledge it so
    // the gap is at least visible.
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                Event::LanguageChanged { .. } => {
                    println!("  (displayed text remains English)");
                }
            }
        }
    });

    let registry = CommandRegistry::new();

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nfarmiq> ");
        io::stdout().flush()?;

        // Read next line, interruptible by Ctrl+C
        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match registry.dispatch(input, &ctx).await {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::NotACommand => {}
        }

        // Everything else goes to the assistant
        if !chat.send(input).await? {
            continue;
        }

        // Ctrl+C while waiting abandons the wait, not the REPL
        let spinner = Spinner::typing();
        tokio::select! {
            reply = chat.wait_reply() => {
                spinner.stop().await;
                println!("\n=> {}", reply);
            }
            _ = tokio::signal::ctrl_c() => {
                spinner.stop().await;
                println!("\n\ninterrupted");
            }
        }
    }

    let message_count = chat.message_count().await?;
    print_session_summary(SessionStats {
        // greeting + two messages per exchange
        exchanges: (message_count.saturating_sub(1) / 2) as u64,
        scans: ctx.scans.history().len().saturating_sub(3) as u64,
    });
    Ok(())
}
