//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry splits the input into a command
//! name and an argument string, resolves aliases, and generates `/help`
//! dynamically. Anything that isn't a command falls through to the chat
//! assistant.

mod alerts;
mod dashboard;
mod help;
mod history;
mod lang;
mod learn;
mod market;
mod prices;
mod quit;
mod recommend;
mod rent;
mod scan;
mod schemes;
mod weather;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::dashboard::Dashboard;
use crate::events::EventBus;
use crate::session::chat::ChatSession;
use crate::session::prefs::Preferences;
use crate::session::recommend::RecommendationSession;
use crate::session::scan::ScanSession;

/// Shared handles the commands operate on. Every surface owns its own
/// state; this is just the directory of them.
pub struct SessionContext {
    pub chat: Arc<ChatSession>,
    pub scans: Arc<ScanSession>,
    pub recommender: Arc<RecommendationSession>,
    pub dashboard: Arc<Dashboard>,
    pub prefs: Arc<Preferences>,
    pub bus: Arc<EventBus>,
}

/// What the REPL should do after a command runs.
pub enum CommandResult {
    /// Not a command — pass input to the assistant.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/market"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/q", "/exit"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command with everything after the name as `args`.
    async fn execute(&self, args: &str, ctx: &SessionContext) -> CommandResult;
}

/// Split a command's argument string into free-text query words and
/// `--flag value` pairs. A flag with no following value is kept with an
/// empty value.
pub fn parse_args(args: &str) -> (String, HashMap<String, String>) {
    let mut query_words = Vec::new();
    let mut flags = HashMap::new();
    let mut tokens = args.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        if let Some(flag) = token.strip_prefix("--") {
            let value = match tokens.peek() {
                Some(next) if !next.starts_with("--") => tokens.next().unwrap_or("").to_string(),
                _ => String::new(),
            };
            flags.insert(flag.to_string(), value);
        } else {
            query_words.push(token);
        }
    }

    (query_words.join(" "), flags)
}

/// Holds registered commands. Supports runtime registration.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(dashboard::DashboardCommand),
            Arc::new(market::MarketCommand),
            Arc::new(prices::PricesCommand),
            Arc::new(rent::RentCommand),
            Arc::new(schemes::SchemesCommand),
            Arc::new(learn::LearnCommand),
            Arc::new(weather::WeatherCommand),
            Arc::new(alerts::AlertsCommand),
            Arc::new(scan::ScanCommand),
            Arc::new(recommend::RecommendCommand),
            Arc::new(history::HistoryCommand),
            Arc::new(lang::LangCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    /// Register an additional command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, ctx: &SessionContext) -> CommandResult {
        let input = input.trim();
        let (name, args) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        for command in &self.commands {
            if name == command.name() || command.aliases().contains(&name) {
                // /help is special — it needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, ctx).await;
            }
        }

        if name.starts_with('/') {
            println!("unknown command: {name}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }

    /// All registered command names (for testing).
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, aliases: &[&str]) -> String {
    if aliases.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, aliases.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::scripted::ScriptedResponder;

    pub(crate) async fn test_context() -> SessionContext {
        SessionContext {
            chat: Arc::new(
                ChatSession::new(Arc::new(ScriptedResponder::new()))
                    .await
                    .unwrap(),
            ),
            scans: Arc::new(ScanSession::new()),
            recommender: Arc::new(RecommendationSession::new()),
            dashboard: Arc::new(Dashboard::new()),
            prefs: Arc::new(Preferences::default()),
            bus: Arc::new(EventBus::default()),
        }
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for expected in [
            "/help",
            "/dashboard",
            "/market",
            "/prices",
            "/rent",
            "/schemes",
            "/learn",
            "/weather",
            "/alerts",
            "/scan",
            "/recommend",
            "/history",
            "/lang",
            "/quit",
        ] {
            assert!(names.contains(&expected), "missing builtin: {expected}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let triggers = reg.all_triggers();
        let mut seen = Vec::new();
        for t in &triggers {
            assert!(!seen.contains(t), "duplicate trigger: {t}");
            seen.push(t);
        }
    }

    #[test]
    fn help_text_includes_all_commands() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for name in reg.names() {
            assert!(text.contains(name), "help missing: {name}");
        }
    }

    #[test]
    fn parse_args_splits_query_and_flags() {
        let (query, flags) = parse_args("fresh tomatoes --category vegetables");
        assert_eq!(query, "fresh tomatoes");
        assert_eq!(flags.get("category").map(String::as_str), Some("vegetables"));
    }

    #[test]
    fn parse_args_handles_empty_and_bare_flags() {
        let (query, flags) = parse_args("");
        assert!(query.is_empty());
        assert!(flags.is_empty());

        let (query, flags) = parse_args("--category");
        assert!(query.is_empty());
        assert_eq!(flags.get("category").map(String::as_str), Some(""));
    }

    #[tokio::test]
    async fn dispatch_splits_name_from_args() {
        let reg = CommandRegistry::new();
        let ctx = test_context().await;
        assert!(matches!(
            reg.dispatch("/market tomato --category vegetables", &ctx).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        let ctx = test_context().await;
        assert!(matches!(
            reg.dispatch("/foobar", &ctx).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn non_command_passes_through_to_chat() {
        let reg = CommandRegistry::new();
        let ctx = test_context().await;
        assert!(matches!(
            reg.dispatch("what crops should I plant?", &ctx).await,
            CommandResult::NotACommand
        ));
    }

    #[tokio::test]
    async fn plugin_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _args: &str, _ctx: &SessionContext) -> CommandResult {
                CommandResult::Handled
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        let ctx = test_context().await;
        assert!(reg.names().contains(&"/ping"));
        assert!(matches!(
            reg.dispatch("/ping", &ctx).await,
            CommandResult::Handled
        ));
    }

    #[test]
    fn format_label_no_aliases() {
        assert_eq!(format_label("/market", &[]), "/market");
    }

    #[test]
    fn format_label_with_aliases() {
        assert_eq!(format_label("/quit", &["/q", "/exit"]), "/quit (/q, /exit)");
    }
}
