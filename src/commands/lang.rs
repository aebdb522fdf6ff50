use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};
use crate::events::Event;
use crate::session::prefs::Language;

/// Stores the language preference. As in the reference app the selection
/// is cosmetic: displayed text does not change.
pub struct LangCommand;

#[async_trait]
impl Command for LangCommand {
    fn name(&self) -> &str {
        "/lang"
    }

    fn description(&self) -> &str {
        "set the language preference (english, hindi, punjabi, gujarati, marathi)"
    }

    async fn execute(&self, args: &str, ctx: &SessionContext) -> CommandResult {
        let name = args.trim();
        if name.is_empty() {
            println!("  current language: {}", ctx.prefs.language().label());
            return CommandResult::Handled;
        }

        match Language::from_name(name) {
            Some(language) => {
                ctx.prefs.set_language(language);
                ctx.bus.emit(Event::LanguageChanged { language });
                println!("  ✓ language set to {}", language.label());
            }
            None => {
                eprintln!("  ✗ unknown language: {name}");
            }
        }
        CommandResult::Handled
    }
}
