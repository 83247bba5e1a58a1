//! Mapping from positional arguments to actions.
//!
//! Dispatch is driven by argument count and is deliberately lenient: anything
//! it does not recognize becomes [`Action::Help`].

use crate::profiles::normalize_name;

/// Tokens that ask for usage text
const HELP_TOKENS: [&str; 6] = ["help", "--help", "-?", "--?", "/help", "/?"];

/// What a single invocation should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Show,
    List,
    Switch(String),
    Create(String),
    Edit(String),
    Delete(String),
}

impl Action {
    /// Decide the action from the positional arguments.
    ///
    /// Command tokens are matched case-insensitively and profile names are
    /// lower-cased. Arguments past the second are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [] => Action::Show,
            [command] => {
                let command = command.as_ref().to_lowercase();
                match command.as_str() {
                    c if HELP_TOKENS.contains(&c) => Action::Help,
                    "show" => Action::Show,
                    "list" => Action::List,
                    _ => Action::Help,
                }
            }
            [command, name, ..] => {
                let name = normalize_name(name.as_ref());
                match command.as_ref().to_lowercase().as_str() {
                    "switch" => Action::Switch(name),
                    "create" => Action::Create(name),
                    "edit" => Action::Edit(name),
                    "delete" => Action::Delete(name),
                    _ => Action::Help,
                }
            }
        }
    }

    /// Whether the action needs the config record
    pub fn needs_config(&self) -> bool {
        !matches!(self, Action::Help)
    }
}
