//! Shell context, dispatch, and error reporting.

use dialoguer::Confirm;
use strsim::levenshtein;
use thiserror::Error;

pub use crate::errors::CliError;
use crate::{
    cli::{
        commands,
        forms::FormError,
        output::{self, OutputPreferences},
        registry::CommandRegistry,
    },
    config::{Config, ConfigManager},
    errors::ConfigError,
    storage::{FileStore, KeyValueStore},
    store::Expenses,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CommandError>;

/// Errors raised by a single command. Reported to the user; the shell keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub expenses: Expenses<Box<dyn KeyValueStore>>,
    pub config: Config,
    /// Absent when the context is built around an injected backend.
    pub config_manager: Option<ConfigManager>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the on-disk config and the file-backed store.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let data_dir = config.resolve_data_dir(manager.base_dir());
        let backend = FileStore::new(data_dir)?;
        tracing::info!(path = %backend.root().display(), "using expense data directory");
        let mut context = Self::with_backend(mode, config, Box::new(backend));
        context.config_manager = Some(manager);
        Ok(context)
    }

    pub fn with_backend(mode: CliMode, config: Config, backend: Box<dyn KeyValueStore>) -> Self {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            expenses: Expenses::load(backend),
            config,
            config_manager: None,
            last_command: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("iexpense ({})> ", self.expenses.len())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn color_enabled(&self) -> bool {
        output::preferences().color_enabled
    }

    /// Applies a config change to the session and writes it to disk when a
    /// manager is attached.
    pub fn update_config(&mut self, config: Config) -> Result<(), ConfigError> {
        if let Some(manager) = &self.config_manager {
            manager.save(&config)?;
        }
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && self.mode == CliMode::Interactive,
        });
        self.config = config;
        Ok(())
    }

    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> CommandResult {
        match self.registry.handler(command) {
            Some(handler) => handler(self, args),
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::new()
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            CommandError::Form(err) => output::error(err),
            CommandError::Config(err) => output::error(format!("Configuration failure: {}", err)),
        }
    }
}
