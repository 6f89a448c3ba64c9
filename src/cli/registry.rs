use std::collections::{BTreeMap, HashMap};

use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    aliases: BTreeMap<&'static str, &'static str>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn alias(&mut self, alias: &'static str, target: &'static str) {
        self.aliases.insert(alias, target);
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        let name = self.aliases.get(name).copied().unwrap_or(name);
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    /// Canonical names in registration order, then aliases sorted; used for
    /// completion and suggestions.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order
            .iter()
            .copied()
            .chain(self.aliases.keys().copied())
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::LoopControl;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(LoopControl::Continue)
    }

    #[test]
    fn names_are_ordered_deterministically() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("list", "", "list", noop));
        registry.register(CommandEntry::new("delete", "", "delete", noop));
        registry.alias("rm", "delete");
        registry.alias("ls", "list");
        registry.alias("del", "delete");

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["list", "delete", "del", "ls", "rm"]);
    }

    #[test]
    fn aliases_resolve_to_their_target() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("delete", "", "delete", noop));
        registry.alias("rm", "delete");
        assert_eq!(registry.get("rm").map(|entry| entry.name), Some("delete"));
        assert!(registry.get("missing").is_none());
    }
}
