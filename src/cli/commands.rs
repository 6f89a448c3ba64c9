//! Command handlers for the expense shell.

use crate::cli::{
    core::{CommandError, CommandResult, LoopControl, ShellContext},
    forms::{canonical_category, ExpenseForm},
    help, output,
    registry::{CommandEntry, CommandRegistry},
    render::render_listing,
};
use crate::domain::Displayable;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "list",
        "Show expenses grouped by type",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Record a new expense",
        "add <name> <Personal|Business> <amount>",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "delete",
        "Remove expenses by their position within a type",
        "delete <type> <position> [position...]",
        cmd_delete,
    ));
    registry.register(CommandEntry::new(
        "help",
        "Show available commands",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show or change preferences",
        "config [currency <CODE> | color <on|off>]",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.alias("ls", "list");
    registry.alias("rm", "delete");
    registry.alias("quit", "exit");
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let listing = render_listing(
        &context.expenses,
        &context.config.currency,
        context.color_enabled(),
    );
    output::raw(listing.trim_end());
    Ok(LoopControl::Continue)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, category, amount] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add <name> <Personal|Business> <amount>".into(),
        ));
    };
    let item = ExpenseForm {
        name: *name,
        category: *category,
        amount: *amount,
    }
    .submit()?;
    let label = item.name.clone();
    context.expenses.append(item);
    output::success(format!("Added `{}`.", label));
    Ok(LoopControl::Continue)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((category, positions)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: delete <type> <position> [position...]".into(),
        ));
    };
    if positions.is_empty() {
        return Err(CommandError::InvalidArguments(
            "delete needs at least one position".into(),
        ));
    }
    let positions = positions
        .iter()
        .map(|raw| {
            raw.parse::<usize>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{}` is not a valid position", raw))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let category = canonical_category(category).unwrap_or(*category);
    let removed = context.expenses.remove_at(category, positions);
    match removed.len() {
        0 => output::warning(format!("No {} expenses at those positions.", category)),
        1 => output::success(format!("Removed `{}`.", removed[0].display_label())),
        count => output::success(format!("Removed {} expenses.", count)),
    }
    Ok(LoopControl::Continue)
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => match context.registry.get(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        },
        None => help::print_overview(&context.registry),
    }
    Ok(LoopControl::Continue)
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut config = context.config.clone();
    match args {
        [] => {
            output::section("Configuration");
            output::info(format!("  currency: {}", config.currency));
            output::info(format!(
                "  color:    {}",
                if config.ui_color_enabled { "on" } else { "off" }
            ));
            return Ok(LoopControl::Continue);
        }
        ["currency", code] => {
            let code = code.trim().to_ascii_uppercase();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CommandError::InvalidArguments(format!(
                    "`{}` is not a three-letter currency code",
                    code
                )));
            }
            config.currency = code;
        }
        ["color", toggle] => {
            config.ui_color_enabled = match toggle.to_ascii_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "expected `on` or `off`, got `{}`",
                        other
                    )))
                }
            };
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: config [currency <CODE> | color <on|off>]".into(),
            ))
        }
    }
    context.update_config(config)?;
    output::success("Configuration updated.");
    Ok(LoopControl::Continue)
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(format!(
        "iexpense {} ({} {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("IEXPENSE_BUILD_HASH"),
        env!("IEXPENSE_BUILD_PROFILE"),
        env!("IEXPENSE_BUILD_TIMESTAMP"),
    ));
    Ok(LoopControl::Continue)
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}
