//! General REPL commands (help, quit, style)

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use euclid_core::RenderStyle;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `style [name]` command
pub fn cmd_style(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!(
            "Current style: {} (available: {})",
            ctx.style.name(),
            RenderStyle::PRESETS.join(", ")
        ));
    }

    match RenderStyle::from_name(args) {
        Some(style) => {
            ctx.style = style;
            let msg = format!("Style set to {}", style.name());
            if ctx.color {
                CommandResult::Message(msg.bright_green().to_string())
            } else {
                CommandResult::Message(msg)
            }
        }
        None => CommandResult::Error(format!(
            "Unknown style '{}'. Use one of: {}",
            args,
            RenderStyle::PRESETS.join(", ")
        )),
    }
}

/// Print help information
fn print_help() {
    println!("{}", "🥁 Euclid Help".bold());
    println!("{}", "==============".bold());
    println!();
    println!("{}", "Patterns:".green());
    println!("  {}         - 3 onsets spread over 8 steps", "(3,8)".cyan());
    println!("  {}           - Same, without parentheses", "3 8".cyan());
    println!("  {}       - Rotate left by 2 steps", "(3,8,2)".cyan());
    println!("  {}      - Rotate right by 1 step", "(3,8,-1)".cyan());
    println!();
    println!("{}", "Commands:".green());
    println!(
        "  {}  - Onsets, gaps and onset times",
        "info <notation>".cyan()
    );
    println!(
        "  {}  - Rotate a pattern",
        "rotate <n> <notation>".cyan()
    );
    println!("  {}  - Swap onsets and rests", "invert <notation>".cyan());
    println!(
        "  {}     - Show or set the render style ({})",
        "style [name]".cyan(),
        RenderStyle::PRESETS.join(", ")
    );
    println!();
    println!("{}", "Examples:".green());
    println!("  euclid> {}", "(3,8)".cyan());
    println!("  E(3,8)  x..x..x.");
    println!();
    println!("  euclid> {}", "(5,8)".cyan());
    println!("  E(5,8)  x.xx.xx.");
    println!();
    println!("  euclid> {}", "invert (3,8)".cyan());
    println!("  invert (3,8)  .xx.xx.x");
    println!();
    println!("{}", "Other Commands:".green());
    println!("  {}              - Show this help", "help".bright_green());
    println!("  {}              - Exit the REPL", "quit".bright_red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_show_and_set() {
        let mut ctx = CommandContext::plain();
        match cmd_style("", &mut ctx) {
            CommandResult::Message(msg) => assert!(msg.starts_with("Current style: x")),
            other => panic!("Expected message, got {:?}", other),
        }

        assert_eq!(
            cmd_style("Binary", &mut ctx),
            CommandResult::Message("Style set to binary".to_string())
        );
        assert_eq!(ctx.style, RenderStyle::from_name("binary").unwrap());
    }

    #[test]
    fn test_style_unknown_keeps_current() {
        let mut ctx = CommandContext::plain();
        assert!(matches!(cmd_style("fancy", &mut ctx), CommandResult::Error(_)));
        assert_eq!(ctx.style, RenderStyle::default());
    }

    #[test]
    fn test_quit() {
        let mut ctx = CommandContext::plain();
        assert_eq!(cmd_quit("", &mut ctx), CommandResult::Exit);
    }
}
