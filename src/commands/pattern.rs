//! Pattern commands (show, info, rotate, invert)

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use euclid_core::{EuclideanParams, Pattern};

/// Evaluate bare notation like `(3,8)` and show the pattern
pub fn cmd_show(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args.parse::<EuclideanParams>() {
        Ok(params) => {
            CommandResult::Message(line(ctx, &format!("E{}", params), &params.pattern()))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `info <notation>` command
pub fn cmd_info(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: info <accents,steps[,rotation]>".to_string());
    }
    let params = match args.parse::<EuclideanParams>() {
        Ok(params) => params,
        Err(e) => return CommandResult::Error(e.to_string()),
    };
    let pattern = params.pattern();

    let even = if pattern.is_maximally_even() {
        "yes"
    } else {
        "no"
    };
    let lines = [
        line(ctx, &format!("E{}", params), &pattern),
        format!("  steps:   {}", pattern.len()),
        format!("  accents: {}", pattern.accents()),
        format!("  onsets:  {}", join(&pattern.onsets())),
        format!("  gaps:    {}", join(&pattern.gaps())),
        format!("  times:   {}", join(&pattern.onset_times())),
        format!("  even:    {}", even),
    ];
    CommandResult::Message(lines.join("\n"))
}

/// Handle `rotate <amount> <notation>` command
pub fn cmd_rotate(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let usage = || CommandResult::Error("Usage: rotate <amount> <notation>".to_string());

    let Some((amount, notation)) = args.split_once(char::is_whitespace) else {
        return usage();
    };
    let Ok(amount) = amount.parse::<i64>() else {
        return usage();
    };

    match ctx.eval(notation) {
        Ok(pattern) => {
            let label = format!("rotate {} {}", amount, notation.trim());
            CommandResult::Message(line(ctx, &label, &pattern.rotate(amount)))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `invert <notation>` command
pub fn cmd_invert(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: invert <notation>".to_string());
    }
    match ctx.eval(args) {
        Ok(pattern) => {
            let label = format!("invert {}", args);
            CommandResult::Message(line(ctx, &label, &pattern.invert()))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// `label  pattern`, with the label highlighted when color is on
fn line(ctx: &CommandContext, label: &str, pattern: &Pattern) -> String {
    let label = if ctx.color {
        label.cyan().to_string()
    } else {
        label.to_string()
    };
    format!("{}  {}", label, ctx.render(pattern))
}

fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: CommandResult) -> String {
        match result {
            CommandResult::Message(msg) => msg,
            other => panic!("Expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_show() {
        let mut ctx = CommandContext::plain();
        assert_eq!(message(cmd_show("3 8", &mut ctx)), "E(3,8)  x..x..x.");
        assert_eq!(message(cmd_show("(13,5)", &mut ctx)), "E(13,5)  xxxxx");
        assert_eq!(message(cmd_show("(5,-1)", &mut ctx)), "E(5,-1)  ");
    }

    #[test]
    fn test_show_error() {
        let mut ctx = CommandContext::plain();
        match cmd_show("(3,", &mut ctx) {
            CommandResult::Error(e) => assert_eq!(e, "Error at 3: Expected number for Euclidean steps"),
            other => panic!("Expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_info() {
        let mut ctx = CommandContext::plain();
        let msg = message(cmd_info("(3,8)", &mut ctx));
        assert!(msg.starts_with("E(3,8)  x..x..x."));
        assert!(msg.contains("accents: 3"));
        assert!(msg.contains("onsets:  0 3 6"));
        assert!(msg.contains("gaps:    3 3 2"));
        assert!(msg.contains("times:   0 3/8 3/4"));
        assert!(msg.contains("even:    yes"));
    }

    #[test]
    fn test_info_without_onsets() {
        let mut ctx = CommandContext::plain();
        let msg = message(cmd_info("0 4", &mut ctx));
        assert!(msg.contains("onsets:  -"));
        assert!(matches!(cmd_info("", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_rotate() {
        let mut ctx = CommandContext::plain();
        assert_eq!(
            message(cmd_rotate("1 (3,8)", &mut ctx)),
            "rotate 1 (3,8)  ..x..x.x"
        );
        assert_eq!(
            message(cmd_rotate("-1 3 8", &mut ctx)),
            "rotate -1 3 8  .x..x..x"
        );
        assert!(matches!(cmd_rotate("x (3,8)", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_rotate("2", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_invert() {
        let mut ctx = CommandContext::plain();
        assert_eq!(
            message(cmd_invert("(3,8)", &mut ctx)),
            "invert (3,8)  .xx.xx.x"
        );
        assert!(matches!(cmd_invert("", &mut ctx), CommandResult::Error(_)));
    }
}
