//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod general;
pub mod pattern;

use anyhow::Result;
use euclid_core::{Pattern, RenderStyle};

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// Not a command, try evaluating as notation
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Context passed to command handlers
pub struct CommandContext {
    /// How patterns are drawn
    pub style: RenderStyle,
    /// Highlight onsets with terminal colors
    pub color: bool,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            style: RenderStyle::default(),
            color: true,
        }
    }

    /// Create a context that prints plain text
    pub fn plain() -> Self {
        Self {
            style: RenderStyle::default(),
            color: false,
        }
    }

    /// Evaluate a notation string like `(3,8)` into a pattern
    pub fn eval(&self, input: &str) -> Result<Pattern> {
        Ok(Pattern::parse(input)?)
    }

    /// Draw a pattern with the current style
    pub fn render(&self, pattern: &Pattern) -> String {
        if self.color {
            pattern.colored(&self.style)
        } else {
            pattern.render(&self.style)
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix (e.g., "style")
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        // Sort by prefix length descending for longest-match-first
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Execute a command, falling back to evaluating the line as notation
    pub fn run_line(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        match self.execute(input, ctx) {
            CommandResult::NotACommand => pattern::cmd_show(input, ctx),
            result => result,
        }
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Pattern commands
    registry.register("info", pattern::cmd_info);
    registry.register("rotate", pattern::cmd_rotate);
    registry.register("invert", pattern::cmd_invert);

    // General commands
    registry.register("style", general::cmd_style);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_first() {
        let registry = create_registry();
        let commands = registry.list_commands();
        assert_eq!(commands.len(), 7);
        for pair in commands.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
    }

    #[test]
    fn test_unknown_input_is_not_a_command() {
        let registry = create_registry();
        let mut ctx = CommandContext::plain();
        assert_eq!(registry.execute("(3,8)", &mut ctx), CommandResult::NotACommand);
        // Prefix must be followed by a space or end the line
        assert_eq!(registry.execute("quitter", &mut ctx), CommandResult::NotACommand);
    }

    #[test]
    fn test_run_line_falls_back_to_notation() {
        let registry = create_registry();
        let mut ctx = CommandContext::plain();
        assert_eq!(
            registry.run_line("(2,5)", &mut ctx),
            CommandResult::Message("E(2,5)  x.x..".to_string())
        );
        assert_eq!(registry.run_line("quit", &mut ctx), CommandResult::Exit);
        assert!(matches!(
            registry.run_line("(2;5)", &mut ctx),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_run_line_rejects_huge_step_counts() {
        let registry = create_registry();
        let mut ctx = CommandContext::plain();
        for line in [
            "1 1000000000000000000",
            "(1,10000000000000)",
            "info 1 1000000000000000000",
            "rotate 1 (1,4294967297)",
            "invert 1 65537",
        ] {
            match registry.run_line(line, &mut ctx) {
                CommandResult::Error(e) => assert!(e.contains("Steps out of range"), "{}", e),
                other => panic!("Expected error for '{}', got {:?}", line, other),
            }
        }
    }
}
