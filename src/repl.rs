//! REPL (Read-Eval-Print Loop) for Euclidean notation

use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use anyhow::{bail, Result};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};

/// Interactive REPL for Euclidean rhythms
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;

        Ok(Repl {
            editor,
            registry: create_registry(),
            ctx: CommandContext::new(),
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🥁".bright_yellow(),
            "Euclid Rhythm Generator".bright_cyan().bold()
        );
        println!(
            "Type patterns like: {}, {}, {}",
            "(3,8)".cyan(),
            "5 8".cyan(),
            "(7,16,2)".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        loop {
            let prompt = format!("{} ", "euclid>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line.to_owned())?;

                    match self.registry.run_line(line, &mut self.ctx) {
                        CommandResult::Success | CommandResult::NotACommand => {}
                        CommandResult::Message(msg) => {
                            println!("{}", msg);
                        }
                        CommandResult::Exit => {
                            println!("{} 🥁", "Goodbye!".bright_cyan());
                            break;
                        }
                        CommandResult::Error(e) => {
                            println!("{} {}", "Error:".bright_red().bold(), e.red());
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{} 🥁", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}

/// Evaluate one line (from command-line arguments) and print the result
pub fn run_once(input: &str) -> Result<()> {
    let registry = create_registry();
    let mut ctx = CommandContext::new();

    match registry.run_line(input.trim(), &mut ctx) {
        CommandResult::Message(msg) => {
            println!("{}", msg);
            Ok(())
        }
        CommandResult::Error(e) => bail!(e),
        CommandResult::Success | CommandResult::Exit | CommandResult::NotACommand => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_once() {
        assert!(run_once("(3,8)").is_ok());
        assert!(run_once("info 5 8").is_ok());
        assert!(run_once("quit").is_ok());
    }

    #[test]
    fn test_run_once_reports_errors() {
        let err = run_once("(3,8").unwrap_err();
        assert!(err.to_string().contains("Expected ')'"));
    }
}
