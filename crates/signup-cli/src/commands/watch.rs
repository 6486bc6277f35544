use anyhow::{Context, Result};
use colored::Colorize;
use signup_validation_core::{Field, InputTrigger, MemoryForm, SignupValidator, ValidatorConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;
use tracing::debug;

use crate::console::ConsoleForm;

/// One line of replayed input
#[derive(Debug, PartialEq, Eq)]
enum InputLine<'a> {
    /// `<id>=<value>`: a field changed
    Change { id: &'a str, value: &'a str },
    /// `submit`
    Submit,
    Blank,
}

fn parse_line(line: &str) -> InputLine<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return InputLine::Blank;
    }
    if line.trim() == "submit" {
        return InputLine::Submit;
    }
    match line.split_once('=') {
        Some((id, value)) => InputLine::Change { id: id.trim(), value },
        None => InputLine::Change {
            id: line.trim(),
            value: "",
        },
    }
}

pub async fn execute(config: &ValidatorConfig, pace_ms: u64) -> Result<()> {
    let engine = Arc::new(SignupValidator::with_locale(
        ConsoleForm::new(MemoryForm::new()),
        config.locale,
    ));
    let mut trigger = InputTrigger::new(Arc::clone(&engine), config.debounce.delay());

    println!(
        "{} Reading field=value lines from stdin (quiet period {}ms)",
        "👀".cyan(),
        config.debounce.delay_ms
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_line(&line) {
            InputLine::Blank => continue,
            InputLine::Submit => {
                println!("{}", "Submitting...".cyan());
                let accepted = engine.submit(|| println!("{}", "✓ Form accepted".green().bold()));
                if !accepted {
                    println!("{}", "✗ Form has errors".red().bold());
                }
            }
            InputLine::Change { id, value } => {
                // Unknown ids still go through the trigger; the engine reports them
                if let Ok(field) = id.parse::<Field>() {
                    engine.accessor().set_value(field, value);
                }
                debug!(id, "input");
                trigger.on_input(id);
            }
        }

        if pace_ms > 0 {
            sleep(Duration::from_millis(pace_ms)).await;
        }
    }

    // Let the trailing revalidation fire before exiting
    while trigger.is_pending() {
        sleep(Duration::from_millis(10)).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_change() {
        assert_eq!(
            parse_line("email=a@b.com"),
            InputLine::Change {
                id: "email",
                value: "a@b.com"
            }
        );
        // Only the first '=' separates
        assert_eq!(
            parse_line("password=a=b\r"),
            InputLine::Change {
                id: "password",
                value: "a=b"
            }
        );
    }

    #[test]
    fn test_parse_keeps_value_whitespace() {
        assert_eq!(
            parse_line(" username =  al "),
            InputLine::Change {
                id: "username",
                value: "  al "
            }
        );
    }

    #[test]
    fn test_parse_bare_id_and_commands() {
        assert_eq!(
            parse_line("confirm-password"),
            InputLine::Change {
                id: "confirm-password",
                value: ""
            }
        );
        assert_eq!(parse_line("submit"), InputLine::Submit);
        assert_eq!(parse_line("   "), InputLine::Blank);
    }
}
