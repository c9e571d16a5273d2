use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Line-oriented interactive input
pub trait Prompter {
    /// One trimmed answer; an empty answer yields the default
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String>;

    /// Lines until the first empty one, joined and trimmed
    fn ask_multiline(&mut self, message: &str) -> Result<String>;

    /// Yes when the answer starts with `y`, case-insensitive
    fn confirm(&mut self, question: &str, default_yes: bool) -> Result<bool> {
        let default = if default_yes { "y" } else { "n" };
        let answer = self.ask(question, Some(default))?;
        Ok(answer.to_lowercase().starts_with('y'))
    }
}

pub fn question_line(question: &str, default: Option<&str>) -> String {
    match default {
        Some("") => format!("{} [empty]: ", question),
        Some(value) => format!("{} [{}]: ", question, value),
        None => format!("{}: ", question),
    }
}

/// Prompts on stdout, answers from stdin; end of input counts as an empty answer
pub struct ConsolePrompter<R: BufRead> {
    input: R,
}

impl ConsolePrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> ConsolePrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead> Prompter for ConsolePrompter<R> {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        print!("{}", question_line(question, default));
        io::stdout().flush().context("Failed to flush stdout")?;

        let answer = self.read_line()?.trim().to_string();
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn ask_multiline(&mut self, message: &str) -> Result<String> {
        println!("{}", message);
        println!("Enter multiple lines. Submit an empty line to finish.");

        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n").trim().to_string())
    }
}
