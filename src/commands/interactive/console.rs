//! Console front-ends for the interactive menu.
//!
//! The menu only talks to a [`Console`]. On a terminal that is a dialoguer
//! prompt; for pipes and tests it is a token reader over any `BufRead`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::Result;
use dialoguer::theme::Theme;
use dialoguer::{Input, Select};

/// Where the menu reads choices and writes messages.
///
/// `choose` and `ask` return `None` once input is exhausted.
pub trait Console {
    /// Print one line.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Offer numbered items and return the raw choice (`"1"` for the first item).
    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<String>>;

    /// Ask for a single word.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Numbered text menu reading whitespace-delimited tokens.
pub struct ScriptedConsole<R, W> {
    reader: R,
    out: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ScriptedConsole<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            pending: VecDeque::new(),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Bytes that are not UTF-8 become U+FFFD instead of ending the session.
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead, W: Write> Console for ScriptedConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<String>> {
        if !prompt.is_empty() {
            writeln!(self.out, "{}", prompt)?;
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, item)?;
        }
        self.out.flush()?;
        self.next_token()
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.next_token()
    }
}

/// Arrow-key menu on a real terminal.
pub struct TerminalConsole {
    theme: Box<dyn Theme>,
}

impl TerminalConsole {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<String>> {
        let labels: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("[{}] {}", i + 1, item))
            .collect();

        let mut select = Select::with_theme(self.theme.as_ref())
            .items(&labels)
            .default(0);
        if !prompt.is_empty() {
            select = select.with_prompt(prompt.trim_end_matches(':'));
        }

        let index = select.interact()?;
        Ok(Some((index + 1).to_string()))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let value: String = Input::with_theme(self.theme.as_ref())
            .with_prompt(prompt_label(prompt))
            .validate_with(|input: &String| -> Result<(), &'static str> {
                if input.split_whitespace().count() == 1 {
                    Ok(())
                } else {
                    Err("enter a single word")
                }
            })
            .interact_text()?;
        Ok(Some(value.trim().to_string()))
    }
}

/// Field name of a scripted prompt, without the `": "` and any unit after it.
///
/// `"Price: $"` becomes `"Price"`, since dialoguer appends its own separator.
fn prompt_label(prompt: &str) -> &str {
    let prompt = prompt.trim_end();
    prompt
        .rsplit_once(':')
        .map_or(prompt, |(label, _)| label.trim_end())
}
