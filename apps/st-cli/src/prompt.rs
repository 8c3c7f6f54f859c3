// prompt.rs — Prompter: the only way the interactive flows talk to the user.
//
// Flows ask for a choice from a list, ask for a line of text, or print a
// toned message. TerminalPrompt implements this over any reader/writer pair
// so tests can script a whole session with in-memory buffers.

use std::io::{BufRead, BufReader, Read, Write};

use crate::render::{paint, Tone};

/// Errors from prompt I/O.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended (EOF) before an answer was given.
    #[error("input closed")]
    Closed,
}

/// Question/answer interface used by the menu and subcommands.
pub trait Prompter {
    /// Present `choices` and return the 0-based index picked.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError>;

    /// Ask for one line of free text (without the line terminator).
    fn input(&mut self, message: &str) -> Result<String, PromptError>;

    /// Print a message.
    fn say(&mut self, tone: Tone, message: &str) -> Result<(), PromptError>;
}

/// Ask until `parse` accepts the answer, printing each rejection inline.
pub fn ask<T>(
    prompt: &mut dyn Prompter,
    message: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, PromptError> {
    loop {
        let answer = prompt.input(message)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(reason) => prompt.say(Tone::Error, &format!(">> {}", reason))?,
        }
    }
}

/// A Prompter over a text reader and writer.
///
/// Choices are listed with numbers; the user answers with the number or the
/// choice text itself.
pub struct TerminalPrompt {
    reader: BufReader<Box<dyn Read>>,
    writer: Box<dyn Write>,
    color: bool,
}

impl TerminalPrompt {
    /// Create a TerminalPrompt from raw reader/writer.
    /// Use `TerminalPrompt::stdio()` for the real terminal, or pass mock I/O for tests.
    pub fn new(reader: Box<dyn Read>, writer: Box<dyn Write>, color: bool) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            color,
        }
    }

    /// A TerminalPrompt on stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(Box::new(std::io::stdin()), Box::new(std::io::stdout()), color)
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn parse_choice(answer: &str, choices: &[String]) -> Option<usize> {
        let answer = answer.trim();
        if let Ok(n) = answer.parse::<usize>() {
            return (1..=choices.len()).contains(&n).then(|| n - 1);
        }
        choices.iter().position(|c| c.eq_ignore_ascii_case(answer))
    }
}

impl Prompter for TerminalPrompt {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError> {
        let mut menu = format!("{}\n", paint(Tone::Heading, &format!("? {}", message), self.color));
        for (i, choice) in choices.iter().enumerate() {
            menu.push_str(&format!("  {}) {}\n", i + 1, choice));
        }

        loop {
            self.writer.write_all(menu.as_bytes())?;
            self.writer.write_all(b"> ")?;
            self.writer.flush()?;

            let answer = self.read_answer()?;
            if let Some(idx) = Self::parse_choice(&answer, choices) {
                return Ok(idx);
            }
            let hint = format!(">> Please enter a number between 1 and {}.", choices.len());
            self.say(Tone::Error, &hint)?;
        }
    }

    fn input(&mut self, message: &str) -> Result<String, PromptError> {
        let question = paint(Tone::Heading, &format!("? {}", message), self.color);
        write!(self.writer, "{} ", question)?;
        self.writer.flush()?;
        self.read_answer()
    }

    fn say(&mut self, tone: Tone, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", paint(tone, message, self.color))?;
        self.writer.flush()?;
        Ok(())
    }
}
