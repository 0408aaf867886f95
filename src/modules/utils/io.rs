#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, Write};

/// Line-oriented terminal used by every interactive flow
pub trait Console {
    /// Show `message` and read one line with surrounding whitespace removed
    fn prompt(&mut self, message: &str) -> io::Result<String>;

    /// Same as `prompt` but the typed text is not echoed
    fn prompt_secret(&mut self, message: &str) -> io::Result<String>;

    fn show(&mut self, message: &str);
}

/// The process's stdin/stdout
#[derive(Debug, Default)]
pub struct Terminal;

impl Console for Terminal {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        print!("{}", message);
        io::stdout().flush()?;
        read_line()
    }

    fn prompt_secret(&mut self, message: &str) -> io::Result<String> {
        print!("{}", message);
        io::stdout().flush()?;
        Ok(rpassword::read_password()?.trim().to_string())
    }

    fn show(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Helper function to read a line from stdin
///
/// A closed stdin is reported as `UnexpectedEof` so retry loops stop.
pub fn read_line() -> io::Result<String> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(input.trim().to_string())
}

/// Ask a yes/no question; only an explicit `y` counts as yes
pub fn prompt_with_confirmation(console: &mut dyn Console, question: &str) -> io::Result<bool> {
    let response = console.prompt(&format!("{} (y/n): ", question))?;
    Ok(response.to_lowercase() == "y")
}

/// Pause until Enter is pressed
pub fn wait_for_enter(console: &mut dyn Console) -> io::Result<()> {
    console.prompt("\nPress Enter to continue...").map(|_| ())
}

/// Console fed from a fixed list of answers, recording everything shown.
///
/// Running out of answers behaves like a closed stdin.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    /// Number of answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any prompt or message so far contained `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    fn next_answer(&mut self, message: &str) -> io::Result<String> {
        self.transcript.push(message.to_string());
        self.inputs
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.next_answer(message)
    }

    fn prompt_secret(&mut self, message: &str) -> io::Result<String> {
        self.next_answer(message)
    }

    fn show(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}
