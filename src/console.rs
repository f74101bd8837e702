use std::io::{self, BufRead, Write};

/// Blocking operator prompts, kept behind a trait so tests can script answers.
pub trait Prompt {
    /// Ask a y/n question; anything other than `y`/`Y` counts as a decline.
    fn confirm(&mut self, question: &str) -> bool;

    /// Ask for a free-form line (e.g. a local file path), trimmed.
    fn read_path(&mut self, question: &str) -> String;
}

/// Prompts on stdout, reads answers from stdin.
pub struct StdinPrompt;

impl StdinPrompt {
    fn ask(question: &str) -> String {
        print!("{question}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
        line.trim().to_string()
    }
}

impl Prompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        Self::ask(question).eq_ignore_ascii_case("y")
    }

    fn read_path(&mut self, question: &str) -> String {
        Self::ask(question)
    }
}
