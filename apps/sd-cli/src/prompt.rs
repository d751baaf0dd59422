//! Line-oriented prompting and command-line parsing.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Typed at any prompt to stop the program.
pub const EXIT_INPUT: &str = "done";

/// Where the session reads input and writes output.
pub trait Prompter {
    /// Print result lines.
    fn say(&mut self, lines: &[String]);

    /// Print error lines.
    fn error(&mut self, lines: &[String]);

    /// Print `prompt`, then read one trimmed line.
    ///
    /// `None` means the user asked to stop (`done` or end of input).
    fn ask(&mut self, prompt: &[String]) -> Option<String>;
}

/// Prompter over stdin/stdout; errors go to stderr.
pub struct StdioPrompter<R> {
    input: R,
}

impl StdioPrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Prompter for StdioPrompter<R> {
    fn say(&mut self, lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }

    fn error(&mut self, lines: &[String]) {
        for line in lines {
            eprintln!("ERROR> {line}");
        }
    }

    fn ask(&mut self, prompt: &[String]) -> Option<String> {
        self.say(prompt);
        print!(" > ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = line.trim();
                (line != EXIT_INPUT).then(|| line.to_string())
            }
        }
    }
}

/// Ask for a y/n confirmation of a destructive command.
///
/// `None` means the user asked to stop.
pub fn confirm(prompter: &mut dyn Prompter) -> Option<bool> {
    let prompt = ["are you sure? this action cannot be undone (y/n or done)".to_string()];
    loop {
        match prompter.ask(&prompt)?.to_lowercase().as_str() {
            "y" => return Some(true),
            "n" => return Some(false),
            _ => prompter.error(&["type \"y\", \"n\" or \"done\"".to_string()]),
        }
    }
}

/// Ask until the input is one of `options`, compared case-insensitively.
///
/// `None` means the user asked to stop.
pub fn choose(
    prompter: &mut dyn Prompter,
    prompt: &[String],
    options: &[&'static str],
) -> Option<&'static str> {
    loop {
        let input = prompter.ask(prompt)?.to_lowercase();
        if let Some(option) = options.iter().find(|option| **option == input) {
            return Some(*option);
        }
        let mut hint = vec!["choose one of listed below:".to_string()];
        hint.extend(prompt.iter().skip(1).cloned());
        prompter.error(&hint);
    }
}

/// A parsed command line: a name and its quoted arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("argument {0:?} must be wrapped in double quotes")]
    Unquoted(String),

    #[error("unterminated quote")]
    Unterminated,
}

/// Split `name "arg one" "arg two"` into a command name and arguments.
///
/// The name is lowercased; arguments keep their exact spelling.
pub fn parse_command(line: &str) -> Result<CommandLine, ParseError> {
    let line = line.trim();
    let (name, mut rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (line, ""),
    };
    if name.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut args = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let Some(quoted) = rest.strip_prefix('"') else {
            let token = rest.split_whitespace().next().unwrap_or_default();
            return Err(ParseError::Unquoted(token.to_string()));
        };
        let Some((arg, tail)) = quoted.split_once('"') else {
            return Err(ParseError::Unterminated);
        };
        args.push(arg.to_string());
        rest = tail;
    }

    Ok(CommandLine {
        name: name.to_lowercase(),
        args,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::{EXIT_INPUT, Prompter};

    /// Prompter fed from a fixed script of inputs.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompter {
        pub(crate) inputs: VecDeque<String>,
        pub(crate) said: Vec<String>,
        pub(crate) errors: Vec<String>,
        pub(crate) prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn say(&mut self, lines: &[String]) {
            self.said.extend_from_slice(lines);
        }

        fn error(&mut self, lines: &[String]) {
            self.errors.extend_from_slice(lines);
        }

        fn ask(&mut self, prompt: &[String]) -> Option<String> {
            self.prompts.extend_from_slice(prompt);
            self.inputs.pop_front().filter(|input| input != EXIT_INPUT)
        }
    }
}
