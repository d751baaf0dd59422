//! Command dispatch over one dictionary.

use sd_dict::{DictError, Dictionary};
use tracing::debug;

use crate::prompt::{Prompter, confirm, parse_command};
use crate::wizard::{self, Outcome};

/// What a command asks the session to do next.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print these result lines (possibly none) and read the next command.
    Lines(Vec<String>),
    /// Report these failures and read the next command.
    Errors(Vec<String>),
    /// Stop the program.
    Exit,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Lines(vec![text.into()])
    }

    fn error(text: impl Into<String>) -> Self {
        Reply::Errors(vec![text.into()])
    }

    /// Batch failures; an empty batch is a silent success.
    fn errors(errors: Vec<DictError>) -> Self {
        if errors.is_empty() {
            return Reply::nothing();
        }
        Reply::Errors(errors.iter().map(ToString::to_string).collect())
    }

    fn nothing() -> Self {
        Reply::Lines(Vec::new())
    }
}

/// How many quoted arguments a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Zero,
    One,
    Two,
    AtLeastOne,
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Zero => count == 0,
            Arity::One => count == 1,
            Arity::Two => count == 2,
            Arity::AtLeastOne => count >= 1,
        }
    }
}

type Handler = fn(&mut Dictionary, &[String], &mut dyn Prompter) -> Reply;

struct Command {
    name: &'static str,
    usage: &'static str,
    help: &'static str,
    arity: Arity,
    run: Handler,
}

const COMMANDS: &[Command] = &[
    Command {
        name: "add",
        usage: "add \"word1\"...",
        help: "adds each word to the dictionary if not already present, and links them as synonyms",
        arity: Arity::AtLeastOne,
        run: add,
    },
    Command {
        name: "add-words",
        usage: "add-words \"word1\"...",
        help: "adds each word to the dictionary if not already present (does not link them as synonyms)",
        arity: Arity::AtLeastOne,
        run: add_words,
    },
    Command {
        name: "remove",
        usage: "remove \"word1\"...",
        help: "removes each word from the dictionary if already present",
        arity: Arity::AtLeastOne,
        run: remove,
    },
    Command {
        name: "unlink",
        usage: "unlink \"word1\" \"word2\"",
        help: "removes synonym link between words (does not delete the words themselves)",
        arity: Arity::Two,
        run: unlink,
    },
    Command {
        name: "unlink-clean",
        usage: "unlink-clean \"word1\" \"word2\"",
        help: "removes synonym link between words (deletes words if they have no other synonyms)",
        arity: Arity::Two,
        run: unlink_clean,
    },
    Command {
        name: "check",
        usage: "check \"word1\" \"word2\"",
        help: "checks if the words are synonyms (directly or transitively)",
        arity: Arity::Two,
        run: check,
    },
    Command {
        name: "check-direct",
        usage: "check-direct \"word1\" \"word2\"",
        help: "checks if the words are directly linked as synonyms",
        arity: Arity::Two,
        run: check_direct,
    },
    Command {
        name: "exists",
        usage: "exists \"word\"",
        help: "checks if the word exists in the dictionary",
        arity: Arity::One,
        run: exists,
    },
    Command {
        name: "count",
        usage: "count \"word\"",
        help: "prints the number of synonyms of the word",
        arity: Arity::One,
        run: count,
    },
    Command {
        name: "synonyms",
        usage: "synonyms \"word\"",
        help: "prints all synonyms of the word",
        arity: Arity::One,
        run: synonyms,
    },
    Command {
        name: "direct-synonyms",
        usage: "direct-synonyms \"word\"",
        help: "prints only directly linked synonyms (words that were explicitly connected)",
        arity: Arity::One,
        run: direct_synonyms,
    },
    Command {
        name: "count-groups",
        usage: "count-groups",
        help: "prints the number of synonym groups",
        arity: Arity::Zero,
        run: count_groups,
    },
    Command {
        name: "groups",
        usage: "groups",
        help: "prints all synonym groups",
        arity: Arity::Zero,
        run: groups,
    },
    Command {
        name: "count-words",
        usage: "count-words",
        help: "prints the total number of words in the dictionary",
        arity: Arity::Zero,
        run: count_words,
    },
    Command {
        name: "words",
        usage: "words",
        help: "prints all words",
        arity: Arity::Zero,
        run: words,
    },
    Command {
        name: "cleanup",
        usage: "cleanup",
        help: "removes words that have no synonyms from the dictionary",
        arity: Arity::Zero,
        run: cleanup,
    },
    Command {
        name: "clear",
        usage: "clear",
        help: "clears the dictionary (warning: cannot be undone)",
        arity: Arity::Zero,
        run: clear,
    },
    Command {
        name: "import",
        usage: "import",
        help: "import dictionary (gob/csv/csvc); a non-empty dictionary can be saved, merged or overwritten",
        arity: Arity::Zero,
        run: import,
    },
    Command {
        name: "export",
        usage: "export",
        help: "export dictionary (gob/csv/csvc)",
        arity: Arity::Zero,
        run: export,
    },
    Command {
        name: "help",
        usage: "help",
        help: "prints this help message",
        arity: Arity::Zero,
        run: help,
    },
];

fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// An interactive session over one dictionary.
#[derive(Debug, Default)]
pub struct Session {
    dict: Dictionary,
}

impl Session {
    pub fn new(dict: Dictionary) -> Self {
        Self { dict }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Parse and run one command line.
    pub fn execute(&mut self, line: &str, prompter: &mut dyn Prompter) -> Reply {
        let parsed = match parse_command(line) {
            Ok(parsed) => parsed,
            Err(err) => return Reply::error(format!("incorrect syntax: {err}, type \"help\"")),
        };
        let Some(command) = find(&parsed.name) else {
            return Reply::error(format!("unknown command {:?}, type \"help\"", parsed.name));
        };
        if !command.arity.accepts(parsed.args.len()) {
            return Reply::error(format!("usage: {}", command.usage));
        }

        debug!(command = command.name, args = parsed.args.len(), "executing");
        (command.run)(&mut self.dict, &parsed.args, prompter)
    }

    /// Read and run commands until the user stops.
    pub fn run(&mut self, prompter: &mut dyn Prompter) {
        loop {
            let Some(line) = prompter.ask(&[]) else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            match self.execute(&line, prompter) {
                Reply::Lines(lines) => prompter.say(&lines),
                Reply::Errors(lines) => prompter.error(&lines),
                Reply::Exit => break,
            }
        }
        prompter.say(&["goodbye!".to_string()]);
    }
}

fn numbered(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}) {}", i + 1, item))
}

fn yes_no(label: &str, value: bool) -> Reply {
    Reply::line(format!("{label}: {}", if value { "yes" } else { "no" }))
}

fn add(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    Reply::errors(dict.add_synonyms(args))
}

fn add_words(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    Reply::errors(dict.add_words(args))
}

fn remove(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    Reply::errors(dict.remove_words(args))
}

fn unlink(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    match dict.unlink_synonyms(&args[0], &args[1]) {
        Ok(()) => Reply::nothing(),
        Err(err) => Reply::error(err.to_string()),
    }
}

fn unlink_clean(dict: &mut Dictionary, args: &[String], prompter: &mut dyn Prompter) -> Reply {
    match confirm(prompter) {
        None => Reply::Exit,
        Some(false) => Reply::nothing(),
        Some(true) => match dict.unlink_synonyms_and_cleanup(&args[0], &args[1]) {
            Ok(()) => Reply::nothing(),
            Err(err) => Reply::error(err.to_string()),
        },
    }
}

fn check(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    match dict.are_synonyms(&args[0], &args[1]) {
        Ok(result) => yes_no("synonyms", result),
        Err(err) => Reply::error(err.to_string()),
    }
}

fn check_direct(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    match dict.are_direct_synonyms(&args[0], &args[1]) {
        Ok(result) => yes_no("direct-linked synonyms", result),
        Err(err) => Reply::error(err.to_string()),
    }
}

fn exists(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    yes_no("exists", dict.word_exists(&args[0]))
}

fn count(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    let word = &args[0];
    match dict.synonym_count(word) {
        Ok(0) => Reply::line(format!("word \"{word}\" has no synonyms yet")),
        Ok(1) => Reply::line(format!("word \"{word}\" has 1 synonym")),
        Ok(n) => Reply::line(format!("word \"{word}\" has {n} synonyms")),
        Err(err) => Reply::error(err.to_string()),
    }
}

fn synonym_list(word: &str, result: Result<Vec<String>, DictError>, label: &str) -> Reply {
    match result {
        Ok(list) if list.is_empty() => {
            Reply::line(format!("word \"{word}\" has no {label} yet"))
        }
        Ok(list) => {
            let mut lines = vec![format!("word \"{word}\" {label} list:")];
            lines.extend(numbered(&list));
            Reply::Lines(lines)
        }
        Err(err) => Reply::error(err.to_string()),
    }
}

fn synonyms(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    synonym_list(&args[0], dict.synonyms(&args[0]), "synonyms")
}

fn direct_synonyms(dict: &mut Dictionary, args: &[String], _: &mut dyn Prompter) -> Reply {
    synonym_list(
        &args[0],
        dict.direct_synonyms(&args[0]),
        "direct-linked synonyms",
    )
}

fn count_groups(dict: &mut Dictionary, _: &[String], _: &mut dyn Prompter) -> Reply {
    match dict.synonym_group_count() {
        0 => Reply::line("dictionary has no synonym groups yet"),
        1 => Reply::line("dictionary contains 1 synonym group"),
        n => Reply::line(format!("dictionary contains {n} synonym groups")),
    }
}

fn groups(dict: &mut Dictionary, _: &[String], _: &mut dyn Prompter) -> Reply {
    let groups = dict.synonym_groups();
    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} group", i + 1));
        lines.extend(numbered(group));
    }
    Reply::Lines(lines)
}

fn count_words(dict: &mut Dictionary, _: &[String], _: &mut dyn Prompter) -> Reply {
    match dict.word_count() {
        0 => Reply::line("dictionary has no words yet"),
        1 => Reply::line("dictionary contains 1 word"),
        n => Reply::line(format!("dictionary contains {n} words")),
    }
}

fn words(dict: &mut Dictionary, _: &[String], _: &mut dyn Prompter) -> Reply {
    Reply::Lines(numbered(&dict.words()).collect())
}

fn cleanup(dict: &mut Dictionary, _: &[String], prompter: &mut dyn Prompter) -> Reply {
    match confirm(prompter) {
        None => Reply::Exit,
        Some(false) => Reply::nothing(),
        Some(true) => {
            dict.cleanup();
            Reply::nothing()
        }
    }
}

fn clear(dict: &mut Dictionary, _: &[String], prompter: &mut dyn Prompter) -> Reply {
    match confirm(prompter) {
        None => Reply::Exit,
        Some(false) => Reply::nothing(),
        Some(true) => {
            dict.clear();
            Reply::nothing()
        }
    }
}

fn import(dict: &mut Dictionary, _: &[String], prompter: &mut dyn Prompter) -> Reply {
    match wizard::import(dict, prompter) {
        Outcome::Exit => Reply::Exit,
        Outcome::Cancelled => Reply::line("import canceled"),
        Outcome::Finished(plan) => {
            match dict.import_as(&plan.path, plan.format.name(), plan.mode) {
                Ok(()) => Reply::line("imported successfully"),
                Err(err) => Reply::error(err.to_string()),
            }
        }
    }
}

fn export(dict: &mut Dictionary, _: &[String], prompter: &mut dyn Prompter) -> Reply {
    match wizard::export(dict, prompter) {
        Outcome::Exit => Reply::Exit,
        Outcome::Cancelled => Reply::line("export canceled"),
        Outcome::Finished(path) => {
            Reply::line(format!("exported successfully to {}", path.display()))
        }
    }
}

fn help(_: &mut Dictionary, _: &[String], _: &mut dyn Prompter) -> Reply {
    let mut lines = vec!["available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|command| format!("{:<32} - {}", command.usage, command.help)),
    );
    lines.push(format!("{:<32} - stops execution", "done"));
    Reply::Lines(lines)
}
