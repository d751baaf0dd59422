//! Import and export wizards.
//!
//! Each wizard is a state machine over named stages. Every prompt accepts
//! `c` to step back one stage (cancelling from the first stage) and `done` to
//! stop the program.

use std::path::PathBuf;

use sd_dict::{Dictionary, Format, ImportMode};

use crate::prompt::{Prompter, choose};

const BACK: &str = "c";

/// How a wizard ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Finished(T),
    Cancelled,
    Exit,
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn format_prompt(action: &str) -> Vec<String> {
    let mut prompt = vec![format!("please choose the {action} format:")];
    for format in Format::ALL {
        prompt.push(format!("{:<10} - {}", format.name(), format.description()));
    }
    prompt.push(format!("c (cancel) - go back without {action}"));
    prompt.push("done       - stop execution".to_string());
    prompt
}

/// Ask for a format; `None` inside means the user stepped back.
fn ask_format(prompter: &mut dyn Prompter, action: &str) -> Option<Option<Format>> {
    let options = ["gob", "csv", "csvc", BACK];
    let choice = choose(prompter, &format_prompt(action), &options)?;
    Some(Format::from_name(choice).ok())
}

/// Ask for a non-empty path; `None` inside means the user stepped back.
fn ask_path(prompter: &mut dyn Prompter, title: &str, hint: &str) -> Option<Option<String>> {
    let prompt = lines(&[
        title,
        "c (cancel) - go back to the previous step",
        "done       - stop execution",
    ]);
    loop {
        let input = prompter.ask(&prompt)?;
        if input == BACK {
            return Some(None);
        }
        if !input.is_empty() {
            return Some(Some(input));
        }
        prompter.error(&[hint.to_string()]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ExportStage {
    Format,
    Path(Format),
}

/// Ask for a format and a path, then export.
///
/// The format's suffix is appended to the path. A failed write is reported
/// and the path is asked again.
pub fn export(dict: &Dictionary, prompter: &mut dyn Prompter) -> Outcome<PathBuf> {
    let mut stage = ExportStage::Format;
    loop {
        stage = match stage {
            ExportStage::Format => match ask_format(prompter, "export") {
                None => return Outcome::Exit,
                Some(None) => return Outcome::Cancelled,
                Some(Some(format)) => ExportStage::Path(format),
            },
            ExportStage::Path(format) => match ask_path(
                prompter,
                "please specify the desired file location:",
                "type the path to create file:",
            ) {
                None => return Outcome::Exit,
                Some(None) => ExportStage::Format,
                Some(Some(input)) => {
                    let path = format.with_extension(&input);
                    match dict.export(&path, format.name()) {
                        Ok(()) => return Outcome::Finished(path),
                        Err(err) => {
                            prompter.error(&[err.to_string()]);
                            ExportStage::Path(format)
                        }
                    }
                }
            },
        };
    }
}

/// What the import wizard decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    pub format: Format,
    pub path: PathBuf,
    pub mode: ImportMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ImportStage {
    Format,
    Path(Format),
    Conflict { format: Format, path: PathBuf },
    SaveFirst { format: Format, path: PathBuf },
}

/// Ask for a format and a readable file, then how to combine it with a
/// non-empty dictionary.
///
/// Nothing is imported here; the caller applies the returned plan. Choosing
/// to overwrite offers to export the current dictionary first.
pub fn import(dict: &Dictionary, prompter: &mut dyn Prompter) -> Outcome<ImportPlan> {
    let mut stage = ImportStage::Format;
    loop {
        stage = match stage {
            ImportStage::Format => match ask_format(prompter, "import") {
                None => return Outcome::Exit,
                Some(None) => return Outcome::Cancelled,
                Some(Some(format)) => ImportStage::Path(format),
            },

            ImportStage::Path(format) => match ask_path(
                prompter,
                "please specify the file location:",
                "type the path to import dictionary:",
            ) {
                None => return Outcome::Exit,
                Some(None) => ImportStage::Format,
                Some(Some(input)) => {
                    let path = PathBuf::from(input);
                    if let Err(err) = std::fs::File::open(&path) {
                        prompter.error(&[format!("file read failed: {}: {err}", path.display())]);
                        ImportStage::Path(format)
                    } else if dict.is_empty() {
                        return Outcome::Finished(ImportPlan {
                            format,
                            path,
                            mode: ImportMode::Overwrite,
                        });
                    } else {
                        ImportStage::Conflict { format, path }
                    }
                }
            },

            ImportStage::Conflict { format, path } => {
                let prompt = lines(&[
                    "current dictionary is not empty. choose the action:",
                    "overwrite (o) - clear the current dictionary and replace it with the imported one",
                    "merge (m)     - merge the imported dictionary with the current one",
                    "cancel (c)    - go back to the previous step",
                    "done          - stop execution",
                ]);
                match choose(prompter, &prompt, &["o", "m", BACK]) {
                    None => return Outcome::Exit,
                    Some("o") => ImportStage::SaveFirst { format, path },
                    Some("m") => {
                        return Outcome::Finished(ImportPlan {
                            format,
                            path,
                            mode: ImportMode::Merge,
                        });
                    }
                    Some(_) => ImportStage::Path(format),
                }
            }

            ImportStage::SaveFirst { format, path } => {
                let prompt = lines(&[
                    "do you want to save the dictionary before overwriting?",
                    "yes (y)    - export and save the current dictionary first",
                    "no (n)     - continue without saving",
                    "cancel (c) - go back to the previous step",
                    "done       - stop execution",
                ]);
                match choose(prompter, &prompt, &["y", "n", BACK]) {
                    None => return Outcome::Exit,
                    Some("y") => match export(dict, prompter) {
                        Outcome::Exit => return Outcome::Exit,
                        Outcome::Cancelled => ImportStage::SaveFirst { format, path },
                        Outcome::Finished(saved) => {
                            prompter.say(&[format!("exported successfully to {}", saved.display())]);
                            return Outcome::Finished(ImportPlan {
                                format,
                                path,
                                mode: ImportMode::Overwrite,
                            });
                        }
                    },
                    Some("n") => {
                        return Outcome::Finished(ImportPlan {
                            format,
                            path,
                            mode: ImportMode::Overwrite,
                        });
                    }
                    Some(_) => ImportStage::Conflict { format, path },
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedPrompter;
    use tempfile::TempDir;

    fn chained() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.add_synonyms(&["big", "large", "huge"]);
        dict
    }

    #[test]
    fn export_appends_extension() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("words");
        let base = base.to_str().unwrap();
        let mut prompter = ScriptedPrompter::new(&["csvc", base]);

        let outcome = export(&chained(), &mut prompter);
        let expected = dir.path().join("words.csvc");
        assert_eq!(outcome, Outcome::Finished(expected.clone()));
        assert!(expected.is_file());
    }

    #[test]
    fn export_back_and_cancel() {
        let mut prompter = ScriptedPrompter::new(&["csv", "c", "c"]);
        assert_eq!(export(&chained(), &mut prompter), Outcome::Cancelled);
        assert!(prompter.inputs.is_empty());
    }

    #[test]
    fn export_retries_failed_write() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("missing/dir/words");
        let good = dir.path().join("words");
        let mut prompter =
            ScriptedPrompter::new(&["gob", bad.to_str().unwrap(), good.to_str().unwrap()]);

        let outcome = export(&chained(), &mut prompter);
        assert_eq!(outcome, Outcome::Finished(dir.path().join("words.gob")));
        assert_eq!(prompter.errors.len(), 1);
    }

    #[test]
    fn export_rejects_unknown_format() {
        let mut prompter = ScriptedPrompter::new(&["xml", "done"]);
        assert_eq!(export(&chained(), &mut prompter), Outcome::Exit);
        assert_eq!(prompter.errors[0], "choose one of listed below:");
    }

    #[test]
    fn import_into_empty_dictionary_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.csvc");
        std::fs::write(&path, "a;b\n").unwrap();
        let mut prompter = ScriptedPrompter::new(&["csvc", path.to_str().unwrap()]);

        let outcome = import(&Dictionary::new(), &mut prompter);
        assert_eq!(
            outcome,
            Outcome::Finished(ImportPlan {
                format: Format::Csvc,
                path,
                mode: ImportMode::Overwrite,
            })
        );
    }

    #[test]
    fn import_asks_again_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");
        let present = dir.path().join("yes.csv");
        std::fs::write(&present, "").unwrap();
        let mut prompter = ScriptedPrompter::new(&[
            "csv",
            missing.to_str().unwrap(),
            present.to_str().unwrap(),
            "m",
        ]);

        let outcome = import(&chained(), &mut prompter);
        assert!(matches!(
            outcome,
            Outcome::Finished(ImportPlan {
                mode: ImportMode::Merge,
                ..
            })
        ));
        assert!(prompter.errors[0].starts_with("file read failed"));
    }

    #[test]
    fn import_overwrite_with_save_first() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.csv");
        std::fs::write(&source, "").unwrap();
        let backup = dir.path().join("backup");
        let mut prompter = ScriptedPrompter::new(&[
            "csv",
            source.to_str().unwrap(),
            "o",
            "y",
            "gob",
            backup.to_str().unwrap(),
        ]);

        let outcome = import(&chained(), &mut prompter);
        assert!(matches!(
            outcome,
            Outcome::Finished(ImportPlan {
                mode: ImportMode::Overwrite,
                ..
            })
        ));
        assert!(dir.path().join("backup.gob").is_file());
    }

    #[test]
    fn import_steps_back_through_stages() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("in.csv");
        std::fs::write(&source, "").unwrap();
        let source = source.to_str().unwrap();
        // SaveFirst -> Conflict -> Path -> Format -> cancelled
        let mut prompter = ScriptedPrompter::new(&["csv", source, "o", "c", "c", "c", "c"]);

        assert_eq!(import(&chained(), &mut prompter), Outcome::Cancelled);
        assert!(prompter.inputs.is_empty());
    }
}
