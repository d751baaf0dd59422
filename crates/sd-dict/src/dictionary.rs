//! The synonym dictionary.

use std::path::Path;

use sd_graph::Graph;
use tracing::{debug, info, warn};

use crate::error::{DictError, DictResult};
use crate::format::Format;
use crate::storage;
use crate::word::is_valid_word;

/// Options carried by a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictOptions {
    /// Prefix text exports with a UTF-8 byte-order mark.
    pub write_bom: bool,
}

/// How an import was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// The imported graph replaced the current one.
    Overwrite,
    /// The imported graph was unioned into the current one.
    Merge,
}

/// A personal synonym dictionary.
///
/// Words are vertices of one [`Graph`]; a direct link is an edge and a
/// synonym group is a connected component. Batch operations collect one
/// error per offending word and keep going; single-word operations return
/// the first failure.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    graph: Graph,
    options: DictOptions,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DictOptions) -> Self {
        Self {
            graph: Graph::new(),
            options,
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn check_pattern(word: &str, errors: &mut Vec<DictError>) -> bool {
        if is_valid_word(word) {
            return true;
        }
        errors.push(DictError::InvalidWord {
            word: word.to_string(),
        });
        false
    }

    fn require(&self, word: &str) -> DictResult<()> {
        if self.graph.has_vertex(word) {
            Ok(())
        } else {
            Err(DictError::not_found(word))
        }
    }

    fn require_link(&self, a: &str, b: &str) -> DictResult<()> {
        self.require(a)?;
        self.require(b)?;
        if !self.graph.has_edge(a, b) {
            return Err(DictError::NotLinked {
                a: a.to_string(),
                b: b.to_string(),
            });
        }
        Ok(())
    }

    /// Add each word as an isolated vertex.
    ///
    /// Words that do not match the pattern or already exist are reported and
    /// skipped; the rest are added.
    pub fn add_words<S: AsRef<str>>(&mut self, words: &[S]) -> Vec<DictError> {
        let mut errors = Vec::new();

        for word in words {
            let word: &str = word.as_ref();
            if !Self::check_pattern(word, &mut errors) {
                continue;
            }
            if self.graph.has_vertex(word) {
                errors.push(DictError::AlreadyExists {
                    word: word.to_string(),
                });
                continue;
            }
            if let Err(err) = self.graph.add_vertex(word) {
                errors.push(err.into());
            }
        }

        errors
    }

    /// Add a run of mutual synonyms.
    ///
    /// Valid words are chained in input order (`w1-w2`, `w2-w3`, ...), not
    /// fully interconnected; transitivity makes the whole run one group.
    /// Invalid words are reported and left out of the chain, so their
    /// neighbors are linked to each other directly. A single valid word is
    /// added as an isolated vertex. Adjacent input pairs that are already
    /// linked are reported but do not block anything.
    pub fn add_synonyms<S: AsRef<str>>(&mut self, words: &[S]) -> Vec<DictError> {
        let words: Vec<&str> = words.iter().map(|word| word.as_ref()).collect();
        let mut errors = Vec::new();
        let mut accepted = Vec::with_capacity(words.len());

        for (i, &word) in words.iter().enumerate() {
            let valid = Self::check_pattern(word, &mut errors);

            if let Some(&next) = words.get(i + 1) {
                if self.graph.has_edge(word, next) {
                    errors.push(DictError::AlreadyLinked {
                        a: word.to_string(),
                        b: next.to_string(),
                    });
                }
            }

            if valid {
                accepted.push(word);
            }
        }

        match accepted.as_slice() {
            [] => {}
            [only] => {
                if let Err(err) = self.graph.add_vertex(only) {
                    errors.push(err.into());
                }
            }
            chain => {
                for pair in chain.windows(2) {
                    if let Err(err) = self.graph.add_edge(pair[0], pair[1]) {
                        errors.push(err.into());
                    }
                }
            }
        }

        errors
    }

    /// Remove each word and all its links.
    pub fn remove_words<S: AsRef<str>>(&mut self, words: &[S]) -> Vec<DictError> {
        let mut errors = Vec::new();

        for word in words {
            let word: &str = word.as_ref();
            match self.require(word) {
                Ok(()) => self.graph.remove_vertex(word),
                Err(err) => errors.push(err),
            }
        }

        errors
    }

    /// Remove the direct link between `a` and `b`, keeping both words.
    pub fn unlink_synonyms(&mut self, a: &str, b: &str) -> DictResult<()> {
        self.require_link(a, b)?;
        self.graph.remove_edge(a, b);
        Ok(())
    }

    /// Remove the direct link, then drop either word left without links.
    pub fn unlink_synonyms_and_cleanup(&mut self, a: &str, b: &str) -> DictResult<()> {
        self.require_link(a, b)?;
        self.graph.remove_edge_and_cleanup(a, b);
        Ok(())
    }

    /// Whether `a` and `b` are in the same synonym group.
    pub fn are_synonyms(&self, a: &str, b: &str) -> DictResult<bool> {
        self.require(a)?;
        self.require(b)?;
        Ok(self.graph.are_connected(a, b))
    }

    /// Whether `a` and `b` are directly linked.
    pub fn are_direct_synonyms(&self, a: &str, b: &str) -> DictResult<bool> {
        self.require(a)?;
        self.require(b)?;
        Ok(self.graph.has_edge(a, b))
    }

    pub fn word_exists(&self, word: &str) -> bool {
        self.graph.has_vertex(word)
    }

    /// Size of the word's synonym group, minus the word itself.
    pub fn synonym_count(&self, word: &str) -> DictResult<usize> {
        self.require(word)?;
        Ok(self.graph.connected_vertex_count(word))
    }

    /// Directly linked synonyms, sorted.
    pub fn direct_synonyms(&self, word: &str) -> DictResult<Vec<String>> {
        self.require(word)?;
        Ok(self.graph.neighbors(word))
    }

    /// Every member of the word's synonym group except the word, sorted.
    pub fn synonyms(&self, word: &str) -> DictResult<Vec<String>> {
        self.require(word)?;
        Ok(self.graph.connected_vertices(word))
    }

    /// All words, sorted.
    pub fn words(&self) -> Vec<String> {
        self.graph.vertices()
    }

    pub fn word_count(&self) -> usize {
        self.graph.order()
    }

    pub fn synonym_groups(&self) -> Vec<Vec<String>> {
        self.graph.connectivity_groups()
    }

    pub fn synonym_group_count(&self) -> usize {
        self.graph.connectivity_group_count()
    }

    /// Drop every word.
    pub fn clear(&mut self) {
        debug!(words = self.word_count(), "clearing dictionary");
        self.graph = Graph::new();
    }

    /// Drop every word without synonyms. Returns how many were dropped.
    pub fn cleanup(&mut self) -> usize {
        self.graph.cleanup()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Serialize the dictionary to `path` in the named format.
    ///
    /// The path is used as given; see [`Format::with_extension`].
    pub fn export(&self, path: impl AsRef<Path>, format: &str) -> DictResult<()> {
        let path = path.as_ref();
        let format = Format::from_name(format)?;
        let data = format.encode(&self.graph)?;
        storage::write(path, &data, format.is_text() && self.options.write_bom)?;

        info!(
            path = %path.display(),
            %format,
            words = self.word_count(),
            "exported dictionary"
        );
        Ok(())
    }

    /// Read `path` in the named format and apply it.
    ///
    /// An empty dictionary is replaced; otherwise the imported graph is
    /// merged in.
    pub fn import(&mut self, path: impl AsRef<Path>, format: &str) -> DictResult<ImportMode> {
        let mode = if self.is_empty() {
            ImportMode::Overwrite
        } else {
            ImportMode::Merge
        };
        self.import_as(path, format, mode)?;
        Ok(mode)
    }

    /// Read `path` in the named format and apply it with the given mode.
    ///
    /// The file is decoded and validated before the dictionary is touched,
    /// so a failed import leaves it unchanged.
    pub fn import_as(
        &mut self,
        path: impl AsRef<Path>,
        format: &str,
        mode: ImportMode,
    ) -> DictResult<()> {
        let path = path.as_ref();
        let format = Format::from_name(format)?;
        let data = storage::read(path, format.is_text())?;
        let incoming = format.decode(&data).inspect_err(|err| {
            let kind = err.kind();
            warn!(
                path = %path.display(),
                %format,
                %kind,
                structural = kind.is_structural(),
                error = %err,
                "rejected import"
            );
        })?;
        let imported = incoming.order();

        match mode {
            ImportMode::Overwrite => self.graph.from_graph_unsafe(incoming),
            ImportMode::Merge => self.graph.merge_unsafe(incoming),
        }

        info!(
            path = %path.display(),
            %format,
            ?mode,
            imported,
            words = self.word_count(),
            "imported dictionary"
        );
        Ok(())
    }
}
