//! Input sources.

use std::path::PathBuf;

/// A single input: a named file or the standard input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on disk, addressed by path
    File(PathBuf),
    /// The process's standard input
    Stdin,
}

impl Source {
    /// The name used in report rows. Standard input has none.
    pub fn display_name(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Stdin => String::new(),
        }
    }

    /// Map positional FILE arguments to sources.
    ///
    /// No arguments means read standard input.
    pub fn from_args<I>(args: I) -> Vec<Source>
    where
        I: IntoIterator<Item = String>,
    {
        let sources: Vec<Source> = args
            .into_iter()
            .map(|arg| Source::File(PathBuf::from(arg)))
            .collect();
        if sources.is_empty() {
            vec![Source::Stdin]
        } else {
            sources
        }
    }
}
