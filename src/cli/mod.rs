
use crate::errors::Result;
use crate::language::Language;

/// Outcome of reading the command line.
///
/// Exactly one argument is taken as the selector. Any other count, zero
/// included, falls back to the configured default without complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Explicit(String),
    Default(Language),
}

impl Selection {
    pub fn from_args<I, S>(args: I, default: Language) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(tag), None) => Selection::Explicit(tag.into()),
            _ => Selection::Default(default),
        }
    }

    pub fn language(&self) -> Result<Language> {
        match self {
            Selection::Explicit(tag) => Language::try_from(tag),
            Selection::Default(lang) => Ok(*lang),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Selection::Default(_))
    }
}
