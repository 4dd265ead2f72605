//! Reserved-word lookup.

use std::collections::HashSet;

/// Keywords recognized by the default Java-flavoured scanner.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "boolean", "break", "byte", "case", "catch", "char", "class",
    "continue", "default", "do", "double", "else", "extends", "false", "final",
    "finally", "float", "for", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private",
    "protected", "public", "return", "short", "static", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "true", "try",
    "void", "volatile", "while",
];

/// An immutable set of reserved words.
///
/// Built once and only read afterwards; the scanner consults it after
/// reading a full identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    /// The Java keyword list.
    pub fn java() -> Self {
        Self::from_words(JAVA_KEYWORDS.iter().copied())
    }

    /// Builds a set from arbitrary words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_keywords() {
        let keywords = KeywordSet::java();
        assert_eq!(keywords.len(), JAVA_KEYWORDS.len());
        assert!(keywords.contains("synchronized"));
        assert!(keywords.contains("null"));
        assert!(!keywords.contains("goto"));
        assert!(!keywords.contains("Class"));
    }

    #[test]
    fn test_custom_words() {
        let keywords = KeywordSet::from_words(["fn", "let"]);
        assert!(keywords.contains("fn"));
        assert!(!keywords.contains("class"));
        assert_eq!(keywords.len(), 2);
    }
}
