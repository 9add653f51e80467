use std::{fs, path::Path};

use tracing::debug;

use crate::error::{Error, Result};

/// One `word/pos` token of tagger output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    pub word: String,
    pub pos: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
        }
    }

    /// Split a token at its first `/`
    /// Returns `None` when the token has no separator.
    ///
    /// # Examples
    /// ```
    /// use qa_keyword_features::vectorizer::token::TaggedToken;
    /// let tok = TaggedToken::parse("外卖/n").unwrap();
    /// assert_eq!((tok.word.as_str(), tok.pos.as_str()), ("外卖", "n"));
    /// assert_eq!(TaggedToken::parse("1/2/m").unwrap().pos, "2/m");
    /// assert!(TaggedToken::parse("外卖").is_none());
    /// ```
    #[inline]
    pub fn parse(token: &str) -> Option<Self> {
        token
            .split_once('/')
            .map(|(word, pos)| Self::new(word, pos))
    }
}

/// One line of tagged text, tokens kept in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<TaggedToken>,
}

impl Document {
    /// Parse one line of whitespace separated `word/pos` tokens
    /// Tokens without `/` are dropped silently; tagger output is noisy.
    pub fn parse_line(line: &str) -> Self {
        let tokens = line
            .split_whitespace()
            .filter_map(TaggedToken::parse)
            .collect();
        Self { tokens }
    }

    /// Read a UTF-8 corpus file, one document per line
    /// Blank lines become empty documents and still count in the corpus size.
    pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let docs: Vec<Document> = text.lines().map(Document::parse_line).collect();
        debug!(path = %path.display(), documents = docs.len(), "read tagged corpus");
        Ok(docs)
    }

    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<TaggedToken> for Document {
    fn from_iter<T: IntoIterator<Item = TaggedToken>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn parse_line_keeps_order_and_drops_malformed() {
        let doc = Document::parse_line("  美团/nt 外卖 补贴/vn\t骑手/n  ");
        assert_eq!(
            doc.tokens(),
            &[
                TaggedToken::new("美团", "nt"),
                TaggedToken::new("补贴", "vn"),
                TaggedToken::new("骑手", "n"),
            ]
        );
    }

    #[test]
    fn separator_edge_cases() {
        let doc = Document::parse_line("/w 好/ a/b/c");
        assert_eq!(
            doc.tokens(),
            &[
                TaggedToken::new("", "w"),
                TaggedToken::new("好", ""),
                TaggedToken::new("a", "b/c"),
            ]
        );
    }

    #[test]
    fn read_corpus_keeps_blank_lines_as_documents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "猫/n 很/d\n\n狗/n\n").unwrap();

        let docs = Document::read_corpus(file.path()).unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].len(), 2);
        assert!(docs[1].is_empty());
        assert_eq!(docs[2].tokens()[0].word, "狗");
    }

    #[test]
    fn read_corpus_missing_file() {
        assert!(matches!(
            Document::read_corpus("/no/such/corpus.txt"),
            Err(Error::Io { .. })
        ));
    }
}
