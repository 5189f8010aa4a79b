//! Knowledge bases.
use proplogic_formula::Expr;
use proplogic_parser::{parse, ParserError};

/// An ordered collection of sentences.
#[derive(Clone, Default, Debug)]
pub struct KnowledgeBase {
    sentences: Vec<Expr>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> KnowledgeBase {
        KnowledgeBase::default()
    }

    /// Parses a sentence and adds it.
    ///
    /// When parsing fails, the knowledge base is unchanged.
    pub fn tell(&mut self, sentence: &str) -> Result<(), ParserError> {
        let sentence = parse(sentence)?;
        self.sentences.push(sentence);
        Ok(())
    }

    /// Adds an already built sentence.
    pub fn tell_expr(&mut self, sentence: Expr) {
        self.sentences.push(sentence);
    }

    /// Parses and adds several sentences.
    ///
    /// Stops at the first sentence that fails to parse. All sentences before it stay added.
    pub fn tell_all<'a>(
        &mut self,
        sentences: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), ParserError> {
        for sentence in sentences {
            self.tell(sentence)?;
        }
        Ok(())
    }

    /// The sentences in the order they were added.
    pub fn sentences(&self) -> &[Expr] {
        &self.sentences
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// All sentences joined into a single right-nested conjunction.
    ///
    /// Returns `None` for an empty knowledge base.
    pub fn as_single_sentence(&self) -> Option<Expr> {
        Expr::conjunction(self.sentences.iter().cloned())
    }

    /// Like [`as_single_sentence`](KnowledgeBase::as_single_sentence) but returns `TRUE` for an
    /// empty knowledge base.
    pub(crate) fn sentence_or_true(&self) -> Expr {
        self.as_single_sentence().unwrap_or(Expr::True)
    }
}

impl Extend<Expr> for KnowledgeBase {
    fn extend<T: IntoIterator<Item = Expr>>(&mut self, sentences: T) {
        self.sentences.extend(sentences)
    }
}
