//! Immutable parsing context handed to grammar rules.

use std::fmt;
use std::rc::Rc;

use psdc_ir::TokenList;

/// Stack of human-readable labels naming the active grammar rules.
///
/// Persistent: pushing shares the tail with the parent, so a rule's
/// context is cheap to clone and unwinds on return for free. Only
/// diagnostic text depends on it.
#[derive(Clone, Default)]
pub struct Subject(Option<Rc<SubjectNode>>);

struct SubjectNode {
    label: &'static str,
    parent: Subject,
}

impl Subject {
    /// The empty stack.
    pub const fn root() -> Self {
        Subject(None)
    }

    /// A stack with `label` on top of `self`.
    #[must_use]
    pub fn push(&self, label: &'static str) -> Self {
        Subject(Some(Rc::new(SubjectNode {
            label,
            parent: self.clone(),
        })))
    }

    /// The innermost label.
    pub fn top(&self) -> Option<&'static str> {
        self.0.as_ref().map(|node| node.label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Labels from innermost to outermost.
    pub fn iter(&self) -> SubjectIter<'_> {
        SubjectIter {
            next: self.0.as_deref(),
        }
    }

    pub fn depth(&self) -> usize {
        self.iter().count()
    }
}

impl PartialEq for Subject {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Subject {}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// The innermost label, or `input` outside of any rule.
impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.top().unwrap_or("input"))
    }
}

pub struct SubjectIter<'a> {
    next: Option<&'a SubjectNode>,
}

impl<'a> Iterator for SubjectIter<'a> {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        let node = self.next?;
        self.next = node.parent.0.as_deref();
        Some(node.label)
    }
}

/// Token array, start index and subject stack for one rule invocation.
#[derive(Clone, Debug)]
pub struct ParsingContext<'t> {
    tokens: &'t TokenList,
    start: usize,
    subject: Subject,
}

impl<'t> ParsingContext<'t> {
    /// Context at the first token with an empty subject stack.
    pub fn new(tokens: &'t TokenList) -> Self {
        ParsingContext {
            tokens,
            start: 0,
            subject: Subject::root(),
        }
    }

    /// Same context, starting at `start`.
    #[must_use]
    pub fn at(&self, start: usize) -> Self {
        ParsingContext {
            tokens: self.tokens,
            start,
            subject: self.subject.clone(),
        }
    }

    /// Same context with `label` pushed on the subject stack.
    #[must_use]
    pub fn push_subject(self, label: &'static str) -> Self {
        ParsingContext {
            subject: self.subject.push(label),
            ..self
        }
    }

    #[inline]
    pub fn tokens(&self) -> &'t TokenList {
        self.tokens
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }
}
