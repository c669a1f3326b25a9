use tsfe_span::{GetSpan, Span};

/// An ordered child collection with its own position range, distinct from a
/// bare `Vec` so the parser can record whether the list ended in a trailing
/// comma or whether the whole list is a zero-width placeholder produced by
/// error recovery.
#[derive(Debug, Clone)]
pub struct NodeArray<'a, T> {
    pub span: Span,
    elements: tsfe_allocator::Vec<'a, T>,
    pub has_trailing_comma: bool,
    /// `true` if the parser could not find any elements at all and
    /// synthesized this array wholesale at a single position (e.g. `const`
    /// with no declarator list).
    pub is_missing_list: bool,
}

impl<'a, T> NodeArray<'a, T> {
    pub fn new(span: Span, elements: tsfe_allocator::Vec<'a, T>) -> Self {
        Self { span, elements, has_trailing_comma: false, is_missing_list: false }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn is_missing_list(&self) -> bool {
        self.is_missing_list
    }
}

impl<'a, T> std::ops::Deref for NodeArray<'a, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<'a, T> GetSpan for NodeArray<'a, T> {
    fn span(&self) -> Span {
        self.span
    }
}

impl<'a, T> IntoIterator for &'a NodeArray<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
