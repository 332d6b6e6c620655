use std::rc::Rc;

use crate::interpreter::lexer::Position;

/// A named frame of evaluation.
///
/// Frames form an immutable chain towards a root: a parent is fixed when a
/// frame is created, so the chain can never contain a cycle. The chain is
/// only read to render diagnostics; it never influences evaluation.
///
/// Frames are shared through `Rc`, because every [`Number`] produced in a
/// frame keeps a handle to it.
///
/// [`Number`]: crate::interpreter::value::core::Number
#[derive(Debug)]
pub struct EvaluationContext {
    name:           String,
    parent:         Option<Rc<Self>>,
    entry_position: Option<Position>,
}

impl EvaluationContext {
    /// Creates a frame with no parent.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::context::EvaluationContext;
    ///
    /// let root = EvaluationContext::root("<program>");
    /// assert_eq!(root.name(), "<program>");
    /// assert!(root.parent().is_none());
    /// ```
    #[must_use]
    pub fn root(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { name:           name.into(),
                       parent:         None,
                       entry_position: None, })
    }

    /// Creates a frame nested in `self`, entered at `entry_position`.
    #[must_use]
    pub fn child(self: &Rc<Self>, name: impl Into<String>, entry_position: Position) -> Rc<Self> {
        Rc::new(Self { name:           name.into(),
                       parent:         Some(Rc::clone(self)),
                       entry_position: Some(entry_position), })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Where this frame was entered from its parent. `None` for a root.
    #[must_use]
    pub const fn entry_position(&self) -> Option<Position> {
        self.entry_position
    }

    /// Walks the chain from this frame up to the root.
    pub fn frames(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |frame| frame.parent.as_deref())
    }

    /// Renders the chain innermost frame first, e.g.
    /// `inner (entered at 1:5) <- <program>`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::context::EvaluationContext, lexer::Position};
    ///
    /// let root = EvaluationContext::root("<program>");
    /// let inner = root.child("inner", Position { offset: 4,
    ///                                            line:   1,
    ///                                            column: 5, });
    ///
    /// assert_eq!(inner.trace(), "inner (entered at 1:5) <- <program>");
    /// ```
    #[must_use]
    pub fn trace(&self) -> String {
        self.frames()
            .map(|frame| match frame.entry_position {
                Some(position) => format!("{} (entered at {position})", frame.name),
                None => frame.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(" <- ")
    }
}
