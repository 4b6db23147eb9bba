use crate::error::GrammarError;
use crate::parser::Parser;
use common_framework::InputState;
use std::cell::OnceCell;
use std::rc::Rc;
use std::sync::Arc;

/// The write side of a forward reference.
///
/// Holds the parser that the matching wrapper delegates to. It starts empty
/// and can be set exactly once.
pub struct ForwardRef<T> {
    label: Arc<str>,
    cell: Rc<OnceCell<Parser<T>>>,
}

impl<T: 'static> ForwardRef<T> {
    /// Wires the forward reference to `parser`.
    ///
    /// Returns [`GrammarError::AlreadyWired`] if it was wired before; the
    /// original target is kept.
    pub fn set(&self, parser: Parser<T>) -> Result<(), GrammarError> {
        self.cell
            .set(parser)
            .map_err(|_| GrammarError::AlreadyWired {
                label: self.label.to_string(),
            })?;
        log::trace!("forward reference '{}' wired", self.label);
        Ok(())
    }

    pub fn is_wired(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T> std::fmt::Debug for ForwardRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardRef")
            .field("label", &self.label)
            .field("wired", &self.cell.get().is_some())
            .finish()
    }
}

/// Creates a parser that stands in for one that does not exist yet.
///
/// The returned wrapper looks its target up each time it runs, so it can be
/// used inside the very grammar rules it will eventually point to. Wire the
/// [`ForwardRef`] before running anything built from the wrapper.
///
/// # Panics
///
/// Running the wrapper while the reference is still unwired panics with
/// `unfixed forwarded parser`. This is a grammar construction bug, not a
/// parse failure, so no combinator can recover from it.
pub fn create_forward_ref<T: 'static>(label: impl Into<Arc<str>>) -> (Parser<T>, ForwardRef<T>) {
    let label = label.into();
    let cell: Rc<OnceCell<Parser<T>>> = Rc::new(OnceCell::new());

    let target = Rc::clone(&cell);
    let name = Arc::clone(&label);
    let wrapper = Parser::new(Arc::clone(&label), move |input: &InputState| {
        match target.get() {
            Some(parser) => parser.parse(input),
            None => panic!("unfixed forwarded parser '{name}'"),
        }
    });

    (wrapper, ForwardRef { label, cell })
}
