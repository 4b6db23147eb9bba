/// Mistakes made while assembling a grammar.
///
/// Parse failures are ordinary values (see [`ParseFailure`](crate::ParseFailure));
/// these errors mean the grammar itself was put together wrongly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// A forward reference was wired a second time.
    #[error("forward reference '{label}' is already wired")]
    AlreadyWired { label: String },
}
