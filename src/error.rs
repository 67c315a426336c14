/// The error returned when a snapshot can not be restored.
#[derive(thiserror::Error, Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub enum RestoreError {
    /// The snapshot was not produced by this kind of originator.
    #[error("unknown snapshot variant")]
    UnknownVariant,
}
