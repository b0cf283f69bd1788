//! Feed state values.

/// A state value read by the presentation layer.
///
/// `PartialEq` lets callers skip a re-render (and a revision bump) when a
/// reduction left the value unchanged.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
