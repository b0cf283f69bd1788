//! Feed intents.

/// Anything that can move a feed state forward: a tap on a post, a pull to
/// refresh, or a page arriving from the data source.
pub trait Intent: Send + 'static {}
