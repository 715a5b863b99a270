//! Provider abstraction for completion calls.

use crate::{ChatConfig, Message, Result};

/// A text-completion provider.
///
/// One call issues exactly one outbound request and resolves to the
/// raw text content of the completion. No retries, no fan-out; timeout
/// and cancellation behavior belong to the concrete transport.
pub trait Provider: Clone {
    /// Complete the given messages under the given configuration.
    fn complete(
        &self,
        config: &ChatConfig,
        messages: &[Message],
    ) -> impl Future<Output = Result<String>> + Send;
}
