pub mod sendmail;

use anyhow::Result;
use async_trait::async_trait;

use crate::message::Recipient;

pub use self::sendmail::SendmailSender;

/// Delivery collaborator.
///
/// Dispatches the bulletin body to a single recipient. Callers treat
/// any error as a plain delivery failure, there is no retry policy.
#[async_trait]
pub trait Sender {
    async fn send(&self, recipient: &Recipient, body: &str) -> Result<()>;
}
