pub mod command;
pub mod test_send;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Unsubscribe id carried by every test message.
///
/// Real recipients come with their own unsubscribe id; this fixed one
/// marks a message as a test send rather than a real subscriber send.
pub const TEST_UNSUBSCRIBE_ID: &str = "testEmailFunction";

/// Represents a single addressee of the bulletin.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Recipient {
    pub email: String,
    pub unsubscribe_id: String,
}

impl Recipient {
    /// Build the ephemeral recipient of a test send.
    pub fn test(email: impl ToString) -> Self {
        Self {
            email: email.to_string(),
            unsubscribe_id: TEST_UNSUBSCRIBE_ID.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RecipientsFile {
    #[serde(default, rename = "recipient")]
    recipients: Vec<Recipient>,
}

/// Read and parse the TOML recipient list at the given path.
pub fn read_recipients(path: &Path) -> Result<Vec<Recipient>> {
    debug!("reading recipients file at {path:?}");
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read recipients file at {path:?}"))?;
    let file: RecipientsFile = toml::from_str(&content)
        .with_context(|| format!("cannot parse recipients file at {path:?}"))?;
    Ok(file.recipients)
}

/// Read the bulletin body at the given path.
///
/// The body is kept as-is: what you see in the file is what every
/// recipient gets.
pub fn read_body(path: &Path) -> Result<String> {
    debug!("reading body file at {path:?}");
    fs::read_to_string(path).with_context(|| format!("cannot read body file at {path:?}"))
}
