use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, trace};
use mail_builder::{headers::raw::Raw, MessageBuilder};
use std::process::Stdio;
use tokio::{io::AsyncWriteExt, process::Command};
use url::Url;

use crate::{config::TomlConfig, message::Recipient};

use super::Sender;

/// Default sendmail-compatible command used when none is configured.
pub const DEFAULT_SENDMAIL_CMD: &str = "/usr/sbin/sendmail -t";

/// Sends bulletins by piping them to a sendmail-compatible command.
#[derive(Clone, Debug)]
pub struct SendmailSender {
    cmd: String,
    from: String,
    display_name: Option<String>,
    subject: String,
    unsubscribe_url: Option<String>,
}

impl SendmailSender {
    /// Build a sender from the TOML configuration.
    pub fn new(config: &TomlConfig) -> Result<Self> {
        let unsubscribe_url = config
            .unsubscribe_url
            .as_deref()
            .map(|url| {
                Url::parse(url)
                    .map(|url| url.as_str().trim_end_matches('/').to_owned())
                    .with_context(|| format!("cannot parse unsubscribe url {url}"))
            })
            .transpose()?;

        Ok(Self {
            cmd: config
                .sendmail_cmd
                .clone()
                .unwrap_or_else(|| DEFAULT_SENDMAIL_CMD.to_owned()),
            from: config.from.clone(),
            display_name: config.display_name.clone(),
            subject: config.subject.clone(),
            unsubscribe_url,
        })
    }

    fn build_message(&self, recipient: &Recipient, body: &str) -> Result<Vec<u8>> {
        let mut builder = MessageBuilder::new()
            .to(recipient.email.as_str())
            .subject(self.subject.as_str())
            .text_body(body);

        builder = match self.display_name.as_deref() {
            Some(name) => builder.from((name, self.from.as_str())),
            None => builder.from(self.from.as_str()),
        };

        if let Some(url) = self.unsubscribe_url.as_deref() {
            builder = builder.header(
                "List-Unsubscribe",
                Raw::new(format!("<{url}/{}>", recipient.unsubscribe_id)),
            );
        }

        builder.write_to_vec().context("cannot build message")
    }
}

#[async_trait]
impl Sender for SendmailSender {
    async fn send(&self, recipient: &Recipient, body: &str) -> Result<()> {
        let msg = self.build_message(recipient, body)?;
        trace!("message: {:?}", String::from_utf8_lossy(&msg));

        let mut args = self.cmd.split_whitespace();
        let program = args
            .next()
            .ok_or_else(|| anyhow!("the sendmail command cannot be empty"))?;

        debug!("sending message to {} via {program}", recipient.email);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("cannot run sendmail command {}", self.cmd))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("cannot open sendmail command stdin"))?;
        stdin
            .write_all(&msg)
            .await
            .context("cannot write message to sendmail command stdin")?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .context("cannot wait for sendmail command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "sendmail command failed with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        Ok(())
    }
}
