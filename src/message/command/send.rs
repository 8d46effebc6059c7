use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use once_cell::sync::Lazy;
use std::{path::PathBuf, process};

use crate::{
    config::{self, TomlConfig},
    message::{
        self,
        test_send::{self, TestSendOutcome},
    },
    printer::Printer,
    sender::{SendmailSender, Sender},
    ui::{progress::SpinnerProgress, prompt::DialoguerPrompt},
};

static SEND_PROGRESS_STYLE: Lazy<ProgressStyle> = Lazy::new(|| {
    ProgressStyle::with_template(" {wide_bar:.cyan/blue} {pos}/{len} {msg:.dim}").unwrap()
});

/// Send the bulletin to every configured recipient.
///
/// This command first offers to send a test email, then dispatches the
/// given bulletin body to every recipient of the configured recipient
/// list. Recipients that could not be reached are reported at the end
/// of the run.
#[derive(Debug, Parser)]
pub struct MessageSendCommand {
    /// Path to the file containing the bulletin body.
    #[arg(value_name = "BODY", value_parser = config::path_parser)]
    pub body: PathBuf,
}

impl MessageSendCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing message send command");

        let body = message::read_body(&self.body)?;
        let sender = SendmailSender::new(config)?;

        let outcome = test_send::run(
            printer,
            &mut DialoguerPrompt,
            &mut SpinnerProgress::default(),
            &sender,
            &body,
        )
        .await?;

        match outcome {
            TestSendOutcome::Failed => process::exit(1),
            TestSendOutcome::Skipped => debug!("test send skipped, sending the bulletin"),
            TestSendOutcome::Succeeded => debug!("test send succeeded, sending the bulletin"),
        }

        let recipients_path = config
            .recipients
            .as_ref()
            .ok_or_else(|| anyhow!("recipients file missing from the configuration"))?;
        let recipients = message::read_recipients(recipients_path)?;
        if recipients.is_empty() {
            return Err(anyhow!("recipients file {recipients_path:?} is empty"));
        }

        let progress =
            ProgressBar::new(recipients.len() as u64).with_style(SEND_PROGRESS_STYLE.clone());

        let mut failures = Vec::new();
        for recipient in &recipients {
            progress.set_message(recipient.email.clone());
            if let Err(err) = sender.send(recipient, &body).await {
                debug!("cannot send bulletin to {}: {err:?}", recipient.email);
                failures.push((recipient, err));
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        if !failures.is_empty() {
            printer.print_log("Errors occurred while sending the bulletin:")?;
            for (recipient, err) in &failures {
                printer.print_log(format!(" - {}: {err}", recipient.email))?;
            }
        }

        let sent = recipients.len() - failures.len();
        printer.print(format!(
            "Bulletin successfully sent to {sent}/{} recipient(s)!",
            recipients.len()
        ))
    }
}
