use anyhow::Result;
use clap::Parser;
use log::info;
use std::{path::PathBuf, process};

use crate::{
    config::{self, TomlConfig},
    message::{
        self,
        test_send::{self, TestSendOutcome},
    },
    printer::Printer,
    sender::SendmailSender,
    ui::{progress::SpinnerProgress, prompt::DialoguerPrompt},
};

/// Send a test email and confirm its receipt.
///
/// This command sends the given bulletin body to an address of your
/// choosing, so you can check the delivery path and the rendered body
/// against a real inbox before sending the bulletin for real.
#[derive(Debug, Parser)]
pub struct MessageTestCommand {
    /// Path to the file containing the bulletin body.
    #[arg(value_name = "BODY", value_parser = config::path_parser)]
    pub body: PathBuf,
}

impl MessageTestCommand {
    pub async fn execute(self, printer: &mut impl Printer, config: &TomlConfig) -> Result<()> {
        info!("executing message test command");

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

        if let TestSendOutcome::Failed = outcome {
            process::exit(1);
        }

        Ok(())
    }
}
