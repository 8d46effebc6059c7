use anyhow::Result;
use console::style;
use log::debug;

use crate::{
    message::Recipient,
    printer::Printer,
    sender::Sender,
    ui::{progress::Progress, prompt::Prompt},
};

/// Outcome of the interactive test-send workflow.
///
/// `Skipped` means no test was requested: callers should carry on with
/// their own flow. `Failed` covers both a delivery error and a
/// negative receipt confirmation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TestSendOutcome {
    Skipped,
    Succeeded,
    Failed,
}

/// Offer to send a test email and confirm its receipt.
///
/// The user is asked for a destination address, the bulletin body is
/// sent there through the given sender, then the user confirms whether
/// the email arrived and looks correct. The test message is rebuilt
/// fresh on every run and never reused.
pub async fn run(
    printer: &mut impl Printer,
    prompt: &mut impl Prompt,
    progress: &mut impl Progress,
    sender: &impl Sender,
    body: &str,
) -> Result<TestSendOutcome> {
    if !prompt.confirm("Do you want to send a test email?")? {
        debug!("test send skipped");
        return Ok(TestSendOutcome::Skipped);
    }

    let address = prompt.text("Please enter your test address")?;
    let recipient = Recipient::test(address);

    progress.start("Sending test email…");

    if let Err(err) = sender.send(&recipient, body).await {
        progress.fail("Failed to send test email.");
        debug!("cannot send test email: {err:?}");
        return Ok(TestSendOutcome::Failed);
    }

    progress.succeed(&format!(
        "Email sent! Please check your {} inbox.",
        recipient.email
    ));

    if !prompt.confirm("Did you receive the email? Is it correct?")? {
        printer.print_log(format!("{}", style("Test email unsuccessful.").red()))?;
        return Ok(TestSendOutcome::Failed);
    }

    printer.print_log(format!("{}", style("Test email succeeded!").green()))?;
    Ok(TestSendOutcome::Succeeded)
}

#[cfg(test)]
mod tests {
    use anyhow::bail;
    use async_trait::async_trait;
    use serde::Serialize;
    use std::{collections::VecDeque, fmt::Debug, sync::Mutex};

    use crate::{message::TEST_UNSUBSCRIBE_ID, printer::Print};

    use super::*;

    #[derive(Debug, Default)]
    struct PrinterServiceTest {
        logs: Vec<String>,
    }

    impl Printer for PrinterServiceTest {
        fn print<T: Debug + Print + Serialize>(&mut self, data: T) -> Result<()> {
            self.logs.push(format!("{data:?}"));
            Ok(())
        }

        fn print_log<T: Debug + Print>(&mut self, data: T) -> Result<()> {
            self.logs.push(format!("{data:?}"));
            Ok(())
        }

        fn is_json(&self) -> bool {
            false
        }
    }

    #[derive(Debug, Default)]
    struct ScriptedPrompt {
        confirms: VecDeque<bool>,
        texts: VecDeque<String>,
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&mut self, _message: &str) -> Result<bool> {
            match self.confirms.pop_front() {
                Some(answer) => Ok(answer),
                None => bail!("unexpected confirm prompt"),
            }
        }

        fn text(&mut self, _message: &str) -> Result<String> {
            match self.texts.pop_front() {
                Some(answer) => Ok(answer),
                None => bail!("unexpected text prompt"),
            }
        }
    }

    #[derive(Debug, Default)]
    struct RecordingProgress {
        events: Vec<String>,
    }

    impl Progress for RecordingProgress {
        fn start(&mut self, _message: &str) {
            self.events.push("start".into());
        }

        fn succeed(&mut self, _message: &str) {
            self.events.push("succeed".into());
        }

        fn fail(&mut self, _message: &str) {
            self.events.push("fail".into());
        }
    }

    #[derive(Debug, Default)]
    struct FakeSender {
        should_fail: bool,
        sent: Mutex<Vec<Recipient>>,
    }

    #[async_trait]
    impl Sender for FakeSender {
        async fn send(&self, recipient: &Recipient, _body: &str) -> Result<()> {
            self.sent.lock().unwrap().push(recipient.clone());
            if self.should_fail {
                bail!("transport unreachable");
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn it_should_skip_when_test_declined() {
        let mut printer = PrinterServiceTest::default();
        let mut prompt = ScriptedPrompt {
            confirms: VecDeque::from([false]),
            texts: VecDeque::from([String::from("test@example.com")]),
        };
        let mut progress = RecordingProgress::default();
        let sender = FakeSender::default();

        let outcome = run(&mut printer, &mut prompt, &mut progress, &sender, "body")
            .await
            .unwrap();

        assert_eq!(TestSendOutcome::Skipped, outcome);
        assert_eq!(1, prompt.texts.len());
        assert!(sender.sent.lock().unwrap().is_empty());
        assert!(progress.events.is_empty());
    }

    #[tokio::test]
    async fn it_should_fail_when_delivery_fails() {
        let mut printer = PrinterServiceTest::default();
        let mut prompt = ScriptedPrompt {
            confirms: VecDeque::from([true]),
            texts: VecDeque::from([String::from("test@example.com")]),
        };
        let mut progress = RecordingProgress::default();
        let sender = FakeSender {
            should_fail: true,
            ..Default::default()
        };

        let outcome = run(&mut printer, &mut prompt, &mut progress, &sender, "body")
            .await
            .unwrap();

        assert_eq!(TestSendOutcome::Failed, outcome);
        assert_eq!(vec!["start", "fail"], progress.events);
        assert_eq!(1, sender.sent.lock().unwrap().len());
    }

    #[tokio::test]
    async fn it_should_fail_when_receipt_denied() {
        let mut printer = PrinterServiceTest::default();
        let mut prompt = ScriptedPrompt {
            confirms: VecDeque::from([true, false]),
            texts: VecDeque::from([String::from("test@example.com")]),
        };
        let mut progress = RecordingProgress::default();
        let sender = FakeSender::default();

        let outcome = run(&mut printer, &mut prompt, &mut progress, &sender, "body")
            .await
            .unwrap();

        assert_eq!(TestSendOutcome::Failed, outcome);
        assert_eq!(vec!["start", "succeed"], progress.events);
        assert!(printer
            .logs
            .iter()
            .any(|log| log.contains("Test email unsuccessful.")));
    }

    #[tokio::test]
    async fn it_should_succeed_when_receipt_confirmed() {
        let mut printer = PrinterServiceTest::default();
        let mut prompt = ScriptedPrompt {
            confirms: VecDeque::from([true, true]),
            texts: VecDeque::from([String::from("test@example.com")]),
        };
        let mut progress = RecordingProgress::default();
        let sender = FakeSender::default();

        let outcome = run(&mut printer, &mut prompt, &mut progress, &sender, "body")
            .await
            .unwrap();

        assert_eq!(TestSendOutcome::Succeeded, outcome);
        assert_eq!(vec!["start", "succeed"], progress.events);

        let sent = sender.sent.lock().unwrap();
        assert_eq!(1, sent.len());
        assert_eq!("test@example.com", sent[0].email);
        assert_eq!(TEST_UNSUBSCRIBE_ID, sent[0].unsubscribe_id);

        assert!(printer
            .logs
            .iter()
            .any(|log| log.contains("Test email succeeded!")));
    }
}
