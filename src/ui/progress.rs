use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use std::time::Duration;

static SPINNER_STYLE: Lazy<ProgressStyle> =
    Lazy::new(|| ProgressStyle::with_template(" {spinner:.cyan} {msg}").unwrap());

static SPINNER_END_STYLE: Lazy<ProgressStyle> =
    Lazy::new(|| ProgressStyle::with_template(" {msg}").unwrap());

/// Progress-indicator collaborator.
///
/// Purely presentational: implementations must not affect the control
/// flow of the workflows driving them.
pub trait Progress {
    fn start(&mut self, message: &str);
    fn succeed(&mut self, message: &str);
    fn fail(&mut self, message: &str);
}

/// Indeterminate spinner over the terminal.
#[derive(Debug, Default)]
pub struct SpinnerProgress {
    spinner: Option<ProgressBar>,
}

impl Progress for SpinnerProgress {
    fn start(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner()
            .with_style(SPINNER_STYLE.clone())
            .with_message(message.to_owned());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn succeed(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.set_style(SPINNER_END_STYLE.clone());
            spinner.finish_with_message(format!("{} {message}", style("✔").green().bold()));
        }
    }

    fn fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.set_style(SPINNER_END_STYLE.clone());
            spinner.abandon_with_message(format!("{} {message}", style("✖").red().bold()));
        }
    }
}
