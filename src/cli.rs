use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    completion::command::CompletionGenerateCommand,
    config,
    manual::command::ManualGenerateCommand,
    message::command::{send::MessageSendCommand, test::MessageTestCommand},
    output::{ColorFmt, OutputFmt},
};

#[derive(Parser, Debug)]
#[command(
    name = "bulletin",
    author,
    version,
    about,
    propagate_version = true,
    infer_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: BulletinCommand,

    /// Override the default configuration file path
    ///
    /// The given path is shell-expanded then canonicalized (if
    /// applicable). It must point to a valid TOML configuration file.
    #[arg(long, short, global = true)]
    #[arg(value_name = "PATH", value_parser = config::path_parser)]
    pub config: Option<PathBuf>,

    /// Customize the output format
    ///
    /// The output format determine how to display commands output to
    /// the terminal.
    ///
    /// The possible values are:
    ///
    ///  - json: output will be in a form of a JSON-compatible object
    ///
    ///  - plain: output will be in a form of plain text
    #[arg(long, short, global = true)]
    #[arg(value_name = "FORMAT", value_enum, default_value_t = Default::default())]
    pub output: OutputFmt,

    /// Control when to use colors
    ///
    /// The default setting is 'auto', which means bulletin will try
    /// to guess when to use colors. For example, if bulletin is
    /// printing to a terminal, then it will use colors, but if it is
    /// redirected to a file or a pipe, then it will suppress color
    /// output.
    ///
    /// The possible values are:
    ///
    ///  - never: colors will never be used
    ///
    ///  - always: colors will always be used regardless of where output is sent
    ///
    ///  - ansi: like 'always', but emits ANSI escapes (even in a Windows console)
    ///
    ///  - auto: bulletin tries to be smart
    #[arg(long, short = 'C', global = true)]
    #[arg(value_name = "MODE", value_enum, default_value_t = Default::default())]
    pub color: ColorFmt,
}

#[derive(Subcommand, Debug)]
pub enum BulletinCommand {
    /// Send a test email and confirm its receipt
    Test(MessageTestCommand),

    /// Send the bulletin to every configured recipient
    Send(MessageSendCommand),

    /// Generate manual pages to a directory
    #[command(arg_required_else_help = true)]
    #[command(alias = "manuals", alias = "mans")]
    Manual(ManualGenerateCommand),

    /// Print completion script for a shell to stdout
    #[command(arg_required_else_help = true)]
    #[command(alias = "completions")]
    Completion(CompletionGenerateCommand),
}
