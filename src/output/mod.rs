use anyhow::{anyhow, Error, Result};
use clap::ValueEnum;
use std::{
    fmt,
    io::{self, IsTerminal},
    str::FromStr,
};
use termcolor::ColorChoice;

/// Represents the available output formats.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum OutputFmt {
    #[default]
    Plain,
    Json,
}

impl FromStr for OutputFmt {
    type Err = Error;

    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        match fmt {
            fmt if fmt.eq_ignore_ascii_case("json") => Ok(Self::Json),
            fmt if fmt.eq_ignore_ascii_case("plain") => Ok(Self::Plain),
            unknown => Err(anyhow!("cannot parse output format {}", unknown)),
        }
    }
}

impl fmt::Display for OutputFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt = match *self {
            OutputFmt::Json => "JSON",
            OutputFmt::Plain => "Plain",
        };
        write!(f, "{}", fmt)
    }
}

/// Represents the available color modes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum ColorFmt {
    Never,
    #[default]
    Auto,
    Always,
    Ansi,
}

impl FromStr for ColorFmt {
    type Err = Error;

    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        match fmt {
            fmt if fmt.eq_ignore_ascii_case("never") => Ok(Self::Never),
            fmt if fmt.eq_ignore_ascii_case("auto") => Ok(Self::Auto),
            fmt if fmt.eq_ignore_ascii_case("always") => Ok(Self::Always),
            fmt if fmt.eq_ignore_ascii_case("ansi") => Ok(Self::Ansi),
            unknown => Err(anyhow!("cannot parse color mode {}", unknown)),
        }
    }
}

impl fmt::Display for ColorFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt = match *self {
            ColorFmt::Never => "Never",
            ColorFmt::Auto => "Auto",
            ColorFmt::Always => "Always",
            ColorFmt::Ansi => "Ansi",
        };
        write!(f, "{}", fmt)
    }
}

impl From<ColorFmt> for ColorChoice {
    fn from(fmt: ColorFmt) -> Self {
        match fmt {
            ColorFmt::Never => Self::Never,
            ColorFmt::Always => Self::Always,
            ColorFmt::Ansi => Self::AlwaysAnsi,
            // termcolor's Auto does not detect pipes, only the TERM
            // variable.
            ColorFmt::Auto => {
                if io::stdout().is_terminal() {
                    Self::Auto
                } else {
                    Self::Never
                }
            }
        }
    }
}
