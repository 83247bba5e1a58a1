//! Terminal output.
//!
//! Everything meant for the user, failures included, is written to stdout
//! through [`Ui`]. Stderr belongs to `tracing`.
//!
//! Color is decided once, first match wins: `--no-color`, `NO_COLOR` (any
//! value), `TERM=dumb`, then `--color` where `auto` means "stdout is a
//! terminal".

use anstream::println;
use anstyle::{AnsiColor, Color, Style};
use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets};
use std::io::IsTerminal;

/// Value of `--color`
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    #[default]
    Auto,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// Leading tag of a status line
#[derive(Debug, Clone, Copy)]
enum Label {
    Ok,
    Warn,
    Error,
    Info,
}

impl Label {
    fn text(self) -> &'static str {
        match self {
            Label::Ok => "OK",
            Label::Warn => "WARN",
            Label::Error => "ERROR",
            Label::Info => "INFO",
        }
    }

    fn color(self) -> AnsiColor {
        match self {
            Label::Ok => AnsiColor::Green,
            Label::Warn => AnsiColor::Yellow,
            Label::Error => AnsiColor::Red,
            Label::Info => AnsiColor::Cyan,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ui {
    color: bool,
}

impl Ui {
    pub fn new(mode: ColorMode, no_color_flag: bool) -> Self {
        let color = !no_color_flag
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => std::io::stdout().is_terminal(),
            };

        if !color {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self { color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            format!("{style}{text}{style:#}")
        } else {
            text.to_string()
        }
    }

    fn status(&self, label: Label, msg: &str) {
        let style = Style::new().fg_color(Some(Color::Ansi(label.color()))).bold();
        println!("{} {}", self.paint(label.text(), style), msg);
    }

    pub fn ok(&self, msg: impl AsRef<str>) {
        self.status(Label::Ok, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.status(Label::Warn, msg.as_ref());
    }

    /// Report a failure. Goes to stdout like every other message.
    pub fn err(&self, msg: impl AsRef<str>) {
        self.status(Label::Error, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.status(Label::Info, msg.as_ref());
    }

    /// Print one unlabelled line
    pub fn line(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }

    pub fn blank(&self) {
        println!();
    }

    pub fn bold(&self, s: impl AsRef<str>) -> String {
        self.paint(s.as_ref(), Style::new().bold())
    }

    pub fn dim(&self, s: impl AsRef<str>) -> String {
        self.paint(
            s.as_ref(),
            Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
        )
    }

    /// The active profile's entry in `list`
    pub fn current_profile(&self, name: &str) -> String {
        self.paint(
            name,
            Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
    }

    /// Borderless two-column table, left column bold
    pub fn usage_table(&self, rows: &[(&str, &str)]) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);

        for (left, right) in rows {
            let mut key = Cell::new(format!("  {}", left));
            if self.color {
                key = key.add_attribute(Attribute::Bold);
            }
            table.add_row(vec![key, Cell::new(right)]);
        }

        table.to_string()
    }
}
