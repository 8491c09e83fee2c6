use crossterm::{
    style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor},
    tty::IsTty,
};
use std::{env, io};

/// The sixteen terminal colors the visualizations pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalColor {
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    White,
    Gray,
    DarkGray,
    Black,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        // crossterm names the normal intensity colors "Dark*"
        match color {
            TerminalColor::Default => Color::Reset,
            TerminalColor::Red => Color::DarkRed,
            TerminalColor::Green => Color::DarkGreen,
            TerminalColor::Yellow => Color::DarkYellow,
            TerminalColor::Blue => Color::DarkBlue,
            TerminalColor::Magenta => Color::DarkMagenta,
            TerminalColor::Cyan => Color::DarkCyan,
            TerminalColor::BrightRed => Color::Red,
            TerminalColor::BrightGreen => Color::Green,
            TerminalColor::BrightYellow => Color::Yellow,
            TerminalColor::BrightBlue => Color::Blue,
            TerminalColor::BrightMagenta => Color::Magenta,
            TerminalColor::BrightCyan => Color::Cyan,
            TerminalColor::White => Color::White,
            TerminalColor::Gray => Color::Grey,
            TerminalColor::DarkGray => Color::DarkGrey,
            TerminalColor::Black => Color::Black,
        }
    }
}

/// Produces escape sequences for colored output, or nothing at all when
/// colors are disabled.
///
/// Every method returns an owned `String` so callers can splice the codes
/// straight into the text they are building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colors on when stdout is a terminal that understands ANSI sequences
    /// and `NO_COLOR` is not set.
    pub fn detect() -> Self {
        let enabled =
            io::stdout().is_tty() && env::var_os("NO_COLOR").is_none() && ansi_supported();
        tracing::debug!(enabled, "detected terminal color support");
        Self { enabled }
    }

    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Foreground `color` on the default background.
    pub fn foreground(&self, color: TerminalColor) -> String {
        self.color(color, TerminalColor::Default)
    }

    /// Background `color` behind the default foreground.
    ///
    /// Bright backgrounds may turn the default foreground black on some
    /// terminals.
    pub fn background(&self, color: TerminalColor) -> String {
        self.color(TerminalColor::Default, color)
    }

    pub fn color(&self, foreground: TerminalColor, background: TerminalColor) -> String {
        if !self.enabled {
            return String::new();
        }
        format!(
            "{}{}",
            SetForegroundColor(foreground.into()),
            SetBackgroundColor(background.into())
        )
    }

    /// Resets every attribute.
    pub fn reset(&self) -> String {
        if !self.enabled {
            return String::new();
        }
        ResetColor.to_string()
    }

    /// `text` in `color`, followed by a reset.
    pub fn paint(&self, color: TerminalColor, text: impl AsRef<str>) -> String {
        format!("{}{}{}", self.foreground(color), text.as_ref(), self.reset())
    }
}

#[cfg(windows)]
fn ansi_supported() -> bool {
    // Also switches the console into virtual terminal mode.
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn ansi_supported() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TerminalColor::Red)]
    #[case(TerminalColor::BrightGreen)]
    #[case(TerminalColor::Gray)]
    fn plain_palette_emits_nothing(#[case] color: TerminalColor) {
        let palette = Palette::plain();
        assert_eq!("", palette.foreground(color));
        assert_eq!("", palette.background(color));
        assert_eq!("", palette.color(color, TerminalColor::Black));
        assert_eq!("", palette.reset());
        assert_eq!("text", palette.paint(color, "text"));
    }

    #[test]
    fn colored_palette_emits_escape_codes() {
        let palette = Palette::colored();
        let red = palette.foreground(TerminalColor::Red);
        assert!(red.starts_with("\x1b["));
        assert!(red.ends_with('m'));
        assert_ne!(red, palette.foreground(TerminalColor::BrightRed));
        assert_ne!(red, palette.background(TerminalColor::Red));
        assert_eq!("\x1b[0m", palette.reset());
    }

    #[test]
    fn paint_wraps_text_in_codes() {
        let palette = Palette::colored();
        let painted = palette.paint(TerminalColor::Cyan, "/");
        assert!(painted.starts_with(&palette.foreground(TerminalColor::Cyan)));
        assert!(painted.ends_with("/\x1b[0m"));
    }
}
