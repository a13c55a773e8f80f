// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Per-byte terminal colors
//!
//! Colors follow the VT100 foreground palette. A colored field is bold, in its
//! color, and followed by a reset.

use crate::error::{Error, Result};
use owo_colors::{AnsiColors, OwoColorize, Style};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// One of the eight standard terminal colors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    Black = 30,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl Color {
    /// Every color in the palette, in SGR order
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The VT100 foreground code for this color
    ///
    /// # Examples
    /// ```rust
    /// # use hexview::color::Color;
    /// assert_eq!(31, Color::Red.code());
    /// ```
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Wraps a rendered field in this color's escape and a reset
    ///
    /// # Examples
    /// ```rust
    /// # use hexview::color::Color;
    /// assert_eq!("\x1b[32;1m 41\x1b[0m", Color::Green.paint(" 41").to_string());
    /// ```
    pub fn paint<T: Display>(self, field: T) -> Painted<T> {
        Painted { color: self, field }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        })
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|color| color.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidColor {
                name: s.to_string(),
            })
    }
}

impl From<Color> for AnsiColors {
    fn from(value: Color) -> Self {
        match value {
            Color::Black => AnsiColors::Black,
            Color::Red => AnsiColors::Red,
            Color::Green => AnsiColors::Green,
            Color::Yellow => AnsiColors::Yellow,
            Color::Blue => AnsiColors::Blue,
            Color::Magenta => AnsiColors::Magenta,
            Color::Cyan => AnsiColors::Cyan,
            Color::White => AnsiColors::White,
        }
    }
}

/// A field wrapped in a color escape and a reset. See [Color::paint]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Painted<T> {
    color: Color,
    field: T,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let style = Style::new().bold().color(AnsiColors::from(self.color));
        write!(f, "{}", self.field.style(style))
    }
}

/// Picks a display color for a byte.
///
/// Called twice per byte (hex field, then ASCII field), so it must return
/// the same color for the same byte every time.
pub trait ColorMapper {
    /// Selects the color for `byte`
    fn color_of(&self, byte: u8) -> Color;
}

impl<F> ColorMapper for F
where
    F: Fn(u8) -> Color,
{
    fn color_of(&self, byte: u8) -> Color {
        self(byte)
    }
}

/// Colors bytes by what kind of character they are
///
/// # Examples
/// ```rust
/// # use hexview::color::{ByteClass, Color, ColorMapper};
/// let classes = ByteClass::default();
/// assert_eq!(Color::Blue, classes.color_of(0x00));
/// assert_eq!(Color::Green, classes.color_of(b'A'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteClass {
    /// `0x00`
    pub zero: Color,
    /// Printable ASCII, `0x21..=0x7e`
    pub graphic: Color,
    /// ASCII whitespace, including space
    pub whitespace: Color,
    /// Any other byte below `0x80`
    pub control: Color,
    /// `0x80..=0xff`
    pub high: Color,
}

impl Default for ByteClass {
    fn default() -> Self {
        ByteClass {
            zero: Color::Blue,
            graphic: Color::Green,
            whitespace: Color::Yellow,
            control: Color::Red,
            high: Color::Magenta,
        }
    }
}

impl ColorMapper for ByteClass {
    fn color_of(&self, byte: u8) -> Color {
        match byte {
            0 => self.zero,
            b if b.is_ascii_graphic() => self.graphic,
            b if b.is_ascii_whitespace() => self.whitespace,
            b if b.is_ascii() => self.control,
            _ => self.high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sgr_order() {
        for (offset, color) in Color::ALL.into_iter().enumerate() {
            assert_eq!(30 + offset as u8, color.code());
        }
    }

    #[test]
    fn parse_round_trips_names() {
        for color in Color::ALL {
            assert_eq!(color, color.to_string().parse::<Color>().unwrap());
        }
        assert_eq!(Color::Cyan, " CYAN ".parse::<Color>().unwrap());
        assert!(matches!(
            "mauve".parse::<Color>(),
            Err(Error::InvalidColor { .. })
        ));
    }

    #[test]
    fn paint_wraps_field() {
        assert_eq!("\x1b[30;1m.\x1b[0m", Color::Black.paint('.').to_string());
    }

    #[test]
    fn paint_uses_each_code() {
        for color in Color::ALL {
            let painted = color.paint(" 41").to_string();
            assert_eq!(format!("\x1b[{};1m 41\x1b[0m", color.code()), painted);
        }
    }

    #[test]
    fn byte_class() {
        let classes = ByteClass::default();
        assert_eq!(Color::Yellow, classes.color_of(b' '));
        assert_eq!(Color::Yellow, classes.color_of(b'\n'));
        assert_eq!(Color::Red, classes.color_of(0x07));
        assert_eq!(Color::Red, classes.color_of(0x7f));
        assert_eq!(Color::Magenta, classes.color_of(0xff));
    }

    #[test]
    fn closure_mapper() {
        let mapper = |byte: u8| Color::ALL[byte as usize % 8];
        assert_eq!(Color::Red, mapper.color_of(9));
    }
}
