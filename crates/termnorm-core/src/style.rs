//! Attribute-to-style encoding.
//!
//! An [`Attribute`] is an abstract colour plus font-effect flags, independent
//! of any terminal backend. [`encode_style`] combines a foreground and a
//! background attribute into a [`Style`] that the rendering layer applies to
//! a cell.
//!
//! A channel whose colour is [`Color::Default`] contributes nothing: neither
//! its colour nor its flags reach the style.

use std::ops::BitOr;

use bitflags::bitflags;

/// Abstract colour selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's own default colour.
    #[default]
    Default,
    /// Palette index (0-15 basic, 16-231 cube, 232-255 grayscale).
    Indexed(u8),
    /// 24-bit colour.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Palette black.
    pub const BLACK: Self = Self::Indexed(0);
    /// Palette red.
    pub const RED: Self = Self::Indexed(1);
    /// Palette green.
    pub const GREEN: Self = Self::Indexed(2);
    /// Palette yellow.
    pub const YELLOW: Self = Self::Indexed(3);
    /// Palette blue.
    pub const BLUE: Self = Self::Indexed(4);
    /// Palette magenta.
    pub const MAGENTA: Self = Self::Indexed(5);
    /// Palette cyan.
    pub const CYAN: Self = Self::Indexed(6);
    /// Palette white.
    pub const WHITE: Self = Self::Indexed(7);
}

bitflags! {
    /// Font effects. Any combination may be set at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttrFlags: u8 {
        /// Bold.
        const BOLD = 1 << 0;
        /// Underline.
        const UNDERLINE = 1 << 1;
        /// Reverse video.
        const REVERSE = 1 << 2;
        /// Blink.
        const BLINK = 1 << 3;
        /// Dim.
        const DIM = 1 << 4;
        /// Italic.
        const ITALIC = 1 << 5;
        /// Strike-through.
        const STRIKETHROUGH = 1 << 6;
    }
}

impl Default for AttrFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Colour plus font effects for one channel (foreground or background).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Colour selector.
    pub color: Color,
    /// Font effects. Ignored when `color` is [`Color::Default`].
    pub flags: AttrFlags,
}

impl Attribute {
    /// Default colour, no flags.
    pub const DEFAULT: Self = Self { color: Color::Default, flags: AttrFlags::empty() };

    /// Attribute with a colour and no flags.
    pub const fn new(color: Color) -> Self {
        Self { color, flags: AttrFlags::empty() }
    }

    /// Returns true if this channel uses the terminal default colour.
    pub fn is_default(&self) -> bool {
        self.color == Color::Default
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Color> for Attribute {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl BitOr<AttrFlags> for Attribute {
    type Output = Self;

    fn bitor(self, flags: AttrFlags) -> Self {
        Self { color: self.color, flags: self.flags | flags }
    }
}

impl BitOr<AttrFlags> for Color {
    type Output = Attribute;

    fn bitor(self, flags: AttrFlags) -> Attribute {
        Attribute { color: self, flags }
    }
}

/// Colour capability of the output terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// 16-colour palette.
    Normal,
    /// 256-colour palette.
    Output256,
    /// The 216-colour cube of the 256-colour palette, addressed from 0.
    Output216,
    /// The 24-step grayscale ramp of the 256-colour palette, addressed from 0.
    Grayscale,
    /// 24-bit colour.
    #[default]
    TrueColor,
}

impl OutputMode {
    /// Map a colour into what this mode can display.
    ///
    /// Indices outside the 216-colour cube or the grayscale ramp fall back to
    /// the terminal default colour.
    pub fn map_color(self, color: Color) -> Color {
        match (self, color) {
            (_, Color::Default) | (Self::TrueColor, _) => color,
            (Self::Output216, Color::Rgb(r, g, b)) => Color::Indexed(16 + cube_offset(r, g, b)),
            (Self::Output216, Color::Indexed(n)) if n <= 215 => Color::Indexed(16 + n),
            (Self::Grayscale, Color::Rgb(r, g, b)) => Color::Indexed(232 + gray_level(r, g, b)),
            (Self::Grayscale, Color::Indexed(n)) if n <= 23 => Color::Indexed(232 + n),
            (Self::Output216 | Self::Grayscale, Color::Indexed(_)) => Color::Default,
            (Self::Output256, Color::Rgb(r, g, b)) => Color::Indexed(16 + cube_offset(r, g, b)),
            (Self::Output256, Color::Indexed(_)) => color,
            (Self::Normal, Color::Rgb(r, g, b)) => {
                Color::Indexed((16 + cube_offset(r, g, b)) & 0x0f)
            },
            (Self::Normal, Color::Indexed(n)) => Color::Indexed(n & 0x0f),
        }
    }
}

/// Offset (0-215) of the nearest entry in the 6x6x6 colour cube.
fn cube_offset(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    36 * level(r) + 6 * level(g) + level(b)
}

/// Grayscale ramp step (0-23) for the average channel intensity.
fn gray_level(r: u8, g: u8, b: u8) -> u8 {
    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    ((avg * 23 + 127) / 255) as u8
}

/// Backend-independent cell style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground colour.
    pub fg: Color,
    /// Background colour.
    pub bg: Color,
    /// Font effects from both channels.
    pub flags: AttrFlags,
}

/// Encode a foreground/background attribute pair in truecolour mode.
pub fn encode_style(fg: Attribute, bg: Attribute) -> Style {
    encode_style_with(fg, bg, OutputMode::TrueColor)
}

/// Encode a foreground/background attribute pair for an output mode.
///
/// Each non-default channel sets its colour and adds its flags. A default
/// channel is skipped entirely.
pub fn encode_style_with(fg: Attribute, bg: Attribute, mode: OutputMode) -> Style {
    let mut style = Style::default();
    if !fg.is_default() {
        style.fg = mode.map_color(fg.color);
        style.flags |= fg.flags;
    }
    if !bg.is_default() {
        style.bg = mode.map_color(bg.color);
        style.flags |= bg.flags;
    }
    style
}
