//! Encoded styles as crossterm content styles.

use crossterm::style::{self as ct, ContentStyle};
use termnorm_core::{AttrFlags, Color, Style};

const ATTRIBUTES: [(AttrFlags, ct::Attribute); 7] = [
    (AttrFlags::BOLD, ct::Attribute::Bold),
    (AttrFlags::UNDERLINE, ct::Attribute::Underlined),
    (AttrFlags::REVERSE, ct::Attribute::Reverse),
    (AttrFlags::BLINK, ct::Attribute::SlowBlink),
    (AttrFlags::DIM, ct::Attribute::Dim),
    (AttrFlags::ITALIC, ct::Attribute::Italic),
    (AttrFlags::STRIKETHROUGH, ct::Attribute::CrossedOut),
];

/// crossterm colour for `color`; `None` leaves the terminal default.
pub fn to_crossterm_color(color: Color) -> Option<ct::Color> {
    match color {
        Color::Default => None,
        Color::Indexed(n) => Some(ct::Color::AnsiValue(n)),
        Color::Rgb(r, g, b) => Some(ct::Color::Rgb { r, g, b }),
    }
}

/// crossterm content style for an encoded [`Style`].
pub fn to_content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = to_crossterm_color(style.fg);
    content.background_color = to_crossterm_color(style.bg);
    for (flag, attribute) in ATTRIBUTES {
        if style.flags.contains(flag) {
            content.attributes.set(attribute);
        }
    }
    content
}
