//! ANSI styling used by every rendered line.
//!
//! Colors come from the 256-color palette except the banner background, which
//! uses a 24-bit sequence. Every styled segment is closed with [`Theme::reset`].

pub struct Theme;

impl Theme {
    pub fn reset() -> &'static str {
        "\x1b[0m"
    }

    /// Grey used for status lines, menus and notices.
    pub fn muted() -> &'static str {
        "\x1b[90m"
    }

    /// Bright yellow (#FFCE00): banner, command names, public messages.
    pub fn accent() -> &'static str {
        "\x1b[38;5;226m"
    }

    /// Gold (#FFD700): help section headings, channel messages.
    pub fn heading() -> &'static str {
        "\x1b[38;5;220m"
    }

    /// Red for command errors.
    pub fn error() -> &'static str {
        "\x1b[38;5;203m"
    }

    /// Plain black terminal background.
    pub fn dark_background() -> &'static str {
        "\x1b[40m"
    }

    /// 24-bit black background behind the banner.
    pub fn banner_background() -> &'static str {
        "\x1b[48;2;0;0;0m"
    }

    pub fn public_timestamp() -> &'static str {
        "\x1b[2;38;5;226m"
    }

    pub fn public_label() -> &'static str {
        "\x1b[38;5;226m"
    }

    pub fn channel_timestamp() -> &'static str {
        "\x1b[2;38;5;220m"
    }

    pub fn channel_label() -> &'static str {
        "\x1b[38;5;220m"
    }

    /// Light yellow (#FFF8DC), dimmed.
    pub fn private_timestamp() -> &'static str {
        "\x1b[2;38;5;230m"
    }

    pub fn private_label() -> &'static str {
        "\x1b[38;5;230m"
    }
}

/// Wrap `text` in `style` and a trailing reset.
pub fn paint(style: &str, text: &str) -> String {
    format!("{}{}{}", style, text, Theme::reset())
}
