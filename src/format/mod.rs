//! Chat line rendering.
//!
//! [`format_message`] is pure: the same inputs always give the same line.
//! The timestamp and the sender label are styled by scope; the message
//! content is emitted untouched.

use crate::ui::theme::{paint, Theme};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Shown when a private message we sent has no known recipient, or a channel
/// message has no channel name.
const UNKNOWN_PLACEHOLDER: &str = "???";

/// Timestamp tag used for channel messages without a channel name.
const UNKNOWN_CHANNEL_TAG: &str = "Ch";

/// Where a message was said.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageScope<'a> {
    Public,
    Channel(Option<&'a str>),
    Private { recipient: Option<&'a str> },
}

impl<'a> MessageScope<'a> {
    /// Build a scope from separate flags. Private wins over channel, which
    /// wins over public.
    pub fn from_flags(
        is_private: bool,
        is_channel: bool,
        channel_name: Option<&'a str>,
        recipient: Option<&'a str>,
    ) -> Self {
        if is_private {
            MessageScope::Private { recipient }
        } else if is_channel {
            MessageScope::Channel(channel_name)
        } else {
            MessageScope::Public
        }
    }
}

/// Render one chat line: `[HH:MM<suffix>] <label> content`.
pub fn format_message<Tz>(
    timestamp: &DateTime<Tz>,
    sender: &str,
    content: &str,
    scope: MessageScope<'_>,
    my_nickname: &str,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = timestamp.format("%H:%M");

    let (tag, label, tag_style, label_style) = match scope {
        MessageScope::Private { recipient } => {
            let recipient = recipient.filter(|r| !r.is_empty());
            let label = if sender == my_nickname {
                format!("<you → {}>", recipient.unwrap_or(UNKNOWN_PLACEHOLDER))
            } else {
                format!("<{} → you>", sender)
            };
            (
                format!("[{}|DM]", time),
                label,
                Theme::private_timestamp(),
                Theme::private_label(),
            )
        }
        MessageScope::Channel(channel) => {
            let channel = channel.filter(|c| !c.is_empty());
            let tag = format!("[{}|{}]", time, channel.unwrap_or(UNKNOWN_CHANNEL_TAG));
            let label = format!("<{} @ {}>", sender, channel.unwrap_or(UNKNOWN_PLACEHOLDER));
            (tag, label, Theme::channel_timestamp(), Theme::channel_label())
        }
        MessageScope::Public => (
            format!("[{}]", time),
            format!("<{}>", sender),
            Theme::public_timestamp(),
            Theme::public_label(),
        ),
    };

    format!(
        "{} {} {}",
        paint(tag_style, &tag),
        paint(label_style, &label),
        content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, h, m, 42).unwrap()
    }

    #[test]
    fn test_private_outgoing() {
        let line = format_message(
            &at(9, 5),
            "bob",
            "hi",
            MessageScope::Private {
                recipient: Some("alice"),
            },
            "bob",
        );
        assert!(line.contains("you → alice"));
        assert_eq!(
            line,
            "\x1b[2;38;5;230m[09:05|DM]\x1b[0m \x1b[38;5;230m<you → alice>\x1b[0m hi"
        );
    }

    #[test]
    fn test_private_outgoing_without_recipient() {
        let line = format_message(
            &at(9, 5),
            "bob",
            "hi",
            MessageScope::Private { recipient: None },
            "bob",
        );
        assert!(line.contains("<you → ???>"));
    }

    #[test]
    fn test_private_incoming() {
        let line = format_message(
            &at(23, 59),
            "alice",
            "hey",
            MessageScope::Private {
                recipient: Some("bob"),
            },
            "bob",
        );
        assert!(line.contains("alice → you"));
        assert!(line.contains("[23:59|DM]"));
    }

    #[test]
    fn test_channel_with_name() {
        let scope = MessageScope::Channel(Some("#dev"));
        let line = format_message(&at(12, 0), "alice", "yo", scope, "bob");
        assert_eq!(
            line,
            "\x1b[2;38;5;220m[12:00|#dev]\x1b[0m \x1b[38;5;220m<alice @ #dev>\x1b[0m yo"
        );
    }

    #[test]
    fn test_channel_placeholder_tag_once() {
        let line = format_message(&at(12, 0), "alice", "yo", MessageScope::Channel(None), "bob");
        assert_eq!(line.matches("|Ch]").count(), 1);
        assert!(line.contains("<alice @ ???>"));
        assert!(!line.contains("|]"));
    }

    #[test]
    fn test_channel_empty_name_uses_placeholder() {
        let scope = MessageScope::Channel(Some(""));
        let line = format_message(&at(12, 0), "alice", "yo", scope, "bob");
        assert_eq!(
            line,
            "\x1b[2;38;5;220m[12:00|Ch]\x1b[0m \x1b[38;5;220m<alice @ ???>\x1b[0m yo"
        );
    }

    #[test]
    fn test_private_empty_recipient_uses_placeholder() {
        let scope = MessageScope::Private {
            recipient: Some(""),
        };
        let line = format_message(&at(12, 0), "bob", "yo", scope, "bob");
        assert!(line.contains("<you → ???>"));
    }

    #[test]
    fn test_channel_self_and_other_render_alike() {
        let scope = MessageScope::Channel(Some("#a"));
        let mine = format_message(&at(8, 1), "bob", "x", scope, "bob");
        let theirs = format_message(&at(8, 1), "bob", "x", scope, "carol");
        assert_eq!(mine, theirs);
        assert!(mine.contains("<bob @ #a>"));
    }

    #[test]
    fn test_public() {
        let line = format_message(&at(7, 30), "alice", "hello all", MessageScope::Public, "bob");
        assert_eq!(
            line,
            "\x1b[2;38;5;226m[07:30]\x1b[0m \x1b[38;5;226m<alice>\x1b[0m hello all"
        );
    }

    #[test]
    fn test_content_is_not_styled() {
        let line = format_message(&at(7, 30), "alice", "plain text", MessageScope::Public, "bob");
        assert!(line.ends_with("\x1b[0m plain text"));
    }

    #[test]
    fn test_from_flags_priority() {
        assert_eq!(
            MessageScope::from_flags(true, true, Some("#a"), Some("alice")),
            MessageScope::Private {
                recipient: Some("alice")
            }
        );
        assert_eq!(
            MessageScope::from_flags(false, true, Some("#a"), None),
            MessageScope::Channel(Some("#a"))
        );
        assert_eq!(
            MessageScope::from_flags(false, false, Some("#a"), Some("x")),
            MessageScope::Public
        );
    }

    #[test]
    fn test_is_deterministic() {
        let a = format_message(&at(1, 2), "a", "b", MessageScope::Channel(Some("#c")), "d");
        let b = format_message(&at(1, 2), "a", "b", MessageScope::Channel(Some("#c")), "d");
        assert_eq!(a, b);
    }
}
