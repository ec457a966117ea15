//! Conversation context: which conversation plain input goes to, the joined
//! channels and open DMs, and the derived numbering used for quick switching.
//!
//! Numbering is never stored. Index 1 is always the public room, the next
//! indices are channels in join order, and DMs follow in the order they were
//! opened. Every renderer and [`ConversationContext::switch_to_number`] go
//! through the same derivation, so a number shown anywhere is accepted by a
//! switch.

pub mod collections;

use crate::ui::theme::{paint, Theme};
use collections::{ChannelList, DmRoster};
use std::fmt;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Inner width of the "Active Conversations" box.
const DISPLAY_BOX_WIDTH: usize = 28;
/// Inner width of the "Select Conversation" box.
const SELECTION_BOX_WIDTH: usize = 27;

/// The conversation currently addressed by plain (non-command) input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationMode {
    Public,
    Channel { name: String },
    PrivateDm { nickname: String, peer_id: String },
}

/// A numbered conversation, borrowed from the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversation<'a> {
    Public,
    Channel(&'a str),
    Dm { nickname: &'a str, peer_id: &'a str },
}

impl Conversation<'_> {
    /// Label used in the boxed listings (`DM: alice`).
    pub fn list_label(&self) -> String {
        match self {
            Conversation::Public => "Public".to_string(),
            Conversation::Channel(name) => name.to_string(),
            Conversation::Dm { nickname, .. } => format!("DM: {}", nickname),
        }
    }

    /// Label used in the one-line status (`DM:alice`).
    pub fn status_label(&self) -> String {
        match self {
            Conversation::Public => "Public".to_string(),
            Conversation::Channel(name) => name.to_string(),
            Conversation::Dm { nickname, .. } => format!("DM:{}", nickname),
        }
    }

    pub fn to_mode(&self) -> ConversationMode {
        match *self {
            Conversation::Public => ConversationMode::Public,
            Conversation::Channel(name) => ConversationMode::Channel {
                name: name.to_string(),
            },
            Conversation::Dm { nickname, peer_id } => ConversationMode::PrivateDm {
                nickname: nickname.to_string(),
                peer_id: peer_id.to_string(),
            },
        }
    }
}

/// A user-visible notice produced by a switching operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SwitchedToPublic,
    SwitchedToChannel(String),
    SwitchedToDm(String),
    EnteredDm(String),
}

impl Notice {
    /// Separator line followed by the notice text, both greyed out.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            paint(Theme::muted(), "─────────────────────────"),
            paint(Theme::muted(), &format!("» {}", self))
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SwitchedToPublic => {
                write!(f, "Switched to Public chat. Just type to send messages.")
            }
            Notice::SwitchedToChannel(name) => write!(f, "Switched to channel {}", name),
            Notice::SwitchedToDm(nick) => {
                write!(f, "Switched to DM with {}. Just type to send messages.", nick)
            }
            Notice::EnteredDm(nick) => {
                write!(f, "Entered DM mode with {}. Just type to send messages.", nick)
            }
        }
    }
}

/// Per-session conversation state. Created once with the public room active
/// and nothing joined.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    current_mode: ConversationMode,
    channels: ChannelList,
    dms: DmRoster,
    last_private_sender: Option<(String, String)>,
    notices: Vec<Notice>,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationContext {
    pub fn new() -> Self {
        Self {
            current_mode: ConversationMode::Public,
            channels: ChannelList::new(),
            dms: DmRoster::new(),
            last_private_sender: None,
            notices: Vec::new(),
        }
    }

    pub fn current_mode(&self) -> &ConversationMode {
        &self.current_mode
    }

    pub fn channels(&self) -> &ChannelList {
        &self.channels
    }

    pub fn dms(&self) -> &DmRoster {
        &self.dms
    }

    /// Most recent private-message sender as `(nickname, peer_id)`.
    pub fn last_private_sender(&self) -> Option<(&str, &str)> {
        self.last_private_sender
            .as_ref()
            .map(|(n, id)| (n.as_str(), id.as_str()))
    }

    pub fn record_private_sender(&mut self, nickname: &str, peer_id: &str) {
        self.last_private_sender = Some((nickname.to_string(), peer_id.to_string()));
    }

    /// Drain notices produced by switching operations since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn format_prompt(&self) -> String {
        match &self.current_mode {
            ConversationMode::Public => "[Public]".to_string(),
            ConversationMode::Channel { name } => format!("[{}]", name),
            ConversationMode::PrivateDm { nickname, .. } => format!("[DM: {}]", nickname),
        }
    }

    /// Every conversation with its number, in numbering order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Conversation<'_>)> {
        std::iter::once(Conversation::Public)
            .chain(self.channels.iter().map(Conversation::Channel))
            .chain(
                self.dms
                    .iter()
                    .map(|(nickname, peer_id)| Conversation::Dm { nickname, peer_id }),
            )
            .enumerate()
            .map(|(i, conv)| (i + 1, conv))
    }

    /// Map a conversation number to its conversation.
    pub fn resolve(&self, n: i64) -> Option<Conversation<'_>> {
        if n == 1 {
            return Some(Conversation::Public);
        }
        if n < 1 {
            return None;
        }
        let n = usize::try_from(n).ok()?;
        let channel_end = 1 + self.channels.len();
        if n <= channel_end {
            return self.channels.get(n - 2).map(Conversation::Channel);
        }
        self.dms
            .get(n - channel_end - 1)
            .map(|(nickname, peer_id)| Conversation::Dm { nickname, peer_id })
    }

    pub fn is_current(&self, conv: &Conversation<'_>) -> bool {
        match (&self.current_mode, conv) {
            (ConversationMode::Public, Conversation::Public) => true,
            (ConversationMode::Channel { name }, Conversation::Channel(other)) => name == other,
            (
                ConversationMode::PrivateDm { nickname, .. },
                Conversation::Dm {
                    nickname: other, ..
                },
            ) => nickname == other,
            _ => false,
        }
    }

    /// `Active: [1] Public [2] #general [3] DM:alice`, greyed out.
    pub fn status_line(&self) -> String {
        let parts: Vec<String> = self
            .entries()
            .map(|(n, conv)| format!("[{}] {}", n, conv.status_label()))
            .collect();
        paint(Theme::muted(), &format!("Active: {}", parts.join(" ")))
    }

    /// Switch to conversation `n`. Returns `false`, changing nothing, when `n`
    /// does not name a conversation.
    pub fn switch_to_number(&mut self, n: i64) -> bool {
        let Some(conv) = self.resolve(n) else {
            debug!(number = n, "no conversation with that number");
            return false;
        };
        let notice = match conv {
            Conversation::Public => Notice::SwitchedToPublic,
            Conversation::Channel(name) => Notice::SwitchedToChannel(name.to_string()),
            Conversation::Dm { nickname, .. } => Notice::SwitchedToDm(nickname.to_string()),
        };
        self.current_mode = conv.to_mode();
        debug!(number = n, mode = ?self.current_mode, "switched conversation");
        self.notices.push(notice);
        true
    }

    pub fn add_channel(&mut self, name: &str) {
        if self.channels.insert(name) {
            debug!(channel = name, "channel added");
        }
    }

    pub fn add_dm(&mut self, nickname: &str, peer_id: &str) {
        if self.dms.insert(nickname, peer_id) {
            debug!(nickname, peer_id, "dm added");
        }
        // Keep the active DM routed to the refreshed peer id
        if let ConversationMode::PrivateDm {
            nickname: current,
            peer_id: current_id,
        } = &mut self.current_mode
        {
            if current == nickname && current_id != peer_id {
                debug!(nickname, peer_id, "active dm peer id refreshed");
                *current_id = peer_id.to_string();
            }
        }
    }

    pub fn switch_to_channel(&mut self, name: &str) {
        self.switch_to_channel_silent(name);
        self.notices.push(Notice::SwitchedToChannel(name.to_string()));
    }

    /// Like [`Self::switch_to_channel`] but without a notice, for switches that
    /// happen as a side effect of another command.
    pub fn switch_to_channel_silent(&mut self, name: &str) {
        self.add_channel(name);
        self.current_mode = ConversationMode::Channel {
            name: name.to_string(),
        };
    }

    pub fn enter_dm_mode(&mut self, nickname: &str, peer_id: &str) {
        self.add_dm(nickname, peer_id);
        self.current_mode = ConversationMode::PrivateDm {
            nickname: nickname.to_string(),
            peer_id: peer_id.to_string(),
        };
        self.notices.push(Notice::EnteredDm(nickname.to_string()));
    }

    pub fn switch_to_public(&mut self) {
        self.current_mode = ConversationMode::Public;
        self.notices.push(Notice::SwitchedToPublic);
    }

    /// Forget a joined channel. The current mode is left alone even if it
    /// points at `name`; callers leaving the active channel switch afterwards.
    pub fn remove_channel(&mut self, name: &str) {
        if self.channels.remove(name) {
            debug!(channel = name, "channel removed");
        }
    }

    /// Boxed listing of all conversations with `→` on the active one.
    pub fn conversation_list_display(&self) -> String {
        let mut lines = vec![
            paint(Theme::muted(), "╭─── Active Conversations ───╮"),
            boxed_row("", DISPLAY_BOX_WIDTH),
        ];
        for (n, conv) in self.entries() {
            let indicator = if self.is_current(&conv) { "→" } else { " " };
            let row = format!(" {} [{}] {}", indicator, n, conv.list_label());
            lines.push(boxed_row(&row, DISPLAY_BOX_WIDTH));
        }
        lines.push(boxed_row("", DISPLAY_BOX_WIDTH));
        lines.push(paint(Theme::muted(), "╰────────────────────────────╯"));
        lines.join("\n")
    }

    /// Plain numbered menu shown by the interactive switcher.
    pub fn conversation_list_for_selection(&self) -> String {
        let mut lines = vec![paint(Theme::muted(), "╭─── Select Conversation ───╮")];
        for (n, conv) in self.entries() {
            let row = format!("  {}. {}", n, conv.list_label());
            lines.push(boxed_row(&row, SELECTION_BOX_WIDTH));
        }
        lines.push(paint(Theme::muted(), "╰───────────────────────────╯"));
        lines.join("\n")
    }
}

/// `│<content><padding>│`, padded by display width. Content wider than the
/// box is not truncated.
fn boxed_row(content: &str, width: usize) -> String {
    let padding = " ".repeat(width.saturating_sub(content.width()));
    paint(Theme::muted(), &format!("│{}{}│", content, padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(channels: &[&str], dms: &[(&str, &str)]) -> ConversationContext {
        let mut ctx = ConversationContext::new();
        for ch in channels {
            ctx.add_channel(ch);
        }
        for (nick, peer) in dms {
            ctx.add_dm(nick, peer);
        }
        ctx
    }

    /// Numbers listed in a rendered string, in order of appearance.
    fn numbers_in(rendered: &str, open: char, close: char) -> Vec<i64> {
        let mut out = Vec::new();
        let mut rest = rendered;
        while let Some(start) = rest.find(open) {
            let after = &rest[start + open.len_utf8()..];
            if let Some(end) = after.find(close) {
                if let Ok(n) = after[..end].parse() {
                    out.push(n);
                }
            }
            rest = after;
        }
        out
    }

    #[test]
    fn test_new_context_is_public() {
        let ctx = ConversationContext::new();
        assert_eq!(ctx.current_mode(), &ConversationMode::Public);
        assert_eq!(ctx.format_prompt(), "[Public]");
        assert_eq!(ctx.channels().len(), 0);
        assert_eq!(ctx.dms().len(), 0);
        assert!(ctx.last_private_sender().is_none());
    }

    #[test]
    fn test_switch_by_number_over_channels() {
        let mut ctx = context_with(&["general", "random"], &[]);
        assert!(ctx.switch_to_number(2));
        assert_eq!(ctx.format_prompt(), "[general]");
        assert!(ctx.switch_to_number(3));
        assert_eq!(
            ctx.current_mode(),
            &ConversationMode::Channel {
                name: "random".to_string()
            }
        );
        assert!(!ctx.switch_to_number(4));
        assert_eq!(ctx.format_prompt(), "[random]");
    }

    #[test]
    fn test_dm_numbered_after_channels() {
        let mut ctx = context_with(&["general", "random"], &[]);
        ctx.add_dm("alice", "peer-a");
        assert!(ctx.switch_to_number(4));
        assert_eq!(ctx.format_prompt(), "[DM: alice]");
        assert_eq!(
            ctx.current_mode(),
            &ConversationMode::PrivateDm {
                nickname: "alice".to_string(),
                peer_id: "peer-a".to_string()
            }
        );
        assert!(!ctx.switch_to_number(5));
    }

    #[test]
    fn test_switch_to_one_is_always_public() {
        let mut ctx = context_with(&["general"], &[("alice", "peer-a")]);
        ctx.switch_to_channel("general");
        assert!(ctx.switch_to_number(1));
        assert_eq!(ctx.current_mode(), &ConversationMode::Public);

        let mut empty = ConversationContext::new();
        assert!(empty.switch_to_number(1));
        assert_eq!(empty.current_mode(), &ConversationMode::Public);
    }

    #[test]
    fn test_invalid_numbers_do_not_mutate() {
        let mut ctx = context_with(&["general"], &[("alice", "peer-a")]);
        ctx.switch_to_channel_silent("general");
        for n in [0, -1, 4, 100, i64::MAX, i64::MIN] {
            assert!(!ctx.switch_to_number(n), "number {} should not resolve", n);
        }
        assert_eq!(ctx.format_prompt(), "[general]");
        assert!(ctx.take_notices().is_empty());
    }

    #[test]
    fn test_add_channel_twice_keeps_one_entry() {
        let mut ctx = context_with(&["general", "random"], &[]);
        ctx.add_channel("general");
        assert_eq!(ctx.channels().iter().collect::<Vec<_>>(), vec!["general", "random"]);
        assert_eq!(ctx.current_mode(), &ConversationMode::Public);
    }

    #[test]
    fn test_remove_missing_channel_is_noop() {
        let mut ctx = context_with(&["general"], &[]);
        let before = ctx.channels().clone();
        ctx.remove_channel("nope");
        assert_eq!(ctx.channels(), &before);
    }

    #[test]
    fn test_remove_active_channel_keeps_mode() {
        let mut ctx = context_with(&["general", "random"], &[("alice", "peer-a")]);
        ctx.switch_to_channel_silent("general");
        ctx.remove_channel("general");
        assert_eq!(ctx.format_prompt(), "[general]");
        // numbering shifts immediately
        assert_eq!(ctx.resolve(2), Some(Conversation::Channel("random")));
        assert_eq!(
            ctx.resolve(3),
            Some(Conversation::Dm {
                nickname: "alice",
                peer_id: "peer-a"
            })
        );
    }

    #[test]
    fn test_numbering_agrees_across_renderings() {
        let ctx = context_with(
            &["general", "random", "dev"],
            &[("alice", "peer-a"), ("bob", "peer-b")],
        );
        let expected: Vec<i64> = (1..=6).collect();
        assert_eq!(numbers_in(&ctx.status_line(), '[', ']'), expected);
        assert_eq!(numbers_in(&ctx.conversation_list_display(), '[', ']'), expected);
        assert_eq!(numbers_in(&ctx.conversation_list_for_selection(), ' ', '.'), expected);
        for (n, conv) in ctx.entries() {
            assert_eq!(ctx.resolve(n as i64), Some(conv));
            let mut probe = ctx.clone();
            assert!(probe.switch_to_number(n as i64));
        }
        assert_eq!(ctx.resolve(7), None);
    }

    #[test]
    fn test_status_line_labels() {
        let ctx = context_with(&["general"], &[("alice", "peer-a")]);
        assert!(ctx
            .status_line()
            .contains("Active: [1] Public [2] general [3] DM:alice"));
    }

    #[test]
    fn test_display_marks_current_entry() {
        let mut ctx = context_with(&["general"], &[("alice", "peer-a")]);
        ctx.enter_dm_mode("alice", "peer-a");
        let listing = ctx.conversation_list_display();
        assert!(listing.contains("→ [3] DM: alice"));
        assert!(listing.contains("  [1] Public"));
        assert!(listing.contains("  [2] general"));
        assert_eq!(listing.matches('→').count(), 1);
    }

    #[test]
    fn test_selection_menu_has_no_pointer() {
        let mut ctx = context_with(&["general"], &[]);
        ctx.switch_to_channel_silent("general");
        let menu = ctx.conversation_list_for_selection();
        assert!(menu.contains("1. Public"));
        assert!(menu.contains("2. general"));
        assert!(!menu.contains('→'));
    }

    #[test]
    fn test_switch_operations_queue_notices() {
        let mut ctx = ConversationContext::new();
        ctx.switch_to_channel("general");
        ctx.switch_to_channel_silent("random");
        ctx.enter_dm_mode("alice", "peer-a");
        ctx.switch_to_public();
        assert!(ctx.switch_to_number(2));
        assert_eq!(
            ctx.take_notices(),
            vec![
                Notice::SwitchedToChannel("general".to_string()),
                Notice::EnteredDm("alice".to_string()),
                Notice::SwitchedToPublic,
                Notice::SwitchedToChannel("general".to_string()),
            ]
        );
        assert!(ctx.take_notices().is_empty());
    }

    #[test]
    fn test_add_operations_do_not_switch() {
        let mut ctx = ConversationContext::new();
        ctx.add_channel("general");
        ctx.add_dm("alice", "peer-a");
        assert_eq!(ctx.current_mode(), &ConversationMode::Public);
        assert!(ctx.take_notices().is_empty());
    }

    #[test]
    fn test_notice_render() {
        let rendered = Notice::SwitchedToDm("alice".to_string()).render();
        assert!(rendered.contains("» Switched to DM with alice. Just type to send messages."));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_record_private_sender() {
        let mut ctx = ConversationContext::new();
        ctx.record_private_sender("alice", "peer-a");
        ctx.record_private_sender("bob", "peer-b");
        assert_eq!(ctx.last_private_sender(), Some(("bob", "peer-b")));
        assert_eq!(ctx.dms().len(), 0);
    }

    #[test]
    fn test_readding_active_dm_refreshes_mode_peer_id() {
        let mut ctx = ConversationContext::new();
        ctx.add_dm("alice", "old");
        ctx.enter_dm_mode("alice", "old");
        ctx.add_dm("alice", "new");
        assert_eq!(
            ctx.current_mode(),
            &ConversationMode::PrivateDm {
                nickname: "alice".to_string(),
                peer_id: "new".to_string(),
            }
        );
        assert_eq!(ctx.dms().peer_id("alice"), Some("new"));
    }

    #[test]
    fn test_readding_other_dm_leaves_mode_alone() {
        let mut ctx = ConversationContext::new();
        ctx.enter_dm_mode("alice", "peer-a");
        ctx.add_dm("carol", "peer-c");
        assert_eq!(
            ctx.current_mode(),
            &ConversationMode::PrivateDm {
                nickname: "alice".to_string(),
                peer_id: "peer-a".to_string(),
            }
        );
    }

    #[test]
    fn test_boxed_rows_are_aligned() {
        let ctx = context_with(&["général"], &[("ålice", "peer-a")]);
        let listing = ctx.conversation_list_display();
        let widths: Vec<usize> = listing
            .lines()
            .map(|l| l.replace("\x1b[90m", "").replace("\x1b[0m", "").width())
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
    }
}
