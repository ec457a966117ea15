use crate::app::action::Action;
use crate::app::event::{AppEvent, Destination, InboundMessage};
use crate::app::state::AppState;
use crate::command::{self, Input, ParsedCommand};
use crate::context::ConversationMode;
use crate::format::{format_message, MessageScope};
use crate::ui;
use chrono::Local;
use tracing::{debug, info, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let actions = match event {
        AppEvent::Input(line) => handle_input(state, &line),
        AppEvent::InputClosed => vec![Action::Quit],
        AppEvent::PeerSeen { nickname, peer_id } => {
            if state.context.dms().contains(&nickname) {
                state.context.add_dm(&nickname, &peer_id);
            }
            state.peers.insert(nickname, peer_id);
            vec![]
        }
        AppEvent::PeerLeft { nickname } => {
            state.peers.remove(&nickname);
            vec![]
        }
        AppEvent::MessageReceived(msg) => {
            handle_inbound(state, msg);
            vec![]
        }
    };

    state.flush_notices();
    actions
}

fn handle_input(state: &mut AppState, line: &str) -> Vec<Action> {
    let parsed = match command::parse_input(line) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "rejected input");
            state.awaiting_selection = false;
            state.error_message(&e.to_string());
            return vec![];
        }
    };

    // A pending /switch only consumes the next line if it is a number.
    let selecting = std::mem::take(&mut state.awaiting_selection);

    match parsed {
        Input::Empty => vec![],
        Input::Number(n) => {
            if !state.context.switch_to_number(n) {
                let hint = if selecting { "/switch" } else { "/list" };
                state.error_message(&format!(
                    "Invalid conversation number: {}. Use {} to see conversations.",
                    n, hint
                ));
            }
            vec![]
        }
        Input::Text(text) => send_text(state, text),
        Input::Command(cmd) => handle_command(state, cmd),
    }
}

/// Send plain text to the current conversation and echo it locally.
fn send_text(state: &mut AppState, text: String) -> Vec<Action> {
    let now = Local::now();
    let me = state.nickname.clone();
    match state.context.current_mode().clone() {
        ConversationMode::Public => {
            state.print(format_message(&now, &me, &text, MessageScope::Public, &me));
            vec![Action::SendPublic { text }]
        }
        ConversationMode::Channel { name } => {
            let scope = MessageScope::Channel(Some(name.as_str()));
            state.print(format_message(&now, &me, &text, scope, &me));
            vec![Action::SendChannel { channel: name, text }]
        }
        ConversationMode::PrivateDm { nickname, peer_id } => {
            send_private(state, nickname, peer_id, text)
        }
    }
}

fn send_private(
    state: &mut AppState,
    nickname: String,
    peer_id: String,
    text: String,
) -> Vec<Action> {
    let me = state.nickname.clone();
    state.print(format_message(
        &Local::now(),
        &me,
        &text,
        MessageScope::Private {
            recipient: Some(nickname.as_str()),
        },
        &me,
    ));
    vec![Action::SendPrivate {
        nickname,
        peer_id,
        text,
    }]
}

fn handle_command(state: &mut AppState, cmd: ParsedCommand) -> Vec<Action> {
    debug!(command = ?cmd, "handling command");
    match cmd {
        ParsedCommand::Help => {
            state.print(ui::help_text());
            vec![]
        }
        ParsedCommand::Name { name } => {
            if name == state.nickname {
                state.system_message(&format!("You are already known as {}", name));
                return vec![];
            }
            info!(old = %state.nickname, new = %name, "nickname changed");
            state.set_nickname(&name);
            state.system_message(&format!("Nickname changed to {}", name));
            vec![
                Action::ChangeNickname { nickname: name },
                Action::PersistConfig,
            ]
        }
        ParsedCommand::Status => {
            for line in state.status_lines() {
                state.system_message(&line);
            }
            let status = state.context.status_line();
            state.print(status);
            vec![]
        }
        ParsedCommand::Clear => vec![Action::ClearScreen],
        ParsedCommand::Exit => vec![Action::Quit],
        ParsedCommand::List => {
            let listing = state.context.conversation_list_display();
            state.print(listing);
            vec![]
        }
        ParsedCommand::Switch => {
            let menu = state.context.conversation_list_for_selection();
            state.print(menu);
            state.system_message("Enter a number to switch:");
            state.awaiting_selection = true;
            vec![]
        }
        ParsedCommand::Public => {
            state.context.switch_to_public();
            vec![]
        }
        ParsedCommand::Dm { nick, text } => {
            if nick == state.nickname {
                state.error_message("You can't DM yourself.");
                return vec![];
            }
            let Some(peer_id) = state.lookup_peer(&nick) else {
                state.error_message(&format!(
                    "User '{}' not found. They may be offline or using a different nickname.",
                    nick
                ));
                return vec![];
            };
            open_private(state, nick, peer_id, text)
        }
        ParsedCommand::Reply { text } => {
            let Some((nick, peer_id)) = state
                .context
                .last_private_sender()
                .map(|(n, id)| (n.to_string(), id.to_string()))
            else {
                state.error_message("No private messages received yet.");
                return vec![];
            };
            open_private(state, nick, peer_id, text)
        }
        ParsedCommand::Join { channel, password } => {
            state.context.switch_to_channel(&channel);
            vec![Action::JoinChannel { channel, password }]
        }
        ParsedCommand::Leave => {
            let ConversationMode::Channel { name } = state.context.current_mode().clone() else {
                state.error_message("You're not in a channel. Use /j #channel to join one.");
                return vec![];
            };
            state.context.remove_channel(&name);
            state.system_message(&format!("Left channel {}", name));
            state.context.switch_to_public();
            vec![Action::LeaveChannel { channel: name }]
        }
        ParsedCommand::Pass { password } => match current_channel(state) {
            Some(channel) => vec![Action::SetChannelPassword { channel, password }],
            None => {
                state.error_message("Switch to a channel to set its password.");
                vec![]
            }
        },
        ParsedCommand::Transfer { nick } => match current_channel(state) {
            Some(channel) => vec![Action::TransferOwnership {
                channel,
                nickname: nick,
            }],
            None => {
                state.error_message("Switch to a channel to transfer its ownership.");
                vec![]
            }
        },
        ParsedCommand::Channels => vec![Action::ListChannels],
        ParsedCommand::Online => {
            if state.peers.is_empty() {
                state.system_message("No one else is online right now.");
            } else {
                let names: Vec<&str> = state.peers.keys().map(String::as_str).collect();
                let line = format!("Online: {}", names.join(", "));
                state.system_message(&line);
            }
            vec![]
        }
        ParsedCommand::Block { nick: Some(nick) } => vec![Action::Block { nickname: nick }],
        ParsedCommand::Block { nick: None } => vec![Action::ListBlocked],
        ParsedCommand::Unblock { nick } => vec![Action::Unblock { nickname: nick }],
    }
}

/// With `text`, send a one-off private message without leaving the current
/// conversation. Without, enter DM mode with the peer.
fn open_private(
    state: &mut AppState,
    nick: String,
    peer_id: String,
    text: Option<String>,
) -> Vec<Action> {
    match text {
        Some(text) => {
            state.context.add_dm(&nick, &peer_id);
            send_private(state, nick, peer_id, text)
        }
        None => {
            state.context.enter_dm_mode(&nick, &peer_id);
            vec![]
        }
    }
}

fn current_channel(state: &AppState) -> Option<String> {
    match state.context.current_mode() {
        ConversationMode::Channel { name } => Some(name.clone()),
        _ => None,
    }
}

fn handle_inbound(state: &mut AppState, msg: InboundMessage) {
    let me = state.nickname.clone();
    let (is_private, channel) = match &msg.destination {
        Destination::Private => (true, None),
        Destination::Channel(name) => (false, Some(name.as_str())),
        Destination::Public => (false, None),
    };

    if is_private {
        state.context.record_private_sender(&msg.sender, &msg.sender_peer_id);
        state.context.add_dm(&msg.sender, &msg.sender_peer_id);
        state
            .peers
            .insert(msg.sender.clone(), msg.sender_peer_id.clone());
    }

    let scope =
        MessageScope::from_flags(is_private, channel.is_some(), channel, Some(me.as_str()));
    let line = format_message(&msg.timestamp, &msg.sender, &msg.content, scope, &me);
    state.print(line);
}
