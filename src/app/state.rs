use crate::config::AppConfig;
use crate::context::ConversationContext;
use crate::ui;
use std::collections::BTreeMap;

pub struct AppState {
    pub config: AppConfig,
    pub nickname: String,
    pub context: ConversationContext,
    /// Known peers: nickname -> peer id, fed by the transport.
    pub peers: BTreeMap<String, String>,
    /// Set by `/switch`; the next bare number picks a conversation.
    pub awaiting_selection: bool,
    pub should_quit: bool,
    /// Display lines waiting to be printed by the main loop.
    pub output: Vec<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let nickname = config.nickname.clone();
        Self {
            config,
            nickname,
            context: ConversationContext::new(),
            peers: BTreeMap::new(),
            awaiting_selection: false,
            should_quit: false,
            output: Vec::new(),
        }
    }

    pub fn print(&mut self, line: String) {
        self.output.push(line);
    }

    pub fn system_message(&mut self, text: &str) {
        self.output.push(ui::info_line(text));
    }

    pub fn error_message(&mut self, text: &str) {
        self.output.push(ui::error_line(text));
    }

    /// Move queued switch notices from the context into the output.
    pub fn flush_notices(&mut self) {
        for notice in self.context.take_notices() {
            self.output.push(notice.render());
        }
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Peer id for `nickname`, from the peer directory or an open DM.
    pub fn lookup_peer(&self, nickname: &str) -> Option<String> {
        self.peers
            .get(nickname)
            .map(String::as_str)
            .or_else(|| self.context.dms().peer_id(nickname))
            .map(str::to_string)
    }

    pub fn prompt(&self) -> String {
        format!("{} ", self.context.format_prompt())
    }

    pub fn set_nickname(&mut self, nickname: &str) {
        self.nickname = nickname.to_string();
        self.config.nickname = nickname.to_string();
    }

    /// Lines shown by `/status`.
    pub fn status_lines(&self) -> Vec<String> {
        let online = self.peers.len();
        vec![
            format!("Nickname: {}", self.nickname),
            format!("Current: {}", self.context.format_prompt()),
            format!(
                "Peers online: {} | Channels: {} | DMs: {}",
                online,
                self.context.channels().len(),
                self.context.dms().len()
            ),
        ]
    }
}
