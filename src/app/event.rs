use chrono::{DateTime, Local};

/// Where an inbound message was addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Public,
    Channel(String),
    /// Addressed to us alone.
    Private,
}

#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub timestamp: DateTime<Local>,
    pub sender: String,
    pub sender_peer_id: String,
    pub content: String,
    pub destination: Destination,
}

/// Everything the main loop reacts to.
///
/// `Input` and `InputClosed` come from the stdin task. The peer and message
/// variants form the transport inbox: a mesh transport holds a clone of the
/// loop's `UnboundedSender<AppEvent>` and pushes them in. No transport ships
/// in this binary, so only the handler tests construct them today.
#[derive(Debug)]
pub enum AppEvent {
    /// A line typed by the user
    Input(String),

    /// stdin reached end of file
    InputClosed,

    /// Peer directory updates from the transport
    PeerSeen {
        nickname: String,
        peer_id: String,
    },
    PeerLeft {
        nickname: String,
    },

    /// Chat message delivered by the transport
    MessageReceived(InboundMessage),
}
