/// Work the main loop carries out after an event is handled. Everything except
/// `ClearScreen`, `PersistConfig` and `Quit` is addressed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SendPublic { text: String },
    SendChannel { channel: String, text: String },
    SendPrivate { nickname: String, peer_id: String, text: String },
    JoinChannel { channel: String, password: Option<String> },
    LeaveChannel { channel: String },
    SetChannelPassword { channel: String, password: String },
    TransferOwnership { channel: String, nickname: String },
    ChangeNickname { nickname: String },
    ListChannels,
    Block { nickname: String },
    Unblock { nickname: String },
    ListBlocked,
    ClearScreen,
    PersistConfig,
    Quit,
}
