//! Insertion-ordered collections backing the conversation numbering.
//!
//! Both types keep entries in the order they were first inserted and refuse
//! duplicate keys. Conversation numbers are computed from these positions, so
//! the ordering is part of their contract rather than an accident of storage.

/// Joined channel names, in join order, each name at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelList {
    names: Vec<String>,
}

impl ChannelList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless already present. Returns `true` if it was added.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove `name`, shifting later channels down one position.
    /// Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Zero-based join position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Channels in join order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Open private conversations: nickname to peer id, in the order they were
/// opened. Nicknames are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DmRoster {
    entries: Vec<(String, String)>,
}

impl DmRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `nickname` at the end if it is new. An existing nickname keeps its
    /// position and has its peer id replaced with `peer_id`.
    /// Returns `true` if a new entry was appended.
    pub fn insert(&mut self, nickname: &str, peer_id: &str) -> bool {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| n == nickname) {
            if existing != peer_id {
                *existing = peer_id.to_string();
            }
            return false;
        }
        self.entries.push((nickname.to_string(), peer_id.to_string()));
        true
    }

    pub fn peer_id(&self, nickname: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == nickname)
            .map(|(_, id)| id.as_str())
    }

    pub fn contains(&self, nickname: &str) -> bool {
        self.peer_id(nickname).is_some()
    }

    /// `(nickname, peer_id)` at zero-based position `idx`.
    pub fn get(&self, idx: usize) -> Option<(&str, &str)> {
        self.entries
            .get(idx)
            .map(|(n, id)| (n.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `(nickname, peer_id)` pairs in the order they were opened.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, id)| (n.as_str(), id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_list_rejects_duplicates() {
        let mut channels = ChannelList::new();
        assert!(channels.insert("#general"));
        assert!(channels.insert("#random"));
        assert!(!channels.insert("#general"));
        assert_eq!(channels.iter().collect::<Vec<_>>(), vec!["#general", "#random"]);
    }

    #[test]
    fn test_channel_list_remove_shifts_positions() {
        let mut channels = ChannelList::new();
        channels.insert("#a");
        channels.insert("#b");
        channels.insert("#c");
        assert!(channels.remove("#b"));
        assert_eq!(channels.position("#c"), Some(1));
        assert!(!channels.remove("#b"));
        assert_eq!(channels.len(), 2);
    }

    #[test]
    fn test_dm_roster_keeps_position_and_refreshes_peer() {
        let mut dms = DmRoster::new();
        assert!(dms.insert("alice", "peer-1"));
        assert!(dms.insert("bob", "peer-2"));
        assert!(!dms.insert("alice", "peer-9"));
        assert_eq!(dms.len(), 2);
        assert_eq!(dms.get(0), Some(("alice", "peer-9")));
        assert_eq!(dms.peer_id("bob"), Some("peer-2"));
        assert_eq!(dms.peer_id("carol"), None);
    }
}
