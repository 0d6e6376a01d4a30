use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use crate::models::LikeCounts;

pub const LIKED_STORAGE_KEY: &str = "eidpalm_likes";

/// Designs this browser has already voted for. Advisory only; the server never sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LikedDesigns(BTreeMap<String, bool>);

impl LikedDesigns {
    pub fn from_storage(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok()).unwrap_or_default()
    }

    pub fn to_storage(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn mark(&mut self, id: &str) {
        self.0.insert(id.to_string(), true);
    }

    /// Marks `id` and returns `true` only if it was not marked yet.
    pub fn claim(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.mark(id);
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesignTally {
    pub displayed: u64,
    pub confirmed: u64,
    pub pending: bool,
}

/// Client-side like counts with optimistic updates.
///
/// A click bumps `displayed` immediately. The server's answer then either
/// replaces it (`confirm`) or, on failure, the optimistic value is kept as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteBoard {
    tallies: BTreeMap<String, DesignTally>,
    liked: LikedDesigns,
}

impl VoteBoard {
    pub fn new(liked: LikedDesigns) -> Self {
        Self { tallies: BTreeMap::new(), liked }
    }

    pub fn load_counts(&mut self, counts: &LikeCounts) {
        for (id, &count) in counts {
            let tally = self.tallies.entry(id.clone()).or_default();
            tally.confirmed = count;
            // A like in flight is not in `count` yet.
            tally.displayed = if tally.pending { tally.displayed.max(count + 1) } else { count };
        }
    }

    /// Returns `false` without touching anything when this browser already voted for `id`.
    pub fn begin_like(&mut self, id: &str) -> bool {
        if !self.liked.claim(id) {
            return false;
        }
        let tally = self.tallies.entry(id.to_string()).or_default();
        tally.displayed += 1;
        tally.pending = true;
        true
    }

    pub fn confirm(&mut self, id: &str, count: u64) {
        let tally = self.tallies.entry(id.to_string()).or_default();
        tally.displayed = count;
        tally.confirmed = count;
        tally.pending = false;
    }

    pub fn fail(&mut self, id: &str) {
        if let Some(tally) = self.tallies.get_mut(id) {
            tally.pending = false;
        }
    }

    pub fn count(&self, id: &str) -> u64 {
        self.tallies.get(id).map(|t| t.displayed).unwrap_or(0)
    }

    pub fn tally(&self, id: &str) -> DesignTally {
        self.tallies.get(id).copied().unwrap_or_default()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn liked(&self) -> &LikedDesigns {
        &self.liked
    }
}
