use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One extracurricular offering. The name is the key in [`Directory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Stored and reported, not checked on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// More participants than `max_participants`; signups are still accepted.
    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

pub type Directory = BTreeMap<String, Activity>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupMessage {
    pub message: String,
}
