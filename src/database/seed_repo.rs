use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use thiserror::Error;

use crate::models::{Activity, Directory};

const SEED_ACTIVITIES_JSON: &str = include_str!("../../data/activities.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed seed data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("activity {0} is listed more than once")]
    DuplicateActivity(String),
    #[error("activity {0} has no capacity")]
    ZeroCapacity(String),
    #[error("activity {activity} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

// Keeps every entry of the JSON object, so repeated names survive parsing.
struct SeedEntries(Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for SeedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SeedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SeedEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Activity>()? {
                    entries.push(entry);
                }
                Ok(SeedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// The activities every fresh process starts with.
pub fn seed_directory() -> Result<Directory, SeedError> {
    parse_seed(SEED_ACTIVITIES_JSON)
}

pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Directory, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_seed(&raw)
}

pub fn parse_seed(raw: &str) -> Result<Directory, SeedError> {
    let SeedEntries(entries) = serde_json::from_str(raw)?;
    let mut directory = Directory::new();
    for (name, activity) in entries {
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity(name));
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
        if directory.contains_key(&name) {
            return Err(SeedError::DuplicateActivity(name));
        }
        directory.insert(name, activity);
    }
    Ok(directory)
}
