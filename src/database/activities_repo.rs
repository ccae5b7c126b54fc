use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::models::{Activity, Directory};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

/// In-memory activity directory shared by all request handlers.
///
/// Every mutation is a single check-then-mutate step under one lock, so
/// concurrent signups cannot lose updates or duplicate an email.
pub struct ActivityDirectory {
    seed: Directory,
    activities: Mutex<Directory>,
}

impl ActivityDirectory {
    pub fn new(seed: Directory) -> Self {
        Self {
            activities: Mutex::new(seed.clone()),
            seed,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Directory> {
        // No operation can leave the map half-updated, so a poisoned lock is still usable.
        self.activities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Directory {
        self.lock().clone()
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.lock().get(activity_name).cloned()
    }

    /// Appends `email` to the roster. Returns the updated activity.
    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<Activity, DirectoryError> {
        let mut activities = self.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    /// Removes the first occurrence of `email` from the roster.
    pub fn withdraw(&self, activity_name: &str, email: &str) -> Result<Activity, DirectoryError> {
        let mut activities = self.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(activity.clone())
    }

    /// Restores the directory to the seed it was built from.
    pub fn reset(&self) {
        *self.lock() = self.seed.clone();
    }
}
