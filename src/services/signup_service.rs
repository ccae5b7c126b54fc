use tracing::{info, warn};

use crate::database::activities_repo::{ActivityDirectory, DirectoryError};
use crate::models::{Directory, SignupMessage};

pub fn list_activities(directory: &ActivityDirectory) -> Directory {
    directory.snapshot()
}

pub fn enroll(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupMessage, DirectoryError> {
    match directory.enroll(activity_name, email) {
        Ok(activity) => {
            if activity.is_over_capacity() {
                warn!(
                    activity = %activity_name,
                    participants = activity.participants.len(),
                    max_participants = activity.max_participants,
                    "activity is over capacity"
                );
            }
            info!(activity = %activity_name, email = %email, "student signed up");
            Ok(SignupMessage {
                message: format!("{} signed up for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub fn withdraw(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupMessage, DirectoryError> {
    match directory.withdraw(activity_name, email) {
        Ok(_) => {
            info!(activity = %activity_name, email = %email, "student unregistered");
            Ok(SignupMessage {
                message: format!("{} unregistered from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}
