use indexmap::IndexMap;
use thiserror::Error;

use super::activity::Activity;
use super::catalog::Catalog;

/// Errors for the two roster mutations. All of them describe bad client
/// input; none is retryable or fatal. The display strings are the `detail`
/// bodies clients match against, so they are part of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyEnrolled,
    #[error("Student is not signed up for this activity")]
    NotEnrolled,
}

/// The in-memory directory of all activities, keyed by exact activity name.
/// Insertion order of the catalog is preserved in listings.
#[derive(Debug, Clone)]
pub struct ActivityDirectory {
    activities: Catalog,
}

impl ActivityDirectory {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            activities: catalog,
        }
    }

    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        self.activities.clone()
    }

    /// Adds `email` to the activity's roster, in arrival order.
    ///
    /// Capacity is advisory: signups past `max_participants` are accepted.
    /// The limit only constrains the seeded catalog, and clients rely on
    /// signup never being refused for a full roster.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.is_enrolled(email) {
            return Err(DirectoryError::AlreadyEnrolled);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's roster.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotEnrolled)?;

        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    fn directory() -> ActivityDirectory {
        ActivityDirectory::new(catalog::default_catalog())
    }

    fn tiny_directory(max: u32, seeded: &[&str]) -> ActivityDirectory {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Robotics".to_string(),
            Activity {
                description: "Build robots".to_string(),
                schedule: "Mondays".to_string(),
                max_participants: max,
                participants: seeded.iter().map(|s| s.to_string()).collect(),
            },
        );
        ActivityDirectory::new(catalog)
    }

    #[test]
    fn signup_appends_in_arrival_order() {
        let mut dir = tiny_directory(10, &[]);

        dir.signup("Robotics", "kai@mergington.edu").unwrap();
        dir.signup("Robotics", "ana@mergington.edu").unwrap();

        assert_eq!(
            dir.activities()["Robotics"].participants,
            vec!["kai@mergington.edu", "ana@mergington.edu"]
        );
    }

    #[test]
    fn duplicate_signup_is_rejected_and_roster_unchanged() {
        let mut dir = directory();
        let before = dir.activities()["Chess Club"].participants.len();

        let err = dir.signup("Chess Club", "michael@mergington.edu").unwrap_err();

        assert_eq!(err, DirectoryError::AlreadyEnrolled);
        assert_eq!(dir.activities()["Chess Club"].participants.len(), before);
    }

    #[test]
    fn signup_to_unknown_activity_is_not_found() {
        let mut dir = directory();

        let err = dir
            .signup("Nonexistent Activity", "test@x.edu")
            .unwrap_err();

        assert_eq!(err, DirectoryError::ActivityNotFound);
    }

    #[test]
    fn signup_keeps_accepting_past_max_participants() {
        // Capacity is validated at catalog load but never enforced at
        // signup time.
        let mut dir = tiny_directory(1, &["kai@mergington.edu"]);

        dir.signup("Robotics", "ana@mergington.edu").unwrap();

        assert_eq!(dir.activities()["Robotics"].participants.len(), 2);
    }

    #[test]
    fn unregister_removes_only_that_email() {
        let mut dir = tiny_directory(10, &["kai@mergington.edu", "ana@mergington.edu"]);

        dir.unregister("Robotics", "kai@mergington.edu").unwrap();

        assert_eq!(
            dir.activities()["Robotics"].participants,
            vec!["ana@mergington.edu"]
        );
    }

    #[test]
    fn unregister_without_signup_is_not_enrolled() {
        let mut dir = directory();

        let err = dir
            .unregister("Basketball Club", "not_registered@mergington.edu")
            .unwrap_err();

        assert_eq!(err, DirectoryError::NotEnrolled);
    }

    #[test]
    fn unregister_from_unknown_activity_is_not_found() {
        let mut dir = directory();

        let err = dir
            .unregister("Nonexistent Activity", "test@x.edu")
            .unwrap_err();

        assert_eq!(err, DirectoryError::ActivityNotFound);
    }

    #[test]
    fn signup_then_unregister_restores_roster() {
        let mut dir = directory();
        let before = dir.activities()["Art Club"].participants.clone();

        dir.signup("Art Club", "round_trip@mergington.edu").unwrap();
        dir.unregister("Art Club", "round_trip@mergington.edu")
            .unwrap();

        assert_eq!(dir.activities()["Art Club"].participants, before);
    }

    #[test]
    fn reenrolling_after_unregister_succeeds() {
        let mut dir = directory();

        dir.unregister("Chess Club", "michael@mergington.edu")
            .unwrap();
        dir.signup("Chess Club", "michael@mergington.edu").unwrap();

        assert!(dir.activities()["Chess Club"].is_enrolled("michael@mergington.edu"));
    }

    #[test]
    fn activity_names_match_exactly() {
        let mut dir = directory();

        assert_eq!(
            dir.signup("chess club", "test@x.edu").unwrap_err(),
            DirectoryError::ActivityNotFound
        );
        assert_eq!(
            dir.signup("Chess Club ", "test@x.edu").unwrap_err(),
            DirectoryError::ActivityNotFound
        );
    }
}
