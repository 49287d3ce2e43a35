use anyhow::{Context, Result};
use indexmap::IndexMap;

use super::activity::Activity;

pub type Catalog = IndexMap<String, Activity>;

/// Built-in seed catalog. Activities are never created or deleted at runtime,
/// so this (or the JSON override) fixes the directory for the process lifetime.
pub fn default_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    let mut add = |name: &str, description: &str, schedule: &str, max: u32, seeded: &[&str]| {
        catalog.insert(
            name.to_string(),
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: max,
                participants: seeded.iter().map(|s| s.to_string()).collect(),
            },
        );
    };

    add(
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    );
    add(
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    );
    add(
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    );
    add(
        "Soccer Team",
        "Join the school soccer team and compete in inter-school matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "harper@mergington.edu"],
    );
    add(
        "Basketball Club",
        "Practice basketball skills and play friendly games",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu"],
    );
    add(
        "Art Club",
        "Explore painting, drawing, and other visual arts",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu"],
    );
    add(
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["mia@mergington.edu", "noah@mergington.edu"],
    );
    add(
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["charlotte@mergington.edu"],
    );
    add(
        "Debate Club",
        "Develop argumentation skills through structured debates",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["henry@mergington.edu"],
    );

    catalog
}

/// Loads the catalog used to build the directory: the JSON file at `path`
/// when one is configured, the built-in seed otherwise.
pub fn load(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file {}", path))?;
            let catalog =
                from_json(&raw).with_context(|| format!("Invalid catalog file {}", path))?;
            tracing::debug!("loaded catalog override from {}", path);
            Ok(catalog)
        }
        None => Ok(default_catalog()),
    }
}

pub fn from_json(raw: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    validate(&catalog)?;
    Ok(catalog)
}

/// Checks the invariants the rest of the service assumes: positive capacity,
/// no duplicate participant within an activity, and a seed roster that fits.
pub fn validate(catalog: &Catalog) -> Result<()> {
    for (name, activity) in catalog {
        if activity.max_participants == 0 {
            anyhow::bail!("Activity {:?} has zero max_participants", name);
        }
        for (i, email) in activity.participants.iter().enumerate() {
            if activity.participants[..i].iter().any(|p| p == email) {
                anyhow::bail!("Activity {:?} lists {:?} more than once", name, email);
            }
        }
        if activity.participants.len() > activity.max_participants as usize {
            anyhow::bail!(
                "Activity {:?} seeds {} participants but allows {}",
                name,
                activity.participants.len(),
                activity.max_participants
            );
        }
    }
    Ok(())
}
