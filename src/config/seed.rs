use crate::domain::model::ActivitySeed;

fn seed(
    name: &str,
    description: &str,
    schedule: &str,
    capacity: usize,
    participants: &[&str],
) -> ActivitySeed {
    ActivitySeed {
        name: name.to_string(),
        description: description.to_string(),
        schedule: Some(schedule.to_string()),
        capacity,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Activities the directory starts with when no config file provides its own.
pub fn default_activities() -> Vec<ActivitySeed> {
    vec![
        seed(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        seed(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        seed(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ]
}
