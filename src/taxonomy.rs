// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Movement-pattern taxonomy used for substitution lookups
//!
//! Two read-only mappings: family name to member exercises, and muscle group
//! to families. The built-in tables cover common barbell, dumbbell, and
//! bodyweight movements; a TOML file can replace them entirely.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A named movement-pattern grouping of interchangeable exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub name: String,
    /// Member exercises in a fixed order
    pub members: Vec<String>,
}

/// Static exercise taxonomy
///
/// Families are held in a fixed order; substitution candidates are discovered
/// by scanning them front to back, so the order is part of the contract.
/// An exercise may belong to several families (e.g. "Romanian Deadlifts" sits
/// in both "Deadlift Family" and "Hip Hinge").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub families: Vec<Family>,
    /// Muscle group to the families that train it, in preference order
    pub muscle_groups: HashMap<String, Vec<String>>,
}

impl Taxonomy {
    /// Load the taxonomy from a file or fall back to the built-in tables
    pub fn load(path: Option<String>) -> Result<Self> {
        if let Some(taxonomy_path) = path {
            return Self::load_from_file(&taxonomy_path);
        }

        if Path::new("taxonomy.toml").exists() {
            return Self::load_from_file("taxonomy.toml");
        }

        Ok(Self::default())
    }

    /// Load the taxonomy from a specific TOML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy file: {}", path))?;

        let taxonomy: Taxonomy = toml::from_str(&content)
            .with_context(|| format!("Failed to parse taxonomy file: {}", path))?;

        Ok(taxonomy)
    }

    /// Member exercises of a family, if the family exists
    pub fn family_members(&self, name: &str) -> Option<&[String]> {
        self.families
            .iter()
            .find(|family| family.name == name)
            .map(|family| family.members.as_slice())
    }

    /// Families associated with a muscle group; empty when unmapped
    pub fn families_for_muscle_group(&self, muscle_group: &str) -> &[String] {
        self.muscle_groups
            .get(muscle_group)
            .map(|families| families.as_slice())
            .unwrap_or(&[])
    }
}

fn family(name: &str, members: &[&str]) -> Family {
    Family {
        name: name.to_string(),
        members: members.iter().map(|member| member.to_string()).collect(),
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        let families = vec![
            family(
                "Horizontal Push (Barbell)",
                &["Bench Press", "Incline Barbell Press", "Decline Barbell Press", "Close-Grip Bench Press"],
            ),
            family(
                "Horizontal Push (Dumbbell)",
                &["Dumbbell Bench Press", "Incline Dumbbell Press", "Decline Dumbbell Press", "Dumbbell Flyes"],
            ),
            family("Vertical Push (Chest)", &["Dips", "Decline Push-ups", "Chest Dips"]),
            family(
                "Vertical Pull",
                &["Pull-ups", "Chin-ups", "Lat Pulldowns", "Assisted Pull-ups", "Wide-Grip Pull-ups"],
            ),
            family(
                "Horizontal Pull (Barbell)",
                &["Barbell Rows", "Bent-Over Rows", "Pendlay Rows", "Chest-Supported Rows"],
            ),
            family(
                "Horizontal Pull (Dumbbell)",
                &["Dumbbell Rows", "Single-Arm Rows", "Seated Cable Rows", "T-Bar Rows"],
            ),
            family(
                "Deadlift Family",
                &["Deadlifts", "Romanian Deadlifts", "Sumo Deadlifts", "Trap Bar Deadlifts", "Stiff-Leg Deadlifts"],
            ),
            family(
                "Squat Family",
                &["Back Squats", "Front Squats", "Goblet Squats", "Bulgarian Split Squats", "Leg Press"],
            ),
            family(
                "Lunge Family",
                &["Lunges", "Walking Lunges", "Reverse Lunges", "Lateral Lunges", "Step-ups"],
            ),
            family("Hip Hinge", &["Romanian Deadlifts", "Good Mornings", "Hip Thrusts", "Glute Bridges"]),
            family("Quad Focus", &["Leg Extensions", "Front Squats", "Bulgarian Split Squats", "Step-ups"]),
            family(
                "Hamstring Focus",
                &["Leg Curls", "Romanian Deadlifts", "Good Mornings", "Stiff-Leg Deadlifts"],
            ),
            family("Calf Work", &["Calf Raises", "Standing Calf Raises", "Seated Calf Raises"]),
            family(
                "Overhead Press",
                &["Overhead Press", "Military Press", "Dumbbell Shoulder Press", "Pike Push-ups"],
            ),
            family("Lateral Raises", &["Lateral Raises", "Cable Lateral Raises", "Machine Lateral Raises"]),
            family("Rear Delt", &["Rear Delt Flyes", "Face Pulls", "Reverse Flyes", "Band Pull-aparts"]),
            family("Front Delt", &["Front Raises", "Arnold Press", "Pike Push-ups"]),
            family(
                "Bicep Curls",
                &["Bicep Curls", "Hammer Curls", "Concentration Curls", "Cable Curls", "Preacher Curls"],
            ),
            family(
                "Tricep Extensions",
                &["Tricep Extensions", "Overhead Extensions", "Close-Grip Bench", "Tricep Dips", "Diamond Push-ups"],
            ),
            family("Core Flexion", &["Crunches", "Sit-ups", "Dead Bugs", "Leg Raises"]),
            family("Core Stability", &["Planks", "Side Planks", "Mountain Climbers", "Bear Crawls"]),
            family("Anti-Extension", &["Planks", "Dead Bugs", "Ab Wheel"]),
            family("Anti-Rotation", &["Pallof Press", "Side Planks", "Single-Arm Carries"]),
        ];

        let mut muscle_groups = HashMap::new();
        muscle_groups.insert(
            "Chest".to_string(),
            vec![
                "Horizontal Push (Barbell)".to_string(),
                "Horizontal Push (Dumbbell)".to_string(),
                "Vertical Push (Chest)".to_string(),
            ],
        );
        muscle_groups.insert(
            "Back".to_string(),
            vec![
                "Vertical Pull".to_string(),
                "Horizontal Pull (Barbell)".to_string(),
                "Horizontal Pull (Dumbbell)".to_string(),
                "Deadlift Family".to_string(),
            ],
        );
        muscle_groups.insert(
            "Legs".to_string(),
            vec![
                "Squat Family".to_string(),
                "Lunge Family".to_string(),
                "Hip Hinge".to_string(),
                "Quad Focus".to_string(),
                "Hamstring Focus".to_string(),
            ],
        );
        muscle_groups.insert(
            "Shoulders".to_string(),
            vec![
                "Overhead Press".to_string(),
                "Lateral Raises".to_string(),
                "Rear Delt".to_string(),
                "Front Delt".to_string(),
            ],
        );
        muscle_groups.insert(
            "Arms".to_string(),
            vec!["Bicep Curls".to_string(), "Tricep Extensions".to_string()],
        );
        muscle_groups.insert(
            "Core".to_string(),
            vec![
                "Core Flexion".to_string(),
                "Core Stability".to_string(),
                "Anti-Extension".to_string(),
                "Anti-Rotation".to_string(),
            ],
        );

        Self {
            families,
            muscle_groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_families() {
        let taxonomy = Taxonomy::default();

        let members = taxonomy
            .family_members("Horizontal Pull (Barbell)")
            .expect("family should exist");
        assert_eq!(members[0], "Barbell Rows");
        assert_eq!(members[1], "Bent-Over Rows");

        assert!(taxonomy.family_members("Curl Jerk Family").is_none());
    }

    #[test]
    fn test_builtin_muscle_group_mapping() {
        let taxonomy = Taxonomy::default();

        let families = taxonomy.families_for_muscle_group("Back");
        assert!(families.contains(&"Horizontal Pull (Barbell)".to_string()));
        assert!(families.contains(&"Deadlift Family".to_string()));

        assert!(taxonomy.families_for_muscle_group("Forearms").is_empty());
    }

    #[test]
    fn test_overlapping_family_membership() {
        let taxonomy = Taxonomy::default();

        let in_family = |name: &str| {
            taxonomy
                .family_members(name)
                .unwrap()
                .contains(&"Romanian Deadlifts".to_string())
        };
        assert!(in_family("Deadlift Family"));
        assert!(in_family("Hip Hinge"));
        assert!(in_family("Hamstring Focus"));
    }

    #[test]
    fn test_load_from_file() {
        let taxonomy_toml = r#"
[[families]]
name = "Pressing"
members = ["Bench Press", "Floor Press"]

[muscle_groups]
Chest = ["Pressing"]
"#;
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("taxonomy.toml");
        fs::write(&path, taxonomy_toml).expect("Failed to write taxonomy");

        let taxonomy =
            Taxonomy::load_from_file(&path.to_string_lossy()).expect("Failed to load taxonomy");
        assert_eq!(taxonomy.families.len(), 1);
        assert_eq!(
            taxonomy.family_members("Pressing").unwrap(),
            &["Bench Press".to_string(), "Floor Press".to_string()]
        );
        assert_eq!(taxonomy.families_for_muscle_group("Chest"), &["Pressing".to_string()]);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "families = 3").expect("Failed to write taxonomy");

        let result = Taxonomy::load_from_file(&path.to_string_lossy());
        assert!(result.is_err());
    }
}
