//! Built-in demo graph: a campus map of 19 locations and 42 paths.

use super::{EdgeConfig, GraphConfig};

const LOCATIONS: [&str; 19] = [
    "Gate",
    "Student Parking",
    "Senior Parking",
    "Circle",
    "Admissions",
    "Business Office",
    "Athletics",
    "PA",
    "Cohen",
    "Fountain",
    "US 100",
    "Faculty Parking",
    "Library",
    "CHH",
    "VA",
    "Mariani",
    "Science",
    "BD",
    "GD",
];

const PATHS: [(&str, &str, f64); 42] = [
    ("Gate", "Student Parking", 6.0),
    ("Gate", "Circle", 1.0),
    ("Gate", "Senior Parking", 6.0),
    ("Student Parking", "Circle", 1.0),
    ("Student Parking", "Athletics", 3.0),
    ("Student Parking", "PA", 8.0),
    ("Senior Parking", "Circle", 3.0),
    ("Senior Parking", "Admissions", 6.0),
    ("Senior Parking", "Business Office", 6.0),
    ("Circle", "Admissions", 1.0),
    ("Circle", "PA", 8.0),
    ("Circle", "Cohen", 4.0),
    ("Admissions", "Fountain", 3.0),
    ("Admissions", "Business Office", 4.0),
    ("Business Office", "US 100", 3.0),
    ("Business Office", "Fountain", 6.0),
    ("Athletics", "PA", 4.0),
    ("Athletics", "Science", 7.0),
    ("PA", "Cohen", 7.0),
    ("PA", "Mariani", 8.0),
    ("PA", "Science", 8.0),
    ("Cohen", "Mariani", 2.0),
    ("Cohen", "Fountain", 4.0),
    ("Cohen", "Library", 4.0),
    ("Fountain", "US 100", 6.0),
    ("Fountain", "Library", 8.0),
    ("US 100", "Library", 4.0),
    ("US 100", "Faculty Parking", 7.0),
    ("US 100", "CHH", 2.0),
    ("Faculty Parking", "VA", 2.0),
    ("Faculty Parking", "CHH", 5.0),
    ("Library", "CHH", 3.0),
    ("Library", "Mariani", 2.0),
    ("CHH", "VA", 3.0),
    ("CHH", "GD", 7.0),
    ("VA", "GD", 3.0),
    ("VA", "Mariani", 2.0),
    ("Mariani", "Science", 2.0),
    ("Mariani", "BD", 5.0),
    ("Mariani", "GD", 3.0),
    ("Science", "BD", 7.0),
    ("BD", "GD", 6.0),
];

impl GraphConfig {
    /// The campus demo graph.
    pub fn campus(directed: bool) -> Self {
        Self {
            directed,
            vertices: LOCATIONS.iter().map(|s| s.to_string()).collect(),
            edges: PATHS
                .iter()
                .map(|&(from, to, weight)| EdgeConfig {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                })
                .collect(),
        }
    }
}
