#![allow(dead_code)]

use std::path::Path;

/// Campus walk: three locations, two items, one coffee-shop loop.
pub const WORLD: &str = r#"{
    "locations": [
        { "id": 1, "brief_description": "Dorm room.",
          "long_description": "Your dorm room. Your lucky mug sits on the desk.",
          "available_commands": { "go east": 2 }, "items": ["lucky mug"] },
        { "id": 2, "brief_description": "Quad.",
          "long_description": "The main quad. A T-card lies in the grass.",
          "available_commands": { "go west": 1, "go east": 3 }, "items": ["t-card"] },
        { "id": 3, "brief_description": "Cafe.",
          "long_description": "A busy cafe near the exam hall.",
          "available_commands": { "go west": 2, "buy coffee": 3 }, "items": [] }
    ],
    "items": [
        { "name": "lucky mug", "description": "It has seen many exams.",
          "start_position": 1, "target_position": 3, "target_points": 5 },
        { "name": "t-card", "description": "Your student card.",
          "start_position": 2, "target_position": 3, "target_points": 3 }
    ]
}"#;

pub fn write_data_dir(dir: &Path, config: Option<&str>) {
    std::fs::write(dir.join("world.json"), WORLD).expect("write world");
    if let Some(config) = config {
        std::fs::write(dir.join("config.toml"), config).expect("write config");
    }
}
