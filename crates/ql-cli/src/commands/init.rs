use std::fs;
use std::path::Path;

/// The template adventure written by `ql init`: the five-scene snake story
/// the engine's scenario tests run against.
const TEMPLATE: &str = r#"{
    "start": "start",
    "death": "graveyard",
    "scenes": {
        "start": {
            "title": "The beginning",
            "body": "Let's embark on a terribly exciting adventure woo! Where do you want to go?",
            "links": [
                {"text": "West", "target": "deadend"},
                {"text": "East", "target": "road"},
                {"text": "Pick up sword", "gain": "sword", "requiresAbsent": "sword"}
            ]
        },
        "deadend": {
            "title": "End of the road",
            "body": "The road ends, nothing here. Boooring!",
            "links": [
                {"text": "Go back", "target": "start"}
            ]
        },
        "road": {
            "title": "Trudging on",
            "body": "You are on a dusty road. There is a snake by the road",
            "links": [
                {"text": "Pet snake", "damage": 3},
                {"text": "Chop snake", "requiresPresent": "sword", "target": "roaddeadsnake"}
            ]
        },
        "roaddeadsnake": {
            "title": "Trudging on a dead snake",
            "body": "You are on a dusty road with a dead snake on it.",
            "links": []
        },
        "graveyard": {
            "title": "FAIL!!",
            "body": "You died horribly. Your family would be so ashamed of how crappy you are.",
            "links": []
        }
    }
}
"#;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{name}' already exists"));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;
    fs::write(dir.join("adventure.json"), TEMPLATE)
        .map_err(|e| format!("cannot write adventure.json: {e}"))?;

    println!("Created adventure '{name}' in {name}/");
    println!("  adventure.json  — template scene file");
    println!();
    println!("Get started:");
    println!("  cd {name}");
    println!("  # Edit adventure.json to write your story");
    println!("  ql check          # Validate the scene file");
    println!("  ql play           # Play it");

    Ok(())
}
