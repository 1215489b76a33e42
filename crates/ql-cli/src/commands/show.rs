use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ql_core::SceneId;

pub fn run(file: &Path, id: &str) -> Result<(), String> {
    let graph = super::load_graph(file)?;

    let scene_id = SceneId::new(id);
    let scene = graph
        .scene(&scene_id)
        .ok_or_else(|| format!("scene not found: \"{id}\""))?;

    let marker = if scene_id == *graph.start() {
        " [start]"
    } else if scene_id == *graph.death() {
        " [death]"
    } else if scene.is_terminal() {
        " [terminal]"
    } else {
        ""
    };
    println!("  {}{}", scene.title.bold(), marker.dimmed());
    println!();
    if !scene.body.is_empty() {
        println!("  {}", scene.body);
        println!();
    }

    if scene.is_terminal() {
        println!("  No links.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Text", "Target", "Damage", "Gain", "Lose", "Guards"]);

    for link in &scene.links {
        let target = link
            .target
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "—".to_string());
        let damage = link
            .damage
            .map(|d| d.to_string())
            .unwrap_or_else(|| "—".to_string());
        let gain = link.gain.clone().unwrap_or_else(|| "—".to_string());
        let lose = link.lose.clone().unwrap_or_else(|| "—".to_string());

        let mut guards = Vec::new();
        if let Some(item) = &link.requires_present {
            guards.push(format!("has {item}"));
        }
        if let Some(item) = &link.requires_absent {
            guards.push(format!("lacks {item}"));
        }
        let guards = if guards.is_empty() {
            "—".to_string()
        } else {
            guards.join(", ")
        };

        table.add_row(vec![&link.text, &target, &damage, &gain, &lose, &guards]);
    }

    println!("{table}");

    Ok(())
}
