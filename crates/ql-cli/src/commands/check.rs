use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let graph = super::load_graph(file)?;

    let link_count: usize = graph.scenes().map(|(_, scene)| scene.links.len()).sum();
    let terminal: Vec<&str> = graph
        .scenes()
        .filter(|(_, scene)| scene.is_terminal())
        .map(|(id, _)| id.as_str())
        .collect();

    println!("  Validated '{}'.", file.display());
    println!();
    println!("  {} scenes, {} links", graph.len(), link_count);
    println!("  start: {}", graph.start());
    println!("  death: {}", graph.death());
    if !terminal.is_empty() {
        println!("  terminal scenes: {}", terminal.join(", "));
    }

    Ok(())
}
