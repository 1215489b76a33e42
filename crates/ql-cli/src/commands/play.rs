use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use ql_engine::{EngineError, FileStore, SceneView, Session, store};

pub fn run(file: &Path, save_dir: &Path) -> Result<(), String> {
    let graph = super::load_graph(file)?;
    let store_backend = FileStore::new(save_dir);

    // Corrupt snapshots are an environment problem, not the player's:
    // warn and start fresh rather than abort.
    let state = match store::restore(&store_backend, &graph) {
        Ok(state) => state,
        Err(EngineError::CorruptSave(e)) => {
            eprintln!("{}", format!("save data is corrupt ({e}); starting over").yellow());
            store::reset(&graph)
        }
        Err(e) => return Err(e.to_string()),
    };
    let mut session = Session::new(graph, store_backend, state);

    println!("  Type a choice number, 'reset' to start over, 'quit' to leave.\n");
    render(&session.view());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if session.is_over() {
            println!("  {}", "The story has ended. Run 'ql reset' to forget it.".dimmed());
            break;
        }

        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }
        if input.eq_ignore_ascii_case("reset") {
            session.reset();
            render(&session.view());
            continue;
        }

        let Ok(number) = input.parse::<usize>() else {
            println!("{}\n", "Enter a choice number, 'reset', or 'quit'.".yellow());
            continue;
        };
        // Choices are shown 1-based.
        let index = number.wrapping_sub(1);

        match session.choose(index) {
            Ok(()) => render(&session.view()),
            Err(EngineError::InvalidChoice(_)) => {
                println!("{}\n", format!("No choice number {number} here.").yellow());
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}

fn render(view: &SceneView) {
    println!("  {}", view.title.bold());
    if !view.body.is_empty() {
        println!("  {}", view.body);
    }
    println!();
    print!("  Health: {}", view.health);
    if view.inventory.is_empty() {
        println!();
    } else {
        println!("   Carrying: {}", view.inventory.join(", "));
    }
    for choice in &view.choices {
        println!("  [{}] {}", choice.index + 1, choice.text);
    }
    println!();
}
