use std::path::Path;

use ql_engine::{FileStore, SAVE_KEY, SaveStore};

pub fn run(save_dir: &Path) -> Result<(), String> {
    let mut store = FileStore::new(save_dir);
    store
        .remove(SAVE_KEY)
        .map_err(|e| format!("cannot clear save: {e}"))?;

    println!("Save cleared.");
    Ok(())
}
