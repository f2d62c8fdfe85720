use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

/// Count the `.class` entries in a JAR. Doubles as a pre-flight check: an
/// archive that cannot be opened as a zip fails here, before any external
/// process is spawned.
pub fn count_class_entries(jar_path: &Path) -> Result<usize> {
    let file = File::open(jar_path)
        .with_context(|| format!("Failed to open jar: {}", jar_path.display()))?;
    let mmap = unsafe {
        Mmap::map(&file).with_context(|| format!("Failed to mmap jar: {}", jar_path.display()))?
    };
    let mut archive = ZipArchive::new(Cursor::new(&mmap[..]))
        .with_context(|| format!("Not a readable JAR archive: {}", jar_path.display()))?;

    let mut count = 0;
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.name().ends_with(".class") {
            count += 1;
        }
    }

    Ok(count)
}
