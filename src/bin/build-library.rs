use anyhow::Result;
use smarts_hierarchy::*;
use tracing::*;

fn main() -> Result<()> {
    init_logging("info");
    let output_csv = "smarts_hierarchical_library.csv";

    let vocab = Vocabulary::new();
    let rows = generate_library(&vocab)?;
    info!("Generated {} unique substructures", rows.len());
    write_library_csv(&rows, output_csv)?;

    Ok(())
}
