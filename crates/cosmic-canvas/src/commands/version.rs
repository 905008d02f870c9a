use cosmic_core::Telescope;

fn collections() -> Vec<String> {
    Telescope::all()
        .iter()
        .map(|t| format!("{} ({})", t.collection(), t.display_name()))
        .collect()
}

pub fn run() -> anyhow::Result<()> {
    println!("cosmic-canvas {}", env!("CARGO_PKG_VERSION"));
    println!("collections: {}", collections().join(", "));
    Ok(())
}
