use cosmic_core::{Config, Telescope};
use cosmic_mast::{Gallery, GalleryItem, MastClient};

pub fn run(
    config: &Config,
    telescope: Telescope,
    limit: usize,
    filter: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let client = MastClient::new(config)?;
    let gallery = Gallery::new(client, config);
    let items = gallery.items(telescope, limit, filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{} Image Gallery", telescope.display_name());
    if items.is_empty() {
        println!("{}", empty_message(telescope, filter));
        return Ok(());
    }

    println!("Showing {} observations", items.len());
    for item in &items {
        println!();
        print_item(item);
    }
    Ok(())
}

fn empty_message(telescope: Telescope, filter: Option<&str>) -> String {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => format!("No observations found for {} matching '{}'", telescope, f),
        None => format!("No observations found for {}", telescope),
    }
}

fn print_item(item: &GalleryItem) {
    println!("{}", item.observation.display_target());
    match &item.preview_url {
        Some(url) => println!("  Preview: {}", url),
        None => println!("  Preview not available"),
    }
    if let Some(warning) = &item.warning {
        println!("  Warning: {}", warning);
    }
    for (label, value) in item.metadata.iter() {
        println!("  {}: {}", label, value);
    }
}
