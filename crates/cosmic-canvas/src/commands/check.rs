use cosmic_apod::ApodClient;
use cosmic_core::Config;
use cosmic_mast::{ArchiveClient, Criteria, MastClient};

pub fn run(config: &Config) -> anyhow::Result<()> {
    println!("Cosmic Canvas - API connectivity");
    println!("================================");

    let results = [("NASA APOD", check_apod(config)), ("MAST", check_mast(config))];

    let mut failed = 0;
    for (service, result) in &results {
        match result {
            Ok(detail) => println!("✓ {}: {}", service, detail),
            Err(e) => {
                failed += 1;
                println!("✗ {}: {}", service, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} checks failed", failed, results.len());
    }
    println!("\nAll services reachable.");
    Ok(())
}

fn check_apod(config: &Config) -> anyhow::Result<String> {
    let apod = ApodClient::new(config)?.fetch(None)?;
    Ok(format!("today's title: {}", apod.title))
}

fn check_mast(config: &Config) -> anyhow::Result<String> {
    // One small page is enough to prove the service answers
    let quick = Config {
        archive_page_size: 5,
        archive_max_pages: 1,
        ..config.clone()
    };
    let rows = MastClient::new(&quick)?.query_criteria(&Criteria::images("JWST"))?;
    match rows.first().and_then(|r| cosmic_mast::cell_text(r, "target_name")) {
        Some(target) => Ok(format!("{} JWST rows, first target: {}", rows.len(), target)),
        None if rows.is_empty() => anyhow::bail!("MAST returned no observations"),
        None => Ok(format!("{} JWST rows", rows.len())),
    }
}
