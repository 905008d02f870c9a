use cosmic_core::{comparison_pairs, find_comparison};

pub fn run(name: Option<&str>) -> anyhow::Result<()> {
    let Some(name) = name else {
        println!("Comparison pairs");
        println!("================");
        for pair in comparison_pairs() {
            println!("  {}", pair.name);
        }
        return Ok(());
    };

    let pair = find_comparison(name).ok_or_else(|| {
        let available: Vec<_> = comparison_pairs().iter().map(|p| p.name).collect();
        anyhow::anyhow!(
            "no comparison for '{}'. Available: {}",
            name,
            available.join(", ")
        )
    })?;

    println!("{}", pair.name);
    println!("  JWST: {}", pair.jwst_url);
    println!("  HST:  {}", pair.hst_url);
    Ok(())
}
