use cosmic_apod::{parse_date, ApodClient};
use cosmic_core::{CanvasError, Config};

pub fn run(config: &Config, date: Option<&str>) -> anyhow::Result<()> {
    let date = date.map(parse_date).transpose()?;
    let client = ApodClient::new(config)?;

    let apod = match client.fetch(date) {
        Ok(apod) => apod,
        Err(e) => {
            if let Some(hint) = guidance(&e, config) {
                eprintln!("{}", hint);
            }
            return Err(e.into());
        }
    };

    println!("{}", apod.title);
    println!("{}", "=".repeat(apod.title.chars().count()));
    println!("Date:      {}", apod.date);
    println!("Copyright: {}", apod.copyright);
    if apod.is_image() {
        println!("Image:     {}", apod.url);
        println!("HD image:  {}", apod.hdurl);
    } else {
        println!("Media ({}): {}", apod.media_type, apod.url);
    }
    println!();
    println!("{}", apod.explanation);
    Ok(())
}

fn guidance(err: &CanvasError, config: &Config) -> Option<String> {
    if !err.is_actionable() {
        return None;
    }
    match err {
        CanvasError::Auth => Some(format!(
            "Current API key: {}. Set NASA_API_KEY or nasa_api_key in the config file.",
            config.masked_api_key()
        )),
        CanvasError::RateLimited if config.uses_demo_key() => Some(
            "DEMO_KEY is heavily rate limited; get a free key at https://api.nasa.gov".to_string(),
        ),
        CanvasError::RateLimited => Some("Wait a while before retrying.".to_string()),
        _ => None,
    }
}
