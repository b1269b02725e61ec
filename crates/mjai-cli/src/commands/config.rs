//! Config command implementation.

use mortal_config::Config;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    show(&config, json)
}

fn show(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Loaded config: {}", config.path().display());
    if json {
        println!("{}", serde_json::to_string_pretty(config.table())?);
    } else {
        print!("{}", toml::to_string_pretty(config.table())?);
    }
    Ok(())
}
