use anyhow::{anyhow, Context, Result};
use clap::{crate_version, App as Cli, Arg};
use number_picker::app::App;
use number_picker::config::Config;
use number_picker::ui::Theme;

fn main() -> Result<()> {
    let matches = Cli::new("number-picker")
        .version(crate_version!())
        .about("A themed three-wheel number picker for the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Color theme to start with")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("value")
                .long("value")
                .value_name("N")
                .help("Value between 0 and 999 to start at")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    if let Some(theme) = matches.value_of("theme") {
        if Theme::from_name(theme).is_none() {
            return Err(anyhow!(
                "Unknown theme '{}', expected one of: {}",
                theme,
                Theme::available_themes().join(", ")
            ));
        }
        config.theme_name = theme.to_string();
    }
    if let Some(value) = matches.value_of("value") {
        config.initial_value = value
            .parse()
            .with_context(|| format!("Invalid start value '{}'", value))?;
        config.validate()?;
    }

    App::start(config)?;
    Ok(())
}
