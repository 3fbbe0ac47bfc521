use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::editor::edit_file;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            header("Current configuration");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}; run `watercooler init` first.",
                    path.display()
                ));
                return Ok(());
            }

            let used = edit_file(&path, editor.as_deref())?;
            // re-read to catch syntax errors right away
            Config::load_from(&path)?;
            success(format!("Configuration file edited successfully using '{used}'"));
        }
    }

    Ok(())
}
