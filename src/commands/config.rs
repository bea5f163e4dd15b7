use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Validate one explicit file, or every config source for the working
/// directory.
pub fn validate(file: Option<&Path>) -> Result<()> {
    if let Some(path) = file {
        println!("Validating {}...", path.display());
        return report(Config::load_file(path));
    }

    let cwd = std::env::current_dir()?;
    println!("Validating configuration files...\n");

    for path in Config::sources(&cwd) {
        if path.exists() {
            println!("  Found: {}", path.display());
        } else {
            println!("  {} - not found (optional)", path.display());
        }
    }

    // Loading the merged config parses every file that exists
    println!("\nLoading and validating configuration...");
    report(Config::load(&cwd))
}

fn report(result: Result<Config>) -> Result<()> {
    match result {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

pub fn show(config: &Config) -> Result<()> {
    println!("Effective Configuration:");
    println!("(CLI > Environment > Project config > Global config > Defaults)\n");

    println!("Inventory:");
    if config.inventory.computers.is_empty() {
        println!("  (no computers configured, only master is offered)");
    } else {
        for computer in &config.inventory.computers {
            println!("  - {}", computer);
        }
    }

    println!("\nStore:");
    println!("  dir: {}", config.store_dir().display());

    Ok(())
}
