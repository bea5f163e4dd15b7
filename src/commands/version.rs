use crate::error::Result;
use crate::provider::ProviderRegistry;
use crate::version;

pub fn execute() -> Result<()> {
    println!("{} {}", version::PKG_NAME, version::VERSION);

    let registry = ProviderRegistry::global();
    println!("\nParameter providers:");
    for symbol in registry.list_available() {
        if let Some(provider) = registry.get(symbol) {
            println!("  {:<16} {}", symbol, provider.display_name());
        }
    }

    Ok(())
}
