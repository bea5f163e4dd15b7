//! Registry of parameter providers, built once per process.

use super::{AgentParameterProvider, ParameterProvider};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

pub struct ProviderRegistry {
    providers: HashMap<&'static str, Arc<dyn ParameterProvider>>,
}

impl ProviderRegistry {
    /// Registry with every built-in provider.
    pub fn load() -> Self {
        let mut registry = Self {
            providers: HashMap::new(),
        };
        registry.register(Arc::new(AgentParameterProvider));
        registry
    }

    /// Process-wide registry, initialized on first use.
    pub fn global() -> &'static ProviderRegistry {
        static REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::load)
    }

    pub fn register(&mut self, provider: Arc<dyn ParameterProvider>) {
        self.providers.insert(provider.symbol(), provider);
    }

    pub fn get(&self, symbol: &str) -> Option<Arc<dyn ParameterProvider>> {
        self.providers.get(symbol).cloned()
    }

    /// Shortcut for the agent parameter provider, always registered.
    pub fn agent(&self) -> Arc<dyn ParameterProvider> {
        self.get(AgentParameterProvider.symbol())
            .unwrap_or_else(|| Arc::new(AgentParameterProvider))
    }

    /// List all registered symbols
    pub fn list_available(&self) -> Vec<&'static str> {
        let mut symbols: Vec<_> = self.providers.keys().copied().collect();
        symbols.sort();
        symbols
    }
}
