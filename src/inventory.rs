//! Node inventory: the agents currently known to the build platform.

/// Source of agent display names, queried on every list render.
pub trait Inventory {
    fn computer_names(&self) -> Vec<String>;
}

/// Inventory fixed at startup from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticInventory {
    computers: Vec<String>,
}

impl StaticInventory {
    pub fn new(computers: Vec<String>) -> Self {
        Self { computers }
    }

    /// Parse a comma-separated list, skipping blank entries.
    pub fn from_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl Inventory for StaticInventory {
    fn computer_names(&self) -> Vec<String> {
        self.computers.clone()
    }
}
