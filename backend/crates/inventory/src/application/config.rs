//! Inventory Configuration

/// Products per dashboard page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Inventory settings
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Products per dashboard page
    pub page_size: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
