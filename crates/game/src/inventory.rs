//! Player inventory: a multiset of item identifiers.

/// Items held by the player's controller. Duplicates are allowed and order
/// is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        log::info!("inventory: added {item}");
        self.items.push(item);
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Remove one instance of `item`. Returns false if none was held.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(idx) = self.items.iter().position(|i| i == item) {
            self.items.remove(idx);
            log::info!("inventory: removed {item}");
            true
        } else {
            false
        }
    }

    pub fn count_of(&self, item: &str) -> usize {
        self.items.iter().filter(|i| i.as_str() == item).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
