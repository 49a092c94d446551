//! The selectable test catalog.

use serde::{Deserialize, Serialize};

/// One selectable entry in the test list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub selected: bool,
}

impl TestItem {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            selected: false,
        }
    }
}

/// Ordered catalog of runnable tests.
///
/// At most one item carries `selected` at a time; `select` clears every
/// item before setting the target.
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    items: Vec<TestItem>,
}

impl TestCatalog {
    /// Create a catalog from explicit items.
    pub fn new(items: Vec<TestItem>) -> Self {
        Self { items }
    }

    /// The built-in catalog of UI tests.
    pub fn builtin() -> Self {
        Self::new(vec![
            TestItem::new("search-test", "Search", "Query the search page and verify results"),
            TestItem::new("login-test", "Login", "Sign in with valid credentials"),
            TestItem::new("checkout-test", "Checkout", "Add to cart and complete a purchase"),
            TestItem::new("smoke-test", "Smoke", "Load every top-level page"),
        ])
    }

    pub fn items(&self) -> &[TestItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&TestItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Check whether a test id exists in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The currently selected item, if any.
    pub fn selected(&self) -> Option<&TestItem> {
        self.items.iter().find(|item| item.selected)
    }

    /// Index of the currently selected item, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }

    /// Select the item at `index`, clearing every other selection first.
    /// Out-of-range indices leave the catalog unchanged.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        for item in &mut self.items {
            item.selected = false;
        }
        self.items[index].selected = true;
    }

    /// Move the selection down, starting from the top when nothing is
    /// selected. Stops at the last item.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.select(next);
    }

    /// Move the selection up. Stops at the first item.
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let prev = match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select(prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_default_test() {
        let catalog = TestCatalog::builtin();
        assert!(catalog.contains("search-test"));
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut catalog = TestCatalog::builtin();
        catalog.select(1);
        catalog.select(3);

        let selected: Vec<_> = catalog.items().iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(catalog.selected_index(), Some(3));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut catalog = TestCatalog::builtin();
        catalog.select(1);
        catalog.select(99);
        assert_eq!(catalog.selected_index(), Some(1));
    }

    #[test]
    fn test_select_next_and_prev_clamp() {
        let mut catalog = TestCatalog::builtin();
        catalog.select_prev();
        assert_eq!(catalog.selected_index(), Some(0));

        for _ in 0..10 {
            catalog.select_next();
        }
        assert_eq!(catalog.selected_index(), Some(catalog.len() - 1));

        for _ in 0..10 {
            catalog.select_prev();
        }
        assert_eq!(catalog.selected_index(), Some(0));
    }
}
