//! # Menu Item Store
//!
//! Menu items grouped by category name.
//!
//! ## Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  groups (creation order)                                                │
//! │                                                                         │
//! │  "Starters"      ──► [ Nachos, Chicken Wings ]                          │
//! │  "Main Courses"  ──► [ Fish Tacos, Beach Burger ]                       │
//! │  "Drinks"        ──► [ Mojito, Piña Colada ]                            │
//! │                                                                         │
//! │  The group key is the category NAME at the time the item was added.    │
//! │  MenuItem.category_id is whatever the item was created with; moving    │
//! │  an item to another group does not rewrite it.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{CoreError, CoreResult, Outcome};
use crate::types::{Category, MenuGroup, MenuItem, MenuItemDraft};
use crate::validation::{clean_entries, parse_category_id, parse_price, validate_required};

/// Generates an id for an item added at runtime.
pub fn generate_menu_item_id() -> String {
    format!("item-{}", Uuid::new_v4())
}

/// Menu groups in creation order.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    groups: Arc<Vec<MenuGroup>>,
}

impl MenuStore {
    pub fn new(groups: Vec<MenuGroup>) -> Self {
        MenuStore {
            groups: Arc::new(groups),
        }
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Shares the current version of the groups.
    pub fn snapshot(&self) -> Arc<Vec<MenuGroup>> {
        Arc::clone(&self.groups)
    }

    pub fn group(&self, category_name: &str) -> Option<&MenuGroup> {
        self.groups
            .iter()
            .find(|group| group.category_name == category_name)
    }

    /// Items of a group, empty if the group does not exist.
    pub fn items(&self, category_name: &str) -> &[MenuItem] {
        self.group(category_name)
            .map(|group| group.items.as_slice())
            .unwrap_or(&[])
    }

    /// Number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    fn group_index(&self, category_name: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.category_name == category_name)
    }

    /// Adds an item from the form draft.
    ///
    /// ## Behavior
    /// ```text
    /// name, price, category blank? ──► ignored
    /// price not a decimal ≥ 0?     ──► ignored
    /// category id not in list?     ──► ignored
    /// otherwise ──► new id, appended to the group named after the category
    ///               (group created at the end if missing)
    /// ```
    pub fn add(&mut self, draft: &MenuItemDraft, categories: &[Category]) -> Outcome {
        self.try_add(draft, categories).into()
    }

    fn try_add(&mut self, draft: &MenuItemDraft, categories: &[Category]) -> CoreResult<()> {
        let name = validate_required("name", &draft.name)?;
        let price = parse_price(&draft.price)?;
        let category_id = parse_category_id(&draft.category_id)?;

        let category = categories
            .iter()
            .find(|category| category.id == category_id)
            .ok_or(CoreError::CategoryNotFound(category_id))?;

        let item = MenuItem {
            id: generate_menu_item_id(),
            name: name.to_string(),
            price,
            category_id,
            choices: clean_entries(&draft.choices),
            additions: clean_entries(&draft.additions),
            removals: clean_entries(&draft.removals),
        };

        let index = self.ensure_group(&category.name);
        Arc::make_mut(&mut self.groups)[index].items.push(item);
        Ok(())
    }

    /// Removes the item `item_id` from the group `category_name`.
    ///
    /// The group stays even when it becomes empty.
    pub fn remove(&mut self, category_name: &str, item_id: &str) -> Outcome {
        self.try_remove(category_name, item_id).into()
    }

    fn try_remove(&mut self, category_name: &str, item_id: &str) -> CoreResult<()> {
        let group_index = self
            .group_index(category_name)
            .ok_or_else(|| CoreError::GroupNotFound(category_name.to_string()))?;
        let item_index = self.groups[group_index]
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| CoreError::MenuItemNotFound {
                group: category_name.to_string(),
                item_id: item_id.to_string(),
            })?;

        Arc::make_mut(&mut self.groups)[group_index]
            .items
            .remove(item_index);
        Ok(())
    }

    /// Moves an item within a group or across groups.
    ///
    /// The destination group is created if it has no entry yet. Destination
    /// indexes past the end append. The moved item keeps its `category_id`.
    pub fn reorder(
        &mut self,
        source_group: &str,
        source_index: usize,
        destination_group: &str,
        destination_index: usize,
    ) -> Outcome {
        self.try_reorder(source_group, source_index, destination_group, destination_index)
            .into()
    }

    fn try_reorder(
        &mut self,
        source_group: &str,
        source_index: usize,
        destination_group: &str,
        destination_index: usize,
    ) -> CoreResult<()> {
        let source = self
            .group_index(source_group)
            .ok_or_else(|| CoreError::GroupNotFound(source_group.to_string()))?;
        let len = self.groups[source].items.len();
        if source_index >= len {
            return Err(CoreError::IndexOutOfRange {
                index: source_index,
                len,
            });
        }

        let destination = self.ensure_group(destination_group);
        let groups = Arc::make_mut(&mut self.groups);
        let moved = groups[source].items.remove(source_index);
        let items = &mut groups[destination].items;
        let destination_index = destination_index.min(items.len());
        items.insert(destination_index, moved);
        Ok(())
    }

    /// Index of the group for `category_name`, appending an empty one if needed.
    fn ensure_group(&mut self, category_name: &str) -> usize {
        match self.group_index(category_name) {
            Some(index) => index,
            None => {
                let groups = Arc::make_mut(&mut self.groups);
                groups.push(MenuGroup::new(category_name, Vec::new()));
                groups.len() - 1
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(1, "Starters", 1),
            Category::new(2, "Main Courses", 2),
            Category::new(3, "Desserts", 3),
            Category::new(4, "Drinks", 4),
        ]
    }

    fn item(id: &str, name: &str, cents: i64, category_id: i64) -> MenuItem {
        MenuItem::new(id, name, Money::from_cents(cents), category_id)
    }

    fn sample_store() -> MenuStore {
        MenuStore::new(vec![
            MenuGroup::new(
                "Starters",
                vec![
                    item("item-1", "Nachos", 899, 1),
                    item("item-2", "Chicken Wings", 1099, 1),
                ],
            ),
            MenuGroup::new(
                "Drinks",
                vec![
                    item("item-5", "Mojito", 799, 4),
                    item("item-6", "Piña Colada", 899, 4),
                ],
            ),
        ])
    }

    fn item_ids(store: &MenuStore, group: &str) -> Vec<String> {
        store.items(group).iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_add_appends_to_category_group() {
        let mut store = sample_store();
        let draft = MenuItemDraft::new("Calamari", "9.50", "1");

        assert!(store.add(&draft, &categories()).is_applied());

        let added = store.items("Starters").last().unwrap();
        assert_eq!(added.name, "Calamari");
        assert_eq!(added.price, Money::from_cents(950));
        assert_eq!(added.category_id, 1);
        assert!(added.id.starts_with("item-"));
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn test_add_creates_missing_group_at_end() {
        let mut store = sample_store();
        let draft = MenuItemDraft::new("Gelato", "4", "3");

        store.add(&draft, &categories());

        let names: Vec<&str> = store.groups().iter().map(|g| g.category_name.as_str()).collect();
        assert_eq!(names, vec!["Starters", "Drinks", "Desserts"]);
        assert_eq!(store.items("Desserts").len(), 1);
    }

    #[test]
    fn test_add_keeps_cleaned_modifiers() {
        let mut store = sample_store();
        let draft = MenuItemDraft::new("Beach Burger", "12.99", "2")
            .with_choices(vec!["Medium".into(), "".into(), "Well done".into()])
            .with_additions(vec![" Bacon ".into()])
            .with_removals(vec!["Onions".into(), "  ".into()]);

        store.add(&draft, &categories());

        let burger = &store.items("Main Courses")[0];
        assert_eq!(burger.choices, vec!["Medium", "Well done"]);
        assert_eq!(burger.additions, vec!["Bacon"]);
        assert_eq!(burger.removals, vec!["Onions"]);
    }

    #[test]
    fn test_add_unknown_category_changes_nothing() {
        let mut store = sample_store();
        let before = store.groups().to_vec();

        let outcome = store.add(&MenuItemDraft::new("Ghost", "1.00", "77"), &categories());

        assert_eq!(outcome.ignored_reason(), Some(&CoreError::CategoryNotFound(77)));
        assert_eq!(store.groups(), before.as_slice());
    }

    #[test]
    fn test_add_requires_every_field() {
        let mut store = sample_store();
        let drafts = [
            MenuItemDraft::new("", "1.00", "1"),
            MenuItemDraft::new("Soup", "", "1"),
            MenuItemDraft::new("Soup", "1.00", ""),
            MenuItemDraft::new("Soup", "free", "1"),
            MenuItemDraft::new("Soup", "-1", "1"),
        ];

        for draft in &drafts {
            assert!(!store.add(draft, &categories()).is_applied(), "{:?}", draft);
        }
        assert_eq!(store.item_count(), 4);
    }

    #[test]
    fn test_add_blank_name_is_ignored_and_names_are_trimmed() {
        let mut store = sample_store();

        let outcome = store.add(&MenuItemDraft::new("   ", "3.00", "1"), &categories());
        assert_eq!(
            outcome.ignored_reason(),
            Some(&CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            }))
        );
        assert_eq!(store.item_count(), 4);

        assert!(store
            .add(&MenuItemDraft::new("  Calamari \t", "9.50", " 1 "), &categories())
            .is_applied());
        assert_eq!(store.items("Starters").last().unwrap().name, "Calamari");
    }

    #[test]
    fn test_remove_item() {
        let mut store = sample_store();

        assert!(store.remove("Starters", "item-1").is_applied());

        assert_eq!(item_ids(&store, "Starters"), vec!["item-2"]);
    }

    #[test]
    fn test_remove_keeps_empty_group() {
        let mut store = sample_store();

        store.remove("Drinks", "item-5");
        store.remove("Drinks", "item-6");

        assert!(store.group("Drinks").unwrap().items.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = sample_store();

        assert!(!store.remove("Desserts", "item-1").is_applied());
        assert!(!store.remove("Starters", "item-9").is_applied());
        assert_eq!(store.item_count(), 4);
    }

    #[test]
    fn test_reorder_within_group() {
        let mut store = sample_store();

        assert!(store.reorder("Starters", 0, "Starters", 1).is_applied());

        assert_eq!(item_ids(&store, "Starters"), vec!["item-2", "item-1"]);
    }

    #[test]
    fn test_reorder_across_groups() {
        let mut store = sample_store();

        store.reorder("Starters", 0, "Drinks", 1);

        assert_eq!(item_ids(&store, "Starters"), vec!["item-2"]);
        assert_eq!(item_ids(&store, "Drinks"), vec!["item-5", "item-1", "item-6"]);
        assert_eq!(store.item_count(), 4);
    }

    #[test]
    fn test_reorder_does_not_rewrite_category_id() {
        let mut store = sample_store();

        store.reorder("Starters", 0, "Drinks", 0);

        // Pinned: the moved item still points at Starters
        let moved = &store.items("Drinks")[0];
        assert_eq!(moved.id, "item-1");
        assert_eq!(moved.category_id, 1);
    }

    #[test]
    fn test_reorder_into_new_group() {
        let a = item("item-a", "A", 100, 1);
        let mut store = MenuStore::new(vec![MenuGroup::new("Starters", vec![a.clone()])]);

        store.reorder("Starters", 0, "Drinks", 0);

        assert_eq!(
            store.groups(),
            &[
                MenuGroup::new("Starters", vec![]),
                MenuGroup::new("Drinks", vec![a]),
            ]
        );
    }

    #[test]
    fn test_reorder_bad_source_is_noop() {
        let mut store = sample_store();
        let before = store.groups().to_vec();

        assert!(!store.reorder("Desserts", 0, "Drinks", 0).is_applied());
        assert!(!store.reorder("Starters", 5, "Drinks", 0).is_applied());

        // A failed move must not leave a new destination group behind
        assert!(!store.reorder("Starters", 5, "Specials", 0).is_applied());
        assert_eq!(store.groups(), before.as_slice());
    }

    #[test]
    fn test_reorder_destination_past_end_appends() {
        let mut store = sample_store();

        store.reorder("Starters", 0, "Starters", 10);

        assert_eq!(item_ids(&store, "Starters"), vec!["item-2", "item-1"]);
    }
}
