//! # Category Store
//!
//! The ordered list of menu categories.
//!
//! ## Display Order
//! ```text
//!  before drag            reorder(2, Some(0))        after
//!  ───────────            ───────────────────        ─────
//!  1 Starters                                        1 Desserts
//!  2 Main Courses   ──►   remove index 2,      ──►   2 Starters
//!  3 Desserts             insert at 0,               3 Main Courses
//!  4 Drinks               renumber 1..N              4 Drinks
//! ```
//! `remove` leaves a gap in the numbering; the next reorder closes it.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult, Outcome};
use crate::types::{Category, CategoryId};
use crate::validation::validate_category_name;

/// Categories in display order.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    categories: Arc<Vec<Category>>,
    /// Highest id handed out or seeded; new ids always exceed it.
    last_id: CategoryId,
}

impl CategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        let last_id = categories.iter().map(|c| c.id).max().unwrap_or(0);
        CategoryStore {
            categories: Arc::new(categories),
            last_id,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Shares the current version of the list.
    pub fn snapshot(&self) -> Arc<Vec<Category>> {
        Arc::clone(&self.categories)
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Appends a category named `name` (trimmed).
    ///
    /// Blank names are ignored. The id comes from the current time in
    /// milliseconds.
    pub fn add(&mut self, name: &str) -> Outcome {
        self.add_at(name, Utc::now())
    }

    /// [`add`](Self::add) with an explicit creation time.
    ///
    /// Ids stay strictly increasing even when two categories are created in
    /// the same millisecond or the clock steps back.
    pub fn add_at(&mut self, name: &str, created_at: DateTime<Utc>) -> Outcome {
        self.try_add(name, created_at).into()
    }

    fn try_add(&mut self, name: &str, created_at: DateTime<Utc>) -> CoreResult<()> {
        let name = validate_category_name(name)?;

        let id = created_at.timestamp_millis().max(self.last_id + 1);
        let display_order = self.categories.len() as u32 + 1;

        Arc::make_mut(&mut self.categories).push(Category::new(id, name, display_order));
        self.last_id = id;
        Ok(())
    }

    /// Deletes the category with `id`.
    ///
    /// Remaining display orders are left as they are, and menu items that
    /// point at this category are not touched.
    pub fn remove(&mut self, id: CategoryId) -> Outcome {
        self.try_remove(id).into()
    }

    fn try_remove(&mut self, id: CategoryId) -> CoreResult<()> {
        if self.get(id).is_none() {
            return Err(CoreError::CategoryNotFound(id));
        }

        Arc::make_mut(&mut self.categories).retain(|category| category.id != id);
        Ok(())
    }

    /// Moves the category at `source_index` to `destination_index`.
    ///
    /// A `None` destination is a cancelled drag. Destinations past the end
    /// land at the end. Every display order is renumbered afterwards.
    pub fn reorder(&mut self, source_index: usize, destination_index: Option<usize>) -> Outcome {
        self.try_reorder(source_index, destination_index).into()
    }

    fn try_reorder(&mut self, source_index: usize, destination_index: Option<usize>) -> CoreResult<()> {
        let destination_index = destination_index.ok_or(CoreError::DragCancelled)?;
        let len = self.categories.len();
        if source_index >= len {
            return Err(CoreError::IndexOutOfRange {
                index: source_index,
                len,
            });
        }

        let categories = Arc::make_mut(&mut self.categories);
        let moved = categories.remove(source_index);
        let destination_index = destination_index.min(categories.len());
        categories.insert(destination_index, moved);

        for (position, category) in categories.iter_mut().enumerate() {
            category.display_order = position as u32 + 1;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
