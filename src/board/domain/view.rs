//! Read-only projections rendered as columns and cards.
//!
//! Views hold no state of their own: they are recomputed from the
//! board's task collection on every render via a filter-by-status pass,
//! preserving fetch order without any sort.

use super::{BOARD_COLUMNS, CardAccent, CardId, Column, Task};

/// Placeholder affordance shown by a column with no cards.
pub const EMPTY_COLUMN_HINT: &str = "Drop a task here";

/// Presentation projection of one task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    id: CardId,
    title: String,
    description: Option<String>,
    accent: CardAccent,
}

impl CardView {
    /// Projects a task into its card presentation.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            accent: CardAccent::for_priority(task.priority()),
        }
    }

    /// Returns the card identity, used as the drag handle token.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the rendered title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the rendered description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority-coded accent.
    #[must_use]
    pub const fn accent(&self) -> CardAccent {
        self.accent
    }
}

/// Presentation projection of one status column and its cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    column: Column,
    cards: Vec<CardView>,
}

impl ColumnView {
    /// Projects the subset of `tasks` matching `column`, in list order.
    #[must_use]
    pub fn project(column: Column, tasks: &[Task]) -> Self {
        let cards = tasks
            .iter()
            .filter(|task| task.status() == column.status())
            .map(CardView::from_task)
            .collect();
        Self { column, cards }
    }

    /// Projects every static board column from the given task list.
    #[must_use]
    pub fn project_board(tasks: &[Task]) -> Vec<Self> {
        BOARD_COLUMNS
            .iter()
            .map(|column| Self::project(*column, tasks))
            .collect()
    }

    /// Returns the projected column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the projected cards in list order.
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    /// Returns `true` when the column has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the placeholder affordance when the column has no cards.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(EMPTY_COLUMN_HINT)
    }
}
