use std::cmp::Ordering;

use strum::Display;

use crate::repository::Quiz;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortColumn {
    Number,
    Name,
    Category,
}

/// The active column ordering of the quiz table. Display-only: it never
/// touches the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn toggle(&self, column: SortColumn) -> Self {
        if self.column == column {
            let new_direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };

            Self {
                column,
                direction: new_direction,
            }
        } else {
            // A different column than the currently sorted one has been selected
            Self {
                column,
                ..Default::default()
            }
        }
    }

    /// Display ordering of two quizzes under this sort state. The text
    /// columns compare case-insensitively.
    pub fn ordering(&self, a: &Quiz, b: &Quiz) -> Ordering {
        let ordering = match self.column {
            SortColumn::Number => a.number().cmp(&b.number()),
            SortColumn::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortColumn::Category => a
                .category()
                .to_lowercase()
                .cmp(&b.category().to_lowercase()),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Number,
            direction: SortDirection::Ascending,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let state = SortState::default();

        let toggled = state.toggle(SortColumn::Number);

        assert_eq!(toggled.column, SortColumn::Number);
        assert_eq!(toggled.direction, SortDirection::Descending);
        assert_eq!(
            toggled.toggle(SortColumn::Number).direction,
            SortDirection::Ascending
        );
    }

    #[test]
    fn test_toggle_new_column_starts_ascending() {
        let state = SortState {
            column: SortColumn::Name,
            direction: SortDirection::Descending,
        };

        let toggled = state.toggle(SortColumn::Category);

        assert_eq!(toggled.column, SortColumn::Category);
        assert_eq!(toggled.direction, SortDirection::Ascending);
    }
}
