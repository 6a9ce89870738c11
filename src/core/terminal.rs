//! Terminal size plumbing for the histogram bar budget.
//!
//! Only the CLI reads the environment; renderers get the result through
//! [`Config`](crate::core::config::Config).

use terminal_size::{Width, terminal_size};

use crate::core::constants::{DEFAULT_MAX_BAR_LENGTH, TERMINAL_MARGIN};

/// Columns of the attached terminal, `None` when headless.
#[inline]
#[must_use]
pub fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| usize::from(w))
}

/// Bar length that fits `columns` once the key/percentage margin is taken off.
#[inline]
#[must_use]
pub fn bar_budget(columns: usize) -> usize {
    columns.saturating_sub(TERMINAL_MARGIN)
}

/// Bar budget for the current terminal, or the default when none is attached.
#[inline]
#[must_use]
pub fn max_bar_length() -> usize {
    terminal_width().map_or(DEFAULT_MAX_BAR_LENGTH, bar_budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_subtracts_margin() {
        assert_eq!(bar_budget(80), 60);
        assert_eq!(bar_budget(TERMINAL_MARGIN), 0);
    }

    #[test]
    fn budget_saturates_on_narrow_terminals() {
        assert_eq!(bar_budget(7), 0);
    }
}
