//! Screen geometry of the carousel pane and mouse hit-testing.
//!
//! Rows and columns are 1-indexed, matching the cursor positioning used by
//! the renderer.
//!
//! ```text
//! row 1            [blank]
//! row 2            [Header]
//! row 3            [Border]
//! rows 4..=r-5     [Cards]
//! row r-4          [ ‹ ]   ● ○ ○ ○   [ › ]
//! row r-3          [Progress bar]
//! row r-2          [Border]
//! row r-1          [Footer]
//! ```

/// First row of the card area.
const CARDS_TOP: usize = 4;

/// Rows below the card area: navigation, progress, border, footer and one spare.
const ROWS_BELOW_CARDS: usize = 5;

/// Width of a navigation button, e.g. ` ‹ `.
const BUTTON_WIDTH: usize = 3;

/// An inclusive span of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// First row.
    pub top: usize,
    /// Last row, inclusive. Smaller than `top` when the span is empty.
    pub bottom: usize,
}

impl RowSpan {
    /// Number of rows in the span.
    #[must_use]
    pub const fn height(&self) -> usize {
        (self.bottom + 1).saturating_sub(self.top)
    }

    /// Returns `true` if `row` lies in the span.
    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        row >= self.top && row <= self.bottom
    }
}

/// A span of columns starting at `left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColSpan {
    /// First column.
    pub left: usize,
    /// Number of columns.
    pub width: usize,
}

impl ColSpan {
    /// Returns `true` if `col` lies in the span.
    #[must_use]
    pub const fn contains(&self, col: usize) -> bool {
        col >= self.left && col < self.left + self.width
    }
}

/// What sits under a mouse position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The "previous" button.
    Previous,
    /// The "next" button.
    Next,
    /// The indicator dot of the given item.
    Indicator(usize),
    /// The card area, where drags start.
    Cards,
    /// Any other part of the carousel block (navigation row, progress bar).
    Carousel,
    /// Header, footer or borders.
    Outside,
}

impl Hit {
    /// Returns `true` for every part of the carousel block.
    #[must_use]
    pub const fn is_carousel(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// Geometry of one frame, derived from the pane size and the carousel shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Pane width.
    pub cols: usize,
    /// Header row.
    pub header_row: usize,
    /// Border below the header.
    pub header_border_row: usize,
    /// Rows holding the cards.
    pub cards: RowSpan,
    /// One column span per visible card.
    pub card_columns: Vec<ColSpan>,
    /// Row with the buttons and indicator dots.
    pub nav_row: usize,
    /// "Previous" button columns.
    pub previous_button: ColSpan,
    /// "Next" button columns.
    pub next_button: ColSpan,
    /// Column of each indicator dot, one per item.
    pub indicator_columns: Vec<usize>,
    /// Progress bar row.
    pub progress_row: usize,
    /// Border above the footer.
    pub footer_border_row: usize,
    /// Footer row.
    pub footer_row: usize,
}

impl Layout {
    /// Computes the layout for a `rows` x `cols` pane showing `visible_count`
    /// cards out of `item_count` items.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, visible_count: usize, item_count: usize) -> Self {
        let cards = RowSpan {
            top: CARDS_TOP,
            bottom: rows.saturating_sub(ROWS_BELOW_CARDS),
        };

        let visible_count = visible_count.max(1);
        let card_width = cols / visible_count;
        let card_columns = (0..visible_count)
            .map(|i| ColSpan {
                left: i * card_width + 1,
                width: card_width,
            })
            .collect();

        let dots_width = (item_count * 2).saturating_sub(1);
        let dots_left = cols.saturating_sub(dots_width) / 2 + 1;
        let indicator_columns = (0..item_count).map(|i| dots_left + i * 2).collect();

        Self {
            cols,
            header_row: 2,
            header_border_row: 3,
            cards,
            card_columns,
            nav_row: rows.saturating_sub(4),
            previous_button: ColSpan {
                left: 2,
                width: BUTTON_WIDTH,
            },
            next_button: ColSpan {
                left: cols.saturating_sub(BUTTON_WIDTH),
                width: BUTTON_WIDTH,
            },
            indicator_columns,
            progress_row: rows.saturating_sub(3),
            footer_border_row: rows.saturating_sub(2),
            footer_row: rows.saturating_sub(1),
        }
    }

    /// Resolves a Zellij mouse position (0-based line and column, relative to
    /// the pane) to the element under it.
    #[must_use]
    pub fn hit_test(&self, line: isize, col: usize) -> Hit {
        let Ok(line) = usize::try_from(line) else {
            return Hit::Outside;
        };
        let (row, col) = (line + 1, col + 1);

        if self.cards.contains(row) {
            return Hit::Cards;
        }

        if row == self.nav_row {
            if self.previous_button.contains(col) {
                return Hit::Previous;
            }
            if self.next_button.contains(col) {
                return Hit::Next;
            }
            if let Some(index) = self.indicator_columns.iter().position(|&c| c == col) {
                return Hit::Indicator(index);
            }
            return Hit::Carousel;
        }

        if row == self.progress_row {
            return Hit::Carousel;
        }

        Hit::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stack_from_header_to_footer() {
        let layout = Layout::compute(24, 80, 2, 4);
        assert_eq!(layout.cards, RowSpan { top: 4, bottom: 19 });
        assert_eq!(layout.nav_row, 20);
        assert_eq!(layout.progress_row, 21);
        assert_eq!(layout.footer_border_row, 22);
        assert_eq!(layout.footer_row, 23);
    }

    #[test]
    fn cards_split_width_evenly() {
        let layout = Layout::compute(24, 90, 3, 4);
        let lefts: Vec<usize> = layout.card_columns.iter().map(|c| c.left).collect();
        assert_eq!(lefts, vec![1, 31, 61]);
        assert!(layout.card_columns.iter().all(|c| c.width == 30));
    }

    #[test]
    fn dots_are_centered_two_columns_apart() {
        let layout = Layout::compute(24, 80, 1, 4);
        // 4 dots take 7 columns: (80 - 7) / 2 + 1 = 37.
        assert_eq!(layout.indicator_columns, vec![37, 39, 41, 43]);
    }

    #[test]
    fn hit_test_finds_controls() {
        let layout = Layout::compute(24, 80, 1, 4);
        let nav_line = (layout.nav_row - 1) as isize;

        assert_eq!(layout.hit_test(nav_line, 1), Hit::Previous);
        assert_eq!(layout.hit_test(nav_line, 78), Hit::Next);
        assert_eq!(layout.hit_test(nav_line, 38), Hit::Indicator(1));
        assert_eq!(layout.hit_test(nav_line, 39), Hit::Carousel);
        assert_eq!(layout.hit_test(5, 10), Hit::Cards);
        assert_eq!(layout.hit_test(1, 10), Hit::Outside);
        assert_eq!(layout.hit_test(-3, 10), Hit::Outside);
        assert!(Hit::Cards.is_carousel());
        assert!(!Hit::Outside.is_carousel());
    }

    #[test]
    fn tiny_pane_has_empty_card_area() {
        let layout = Layout::compute(6, 20, 1, 2);
        assert_eq!(layout.cards.height(), 0);
        assert!(!layout.cards.contains(4));
    }
}
