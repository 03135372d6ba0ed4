//! Navigation state for one album.
//!
//! A single index says how many pages have been turned. Every per-page
//! property (flipped or not, stacking order, which page is visible on each
//! side of the hinge) is derived from it, so page clicks and the prev/next
//! controls can never disagree.

/// Stacking order shared by every turned page.
pub const FLIPPED_Z: usize = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlipAction {
    /// Turn the next page (the "next" control).
    Advance,
    /// Turn back the last turned page (the "prev" control).
    Retreat,
    /// A click on the page at this position.
    ToggleAt(usize),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FlipController {
    index: usize,
    pair_count: usize,
}

/// Pages visible on each side of the hinge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Spread {
    /// The most recently turned page, showing its back.
    pub turned: Option<usize>,
    /// The next page to turn, showing its front.
    pub open: Option<usize>,
}

impl FlipController {
    pub fn new(pair_count: usize) -> Self {
        Self {
            index: 0,
            pair_count,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Re-sync with the album after its page count changed.
    pub fn set_pair_count(&mut self, pair_count: usize) {
        self.pair_count = pair_count;
        self.index = self.index.min(pair_count);
    }

    pub fn flipped(&self, i: usize) -> bool {
        i < self.index
    }

    pub fn z_order(&self, i: usize) -> usize {
        if self.flipped(i) {
            FLIPPED_Z
        } else {
            self.pair_count.saturating_sub(i)
        }
    }

    pub fn is_closed(&self) -> bool {
        self.index == 0
    }

    pub fn is_finished(&self) -> bool {
        self.index == self.pair_count
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1).min(self.pair_count);
    }

    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// A click on page `i`: a turned page is turned back, an open page is
    /// turned forward. Positions past the last page are ignored.
    pub fn toggle_at(&mut self, i: usize) {
        if i >= self.pair_count {
            return;
        }
        if self.flipped(i) {
            self.retreat();
        } else {
            self.advance();
        }
    }

    pub fn rewind(&mut self) {
        self.index = 0;
    }

    /// Pure form of the transitions.
    pub fn apply(mut self, action: FlipAction) -> Self {
        match action {
            FlipAction::Advance => self.advance(),
            FlipAction::Retreat => self.retreat(),
            FlipAction::ToggleAt(i) => self.toggle_at(i),
        }
        self
    }

    /// Page positions in the order they must be painted: lowest stacking
    /// order first, later positions over earlier ones on ties.
    pub fn paint_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.pair_count).collect();
        order.sort_by_key(|&i| self.z_order(i));
        order
    }

    pub fn spread(&self) -> Spread {
        let mut spread = Spread::default();
        for i in self.paint_order() {
            if self.flipped(i) {
                spread.turned = Some(i);
            } else {
                spread.open = Some(i);
            }
        }
        spread
    }
}
