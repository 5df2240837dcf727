//! Pure carousel state: the item list and the active index.

/// One card in the carousel, fixed at initialization
#[derive(Debug, Clone, PartialEq)]
pub struct SlideItem {
    pub id: u64,
    pub title: String,
}

impl SlideItem {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Item list plus active index, with wraparound stepping.
///
/// The active index is always valid while the list is non-empty; every
/// mutation keeps it in `[0, len)`.
#[derive(Debug, Clone)]
pub struct SliderCore {
    items: Vec<SlideItem>,
    active: usize,
}

impl SliderCore {
    /// Create a core positioned on the first item
    pub fn new(items: Vec<SlideItem>) -> Self {
        Self { items, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    /// Step forward one item, wrapping from the last back to the first
    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.active = (self.active + 1) % self.items.len();
    }

    /// Step back one item, wrapping from the first to the last
    pub fn retreat(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.active = (self.active + self.items.len() - 1) % self.items.len();
    }

    /// Land on an index, taken modulo the item count
    pub fn jump_to(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.active = index.rem_euclid(self.items.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_items() -> Vec<SlideItem> {
        (0..5).map(|i| SlideItem::new(i, format!("Certificate {i}"))).collect()
    }

    #[test]
    fn advances_in_sequence() {
        let mut core = SliderCore::new(five_items());
        assert_eq!(core.active(), 0);

        core.advance();
        core.advance();
        core.advance();
        assert_eq!(core.active(), 3);
    }

    #[test]
    fn advance_wraps_from_last_to_first() {
        let mut core = SliderCore::new(five_items());
        core.jump_to(4);

        core.advance();
        assert_eq!(core.active(), 0);
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut core = SliderCore::new(five_items());

        core.retreat();
        assert_eq!(core.active(), 4);
    }

    #[test]
    fn jump_lands_modulo_len() {
        let mut core = SliderCore::new(five_items());

        core.jump_to(7);
        assert_eq!(core.active(), 2);

        core.jump_to(5);
        assert_eq!(core.active(), 0);

        core.jump_to(3);
        assert_eq!(core.active(), 3);
    }

    #[test]
    fn empty_core_ignores_all_steps() {
        let mut core = SliderCore::new(Vec::new());

        core.advance();
        core.retreat();
        core.jump_to(3);
        assert_eq!(core.active(), 0);
        assert!(core.is_empty());
    }

    #[test]
    fn single_item_stays_put() {
        let mut core = SliderCore::new(vec![SlideItem::new(1, "Only")]);

        core.advance();
        assert_eq!(core.active(), 0);
        core.retreat();
        assert_eq!(core.active(), 0);
    }
}
