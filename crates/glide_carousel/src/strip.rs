//! Triplicated item strip
//!
//! The rendered strip is the item list repeated three times. Physical slot
//! `p` shows item `p % N`; the middle copy `[N, 2N)` is where the strip rests.

/// A display record shown in a carousel card
pub trait CarouselItem {
    /// Stable identity of the record
    fn key(&self) -> &str;
}

impl CarouselItem for String {
    fn key(&self) -> &str {
        self
    }
}

impl CarouselItem for &'static str {
    fn key(&self) -> &str {
        self
    }
}

/// Number of copies rendered back-to-back
pub const COPIES: usize = 3;

/// Immutable item list rendered as three consecutive copies
#[derive(Debug, Clone)]
pub struct Strip<T> {
    items: Vec<T>,
}

impl<T> Strip<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Logical item count `N`
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Physical slot count `3N`
    pub fn slot_count(&self) -> usize {
        self.items.len() * COPIES
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item index shown at `slot`
    pub fn item_index(&self, slot: usize) -> Option<usize> {
        (slot < self.slot_count()).then(|| slot % self.items.len())
    }

    /// Item shown at `slot`
    pub fn item_at(&self, slot: usize) -> Option<&T> {
        self.item_index(slot).map(|index| &self.items[index])
    }

    /// Every physical slot with its item, in render order
    pub fn slots(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.items
            .iter()
            .cycle()
            .take(self.slot_count())
            .enumerate()
    }

    /// Render every physical slot with `render`
    pub fn render_with<R>(&self, mut render: impl FnMut(usize, &T) -> R) -> Vec<R> {
        self.slots().map(|(slot, item)| render(slot, item)).collect()
    }
}

impl<T: CarouselItem> Strip<T> {
    /// Unique key of a physical slot, `"{item key}-{slot}"`
    pub fn slot_key(&self, slot: usize) -> Option<String> {
        self.item_at(slot)
            .map(|item| format!("{}-{}", item.key(), slot))
    }
}
