//! Circular project carousel.
//!
//! The carousel shows `page_size` consecutive items starting at `index`,
//! wrapping around the end of the list. `index` is not required to be a
//! multiple of the page size: dot navigation and viewport changes can leave
//! it at any offset, and every operation here tolerates that.
//!
//! When the item count is not a multiple of the page size the last page is
//! ragged. `prev` from index 0 lands on the ragged page's start, and the
//! visible window backfills it from the front of the list so a page always
//! holds exactly `page_size` items.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("dot {dot} is out of range ({count} dots)")]
    DotOutOfRange { dot: usize, count: usize },
}

/// Number of items visible at once. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub const MOBILE: PageSize = PageSize(1);
    pub const DESKTOP: PageSize = PageSize(3);

    pub fn new(size: usize) -> Result<Self, CarouselError> {
        if size == 0 {
            return Err(CarouselError::ZeroPageSize);
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for PageSize {
    type Error = CarouselError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let size = raw.trim().parse::<usize>().map_err(|e| e.to_string())?;
        Self::new(size).map_err(|e| e.to_string())
    }
}

// ============================================================================
// Index arithmetic
// ============================================================================

/// Indices of the visible window, in display order.
pub fn visible_indices(index: usize, page: PageSize, len: usize) -> impl Iterator<Item = usize> {
    (0..page.get()).map(move |offset| (index + offset) % len.max(1))
}

/// Items of the visible window. Always `page` items long for a non-empty list.
pub fn visible_window<T>(items: &[T], index: usize, page: PageSize) -> Vec<&T> {
    if items.is_empty() {
        return Vec::new();
    }
    visible_indices(index, page, items.len())
        .map(|i| &items[i])
        .collect()
}

/// An empty list always yields 0.
pub fn next_index(index: usize, page: PageSize, len: usize) -> usize {
    (index + page.get()) % len.max(1)
}

/// Start of the final (possibly ragged) page.
pub fn last_page_start(page: PageSize, len: usize) -> usize {
    let remainder = len % page.get();
    if remainder == 0 {
        len.saturating_sub(page.get())
    } else {
        len - remainder
    }
}

pub fn prev_index(index: usize, page: PageSize, len: usize) -> usize {
    if index == 0 {
        return last_page_start(page, len);
    }
    match index.checked_sub(page.get()) {
        Some(previous) => previous,
        // Offsets left behind by a page size change wrap instead of underflowing.
        None => (index + len - page.get() % len) % len,
    }
}

pub fn dot_count(page: PageSize, len: usize) -> usize {
    len.div_ceil(page.get())
}

pub fn active_dot(index: usize, page: PageSize) -> usize {
    index / page.get()
}

// ============================================================================
// Carousel
// ============================================================================

/// One pagination dot as the view renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub position: usize,
    pub start: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self, page: PageSize) {
        self.index = next_index(self.index, page, self.len);
        tracing::trace!(index = self.index, page = page.get(), "carousel next");
    }

    pub fn prev(&mut self, page: PageSize) {
        self.index = prev_index(self.index, page, self.len);
        tracing::trace!(index = self.index, page = page.get(), "carousel prev");
    }

    /// Jump straight to the first item of dot `dot`.
    pub fn select_dot(&mut self, dot: usize, page: PageSize) -> Result<(), CarouselError> {
        let count = dot_count(page, self.len);
        if dot >= count {
            return Err(CarouselError::DotOutOfRange { dot, count });
        }
        self.index = dot * page.get();
        tracing::trace!(index = self.index, dot, "carousel dot selected");
        Ok(())
    }

    pub fn visible<'a, T>(&self, items: &'a [T], page: PageSize) -> Vec<&'a T> {
        visible_window(items, self.index, page)
    }

    pub fn dots(&self, page: PageSize) -> impl Iterator<Item = Dot> {
        let active = active_dot(self.index, page);
        (0..dot_count(page, self.len)).map(move |position| Dot {
            position,
            start: position * page.get(),
            active: position == active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 6;

    #[test]
    fn window_always_holds_a_full_page() {
        let items: Vec<usize> = (0..N).collect();
        for page in [PageSize::MOBILE, PageSize::DESKTOP] {
            for index in 0..N {
                let window = visible_window(&items, index, page);
                assert_eq!(window.len(), page.get());
                assert!(window.iter().all(|item| **item < N));
            }
        }
    }

    #[test]
    fn window_wraps_across_the_end() {
        let items: Vec<usize> = (0..N).collect();
        let window: Vec<usize> = visible_window(&items, 5, PageSize::DESKTOP)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(window, vec![5, 0, 1]);
    }

    #[test]
    fn desktop_pages_cycle_between_two_starts() {
        assert_eq!(next_index(0, PageSize::DESKTOP, N), 3);
        assert_eq!(next_index(3, PageSize::DESKTOP, N), 0);
        assert_eq!(prev_index(0, PageSize::DESKTOP, N), 3);
        assert_eq!(prev_index(3, PageSize::DESKTOP, N), 0);
    }

    #[test]
    fn next_on_empty_list_stays_at_zero() {
        assert_eq!(next_index(0, PageSize::DESKTOP, 0), 0);
        assert_eq!(next_index(4, PageSize::MOBILE, 0), 0);
    }

    #[test]
    fn mobile_prev_from_start_goes_to_last_item() {
        assert_eq!(prev_index(0, PageSize::MOBILE, N), 5);
        for index in 0..N {
            let forward = next_index(index, PageSize::MOBILE, N);
            assert_eq!(prev_index(forward, PageSize::MOBILE, N), index);
        }
    }

    #[test]
    fn ragged_list_prev_lands_on_short_page() {
        // 7 items in pages of 3: starts are 0, 3, 6 and the last page has one item.
        assert_eq!(last_page_start(PageSize::DESKTOP, 7), 6);
        assert_eq!(prev_index(0, PageSize::DESKTOP, 7), 6);
        assert_eq!(prev_index(6, PageSize::DESKTOP, 7), 3);

        let items: Vec<usize> = (0..7).collect();
        let window: Vec<usize> = visible_window(&items, 6, PageSize::DESKTOP)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(window, vec![6, 0, 1]);
    }

    #[test]
    fn prev_from_offset_below_page_size_wraps() {
        // Reachable after mobile navigation to index 2 and a switch to desktop.
        assert_eq!(prev_index(2, PageSize::DESKTOP, N), 5);
        assert_eq!(prev_index(1, PageSize::new(8).unwrap(), N), 5);
    }

    #[test]
    fn dot_counts_follow_page_size() {
        assert_eq!(dot_count(PageSize::DESKTOP, N), 2);
        assert_eq!(dot_count(PageSize::MOBILE, N), 6);
        assert_eq!(dot_count(PageSize::DESKTOP, 7), 3);
    }

    #[test]
    fn selecting_a_dot_sets_its_start() {
        let mut carousel = Carousel::new(N).unwrap();
        carousel.select_dot(1, PageSize::DESKTOP).unwrap();
        assert_eq!(carousel.index(), 3);

        let active: Vec<bool> = carousel.dots(PageSize::DESKTOP).map(|d| d.active).collect();
        assert_eq!(active, vec![false, true]);

        let err = carousel.select_dot(2, PageSize::DESKTOP).unwrap_err();
        assert_eq!(err, CarouselError::DotOutOfRange { dot: 2, count: 2 });
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn unaligned_index_marks_its_containing_dot() {
        let mut carousel = Carousel::new(N).unwrap();
        carousel.select_dot(4, PageSize::MOBILE).unwrap();
        assert_eq!(active_dot(carousel.index(), PageSize::DESKTOP), 1);
        assert_eq!(
            carousel.visible(&[10, 11, 12, 13, 14, 15], PageSize::DESKTOP),
            vec![&14, &15, &10]
        );
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert_eq!(Carousel::new(0).unwrap_err(), CarouselError::Empty);
        assert_eq!(PageSize::new(0).unwrap_err(), CarouselError::ZeroPageSize);
        assert!("0".parse::<PageSize>().is_err());
        assert_eq!("3".parse::<PageSize>().unwrap(), PageSize::DESKTOP);
    }
}
