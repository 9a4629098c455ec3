//! Frontier queue driving breadth-first expansion
//!
//! Items come out in exactly the order they went in. Seeds all carry the same
//! depth and every expansion pushes items one level shallower, so FIFO order
//! is enough to finish a depth level before starting the next.

use std::collections::VecDeque;

/// An address waiting to be handled, tagged with how many more levels may be
/// expanded beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierItem {
    /// The address to visit
    pub address: String,

    /// Remaining depth; 0 means visit but do not expand
    pub depth: u32,
}

impl FrontierItem {
    pub fn new(address: impl Into<String>, depth: u32) -> Self {
        Self {
            address: address.into(),
            depth,
        }
    }
}

/// FIFO work queue of frontier items
///
/// The frontier does not deduplicate; an address may sit in it several
/// times. Deduplication happens when an item is handled.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierItem>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding every seed at the same depth
    pub fn seeded<I, S>(seeds: I, depth: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut frontier = Self::new();
        for seed in seeds {
            frontier.push(seed, depth);
        }
        frontier
    }

    /// Appends an item to the back of the queue
    pub fn push(&mut self, address: impl Into<String>, depth: u32) {
        self.queue.push_back(FrontierItem::new(address, depth));
    }

    /// Appends items in the order given
    pub fn extend(&mut self, items: impl IntoIterator<Item = FrontierItem>) {
        self.queue.extend(items);
    }

    /// Removes the oldest item
    pub fn pop(&mut self) -> Option<FrontierItem> {
        self.queue.pop_front()
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frontier_is_empty() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.len(), 0);
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.push("https://example.com/a", 2);
        frontier.push("https://example.com/b", 1);
        frontier.push("https://example.com/c", 2);

        assert_eq!(frontier.pop(), Some(FrontierItem::new("https://example.com/a", 2)));
        assert_eq!(frontier.pop(), Some(FrontierItem::new("https://example.com/b", 1)));
        assert_eq!(frontier.pop(), Some(FrontierItem::new("https://example.com/c", 2)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut frontier = Frontier::new();
        frontier.push("https://example.com/", 1);
        frontier.push("https://example.com/", 1);

        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_seeded_keeps_seed_order() {
        let mut frontier = Frontier::seeded(["https://a.example/", "https://b.example/"], 2);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop().unwrap().address, "https://a.example/");
        assert_eq!(frontier.pop().unwrap().address, "https://b.example/");
    }

    #[test]
    fn test_breadth_first_levels() {
        // Level 2 seeds expand into level 1 items, which land behind every
        // remaining level 2 item.
        let mut frontier = Frontier::seeded(["s1", "s2"], 2);

        let first = frontier.pop().unwrap();
        frontier.extend(vec![
            FrontierItem::new("s1/a", first.depth - 1),
            FrontierItem::new("s1/b", first.depth - 1),
        ]);

        let depths: Vec<u32> = std::iter::from_fn(|| frontier.pop())
            .map(|item| item.depth)
            .collect();
        assert_eq!(depths, vec![2, 1, 1]);
    }
}
