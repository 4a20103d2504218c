//! Cyclic FAQ cursor
//!
//! A forward/backward cursor over a fixed item list that wraps at both ends.
//! The sequence is infinite and restartable; advancing never exhausts it.
//! Per-session state, never shared.

use crate::models::FaqItem;

/// Cyclic cursor over a fixed list of FAQ items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCursor {
    items: Vec<FaqItem>,
    /// None until the first next/prev call
    current: Option<usize>,
}

impl FaqCursor {
    /// Create a cursor over the given items, positioned before the start
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self {
            items,
            current: None,
        }
    }

    /// Advance to the next item, wrapping past the end back to the first.
    /// Returns None only when the list is empty.
    pub fn next(&mut self) -> Option<(&FaqItem, usize)> {
        if self.items.is_empty() {
            return None;
        }

        let index = match self.current {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.current = Some(index);
        Some((&self.items[index], index))
    }

    /// Step to the previous item, wrapping before the start to the last.
    /// Returns None only when the list is empty.
    pub fn prev(&mut self) -> Option<(&FaqItem, usize)> {
        if self.items.is_empty() {
            return None;
        }

        let len = self.items.len();
        let index = match self.current {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.current = Some(index);
        Some((&self.items[index], index))
    }

    /// The item under the cursor, or None if the list is empty or the
    /// cursor has not moved yet
    pub fn current(&self) -> Option<(&FaqItem, usize)> {
        let index = self.current?;
        Some((&self.items[index], index))
    }

    /// Move the cursor back to the unset position
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Position the cursor on an explicit index
    pub fn jump(&mut self, index: usize) -> Option<(&FaqItem, usize)> {
        if index >= self.items.len() {
            return None;
        }
        self.current = Some(index);
        Some((&self.items[index], index))
    }

    /// Number of items behind the cursor
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the backing list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<FaqItem> {
        (0..n)
            .map(|i| FaqItem {
                question: format!("Вопрос {}", i),
                answer: format!("Ответ {}", i),
                explanation: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_next_walks_forward_from_zero() {
        let mut cursor = FaqCursor::new(items(3));
        assert!(cursor.current().is_none());

        assert_eq!(cursor.next().unwrap().1, 0);
        assert_eq!(cursor.next().unwrap().1, 1);
        assert_eq!(cursor.next().unwrap().1, 2);
        // wraps back to the start
        assert_eq!(cursor.next().unwrap().1, 0);
    }

    #[test]
    fn test_cyclic_closure() {
        // length calls of next() return to the original index
        let mut cursor = FaqCursor::new(items(4));
        cursor.next();
        let origin = cursor.current().unwrap().1;

        for _ in 0..cursor.len() {
            cursor.next();
        }
        assert_eq!(cursor.current().unwrap().1, origin);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut cursor = FaqCursor::new(items(3));

        // prev from the unset position lands on the last item
        assert_eq!(cursor.prev().unwrap().1, 2);

        cursor.jump(0);
        assert_eq!(cursor.prev().unwrap().1, 2);
    }

    #[test]
    fn test_empty_list_returns_none() {
        let mut cursor = FaqCursor::new(vec![]);
        assert!(cursor.next().is_none());
        assert!(cursor.prev().is_none());
        assert!(cursor.current().is_none());
    }

    #[test]
    fn test_reset_and_jump() {
        let mut cursor = FaqCursor::new(items(3));
        cursor.next();
        cursor.reset();
        assert!(cursor.current().is_none());

        assert_eq!(cursor.jump(2).unwrap().1, 2);
        assert!(cursor.jump(3).is_none());
        // failed jump leaves the cursor in place
        assert_eq!(cursor.current().unwrap().1, 2);
    }
}
