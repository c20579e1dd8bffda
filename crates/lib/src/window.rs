//! A sliding window over three consecutive lines.

use core::mem;

/// The lines surrounding the line currently being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rows<T> {
    /// The line above, unless `current` is the first line.
    pub prev: Option<T>,
    /// The line being processed.
    pub current: T,
    /// The line below, unless `current` is the last line.
    pub next: Option<T>,
}

/// Sliding window which keeps the previous, current and next line.
///
/// Lines are fed in order through [Window::push], and the window yields the
/// middle line together with its neighbours once the line after it is known.
/// Call [Window::finish] at the end of input to get the last line.
///
/// # Examples
///
/// ```
/// use lib::window::{Rows, Window};
///
/// let mut w = Window::new();
/// assert_eq!(w.push(1), None);
/// assert_eq!(w.push(2), Some(Rows { prev: None, current: 1, next: Some(2) }));
/// assert_eq!(w.push(3), Some(Rows { prev: Some(1), current: 2, next: Some(3) }));
/// assert_eq!(w.finish(), Some(Rows { prev: Some(2), current: 3, next: None }));
/// assert_eq!(w.finish(), None);
/// ```
#[derive(Debug)]
pub struct Window<T> {
    prev: Option<T>,
    current: Option<T>,
    next: Option<T>,
}

impl<T> Window<T>
where
    T: Copy,
{
    /// Construct a new empty window.
    pub const fn new() -> Self {
        Self {
            prev: None,
            current: None,
            next: None,
        }
    }

    /// Push the next line into the window.
    pub fn push(&mut self, line: T) -> Option<Rows<T>> {
        self.shift(Some(line))
    }

    /// Signal the end of input, yielding the last line if there is one.
    pub fn finish(&mut self) -> Option<Rows<T>> {
        self.shift(None)
    }

    fn shift(&mut self, line: Option<T>) -> Option<Rows<T>> {
        self.prev = mem::replace(&mut self.current, mem::replace(&mut self.next, line));

        Some(Rows {
            prev: self.prev,
            current: self.current?,
            next: self.next,
        })
    }
}

impl<T> Default for Window<T>
where
    T: Copy,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Rows, Window};

    #[test]
    fn test_single_line() {
        let mut w = Window::new();
        assert_eq!(w.push("only"), None);
        assert_eq!(
            w.finish(),
            Some(Rows {
                prev: None,
                current: "only",
                next: None
            })
        );
        assert_eq!(w.finish(), None);
    }

    #[test]
    fn test_empty() {
        let mut w = Window::<u32>::new();
        assert_eq!(w.finish(), None);
    }

    #[test]
    fn test_every_line_is_current_once() {
        let mut w = Window::new();
        let mut seen = Vec::new();

        for n in 0..5 {
            seen.extend(w.push(n).map(|rows| rows.current));
        }

        seen.extend(w.finish().map(|rows| rows.current));
        assert_eq!(seen, [0, 1, 2, 3, 4]);
    }
}
