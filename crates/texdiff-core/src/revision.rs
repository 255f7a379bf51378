//! Revision tags and per-revision containers.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Which of the two document trees a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Revision {
    Old,
    New,
}

impl Revision {
    /// Both revisions, in the fixed emission order (old before new).
    pub const BOTH: [Revision; 2] = [Revision::Old, Revision::New];
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Old => write!(f, "old"),
            Revision::New => write!(f, "new"),
        }
    }
}

/// One value per revision, indexed by [`Revision`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sides<T> {
    pub old: T,
    pub new: T,
}

impl<T> Sides<T> {
    pub fn new(old: T, new: T) -> Self {
        Self { old, new }
    }

    /// Apply `f` to both sides, keeping the old/new pairing.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Sides<U> {
        Sides {
            old: f(&self.old),
            new: f(&self.new),
        }
    }
}

impl<T> Index<Revision> for Sides<T> {
    type Output = T;

    fn index(&self, revision: Revision) -> &T {
        match revision {
            Revision::Old => &self.old,
            Revision::New => &self.new,
        }
    }
}

impl<T> IndexMut<Revision> for Sides<T> {
    fn index_mut(&mut self, revision: Revision) -> &mut T {
        match revision {
            Revision::Old => &mut self.old,
            Revision::New => &mut self.new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(Revision::Old.to_string(), "old");
        assert_eq!(Revision::New.to_string(), "new");
    }

    #[test]
    fn test_sides_indexing() {
        let mut sides = Sides::new(3, 5);
        assert_eq!(sides[Revision::Old], 3);
        assert_eq!(sides[Revision::New], 5);

        sides[Revision::Old] = 7;
        assert_eq!(sides.old, 7);
    }

    #[test]
    fn test_sides_map() {
        let sides = Sides::new("old", "new");
        let lengths = sides.map(|s| s.len());
        assert_eq!(lengths, Sides::new(3, 3));
    }
}
