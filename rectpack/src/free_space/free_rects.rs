use crate::geometry::Rect;

/// Collection of the free rectangles of a single bin.
/// Entries are kept in insertion order, which the ranker relies on for reproducible tie-breaking.
/// Degenerate rectangles cannot be represented by [`Rect`], so every entry has a positive area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreeRects {
    rects: Vec<Rect>,
}

impl FreeRects {
    /// A repository holding a single free rectangle
    pub fn new(initial: Rect) -> Self {
        FreeRects {
            rects: vec![initial],
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn get(&self, index: usize) -> Rect {
        self.rects[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    /// Removes the entry at `index`, shifting all later entries one position to the front.
    pub fn remove(&mut self, index: usize) -> Rect {
        self.rects.remove(index)
    }

    /// Appends a new free rectangle at the back
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Sum of the areas of all entries, overlapping ones counted multiple times
    pub fn total_area(&self) -> u128 {
        self.rects.iter().map(|r| r.area() as u128).sum()
    }
}

impl Extend<Rect> for FreeRects {
    fn extend<T: IntoIterator<Item = Rect>>(&mut self, iter: T) {
        self.rects.extend(iter);
    }
}

impl FromIterator<Rect> for FreeRects {
    fn from_iter<T: IntoIterator<Item = Rect>>(iter: T) -> Self {
        FreeRects {
            rects: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_keeps_insertion_order() {
        let rects = [
            Rect::from_corner(0, 0, 1, 1).unwrap(),
            Rect::from_corner(1, 0, 2, 1).unwrap(),
            Rect::from_corner(0, 1, 3, 3).unwrap(),
        ];
        let mut free_rects: FreeRects = rects.into_iter().collect();
        assert_eq!(free_rects.total_area(), 1 + 2 + 9);

        assert_eq!(free_rects.remove(0), rects[0]);
        free_rects.push(rects[0]);
        assert_eq!(free_rects.as_slice(), &[rects[1], rects[2], rects[0]]);
        assert_eq!(free_rects.get(1), rects[2]);
    }
}
