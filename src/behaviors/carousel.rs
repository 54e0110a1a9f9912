/// Wrap-around paging over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
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

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`, ignoring positions past the end.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Indices of the `per_view` slides visible from the current position,
    /// wrapping past the end.
    pub fn window(&self, per_view: usize) -> Vec<usize> {
        let shown = per_view.min(self.len);
        (0..shown).map(|i| (self.index + i) % self.len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_back() {
        let mut c = Carousel::new(3);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.go_to(4);
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
        assert!(c.window(3).is_empty());
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(4);
        c.go_to(3);
        assert_eq!(c.index(), 3);
        c.go_to(4);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn window_wraps_and_clamps() {
        let mut c = Carousel::new(4);
        c.go_to(3);
        assert_eq!(c.window(3), vec![3, 0, 1]);
        assert_eq!(Carousel::new(2).window(3), vec![0, 1]);
    }
}
