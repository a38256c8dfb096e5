//! Collapsed/expanded listing grid

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pagination {
    /// Only the first page is shown
    #[default]
    Collapsed,
    Expanded,
}

impl Pagination {
    /// One-way: there is no way back to `Collapsed`
    pub fn expand(&mut self) {
        *self = Pagination::Expanded;
    }

    pub fn visible<'a, T>(&self, items: &'a [T], page_size: usize) -> &'a [T] {
        match self {
            Pagination::Collapsed => &items[..items.len().min(page_size)],
            Pagination::Expanded => items,
        }
    }

    pub fn shows_more_control(&self) -> bool {
        *self == Pagination::Collapsed
    }
}
