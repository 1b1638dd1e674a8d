/// Fixed-size pages over a result slice. The last page may be shorter.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<&'a [T]>,
}

impl<'a, T> Paginator<'a, T> {
    /// `page_size` of zero is treated as one.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Self { pages: items.chunks(page_size.max(1)).collect() }
    }

    pub fn len(&self) -> usize { self.pages.len() }

    pub fn is_empty(&self) -> bool { self.pages.is_empty() }

    pub fn page(&self, index: usize) -> Option<&'a [T]> { self.pages.get(index).copied() }

    pub fn iter(&self) -> impl Iterator<Item = &'a [T]> + '_ { self.pages.iter().copied() }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = std::vec::IntoIter<&'a [T]>;

    fn into_iter(self) -> Self::IntoIter { self.pages.into_iter() }
}

pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> { Paginator::new(items, page_size) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages() {
        let items = [1, 2, 3, 4, 5];
        let pages = paginate(&items, 2);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages.iter().collect::<Vec<_>>(), vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
        assert_eq!(pages.page(2), Some(&[5][..]));
        assert_eq!(pages.page(3), None);
    }

    #[test]
    fn empty_and_zero_sized() {
        let empty: [u8; 0] = [];
        assert!(paginate(&empty, 3).is_empty());
        assert_eq!(paginate(&[1, 2], 0).len(), 2);
    }
}
