/// Pages through photo search results a few at a time
#[derive(Debug, Clone, Default)]
pub struct PhotoBrowser {
    photos: Vec<String>,
    page_index: usize,
    per_page: usize,
}

impl PhotoBrowser {
    pub fn new(photos: Vec<String>, per_page: usize) -> Self {
        Self {
            photos,
            page_index: 0,
            per_page: per_page.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.photos.len().div_ceil(self.per_page)
    }

    pub fn next(&mut self) {
        self.page_index = (self.page_index + 1).min(self.page_count().saturating_sub(1));
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Slots of the current page; trailing slots past the end are `None`
    pub fn page(&self) -> Vec<Option<String>> {
        if self.photos.is_empty() {
            return Vec::new();
        }

        let start = self.page_index * self.per_page;
        (start..start + self.per_page)
            .map(|i| self.photos.get(i).cloned())
            .collect()
    }

    /// Photo in the given zero-based slot of the current page
    pub fn pick(&self, slot: usize) -> Option<String> {
        if slot >= self.per_page {
            return None;
        }
        self.photos.get(self.page_index * self.per_page + slot).cloned()
    }
}
