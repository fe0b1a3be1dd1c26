use crate::render::DisplayRegion;

/// In-memory display region used by tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupRegion {
    buffer: String,
    pub append_count: usize,
    pub clear_count: usize,
}

impl MarkupRegion {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl DisplayRegion for MarkupRegion {
    fn clear(&mut self) {
        self.buffer.clear();
        self.clear_count += 1;
    }

    fn append(&mut self, markup: &str) {
        self.buffer.push_str(markup);
        self.append_count += 1;
    }

    fn inner_html(&self) -> String {
        self.buffer.clone()
    }
}
