//! Configuration for a reading session.

use cyoa_core::PageNumber;

/// Configuration for a reading session.
#[derive(Debug, Clone, Default)]
pub struct ReadConfig {
    /// Page shown first.
    pub first_page: PageNumber,
}

impl ReadConfig {
    /// Set the first page.
    pub fn with_first_page(mut self, first_page: PageNumber) -> Self {
        self.first_page = first_page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(ReadConfig::default().first_page, PageNumber::FIRST);
    }

    #[test]
    fn builder_methods() {
        let start = PageNumber::new(12).unwrap();
        assert_eq!(ReadConfig::default().with_first_page(start).first_page, start);
    }
}
