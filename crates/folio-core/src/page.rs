//! Identity of the current document within the static site.

/// The current page, derived once from `location.pathname`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pathname: String,
    file_name: String,
}

impl PageInfo {
    pub fn from_pathname(pathname: &str, index_page: &str) -> Self {
        let last = pathname.rsplit('/').next().unwrap_or_default();
        let file_name = if last.is_empty() { index_page } else { last };
        Self {
            pathname: pathname.to_owned(),
            file_name: file_name.to_owned(),
        }
    }

    /// Last path segment, or the index page for directory URLs.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether this is the page the relay redirects to after a send.
    pub fn is_confirmation(&self, confirmation_page: &str) -> bool {
        self.pathname.ends_with(confirmation_page)
    }

    /// Whether a navigation link's `href` points at this page.
    pub fn is_current(&self, href: &str) -> bool {
        let target = href.split('#').next().unwrap_or_default();
        target == self.file_name
    }
}
