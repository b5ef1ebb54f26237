//! Paging, sorting and filtering for list endpoints.

/// Query options accepted by the Jamf Pro API list endpoints.
///
/// ```rust,ignore
/// let options = ListOptions::new()
///     .page_size(50)
///     .sort("name:asc")
///     .filter("name==\"Apps\"");
/// let page = client.list_categories(&options).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Sort criteria such as `name:asc`, sent comma-joined.
    pub sort: Vec<String>,
    /// RSQL filter expression.
    pub filter: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Append a sort criterion.
    pub fn sort(mut self, criterion: impl Into<String>) -> Self {
        self.sort.push(criterion.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("page-size".to_string(), page_size.to_string()));
        }
        if !self.sort.is_empty() {
            params.push(("sort".to_string(), self.sort.join(",")));
        }
        if let Some(filter) = &self.filter {
            params.push(("filter".to_string(), filter.clone()));
        }
        params
    }
}
