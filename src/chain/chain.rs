//! The per-dispatch filter chain value.

use std::sync::Arc;

use crate::mapping::FilterRegistration;

/// Ordered filters wrapping one terminal handler.
///
/// Built fresh for each dispatch and never mutated once returned. Filters
/// are shared with the mapping table, so a chain holds no resources of its
/// own and can be dropped at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<H> {
    handler: Arc<H>,
    filters: Vec<Arc<FilterRegistration>>,
}

impl<H> Chain<H> {
    pub(crate) fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            filters: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, filter: Arc<FilterRegistration>) {
        self.filters.push(filter);
    }

    /// The terminal handler.
    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    /// Filters in invocation order.
    pub fn filters(&self) -> &[Arc<FilterRegistration>] {
        &self.filters
    }

    /// Filter names in invocation order.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Split into handler and filters.
    pub fn into_parts(self) -> (Arc<H>, Vec<Arc<FilterRegistration>>) {
        (self.handler, self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_accessors() {
        let mut chain = Chain::new(Arc::new("Echo"));
        assert!(chain.is_empty());

        chain.push(Arc::new(FilterRegistration::new("Auth")));
        chain.push(Arc::new(FilterRegistration::new("Logger")));

        assert_eq!(chain.len(), 2);
        assert_eq!(**chain.handler(), "Echo");
        assert_eq!(chain.filter_names().collect::<Vec<_>>(), vec!["Auth", "Logger"]);

        let (handler, filters) = chain.into_parts();
        assert_eq!(*handler, "Echo");
        assert_eq!(filters.len(), 2);
    }
}
