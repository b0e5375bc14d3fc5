//! OData query options for collection requests.

/// Options appended to a collection endpoint.
///
/// Filter expressions are passed through untouched; their syntax belongs to
/// the remote API. Several filters are combined with `and`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filter: Vec<String>,
    pub top: Option<u32>,
    pub orderby: Option<String>,
    pub expand: Option<String>,
    pub skiptoken: Option<String>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query holding only filter expressions; blank ones are dropped.
    #[must_use]
    pub fn filtered<S: AsRef<str>>(filters: &[S]) -> Self {
        let mut query = Self::new();
        for filter in filters {
            query = query.filter(filter.as_ref());
        }
        query
    }

    #[must_use]
    pub fn filter(mut self, expression: &str) -> Self {
        let expression = expression.trim();
        if !expression.is_empty() {
            self.filter.push(expression.to_string());
        }
        self
    }

    #[must_use]
    pub fn top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    #[must_use]
    pub fn orderby(mut self, orderby: &str) -> Self {
        self.orderby = Some(orderby.to_string());
        self
    }

    #[must_use]
    pub fn expand(mut self, expand: &str) -> Self {
        self.expand = Some(expand.to_string());
        self
    }

    #[must_use]
    pub fn skiptoken(mut self, skiptoken: &str) -> Self {
        self.skiptoken = Some(skiptoken.to_string());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty()
            && self.top.is_none()
            && self.orderby.is_none()
            && self.expand.is_none()
            && self.skiptoken.is_none()
    }

    /// The combined `$filter` expression, if any.
    #[must_use]
    pub fn filter_expression(&self) -> Option<String> {
        match self.filter.as_slice() {
            [] => None,
            [single] => Some(single.clone()),
            many => Some(
                many.iter()
                    .map(|f| format!("({f})"))
                    .collect::<Vec<_>>()
                    .join(" and "),
            ),
        }
    }

    /// Query string pairs in a stable order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = self.filter_expression() {
            pairs.push(("$filter", filter));
        }
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        if let Some(orderby) = &self.orderby {
            pairs.push(("$orderby", orderby.clone()));
        }
        if let Some(expand) = &self.expand {
            pairs.push(("$expand", expand.clone()));
        }
        if let Some(skiptoken) = &self.skiptoken {
            pairs.push(("$skiptoken", skiptoken.clone()));
        }
        pairs
    }
}
