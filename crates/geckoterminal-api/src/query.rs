//! Query-string assembly shared by every endpoint method

use url::form_urlencoded;

#[derive(Debug, Default)]
pub(crate) struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unconditionally.
    pub fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a string parameter only when it is non-empty.
    pub fn add_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            if !v.is_empty() {
                self.add(key, v);
            }
        }
        self
    }

    /// Add an optional numeric parameter, omitted when unset.
    pub fn add_opt_num(&mut self, key: &str, value: Option<u32>) -> &mut Self {
        if let Some(v) = value {
            self.add(key, v);
        }
        self
    }

    /// Add a numeric parameter, injecting the operation's documented default
    /// when the caller left it unset.
    pub fn add_num_or(&mut self, key: &str, value: Option<u32>, default: u32) -> &mut Self {
        self.add(key, value.unwrap_or(default))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-encode the collected pairs.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_injection_and_omission() {
        let mut q = QueryParams::new();
        q.add_num_or("page", None, 1)
            .add_opt("include", None)
            .add_opt_num("limit", Some(100));
        assert_eq!(q.encode(), "page=1&limit=100");
    }
}
