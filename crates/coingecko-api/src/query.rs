//! Query-string assembly shared by every endpoint method
//!
//! All operations build their query through this one type so that the omission
//! and default-injection rules of the endpoint catalogue cannot drift between
//! methods. Encoding is standard form-encoding via `url::form_urlencoded`;
//! parameter ordering follows insertion order and is not a correctness
//! concern for the upstream decoder.

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

    /// Add an optional true/false flag; absence means the upstream default.
    pub fn add_opt_bool(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        if let Some(v) = value {
            self.add(key, v);
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

    /// Add a string parameter, injecting the operation's documented default
    /// when the caller left it unset or empty.
    pub fn add_str_or(&mut self, key: &str, value: Option<&str>, default: &str) -> &mut Self {
        match value {
            Some(v) if !v.is_empty() => self.add(key, v),
            _ => self.add(key, default),
        }
    }

    /// Add a comma-separated list parameter only when the slice is non-empty.
    pub fn add_csv(&mut self, key: &str, values: &[&str]) -> &mut Self {
        if !values.is_empty() {
            self.add(key, values.join(","));
        }
        self
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
    fn test_encoding_is_form_encoded() {
        let mut q = QueryParams::new();
        q.add("query", "bored ape").add("ids", "bitcoin,ethereum");
        assert_eq!(q.encode(), "query=bored+ape&ids=bitcoin%2Cethereum");
    }

    #[test]
    fn test_empty_values_omitted() {
        let mut q = QueryParams::new();
        q.add_opt("category", None)
            .add_opt("order", Some(""))
            .add_opt_num("page", None)
            .add_csv("ids", &[]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_default_injection() {
        let mut q = QueryParams::new();
        q.add_num_or("per_page", None, 100)
            .add_num_or("page", Some(3), 1)
            .add_str_or("order", None, "market_cap_desc");
        assert_eq!(q.encode(), "per_page=100&page=3&order=market_cap_desc");
    }

    #[test]
    fn test_flags_are_tristate() {
        let mut q = QueryParams::new();
        q.add_opt_bool("include_market_cap", Some(true))
            .add_opt_bool("include_24hr_vol", Some(false))
            .add_opt_bool("include_24hr_change", None);
        assert_eq!(q.encode(), "include_market_cap=true&include_24hr_vol=false");
    }
}
