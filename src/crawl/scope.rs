// src/crawl/scope.rs
// =============================================================================
// Which URLs the crawler is allowed to follow.
//
// A plain string prefix on the serialized URL. With prefix
// "https://site.test/base/":
//   https://site.test/base/a.html     -> in scope
//   https://site.test/base/x/b.html   -> in scope
//   https://site.test/other/c.html    -> out of scope
//   https://other.test/base/d.html    -> out of scope
//
// Without --scope, the prefix is the seed's directory, so a seed of
// https://site.test/docs/index.html covers https://site.test/docs/.
// =============================================================================

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    prefix: String,
}

impl Scope {
    // Builds a scope from a user-supplied prefix
    //
    // Discovered URLs are compared in their serialized form (lowercase
    // scheme and host), so a prefix that parses as a URL is serialized
    // the same way. A prefix that does not parse is kept as typed.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = match Url::parse(&prefix) {
            Ok(url) => url.to_string(),
            Err(_) => prefix,
        };
        Self { prefix }
    }

    /// Scope covering the directory the seed URL lives in
    pub fn from_seed(seed: &Url) -> Self {
        // "./" resolves to the seed's directory:
        //   https://site.test/docs/index.html -> https://site.test/docs/
        //   https://site.test/docs/           -> https://site.test/docs/
        let directory = seed.join("./").map_or_else(|_| seed.to_string(), String::from);
        Self { prefix: directory }
    }

    pub fn contains(&self, url: &Url) -> bool {
        url.as_str().starts_with(&self.prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }
}
