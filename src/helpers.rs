/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a fragment-free URL at the first `?`.
/// Returns (`base`, `query_without_question_mark`)
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Lexical view of a URL string: everything before `?`, the query, the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub base: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    pub fn split(url: &'a str) -> Self {
        let (without_fragment, fragment) = prune_fragment(url);
        let (base, query) = split_query(without_fragment);
        Self {
            base,
            query,
            fragment,
        }
    }

    /// Reassemble with a replacement query; an empty query drops the `?`.
    pub fn join_with_query(&self, query: &str) -> String {
        let fragment_len = self.fragment.map_or(0, |f| f.len() + 1);
        let mut result = String::with_capacity(self.base.len() + query.len() + 1 + fragment_len);
        result.push_str(self.base);
        if !query.is_empty() {
            result.push('?');
            result.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            result.push('#');
            result.push_str(fragment);
        }
        result
    }
}
