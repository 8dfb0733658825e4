// LineSift - core/filter.rs
//
// Keyword predicate over lines.
// Core layer: pure logic, no I/O.

/// Case-sensitive substring predicate, fixed for one run.
///
/// Matching is plain containment: no regex, no word boundaries. An empty
/// keyword matches every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    keyword: String,
}

impl KeywordFilter {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns true if the keyword occurs anywhere in `line`.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.keyword.as_str())
    }
}

/// Collect the lines that match `filter`, preserving source order.
///
/// Stops at the first `Err` from the source and returns it.
pub fn collect_matches<I, E>(lines: I, filter: &KeywordFilter) -> Result<Vec<String>, E>
where
    I: IntoIterator<Item = Result<String, E>>,
{
    let mut matched = Vec::new();
    for line in lines {
        let line = line?;
        if filter.matches(&line) {
            matched.push(line);
        }
    }
    Ok(matched)
}
