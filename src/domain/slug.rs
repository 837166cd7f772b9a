// Title slugs - the URL id scheme the dashboard host expects
//
// Lowercase the title, drop anything that is not alphanumeric, whitespace,
// '-' or '_', collapse whitespace runs into single hyphens, then
// percent-encode whatever is left (non-ASCII alphanumerics survive the
// filter and need escaping).

/// Derive the URL-safe id for a dashboard title.
pub fn slugify_for_url(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    let hyphenated = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    urlencoding::encode(&hyphenated).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_hyphens() {
        assert_eq!(slugify_for_url("My Report"), "my-report");
        assert_eq!(slugify_for_url("  My   Report  "), "my-report");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(slugify_for_url("CPU: load (5m)"), "cpu-load-5m");
        assert_eq!(slugify_for_url("a/b?c=d"), "abcd");
    }

    #[test]
    fn test_non_ascii_is_percent_encoded() {
        assert_eq!(slugify_for_url("Café Metrics"), "caf%C3%A9-metrics");
    }

    #[test]
    fn test_already_safe_titles_are_untouched() {
        assert_eq!(slugify_for_url("prod_db-01"), "prod_db-01");
    }
}
