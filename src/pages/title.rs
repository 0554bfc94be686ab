/// Human-readable page name for a path, from its last segment.
/// `/` is `Home`; `/forgot-password` is `Forgot Password`.
pub(super) fn page_name(path: &str) -> String {
    let segment = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if segment.is_empty() {
        return "Home".to_string();
    }

    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Applies the `%s | <app>` title template
pub(super) fn page_title(path: &str, app_name: &str) -> String {
    format!("{} | {}", page_name(path), app_name)
}

pub(super) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", "Home")]
    #[case("", "Home")]
    #[case("/login", "Login")]
    #[case("/forgot-password", "Forgot Password")]
    #[case("/settings/user_profile/", "User Profile")]
    fn test_page_name(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(page_name(path), expected);
    }

    #[test]
    fn test_page_title_template() {
        assert_eq!(page_title("/register", "OnePanel"), "Register | OnePanel");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
