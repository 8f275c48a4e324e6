//! Test script reference resolution.

/// Extracts the URL from a test script reference.
///
/// The reference is either a bare URL or an (HTML-escaped) anchor, in which
/// case the URL is the anchor text between the first `>` and the last `<`.
/// Markup trailing the URL, such as `<br/>`, is dropped. Returns `None`
/// unless the result starts with `http`.
pub fn reference_url(raw: &str) -> Option<String> {
    let text = unescape(raw.trim());

    let candidate = if text.contains("href") {
        let start = text.find('>')? + 1;
        let end = text.rfind('<')?;
        if end <= start {
            return None;
        }
        &text[start..end]
    } else {
        text.as_str()
    };

    let url = candidate.split('<').next().unwrap_or_default().trim();
    url.starts_with("http").then(|| url.to_string())
}

/// Returns the part of `url` starting at `marker`, without leading slashes.
///
/// `https://host/ta/test_cases/EBM/test_a.py` with marker `/test_cases/`
/// becomes `test_cases/EBM/test_a.py`.
pub fn test_case_path<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let start = url.find(marker)?;
    Some(url[start..].trim_start_matches('/'))
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://svn.example.com/svn/4008A/apps/trunk/test_automation/test_cases/EBM/OpticalDetector/test_blood_leak_detection.py";

    #[test]
    fn test_bare_url() {
        assert_eq!(reference_url(&format!("  {URL}\n")), Some(URL.to_string()));
    }

    #[test]
    fn test_anchor() {
        let raw = format!(
            r#"<a href="{URL}" target="_top" class="descriptionLink">{URL}</a> "#
        );
        assert_eq!(reference_url(&raw), Some(URL.to_string()));
    }

    #[test]
    fn test_escaped_anchor() {
        let raw = format!(
            r#"&lt;a href="{URL}" target="_top" class="descriptionLink"&gt;{URL}&lt;/a&gt;"#
        );
        assert_eq!(reference_url(&raw), Some(URL.to_string()));
    }

    #[test]
    fn test_anchor_followed_by_markup() {
        let raw = format!(
            "<a href=\"{URL}\" target=\"_top\">{URL}</a> <span style=\"color: #000000;\"><br/>\n            </span>"
        );
        assert_eq!(reference_url(&raw), Some(URL.to_string()));
    }

    #[test]
    fn test_url_with_trailing_break() {
        let raw = format!("{URL}<br/>");
        assert_eq!(reference_url(&raw), Some(URL.to_string()));
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(reference_url("test_cases/EBM/test_a.py"), None);
        assert_eq!(reference_url(""), None);
    }

    #[test]
    fn test_broken_anchor() {
        assert_eq!(reference_url("<a href=\"x\""), None);
    }

    #[test]
    fn test_case_path_from_url() {
        assert_eq!(
            test_case_path(URL, "/test_cases/"),
            Some("test_cases/EBM/OpticalDetector/test_blood_leak_detection.py")
        );
    }

    #[test]
    fn test_case_path_missing_marker() {
        assert_eq!(test_case_path("https://host/other/test_a.py", "/test_cases/"), None);
    }
}
