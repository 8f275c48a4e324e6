//! Author and date header lines.

const AUTHOR: &str = "Author:";
const DATE: &str = "Date:";

/// Extracts the author and date of a commit.
///
/// Both values come back empty unless the first `Author:` line is
/// immediately followed by a `Date:` line.
pub fn author_and_date(text: &str) -> (String, String) {
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        if let Some(author) = header_value(line, AUTHOR) {
            return match lines.next().and_then(|next| header_value(next, DATE)) {
                Some(date) => (author.to_string(), date.to_string()),
                None => (String::new(), String::new()),
            };
        }
    }

    (String::new(), String::new())
}

/// Returns the trimmed value of a `Key: value` header line.
pub(crate) fn header_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.trim_start().strip_prefix(key).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_and_date() {
        let text = "
    commit 0b44f202c497c7efb8599567c92b052ee573afc3
Author: arnas.zuklija <arnas.zuklija@example.com>
Date:   2024-03-26 23:21:18 +0200

    wip: fixing stylish
";
        let (author, date) = author_and_date(text);
        assert_eq!(author, "arnas.zuklija <arnas.zuklija@example.com>");
        assert_eq!(date, "2024-03-26 23:21:18 +0200");
    }

    #[test]
    fn test_empty_values() {
        let text = "commit 0b44f202c497c7efb8599567c92b052ee573afc3\nAuthor: \nDate: \n";
        assert_eq!(author_and_date(text), (String::new(), String::new()));
    }

    #[test]
    fn test_missing_author() {
        let text = "commit 0b44f202c497c7efb8599567c92b052ee573afc3\nDate:   2024-03-26 23:21:18 +0200\n";
        assert_eq!(author_and_date(text), (String::new(), String::new()));
    }

    #[test]
    fn test_missing_date() {
        let text = "commit 0b44f202c497c7efb8599567c92b052ee573afc3\nAuthor: a <a@b.c>\n\n    msg\n";
        assert_eq!(author_and_date(text), (String::new(), String::new()));
    }

    #[test]
    fn test_date_not_adjacent() {
        let text = "Author: a <a@b.c>\n\nDate:   2024-03-26 23:21:18 +0200\n";
        assert_eq!(author_and_date(text), (String::new(), String::new()));
    }

    #[test]
    fn test_merge_commit_header() {
        let text = "\
commit 0b44f202c497c7efb8599567c92b052ee573afc3
Merge: 1a2b3c4 5d6e7f8
Author: Test User <test@example.com>
Date:   Fri Nov 25 13:12:29 2022 +0200
";
        let (author, date) = author_and_date(text);
        assert_eq!(author, "Test User <test@example.com>");
        assert_eq!(date, "Fri Nov 25 13:12:29 2022 +0200");
    }

    #[test]
    fn test_header_value() {
        assert_eq!(header_value("  Date:   x ", "Date:"), Some("x"));
        assert_eq!(header_value("Author: x", "Date:"), None);
    }
}
