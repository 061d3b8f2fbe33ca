use std::sync::OnceLock;
use regex::Regex;

/// Used when nothing survives sanitization.
const FALLBACK_FILENAME: &str = "screenshot";
const MAX_FILENAME_LENGTH: usize = 200;

fn disallowed_filename_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\-.]").expect("valid filename regex"))
}

/// Reduce a client-supplied filename to its last path component and replace
/// everything outside `[A-Za-z0-9_.-]` with `_`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let truncated: String = base.chars().take(MAX_FILENAME_LENGTH).collect();
    let sanitized = disallowed_filename_chars().replace_all(&truncated, "_").into_owned();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        FALLBACK_FILENAME.to_string()
    } else {
        sanitized
    }
}

/// `<hex token>_<sanitized name>`. The token makes repeated uploads of the
/// same name land in distinct files.
pub fn unique_filename(name: &str) -> String {
    format!("{}_{}", uuid::Uuid::new_v4().simple(), sanitize_filename(name))
}

/// Strip every character outside the URL-safe set. The result is only a
/// label for logs and responses; it is never parsed or fetched.
pub fn sanitize_url(raw: Option<&str>) -> String {
    match raw {
        None => "unknown".to_string(),
        Some(value) => value.chars().filter(|c| is_url_char(*c)).collect(),
    }
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_names() {
        assert_eq!(sanitize_filename("example.jpg"), "example.jpg");
        assert_eq!(sanitize_filename("my-file_1.png"), "my-file_1.png");
    }

    #[test]
    fn strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\shot.png"), "shot.png");
        assert_eq!(sanitize_filename("/var/www/../shot.jpg"), "shot.jpg");
    }

    #[test]
    fn replaces_disallowed_chars() {
        assert_eq!(sanitize_filename("my shot (1).jpg"), "my_shot__1_.jpg");
        assert_eq!(sanitize_filename("écran.png"), "_cran.png");
    }

    #[test]
    fn empty_or_dot_names_fall_back() {
        assert_eq!(sanitize_filename(""), "screenshot");
        assert_eq!(sanitize_filename("dir/"), "screenshot");
        assert_eq!(sanitize_filename(".."), "screenshot");
    }

    #[test]
    fn unique_names_differ_for_same_input() {
        let a = unique_filename("example.jpg");
        let b = unique_filename("example.jpg");
        assert_ne!(a, b);
        let re = Regex::new(r"^[0-9a-f]{32}_example\.jpg$").unwrap();
        assert!(re.is_match(&a), "unexpected name {}", a);
    }

    #[test]
    fn unique_name_has_no_separators() {
        let name = unique_filename("../../../../tmp/evil.png");
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
        assert!(name.ends_with("_evil.png"));
    }

    #[test]
    fn url_defaults_to_unknown() {
        assert_eq!(sanitize_url(None), "unknown");
    }

    #[test]
    fn url_strips_whitespace_and_control_chars() {
        assert_eq!(sanitize_url(Some("http://exa mple.com/\n?a=1")), "http://example.com/?a=1");
        assert_eq!(sanitize_url(Some("http://ex\u{0430}mple.com")), "http://exmple.com");
    }
}
