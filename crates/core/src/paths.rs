//! Endpoint paths for the psbdmp.ws API.
//!
//! User input always lands in a single path segment, percent-encoded so
//! special characters cannot introduce additional segments.

/// POST endpoint taking a `from=..&to=..` form body.
pub const DUMPS_BY_DATE: &str = "api/dump/getbydate";

/// Free-text search across all dumps.
pub fn search(keyword: &str) -> String {
    format!("api/search/{}", urlencoding::encode(keyword))
}

/// Search for dumps mentioning a domain.
pub fn search_domain(domain: &str) -> String {
    format!("api/search/domain/{}", urlencoding::encode(domain))
}

/// Search for dumps mentioning an email address.
pub fn search_email(email: &str) -> String {
    format!("api/search/email/{}", urlencoding::encode(email))
}

/// Fetch the full content of a single dump.
pub fn dump_content(id: &str) -> String {
    format!("api/dump/get/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_plain_keyword() {
        assert_eq!(search("hunter2"), "api/search/hunter2");
    }

    #[test]
    fn test_search_escapes_spaces() {
        assert_eq!(search("leaked creds"), "api/search/leaked%20creds");
    }

    #[test]
    fn test_search_cannot_inject_path_segments() {
        let path = search("../dump/get/abc");
        assert!(!path["api/search/".len()..].contains('/'));
        assert_eq!(path, "api/search/..%2Fdump%2Fget%2Fabc");
    }

    #[test]
    fn test_search_escapes_query_characters() {
        let path = search("a?b=c&d");
        assert!(!path.contains('?'));
        assert!(!path.contains('&'));
    }

    #[test]
    fn test_search_domain() {
        assert_eq!(search_domain("example.com"), "api/search/domain/example.com");
    }

    #[test]
    fn test_search_email_escapes_at_sign() {
        assert_eq!(
            search_email("alice@example.com"),
            "api/search/email/alice%40example.com"
        );
    }

    #[test]
    fn test_dump_content() {
        assert_eq!(dump_content("Ab12Cd34"), "api/dump/get/Ab12Cd34");
    }

    #[test]
    fn test_dump_content_escapes_slash() {
        assert_eq!(dump_content("a/b"), "api/dump/get/a%2Fb");
    }
}
