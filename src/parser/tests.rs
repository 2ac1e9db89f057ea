//! Tests for the request classifier.

#[cfg(test)]
mod tests {
    use crate::parser::{classify_request_line, Error, Method};

    #[test]
    fn test_classify_simple_get_request() {
        let request = classify_request_line("GET /index.html HTTP/1.0").unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.raw_target, "/index.html");
        assert_eq!(request.resolved_path, "index.html");
    }

    #[test]
    fn test_classify_head_request() {
        let request = classify_request_line("HEAD /index.html HTTP/1.0").unwrap();
        assert_eq!(request.method, Method::HEAD);
        assert_eq!(request.resolved_path, "index.html");
    }

    #[test]
    fn test_method_is_case_insensitive() {
        for line in ["GET /x HTTP/1.0", "get /x HTTP/1.0", "GeT /x HTTP/1.0"] {
            let request = classify_request_line(line).unwrap();
            assert_eq!(request.method, Method::GET);
        }

        let request = classify_request_line("head /x HTTP/1.0").unwrap();
        assert_eq!(request.method, Method::HEAD);
    }

    #[test]
    fn test_not_implemented_methods() {
        for verb in ["POST", "PUT", "DELETE", "OPTIONS", "TRACE"] {
            let line = format!("{verb} /x HTTP/1.0");
            let result = classify_request_line(&line);
            assert!(matches!(result, Err(Error::NotImplemented(ref m)) if m == verb));
        }
    }

    #[test]
    fn test_not_implemented_set_is_case_sensitive() {
        // "post" is outside the refused set and falls through to 400.
        let result = classify_request_line("post /x HTTP/1.0");
        assert!(matches!(result, Err(Error::UnrecognizedMethod(ref m)) if m == "post"));
    }

    #[test]
    fn test_unrecognized_method() {
        let result = classify_request_line("BREW /pot HTTP/1.0");
        assert!(matches!(result, Err(Error::UnrecognizedMethod(ref m)) if m == "BREW"));
    }

    #[test]
    fn test_two_tokens_is_malformed() {
        let result = classify_request_line("GET missing.txt");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_four_tokens_is_malformed() {
        let result = classify_request_line("GET /a /b HTTP/1.0");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_empty_line_is_malformed() {
        for line in ["", "   ", "\r\n"] {
            let result = classify_request_line(line);
            assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
        }
    }

    #[test]
    fn test_token_count_is_checked_before_method() {
        // A refused verb with the wrong line shape is still a malformed
        // request, not a 501.
        let result = classify_request_line("POST /x");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_method_is_checked_before_path_safety() {
        let result = classify_request_line("POST /../secret HTTP/1.0");
        assert!(matches!(result, Err(Error::NotImplemented(_))));
    }

    #[test]
    fn test_traversal_is_forbidden() {
        let result = classify_request_line("GET /../secret HTTP/1.0");
        assert!(matches!(result, Err(Error::TraversalForbidden(ref p)) if p == "../secret"));
    }

    #[test]
    fn test_traversal_applies_to_head_too() {
        let result = classify_request_line("HEAD /../secret HTTP/1.0");
        assert!(matches!(result, Err(Error::TraversalForbidden(_))));
    }

    #[test]
    fn test_only_leading_traversal_is_guarded() {
        let request = classify_request_line("GET /a/../b HTTP/1.0").unwrap();
        assert_eq!(request.resolved_path, "a/../b");

        let request = classify_request_line("GET /..secret HTTP/1.0").unwrap();
        assert_eq!(request.resolved_path, "..secret");
    }

    #[test]
    fn test_strips_one_leading_slash_only() {
        let request = classify_request_line("GET //shared/file HTTP/1.0").unwrap();
        assert_eq!(request.resolved_path, "/shared/file");
    }

    #[test]
    fn test_target_without_leading_slash() {
        let request = classify_request_line("GET index.html HTTP/1.0").unwrap();
        assert_eq!(request.resolved_path, "index.html");
    }

    #[test]
    fn test_root_target_resolves_to_empty_path() {
        let request = classify_request_line("GET / HTTP/1.0").unwrap();
        assert_eq!(request.resolved_path, "");
    }

    #[test]
    fn test_version_token_is_not_interpreted() {
        let request = classify_request_line("GET /x ANYTHING").unwrap();
        assert_eq!(request.method, Method::GET);
    }

    #[test]
    fn test_trailing_line_terminator_is_ignored() {
        let request = classify_request_line("GET /x HTTP/1.0\r\n").unwrap();
        assert_eq!(request.resolved_path, "x");
    }

    #[test]
    fn test_extra_whitespace_between_tokens() {
        let request = classify_request_line("GET  /path   HTTP/1.0").unwrap();
        assert_eq!(request.resolved_path, "path");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::HEAD.to_string(), "HEAD");
    }

    #[test]
    fn test_head_has_no_body() {
        assert!(Method::GET.has_body());
        assert!(!Method::HEAD.has_body());
    }
}
