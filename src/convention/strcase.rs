//! Token-based identifier case conversion
//!
//! Identifiers split into tokens on case transitions, digit/letter
//! transitions and the explicit separators `_`, `-` and space. A token is a
//! maximal run of digits, uppercase-then-lowercase letters, or lowercase
//! letters. An uppercase run followed by lowercase letters keeps the acronym
//! shape: the run's final letter starts the next token, so `HTTPServer`
//! splits into `HTTP` + `Server`.

/// Convert an identifier to snake_case
///
/// `UserID` -> `user_id`, `httpServer` -> `http_server`
pub fn to_snake(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (index, token) in split_tokens(input).iter().enumerate() {
        if index > 0 {
            out.push('_');
        }
        out.extend(token.chars().flat_map(char::to_lowercase));
    }
    out
}

/// Convert an identifier to camelCase
///
/// The first token is lower-cased; later tokens get their first letter
/// upper-cased and keep the rest as-is, so acronym tokens survive:
/// `UserID` -> `userID`, `http_server` -> `httpServer`
pub fn to_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (index, token) in split_tokens(input).iter().enumerate() {
        if index == 0 {
            out.extend(token.chars().flat_map(char::to_lowercase));
        } else {
            let mut chars = token.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c == ' '
}

fn split_tokens(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_separator(c) {
            i += 1;
        } else if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else if c.is_uppercase() {
            let start = i;
            while i < chars.len() && chars[i].is_uppercase() {
                i += 1;
            }
            if i < chars.len() && chars[i].is_lowercase() {
                if i - start > 1 {
                    // Last letter of an acronym run belongs to the next token
                    i -= 1;
                } else {
                    while i < chars.len() && chars[i].is_lowercase() {
                        i += 1;
                    }
                }
            }
            tokens.push(chars[start..i].iter().collect());
        } else if c.is_lowercase() {
            let start = i;
            while i < chars.len() && chars[i].is_lowercase() {
                i += 1;
            }
            tokens.push(chars[start..i].iter().collect());
        } else {
            // Unclassified characters pass through as single-char tokens
            tokens.push(c.to_string());
            i += 1;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_basic() {
        assert_eq!(to_snake("UserID"), "user_id");
        assert_eq!(to_snake("httpServer"), "http_server");
        assert_eq!(to_snake("Name"), "name");
        assert_eq!(to_snake("already_snake"), "already_snake");
    }

    #[test]
    fn test_snake_acronym_runs() {
        assert_eq!(to_snake("HTTPServer"), "http_server");
        assert_eq!(to_snake("parseHTTPResponse"), "parse_http_response");
        assert_eq!(to_snake("ID"), "id");
    }

    #[test]
    fn test_snake_separators_and_digits() {
        assert_eq!(to_snake("user-id"), "user_id");
        assert_eq!(to_snake("user id"), "user_id");
        assert_eq!(to_snake("field2Value"), "field_2_value");
        assert_eq!(to_snake("__trimmed__"), "trimmed");
    }

    #[test]
    fn test_camel_basic() {
        assert_eq!(to_camel("http_server"), "httpServer");
        assert_eq!(to_camel("UserID"), "userID");
        assert_eq!(to_camel("created_at"), "createdAt");
        assert_eq!(to_camel("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_camel_acronym_runs() {
        assert_eq!(to_camel("user_id"), "userId");
        assert_eq!(to_camel("HTTPServer"), "httpServer");
        assert_eq!(to_camel("snake_HTTP_case"), "snakeHTTPCase");
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(to_snake(""), "");
        assert_eq!(to_camel(""), "");
        assert_eq!(to_snake("x"), "x");
        assert_eq!(to_camel("X"), "x");
    }
}
