//! Input validation utilities

use axum::http::{HeaderMap, header::CONTENT_TYPE};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::models::Registration;

/// Header carrying the client's request timestamp
pub const REQUEST_DATE_HEADER: &str = "request-date";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Require a `Content-Type` of exactly `application/json`
pub fn validate_content_type(headers: &HeaderMap) -> Result<(), String> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    if content_type != Some(JSON_MEDIA_TYPE) {
        return Err("Only accept application/json".to_string());
    }

    Ok(())
}

/// Require a parseable `Request-Date` header
pub fn validate_request_date(headers: &HeaderMap) -> Result<(), String> {
    let valid = headers
        .get(REQUEST_DATE_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(is_valid_date);

    if !valid {
        return Err("Invalid or missing Request-Date format".to_string());
    }

    Ok(())
}

/// Accepts RFC 2822 / HTTP-date, RFC 3339, ISO 8601 and slash-separated dates
/// and date-times, and the `Date.prototype.toString()` rendering browsers send
pub fn is_valid_date(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    const NAIVE_DATE_TIMES: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M",
    ];
    const NAIVE_DATES: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

    DateTime::parse_from_rfc2822(value).is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
        || is_js_date_string(value)
        || NAIVE_DATE_TIMES
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
        || NAIVE_DATES
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}

/// `Wed Nov 01 2023 18:20:30 GMT+0800 (Taipei Standard Time)`; the zone name is optional
fn is_js_date_string(value: &str) -> bool {
    let without_zone_name = match value.find(" (") {
        Some(idx) if value.ends_with(')') => &value[..idx],
        _ => value,
    };

    DateTime::parse_from_str(without_zone_name, "%a %b %d %Y %H:%M:%S GMT%z").is_ok()
}

/// Parse and validate a registration body
pub fn parse_registration(body: &[u8]) -> Result<Registration, String> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| "Invalid JSON body".to_string())?;

    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    let (Some(name), Some(email), Some(password)) = (
        present_field(fields, "name"),
        present_field(fields, "email"),
        present_field(fields, "password"),
    ) else {
        return Err("Fields cannot be empty".to_string());
    };

    let name = string_field("name", name)?;
    let email = string_field("email", email)?;
    let password = string_field("password", password)?;

    validate_name(name)?;
    validate_email(email)?;

    Ok(Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// A field counts as present unless it is absent, null or an empty string
fn present_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields
        .get(key)
        .filter(|v| !v.is_null() && v.as_str() != Some(""))
}

/// Numbers, booleans, arrays and objects are rejected rather than coerced to text
fn string_field<'a>(key: &str, value: &'a Value) -> Result<&'a str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("Field {} must be a string", key))
}

/// Validate name
pub fn validate_name(name: &str) -> Result<(), String> {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Failed to compile name regex"));

    if !regex.is_match(name) {
        return Err("Name can only contain letters and numbers".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: Option<&str>, request_date: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
        }
        if let Some(date) = request_date {
            headers.insert(REQUEST_DATE_HEADER, HeaderValue::from_str(date).unwrap());
        }
        headers
    }

    #[test]
    fn test_content_type_must_match_exactly() {
        assert!(validate_content_type(&headers(Some("application/json"), None)).is_ok());
        assert!(validate_content_type(&headers(None, None)).is_err());
        assert!(validate_content_type(&headers(Some("text/plain"), None)).is_err());
        assert!(
            validate_content_type(&headers(Some("application/json; charset=utf-8"), None))
                .is_err()
        );
    }

    #[test]
    fn test_request_date_formats() {
        for date in [
            "Mon, 02 Jan 2006 15:04:05 GMT",
            "Tue, 15 Nov 1994 08:12:31 +0800",
            "2023-11-01T10:20:30Z",
            "2023-11-01T10:20:30.123+08:00",
            "2023-11-01T10:20:30",
            "2023-11-01 10:20:30",
            "2023-11-01",
            "2023/11/01 10:20:30",
            "2023/11/01 10:20",
            "2023/11/01",
            "Wed Nov 01 2023 18:20:30 GMT+0800 (Taipei Standard Time)",
            "Wed Nov 01 2023 18:20:30 GMT+0800",
        ] {
            assert!(is_valid_date(date), "expected {date} to parse");
        }

        for date in [
            "",
            "   ",
            "yesterday",
            "2023-13-01",
            "01/02/2023 25:00",
            "2023/02/30",
            "Wed Nov 01 2023 18:20:30 (Taipei Standard Time)",
        ] {
            assert!(!is_valid_date(date), "expected {date} to be rejected");
        }
    }

    #[test]
    fn test_request_date_header_required() {
        assert!(validate_request_date(&headers(None, Some("2023-11-01"))).is_ok());
        assert_eq!(
            validate_request_date(&headers(None, None)),
            Err("Invalid or missing Request-Date format".to_string())
        );
        assert!(validate_request_date(&headers(None, Some("not a date"))).is_err());
    }

    #[test]
    fn test_parse_registration() {
        let body = br#"{"name":"alice1","email":"a@b.com","password":"p"}"#;
        let registration = parse_registration(body).unwrap();
        assert_eq!(
            registration,
            Registration {
                name: "alice1".to_string(),
                email: "a@b.com".to_string(),
                password: "p".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_or_empty_fields() {
        let empty = Err("Fields cannot be empty".to_string());
        assert_eq!(parse_registration(br#"{"name":"a","email":"a@b.com"}"#), empty);
        assert_eq!(
            parse_registration(br#"{"name":"","email":"a@b.com","password":"p"}"#),
            empty
        );
        assert_eq!(
            parse_registration(br#"{"name":"a","email":null,"password":"p"}"#),
            empty
        );
        assert_eq!(parse_registration(b"[]"), empty);
    }

    #[test]
    fn test_non_string_fields_are_rejected() {
        assert_eq!(
            parse_registration(br#"{"name":7,"email":"a@b.com","password":"p"}"#),
            Err("Field name must be a string".to_string())
        );
        assert_eq!(
            parse_registration(br#"{"name":"alice1","email":"a@b.com","password":true}"#),
            Err("Field password must be a string".to_string())
        );
        assert_eq!(
            parse_registration(br#"{"name":"alice1","email":["a@b.com"],"password":"p"}"#),
            Err("Field email must be a string".to_string())
        );
    }

    #[test]
    fn test_missing_fields_reported_before_types() {
        assert_eq!(
            parse_registration(br#"{"name":7,"email":"a@b.com"}"#),
            Err("Fields cannot be empty".to_string())
        );
    }

    #[test]
    fn test_malformed_json() {
        assert_eq!(
            parse_registration(b"{not json"),
            Err("Invalid JSON body".to_string())
        );
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_name("alice1").is_ok());
        assert!(validate_name("ALICE").is_ok());
        for name in ["alice_1", "alice 1", "al!ce", "名字", "alice-"] {
            assert!(validate_name(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
        for email in ["ab.com", "a@bcom", "a@@b.com", "a b@c.com", "a@b.c om", "@b.com"] {
            assert!(validate_email(email).is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_field_checks_run_in_order() {
        let body = br#"{"name":"bad name","email":"nope","password":"p"}"#;
        assert_eq!(
            parse_registration(body),
            Err("Name can only contain letters and numbers".to_string())
        );
    }
}
