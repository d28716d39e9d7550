// ============================================================================
// Users Core - Validation
// File: crates/users-core/src/domain/validation.rs
// Description: Field rules for sanitized input and the path id gate
// ============================================================================
//! Every rule runs on every request; violations come back in rule order so
//! callers can report all of them at once. Empty optional fields count as
//! absent and skip their checks.

use std::fmt;

use validator::ValidateEmail;

use users_shared::constants::{
    MAX_CITY_LENGTH, MAX_LATITUDE, MAX_LONGITUDE, MAX_PHONE_LENGTH, MAX_STREET_LENGTH,
    MAX_ZIPCODE_LENGTH, MIN_LATITUDE, MIN_LONGITUDE,
};
use users_shared::EntityId;

use crate::domain::{SanitizedUser, UserRecord};
use crate::error::DomainError;

/// User field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Street,
    City,
    Zipcode,
    GeoLat,
    GeoLng,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Street => "street",
            Field::City => "city",
            Field::Zipcode => "zipcode",
            Field::GeoLat => "geo_lat",
            Field::GeoLng => "geo_lng",
        }
    }
}

/// The rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    EmailFormat,
    MaxLength(usize),
    Range { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Violation {
    pub field: Field,
    pub rule: Rule,
}

impl Violation {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// Human-readable message sent back to API clients.
    pub fn message(&self) -> String {
        match (self.field, self.rule) {
            (Field::Name, Rule::Required) => "Name is required".to_string(),
            (Field::Email, Rule::Required) => "Email is required".to_string(),
            (Field::Email, Rule::EmailFormat) => "Invalid email format".to_string(),
            (Field::Phone, Rule::MaxLength(max)) => {
                format!("Phone number is too long (max {} characters)", max)
            }
            (Field::Street, Rule::MaxLength(max)) => {
                format!("Street address is too long (max {} characters)", max)
            }
            (Field::City, Rule::MaxLength(max)) => {
                format!("City name is too long (max {} characters)", max)
            }
            (Field::Zipcode, Rule::MaxLength(max)) => {
                format!("Zipcode is too long (max {} characters)", max)
            }
            (Field::GeoLat, Rule::Range { min, max }) => {
                format!("Latitude must be a number between {} and {}", min, max)
            }
            (Field::GeoLng, Rule::Range { min, max }) => {
                format!("Longitude must be a number between {} and {}", min, max)
            }
            (field, Rule::Required) => format!("{} is required", field.as_str()),
            (field, Rule::EmailFormat) => format!("{} must be a valid email", field.as_str()),
            (field, Rule::MaxLength(max)) => {
                format!("{} is too long (max {} characters)", field.as_str(), max)
            }
            (field, Rule::Range { min, max }) => {
                format!("{} must be a number between {} and {}", field.as_str(), min, max)
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Ordered, non-empty list of violations from one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<Violation>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(Violation::message).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: Field, rule: Rule) -> bool {
        self.0.contains(&Violation::new(field, rule))
    }
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Lengths are measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
fn check_length(violations: &mut Vec<Violation>, field: Field, value: &str, max: usize) {
    if !value.is_empty() && value.encode_utf16().count() > max {
        violations.push(Violation::new(field, Rule::MaxLength(max)));
    }
}

/// The domain must end in a top-level label of at least two letters
/// (or an IDNA `xn--` label). Bare hosts like `localhost` are rejected.
fn has_tld(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() => {
            tld.starts_with("xn--")
                || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic))
        }
        _ => false,
    }
}

fn check_range(violations: &mut Vec<Violation>, field: Field, value: &str, min: f64, max: f64) {
    if value.is_empty() {
        return;
    }
    let in_range = value
        .parse::<f64>()
        .map(|n| n.is_finite() && n >= min && n <= max)
        .unwrap_or(false);
    if !in_range {
        violations.push(Violation::new(field, Rule::Range { min, max }));
    }
}

impl SanitizedUser {
    /// Applies every field rule and returns the storable record, or all
    /// violations in rule order.
    pub fn validate(self) -> Result<UserRecord, ValidationErrors> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push(Violation::new(Field::Name, Rule::Required));
        }

        if self.email.is_empty() {
            violations.push(Violation::new(Field::Email, Rule::Required));
        } else if !self.email.validate_email() || !has_tld(&self.email) {
            violations.push(Violation::new(Field::Email, Rule::EmailFormat));
        }

        check_length(&mut violations, Field::Phone, &self.phone, MAX_PHONE_LENGTH);
        check_length(&mut violations, Field::Street, &self.street, MAX_STREET_LENGTH);
        check_length(&mut violations, Field::City, &self.city, MAX_CITY_LENGTH);
        check_length(&mut violations, Field::Zipcode, &self.zipcode, MAX_ZIPCODE_LENGTH);

        check_range(&mut violations, Field::GeoLat, &self.geo_lat, MIN_LATITUDE, MAX_LATITUDE);
        check_range(&mut violations, Field::GeoLng, &self.geo_lng, MIN_LONGITUDE, MAX_LONGITUDE);

        if !violations.is_empty() {
            return Err(ValidationErrors(violations));
        }

        Ok(UserRecord {
            name: self.name,
            email: self.email,
            phone: optional(self.phone),
            street: optional(self.street),
            city: optional(self.city),
            zipcode: optional(self.zipcode),
            geo_lat: optional(self.geo_lat),
            geo_lng: optional(self.geo_lng),
        })
    }
}

/// Path id gate: accepts only a positive decimal integer.
pub fn parse_user_id(raw: &str) -> Result<EntityId, DomainError> {
    match raw.parse::<EntityId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::InvalidUserId(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SanitizedUser {
        SanitizedUser {
            name: "Clementine Bauch".to_string(),
            email: "nathan@yesenia.net".to_string(),
            phone: "1-463-123-4447".to_string(),
            street: "Douglas Extension".to_string(),
            city: "McKenziehaven".to_string(),
            zipcode: "59590-4157".to_string(),
            geo_lat: "-68.6102".to_string(),
            geo_lng: "-47.0653".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let record = valid().validate().unwrap();
        assert_eq!(record.name, "Clementine Bauch");
        assert_eq!(record.geo_lat.as_deref(), Some("-68.6102"));
    }

    #[test]
    fn test_missing_name_and_email_reported_together() {
        let input = SanitizedUser { name: String::new(), email: String::new(), ..valid() };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.messages(), vec!["Name is required", "Email is required"]);
    }

    #[test]
    fn test_required_email_takes_precedence_over_format() {
        let input = SanitizedUser { email: String::new(), ..valid() };
        let errors = input.validate().unwrap_err();
        assert!(errors.has(Field::Email, Rule::Required));
        assert!(!errors.has(Field::Email, Rule::EmailFormat));
    }

    #[test]
    fn test_invalid_email_format() {
        for bad in ["not-an-email", "a@localhost", "a@b", "a@b.c", "a@example.123", "a@[127.0.0.1]"] {
            let input = SanitizedUser { email: bad.to_string(), ..valid() };
            let errors = input.validate().unwrap_err();
            assert_eq!(errors.messages(), vec!["Invalid email format"], "email = {}", bad);
        }
    }

    #[test]
    fn test_email_with_tld_passes() {
        for good in ["a@b.io", "rey.padberg@karina.biz", "x@sub.example.co.uk", "x@example.xn--p1ai"] {
            let input = SanitizedUser { email: good.to_string(), ..valid() };
            assert!(input.validate().is_ok(), "email = {}", good);
        }
    }

    #[test]
    fn test_length_limits() {
        let input = SanitizedUser {
            phone: "1".repeat(16),
            street: "s".repeat(201),
            city: "c".repeat(101),
            zipcode: "z".repeat(21),
            ..valid()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            vec![
                "Phone number is too long (max 15 characters)",
                "Street address is too long (max 200 characters)",
                "City name is too long (max 100 characters)",
                "Zipcode is too long (max 20 characters)",
            ]
        );
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let input = SanitizedUser {
            phone: "1".repeat(15),
            city: "é".repeat(100),
            ..valid()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Each emoji is a surrogate pair: 7 fit in 15 units, 8 do not.
        let input = SanitizedUser { phone: "📞".repeat(7), ..valid() };
        assert!(input.validate().is_ok());

        let input = SanitizedUser { phone: "📞".repeat(8), ..valid() };
        let errors = input.validate().unwrap_err();
        assert!(errors.has(Field::Phone, Rule::MaxLength(15)));
    }

    #[test]
    fn test_latitude_range() {
        for bad in ["91", "-100", "90.0001", "abc", "NaN", "inf"] {
            let input = SanitizedUser { geo_lat: bad.to_string(), ..valid() };
            let errors = input.validate().unwrap_err();
            assert_eq!(
                errors.messages(),
                vec!["Latitude must be a number between -90 and 90"],
                "geo_lat = {}",
                bad
            );
        }
        for good in ["90", "-90", "0"] {
            let input = SanitizedUser { geo_lat: good.to_string(), ..valid() };
            assert!(input.validate().is_ok(), "geo_lat = {}", good);
        }
    }

    #[test]
    fn test_longitude_range() {
        let input = SanitizedUser { geo_lng: "180.5".to_string(), ..valid() };
        let errors = input.validate().unwrap_err();
        assert!(errors.has(Field::GeoLng, Rule::Range { min: -180.0, max: 180.0 }));

        let input = SanitizedUser { geo_lng: "-180".to_string(), ..valid() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_optionals_are_absent() {
        let input = SanitizedUser {
            name: "Patricia Lebsack".to_string(),
            email: "julianne@kory.org".to_string(),
            ..SanitizedUser::default()
        };
        let record = input.validate().unwrap();
        assert_eq!(record.phone, None);
        assert_eq!(record.geo_lat, None);
        assert_eq!(record.geo_lng, None);
    }

    #[test]
    fn test_all_violations_reported() {
        let input = SanitizedUser {
            email: "bad".to_string(),
            zipcode: "z".repeat(30),
            geo_lng: "east".to_string(),
            ..SanitizedUser::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.violations()[0].field, Field::Name);
        assert_eq!(errors.violations()[3].field, Field::GeoLng);
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("1").unwrap(), 1);
        assert_eq!(parse_user_id("42").unwrap(), 42);
        for bad in ["0", "-3", "abc", "", "1.5", " 7", "99999999999999999999"] {
            assert!(
                matches!(parse_user_id(bad), Err(DomainError::InvalidUserId(_))),
                "id = {:?}",
                bad
            );
        }
    }
}
