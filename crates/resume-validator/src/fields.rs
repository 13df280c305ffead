//! Field readers over raw JSON objects
//!
//! Every reader returns `None` after recording a [`FieldError`] for its path,
//! so callers can read all fields of a record before giving up on it.

use crate::error::{FieldError, FieldErrorKind, YEAR_CONSTRAINT_MESSAGE};
use resume_domain::profile::MIN_YEAR;
use serde_json::{Map, Value};
use url::Url;

/// Collected violations for one validation run
#[derive(Debug, Default)]
pub(crate) struct Violations {
    entries: Vec<FieldError>,
}

impl Violations {
    pub fn record(&mut self, path: &str, kind: FieldErrorKind, message: impl Into<String>) {
        self.entries.push(FieldError {
            path: path.to_string(),
            kind,
            message: message.into(),
        });
    }

    pub fn missing(&mut self, path: &str) {
        self.record(path, FieldErrorKind::Missing, "Field required");
    }

    pub fn wrong_type(&mut self, path: &str, expected: &str) {
        self.record(
            path,
            FieldErrorKind::WrongType,
            format!("Input should be a valid {}", expected),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<FieldError> {
        self.entries
    }
}

/// Join a parent path and a key
pub(crate) fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Treat JSON null the same as an absent key
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Read access to one JSON object with path tracking
pub(crate) struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Open a required object
    pub fn open(value: Option<&'a Value>, path: String, errs: &mut Violations) -> Option<Self> {
        match present(value) {
            None => {
                errs.missing(&path);
                None
            }
            Some(Value::Object(map)) => Some(Self { path, map }),
            Some(_) => {
                errs.wrong_type(&path, "object");
                None
            }
        }
    }

    fn path_of(&self, key: &str) -> String {
        join(&self.path, key)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        present(self.map.get(key))
    }

    /// Required nested object
    pub fn object(&self, key: &str, errs: &mut Violations) -> Option<Fields<'a>> {
        Fields::open(self.map.get(key), self.path_of(key), errs)
    }

    /// Required string, never coerced from other types
    pub fn string(&self, key: &str, errs: &mut Violations) -> Option<String> {
        let path = self.path_of(key);
        match self.get(key) {
            None => {
                errs.missing(&path);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                errs.wrong_type(&path, "string");
                None
            }
        }
    }

    /// Required boolean, never coerced from strings or numbers
    pub fn boolean(&self, key: &str, errs: &mut Violations) -> Option<bool> {
        let path = self.path_of(key);
        match self.get(key) {
            None => {
                errs.missing(&path);
                None
            }
            Some(Value::Bool(b)) => Some(*b),
            Some(_) => {
                errs.wrong_type(&path, "boolean");
                None
            }
        }
    }

    /// Optional boolean; the outer `None` signals a recorded error
    pub fn optional_boolean(&self, key: &str, errs: &mut Violations) -> Option<Option<bool>> {
        match self.get(key) {
            None => Some(None),
            Some(Value::Bool(b)) => Some(Some(*b)),
            Some(_) => {
                errs.wrong_type(&self.path_of(key), "boolean");
                None
            }
        }
    }

    /// Required number; numeric strings are accepted
    pub fn number(&self, key: &str, errs: &mut Violations) -> Option<f64> {
        let path = self.path_of(key);
        match self.get(key) {
            None => {
                errs.missing(&path);
                None
            }
            Some(value) => coerce_number(value).or_else(|| {
                errs.wrong_type(&path, "number");
                None
            }),
        }
    }

    /// Required year, checked on the raw value before it is cast to an integer
    pub fn year(&self, key: &str, errs: &mut Violations) -> Option<i32> {
        let path = self.path_of(key);
        let Some(raw) = self.get(key) else {
            errs.missing(&path);
            return None;
        };

        // Phase 1: range check on the raw input
        let value = match check_year(raw) {
            Ok(value) => value,
            Err((kind, message)) => {
                errs.record(&path, kind, message);
                return None;
            }
        };

        // Phase 2: integer coercion
        match coerce_year(value) {
            Ok(year) => Some(year),
            Err(message) => {
                errs.record(&path, FieldErrorKind::WrongType, message);
                None
            }
        }
    }

    /// Optional absolute http(s) URL; the outer `None` signals a recorded error
    pub fn optional_url(&self, key: &str, errs: &mut Violations) -> Option<Option<Url>> {
        let path = self.path_of(key);
        match self.get(key) {
            None => Some(None),
            Some(Value::String(s)) => match parse_http_url(s) {
                Ok(url) => Some(Some(url)),
                Err(reason) => {
                    errs.record(
                        &path,
                        FieldErrorKind::InvalidUrl,
                        format!("Input should be a valid URL, {}", reason),
                    );
                    None
                }
            },
            Some(_) => {
                errs.wrong_type(&path, "string");
                None
            }
        }
    }

    /// Required free-form object, kept as-is
    pub fn free_map(&self, key: &str, errs: &mut Violations) -> Option<Map<String, Value>> {
        self.object(key, errs).map(|fields| fields.map.clone())
    }

    /// Required list; yields each element with its path
    pub fn list(&self, key: &str, errs: &mut Violations) -> Option<Vec<(String, &'a Value)>> {
        let path = self.path_of(key);
        match self.get(key) {
            None => {
                errs.missing(&path);
                None
            }
            Some(value) => elements(value, &path, errs),
        }
    }

    /// Optional list; absent or null reads as empty
    pub fn optional_list(
        &self,
        key: &str,
        errs: &mut Violations,
    ) -> Option<Vec<(String, &'a Value)>> {
        match self.get(key) {
            None => Some(Vec::new()),
            Some(value) => elements(value, &self.path_of(key), errs),
        }
    }

    /// Path of this object
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Entries of this object in document order
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.map.iter()
    }
}

fn elements<'a>(
    value: &'a Value,
    path: &str,
    errs: &mut Violations,
) -> Option<Vec<(String, &'a Value)>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(idx, item)| (format!("{}[{}]", path, idx), item))
                .collect(),
        ),
        _ => {
            errs.wrong_type(path, "list");
            None
        }
    }
}

/// Read a JSON number or a numeric string as a finite float
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Pre-coercion check: the raw value must be numeric and at least 1900
fn check_year(raw: &Value) -> Result<f64, (FieldErrorKind, String)> {
    let value = coerce_number(raw).ok_or_else(|| {
        (
            FieldErrorKind::WrongType,
            "Input should be a valid integer".to_string(),
        )
    })?;

    if value < MIN_YEAR as f64 {
        return Err((
            FieldErrorKind::ConstraintViolation,
            YEAR_CONSTRAINT_MESSAGE.to_string(),
        ));
    }

    Ok(value)
}

fn coerce_year(value: f64) -> Result<i32, String> {
    if value.fract() != 0.0 {
        return Err("Input should be a valid integer, got a number with a fractional part".to_string());
    }
    if value > i32::MAX as f64 {
        return Err("Input should be a valid integer, value is too large".to_string());
    }
    Ok(value as i32)
}

fn parse_http_url(input: &str) -> Result<Url, String> {
    let url = Url::parse(input.trim()).map_err(|e| e.to_string())?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("URL scheme '{}' is not http or https", other)),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("empty host".to_string());
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_year_boundary() {
        assert_eq!(check_year(&json!(1900)).unwrap(), 1900.0);
        let (kind, message) = check_year(&json!(1899)).unwrap_err();
        assert_eq!(kind, FieldErrorKind::ConstraintViolation);
        assert_eq!(message, YEAR_CONSTRAINT_MESSAGE);
    }

    #[test]
    fn test_check_year_runs_before_coercion() {
        // A fractional value below the bound fails on range, not on integer casting
        let (kind, _) = check_year(&json!(1899.5)).unwrap_err();
        assert_eq!(kind, FieldErrorKind::ConstraintViolation);

        // Numeric strings are range-checked on their raw value
        let (kind, _) = check_year(&json!("1500")).unwrap_err();
        assert_eq!(kind, FieldErrorKind::ConstraintViolation);
        assert_eq!(check_year(&json!(" 2014 ")).unwrap(), 2014.0);
    }

    #[test]
    fn test_check_year_rejects_non_numeric() {
        let (kind, _) = check_year(&json!("<Start Year>")).unwrap_err();
        assert_eq!(kind, FieldErrorKind::WrongType);
        let (kind, _) = check_year(&json!(true)).unwrap_err();
        assert_eq!(kind, FieldErrorKind::WrongType);
    }

    #[test]
    fn test_coerce_year() {
        assert_eq!(coerce_year(2010.0).unwrap(), 2010);
        assert!(coerce_year(2010.5).is_err());
        assert!(coerce_year(1e12).is_err());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(4)), Some(4.0));
        assert_eq!(coerce_number(&json!("2.5")), Some(2.5));
        assert_eq!(coerce_number(&json!("four")), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!(false)), None);
    }

    #[test]
    fn test_parse_http_url() {
        assert!(parse_http_url("https://www.linkedin.com/in/ada").is_ok());
        assert!(parse_http_url("http://github.com/ada").is_ok());
        assert!(parse_http_url("not-a-url").is_err());
        assert!(parse_http_url("linkedin.com/in/ada").is_err());
        assert!(parse_http_url("mailto:ada@example.com").is_err());
        assert!(parse_http_url("ftp://files.example.com").is_err());
    }

    #[test]
    fn test_fields_collects_every_error() {
        let raw = json!({"name": 7, "flag": "true", "when": null});
        let mut errs = Violations::default();
        let fields = Fields::open(Some(&raw), "root".to_string(), &mut errs).unwrap();

        assert!(fields.string("name", &mut errs).is_none());
        assert!(fields.boolean("flag", &mut errs).is_none());
        assert!(fields.string("when", &mut errs).is_none());
        assert_eq!(fields.optional_boolean("absent", &mut errs), Some(None));

        let entries = errs.into_entries();
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["root.name", "root.flag", "root.when"]);
        assert_eq!(entries[0].kind, FieldErrorKind::WrongType);
        assert_eq!(entries[2].kind, FieldErrorKind::Missing);
    }

    #[test]
    fn test_list_paths() {
        let raw = json!({"items": [1, 2]});
        let mut errs = Violations::default();
        let fields = Fields::open(Some(&raw), String::new(), &mut errs).unwrap();

        let items = fields.list("items", &mut errs).unwrap();
        assert_eq!(items[0].0, "items[0]");
        assert_eq!(items[1].0, "items[1]");
        assert!(fields.optional_list("nothing", &mut errs).unwrap().is_empty());
        assert!(errs.is_empty());
    }
}
