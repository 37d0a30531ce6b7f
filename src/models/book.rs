//! Book model
//!
//! Field values other than `id` are kept as the JSON the client sent, so a
//! title given as a number is stored and echoed back as that number.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Assigned at creation, never changed afterwards
    pub id: i64,
    #[schema(value_type = String)]
    pub title: Value,
    #[schema(value_type = String)]
    pub author: Value,
    #[schema(value_type = String)]
    pub genre: Value,
    /// Number of copies on the shelf
    #[schema(value_type = u32)]
    pub copies_available: Value,
}

/// Create book request
#[derive(Debug, Default, Clone, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateBook {
    #[schema(value_type = Option<String>)]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub author: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub genre: Option<Value>,
    /// Defaults to 0 when omitted
    #[schema(value_type = Option<u32>)]
    pub copies_available: Option<Value>,
}

/// Update book request; every field is optional.
///
/// `None` means the key was absent from the body, while `Some(Value::Null)`
/// means it was sent as `null`.
#[derive(Debug, Default, Clone, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateBook {
    #[schema(value_type = Option<String>)]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub author: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub genre: Option<Value>,
    #[schema(value_type = Option<u32>)]
    pub copies_available: Option<Value>,
}

impl From<Map<String, Value>> for CreateBook {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            title: body.remove("title"),
            author: body.remove("author"),
            genre: body.remove("genre"),
            copies_available: body.remove("copiesAvailable"),
        }
    }
}

impl From<Map<String, Value>> for UpdateBook {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            title: body.remove("title"),
            author: body.remove("author"),
            genre: body.remove("genre"),
            copies_available: body.remove("copiesAvailable"),
        }
    }
}

/// JavaScript truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy_field(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(v))
}

impl Validate for CreateBook {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (name, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ] {
            if truthy_field(value.as_ref()).is_none() {
                errors.add(name, ValidationError::new("required"));
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Book {
    /// Records the collection starts with
    pub fn seed() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "The Great Gatsby".into(),
                author: "F. Scott Fitzgerald".into(),
                genre: "Fiction".into(),
                copies_available: 5.into(),
            },
            Book {
                id: 2,
                title: "To Kill a Mockingbird".into(),
                author: "Harper Lee".into(),
                genre: "Fiction".into(),
                copies_available: 3.into(),
            },
            Book {
                id: 3,
                title: "1984".into(),
                author: "George Orwell".into(),
                genre: "Dystopian Fiction".into(),
                copies_available: 7.into(),
            },
        ]
    }

    /// Overwrite the fields supplied by `data`.
    ///
    /// Text fields are only taken when truthy, while `copies_available`
    /// is taken whenever the key is present, including `0` and `null`.
    pub fn apply_update(&mut self, data: &UpdateBook) {
        macro_rules! set_if_truthy {
            ($field:ident) => {
                if let Some(value) = truthy_field(data.$field.as_ref()) {
                    self.$field = value.clone();
                }
            };
        }

        set_if_truthy!(title);
        set_if_truthy!(author);
        set_if_truthy!(genre);

        if let Some(copies) = &data.copies_available {
            self.copies_available = copies.clone();
        }
    }
}

/// Parse a book id from a path segment.
///
/// Takes the leading integer of the segment. Leading whitespace and an
/// optional sign are accepted and anything after the digits is ignored, so
/// `"2abc"` is 2. Returns `None` when no digits lead the segment or the
/// value does not fit in an `i64`.
pub fn parse_book_id(segment: &str) -> Option<i64> {
    let trimmed = segment.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
