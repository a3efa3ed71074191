//! Candidate validation
//!
//! Turns raw form input into an [`Entry`], or into a per-field error map.
//! Each field is checked independently so the caller can show every
//! problem at once and keep the submit action disabled until the map is
//! empty.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::models::{Amount, AmountParseError, Category, Entry};

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Raw, unvalidated input for a new entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl Candidate {
    /// Create an empty candidate (every field absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the raw amount text
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// The fields of a candidate, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Description,
    Amount,
    Category,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Description, Field::Amount, Field::Category];

    pub fn name(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Description must contain at least {min} characters")]
    TooShort { min: usize },

    #[error("Amount is required")]
    MissingOrNotNumeric,

    #[error("Amount must be greater than or equal to 0.1")]
    TooSmall,

    #[error("Amount must be less than or equal to 1000000000.00")]
    TooLarge,

    #[error("Amount can have at most 2 decimal places")]
    TooPrecise,

    #[error("Must choose a category")]
    Required,
}

/// Field name to error, holding only the fields that failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Human-readable message for a field, if it failed
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|err| err.to_string())
    }

    /// Failed fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, *err))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, err)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, err)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn check_description(raw: Option<&str>) -> Result<String, FieldError> {
    let description = raw.unwrap_or_default();
    if description.chars().count() >= MIN_DESCRIPTION_LEN {
        Ok(description.to_string())
    } else {
        Err(FieldError::TooShort {
            min: MIN_DESCRIPTION_LEN,
        })
    }
}

fn check_amount(raw: Option<&str>) -> Result<Amount, FieldError> {
    let amount = match raw.map(Amount::parse) {
        Some(Ok(amount)) => amount,
        Some(Err(AmountParseError::TooPrecise(_))) => return Err(FieldError::TooPrecise),
        Some(Err(AmountParseError::OutOfRange { negative: true })) => {
            return Err(FieldError::TooSmall)
        }
        Some(Err(AmountParseError::OutOfRange { negative: false })) => {
            return Err(FieldError::TooLarge)
        }
        Some(Err(AmountParseError::Empty | AmountParseError::InvalidFormat(_))) | None => {
            return Err(FieldError::MissingOrNotNumeric)
        }
    };
    if amount < Amount::MIN_ENTRY {
        Err(FieldError::TooSmall)
    } else if amount > Amount::MAX_ENTRY {
        Err(FieldError::TooLarge)
    } else {
        Ok(amount)
    }
}

fn check_category(raw: Option<&str>) -> Result<Category, FieldError> {
    raw.and_then(Category::parse).ok_or(FieldError::Required)
}

/// Validate a candidate, producing an entry when every field passes
pub fn validate(candidate: &Candidate) -> Result<Entry, FieldErrors> {
    let description = check_description(candidate.description.as_deref());
    let amount = check_amount(candidate.amount.as_deref());
    let category = check_category(candidate.category.as_deref());

    match (description, amount, category) {
        (Ok(description), Ok(amount), Ok(category)) => {
            Ok(Entry::new(description, amount, category))
        }
        (description, amount, category) => {
            let mut errors = FieldErrors::default();
            if let Err(err) = description {
                errors.insert(Field::Description, err);
            }
            if let Err(err) = amount {
                errors.insert(Field::Amount, err);
            }
            if let Err(err) = category {
                errors.insert(Field::Category, err);
            }
            Err(errors)
        }
    }
}

/// Error map for a candidate; empty when it would be accepted
pub fn check(candidate: &Candidate) -> FieldErrors {
    validate(candidate).err().unwrap_or_default()
}
