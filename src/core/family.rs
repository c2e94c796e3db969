//! Family dental record store
//!
//! A [`Family`] holds one to six people, each with an upper and a lower
//! [`JawRecord`]. The people and the length of every layer are fixed once
//! the family is built; the only mutation is [`Family::extract`], which
//! flips one present tooth to [`ToothTag::Missing`].

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

use crate::core::roots::TagTotals;
use crate::core::tooth::{parse_code_string, ToothCodeError, ToothTag, MAX_TEETH};

/// Most people a family may hold
pub const MAX_PEOPLE: usize = 6;

/// Errors raised by the record store
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FamilyError {
    #[error("a family has between 1 and 6 people, got {0}")]
    #[diagnostic(code(ftr::family::people_count))]
    InvalidPeopleCount(usize),

    #[error("family member name is empty")]
    #[diagnostic(code(ftr::family::empty_name))]
    EmptyName,

    #[error(transparent)]
    #[diagnostic(code(ftr::family::tooth_code))]
    ToothCode(#[from] ToothCodeError),

    #[error("no family member at position {0}")]
    #[diagnostic(code(ftr::family::unknown_member))]
    UnknownMember(usize),

    #[error("tooth {number} does not exist ({count} teeth in this layer)")]
    #[diagnostic(code(ftr::family::tooth_out_of_range))]
    ToothOutOfRange { number: i64, count: usize },

    #[error("tooth {number} is already missing")]
    #[diagnostic(
        code(ftr::family::already_missing),
        help("choose a tooth that is still present")
    )]
    AlreadyMissing { number: usize },
}

/// Jaw layer selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Upper,
    Lower,
}

impl Layer {
    /// Both layers, upper first
    pub fn all() -> &'static [Layer] {
        &[Layer::Upper, Layer::Lower]
    }

    /// Parse a user selector: the first character, `U` or `L` in any case
    pub fn from_selector(input: &str) -> Option<Self> {
        match input.chars().next()?.to_ascii_uppercase() {
            'U' => Some(Layer::Upper),
            'L' => Some(Layer::Lower),
            _ => None,
        }
    }

    /// Label used in printed records
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Upper => "Uppers",
            Layer::Lower => "Lowers",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Upper => write!(f, "upper"),
            Layer::Lower => write!(f, "lower"),
        }
    }
}

/// The teeth of one layer, in position order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JawRecord {
    teeth: Vec<ToothTag>,
}

impl JawRecord {
    /// Create a layer from a code string such as `"IIBM"`
    pub fn from_codes(codes: &str) -> Result<Self, FamilyError> {
        Ok(Self {
            teeth: parse_code_string(codes)?,
        })
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.teeth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }

    /// Tag at a 1-based tooth number
    pub fn get(&self, number: usize) -> Option<ToothTag> {
        number
            .checked_sub(1)
            .and_then(|idx| self.teeth.get(idx))
            .copied()
    }

    pub fn teeth(&self) -> &[ToothTag] {
        &self.teeth
    }

    /// Render as `1:I  2:B  3:M`
    pub fn render(&self) -> String {
        self.teeth
            .iter()
            .enumerate()
            .map(|(idx, tag)| format!("{}:{}", idx + 1, tag))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// One family member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    upper: JawRecord,
    lower: JawRecord,
}

impl Person {
    /// Create a person; the name is trimmed and must not be empty
    pub fn new(name: &str, upper: JawRecord, lower: JawRecord) -> Result<Self, FamilyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FamilyError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            upper,
            lower,
        })
    }

    /// Create a person from upper and lower code strings
    pub fn from_codes(name: &str, upper: &str, lower: &str) -> Result<Self, FamilyError> {
        Self::new(name, JawRecord::from_codes(upper)?, JawRecord::from_codes(lower)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive full-name comparison
    pub fn is_named(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }

    pub fn layer(&self, layer: Layer) -> &JawRecord {
        match layer {
            Layer::Upper => &self.upper,
            Layer::Lower => &self.lower,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut JawRecord {
        match layer {
            Layer::Upper => &mut self.upper,
            Layer::Lower => &mut self.lower,
        }
    }
}

/// The whole family, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    people: Vec<Person>,
}

impl Family {
    /// Create a family of 1 to [`MAX_PEOPLE`] people
    pub fn new(people: Vec<Person>) -> Result<Self, FamilyError> {
        if !(1..=MAX_PEOPLE).contains(&people.len()) {
            return Err(FamilyError::InvalidPeopleCount(people.len()));
        }
        Ok(Self { people })
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Index of the first person whose name matches case-insensitively
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|p| p.is_named(name))
    }

    pub fn find(&self, name: &str) -> Option<&Person> {
        self.find_index(name).map(|idx| &self.people[idx])
    }

    /// Check that tooth `number` of a person's layer can be extracted.
    ///
    /// `person` is an index as returned by [`Family::find_index`].
    pub fn check_extractable(
        &self,
        person: usize,
        layer: Layer,
        number: i64,
    ) -> Result<usize, FamilyError> {
        let record = self
            .people
            .get(person)
            .ok_or(FamilyError::UnknownMember(person))?
            .layer(layer);
        let out_of_range = FamilyError::ToothOutOfRange {
            number,
            count: record.len(),
        };

        let slot = match usize::try_from(number) {
            Ok(n) if (1..=MAX_TEETH).contains(&n) && n <= record.len() => n,
            _ => return Err(out_of_range),
        };

        match record.get(slot) {
            Some(tag) if tag.is_present() => Ok(slot),
            Some(_) => Err(FamilyError::AlreadyMissing { number: slot }),
            None => Err(out_of_range),
        }
    }

    /// Extract a present tooth, marking it missing.
    ///
    /// Nothing changes when an error is returned.
    pub fn extract(&mut self, person: usize, layer: Layer, number: i64) -> Result<(), FamilyError> {
        let slot = self.check_extractable(person, layer, number)?;
        self.people[person].layer_mut(layer).teeth[slot - 1] = ToothTag::Missing;
        log::debug!(
            "extracted {} tooth {} of {}",
            layer,
            slot,
            self.people[person].name()
        );
        Ok(())
    }

    /// Family-wide tag counts over both layers of every person
    pub fn tag_totals(&self) -> TagTotals {
        self.people
            .iter()
            .flat_map(|p| Layer::all().iter().map(move |&l| p.layer(l)))
            .flat_map(|record| record.teeth().iter())
            .fold(TagTotals::default(), |mut totals, tag| {
                totals.add(*tag);
                totals
            })
    }
}
