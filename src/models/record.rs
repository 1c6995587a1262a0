//! Record model: one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::RecordError;
use crate::selection::IndexResolver;
use chrono::{Local, NaiveDate};

/// A contact: an immutable name, an ordered list of phones and an optional birthday.
///
/// Phone order matters, since edits and deletions address phones by index.
/// Duplicate phones are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with an optional initial phone and birthday.
    pub fn with_details(
        name: ContactName,
        phone: Option<PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Validate and append a batch of raw phone strings.
    ///
    /// A batch whose first entry is empty is skipped entirely. Otherwise
    /// every entry must validate or none is added.
    pub fn add_phones<S: AsRef<str>>(&mut self, raw: &[S]) -> Result<(), ValidationError> {
        match raw.first() {
            None => return Ok(()),
            Some(first) if first.as_ref().is_empty() => return Ok(()),
            Some(_) => {}
        }

        let phones = raw
            .iter()
            .map(|p| PhoneNumber::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.phones.extend(phones);
        Ok(())
    }

    /// Set the birthday, replacing any existing one.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Replace the phone at `index`.
    ///
    /// With more than one phone the `resolver` picks the index instead. With
    /// no phones the new phone is simply added.
    pub fn edit_phone(
        &mut self,
        phone: PhoneNumber,
        index: usize,
        resolver: &mut dyn IndexResolver,
    ) -> Result<(), RecordError> {
        if self.phones.is_empty() {
            self.phones.push(phone);
            return Ok(());
        }

        let index = self.resolve_index(index, resolver)?;
        match self.phones.get_mut(index) {
            Some(slot) => {
                *slot = phone;
                Ok(())
            }
            None => Err(RecordError::IndexOutOfRange(index)),
        }
    }

    /// Remove the phone at `index`, asking the `resolver` when more than one phone exists.
    pub fn delete_phone(
        &mut self,
        index: usize,
        resolver: &mut dyn IndexResolver,
    ) -> Result<PhoneNumber, RecordError> {
        let index = self.resolve_index(index, resolver)?;
        if index >= self.phones.len() {
            return Err(RecordError::IndexOutOfRange(index));
        }
        Ok(self.phones.remove(index))
    }

    fn resolve_index(
        &self,
        index: usize,
        resolver: &mut dyn IndexResolver,
    ) -> Result<usize, RecordError> {
        if self.phones.len() > 1 {
            Ok(resolver.resolve(self.name.as_str(), &self.phones)?)
        } else {
            Ok(index)
        }
    }

    /// Describe how many days remain until the birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> String {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same as [`Record::days_to_birthday`] with an explicit current date.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> String {
        let Some(birthday) = &self.birthday else {
            return format!("{}'s birthday is unknown", self.name);
        };

        match birthday.days_from(today) {
            0 => format!("{}'s birthday is today!", self.name),
            days => format!(
                "{} It's {} days to {}'s birthday.",
                birthday, days, self.name
            ),
        }
    }

    fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `name: phone1, phone2: birthday`, with an empty birthday field when unset.
    pub fn show_record(&self) -> String {
        format!(
            "{}: {}: {}",
            self.name,
            self.joined_phones(),
            self.birthday.as_ref().map(Birthday::as_str).unwrap_or("")
        )
    }

    /// `name: phone1, phone2`
    pub fn show_phone(&self) -> String {
        format!("{}: {}", self.name, self.joined_phones())
    }
}
