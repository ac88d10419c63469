//! Edit-form inputs and how they apply to records.
//!
//! Every form is validated in full before the target record is touched;
//! values are trimmed and blank photos become absent.

use crate::model::non_blank;
use crate::model::person::Person;
use crate::model::validation::ValidationError;

/// Profile edit form of the indexed page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub years: String,
    pub location: String,
    pub quote: String,
    pub photo: String,
}

impl ProfileForm {
    /// Prefills the form from the current record.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            years: person.years.clone(),
            location: person.location.clone(),
            quote: person.quote.clone(),
            photo: person.photo.clone().unwrap_or_default(),
        }
    }

    pub fn apply_to(&self, person: &mut Person) -> Result<(), ValidationError> {
        let name = non_blank(&self.name).ok_or(ValidationError::BlankName)?;
        person.name = name;
        person.years = self.years.trim().to_string();
        person.location = self.location.trim().to_string();
        person.quote = self.quote.trim().to_string();
        person.photo = non_blank(&self.photo);
        Ok(())
    }
}

/// Profile edit form of the single-person hero view (no location field).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroProfileForm {
    pub name: String,
    pub years: String,
    pub quote: String,
    pub photo: String,
}

impl HeroProfileForm {
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            years: person.years.clone(),
            quote: person.quote.clone(),
            photo: person.photo.clone().unwrap_or_default(),
        }
    }

    pub fn apply_to(&self, person: &mut Person) -> Result<(), ValidationError> {
        let name = non_blank(&self.name).ok_or(ValidationError::BlankName)?;
        person.name = name;
        person.years = self.years.trim().to_string();
        person.quote = self.quote.trim().to_string();
        person.photo = non_blank(&self.photo);
        Ok(())
    }
}

/// Biography form shared by both views. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BioForm {
    pub bio: String,
    pub role: String,
    pub loved: String,
    pub key_memory: String,
}

impl BioForm {
    pub fn from_person(person: &Person) -> Self {
        Self {
            bio: person.bio.clone(),
            role: person.role_summary.role.clone(),
            loved: person.role_summary.loved.clone(),
            key_memory: person.role_summary.key_memory.clone(),
        }
    }

    pub fn apply_to(&self, person: &mut Person) {
        person.bio = self.bio.trim().to_string();
        person.role_summary.role = self.role.trim().to_string();
        person.role_summary.loved = self.loved.trim().to_string();
        person.role_summary.key_memory = self.key_memory.trim().to_string();
    }
}
