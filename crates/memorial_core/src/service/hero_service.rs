//! Single-person hero view controller over the legacy document.
//!
//! # Responsibility
//! - Load the legacy document, falling back to demo content.
//! - Apply profile, about and relative edits; import/export one page.
//!
//! # Invariants
//! - Every accepted edit is persisted before the view state changes.
//! - View mode hides edit controls only; it never touches storage.

use crate::clock::now_epoch_ms;
use crate::demo::demo_legacy_document;
use crate::model::relative::{remove_relative, upsert_relative, RelativeDraft};
use crate::model::validation::ValidationError;
use crate::render::family_tree::render_family_tree;
use crate::render::hero::{render_about, render_hero};
use crate::render::{Region, RegionUpdate};
use crate::repo::legacy_repo::{LegacyDocument, LegacyPageStore, LoadOrigin};
use crate::repo::RepoError;
use crate::service::forms::{BioForm, HeroProfileForm};
use crate::storage::KvStore;
use crate::transfer::{export_single_page, parse_single_page, TransferError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum HeroServiceError {
    Validation(ValidationError),
    Transfer(TransferError),
    Repo(RepoError),
}

impl Display for HeroServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Transfer(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HeroServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Transfer(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for HeroServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<TransferError> for HeroServiceError {
    fn from(value: TransferError) -> Self {
        Self::Transfer(value)
    }
}

impl From<RepoError> for HeroServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

pub type HeroResult<T> = Result<T, HeroServiceError>;

pub struct HeroService<S: KvStore> {
    store: LegacyPageStore<S>,
    document: LegacyDocument,
    origin: LoadOrigin,
    view_mode: bool,
}

impl<S: KvStore> HeroService<S> {
    pub fn open(store: S) -> HeroResult<Self> {
        let mut store = LegacyPageStore::new(store);
        let (document, origin) = store.load_or_seed()?;
        Ok(Self {
            store,
            document,
            origin,
            view_mode: false,
        })
    }

    pub fn document(&self) -> &LegacyDocument {
        &self.document
    }

    /// Whether the document was read from storage or seeded from demo content.
    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    pub fn is_view_mode(&self) -> bool {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, enabled: bool) {
        self.view_mode = enabled;
    }

    pub fn profile_form(&self) -> HeroProfileForm {
        HeroProfileForm::from_person(&self.document.person)
    }

    pub fn about_form(&self) -> BioForm {
        BioForm::from_person(&self.document.person)
    }

    pub fn render_all(&self) -> Vec<RegionUpdate> {
        vec![self.hero(), self.about(), self.tree()]
    }

    pub fn update_profile(&mut self, form: &HeroProfileForm) -> HeroResult<Vec<RegionUpdate>> {
        let mut edited = self.document.clone();
        form.apply_to(&mut edited.person)?;
        self.commit(edited)?;
        Ok(vec![self.hero(), self.tree()])
    }

    pub fn update_about(&mut self, form: &BioForm) -> HeroResult<Vec<RegionUpdate>> {
        let mut edited = self.document.clone();
        form.apply_to(&mut edited.person);
        self.commit(edited)?;
        Ok(vec![self.about()])
    }

    pub fn save_relative(
        &mut self,
        draft: &RelativeDraft,
    ) -> HeroResult<(String, Vec<RegionUpdate>)> {
        let mut edited = self.document.clone();
        let id = upsert_relative(&mut edited.relatives, draft, now_epoch_ms())?;
        self.commit(edited)?;
        Ok((id, vec![self.tree()]))
    }

    pub fn delete_relative(&mut self, relative_id: &str) -> HeroResult<Vec<RegionUpdate>> {
        let mut edited = self.document.clone();
        if !remove_relative(&mut edited.relatives, relative_id) {
            return Err(ValidationError::RelativeNotFound(relative_id.to_string()).into());
        }
        self.commit(edited)?;
        Ok(vec![self.tree()])
    }

    /// JSON for the `memorial-page-export.json` download.
    pub fn export_json(&self) -> HeroResult<String> {
        Ok(export_single_page(&self.document)?)
    }

    /// Replaces the document from an exported file and re-renders everything.
    pub fn import_json(&mut self, json: &str) -> HeroResult<Vec<RegionUpdate>> {
        let document = parse_single_page(json)?;
        self.commit(document)?;
        self.origin = LoadOrigin::Stored;
        info!(
            "event=legacy_import module=service status=ok relatives={}",
            self.document.relatives.len()
        );
        Ok(self.render_all())
    }

    pub fn reset_to_demo(&mut self) -> HeroResult<Vec<RegionUpdate>> {
        self.commit(demo_legacy_document())?;
        self.origin = LoadOrigin::Demo;
        Ok(self.render_all())
    }

    pub fn into_inner(self) -> S {
        self.store.into_inner()
    }

    fn hero(&self) -> RegionUpdate {
        RegionUpdate::new(Region::Hero, render_hero(&self.document.person))
    }

    fn about(&self) -> RegionUpdate {
        RegionUpdate::new(Region::About, render_about(&self.document.person))
    }

    fn tree(&self) -> RegionUpdate {
        RegionUpdate::new(
            Region::FamilyTree,
            render_family_tree(&self.document.person, &self.document.relatives),
        )
    }

    fn commit(&mut self, document: LegacyDocument) -> HeroResult<()> {
        self.store.save(&document)?;
        self.document = document;
        Ok(())
    }
}
