//! Profile (detail) view controller for one indexed page.
//!
//! # Responsibility
//! - Load one page by id and keep it as the view's record.
//! - Apply profile, biography, timeline and relative edits, persisting each.
//! - Delete the page.
//!
//! # Invariants
//! - A view only exists for a page that loaded successfully.
//! - The record held by the view always equals the last persisted state.

use crate::clock::now_epoch_ms;
use crate::model::page::{Page, PageId};
use crate::model::relative::{remove_relative, upsert_relative, RelativeDraft};
use crate::model::timeline::TimelineEdit;
use crate::model::validation::ValidationError;
use crate::render::family_tree::render_family_tree;
use crate::render::profile::{
    page_title, render_bio_tab, render_profile_header, render_timeline_sidebar,
};
use crate::render::{Region, RegionUpdate};
use crate::repo::page_repo::PageRepository;
use crate::repo::RepoError;
use crate::service::forms::{BioForm, ProfileForm};
use crate::storage::KvStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced by the profile view.
///
/// `MissingPageId` and `PageNotFound` mean "go back to the list".
#[derive(Debug)]
pub enum ProfileServiceError {
    MissingPageId,
    PageNotFound(PageId),
    Validation(ValidationError),
    Repo(RepoError),
}

impl Display for ProfileServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPageId => write!(f, "no page id given"),
            Self::PageNotFound(id) => write!(f, "page not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProfileServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::MissingPageId | Self::PageNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for ProfileServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ProfileServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

pub type ProfileResult<T> = Result<T, ProfileServiceError>;

/// Controller state of the profile view.
pub struct ProfileService<S: KvStore> {
    repo: PageRepository<S>,
    page: Page,
    edit_mode: bool,
}

impl<S: KvStore> ProfileService<S> {
    /// Opens the view for `page_id` (as read from the location query).
    pub fn open(repo: PageRepository<S>, page_id: Option<&str>) -> ProfileResult<Self> {
        let id = page_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ProfileServiceError::MissingPageId)?;
        let page = repo
            .get_page(id)?
            .ok_or_else(|| ProfileServiceError::PageNotFound(id.to_string()))?;
        Ok(Self {
            repo,
            page,
            edit_mode: false,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn title(&self) -> String {
        page_title(&self.page.person)
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Flips edit mode and returns the new state.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        self.edit_mode
    }

    pub fn profile_form(&self) -> ProfileForm {
        ProfileForm::from_person(&self.page.person)
    }

    pub fn bio_form(&self) -> BioForm {
        BioForm::from_person(&self.page.person)
    }

    pub fn render_all(&self) -> Vec<RegionUpdate> {
        vec![self.header(), self.timeline(), self.bio(), self.tree()]
    }

    pub fn update_profile(&mut self, form: &ProfileForm) -> ProfileResult<Vec<RegionUpdate>> {
        let mut edited = self.page.clone();
        form.apply_to(&mut edited.person)?;
        self.commit(edited)?;
        Ok(vec![self.header(), self.tree()])
    }

    pub fn update_bio(&mut self, form: &BioForm) -> ProfileResult<Vec<RegionUpdate>> {
        let mut edited = self.page.clone();
        form.apply_to(&mut edited.person);
        self.commit(edited)?;
        Ok(vec![self.bio()])
    }

    /// Replaces one timeline section wholesale.
    pub fn update_timeline(&mut self, edit: &TimelineEdit) -> ProfileResult<Vec<RegionUpdate>> {
        let mut edited = self.page.clone();
        edited.timeline.apply(edit);
        self.commit(edited)?;
        Ok(vec![self.timeline()])
    }

    /// Adds or updates a relative; returns its id.
    pub fn save_relative(
        &mut self,
        draft: &RelativeDraft,
    ) -> ProfileResult<(String, Vec<RegionUpdate>)> {
        let mut edited = self.page.clone();
        let id = upsert_relative(&mut edited.relatives, draft, now_epoch_ms())?;
        self.commit(edited)?;
        Ok((id, vec![self.tree()]))
    }

    pub fn delete_relative(&mut self, relative_id: &str) -> ProfileResult<Vec<RegionUpdate>> {
        let mut edited = self.page.clone();
        if !remove_relative(&mut edited.relatives, relative_id) {
            return Err(ValidationError::RelativeNotFound(relative_id.to_string()).into());
        }
        self.commit(edited)?;
        Ok(vec![self.tree()])
    }

    /// Deletes the page and hands the repository back for the list view.
    pub fn delete_page(mut self) -> ProfileResult<PageRepository<S>> {
        self.repo.delete_page(&self.page.id)?;
        Ok(self.repo)
    }

    pub fn into_repository(self) -> PageRepository<S> {
        self.repo
    }

    fn header(&self) -> RegionUpdate {
        RegionUpdate::new(
            Region::ProfileHeader,
            render_profile_header(&self.page.person),
        )
    }

    fn timeline(&self) -> RegionUpdate {
        RegionUpdate::new(
            Region::TimelineSidebar,
            render_timeline_sidebar(&self.page.timeline),
        )
    }

    fn bio(&self) -> RegionUpdate {
        RegionUpdate::new(Region::BioTab, render_bio_tab(&self.page.person))
    }

    fn tree(&self) -> RegionUpdate {
        RegionUpdate::new(
            Region::FamilyTree,
            render_family_tree(&self.page.person, &self.page.relatives),
        )
    }

    fn commit(&mut self, mut edited: Page) -> ProfileResult<()> {
        self.repo.save_page(&mut edited)?;
        self.page = edited;
        Ok(())
    }
}
