use crate::core::filter::filter_graduates;
use crate::domain::model::{Graduate, GraduateDraft};
use crate::domain::ports::{GraduateStore, Notifier};
use crate::utils::error::{PortalError, Result};
use crate::utils::validation::validate_draft;

/// One user's working state: the record cache plus all transient form state,
/// with explicit reset points instead of ambient globals.
///
/// Cache mutation contract, per operation:
///   - `load` replaces the cache wholesale, and only on success;
///   - `submit` (create) appends the one server-returned record;
///   - `submit` (update) replaces the one record with the edited id in place;
///   - `delete` removes the one record with the given id;
///   - everything else leaves the cache untouched.
/// No operation mutates the cache before the server has answered.
pub struct Session<S: GraduateStore, N: Notifier> {
    store: S,
    notifier: N,
    cache: Vec<Graduate>,
    draft: GraduateDraft,
    editing_id: Option<u64>,
    skill_input: String,
    search_term: String,
    form_open: bool,
}

impl<S: GraduateStore, N: Notifier> Session<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            cache: Vec::new(),
            draft: GraduateDraft::new(),
            editing_id: None,
            skill_input: String::new(),
            search_term: String::new(),
            form_open: false,
        }
    }

    pub fn cache(&self) -> &[Graduate] {
        &self.cache
    }

    pub fn draft(&self) -> &GraduateDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut GraduateDraft {
        &mut self.draft
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.editing_id
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Fetches all records and replaces the cache. On failure the cache is
    /// left as it was and the error is returned for the caller to report.
    pub async fn load(&mut self) -> Result<usize> {
        let records = self.store.list().await?;
        self.cache = records;
        tracing::info!("Loaded {} graduates", self.cache.len());
        Ok(self.cache.len())
    }

    /// `load` with up to `retries` extra attempts. This is the only retry in
    /// the system, and it is opt-in. Exhausting the budget reports the
    /// failure through the notifier before returning it.
    pub async fn load_with_retries(&mut self, retries: u32) -> Result<usize> {
        let mut attempt = 0;
        loop {
            match self.load().await {
                Ok(count) => return Ok(count),
                Err(e) if attempt < retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Failed to load graduates (attempt {}/{}): {}",
                        attempt,
                        retries + 1,
                        e
                    );
                }
                Err(e) => {
                    self.notifier.error(&e.user_friendly_message());
                    return Err(e);
                }
            }
        }
    }

    /// Opens a fresh creation form. Reset point: draft, skill buffer, and any
    /// previous editing id are cleared.
    pub fn open_new(&mut self) {
        self.draft = GraduateDraft::new();
        self.skill_input.clear();
        self.editing_id = None;
        self.form_open = true;
    }

    /// Opens the form pre-filled from the cached record with `id`. An id not
    /// present in the cache is reported and returned as an error.
    pub fn open_edit(&mut self, id: u64) -> Result<()> {
        let Some(record) = self.cache.iter().find(|g| g.id == id) else {
            let e = PortalError::UnknownRecordError { id };
            self.notifier.error(&e.user_friendly_message());
            return Err(e);
        };
        self.draft = GraduateDraft::from_record(record);
        self.skill_input.clear();
        self.editing_id = Some(id);
        self.form_open = true;
        Ok(())
    }

    /// Clears the draft fields without leaving the form or dropping the
    /// editing id ("Clear All").
    pub fn clear_form(&mut self) {
        self.draft = GraduateDraft::new();
        self.skill_input.clear();
    }

    /// Abandons the form entirely. Reset point: draft, skill buffer, editing
    /// id, and modal visibility all return to their initial state.
    pub fn cancel(&mut self) {
        self.clear_form();
        self.editing_id = None;
        self.form_open = false;
    }

    pub fn set_skill_input(&mut self, value: &str) {
        self.skill_input = value.to_string();
    }

    pub fn skill_input(&self) -> &str {
        &self.skill_input
    }

    /// Commits the skill buffer into the draft's chip list. This is the
    /// "press Enter" action; typing alone never adds a chip. The buffer is
    /// cleared only when the chip was actually added, so a rejected entry
    /// stays visible for the user to correct.
    pub fn commit_skill_input(&mut self) {
        if self.draft.add_skill(&self.skill_input) {
            self.skill_input.clear();
        }
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.draft.remove_skill(skill);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Currently visible records: the filter applied to the cache.
    pub fn visible(&self) -> Vec<&Graduate> {
        filter_graduates(&self.cache, &self.search_term)
    }

    /// Validates and submits the draft, creating or updating depending on
    /// whether an edit is in progress. On success the cache is patched with
    /// the server's record and the form resets; every failure leaves both the
    /// cache and the form untouched.
    pub async fn submit(&mut self) -> Result<u64> {
        if let Err(reason) = validate_draft(&self.draft, &self.cache, self.editing_id) {
            self.notifier.error(&reason.to_string());
            return Err(reason.into());
        }

        let outcome = match self.editing_id {
            Some(id) => match self.store.update(id, &self.draft).await {
                Ok(updated) => {
                    // Replace in place; length and relative position are kept.
                    if let Some(slot) = self.cache.iter_mut().find(|g| g.id == id) {
                        *slot = updated;
                    }
                    self.notifier.success("Graduate updated successfully!");
                    Ok(id)
                }
                Err(e) => Err(e),
            },
            None => match self.store.create(&self.draft).await {
                Ok(created) => {
                    let id = created.id;
                    self.cache.push(created);
                    self.notifier.success("Graduate added successfully!");
                    Ok(id)
                }
                Err(e) => Err(e),
            },
        };

        match outcome {
            Ok(id) => {
                self.cancel();
                Ok(id)
            }
            Err(e) => {
                self.notifier.error(&e.user_friendly_message());
                Err(e)
            }
        }
    }

    /// Deletes the record with `id` from the server, then from the cache.
    pub async fn delete(&mut self, id: u64) -> Result<()> {
        match self.store.delete(id).await {
            Ok(()) => {
                self.cache.retain(|g| g.id != id);
                self.notifier.success("Graduate deleted!");
                Ok(())
            }
            Err(e) => {
                self.notifier.error(&e.user_friendly_message());
                Err(e)
            }
        }
    }
}
