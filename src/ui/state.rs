use crate::catalog::Education;
use crate::error::{CareerError, Result};
use crate::matcher::selection::normalize_token;
use crate::matcher::Selection;
use std::collections::BTreeSet;
use tracing::trace;

type Listener = Box<dyn FnMut(&SelectionState)>;

/// Mutable selection owned by the front-end. Every change bumps `revision`
/// and notifies subscribers so the view can redraw.
#[derive(Default)]
pub struct SelectionState {
    skills: BTreeSet<String>,
    interests: BTreeSet<String>,
    education: Option<Education>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Adds the skill if absent, removes it otherwise. Returns whether the
    /// skill is selected afterwards.
    pub fn toggle_skill(&mut self, token: &str) -> bool {
        let Some(token) = normalize_token(token) else {
            return false;
        };
        let selected = toggle(&mut self.skills, token);
        self.changed();
        selected
    }

    pub fn toggle_interest(&mut self, token: &str) -> bool {
        let Some(token) = normalize_token(token) else {
            return false;
        };
        let selected = toggle(&mut self.interests, token);
        self.changed();
        selected
    }

    pub fn set_education(&mut self, education: Option<Education>) {
        if self.education != education {
            self.education = education;
            self.changed();
        }
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        if self.skills.is_empty() && self.interests.is_empty() && self.education.is_none() {
            return;
        }
        self.skills.clear();
        self.interests.clear();
        self.education = None;
        self.changed();
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    pub fn education(&self) -> Option<Education> {
        self.education
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rejects a prediction request with no skills. The matcher itself
    /// accepts any selection.
    pub fn validate_for_prediction(&self) -> Result<()> {
        if self.skills.is_empty() {
            return Err(CareerError::NoSkillsSelected);
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Selection {
        Selection {
            skills: self.skills.clone(),
            interests: Some(self.interests.clone()),
            education: self.education,
        }
    }

    fn changed(&mut self) {
        self.revision += 1;
        trace!(revision = self.revision, "selection changed");
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(&*self);
        }
        self.listeners = listeners;
    }
}

fn toggle(set: &mut BTreeSet<String>, token: String) -> bool {
    if set.remove(&token) {
        false
    } else {
        set.insert(token);
        true
    }
}
