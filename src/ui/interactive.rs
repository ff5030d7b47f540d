use super::state::SelectionState;
use crate::catalog::{Catalog, Education};
use crate::error::{CareerError, Result};
use dialoguer::{MultiSelect, Select};
use tracing::debug;

/// Source of the user's answers. The terminal implementation uses dialoguer
/// prompts; tests script the answers.
pub trait Prompter {
    fn pick_many(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;
    fn pick_one(&mut self, prompt: &str, items: &[String]) -> Result<usize>;
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn pick_many(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(|e| CareerError::Prompt(e.to_string()))
    }

    fn pick_one(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| CareerError::Prompt(e.to_string()))
    }
}

const SKIP_EDUCATION: &str = "(skip)";

/// Walks the user through skills, interests and education, filling `state`.
pub fn collect_selection(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    state: &mut SelectionState,
) -> Result<()> {
    let skills = catalog.all_skills();
    for index in prompter.pick_many("Select your skills (space to toggle)", skills)? {
        if let Some(skill) = skills.get(index) {
            state.toggle_skill(skill);
        }
    }

    let interests = catalog.all_interests();
    if !interests.is_empty() {
        for index in prompter.pick_many("Select your interests", interests)? {
            if let Some(interest) = interests.get(index) {
                state.toggle_interest(interest);
            }
        }
    }

    let mut levels = vec![SKIP_EDUCATION.to_string()];
    levels.extend(Education::ALL.iter().map(|level| level.to_string()));
    let choice = prompter.pick_one("Highest education level", &levels)?;
    let education = choice
        .checked_sub(1)
        .and_then(|index| Education::ALL.get(index).copied());
    state.set_education(education);

    debug!(
        skills = state.skills().len(),
        interests = state.interests().len(),
        education = ?state.education(),
        "interactive selection collected"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        many: VecDeque<Vec<usize>>,
        one: VecDeque<usize>,
    }

    impl Prompter for Scripted {
        fn pick_many(&mut self, _prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
            Ok(self.many.pop_front().unwrap_or_default())
        }

        fn pick_one(&mut self, _prompt: &str, _items: &[String]) -> Result<usize> {
            Ok(self.one.pop_front().unwrap_or(0))
        }
    }

    fn index_of(items: &[String], token: &str) -> usize {
        items
            .iter()
            .position(|item| item == token)
            .expect("token should be listed")
    }

    #[test]
    fn scripted_answers_fill_the_state() {
        let catalog = Catalog::builtin();
        let mut prompter = Scripted {
            many: VecDeque::from(vec![
                vec![index_of(catalog.all_skills(), "python")],
                vec![index_of(catalog.all_interests(), "technology")],
            ]),
            one: VecDeque::from(vec![4]),
        };
        let mut state = SelectionState::new();

        collect_selection(&mut prompter, catalog, &mut state).expect("prompts should succeed");

        assert!(state.skills().contains("python"));
        assert!(state.interests().contains("technology"));
        assert_eq!(state.education(), Some(Education::Master));
    }

    #[test]
    fn skipping_education_leaves_it_unset() {
        let catalog = Catalog::builtin();
        let mut prompter = Scripted {
            many: VecDeque::new(),
            one: VecDeque::from(vec![0]),
        };
        let mut state = SelectionState::new();

        collect_selection(&mut prompter, catalog, &mut state).expect("prompts should succeed");

        assert_eq!(state.education(), None);
        assert!(state.validate_for_prediction().is_err());
    }

    #[test]
    fn out_of_range_answers_are_ignored() {
        let catalog = Catalog::builtin();
        let mut prompter = Scripted {
            many: VecDeque::from(vec![vec![10_000]]),
            one: VecDeque::from(vec![99]),
        };
        let mut state = SelectionState::new();

        collect_selection(&mut prompter, catalog, &mut state).expect("prompts should succeed");

        assert!(state.skills().is_empty());
        assert_eq!(state.education(), None);
    }
}
