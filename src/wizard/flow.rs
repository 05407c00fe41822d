use crate::core::error::WizardError;
use crate::models::user::User;
use crate::stores::account_store::{AccountStore, LoginOutcome};
use crate::validation::personality::validate_personality_input;
use std::fmt;
use tracing::debug;

/// The four wizard screens, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    BasicInfo = 1,
    Personality = 2,
    Courses = 3,
    Summary = 4,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    fn previous(self) -> Option<Step> {
        match self {
            Step::BasicInfo => None,
            Step::Personality => Some(Step::BasicInfo),
            Step::Courses => Some(Step::Personality),
            Step::Summary => Some(Step::Courses),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/4", self.number())
    }
}

/// Linear step machine over an [`AccountStore`].
///
/// Forward moves out of the personality and course steps commit the
/// session's working progress.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    strict_personality: bool,
}

impl Wizard {
    pub fn new(strict_personality: bool) -> Self {
        Self {
            step: Step::BasicInfo,
            strict_personality,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn register(
        &mut self,
        store: &mut AccountStore,
        username: &str,
        password: &str,
        fullname: &str,
        year: u8,
        department: &str,
    ) -> Result<User, WizardError> {
        let user = store.register(username, password, fullname, year, department)?;
        self.step = Step::Personality;
        Ok(user)
    }

    pub fn login(
        &mut self,
        store: &mut AccountStore,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, WizardError> {
        let outcome = store.login(username, password)?;
        self.step = Step::Personality;
        Ok(outcome)
    }

    pub fn logout(&mut self, store: &mut AccountStore) {
        store.logout();
        self.step = Step::BasicInfo;
    }

    /// Advance one step
    pub fn next(&mut self, store: &mut AccountStore) -> Result<Step, WizardError> {
        if store.session().is_none() {
            return Err(WizardError::NotAuthenticated);
        }

        let next = match self.step {
            Step::BasicInfo => Step::Personality,
            Step::Personality => {
                self.commit_personality(store)?;
                Step::Courses
            }
            Step::Courses => {
                store.save_progress()?;
                Step::Summary
            }
            Step::Summary => return Err(WizardError::NoNextStep),
        };

        debug!(from = self.step.number(), to = next.number(), "Wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Jump from the personality step straight to the summary.
    ///
    /// Any other step returns `ResultsUnavailable` and stays put.
    pub fn show_results(&mut self, store: &mut AccountStore) -> Result<Step, WizardError> {
        if store.session().is_none() {
            return Err(WizardError::NotAuthenticated);
        }
        if self.step != Step::Personality {
            return Err(WizardError::ResultsUnavailable);
        }

        self.commit_personality(store)?;
        self.step = Step::Summary;
        Ok(self.step)
    }

    /// Go back one step without saving
    pub fn back(&mut self) -> Result<Step, WizardError> {
        let previous = self.step.previous().ok_or(WizardError::NoPreviousStep)?;
        self.step = previous;
        Ok(previous)
    }

    fn commit_personality(&self, store: &mut AccountStore) -> Result<(), WizardError> {
        let session = store.session_mut().ok_or(WizardError::NotAuthenticated)?;
        let code = validate_personality_input(session.personality_input(), self.strict_personality)?;
        session.set_personality_input(code);
        store.save_progress()?;
        Ok(())
    }
}
