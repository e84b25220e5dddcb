//! Multi-step onboarding form
//!
//! Three steps, each validating its own fields before the wizard moves on:
//! personal info, skills, then pricing and location.

use thiserror::Error;

use crate::models::{ArtistRecord, Submission};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_BIO_LEN: usize = 50;

/// Validation failure on a single form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Bio is required")]
    BioRequired,
    #[error("Bio must be at least 50 characters")]
    BioTooShort,
    #[error("Select at least one category")]
    NoCategory,
    #[error("Select at least one language")]
    NoLanguage,
    #[error("Fee range is required")]
    FeeRangeRequired,
    #[error("Location is required")]
    LocationRequired,
}

/// Form steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    PersonalInfo = 1,
    Skills = 2,
    PricingLocation = 3,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::PersonalInfo, Step::Skills, Step::PricingLocation];

    pub fn number(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info & Photo",
            Step::Skills => "Skills & Expertise",
            Step::PricingLocation => "Pricing & Location",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => Some(Step::Skills),
            Step::Skills => Some(Step::PricingLocation),
            Step::PricingLocation => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => None,
            Step::Skills => Some(Step::PersonalInfo),
            Step::PricingLocation => Some(Step::Skills),
        }
    }

    /// Validate the fields owned by this step
    pub fn validate(self, form: &Submission) -> Vec<OnboardingError> {
        let mut errors = Vec::new();
        match self {
            Step::PersonalInfo => {
                let name = form.name.trim();
                if name.is_empty() {
                    errors.push(OnboardingError::NameRequired);
                } else if name.chars().count() < MIN_NAME_LEN {
                    errors.push(OnboardingError::NameTooShort);
                }

                let bio = form.bio.trim();
                if bio.is_empty() {
                    errors.push(OnboardingError::BioRequired);
                } else if bio.chars().count() < MIN_BIO_LEN {
                    errors.push(OnboardingError::BioTooShort);
                }
            }
            Step::Skills => {
                if form.categories.is_empty() {
                    errors.push(OnboardingError::NoCategory);
                }
                if form.languages.is_empty() {
                    errors.push(OnboardingError::NoLanguage);
                }
            }
            Step::PricingLocation => {
                if form.fee_range.trim().is_empty() {
                    errors.push(OnboardingError::FeeRangeRequired);
                }
                if form.location.trim().is_empty() {
                    errors.push(OnboardingError::LocationRequired);
                }
            }
        }
        errors
    }
}

/// Onboarding wizard state
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    form: Submission,
    step: Step,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new(Submission::default())
    }
}

impl OnboardingWizard {
    pub fn new(form: Submission) -> Self {
        Self {
            form,
            step: Step::PersonalInfo,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &Submission {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Submission {
        &mut self.form
    }

    /// Completion percentage of the current step
    pub fn progress(&self) -> u32 {
        let total = Step::ALL.len() as f64;
        ((self.step.number() as f64 / total) * 100.0).round() as u32
    }

    /// Advance when the current step validates; the last step stays put
    pub fn next(&mut self) -> Result<Step, Vec<OnboardingError>> {
        let errors = self.step.validate(&self.form);
        if !errors.is_empty() {
            return Err(errors);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn prev(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Validate every step and turn the form into a roster record.
    ///
    /// On success the wizard resets to an empty form on the first step.
    pub fn submit(&mut self, id: i64) -> Result<ArtistRecord, Vec<OnboardingError>> {
        let errors: Vec<OnboardingError> = Step::ALL
            .iter()
            .flat_map(|step| step.validate(&self.form))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        let form = std::mem::take(&mut self.form);
        self.step = Step::PersonalInfo;
        tracing::info!("Artist submission accepted: {}", form.name.trim());
        Ok(form.into_record(id))
    }
}

/// Next free id after the highest id in a roster
pub fn next_id(records: &[ArtistRecord]) -> i64 {
    records.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn valid_form() -> Submission {
        Submission {
            name: "Ravi Kumar".into(),
            bio: "Playback singer with ten years of stage experience across India.".into(),
            categories: vec!["Singer".into()],
            languages: vec!["Hindi".into(), "English".into()],
            fee_range: "$500-$1000".into(),
            location: "Mumbai".into(),
            image: None,
        }
    }

    #[test]
    fn test_step_one_rules() {
        let form = Submission {
            name: "R".into(),
            bio: "too short".into(),
            ..Default::default()
        };
        assert_eq!(
            Step::PersonalInfo.validate(&form),
            vec![OnboardingError::NameTooShort, OnboardingError::BioTooShort]
        );

        let empty = Submission::default();
        assert_eq!(
            Step::PersonalInfo.validate(&empty),
            vec![OnboardingError::NameRequired, OnboardingError::BioRequired]
        );
    }

    #[test]
    fn test_next_blocks_on_invalid_step() {
        let mut wizard = OnboardingWizard::default();
        let errors = wizard.next().unwrap_err();
        assert!(errors.contains(&OnboardingError::NameRequired));
        assert_eq!(wizard.step(), Step::PersonalInfo);
        assert_eq!(wizard.progress(), 33);
    }

    #[test]
    fn test_walk_through_steps() {
        let mut wizard = OnboardingWizard::new(valid_form());
        assert_eq!(wizard.next(), Ok(Step::Skills));
        assert_eq!(wizard.progress(), 67);
        assert_eq!(wizard.next(), Ok(Step::PricingLocation));
        assert_eq!(wizard.progress(), 100);
        assert_eq!(wizard.next(), Ok(Step::PricingLocation));

        assert_eq!(wizard.prev(), Step::Skills);
        assert_eq!(wizard.prev(), Step::PersonalInfo);
        assert_eq!(wizard.prev(), Step::PersonalInfo);
    }

    #[test]
    fn test_skills_step_rules() {
        let mut form = valid_form();
        form.languages.clear();
        let mut wizard = OnboardingWizard::new(form);
        assert!(wizard.next().is_ok());
        assert_eq!(wizard.next(), Err(vec![OnboardingError::NoLanguage]));
        wizard.form_mut().languages.push("Marathi".into());
        assert_eq!(wizard.next(), Ok(Step::PricingLocation));
    }

    #[test]
    fn test_submit_validates_all_steps() {
        let mut form = valid_form();
        form.location = "  ".into();
        let mut wizard = OnboardingWizard::new(form);
        assert_eq!(
            wizard.submit(1),
            Err(vec![OnboardingError::LocationRequired])
        );
    }

    #[test]
    fn test_submit_produces_record_and_resets() {
        let mut wizard = OnboardingWizard::new(valid_form());
        wizard.next().unwrap();
        let record = wizard.submit(4).unwrap();

        assert_eq!(record.id, 4);
        assert_eq!(record.name, "Ravi Kumar");
        assert_eq!(record.category, Some(Category::Many(vec!["Singer".into()])));
        assert_eq!(record.price_range.as_deref(), Some("$500-$1000"));
        assert!(record.submitted_at.is_some());
        assert_eq!(wizard.step(), Step::PersonalInfo);
        assert_eq!(wizard.form(), &Submission::default());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OnboardingError::BioTooShort.to_string(),
            "Bio must be at least 50 characters"
        );
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), 1);
        let records = vec![ArtistRecord::new(3, "a"), ArtistRecord::new(9, "b")];
        assert_eq!(next_id(&records), 10);
    }
}
