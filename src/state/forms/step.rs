//! Wizard steps and the fields that gate leaving each one

use super::field::FieldName;

/// Wizard screens, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Personal,
    Contact,
    Employment,
    Collateral,
}

impl Step {
    pub const COUNT: u8 = 4;

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Contact => 2,
            Self::Employment => 3,
            Self::Collateral => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Contact => "Contact Information",
            Self::Employment => "Employment Information",
            Self::Collateral => "Collateral Information",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Contact),
            Self::Contact => Some(Self::Employment),
            Self::Employment => Some(Self::Collateral),
            Self::Collateral => None,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Contact => Some(Self::Personal),
            Self::Employment => Some(Self::Contact),
            Self::Collateral => Some(Self::Employment),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Fields that must validate before moving past this step.
    ///
    /// The last step has no gate; its fields are checked by full-form
    /// validation at submission.
    pub fn gated_fields(&self) -> &'static [FieldName] {
        use FieldName as F;
        match self {
            Self::Personal => &[
                F::FirstName,
                F::LastName,
                F::Ssn,
                F::DriverLicense,
                F::DateOfBirth,
                F::Gender,
            ],
            Self::Contact => &[F::Email, F::Phone, F::Address, F::City, F::State, F::ZipCode],
            Self::Employment => &[
                F::CompanyName,
                F::Title,
                F::HireDate,
                F::Income,
                F::IncomeFrequency,
            ],
            Self::Collateral => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_step() {
        assert_eq!(Step::default(), Step::Personal);
        assert_eq!(Step::default().number(), 1);
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        let mut step = Step::Personal;
        while let Some(next) = step.next() {
            assert_eq!(next.prev(), Some(step));
            assert_eq!(next.number(), step.number() + 1);
            step = next;
        }
        assert_eq!(step, Step::Collateral);
        assert!(step.is_last());
        assert_eq!(Step::Personal.prev(), None);
    }

    #[test]
    fn test_gated_fields() {
        assert_eq!(
            Step::Personal.gated_fields(),
            &[
                FieldName::FirstName,
                FieldName::LastName,
                FieldName::Ssn,
                FieldName::DriverLicense,
                FieldName::DateOfBirth,
                FieldName::Gender,
            ]
        );
        assert_eq!(Step::Contact.gated_fields().len(), 6);
        assert_eq!(Step::Employment.gated_fields().len(), 5);
        assert!(Step::Collateral.gated_fields().is_empty());
    }

    #[test]
    fn test_middle_name_is_never_gated() {
        let gated = [Step::Personal, Step::Contact, Step::Employment, Step::Collateral]
            .iter()
            .any(|s| s.gated_fields().contains(&FieldName::MiddleName));
        assert!(!gated);
    }
}
