//! Form field value objects

use super::step::Step;

/// Generation suffix codes accepted by the origination system.
///
/// The "no generation" choice is modeled as `Option::None` on the form,
/// never as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationCode {
    Jr,
    Sr,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
}

/// Sentinel the origination system uses for "no generation"
pub const GENERATION_NONE_CODE: &str = "customer.generationCode.none";

impl GenerationCode {
    pub const ALL: [GenerationCode; 10] = [
        Self::Jr,
        Self::Sr,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
        Self::VIII,
        Self::IX,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Jr => "customer.generationCode.jr",
            Self::Sr => "customer.generationCode.sr",
            Self::II => "customer.generationCode.ii",
            Self::III => "customer.generationCode.iii",
            Self::IV => "customer.generationCode.iv",
            Self::V => "customer.generationCode.v",
            Self::VI => "customer.generationCode.vi",
            Self::VII => "customer.generationCode.vii",
            Self::VIII => "customer.generationCode.viii",
            Self::IX => "customer.generationCode.ix",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Jr => "Jr.",
            Self::Sr => "Sr.",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
            Self::VIII => "VIII",
            Self::IX => "IX",
        }
    }

    /// Decode an external code. The "none" sentinel and unknown codes map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        if code == GENERATION_NONE_CODE {
            return None;
        }
        Self::ALL.into_iter().find(|g| g.code() == code)
    }
}

/// Gender codes
pub const GENDER_CHOICES: &[(&str, &str)] = &[
    ("customer.gender.female", "Female"),
    ("customer.gender.male", "Male"),
];

/// Income frequency codes
pub const INCOME_FREQUENCY_CHOICES: &[(&str, &str)] = &[
    ("customerEmployer.incomeFrequency.weekly", "Weekly"),
    ("customerEmployer.incomeFrequency.biWeekly", "Bi-weekly"),
    ("customerEmployer.incomeFrequency.monthly", "Monthly"),
    ("customerEmployer.incomeFrequency.annually", "Annually"),
    ("customerEmployer.incomeFrequency.semiMonthly", "Semi-monthly"),
];

pub const US_STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// How a field is edited in the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Fixed list of `(code, label)` pairs; the stored value is the code
    Choice(&'static [(&'static str, &'static str)]),
    /// One of [`US_STATES`]; the stored value is the state name
    UsState,
    Generation,
    Checkbox,
}

/// Every field on the application, in screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    MiddleName,
    LastName,
    GenerationCode,
    Ssn,
    DriverLicense,
    DateOfBirth,
    Gender,
    Address,
    City,
    State,
    ZipCode,
    Phone,
    Email,
    CompanyName,
    Title,
    HireDate,
    Income,
    IncomeFrequency,
    EmpAddress,
    EmpCity,
    EmpState,
    EmpZipCode,
    CollateralAddress,
    CollateralCity,
    CollateralState,
    CollateralZipCode,
    CollateralVin,
    CollateralYear,
    CollateralManufacturerName,
    CollateralSizeOfHome,
    TermsAccepted,
    BackgroundCheckAccepted,
}

impl FieldName {
    pub const ALL: [FieldName; 33] = [
        Self::FirstName,
        Self::MiddleName,
        Self::LastName,
        Self::GenerationCode,
        Self::Ssn,
        Self::DriverLicense,
        Self::DateOfBirth,
        Self::Gender,
        Self::Address,
        Self::City,
        Self::State,
        Self::ZipCode,
        Self::Phone,
        Self::Email,
        Self::CompanyName,
        Self::Title,
        Self::HireDate,
        Self::Income,
        Self::IncomeFrequency,
        Self::EmpAddress,
        Self::EmpCity,
        Self::EmpState,
        Self::EmpZipCode,
        Self::CollateralAddress,
        Self::CollateralCity,
        Self::CollateralState,
        Self::CollateralZipCode,
        Self::CollateralVin,
        Self::CollateralYear,
        Self::CollateralManufacturerName,
        Self::CollateralSizeOfHome,
        Self::TermsAccepted,
        Self::BackgroundCheckAccepted,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::LastName => "lastName",
            Self::GenerationCode => "generationCode",
            Self::Ssn => "ssn",
            Self::DriverLicense => "driverLicense",
            Self::DateOfBirth => "dateOfBirth",
            Self::Gender => "gender",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::Title => "title",
            Self::HireDate => "hireDate",
            Self::Income => "income",
            Self::IncomeFrequency => "incomeFrequency",
            Self::EmpAddress => "empAddress",
            Self::EmpCity => "empCity",
            Self::EmpState => "empState",
            Self::EmpZipCode => "empZipCode",
            Self::CollateralAddress => "collateralAddress",
            Self::CollateralCity => "collateralCity",
            Self::CollateralState => "collateralState",
            Self::CollateralZipCode => "collateralZipCode",
            Self::CollateralVin => "collateralVin",
            Self::CollateralYear => "collateralYear",
            Self::CollateralManufacturerName => "collateralManufacturerName",
            Self::CollateralSizeOfHome => "collateralSizeOfHome",
            Self::TermsAccepted => "termsAccepted",
            Self::BackgroundCheckAccepted => "backgroundCheckAccepted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::MiddleName => "Middle name",
            Self::LastName => "Last name",
            Self::GenerationCode => "Generation",
            Self::Ssn => "SSN",
            Self::DriverLicense => "Driver license",
            Self::DateOfBirth => "Date of birth",
            Self::Gender => "Gender",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "Zip code",
            Self::Phone => "Phone number",
            Self::Email => "Email",
            Self::CompanyName => "Company name",
            Self::Title => "Title",
            Self::HireDate => "Hire date",
            Self::Income => "Income",
            Self::IncomeFrequency => "Income frequency",
            Self::EmpAddress => "Employer address",
            Self::EmpCity => "Employer city",
            Self::EmpState => "Employer state",
            Self::EmpZipCode => "Employer zip code",
            Self::CollateralAddress => "Collateral address",
            Self::CollateralCity => "Collateral city",
            Self::CollateralState => "Collateral state",
            Self::CollateralZipCode => "Collateral zip code",
            Self::CollateralVin => "VIN",
            Self::CollateralYear => "Year",
            Self::CollateralManufacturerName => "Manufacturer",
            Self::CollateralSizeOfHome => "Size of home",
            Self::TermsAccepted => "Terms and conditions",
            Self::BackgroundCheckAccepted => "Background check",
        }
    }

    /// Input hint shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Ssn => Some("XXX-XX-XXXX"),
            Self::DateOfBirth | Self::HireDate => Some("YYYY-MM-DD"),
            Self::Phone => Some("1234567890"),
            Self::ZipCode | Self::EmpZipCode | Self::CollateralZipCode => Some("12345"),
            Self::CollateralYear => Some("YYYY"),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::GenerationCode => FieldKind::Generation,
            Self::Gender => FieldKind::Choice(GENDER_CHOICES),
            Self::IncomeFrequency => FieldKind::Choice(INCOME_FREQUENCY_CHOICES),
            Self::State | Self::EmpState | Self::CollateralState => FieldKind::UsState,
            Self::TermsAccepted | Self::BackgroundCheckAccepted => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Screen the field is shown on
    pub fn screen(&self) -> Step {
        use FieldName as F;
        match self {
            F::FirstName
            | F::MiddleName
            | F::LastName
            | F::GenerationCode
            | F::Ssn
            | F::DriverLicense
            | F::DateOfBirth
            | F::Gender => Step::Personal,
            F::Address | F::City | F::State | F::ZipCode | F::Phone | F::Email => Step::Contact,
            F::CompanyName
            | F::Title
            | F::HireDate
            | F::Income
            | F::IncomeFrequency
            | F::EmpAddress
            | F::EmpCity
            | F::EmpState
            | F::EmpZipCode => Step::Employment,
            F::CollateralAddress
            | F::CollateralCity
            | F::CollateralState
            | F::CollateralZipCode
            | F::CollateralVin
            | F::CollateralYear
            | F::CollateralManufacturerName
            | F::CollateralSizeOfHome
            | F::TermsAccepted
            | F::BackgroundCheckAccepted => Step::Collateral,
        }
    }

    /// Fields shown on a screen, in display order
    pub fn on_screen(step: Step) -> Vec<FieldName> {
        Self::ALL
            .into_iter()
            .filter(|f| f.screen() == step)
            .collect()
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Generation(Option<GenerationCode>),
}

impl FieldValue {
    /// Initial value for a field
    pub fn empty_for(name: FieldName) -> Self {
        match name.kind() {
            FieldKind::Checkbox => FieldValue::Flag(false),
            FieldKind::Generation => FieldValue::Generation(None),
            FieldKind::Text | FieldKind::Choice(_) | FieldKind::UsState => {
                FieldValue::Text(String::new())
            }
        }
    }

    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) | FieldValue::Generation(_) => "",
        }
    }

    /// Get the flag value (returns false for non-flag values)
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) | FieldValue::Generation(_) => false,
        }
    }

    pub fn as_generation(&self) -> Option<GenerationCode> {
        match self {
            FieldValue::Generation(g) => *g,
            FieldValue::Text(_) | FieldValue::Flag(_) => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, kind: FieldKind) -> String {
        match (self, kind) {
            (FieldValue::Flag(true), _) => "[x]".to_string(),
            (FieldValue::Flag(false), _) => "[ ]".to_string(),
            (FieldValue::Generation(None), _) => "None".to_string(),
            (FieldValue::Generation(Some(g)), _) => g.label().to_string(),
            (FieldValue::Text(code), FieldKind::Choice(choices)) => choices
                .iter()
                .find(|(c, _)| c == code)
                .map(|(_, label)| label.to_string())
                .unwrap_or_default(),
            (FieldValue::Text(s), _) => s.clone(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Option<GenerationCode>> for FieldValue {
    fn from(value: Option<GenerationCode>) -> Self {
        FieldValue::Generation(value)
    }
}

/// Cycle a choice-like value one position forward or back.
///
/// An unset choice moves to the first (forward) or last (back) option.
pub fn cycle_value(name: FieldName, current: &FieldValue, forward: bool) -> FieldValue {
    fn step_index(current: Option<usize>, len: usize, forward: bool) -> usize {
        match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
        }
    }

    match name.kind() {
        FieldKind::Choice(choices) => {
            let pos = choices.iter().position(|(c, _)| *c == current.as_text());
            FieldValue::Text(choices[step_index(pos, choices.len(), forward)].0.to_string())
        }
        FieldKind::UsState => {
            let pos = US_STATES.iter().position(|s| *s == current.as_text());
            FieldValue::Text(US_STATES[step_index(pos, US_STATES.len(), forward)].to_string())
        }
        FieldKind::Generation => {
            // Position 0 is "None", then every code
            let pos = match current.as_generation() {
                None => 0,
                Some(g) => GenerationCode::ALL.iter().position(|c| *c == g).unwrap_or(0) + 1,
            };
            let next = step_index(Some(pos), GenerationCode::ALL.len() + 1, forward);
            FieldValue::Generation(next.checked_sub(1).map(|i| GenerationCode::ALL[i]))
        }
        FieldKind::Checkbox => FieldValue::Flag(!current.as_flag()),
        FieldKind::Text => current.clone(),
    }
}
