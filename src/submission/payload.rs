//! Mapping from a completed form to the origination system's request document

use crate::state::{parse_income, FieldName as F, FormState};
use serde::{Deserialize, Serialize};

const CUSTOMER_TYPE: &str = "customer.type.individual";
const CUSTOMER_STATUS: &str = "Lead";
const PHONE_TYPE: &str = "customer.phoneType.cell";
const COUNTRY: &str = "company.country.usa";
const DISPLAY_ID_LABEL: &str = "Loan Application";
const COLLATERAL_TYPE: &str = "collateral.type.consumer";

// Applications are created as empty shells; staff fill in the terms later.
const LOAN_AMOUNT: &str = "0.00";
const LOAN_RATE: &str = "0.00";
const CONTRACT_DATE: &str = "2025-01-01";
const FIRST_PAYMENT_DATE: &str = "2025-01-01";
const LOAN_CLASS: &str = "loan.class.consumer";
const LOAN_TYPE: &str = "loan.type.installment";

/// Custom field ids for collateral attributes
pub const CUSTOM_FIELD_YEAR: u32 = 9;
pub const CUSTOM_FIELD_VIN: u32 = 10;
pub const CUSTOM_FIELD_MANUFACTURER: u32 = 11;
pub const CUSTOM_FIELD_HOME_SIZE: u32 = 13;

/// Request body for the application endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub customer: Customer,
    pub loan: Loan,
    pub collateral_custom_fields: Vec<CustomFieldEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub generation_code: String,
    pub ssn: String,
    pub driver_license: String,
    pub birth_date: String,
    pub gender: String,
    pub email: String,
    pub customer_type: String,
    pub status: String,
    #[serde(rename = "Phones")]
    pub phones: Results<Phone>,
    #[serde(rename = "PrimaryAddress")]
    pub primary_address: Address,
    #[serde(rename = "MailAddress")]
    pub mail_address: Address,
    #[serde(rename = "Employer")]
    pub employer: Employer,
}

/// The origination API wraps nested collections in `{"results": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results<T> {
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    #[serde(rename = "type")]
    pub phone_type: String,
    pub phone: String,
    pub is_primary: String,
    pub is_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub company_name: String,
    pub title: String,
    pub hire_date: String,
    pub income: f64,
    pub income_frequency: String,
    #[serde(rename = "Address")]
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub display_id: String,
    #[serde(rename = "LoanSetup")]
    pub loan_setup: LoanSetup,
    #[serde(rename = "Collateral")]
    pub collateral: Results<Collateral>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSetup {
    pub loan_amount: String,
    pub loan_rate: String,
    pub contract_date: String,
    pub loan_class: String,
    pub loan_type: String,
    pub first_payment_date: String,
}

/// Collateral record; the origination API names its free-text slots a-d
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collateral {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub collateral_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldEntry {
    pub custom_field_id: u32,
    pub custom_field_value: String,
}

/// Coded state token: first two letters of the name, upper-cased
pub fn state_token(state_name: &str) -> String {
    let code: String = state_name.chars().take(2).collect();
    format!("geo.state.{}", code.to_uppercase())
}

/// Like [`state_token`], but an empty name stays empty
pub fn optional_state_token(state_name: &str) -> String {
    if state_name.is_empty() {
        String::new()
    } else {
        state_token(state_name)
    }
}

pub fn display_id(timestamp_millis: i64) -> String {
    format!("{DISPLAY_ID_LABEL} - {timestamp_millis}")
}

/// Build the request document from a validated form
pub fn build_payload(form: &FormState, timestamp_millis: i64) -> SubmissionPayload {
    let text = |name| form.text(name).to_string();

    let home_address = Address {
        address1: text(F::Address),
        city: text(F::City),
        state: state_token(form.text(F::State)),
        zipcode: text(F::ZipCode),
        country: COUNTRY.to_string(),
    };

    let generation_code = form
        .value(F::GenerationCode)
        .as_generation()
        .map(|g| g.code().to_string())
        .unwrap_or_default();

    SubmissionPayload {
        customer: Customer {
            first_name: text(F::FirstName),
            middle_name: text(F::MiddleName),
            last_name: text(F::LastName),
            generation_code,
            ssn: text(F::Ssn),
            driver_license: text(F::DriverLicense),
            birth_date: text(F::DateOfBirth),
            gender: text(F::Gender),
            email: text(F::Email),
            customer_type: CUSTOMER_TYPE.to_string(),
            status: CUSTOMER_STATUS.to_string(),
            phones: Results {
                results: vec![Phone {
                    phone_type: PHONE_TYPE.to_string(),
                    phone: text(F::Phone),
                    is_primary: "1".to_string(),
                    is_secondary: "0".to_string(),
                }],
            },
            primary_address: home_address.clone(),
            mail_address: home_address,
            employer: Employer {
                company_name: text(F::CompanyName),
                title: text(F::Title),
                hire_date: text(F::HireDate),
                income: parse_income(form.text(F::Income)),
                income_frequency: text(F::IncomeFrequency),
                address: Address {
                    address1: text(F::EmpAddress),
                    city: text(F::EmpCity),
                    state: optional_state_token(form.text(F::EmpState)),
                    zipcode: text(F::EmpZipCode),
                    country: COUNTRY.to_string(),
                },
            },
        },
        loan: Loan {
            display_id: display_id(timestamp_millis),
            loan_setup: LoanSetup {
                loan_amount: LOAN_AMOUNT.to_string(),
                loan_rate: LOAN_RATE.to_string(),
                contract_date: CONTRACT_DATE.to_string(),
                loan_class: LOAN_CLASS.to_string(),
                loan_type: LOAN_TYPE.to_string(),
                first_payment_date: FIRST_PAYMENT_DATE.to_string(),
            },
            collateral: Results {
                results: vec![Collateral {
                    a: text(F::CollateralAddress),
                    b: text(F::CollateralCity),
                    c: optional_state_token(form.text(F::CollateralState)),
                    d: text(F::CollateralZipCode),
                    collateral_type: COLLATERAL_TYPE.to_string(),
                }],
            },
        },
        collateral_custom_fields: [
            (CUSTOM_FIELD_YEAR, F::CollateralYear),
            (CUSTOM_FIELD_VIN, F::CollateralVin),
            (CUSTOM_FIELD_MANUFACTURER, F::CollateralManufacturerName),
            (CUSTOM_FIELD_HOME_SIZE, F::CollateralSizeOfHome),
        ]
        .into_iter()
        .map(|(id, field)| CustomFieldEntry {
            custom_field_id: id,
            custom_field_value: text(field),
        })
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{fixtures::filled_form, GenerationCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const STAMP: i64 = 1_750_000_000_000;

    #[test]
    fn test_state_token() {
        assert_eq!(state_token("California"), "geo.state.CA");
        assert_eq!(state_token("texas"), "geo.state.TE");
        // Two-letter prefix, not the postal code
        assert_eq!(state_token("New York"), "geo.state.NE");
    }

    #[test]
    fn test_optional_state_token_empty() {
        assert_eq!(optional_state_token(""), "");
        assert_eq!(optional_state_token("Ohio"), "geo.state.OH");
    }

    #[test]
    fn test_generation_none_becomes_empty() {
        let mut form = filled_form();
        form.update_field(
            F::GenerationCode,
            GenerationCode::from_code("customer.generationCode.none"),
        );
        assert_eq!(build_payload(&form, STAMP).customer.generation_code, "");
    }

    #[test]
    fn test_generation_code_passes_through() {
        let mut form = filled_form();
        form.update_field(F::GenerationCode, Some(GenerationCode::III));
        assert_eq!(
            build_payload(&form, STAMP).customer.generation_code,
            "customer.generationCode.iii"
        );
    }

    #[test]
    fn test_addresses_are_denormalized() {
        let payload = build_payload(&filled_form(), STAMP);
        assert_eq!(payload.customer.primary_address, payload.customer.mail_address);
        assert_eq!(payload.customer.primary_address.state, "geo.state.CA");
    }

    #[test]
    fn test_empty_employer_state() {
        let payload = build_payload(&filled_form(), STAMP);
        assert_eq!(payload.customer.employer.address.state, "");
    }

    #[test]
    fn test_employer_state_coded_when_present() {
        let mut form = filled_form();
        form.update_field(F::EmpState, "Nevada");
        let payload = build_payload(&form, STAMP);
        assert_eq!(payload.customer.employer.address.state, "geo.state.NE");
    }

    #[test]
    fn test_income_parsed_to_number() {
        let payload = build_payload(&filled_form(), STAMP);
        assert_eq!(payload.customer.employer.income, 5200.5);
    }

    #[test]
    fn test_custom_fields_always_four_in_order() {
        let mut form = filled_form();
        form.update_field(F::CollateralYear, "2018");
        form.update_field(F::CollateralSizeOfHome, "16x80");
        let fields = build_payload(&form, STAMP).collateral_custom_fields;

        let pairs: Vec<(u32, &str)> = fields
            .iter()
            .map(|f| (f.custom_field_id, f.custom_field_value.as_str()))
            .collect();
        assert_eq!(pairs, vec![(9, "2018"), (10, ""), (11, ""), (13, "16x80")]);
    }

    #[test]
    fn test_collateral_record() {
        let mut form = filled_form();
        form.update_field(F::CollateralAddress, "12 Lot Rd");
        form.update_field(F::CollateralState, "Oregon");
        let loan = build_payload(&form, STAMP).loan;

        assert_eq!(loan.collateral.results.len(), 1);
        let record = &loan.collateral.results[0];
        assert_eq!(record.a, "12 Lot Rd");
        assert_eq!(record.c, "geo.state.OR");
        assert_eq!(record.collateral_type, "collateral.type.consumer");
    }

    #[test]
    fn test_display_id_uses_timestamp() {
        let payload = build_payload(&filled_form(), STAMP);
        assert_eq!(payload.loan.display_id, "Loan Application - 1750000000000");
        assert_ne!(
            build_payload(&filled_form(), STAMP + 1).loan.display_id,
            payload.loan.display_id
        );
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(build_payload(&filled_form(), STAMP)).unwrap();

        assert_eq!(value["customer"]["firstName"], json!("Jane"));
        assert_eq!(value["customer"]["birthDate"], json!("1990-04-12"));
        assert_eq!(value["customer"]["customerType"], json!("customer.type.individual"));
        assert_eq!(
            value["customer"]["Phones"]["results"][0],
            json!({
                "type": "customer.phoneType.cell",
                "phone": "5551234567",
                "isPrimary": "1",
                "isSecondary": "0"
            })
        );
        assert_eq!(
            value["customer"]["MailAddress"],
            json!({
                "address1": "1 Main St",
                "city": "Springfield",
                "state": "geo.state.CA",
                "zipcode": "90210",
                "country": "company.country.usa"
            })
        );
        assert_eq!(value["customer"]["Employer"]["income"], json!(5200.5));
        assert_eq!(
            value["loan"]["LoanSetup"],
            json!({
                "loanAmount": "0.00",
                "loanRate": "0.00",
                "contractDate": "2025-01-01",
                "loanClass": "loan.class.consumer",
                "loanType": "loan.type.installment",
                "firstPaymentDate": "2025-01-01"
            })
        );
        assert_eq!(
            value["collateralCustomFields"][3],
            json!({"customFieldId": 13, "customFieldValue": ""})
        );
    }
}
