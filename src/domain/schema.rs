//! The feature schema the classifier was trained against.
//!
//! The 23 field names, their domains, and the categorical contract are fixed
//! at training time; the serving side treats them as a versioned contract and
//! cross-checks them against the loaded artifact before inference.

use std::collections::BTreeSet;

pub const OCCUPATIONS: &[&str] = &[
    "Scientist",
    "Teacher",
    "Engineer",
    "Manager",
    "Doctor",
    "Lawyer",
    "Architect",
    "Developer",
    "Accountant",
    "Other",
];

pub const CREDIT_MIX_VALUES: &[&str] = &["Good", "Standard", "Poor"];

pub const MIN_AMOUNT_VALUES: &[&str] = &["Yes", "No"];

pub const PAYMENT_BEHAVIOURS: &[&str] = &[
    "High_spent_Small_value_payments",
    "Low_spent_Large_value_payments",
    "High_spent_Medium_value_payments",
    "Low_spent_Medium_value_payments",
    "High_spent_Large_value_payments",
    "Low_spent_Small_value_payments",
];

pub const LOAN_TYPES: &[&str] = &[
    "Auto Loan",
    "Personal Loan",
    "Home Loan",
    "Student Loan",
    "Credit Card Loan",
    "Business Loan",
];

/// Literal used for `Type_of_Loan` when the borrower selected no loans.
/// Part of the model's categorical vocabulary; must match verbatim.
pub const NO_LOAN: &str = "No Loan";

/// Separator for joining loan selections into the `Type_of_Loan` value.
pub const LOAN_JOIN_SEPARATOR: &str = ", ";

/// Domain of a single schema field, as enforced by the validator and the
/// record builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Integer within an inclusive range.
    IntRange { min: i64, max: i64 },
    /// Float within an inclusive range.
    FloatRange { min: f64, max: f64 },
    /// Float with a lower bound only (money fields).
    MinFloat { min: f64 },
    /// Float with no bounds (fields that may legitimately be negative).
    AnyFloat,
    /// Categorical value drawn from a closed vocabulary.
    OneOf(&'static [&'static str]),
    /// Derived by the builder from the loan-type selections; not supplied
    /// directly by the caller.
    JoinedLoanTypes,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The 23 fields of the feature record, in the exact order the model expects.
pub const FIELDS: [FieldSpec; 23] = [
    FieldSpec {
        name: "Month",
        kind: FieldKind::IntRange { min: 1, max: 12 },
    },
    FieldSpec {
        name: "Age",
        kind: FieldKind::IntRange { min: 18, max: 100 },
    },
    FieldSpec {
        name: "Occupation",
        kind: FieldKind::OneOf(OCCUPATIONS),
    },
    FieldSpec {
        name: "Annual_Income",
        kind: FieldKind::MinFloat { min: 0.0 },
    },
    FieldSpec {
        name: "Monthly_Inhand_Salary",
        kind: FieldKind::MinFloat { min: 0.0 },
    },
    FieldSpec {
        name: "Num_Bank_Accounts",
        kind: FieldKind::IntRange { min: 0, max: 20 },
    },
    FieldSpec {
        name: "Num_Credit_Card",
        kind: FieldKind::IntRange { min: 0, max: 20 },
    },
    FieldSpec {
        name: "Interest_Rate",
        kind: FieldKind::FloatRange {
            min: 0.0,
            max: 50.0,
        },
    },
    FieldSpec {
        name: "Num_of_Loan",
        kind: FieldKind::IntRange { min: 0, max: 20 },
    },
    FieldSpec {
        name: "Type_of_Loan",
        kind: FieldKind::JoinedLoanTypes,
    },
    FieldSpec {
        name: "Delay_from_due_date",
        kind: FieldKind::IntRange { min: 0, max: 60 },
    },
    FieldSpec {
        name: "Num_of_Delayed_Payment",
        kind: FieldKind::IntRange { min: 0, max: 50 },
    },
    FieldSpec {
        name: "Changed_Credit_Limit",
        kind: FieldKind::AnyFloat,
    },
    FieldSpec {
        name: "Num_Credit_Inquiries",
        kind: FieldKind::IntRange { min: 0, max: 20 },
    },
    FieldSpec {
        name: "Credit_Mix",
        kind: FieldKind::OneOf(CREDIT_MIX_VALUES),
    },
    FieldSpec {
        name: "Outstanding_Debt",
        kind: FieldKind::MinFloat { min: 0.0 },
    },
    FieldSpec {
        name: "Credit_Utilization_Ratio",
        kind: FieldKind::FloatRange {
            min: 0.0,
            max: 100.0,
        },
    },
    FieldSpec {
        name: "Credit_History_Age",
        kind: FieldKind::IntRange { min: 0, max: 600 },
    },
    FieldSpec {
        name: "Payment_of_Min_Amount",
        kind: FieldKind::OneOf(MIN_AMOUNT_VALUES),
    },
    FieldSpec {
        name: "Total_EMI_per_month",
        kind: FieldKind::MinFloat { min: 0.0 },
    },
    FieldSpec {
        name: "Amount_invested_monthly",
        kind: FieldKind::MinFloat { min: 0.0 },
    },
    FieldSpec {
        name: "Payment_Behaviour",
        kind: FieldKind::OneOf(PAYMENT_BEHAVIOURS),
    },
    FieldSpec {
        name: "Monthly_Balance",
        kind: FieldKind::AnyFloat,
    },
];

/// Field names the model treats as categorical (non-numeric).
pub const CATEGORICAL_FIELDS: &[&str] = &[
    "Occupation",
    "Credit_Mix",
    "Payment_of_Min_Amount",
    "Payment_Behaviour",
    "Type_of_Loan",
];

pub fn categorical_field_set() -> BTreeSet<String> {
    CATEGORICAL_FIELDS.iter().map(|s| s.to_string()).collect()
}

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Training-time impact scores for the top factors, in descending order.
/// Static data for "factors affecting credit score" views.
pub const FEATURE_IMPORTANCE: &[(&str, f64)] = &[
    ("Type_of_Loan", 9.6518),
    ("Occupation", 8.4725),
    ("Month", 6.2643),
    ("Outstanding_Debt", 5.8894),
    ("Credit_Mix", 5.3340),
    ("Changed_Credit_Limit", 4.9477),
    ("Delay_from_due_date", 4.8124),
    ("Credit_History_Age", 4.6812),
    ("Age", 4.6376),
    ("Interest_Rate", 4.5192),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_twenty_three_fields() {
        assert_eq!(FIELDS.len(), 23);
    }

    #[test]
    fn categorical_fields_are_a_subset_of_the_schema() {
        for name in CATEGORICAL_FIELDS {
            assert!(field_spec(name).is_some(), "unknown field {}", name);
        }
        assert_eq!(categorical_field_set().len(), 5);
    }

    #[test]
    fn categorical_fields_match_string_valued_kinds() {
        for spec in &FIELDS {
            let is_categorical = CATEGORICAL_FIELDS.contains(&spec.name);
            let holds_strings = matches!(
                spec.kind,
                FieldKind::OneOf(_) | FieldKind::JoinedLoanTypes
            );
            assert_eq!(is_categorical, holds_strings, "field {}", spec.name);
        }
    }

    #[test]
    fn importance_is_sorted_descending() {
        for pair in FEATURE_IMPORTANCE.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
