//! Demographic questions asked before the rating blocks.

/// Country choice that reveals the free-text `countryOther` input.
pub const OTHER_COUNTRY: &str = "Other";

/// A single-choice demographic question rendered as a `<select>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceField {
    pub name: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

pub const CHOICE_FIELDS: [ChoiceField; 6] = [
    ChoiceField {
        name: "gender",
        label: "Gender",
        options: &["Female", "Male", "Non-binary", "Prefer not to say"],
    },
    ChoiceField {
        name: "education",
        label: "Highest education",
        options: &[
            "High school",
            "Bachelor's degree",
            "Master's degree",
            "Doctorate",
            "Other",
        ],
    },
    ChoiceField {
        name: "occupation",
        label: "Occupation",
        options: &["Student", "Employed", "Self-employed", "Unemployed", "Retired"],
    },
    ChoiceField {
        name: "income",
        label: "Monthly income",
        options: &[
            "Under 1,000 EUR",
            "1,000 – 2,000 EUR",
            "2,000 – 3,500 EUR",
            "Over 3,500 EUR",
            "Prefer not to say",
        ],
    },
    ChoiceField {
        name: "country",
        label: "Country of residence",
        options: &[
            "Czech Republic",
            "United States",
            "Germany",
            "Slovakia",
            "United Kingdom",
            OTHER_COUNTRY,
        ],
    },
    ChoiceField {
        name: "aiKnowledge",
        label: "Familiarity with AI",
        options: &["None", "Basic", "Intermediate", "Advanced", "Expert"],
    },
];
