//! Versioned question schema.
//!
//! One definition feeds the survey form, the admin dashboard and the backend
//! column mapping. Field names are always `prefix + (index + 1)`, so the order
//! of `questions` inside a category is part of the wire contract and must never
//! be reshuffled within a version. Changing a list means adding a new version.

use crate::fields::field_name;

/// A group of Likert questions sharing one field prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    /// Key used in the aggregates map (`awareness`, `prague_wtp`, ...).
    pub key: &'static str,
    /// Field-name prefix. Usually equal to `key`; legacy `preferences` used `preference`.
    pub prefix: &'static str,
    /// Section heading shown on the form and in the detail view.
    pub title: &'static str,
    /// Series label on the chart.
    pub chart_label: &'static str,
    /// Label used in the means list (`<short_label> Q<n>: <mean>`).
    pub short_label: &'static str,
    /// Fixed chart colour.
    pub color: &'static str,
    pub questions: &'static [&'static str],
}

impl Category {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Field name for the zero-based question `index`.
    pub fn field(&self, index: usize) -> String {
        field_name(self.prefix, index)
    }

    pub fn fields(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.questions.len()).map(|index| self.field(index))
    }

    /// Zero-based question index for a field such as `awareness3`, if it belongs here.
    pub fn index_of(&self, field: &str) -> Option<usize> {
        let digits = field.strip_prefix(self.prefix)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: usize = digits.parse().ok()?;
        (1..=self.questions.len())
            .contains(&number)
            .then(|| number - 1)
    }
}

/// A free-form maximum price question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceField {
    /// Name posted by the form (`pragueAiPrice`).
    pub wire: &'static str,
    /// Stored column (`prague_ai_price`).
    pub column: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionSchema {
    pub version: u32,
    pub categories: &'static [Category],
    pub prices: &'static [PriceField],
}

const AWARENESS: [&str; 8] = [
    "The AI-designed mug appears to be visually creative and modern.",
    "The human-designed mug appears to be more authentic and handcrafted.",
    "I believe AI can produce product designs that are equally appealing as human designs.",
    "I trust that the human-designed mug has higher craftsmanship quality.",
    "I feel comfortable purchasing a product designed entirely by AI.",
    "I find AI-generated designs innovative and interesting.",
    "The human-designed mug looks more emotionally appealing to me.",
    "I believe AI design lacks emotional touch compared to human creativity.",
];

const CITY_WTP: [&str; 4] = [
    "Are you willing to pay the same price for the AI-designed mug as for the human-designed mug?",
    "Are you willing to pay more for the AI-designed mug if it offers innovative features?",
    "Would you only purchase the AI-designed mug if it is competitively priced compared to the human-designed mug?",
    "Would you pay more for the AI-designed mug if it demonstrates superior quality during use?",
];

const PREFERENCES: [&str; 8] = [
    "I prefer the AI-designed mug over the human-designed mug.",
    "I would feel proud to own an AI-designed mug.",
    "The AI-designed mug seems more innovative and unique.",
    "The human-designed mug feels more reliable and practical.",
    "I think AI-designed products are the future of modern design.",
    "I would choose the human-designed mug because it reflects traditional aesthetics.",
    "AI-designed products make shopping more exciting and futuristic.",
    "I would recommend AI-designed products to others if the quality is good.",
];

const WTP: [&str; 8] = [
    "I am willing to pay the same price for the AI-designed mug as for the human-designed mug.",
    "I am willing to pay more for the AI-designed mug if it offers innovative features.",
    "I would only purchase the AI-designed mug if it is competitively priced compared to the human-designed mug.",
    "I am more willing to pay for the AI-designed mug if it comes from a trusted or well-known brand.",
    "I would pay more for the AI-designed mug if it is marketed as eco-friendly or sustainable.",
    "I am more willing to pay for the AI-designed mug if it offers customization options (e.g., design personalization).",
    "My willingness to pay depends on the intended use (e.g., gift, personal use, decoration).",
    "I would pay more for the AI-designed mug if it demonstrates superior quality during use.",
];

const COMPARATIVE: [&str; 8] = [
    "The AI-designed mug appears more functional and precise in its design.",
    "The human-designed mug appears more creative and emotionally engaging.",
    "The AI design positively influences my purchase decision.",
    "The human-designed mug influences my purchase decision more than AI features.",
    "I believe AI-generated designs will become increasingly accepted by consumers.",
    "I would not buy AI-designed products if they seem too artificial or complex.",
    "Overall, I am open to considering both AI-designed and human-designed products depending on context.",
    "The AI design makes the mug look more innovative than traditional designs.",
];

/// Single-product survey with four eight-question blocks. Kept so older rows stay readable.
pub const SCHEMA_V1: QuestionSchema = QuestionSchema {
    version: 1,
    categories: &[
        Category {
            key: "awareness",
            prefix: "awareness",
            title: "Awareness & Perceptions",
            chart_label: "Awareness",
            short_label: "Awareness",
            color: "#60a5fa",
            questions: &AWARENESS,
        },
        Category {
            key: "preferences",
            prefix: "preference",
            title: "Preferences & Attitudes",
            chart_label: "Preferences",
            short_label: "Preferences",
            color: "#34d399",
            questions: &PREFERENCES,
        },
        Category {
            key: "wtp",
            prefix: "wtp",
            title: "Willingness to Pay",
            chart_label: "WTP",
            short_label: "WTP",
            color: "#f59e0b",
            questions: &WTP,
        },
        Category {
            key: "comparative",
            prefix: "comparative",
            title: "Comparative Analysis (AI vs Human Design)",
            chart_label: "Comparative",
            short_label: "Comparative",
            color: "#ef4444",
            questions: &COMPARATIVE,
        },
    ],
    prices: &[
        PriceField {
            wire: "aiMugPrice",
            column: "ai_mug_price",
            label: "AI-designed mug",
        },
        PriceField {
            wire: "humanMugPrice",
            column: "human_mug_price",
            label: "Human-designed mug",
        },
    ],
};

/// Two-city survey: awareness plus a willingness-to-pay block per market.
pub const SCHEMA_V2: QuestionSchema = QuestionSchema {
    version: 2,
    categories: &[
        Category {
            key: "awareness",
            prefix: "awareness",
            title: "Awareness",
            chart_label: "Awareness",
            short_label: "Awareness",
            color: "#3b82f6",
            questions: &AWARENESS,
        },
        Category {
            key: "prague_wtp",
            prefix: "prague_wtp",
            title: "Prague – WTP",
            chart_label: "Prague WTP",
            short_label: "Prague",
            color: "#f59e0b",
            questions: &CITY_WTP,
        },
        Category {
            key: "newyork_wtp",
            prefix: "newyork_wtp",
            title: "New York – WTP",
            chart_label: "New York WTP",
            short_label: "New York",
            color: "#10b981",
            questions: &CITY_WTP,
        },
    ],
    prices: &[
        PriceField {
            wire: "pragueAiPrice",
            column: "prague_ai_price",
            label: "Prague – AI Price",
        },
        PriceField {
            wire: "pragueHumanPrice",
            column: "prague_human_price",
            label: "Prague – Human Price",
        },
        PriceField {
            wire: "newYorkAiPrice",
            column: "newyork_ai_price",
            label: "New York – AI Price",
        },
        PriceField {
            wire: "newYorkHumanPrice",
            column: "newyork_human_price",
            label: "New York – Human Price",
        },
    ],
};

/// Every known schema, newest first.
pub const ALL_SCHEMAS: &[QuestionSchema] = &[SCHEMA_V2, SCHEMA_V1];

impl QuestionSchema {
    /// The schema the form currently collects and the backend aggregates.
    pub fn current() -> &'static QuestionSchema {
        &ALL_SCHEMAS[0]
    }

    /// Pick the schema whose rating fields best match the keys of a stored row.
    /// Ties (including rows with no ratings at all) go to the current schema.
    pub fn detect<'a, I>(keys: I) -> &'static QuestionSchema
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();
        let mut best = Self::current();
        let mut best_hits = 0usize;
        for schema in ALL_SCHEMAS {
            let hits = keys
                .iter()
                .filter(|key| schema.locate(key).is_some())
                .count();
            if hits > best_hits {
                best = schema;
                best_hits = hits;
            }
        }
        best
    }

    pub fn category(&self, key: &str) -> Option<&'static Category> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// Question text for `category` at zero-based `index`.
    pub fn question_text(&self, category: &str, index: usize) -> Option<&'static str> {
        self.category(category)
            .and_then(|category| category.questions.get(index).copied())
    }

    /// Resolve a rating field name to its category and zero-based index.
    pub fn locate(&self, field: &str) -> Option<(&'static Category, usize)> {
        self.categories
            .iter()
            .find_map(|category| category.index_of(field).map(|index| (category, index)))
    }

    pub fn rating_fields(&self) -> impl Iterator<Item = String> + '_ {
        self.categories.iter().flat_map(Category::fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn current_schema_is_the_two_city_version() {
        let schema = QuestionSchema::current();
        assert_eq!(schema.version, 2);
        let keys: Vec<_> = schema.categories.iter().map(|c| c.key).collect();
        assert_eq!(keys, ["awareness", "prague_wtp", "newyork_wtp"]);
        assert_eq!(schema.categories.iter().map(Category::len).max(), Some(8));
    }

    #[test]
    fn rating_fields_are_unique_and_resolve_back() {
        for schema in ALL_SCHEMAS {
            let fields: Vec<String> = schema.rating_fields().collect();
            let unique: HashSet<_> = fields.iter().collect();
            assert_eq!(fields.len(), unique.len(), "v{}", schema.version);

            for field in &fields {
                let (category, index) = schema.locate(field).expect("field resolves");
                assert_eq!(&category.field(index), field);
            }
        }
    }

    #[test]
    fn locate_rejects_out_of_range_and_foreign_fields() {
        let schema = QuestionSchema::current();
        assert!(schema.locate("awareness0").is_none());
        assert!(schema.locate("awareness9").is_none());
        assert!(schema.locate("prague_wtp5").is_none());
        assert!(schema.locate("awareness").is_none());
        assert!(schema.locate("preference1").is_none());
        assert_eq!(schema.locate("newyork_wtp4").map(|(c, i)| (c.key, i)), Some(("newyork_wtp", 3)));
    }

    #[test]
    fn legacy_preferences_use_singular_prefix() {
        let category = SCHEMA_V1.category("preferences").unwrap();
        assert_eq!(category.field(0), "preference1");
        assert_eq!(
            SCHEMA_V1.question_text("preferences", 7),
            Some("I would recommend AI-designed products to others if the quality is good.")
        );
    }

    #[test]
    fn detect_prefers_matching_schema() {
        let legacy = ["id", "awareness1", "preference1", "wtp2", "comparative8"];
        assert_eq!(QuestionSchema::detect(legacy).version, 1);

        let current = ["id", "awareness1", "prague_wtp1", "newyork_wtp4"];
        assert_eq!(QuestionSchema::detect(current).version, 2);

        let bare = ["id", "age"];
        assert_eq!(QuestionSchema::detect(bare).version, 2);
    }
}
