use super::types::TopicCategory;
use crate::Result;
use regex::Regex;
use tracing::debug;

/// Default rule table in precedence order. Emergency must stay first so a
/// 911 redirect is never masked by a less urgent match.
pub const DEFAULT_RULES: &[(TopicCategory, &[&str])] = &[
    (
        TopicCategory::Emergency,
        &[
            "emergency",
            "urgent",
            "911",
            "ambulance",
            "heart attack",
            "stroke",
            "bleeding",
            "unconscious",
            "can't breathe",
            "can’t breathe",
            "cannot breathe",
            "not breathing",
            "overdose",
            "seizure",
            "suicide",
            "suicidal",
        ],
    ),
    (
        TopicCategory::MedicalAdvice,
        &[
            "diagnose",
            "diagnosis",
            "treatment",
            "medication dosage",
            "dosage",
            "dose",
            "prescribe",
            "prescription",
            "medical condition",
            "symptoms",
            "disease",
            "illness",
            "pain relief",
            "drug interaction",
            "side effects",
        ],
    ),
    (
        TopicCategory::UnrelatedBusiness,
        &[
            "restaurant",
            "car",
            "real estate",
            "technology",
            "software",
            "computer",
            "internet",
            "banking",
            "finance",
        ],
    ),
    (
        TopicCategory::Inappropriate,
        &[
            "politics",
            "religion",
            "dating",
            "personal relationship",
            "controversial",
            "offensive",
        ],
    ),
    (
        TopicCategory::LegalAdvice,
        &[
            "lawsuit",
            "legal advice",
            "attorney",
            "lawyer",
            "sue",
            "court",
            "legal rights",
        ],
    ),
    (
        TopicCategory::OtherProviders,
        &[
            "other companies",
            "competitors",
            "different provider",
            "another service",
            "alternative",
        ],
    ),
];

/// One entry of the classifier: a category and the whole-word pattern that
/// selects it.
#[derive(Debug, Clone)]
pub struct TopicRule {
    category: TopicCategory,
    pattern: Regex,
}

impl TopicRule {
    pub fn new(category: TopicCategory, pattern: Regex) -> Self {
        Self { category, pattern }
    }

    /// Matches any of `keywords` as whole words, ignoring case.
    pub fn from_keywords(category: TopicCategory, keywords: &[&str]) -> Result<Self> {
        let alternatives = keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives))?;
        Ok(Self::new(category, pattern))
    }

    pub fn category(&self) -> TopicCategory {
        self.category
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered rule list; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    rules: Vec<TopicRule>,
}

impl TopicClassifier {
    pub fn new(rules: Vec<TopicRule>) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Result<Self> {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(category, keywords)| TopicRule::from_keywords(*category, keywords))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    pub fn classify(&self, text: &str) -> TopicCategory {
        let lowered = text.to_lowercase();
        let category = self
            .rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(TopicRule::category)
            .unwrap_or(TopicCategory::None);

        debug!("Classified message as {}", category);
        category
    }
}
