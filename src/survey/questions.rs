use std::fmt;

/// Identifies the answer slot a survey page writes to. Several pages share
/// one id when a long question is split across pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionId {
    PrimaryGoal,
    SecondaryGoals,
    AgeGroup,
    TimeCommitment,
    AdvancedComfort,
    Budget,
    Applications,
    HealthNotes,
}

impl QuestionId {
    /// Wire name used when answers are serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryGoal => "primaryGoal",
            Self::SecondaryGoals => "secondaryGoals",
            Self::AgeGroup => "ageGroup",
            Self::TimeCommitment => "timeCommitment",
            Self::AdvancedComfort => "advancedComfort",
            Self::Budget => "budget",
            Self::Applications => "applications",
            Self::HealthNotes => "healthNotes",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines the input type and the answer shape of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one option may be selected.
    SingleChoice,
    /// Any number of options may be selected.
    MultiChoice,
}

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

impl ChoiceOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            description: None,
        }
    }

    pub const fn described(
        value: &'static str,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            value,
            label,
            description: Some(description),
        }
    }
}

/// One screen of the survey: a full question, or a continuation fragment
/// that carries the id and kind of the page before it. Continuation only
/// affects title rendering and progress counting.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub continuation: bool,
    pub options: Vec<ChoiceOption>,
}

impl QuestionPage {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// The BoneStack survey: eight questions over nine pages. The secondary
/// goals question is split across two pages.
pub fn bonestack_pages() -> Vec<QuestionPage> {
    vec![
        QuestionPage {
            id: QuestionId::PrimaryGoal,
            kind: QuestionKind::SingleChoice,
            title: "What's your primary goal?",
            subtitle: Some("Choose one"),
            icon: Some("🎯"),
            continuation: false,
            options: vec![
                ChoiceOption::described(
                    "growth",
                    "🦴 Growth Enhancement Path",
                    "aimed at overall skeletal extension",
                ),
                ChoiceOption::described(
                    "support",
                    "🛡 Structural Support Path",
                    "aimed at strengthening and resilience",
                ),
                ChoiceOption::described(
                    "cranial",
                    "🪞 Cranial Optimization Path",
                    "aimed at balance and proportions",
                ),
                ChoiceOption::described(
                    "wellness",
                    "🌱 Wellness Maintenance Path",
                    "aimed at general upkeep and longevity",
                ),
            ],
        },
        QuestionPage {
            id: QuestionId::SecondaryGoals,
            kind: QuestionKind::MultiChoice,
            title: "Do you have any secondary goals?",
            subtitle: Some("Choose all that apply"),
            icon: None,
            continuation: false,
            options: vec![
                ChoiceOption::new("height", "Increase standing height"),
                ChoiceOption::new("cheekbone", "Enhance cheekbone prominence"),
                ChoiceOption::new("lowerJaw", "Increase forward projection of lower jaw"),
                ChoiceOption::new("upperJaw", "Improve upper jaw prominence"),
            ],
        },
        QuestionPage {
            id: QuestionId::SecondaryGoals,
            kind: QuestionKind::MultiChoice,
            title: "Do you have any secondary goals?",
            subtitle: Some("Choose all that apply"),
            icon: None,
            continuation: true,
            options: vec![
                ChoiceOption::new(
                    "ribcage",
                    "Increase ribcage/upper body frame projection",
                ),
                ChoiceOption::new("density", "Increase overall bone density/mass"),
                ChoiceOption::new("posture", "General posture and skeletal symmetry"),
                ChoiceOption::new("none", "None, just my primary goal"),
            ],
        },
        QuestionPage {
            id: QuestionId::AgeGroup,
            kind: QuestionKind::SingleChoice,
            title: "What's your age group?",
            subtitle: None,
            icon: None,
            continuation: false,
            options: vec![
                ChoiceOption::described("under18", "Under 18", "educational suggestions only"),
                ChoiceOption::new("18-25", "18-25"),
                ChoiceOption::new("26-35", "26-35"),
                ChoiceOption::new("36-45", "36-45"),
                ChoiceOption::new("46+", "46+"),
            ],
        },
        QuestionPage {
            id: QuestionId::TimeCommitment,
            kind: QuestionKind::SingleChoice,
            title: "How much time and discipline can you commit?",
            subtitle: None,
            icon: Some("📅"),
            continuation: false,
            options: vec![
                ChoiceOption::described("short", "🟢 Short-term boost", "3-6 months"),
                ChoiceOption::described("medium", "🟡 Medium program", "6-12 months"),
                ChoiceOption::described("long", "🔴 Long-term transformation", "1 year+"),
            ],
        },
        QuestionPage {
            id: QuestionId::AdvancedComfort,
            kind: QuestionKind::SingleChoice,
            title: "How comfortable are you with advanced approaches?",
            subtitle: None,
            icon: None,
            continuation: false,
            options: vec![
                ChoiceOption::described(
                    "level1",
                    "Level 1",
                    "Only basic, low-risk, proven methods",
                ),
                ChoiceOption::described(
                    "level2",
                    "Level 2",
                    "Some moderate, targeted interventions",
                ),
                ChoiceOption::described(
                    "level3",
                    "Level 3",
                    "Open to advanced and cutting-edge approaches",
                ),
            ],
        },
        QuestionPage {
            id: QuestionId::Budget,
            kind: QuestionKind::SingleChoice,
            title: "What's your preferred budget range?",
            subtitle: None,
            icon: Some("💰"),
            continuation: false,
            options: vec![
                ChoiceOption::new("0", "$0/month"),
                ChoiceOption::new("1-100", "💵 $1-100/month"),
                ChoiceOption::new("100-300", "💵💵 $100-300/month"),
                ChoiceOption::new("300+", "💵💵💵 $300+/month"),
            ],
        },
        QuestionPage {
            id: QuestionId::Applications,
            kind: QuestionKind::SingleChoice,
            title: "What kind of applications are you most comfortable with?",
            subtitle: None,
            icon: None,
            continuation: false,
            options: vec![
                ChoiceOption::new("oral", "Oral or nutritional-based"),
                ChoiceOption::new("wearable", "Wearable/mechanical support"),
                ChoiceOption::described(
                    "external",
                    "External/treatment-based",
                    "e.g., non-invasive tech",
                ),
                ChoiceOption::new("none", "No preference"),
            ],
        },
        QuestionPage {
            id: QuestionId::HealthNotes,
            kind: QuestionKind::MultiChoice,
            title: "Any important health notes?",
            subtitle: Some("Select all that apply"),
            icon: Some("❤️"),
            continuation: false,
            options: vec![
                ChoiceOption::new("cardiovascular", "Cardiovascular condition"),
                ChoiceOption::new("bone", "Bone-related disorder"),
                ChoiceOption::new("hormonal", "Hormonal/endocrine condition"),
                ChoiceOption::new("pregnancy", "Currently pregnant or planning pregnancy"),
                ChoiceOption::new("none", "None of the above"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_not_a_continuation() {
        let pages = bonestack_pages();
        assert!(!pages[0].continuation);
    }

    #[test]
    fn continuations_carry_the_previous_id_and_kind() {
        let pages = bonestack_pages();
        for window in pages.windows(2) {
            if window[1].continuation {
                assert_eq!(window[1].id, window[0].id);
                assert_eq!(window[1].kind, window[0].kind);
            }
        }
    }

    #[test]
    fn option_values_are_unique_per_id() {
        use std::collections::{HashMap, HashSet};

        let mut seen: HashMap<QuestionId, HashSet<&str>> = HashMap::new();
        for page in bonestack_pages() {
            let values = seen.entry(page.id).or_default();
            for option in &page.options {
                assert!(
                    values.insert(option.value),
                    "duplicate option {} under {}",
                    option.value,
                    page.id
                );
            }
        }
    }

    #[test]
    fn pages_cover_every_id_once_logically() {
        let pages = bonestack_pages();
        assert_eq!(pages.len(), 9);
        assert_eq!(
            pages.iter().filter(|page| !page.continuation).count(),
            8,
            "one logical question per id"
        );
    }
}
