use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifiers for the five production quiz questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Age,
    Goal,
    Diet,
    Nutrients,
    Budget,
}

impl QuestionId {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionId::Age => "age",
            QuestionId::Goal => "goal",
            QuestionId::Diet => "diet",
            QuestionId::Nutrients => "nutrients",
            QuestionId::Budget => "budget",
        }
    }
}

/// Whether a question collects one token or a toggled set of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// One selectable option: the stable value token plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
}

impl QuizOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A quiz question, immutable once the bank is built at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub mode: SelectionMode,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// The production question sequence, in presentation order.
    pub fn standard_set() -> Vec<Question> {
        vec![
            Question {
                id: QuestionId::Age,
                prompt: "Who are we shopping for today?".to_string(),
                mode: SelectionMode::Single,
                options: vec![
                    QuizOption::new("child", "Child / Teen (Growth & Focus)"),
                    QuizOption::new("adult", "Adult (Active & Wellness)"),
                    QuizOption::new("woman", "Woman (Hormonal/Iron Health)"),
                    QuizOption::new("pregnancy", "Pregnant / Nursing Mom"),
                    QuizOption::new("senior", "Senior (60+ Active Aging)"),
                ],
            },
            Question {
                id: QuestionId::Goal,
                prompt: "What is your primary health goal?".to_string(),
                mode: SelectionMode::Single,
                options: vec![
                    QuizOption::new("diabetes", "Diabetes / Blood Sugar Control"),
                    QuizOption::new("weight", "Weight Management / Satiety"),
                    QuizOption::new("muscle", "Muscle Gain / Fitness"),
                    QuizOption::new("digestion", "Gut Health / Digestion"),
                    QuizOption::new("heart", "Heart Health / Cholesterol"),
                    QuizOption::new("energy", "Energy & Stamina"),
                    QuizOption::new("general", "General Daily Wellness"),
                ],
            },
            Question {
                id: QuestionId::Diet,
                prompt: "Do you have any dietary restrictions?".to_string(),
                mode: SelectionMode::Multiple,
                options: vec![
                    QuizOption::new("glutenfree", "Gluten-Free / Celiac"),
                    QuizOption::new("vegan", "Vegan / Plant-Based"),
                    QuizOption::new("none", "No Specific Restrictions"),
                ],
            },
            Question {
                id: QuestionId::Nutrients,
                prompt: "Are you looking for specific nutrient boosts?".to_string(),
                mode: SelectionMode::Multiple,
                options: vec![
                    QuizOption::new("protein", "High Protein"),
                    QuizOption::new("fiber", "High Fiber"),
                    QuizOption::new("iron", "Iron & Calcium"),
                    QuizOption::new("lowgi", "Ultra Low GI"),
                ],
            },
            Question {
                id: QuestionId::Budget,
                prompt: "What is your preferred price range?".to_string(),
                mode: SelectionMode::Single,
                options: vec![
                    QuizOption::new("budget", "Budget Friendly (< ₹90/kg)"),
                    QuizOption::new("mid", "Mid-Range (₹90 - ₹130/kg)"),
                    QuizOption::new("premium", "Premium / Specialized (> ₹130/kg)"),
                ],
            },
        ]
    }
}

/// A collected answer: one token for single-select questions, a toggled
/// list (insertion order preserved) for multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(token) => Some(token),
            AnswerValue::Multiple(_) => None,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        match self {
            AnswerValue::Single(value) => value == token,
            AnswerValue::Multiple(values) => values.iter().any(|value| value == token),
        }
    }
}

/// The flat answer map handed to the scoring engine on quiz completion.
/// Missing keys are always legal and contribute nothing to a score.
pub type AnswerMap = BTreeMap<QuestionId, AnswerValue>;
