//! Typed exercise records and their validation.
//!
//! An exercise is exactly one of three closed variants (mcq, short_answer,
//! terminal). All variants share `sequence_order`, `require_pass` and
//! `difficulty`. Construction validates the variant payload; deserialization
//! runs through the same validation via a raw shadow struct, so persisted
//! records cannot bypass it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::content::Difficulty;
use crate::error::SchemaError;
use crate::matcher;

/// Accepted literals for a short-answer exercise.
///
/// Parsed once from the `|`-delimited wire form at construction. Keeps both
/// the trimmed literals (for display and serialization) and their normalized
/// forms (for matching), so the wire string is never re-split at match time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedAnswers {
    literals: Vec<String>,
    normalized: Vec<String>,
}

impl AcceptedAnswers {
    /// Parses the `|`-delimited answer field.
    ///
    /// Literals are trimmed; empty segments are dropped. A field that yields
    /// zero non-empty literals is a [`SchemaError::EmptyAcceptedAnswers`].
    pub fn parse(raw: &str) -> Result<Self, SchemaError> {
        let literals: Vec<String> = raw
            .split('|')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();

        if literals.is_empty() {
            return Err(SchemaError::EmptyAcceptedAnswers);
        }

        let normalized = literals.iter().map(|l| matcher::normalize(l)).collect();
        Ok(Self {
            literals,
            normalized,
        })
    }

    /// The trimmed accepted literals, in wire order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// The normalized forms of the accepted literals, in wire order.
    pub fn normalized(&self) -> &[String] {
        &self.normalized
    }

    /// Number of accepted literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True if there are no accepted literals.
    ///
    /// Unreachable through [`AcceptedAnswers::parse`]; the matcher still
    /// fails closed on it.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Re-joins the literals into the `|`-delimited wire form.
    pub fn to_wire(&self) -> String {
        self.literals.join("|")
    }
}

impl Serialize for AcceptedAnswers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for AcceptedAnswers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

/// Validation rule for a terminal exercise.
///
/// The rule is data for the downstream exercise runtime; it is validated
/// here so malformed rules are rejected at authoring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Command output must contain the literal substring.
    OutputContains { value: String },
    /// Command output must not contain the literal substring.
    OutputExcludes { value: String },
    /// Command output must match the regex pattern.
    OutputMatches { pattern: String },
}

impl ValidationRule {
    /// Validates the rule. Regex patterns must compile.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let ValidationRule::OutputMatches { pattern } = self {
            regex::Regex::new(pattern).map_err(|e| SchemaError::InvalidValidationPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Evaluates the rule against captured command output.
    pub fn evaluate(&self, output: &str) -> bool {
        match self {
            ValidationRule::OutputContains { value } => output.contains(value),
            ValidationRule::OutputExcludes { value } => !output.contains(value),
            ValidationRule::OutputMatches { pattern } => regex::Regex::new(pattern)
                .map(|re| re.is_match(output))
                .unwrap_or(false),
        }
    }
}

/// The closed exercise variant with its typed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "exercise_type", rename_all = "snake_case")]
pub enum ExerciseKind {
    Mcq {
        question: String,
        /// Ordered answer options; at least 2.
        options: Vec<String>,
        /// Zero-based index into `options`.
        correct_answer: usize,
        explanation: String,
    },
    ShortAnswer {
        question: String,
        /// Accepted literals, `|`-delimited on the wire.
        answer: AcceptedAnswers,
        explanation: String,
        #[serde(default)]
        hints: Vec<String>,
    },
    Terminal {
        /// Literal shell text to execute.
        command: String,
        description: String,
        validation: ValidationRule,
        /// Positive timeout in seconds, enforced by the downstream runtime.
        timeout_sec: u32,
        #[serde(default)]
        hints: Vec<String>,
    },
}

impl ExerciseKind {
    /// The wire name of this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            ExerciseKind::Mcq { .. } => "mcq",
            ExerciseKind::ShortAnswer { .. } => "short_answer",
            ExerciseKind::Terminal { .. } => "terminal",
        }
    }

    fn validate(&self) -> Result<(), SchemaError> {
        match self {
            ExerciseKind::Mcq {
                options,
                correct_answer,
                ..
            } => {
                if options.len() < 2 {
                    return Err(SchemaError::TooFewOptions { got: options.len() });
                }
                if *correct_answer >= options.len() {
                    return Err(SchemaError::AnswerIndexOutOfBounds {
                        index: *correct_answer,
                        options: options.len(),
                    });
                }
                Ok(())
            }
            // The answer field was already parsed into non-empty literals.
            ExerciseKind::ShortAnswer { .. } => Ok(()),
            ExerciseKind::Terminal {
                validation,
                timeout_sec,
                ..
            } => {
                if *timeout_sec == 0 {
                    return Err(SchemaError::ZeroTimeout);
                }
                validation.validate()
            }
        }
    }
}

/// A single gradable question instance.
///
/// Owned by exactly one microlesson; `sequence_order` is scoped within that
/// lesson. Fields are private so every exercise in the system has passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExercise")]
pub struct Exercise {
    sequence_order: u32,
    require_pass: bool,
    difficulty: Difficulty,
    #[serde(flatten)]
    kind: ExerciseKind,
}

/// Wire shadow of [`Exercise`]; funnels deserialization through validation.
#[derive(Deserialize)]
struct RawExercise {
    sequence_order: u32,
    #[serde(default)]
    require_pass: bool,
    difficulty: Difficulty,
    #[serde(flatten)]
    kind: ExerciseKind,
}

impl TryFrom<RawExercise> for Exercise {
    type Error = SchemaError;

    fn try_from(raw: RawExercise) -> Result<Self, Self::Error> {
        Exercise::new(raw.sequence_order, raw.difficulty, raw.require_pass, raw.kind)
    }
}

impl Exercise {
    /// Creates a validated exercise.
    pub fn new(
        sequence_order: u32,
        difficulty: Difficulty,
        require_pass: bool,
        kind: ExerciseKind,
    ) -> Result<Self, SchemaError> {
        if sequence_order == 0 {
            return Err(SchemaError::ZeroSequenceOrder);
        }
        kind.validate()?;
        Ok(Self {
            sequence_order,
            require_pass,
            difficulty,
            kind,
        })
    }

    /// Creates a multiple-choice exercise.
    pub fn mcq(
        sequence_order: u32,
        difficulty: Difficulty,
        require_pass: bool,
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        Self::new(
            sequence_order,
            difficulty,
            require_pass,
            ExerciseKind::Mcq {
                question: question.into(),
                options,
                correct_answer,
                explanation: explanation.into(),
            },
        )
    }

    /// Creates a short-answer exercise from the `|`-delimited answer field.
    pub fn short_answer(
        sequence_order: u32,
        difficulty: Difficulty,
        require_pass: bool,
        question: impl Into<String>,
        answer: &str,
        explanation: impl Into<String>,
        hints: Vec<String>,
    ) -> Result<Self, SchemaError> {
        Self::new(
            sequence_order,
            difficulty,
            require_pass,
            ExerciseKind::ShortAnswer {
                question: question.into(),
                answer: AcceptedAnswers::parse(answer)?,
                explanation: explanation.into(),
                hints,
            },
        )
    }

    /// Creates a terminal exercise.
    #[allow(clippy::too_many_arguments)]
    pub fn terminal(
        sequence_order: u32,
        difficulty: Difficulty,
        require_pass: bool,
        command: impl Into<String>,
        description: impl Into<String>,
        validation: ValidationRule,
        timeout_sec: u32,
        hints: Vec<String>,
    ) -> Result<Self, SchemaError> {
        Self::new(
            sequence_order,
            difficulty,
            require_pass,
            ExerciseKind::Terminal {
                command: command.into(),
                description: description.into(),
                validation,
                timeout_sec,
                hints,
            },
        )
    }

    /// Position of this exercise within its lesson.
    pub fn sequence_order(&self) -> u32 {
        self.sequence_order
    }

    /// Whether passing this exercise gates progression.
    pub fn require_pass(&self) -> bool {
        self.require_pass
    }

    /// Difficulty of this exercise.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The typed payload.
    pub fn kind(&self) -> &ExerciseKind {
        &self.kind
    }
}
