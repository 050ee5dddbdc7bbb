//! Modules and the microlessons they own.
//!
//! A module is a named grouping within a course; it is never deleted, only
//! appended to. Microlessons keep a unique `sequence_order` within their
//! module, and exercises keep a unique `sequence_order` within their lesson.
//! `prerequisite_ids` are weak back-references to other microlessons:
//! advisory gating data, never ownership.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::{Difficulty, Exercise};
use crate::error::SchemaError;

/// The smallest standalone teaching unit, owning its graded exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMicroLesson")]
pub struct MicroLesson {
    id: String,
    title: String,
    content: String,
    sequence_order: u32,
    estimated_minutes: u32,
    difficulty: Difficulty,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    key_concepts: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    prerequisite_ids: BTreeSet<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    exercises: Vec<Exercise>,
}

/// Wire shadow of [`MicroLesson`]; funnels deserialization through
/// validation.
#[derive(Deserialize)]
struct RawMicroLesson {
    id: String,
    title: String,
    content: String,
    sequence_order: u32,
    estimated_minutes: u32,
    difficulty: Difficulty,
    #[serde(default)]
    key_concepts: BTreeSet<String>,
    #[serde(default)]
    prerequisite_ids: BTreeSet<String>,
    #[serde(default)]
    exercises: Vec<Exercise>,
}

impl TryFrom<RawMicroLesson> for MicroLesson {
    type Error = SchemaError;

    fn try_from(raw: RawMicroLesson) -> Result<Self, Self::Error> {
        let mut lesson = MicroLesson::new(
            raw.id,
            raw.title,
            raw.content,
            raw.sequence_order,
            raw.estimated_minutes,
            raw.difficulty,
        )?;
        for concept in raw.key_concepts {
            lesson = lesson.with_key_concept(concept);
        }
        for prerequisite in raw.prerequisite_ids {
            lesson.add_prerequisite(prerequisite)?;
        }
        for exercise in raw.exercises {
            lesson.push_exercise(exercise)?;
        }
        Ok(lesson)
    }
}

impl MicroLesson {
    /// Creates a validated microlesson with no concepts, prerequisites or
    /// exercises.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        sequence_order: u32,
        estimated_minutes: u32,
        difficulty: Difficulty,
    ) -> Result<Self, SchemaError> {
        if sequence_order == 0 {
            return Err(SchemaError::ZeroSequenceOrder);
        }
        if estimated_minutes == 0 {
            return Err(SchemaError::ZeroEstimatedMinutes);
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            sequence_order,
            estimated_minutes,
            difficulty,
            key_concepts: BTreeSet::new(),
            prerequisite_ids: BTreeSet::new(),
            exercises: Vec::new(),
        })
    }

    /// Adds a key concept.
    pub fn with_key_concept(mut self, concept: impl Into<String>) -> Self {
        self.key_concepts.insert(concept.into());
        self
    }

    /// Adds a prerequisite back-reference to another microlesson.
    ///
    /// A lesson may not list itself.
    pub fn add_prerequisite(&mut self, id: impl Into<String>) -> Result<(), SchemaError> {
        let id = id.into();
        if id == self.id {
            return Err(SchemaError::SelfPrerequisite {
                lesson: self.id.clone(),
            });
        }
        self.prerequisite_ids.insert(id);
        Ok(())
    }

    /// Appends an exercise; its `sequence_order` must be unique within this
    /// lesson.
    pub fn push_exercise(&mut self, exercise: Exercise) -> Result<(), SchemaError> {
        if self
            .exercises
            .iter()
            .any(|e| e.sequence_order() == exercise.sequence_order())
        {
            return Err(SchemaError::DuplicateSequenceOrder {
                scope: format!("microlesson '{}'", self.id),
                sequence: exercise.sequence_order(),
            });
        }
        self.exercises.push(exercise);
        Ok(())
    }

    /// Identifier referenced by other lessons' `prerequisite_ids`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Lesson title, unique within its module in practice.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Markdown-like content body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Position of this lesson within its module.
    pub fn sequence_order(&self) -> u32 {
        self.sequence_order
    }

    /// Estimated completion time in minutes.
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// Difficulty of this lesson.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Key concepts covered, possibly empty.
    pub fn key_concepts(&self) -> &BTreeSet<String> {
        &self.key_concepts
    }

    /// Advisory prerequisite references.
    pub fn prerequisite_ids(&self) -> &BTreeSet<String> {
        &self.prerequisite_ids
    }

    /// Exercises owned by this lesson.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

/// A named grouping of microlessons within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawModule")]
pub struct Module {
    name: String,
    lessons: Vec<MicroLesson>,
}

/// Wire shadow of [`Module`].
#[derive(Deserialize)]
struct RawModule {
    name: String,
    #[serde(default)]
    lessons: Vec<MicroLesson>,
}

impl TryFrom<RawModule> for Module {
    type Error = SchemaError;

    fn try_from(raw: RawModule) -> Result<Self, Self::Error> {
        let mut module = Module::new(raw.name);
        for lesson in raw.lessons {
            module.push_lesson(lesson)?;
        }
        Ok(module)
    }
}

impl Module {
    /// Creates an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lessons: Vec::new(),
        }
    }

    /// Appends a microlesson; its `sequence_order` must be unique within
    /// this module.
    pub fn push_lesson(&mut self, lesson: MicroLesson) -> Result<(), SchemaError> {
        if self
            .lessons
            .iter()
            .any(|l| l.sequence_order() == lesson.sequence_order())
        {
            return Err(SchemaError::DuplicateSequenceOrder {
                scope: format!("module '{}'", self.name),
                sequence: lesson.sequence_order(),
            });
        }
        self.lessons.push(lesson);
        Ok(())
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Microlessons in insertion order.
    pub fn lessons(&self) -> &[MicroLesson] {
        &self.lessons
    }

    /// Number of microlessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// True if the module has no microlessons yet.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
