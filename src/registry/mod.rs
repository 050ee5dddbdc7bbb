//! Course registry.
//!
//! The registry is the explicitly constructed, injectable mapping of course
//! key → course descriptor that drives a generation batch. There is no
//! module-level course table: callers build a registry programmatically or
//! load one from a YAML file and pass it to the orchestrator, which keeps
//! single-course runs trivially testable.
//!
//! Iteration is in key order, so batch runs are deterministic.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::Course;
use crate::error::RegistryError;

/// On-disk registry document: a list of course descriptors.
///
/// The list form keeps duplicate keys detectable when loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegistryFile {
    courses: Vec<Course>,
}

/// Registry of course descriptors keyed by course key.
#[derive(Debug, Clone, Default)]
pub struct CourseRegistry {
    courses: BTreeMap<String, Course>,
}

impl CourseRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a course descriptor.
    ///
    /// # Errors
    /// Returns `DuplicateCourse` if a course with the same key is already
    /// registered.
    pub fn insert(&mut self, course: Course) -> Result<(), RegistryError> {
        if self.courses.contains_key(&course.key) {
            return Err(RegistryError::DuplicateCourse(course.key.clone()));
        }
        self.courses.insert(course.key.clone(), course);
        Ok(())
    }

    /// Gets a course descriptor by key.
    pub fn get(&self, key: &str) -> Option<&Course> {
        self.courses.get(key)
    }

    /// Iterates course descriptors in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Course)> {
        self.courses.iter().map(|(key, course)| (key.as_str(), course))
    }

    /// Number of registered courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// True if no courses are registered.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Loads a registry from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_yaml::from_str(contents)?;
        let mut registry = Self::new();
        for course in file.courses {
            registry.insert(course)?;
        }
        Ok(registry)
    }

    /// Loads a registry from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
