//! Domain Layer - Business entities and persistence interface
//!
//! This layer contains:
//! - Domain entities (Problem, NewProblem, ProblemPatch)
//! - Domain value objects (Difficulty, Example)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
