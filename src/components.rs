//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across multiple
//! page types (home, career, projects, blog, resume, contact). Components
//! handle specific UI elements with consistent styling and behavior,
//! eliminating duplication across page generators.

pub mod cards;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod layout;
pub mod nav;
pub mod skills;
