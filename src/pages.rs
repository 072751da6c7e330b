//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by route (home, career,
//! projects, blog, resume, contact, not-found). Each page module handles
//! its specific view logic and utilizes shared components from the
//! components module.

pub mod blog;
pub mod career;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod post;
pub mod projects;
pub mod resume;
