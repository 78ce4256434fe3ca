//! Resolve, persist, and validate the default owner used to qualify bare
//! GitHub repository names into `OWNER/REPO` form.

pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod github;
pub mod orgs;
pub mod qualify;
pub mod resolver;
