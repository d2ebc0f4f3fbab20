// Core extraction
pub mod clean;
pub mod parse;

// Collaborators
pub mod export;
pub mod fetch;
pub mod paginate;
