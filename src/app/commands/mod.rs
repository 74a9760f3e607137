pub mod check;
pub mod options;
pub mod perform;
pub mod validate;
