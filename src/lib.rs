pub mod validators;

pub use validators::validate_email;
