//! User domain
//!
//! Entities, the registration validation contract, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Candidate, UserRecord};
pub use repository::UserRepository;
pub use validation::{
    validate_candidate, validate_email, validate_password, validate_user_name, FieldErrors,
    UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
