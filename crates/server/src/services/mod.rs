//! Business services for the contacts API.

pub mod person;

pub use person::PersonService;
