//! Domain models for the contacts API.

pub mod person;

pub use person::{CreatePersonInput, NewPerson, Person, PersonResponse, UpdatePersonInput};
