//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] returned when an expense or spending limit does not exist.
//! - [`InvalidAmount`] returned when a monetary value is negative or malformed.
//! - [`InvalidPeriod`] returned when a month/year pair is out of range.
//! - [`InvalidDate`] returned when a date string cannot be parsed.
//! - [`InvalidName`] returned when a required identifier is blank.
//! - [`Overflow`] returned when a derived amount exceeds the decimal range.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidPeriod`]: EngineError::InvalidPeriod
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`Overflow`]: EngineError::Overflow
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Overflow: {0}")]
    Overflow(String),
}
