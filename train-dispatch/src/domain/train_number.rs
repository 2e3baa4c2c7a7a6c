//! Train number (departure identity) type.

use std::fmt;

use super::ValidationError;

/// A validated, positive train number.
///
/// Train numbers identify a departure within the registry. Zero and negative
/// values are rejected at construction.
///
/// # Examples
///
/// ```
/// use train_dispatch::domain::TrainNumber;
///
/// let n = TrainNumber::new(501).unwrap();
/// assert_eq!(n.get(), 501);
///
/// assert!(TrainNumber::new(0).is_err());
/// assert!(TrainNumber::new(-1).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrainNumber(u32);

impl TrainNumber {
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::InvalidTrainNumber(value));
        }
        Ok(Self(value as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.0)
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<i32> for TrainNumber {
    fn eq(&self, other: &i32) -> bool {
        i64::from(self.0) == i64::from(*other)
    }
}
