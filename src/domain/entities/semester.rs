use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::application::app_error::AppError;

pub const FIRST_SEMESTER: u8 = 1;
pub const LAST_SEMESTER: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

impl Semester {
    pub fn new(value: u8) -> Result<Self, AppError> {
        if (FIRST_SEMESTER..=LAST_SEMESTER).contains(&value) {
            return Ok(Self(value));
        }
        Err(AppError::InvalidSemester(value.to_string()))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Semester {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Semester::new(value)
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.value()
    }
}

impl FromStr for Semester {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidSemester(s.to_string()))?;
        Semester::new(value)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
