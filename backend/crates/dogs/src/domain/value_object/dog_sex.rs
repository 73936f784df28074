use serde::{Deserialize, Serialize};
use std::fmt;

/// Dog sex, a closed two-value set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogSex {
    Male,
    Female,
}

impl DogSex {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            DogSex::Male => "male",
            DogSex::Female => "female",
        }
    }

    /// Decode a stored code; `None` for anything outside the set
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "male" => Some(DogSex::Male),
            "female" => Some(DogSex::Female),
            _ => None,
        }
    }
}

impl fmt::Display for DogSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_sex_codes() {
        assert_eq!(DogSex::Male.code(), "male");
        assert_eq!(DogSex::Female.code(), "female");
        assert_eq!(DogSex::from_code("male"), Some(DogSex::Male));
        assert_eq!(DogSex::from_code("female"), Some(DogSex::Female));
        assert_eq!(DogSex::from_code("unknown"), None);
    }

    #[test]
    fn test_dog_sex_serde() {
        assert_eq!(serde_json::to_string(&DogSex::Female).unwrap(), "\"female\"");
        let sex: DogSex = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(sex, DogSex::Male);
    }
}
