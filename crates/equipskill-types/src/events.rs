use serde::{Deserialize, Serialize};

/// Table named in a host data-load notification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataTable {
    /// The skill table
    Skills,

    /// The system table carrying the weapon/armor type taxonomy
    System,

    /// Any other table; ignored by the unlock index
    Other(String),
}

impl DataTable {
    /// Map a host file name such as `Skills.json` to a table
    pub fn from_file_name(name: &str) -> Self {
        match name.trim_end_matches(".json") {
            "Skills" => DataTable::Skills,
            "System" => DataTable::System,
            other => DataTable::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_name() {
        assert_eq!(DataTable::from_file_name("Skills.json"), DataTable::Skills);
        assert_eq!(DataTable::from_file_name("System"), DataTable::System);
        assert_eq!(
            DataTable::from_file_name("Actors.json"),
            DataTable::Other("Actors".into())
        );
    }
}
