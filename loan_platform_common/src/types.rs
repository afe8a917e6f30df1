use serde::{Deserialize, Serialize};

/// **The risk level of a bank account**
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    High,
}

#[cfg(test)]
mod tests {
    use super::Risk;

    #[test]
    fn test_risk_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Risk::Low).unwrap(), r#""low""#);
        assert_eq!(serde_json::to_string(&Risk::High).unwrap(), r#""high""#);
    }

    #[test]
    fn test_unknown_risk_is_rejected() {
        assert!(serde_json::from_str::<Risk>(r#""medium""#).is_err());
    }
}
