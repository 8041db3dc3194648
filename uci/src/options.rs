#[derive(Debug, Clone)]
pub struct UciOption {
    pub name: &'static str,
    pub option_type: UciOptionType,
}

#[derive(Debug, Clone)]
pub enum UciOptionType {
    Spin { min: i32, max: i32 },
}

impl UciOptionType {
    pub fn validate(&self, value: &str) -> Result<i32, String> {
        match self {
            UciOptionType::Spin { min, max } => {
                let parsed = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid integer: {}", e))?;
                if parsed < *min || parsed > *max {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(parsed)
            }
        }
    }

    pub fn to_uci<T>(&self, name: &str, current_value: &T) -> String
    where
        T: ToString,
    {
        match self {
            UciOptionType::Spin { min, max } => {
                format!(
                    "option name {} type spin default {} min {} max {}",
                    name,
                    current_value.to_string(),
                    min,
                    max
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTH: UciOptionType = UciOptionType::Spin { min: 1, max: 100 };

    #[test]
    fn test_spin_validation() {
        assert_eq!(DEPTH.validate("5"), Ok(5));
        assert_eq!(DEPTH.validate(" 100 "), Ok(100));
        assert!(DEPTH.validate("0").is_err());
        assert!(DEPTH.validate("101").is_err());
        assert!(DEPTH.validate("five").is_err());
    }

    #[test]
    fn test_spin_to_uci() {
        assert_eq!(
            DEPTH.to_uci("Depth", &3),
            "option name Depth type spin default 3 min 1 max 100"
        );
    }
}
