use std::str::FromStr;
use uci::{UciOption, UciOptionType, UciOutput};

use crate::MAX_DEPTH;

/// Search depth used when neither the command line nor `go depth` says otherwise.
pub const DEFAULT_DEPTH: u8 = 3;

macro_rules! define_config {
    ($(($field:ident: $type:ty, $uci_name:expr, $uci_type:expr, $default:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        uci: UciOption { name: $uci_name, option_type: $uci_type },
                    },)*
                }
            }
        }

        impl EngineConfig {
            pub fn update_from_uci(&mut self, uci_name: &str, value: &str) -> Result<(), String> {
                match uci_name {
                    $(name if name.eq_ignore_ascii_case($uci_name) => self.$field.update_from_uci(value),)*
                    _ => Err(format!("Unknown parameter: {}", uci_name)),
                }
            }

            pub fn to_uci(&self, output: &std::sync::mpsc::Sender<UciOutput>) -> Result<(), std::sync::mpsc::SendError<UciOutput>> {
                $(output.send(UciOutput::Option(self.$field.to_uci()))?;)*
                Ok(())
            }
        }
    };
}

define_config!(
    // Plies searched below the root move
    (depth: u8, "Depth", UciOptionType::Spin { min: 1, max: MAX_DEPTH as i32 }, DEFAULT_DEPTH),
);

impl EngineConfig {
    pub fn with_depth(depth: u8) -> Self {
        let mut config = Self::default();
        config.depth.value = depth.clamp(1, MAX_DEPTH);
        config
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub uci: UciOption,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString + Clone,
    T::Err: std::fmt::Display,
{
    pub fn update_from_uci(&mut self, value: &str) -> Result<(), String> {
        self.uci.option_type.validate(value)?;

        let new_value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;

        self.value = new_value;
        Ok(())
    }

    pub fn to_uci(&self) -> String {
        self.uci.option_type.to_uci(self.uci.name, &self.value)
    }
}
