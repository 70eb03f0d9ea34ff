use crate::error::KcResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Physical build choices that feed the difficulty assessment.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Customizations {
    #[arg(long)]
    #[serde(rename = "customPCB")]
    pub custom_pcb: bool,
    #[arg(long)]
    pub soldering_required: bool,
    #[arg(long)]
    pub custom_firmware: bool,
    #[arg(long)]
    pub case_modifications: bool,
    #[arg(long)]
    pub custom_plate: bool,
}

impl Customizations {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KcResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays flags that were given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &Customizations, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(custom_pcb, "custom_pcb");
        update_if_present!(soldering_required, "soldering_required");
        update_if_present!(custom_firmware, "custom_firmware");
        update_if_present!(case_modifications, "case_modifications");
        update_if_present!(custom_plate, "custom_plate");
    }
}

/// What a builder brings to a project.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserExperience {
    #[arg(long, default_value_t = 0)]
    pub builds_completed: u32,
    #[arg(long)]
    pub soldering_experience: bool,
    #[arg(long = "tool", value_name = "TOOL")]
    pub tools_available: Vec<String>,
    /// Hours available for the build.
    #[arg(long, default_value_t = 10.0)]
    pub time_available: f64,
}

impl Default for UserExperience {
    fn default() -> Self {
        Self {
            builds_completed: 0,
            soldering_experience: false,
            tools_available: Vec::new(),
            time_available: 10.0,
        }
    }
}

impl UserExperience {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KcResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
