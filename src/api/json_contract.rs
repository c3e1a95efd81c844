use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StyleError, StyleResult};
use crate::style::StyleProfile;

use super::{ExportConfig, TemplateRegistry};

pub const STYLE_PROFILE_JSON_SCHEMA_V1: u32 = 1;
pub const EXPORT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfileJsonContractV1 {
    pub schema_version: u32,
    pub name: String,
    pub profile: StyleProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ExportConfig,
}

// Profile and config fields all have defaults, so an envelope would also
// parse as a bare (empty) value. Envelopes are recognized by their
// `schema_version` key instead of by trial parsing.
fn parse_envelope(input: &str, supported: u32) -> StyleResult<Option<Value>> {
    let value: Value = serde_json::from_str(input)?;
    let Some(version) = value.get("schema_version") else {
        return Ok(None);
    };
    if version.as_u64() != Some(u64::from(supported)) {
        return Err(StyleError::InvalidData(format!(
            "unsupported schema version: {version}"
        )));
    }
    Ok(Some(value))
}

impl StyleProfileJsonContractV1 {
    pub fn parse(input: &str) -> StyleResult<Self> {
        let Some(value) = parse_envelope(input, STYLE_PROFILE_JSON_SCHEMA_V1)? else {
            return Err(StyleError::InvalidData(
                "style profile contract requires `schema_version`".to_owned(),
            ));
        };
        let contract: Self = serde_json::from_value(value)?;
        contract.profile.validate()?;
        Ok(contract)
    }
}

impl StyleProfile {
    pub fn to_json_contract_v1_pretty(&self, name: &str) -> StyleResult<String> {
        let payload = StyleProfileJsonContractV1 {
            schema_version: STYLE_PROFILE_JSON_SCHEMA_V1,
            name: name.to_owned(),
            profile: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either a bare profile or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> StyleResult<Self> {
        match parse_envelope(input, STYLE_PROFILE_JSON_SCHEMA_V1)? {
            Some(value) => {
                let contract: StyleProfileJsonContractV1 = serde_json::from_value(value)?;
                contract.profile.validate()?;
                Ok(contract.profile)
            }
            None => Self::from_json_str(input),
        }
    }
}

impl ExportConfig {
    pub fn to_json_contract_v1_pretty(&self) -> StyleResult<String> {
        let payload = ExportConfigJsonContractV1 {
            schema_version: EXPORT_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either a bare config or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> StyleResult<Self> {
        match parse_envelope(input, EXPORT_CONFIG_JSON_SCHEMA_V1)? {
            Some(value) => {
                let contract: ExportConfigJsonContractV1 = serde_json::from_value(value)?;
                contract.config.validate()?;
                Ok(contract.config)
            }
            None => Self::from_json_str(input),
        }
    }
}

impl TemplateRegistry {
    /// Registers the profile carried by a v1 contract under its own name.
    ///
    /// Returns the registered name.
    pub fn register_json_contract(&mut self, input: &str) -> StyleResult<String> {
        let contract = StyleProfileJsonContractV1::parse(input)?;
        self.register(contract.name.clone(), contract.profile)?;
        Ok(contract.name)
    }
}
