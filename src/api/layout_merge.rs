use serde_json::{Map, Value};

use crate::core::Figure;
use crate::error::{StyleError, StyleResult};
use crate::style::StyleProfile;

/// Recursively overlays `overrides` onto `base`.
///
/// Objects merge key by key; any other value in `overrides` (arrays
/// included) replaces the base value outright.
pub fn merge_layout(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        if let (Some(Value::Object(target)), Value::Object(source)) = (base.get_mut(key), value) {
            merge_layout(target, source);
            continue;
        }
        base.insert(key.clone(), value.clone());
    }
}

impl Figure {
    /// Layout this figure renders with under `profile`.
    ///
    /// Template values act as defaults; anything set explicitly on the figure
    /// wins, including inside nested objects such as `xaxis` or `font`.
    pub fn effective_layout(&self, profile: &StyleProfile) -> StyleResult<Map<String, Value>> {
        let Value::Object(mut layout) = profile.layout_value()? else {
            return Err(StyleError::InvalidData(
                "template layout must serialize to a json object".to_owned(),
            ));
        };
        merge_layout(&mut layout, &self.layout);
        Ok(layout)
    }
}
