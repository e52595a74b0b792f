//! One end of a link batch.

use serde::{Deserialize, Serialize};

use crate::error::GlobError;
use crate::expander::Expander;
use crate::tokenizer::convert_range;

/// Template, range field and slot describing one side of a link batch.
///
/// Compiling a side yields `"<ord>.<slot>"` entries. If the slot holds the
/// placeholder, the slot is expanded and the template is used as a fixed ord;
/// otherwise the template is expanded and every ord gets the same slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub template: String,
    pub range: String,
    #[serde(default)]
    pub slot: String,
}

impl Side {
    pub fn new(
        template: impl Into<String>,
        range: impl Into<String>,
        slot: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            range: range.into(),
            slot: slot.into(),
        }
    }

    /// Expands this side into ord/slot entries.
    pub fn compile(&self, expander: &Expander, separator: char) -> Result<Vec<String>, GlobError> {
        let ranges = convert_range(&self.range, separator)?;

        let entries = if expander.has_placeholder(&self.slot) {
            expander
                .expand(&self.slot, &ranges, 0)?
                .into_iter()
                .map(|slot| format!("{}.{}", self.template, slot))
                .collect()
        } else {
            expander
                .expand(&self.template, &ranges, 0)?
                .into_iter()
                .map(|ord| format!("{}.{}", ord, self.slot))
                .collect()
        };
        Ok(entries)
    }
}
