use biaoqing_core::script::ScriptConverter;
use zhconv::{Variant, zhconv};

/// Simplified/Traditional converter backed by the zhconv ruleset tables.
///
/// Conversion is table-driven and total: characters without a mapping pass
/// through unchanged, so any input string is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseConverter;

impl ChineseConverter {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptConverter for ChineseConverter {
    fn to_simplified(&self, text: &str) -> String {
        zhconv(text, Variant::ZhHans)
    }

    fn to_traditional(&self, text: &str) -> String {
        zhconv(text, Variant::ZhHant)
    }
}
