/// Script conversion interface for Simplified/Traditional Chinese matching
pub trait ScriptConverter: Send + Sync {
    /// Convert text to its canonical Simplified form
    fn to_simplified(&self, text: &str) -> String;

    /// Convert text to its canonical Traditional form
    fn to_traditional(&self, text: &str) -> String;
}
