// Constants for the declaration explainer

/// Maximum number of tokens deferred before the identifier is found
pub const MAX_TOKENS: usize = 40;

/// Phrase printed for `const`
pub const READ_ONLY_PHRASE: &str = "read-only";

/// Phrase printed for `volatile`
pub const VOLATILE_PHRASE: &str = "volatile";

/// Phrase printed for `*`
pub const POINTER_PHRASE: &str = "pointer to";
