//! LLM prompt templates used by the battle generators.
//!
//! Each template has a stable key, a hard-coded default and an environment
//! variable override (`TITLEBATTLE_PROMPT_<KEY>`). Placeholders are written
//! as `{name}` and filled with [`render`].

use titlebattle_domain::Tier;

/// All prompt template keys as constants.
pub mod keys {
    /// System prompt for the battle narrator.
    pub const BATTLE_SYSTEM_PROMPT: &str = "battle.system_prompt";
    /// Per-battle instructions and the JSON response format.
    pub const BATTLE_USER_PROMPT: &str = "battle.user_prompt";
    /// System prompt for the title-text generator.
    pub const TITLE_SYSTEM_PROMPT: &str = "title.system_prompt";
    /// Per-title instructions including the tier descriptions.
    pub const TITLE_USER_PROMPT: &str = "title.user_prompt";
}

/// Default template values.
pub mod defaults {
    pub const BATTLE_SYSTEM_PROMPT: &str = "You narrate short, creative text battles between two fantasy characters. You always answer with a single JSON object and nothing else.";

    pub const BATTLE_USER_PROMPT: &str = r#"Two characters fight a text battle.

[Player A]: {challenger}
[Player B]: {opponent}

Decide the outcome and answer in JSON with these fields:
1. "winner": "A" or "B"
2. "log": an array of about 5 strings, each one line describing the fight. Be creative and fun.
3. "titlePrompt": one keyword for the title awarded to the winner, reflecting the winner's traits or fighting style."#;

    pub const TITLE_SYSTEM_PROMPT: &str =
        "You are the title generator of a fantasy game. Output only the title text, no explanation.";

    pub const TITLE_USER_PROMPT: &str = r#"Character name: {winner}
Battle keyword: {keyword}
Requested tier: {tier}

Create one striking title of at most 20 characters that fits the requested tier:
* COMMON: {common}
* RARE: {rare}
* HERO: {hero}
* LEGEND: {legend}
* MYTH: {myth}"#;
}

/// Flavour description of a tier, used to steer title generation.
pub fn tier_flavour(tier: Tier) -> &'static str {
    match tier {
        Tier::Common => "An unremarkable, ordinary title.",
        Tier::Rare => "Quite unusual, though not very meaningful.",
        Tier::Hero => "An honourable title that many look up to.",
        Tier::Legend => "A great title worthy of the history books.",
        Tier::Myth => "A miraculous title that has reached the realm of the gods.",
    }
}

/// Environment variable name for a template override.
pub fn key_to_env_var(key: &str) -> String {
    format!("TITLEBATTLE_PROMPT_{}", key.to_uppercase().replace('.', "_"))
}

/// Get the default value for a template key.
pub fn get_default(key: &str) -> Option<&'static str> {
    match key {
        keys::BATTLE_SYSTEM_PROMPT => Some(defaults::BATTLE_SYSTEM_PROMPT),
        keys::BATTLE_USER_PROMPT => Some(defaults::BATTLE_USER_PROMPT),
        keys::TITLE_SYSTEM_PROMPT => Some(defaults::TITLE_SYSTEM_PROMPT),
        keys::TITLE_USER_PROMPT => Some(defaults::TITLE_USER_PROMPT),
        _ => None,
    }
}

/// Resolve a template: environment override first, then the default.
pub fn resolve(key: &str) -> Option<String> {
    std::env::var(key_to_env_var(key))
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| get_default(key).map(str::to_string))
}

/// Fill `{name}` placeholders. Unknown placeholders are left as written.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
