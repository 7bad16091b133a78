//! LLM-backed battle narrator.
//!
//! Asks the model for a JSON verdict and turns it into a validated
//! [`NarrativeResult`]. Every parsing heuristic lives here; callers only see
//! a typed result or a [`NarrativeError`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use titlebattle_domain::{NarrativeResult, Side, FALLBACK_KEYWORD};

use crate::infrastructure::ports::{
    ChatMessage, LlmPort, LlmRequest, NarrativeCombatant, NarrativeError, NarrativeGeneratorPort,
    NarrativeRequest,
};
use crate::prompt_templates::{self, keys};

const NARRATIVE_TEMPERATURE: f32 = 0.9;
const NARRATIVE_MAX_TOKENS: u32 = 800;

pub struct LlmNarrativeGenerator {
    llm: Arc<dyn LlmPort>,
}

impl LlmNarrativeGenerator {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    fn build_request(request: &NarrativeRequest) -> LlmRequest {
        let system = prompt_templates::resolve(keys::BATTLE_SYSTEM_PROMPT).unwrap_or_default();
        let template = prompt_templates::resolve(keys::BATTLE_USER_PROMPT).unwrap_or_default();
        let challenger = describe(&request.challenger);
        let opponent = describe(&request.opponent);
        let prompt = prompt_templates::render(
            &template,
            &[("challenger", &challenger), ("opponent", &opponent)],
        );

        LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_system_prompt(system)
            .with_temperature(NARRATIVE_TEMPERATURE)
            .with_max_tokens(Some(NARRATIVE_MAX_TOKENS))
    }
}

#[async_trait]
impl NarrativeGeneratorPort for LlmNarrativeGenerator {
    async fn generate_battle(
        &self,
        request: NarrativeRequest,
    ) -> Result<NarrativeResult, NarrativeError> {
        let response = self.llm.generate(Self::build_request(&request)).await?;
        if response.is_truncated() {
            return Err(NarrativeError::Malformed(format!(
                "response cut off at the {NARRATIVE_MAX_TOKENS} token limit"
            )));
        }
        let narrative = parse_narrative(&response.content)?;
        tracing::debug!(
            winner = ?narrative.winner,
            lines = narrative.log.len(),
            keyword = %narrative.keyword,
            "Battle narrative generated"
        );
        Ok(narrative)
    }
}

/// "Name (rating 1032, title: Ember Fist)"
fn describe(combatant: &NarrativeCombatant) -> String {
    match &combatant.title {
        Some(title) => format!(
            "{} (rating {}, title: {})",
            combatant.name, combatant.rating, title
        ),
        None => format!("{} (rating {})", combatant.name, combatant.rating),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNarrative {
    winner: serde_json::Value,
    #[serde(default)]
    log: serde_json::Value,
    #[serde(default)]
    title_prompt: Option<String>,
}

/// Parse raw model output into a validated narrative.
pub(crate) fn parse_narrative(text: &str) -> Result<NarrativeResult, NarrativeError> {
    let json = extract_json(text)
        .ok_or_else(|| NarrativeError::Malformed("no JSON object in response".to_string()))?;
    let raw: RawNarrative =
        serde_json::from_str(json).map_err(|e| NarrativeError::Malformed(e.to_string()))?;

    let winner = raw
        .winner
        .as_str()
        .and_then(Side::from_token)
        .ok_or_else(|| NarrativeError::Malformed(format!("unknown winner token {}", raw.winner)))?;

    let log = collect_lines(&raw.log);
    if log.is_empty() {
        return Err(NarrativeError::Malformed("empty battle log".to_string()));
    }

    let keyword = raw
        .title_prompt
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| FALLBACK_KEYWORD.to_string());

    Ok(NarrativeResult {
        winner,
        log,
        keyword,
    })
}

/// Strip markdown fences and any prose around the outermost JSON object.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Accepts an array of strings or a single multi-line string; trims each
/// line and drops empty ones.
fn collect_lines(value: &serde_json::Value) -> Vec<String> {
    let lines: Vec<&str> = match value {
        serde_json::Value::Array(items) => items.iter().filter_map(|v| v.as_str()).collect(),
        serde_json::Value::String(text) => text.lines().collect(),
        _ => Vec::new(),
    };
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{FinishReason, LlmError, LlmResponse, MockLlmPort};

    fn request() -> NarrativeRequest {
        NarrativeRequest {
            challenger: NarrativeCombatant {
                name: "Aria".to_string(),
                rating: 1000,
                title: Some("Ember Fist".to_string()),
            },
            opponent: NarrativeCombatant {
                name: "Kael".to_string(),
                rating: 1100,
                title: None,
            },
        }
    }

    #[test]
    fn parses_fenced_json() {
        let text = "```json\n{\"winner\": \"B\", \"log\": [\"Kael charges\", \"  \", \" Aria falls \"], \"titlePrompt\": \"thunder\"}\n```";
        let narrative = parse_narrative(text).unwrap();
        assert_eq!(narrative.winner, Side::Opponent);
        assert_eq!(narrative.log, vec!["Kael charges", "Aria falls"]);
        assert_eq!(narrative.keyword, "thunder");
    }

    #[test]
    fn missing_keyword_uses_generic_one() {
        let narrative = parse_narrative(r#"{"winner": "A", "log": ["Aria wins"]}"#).unwrap();
        assert_eq!(narrative.winner, Side::Challenger);
        assert_eq!(narrative.keyword, FALLBACK_KEYWORD);
    }

    #[test]
    fn string_log_is_split_into_lines() {
        let narrative =
            parse_narrative(r#"{"winner": "a", "log": "first\n\nsecond", "titlePrompt": "x"}"#)
                .unwrap();
        assert_eq!(narrative.log, vec!["first", "second"]);
    }

    #[test]
    fn rejects_unknown_winner() {
        let err = parse_narrative(r#"{"winner": "C", "log": ["line"]}"#).unwrap_err();
        assert!(matches!(err, NarrativeError::Malformed(_)));
    }

    #[test]
    fn rejects_empty_log() {
        let err = parse_narrative(r#"{"winner": "A", "log": ["", "   "]}"#).unwrap_err();
        assert!(matches!(err, NarrativeError::Malformed(_)));
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_narrative("The battle was epic!").is_err());
    }

    #[test]
    fn describe_includes_title_when_equipped() {
        let req = request();
        assert_eq!(
            describe(&req.challenger),
            "Aria (rating 1000, title: Ember Fist)"
        );
        assert_eq!(describe(&req.opponent), "Kael (rating 1100)");
    }

    #[tokio::test]
    async fn prompt_names_both_players() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| {
                let prompt = &req.messages[0].content;
                prompt.contains("[Player A]: Aria") && prompt.contains("[Player B]: Kael")
            })
            .times(1)
            .returning(|_| {
                Ok(LlmResponse::text(
                    r#"{"winner": "A", "log": ["Aria strikes"], "titlePrompt": "flame"}"#,
                ))
            });

        let generator = LlmNarrativeGenerator::new(Arc::new(llm));
        let narrative = generator.generate_battle(request()).await.unwrap();

        assert_eq!(narrative.winner, Side::Challenger);
        assert_eq!(narrative.keyword, "flame");
    }

    #[tokio::test]
    async fn llm_failure_is_reported() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::RequestFailed("connection refused".into())));

        let generator = LlmNarrativeGenerator::new(Arc::new(llm));
        let err = generator.generate_battle(request()).await.unwrap_err();

        assert!(matches!(err, NarrativeError::Llm(_)));
    }

    #[tokio::test]
    async fn truncated_response_is_rejected() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().returning(|_| {
            Ok(LlmResponse {
                content: r#"{"winner": "A", "log": ["Aria strikes"]}"#.to_string(),
                finish_reason: FinishReason::Length,
            })
        });

        let generator = LlmNarrativeGenerator::new(Arc::new(llm));
        let err = generator.generate_battle(request()).await.unwrap_err();

        assert!(matches!(err, NarrativeError::Malformed(ref msg) if msg.contains("token limit")));
    }
}
