//! LLM-backed title-text generator.

use std::sync::Arc;

use async_trait::async_trait;
use titlebattle_domain::{Tier, TitleName};

use crate::infrastructure::ports::{
    ChatMessage, LlmPort, LlmRequest, TitleTextError, TitleTextGeneratorPort,
};
use crate::prompt_templates::{self, keys, tier_flavour};

const TITLE_TEMPERATURE: f32 = 1.0;
const TITLE_MAX_TOKENS: u32 = 60;

pub struct LlmTitleGenerator {
    llm: Arc<dyn LlmPort>,
}

impl LlmTitleGenerator {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    fn build_request(winner_name: &str, keyword: &str, tier: Tier) -> LlmRequest {
        let system = prompt_templates::resolve(keys::TITLE_SYSTEM_PROMPT).unwrap_or_default();
        let template = prompt_templates::resolve(keys::TITLE_USER_PROMPT).unwrap_or_default();
        let prompt = prompt_templates::render(
            &template,
            &[
                ("winner", winner_name),
                ("keyword", keyword),
                ("tier", tier.code()),
                ("common", tier_flavour(Tier::Common)),
                ("rare", tier_flavour(Tier::Rare)),
                ("hero", tier_flavour(Tier::Hero)),
                ("legend", tier_flavour(Tier::Legend)),
                ("myth", tier_flavour(Tier::Myth)),
            ],
        );

        LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_system_prompt(system)
            .with_temperature(TITLE_TEMPERATURE)
            .with_max_tokens(Some(TITLE_MAX_TOKENS))
    }
}

#[async_trait]
impl TitleTextGeneratorPort for LlmTitleGenerator {
    async fn generate_title(
        &self,
        winner_name: &str,
        keyword: &str,
        tier: Tier,
    ) -> Result<TitleName, TitleTextError> {
        let response = self
            .llm
            .generate(Self::build_request(winner_name, keyword, tier))
            .await?;
        let text = clean_title(&response.content).ok_or(TitleTextError::Empty)?;
        TitleName::new(text).map_err(|_| TitleTextError::Empty)
    }
}

/// First non-empty line with fences, quotes and markdown emphasis removed.
pub(crate) fn clean_title(raw: &str) -> Option<String> {
    const WRAPPERS: &[char] = &['"', '\'', '`', '*', '_', '#', '“', '”', '「', '」', '『', '』'];

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("```"))
        .map(|line| line.trim_matches(|c: char| WRAPPERS.contains(&c) || c.is_whitespace()))
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
