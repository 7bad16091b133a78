//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    narrative_generator::LlmNarrativeGenerator,
    ports::{
        ClockPort, LlmPort, NarrativeGeneratorPort, ProfileRepo, RandomPort,
        TitleTextGeneratorPort,
    },
    title_generator::LlmTitleGenerator,
};
use crate::use_cases::{self, GameRules};

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub rules: GameRules,
}

/// Container for all use cases.
pub struct UseCases {
    pub battle: use_cases::BattleUseCases,
    pub profiles: use_cases::ProfileUseCases,
}

/// Ports the use cases are built from.
pub struct AppPorts {
    pub narrator: Arc<dyn NarrativeGeneratorPort>,
    pub title_text: Arc<dyn TitleTextGeneratorPort>,
    pub profiles: Arc<dyn ProfileRepo>,
    pub clock: Arc<dyn ClockPort>,
    pub random: Arc<dyn RandomPort>,
}

impl App {
    /// Create a new App backed by an LLM and a profile store.
    pub fn new(llm: Arc<dyn LlmPort>, profiles: Arc<dyn ProfileRepo>, rules: GameRules) -> Self {
        let ports = AppPorts {
            narrator: Arc::new(LlmNarrativeGenerator::new(llm.clone())),
            title_text: Arc::new(LlmTitleGenerator::new(llm)),
            profiles,
            clock: Arc::new(SystemClock::new()),
            random: Arc::new(SystemRandom::new()),
        };
        Self::from_ports(ports, rules)
    }

    /// Wire every use case from explicit ports.
    pub fn from_ports(ports: AppPorts, rules: GameRules) -> Self {
        let run_battle = Arc::new(use_cases::RunBattle::new(
            ports.narrator,
            ports.title_text,
            ports.random.clone(),
            ports.clock.clone(),
            rules.k_factor,
        ));
        let ranked_battle = Arc::new(use_cases::RunRankedBattle::new(
            ports.profiles.clone(),
            run_battle.clone(),
            ports.clock.clone(),
            rules,
        ));

        let profile_ops = Arc::new(use_cases::ProfileOps::new(
            ports.profiles.clone(),
            ports.clock,
            ports.random,
            rules,
        ));
        let title_actions = Arc::new(use_cases::TitleActions::new(ports.profiles));

        Self {
            use_cases: UseCases {
                battle: use_cases::BattleUseCases::new(run_battle, ranked_battle),
                profiles: use_cases::ProfileUseCases::new(profile_ops, title_actions),
            },
            rules,
        }
    }
}
