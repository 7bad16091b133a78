//! Domain to wire conversions.

use titlebattle_domain::{BattleOutcome, Profile, Side, Title};
use titlebattle_shared::{
    BattleResponse, ProfileDto, ProfileSummaryDto, TitleDto, WinnerDesignation,
};

pub(super) fn title_dto(title: &Title) -> TitleDto {
    let tier = title.tier();
    TitleDto {
        id: title.id().to_uuid(),
        name: title.name().as_str().to_string(),
        tier,
        tier_label: tier.label().to_string(),
        description: title.description().to_string(),
        created_at: title.created_at().timestamp_millis(),
        equipped: title.is_equipped(),
        sell_price: tier.sell_price(),
        enhance_cost: tier.enhance_cost(),
        next_tier: tier.next(),
    }
}

/// `self_side` is the side the requesting client played.
pub(super) fn battle_response(outcome: &BattleOutcome, self_side: Side) -> BattleResponse {
    let winner = if outcome.winner == self_side {
        WinnerDesignation::Me
    } else {
        WinnerDesignation::Opponent
    };
    BattleResponse {
        log: outcome.log.clone(),
        winner,
        rating_delta: outcome.rating_delta,
        new_title: outcome.new_title.as_ref().map(title_dto),
    }
}

pub(super) fn profile_dto(profile: &Profile, cooldown_remaining_secs: u64) -> ProfileDto {
    ProfileDto {
        id: profile.id().to_uuid(),
        character_name: profile.name().as_str().to_string(),
        rating: profile.rating(),
        gold: profile.gold(),
        wins: profile.wins(),
        losses: profile.losses(),
        last_battle_time: profile.last_battle_at().map(|t| t.timestamp_millis()),
        cooldown_remaining_secs,
        equipped_title_id: profile.equipped_title().map(|t| t.id().to_uuid()),
        titles: profile.titles().iter().map(title_dto).collect(),
    }
}

pub(super) fn profile_summary(profile: &Profile) -> ProfileSummaryDto {
    ProfileSummaryDto {
        id: profile.id().to_uuid(),
        character_name: profile.name().as_str().to_string(),
        rating: profile.rating(),
        wins: profile.wins(),
        losses: profile.losses(),
        equipped_title: profile
            .equipped_title()
            .map(|t| t.name().as_str().to_string()),
    }
}
