//! Text for structured results.
//!
//! Each function returns the lines to print; nothing here touches I/O.

use game_core::{
    ClassOutcome, Combatant, DuelEvent, DuelOutcome, ExploreOutcome, PlayerStats,
    PracticeReport, Side, TurnReport,
};

pub fn stats(stats: &PlayerStats) -> Vec<String> {
    let list = |items: &[String]| {
        if items.is_empty() {
            "None".to_string()
        } else {
            items.join(", ")
        }
    };
    let effects: Vec<String> = stats
        .status_effects
        .iter()
        .map(|e| e.label().to_string())
        .collect();

    vec![
        "=== Character Stats ===".to_string(),
        format!("Name: {}", stats.name),
        format!("House: {}", stats.house),
        format!("Health: {}/{}", stats.health, stats.max_health),
        format!("Mana: {}/{}", stats.mana, stats.max_mana),
        format!("Knowledge: {}", stats.knowledge),
        format!("House Points: {}", stats.house_points),
        format!("Known Spells: {}", list(&stats.known_spells)),
        format!("Inventory: {}", list(&stats.inventory)),
        format!("Status Effects: {}", list(&effects)),
    ]
}

pub fn class(outcome: &ClassOutcome) -> Vec<String> {
    match outcome {
        ClassOutcome::Learned {
            spell,
            knowledge,
            house_points,
        } => vec![
            format!("You learned the spell: {spell}!"),
            format!("+{knowledge} knowledge, {house_points:+} house points"),
        ],
        ClassOutcome::AllSpellsKnown => vec!["You already know all available spells!".to_string()],
    }
}

pub fn explore(outcome: &ExploreOutcome) -> Vec<String> {
    vec![
        format!("{} {:+} points", outcome.event.description, outcome.event.points),
        format!("You feel refreshed! (+{} mana)", outcome.mana_restored),
    ]
}

pub fn practice(report: &PracticeReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.outcome.is_resolved() {
        lines.push(format!("You cast {}!", report.spell));
        if let Some(effect) = report.outcome.message() {
            lines.push(format!("Effect: {effect}"));
        }
        if report.healed > 0 {
            lines.push(format!("You recover {} health.", report.healed));
        }
    } else if let Some(message) = report.outcome.message() {
        lines.push(message.to_string());
    }
    lines
}

/// Health bars shown before each player turn.
pub fn duel_status(player: &Combatant, opponent: &Combatant) -> Vec<String> {
    let bar = |c: &Combatant| {
        let effects: Vec<&str> = c.status_effects().labels().collect();
        let mut line = format!(
            "HP {}/{}  Mana {}/{}",
            c.health(),
            c.max_health(),
            c.mana(),
            c.max_mana()
        );
        if !effects.is_empty() {
            line.push_str(&format!("  [{}]", effects.join(", ")));
        }
        line
    };

    vec![
        format!("You: {}", bar(player)),
        format!("{}: {}", opponent.name(), bar(opponent)),
    ]
}

pub fn turn(report: &TurnReport, opponent: &str) -> Vec<String> {
    report
        .events
        .iter()
        .map(|event| event_line(event, opponent))
        .collect()
}

fn event_line(event: &DuelEvent, opponent: &str) -> String {
    match event {
        DuelEvent::SpellCast { caster, spell } => match caster {
            Side::Player => format!("You cast {spell}!"),
            Side::Opponent => format!("{opponent} casts {spell}!"),
        },
        DuelEvent::CastFailed {
            caster,
            spell,
            reason,
        } => match caster {
            Side::Player => format!("You try to cast {spell}... {reason}"),
            Side::Opponent => format!("{opponent} tries to cast {spell}... {reason}"),
        },
        DuelEvent::DamageDealt { target, raw, dealt } => {
            let mut line = match target {
                Side::Opponent => format!("Dealt {dealt} damage!"),
                Side::Player => format!("You take {dealt} damage!"),
            };
            if dealt < raw {
                line.push_str(&format!(" (shield absorbed {})", raw - dealt));
            }
            line
        }
        DuelEvent::EffectApplied { caster, effect } => match caster {
            Side::Player => format!("Applied effect: {effect}"),
            Side::Opponent => format!("Effect applied: {effect}"),
        },
        DuelEvent::Healed { target, amount } => match target {
            Side::Player => format!("You recover {amount} health."),
            Side::Opponent => format!("{opponent} recovers {amount} health."),
        },
        DuelEvent::OpponentSkipped => format!("{opponent} is too exhausted to cast a spell!"),
        DuelEvent::Stalemate => "Neither duelist can do any more harm. The duel is called.".to_string(),
        DuelEvent::Forfeit => "You lower your wand and yield.".to_string(),
        DuelEvent::Victory { house_points } => {
            format!("Victory! You defeated {opponent}! ({house_points:+} house points)")
        }
        DuelEvent::Defeat { house_points } => {
            format!("Defeat! You lost the duel! ({house_points:+} house points)")
        }
        DuelEvent::Recovered { health, mana } => {
            format!("You catch your breath. (+{health} health, +{mana} mana)")
        }
    }
}

pub fn duel_summary(outcome: &DuelOutcome) -> String {
    let result = if outcome.player_won() { "won" } else { "lost" };
    format!(
        "You {result} against {} in {} rounds.",
        outcome.opponent, outcome.rounds
    )
}
