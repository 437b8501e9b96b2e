//! Human-readable console formatting of engine events, used by the server
//! binary's stdout logging and by anything piping hand history to a terminal.

use holdem_shared::{
    ActionEvent, ActionKind, BlindKind, Card, GameAction, PlayerId, PlayerPublic, TableStatePublic,
};
use owo_colors::OwoColorize;

fn format_card(c: Card, color: bool) -> String {
    let text = c.to_string();
    if color && c.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

fn format_cards(cards: &[Card], color: bool) -> String {
    cards
        .iter()
        .map(|&c| format_card(c, color))
        .collect::<Vec<_>>()
        .join(", ")
}

fn player_name(players: &[PlayerPublic], id: &PlayerId) -> String {
    players
        .iter()
        .find(|p| &p.id == id)
        .map(|p| p.username.clone())
        .unwrap_or_else(|| id.to_string())
}

fn format_log_entry(entry: &ActionEvent, players: &[PlayerPublic], color: bool) -> String {
    match entry {
        ActionEvent::PlayerAction { player_id, action } => {
            let who = player_name(players, player_id);
            match action {
                ActionKind::Fold => format!(
                    "{} {} (fold)",
                    if color { "↩".red().to_string() } else { "FOLD".into() },
                    who
                ),
                ActionKind::Check => format!(
                    "{} {} (check)",
                    if color { "✓".green().to_string() } else { "CHECK".into() },
                    who
                ),
                ActionKind::Call(n) => format!(
                    "{} {} {} (call)",
                    if color { "↪".cyan().to_string() } else { "CALL".into() },
                    who,
                    n
                ),
                ActionKind::Raise { to, by } => format!(
                    "{} {} to {} (+{}) (raise)",
                    if color { "▲".magenta().to_string() } else { "RAISE".into() },
                    who,
                    to,
                    by
                ),
                ActionKind::PostBlind { kind, amount } => {
                    let k = match kind {
                        BlindKind::SmallBlind => "SB",
                        BlindKind::BigBlind => "BB",
                    };
                    format!("{} {} {}", k, who, amount)
                }
            }
        }
        ActionEvent::GameAction(GameAction::PhaseChanged(phase)) => {
            let sname = format!("== {:?} ==", phase);
            if color { sname.bold().purple().to_string() } else { sname }
        }
        ActionEvent::GameAction(GameAction::DealtCommunity { cards }) => {
            format!("Board +[{}]", format_cards(cards, color))
        }
        ActionEvent::GameAction(GameAction::DealtHole { player_id }) => {
            format!("Dealt hole to {}", player_name(players, player_id))
        }
        ActionEvent::GameAction(GameAction::Showdown { .. }) => "Showdown".into(),
        ActionEvent::GameAction(GameAction::PotAwarded { winners, amount }) => {
            let names = winners
                .iter()
                .map(|id| player_name(players, id))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Pot awarded {} -> [{}]", amount, names)
        }
    }
}

pub fn format_event_human(entry: &ActionEvent, players: &[PlayerPublic], color: bool) -> String {
    format_log_entry(entry, players, color)
}

pub fn format_table_header(state: &TableStatePublic, color: bool) -> String {
    let mut out = String::new();
    let title = if color {
        "=== New Hand ===".bold().blue().to_string()
    } else {
        "=== New Hand ===".to_string()
    };
    let blinds = if color {
        format!("{} SB {} / BB {}", "Blinds:".bold().yellow(), state.sb, state.bb)
    } else {
        format!("Blinds: SB {} / BB {}", state.sb, state.bb)
    };
    out.push_str(&format!("{}\n{}\n", title, blinds));
    out.push_str("Players:\n");
    for p in &state.players {
        let folded = if p.folded {
            if color { " [FOLDED]".red().to_string() } else { " [FOLDED]".to_string() }
        } else {
            String::new()
        };
        let is_to_act = state.to_act.as_ref() == Some(&p.id);
        let to_act_icon = if is_to_act {
            if color { " ●".green().to_string() } else { " *".to_string() }
        } else {
            String::new()
        };
        let to_act_text = if is_to_act { " (to act)" } else { "" };
        out.push_str(&format!(
            "  {} {}  chips={}{}{}{}\n",
            p.id, p.username, p.chips, folded, to_act_icon, to_act_text
        ));
    }
    out
}

pub fn format_state_human(state: &TableStatePublic, color: bool) -> String {
    let mut out = String::new();

    let phase = format!("{:?}", state.phase);
    let phase_s = if color { phase.bold().blue().to_string() } else { phase };
    let pot_s = if color {
        format!("{} {}", "Pot:".bold().yellow(), state.pot)
    } else {
        format!("Pot: {}", state.pot)
    };
    out.push_str(&format!("{}  |  {}\n", phase_s, pot_s));

    if !state.community.is_empty() {
        out.push_str(&format!("Board: [{}]\n", format_cards(&state.community, color)));
    }
    for p in &state.players {
        if !p.hole_cards.is_empty() {
            out.push_str(&format!(
                "{}'s cards: [{}]\n",
                p.username,
                format_cards(&p.hole_cards, color)
            ));
        }
    }

    out.push_str("Players:\n");
    for p in &state.players {
        let folded = if p.folded {
            if color { " [FOLDED]".red().to_string() } else { " [FOLDED]".to_string() }
        } else {
            String::new()
        };
        let is_to_act = state.to_act.as_ref() == Some(&p.id);
        let to_act_icon = if is_to_act {
            if color { " ●".green().to_string() } else { " *".to_string() }
        } else {
            String::new()
        };
        let to_act_text = if is_to_act { " (to act)" } else { "" };
        out.push_str(&format!(
            "  {} {}  chips={}{}{}{}\n",
            p.id, p.username, p.chips, folded, to_act_icon, to_act_text
        ));
    }

    out
}
