#![allow(clippy::module_inception)]
//! The hand FSM, split across files by concern: `engine` holds state and the
//! `apply` entry point, `dealing` starts hands, `betting` validates and
//! applies player actions, `flow` resolves round completion and phase
//! advancement, `showdown` resolves the hand, `utils` has small shared
//! helpers.
//!
//! Module ordering matters: declare utility/dealing/showdown before engine so
//! engine can reference sibling modules via `super::...`.

mod betting;
mod dealing;
mod engine;
mod flow;
mod showdown;
mod utils;

pub use engine::{Game, Player};

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_shared::{Action, Event, Phase, PlayerId};

    fn join(game: &mut Game, id: &str, buyin: u32) -> Vec<Event> {
        game.apply(Action::Join {
            player_id: PlayerId::from(id),
            username: id.to_string(),
            buyin,
        })
    }

    #[test]
    fn two_joins_auto_starts_a_hand() {
        let mut game = Game::new("t1".into(), 20);
        join(&mut game, "alice", 1000);
        let events = join(&mut game, "bob", 1000);

        assert!(events.iter().any(|e| matches!(e, Event::HandStarted { .. })));
        assert_eq!(game.phase, Phase::Preflop);
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.pot, 30); // sb(10) + bb(20)
    }

    #[test]
    fn rejoining_seated_player_is_a_no_op() {
        let mut game = Game::new("t1".into(), 20);
        join(&mut game, "alice", 1000);
        join(&mut game, "bob", 1000);
        let players_before = game.players.len();
        let pot_before = game.pot;

        let events = join(&mut game, "alice", 1000);
        assert!(events.is_empty());
        assert_eq!(game.players.len(), players_before);
        assert_eq!(game.pot, pot_before);
    }

    #[test]
    fn illegal_check_is_ignored() {
        let mut game = Game::new("t1".into(), 20);
        join(&mut game, "alice", 1000);
        join(&mut game, "bob", 1000);

        // Whoever is first to act preflop still owes to match the big blind;
        // checking is illegal and must be a complete no-op.
        let to_act = game.current_turn_index.unwrap();
        let to_act_id = game.players[to_act].id.clone();
        let before = game.public();

        let events = game.apply(Action::Check {
            player_id: to_act_id,
        });

        assert!(events.is_empty());
        let after = game.public();
        assert_eq!(before.to_act, after.to_act);
        assert_eq!(before.pot, after.pot);
    }

    #[test]
    fn heads_up_fold_awards_pot_to_remaining_player() {
        let mut game = Game::new("t1".into(), 20);
        join(&mut game, "alice", 1000);
        join(&mut game, "bob", 1000);

        let total_before: u32 = game.players.iter().map(|p| p.chips).sum::<u32>() + game.pot;

        let to_act = game.current_turn_index.unwrap();
        let to_act_id = game.players[to_act].id.clone();
        let events = game.apply(Action::Fold {
            player_id: to_act_id,
        });

        assert!(events.iter().any(|e| matches!(e, Event::Showdown { .. })));
        let total_after: u32 = game.players.iter().map(|p| p.chips).sum::<u32>() + game.pot;
        assert_eq!(total_before, total_after);
    }
}
