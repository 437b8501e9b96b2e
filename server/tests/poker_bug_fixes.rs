//! Regression tests for betting-path invariants: chip conservation, illegal
//! actions being no-ops, and all-in players being excluded from acting.

use holdem_server::game::Game;
use holdem_shared::{Action, Event, PlayerId};

fn total_chips(game: &Game) -> u32 {
    game.players.iter().map(|p| p.chips).sum::<u32>() + game.pot
}

fn join(game: &mut Game, id: &str, buyin: u32) -> Vec<Event> {
    game.apply(Action::Join {
        player_id: PlayerId::from(id),
        username: id.to_string(),
        buyin,
    })
}

#[test]
fn chip_total_is_conserved_across_a_full_betting_round() {
    let mut game = Game::new("t1".into(), 20);
    join(&mut game, "alice", 1000);
    join(&mut game, "bob", 1000);
    join(&mut game, "carol", 1000);

    let initial_total = total_chips(&game);

    for _ in 0..6 {
        let Some(seat) = game.current_turn_index else {
            break;
        };
        let actor = game.players[seat].id.clone();
        game.apply(Action::Call { player_id: actor });
    }

    assert_eq!(total_chips(&game), initial_total);
}

#[test]
fn all_in_player_cannot_act_again() {
    let mut game = Game::new("t1".into(), 20);
    join(&mut game, "alice", 1000);
    join(&mut game, "bob", 1000);
    join(&mut game, "carol", 1000);

    // Force the seat to be all-in and (artificially) back up for the turn,
    // isolating the all-in guard from the "is it even your turn" guard.
    let seat = 0;
    game.players[seat].all_in = true;
    game.players[seat].chips = 0;
    game.current_turn_index = Some(seat);
    let actor = game.players[seat].id.clone();

    let before = game.public();
    let events = game.apply(Action::Call { player_id: actor });

    assert!(events.is_empty(), "an all-in player's action must be a no-op");
    assert_eq!(before.pot, game.public().pot);
}

#[test]
fn raise_below_minimum_is_ignored() {
    let mut game = Game::new("t1".into(), 20);
    join(&mut game, "alice", 1000);
    join(&mut game, "bob", 1000);

    let to_act = game.current_turn_index.unwrap();
    let to_act_id = game.players[to_act].id.clone();
    let current_bet_before = game.current_bet;

    let events = game.apply(Action::Raise {
        player_id: to_act_id,
        amount: current_bet_before + 1, // smaller than a full min-bet raise
    });

    assert!(events.is_empty());
    assert_eq!(game.current_bet, current_bet_before);
}
