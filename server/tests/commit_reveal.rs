//! The commitment published at hand start must match HMAC(server_secret,
//! hand_id) once the secret is revealed at showdown — the fairness guarantee
//! that the deck order was fixed before any action was taken.

use holdem_server::game::Game;
use holdem_server::rng::compute_commitment;
use holdem_shared::{Action, Event, PlayerId};

fn check_or_call(game: &mut Game, seat: usize) -> Action {
    let actor = game.players[seat].id.clone();
    let call_need = game
        .current_bet
        .saturating_sub(game.players[seat].current_bet);
    if call_need == 0 {
        Action::Check { player_id: actor }
    } else {
        Action::Call { player_id: actor }
    }
}

#[test]
fn revealed_secret_matches_the_commitment_from_hand_start() {
    let mut game = Game::new("t1".into(), 20);

    let mut events = game.apply(Action::Join {
        player_id: PlayerId::from("alice"),
        username: "alice".into(),
        buyin: 1000,
    });
    events.extend(game.apply(Action::Join {
        player_id: PlayerId::from("bob"),
        username: "bob".into(),
        buyin: 1000,
    }));

    let (hand_id, commitment_at_start) = events
        .iter()
        .find_map(|e| match e {
            Event::HandStarted {
                hand_id,
                commitment,
                ..
            } => Some((hand_id.clone(), commitment.clone())),
            _ => None,
        })
        .expect("joining two players auto-starts a hand, publishing the commitment up front");

    let mut showdown = None;
    for _ in 0..30 {
        let Some(seat) = game.current_turn_index else {
            break;
        };
        let action = check_or_call(&mut game, seat);
        let new_events = game.apply(action);
        if let Some(ev) = new_events
            .into_iter()
            .find(|e| matches!(e, Event::Showdown { hand_id: hid, .. } if hid == &hand_id))
        {
            showdown = Some(ev);
            break;
        }
    }

    let Event::Showdown {
        hand_id: revealed_hand_id,
        server_secret,
        commitment,
        ..
    } = showdown.expect("checking/calling down should reach showdown")
    else {
        unreachable!()
    };

    assert_eq!(revealed_hand_id, hand_id);
    assert_eq!(commitment, commitment_at_start);
    assert_eq!(compute_commitment(&server_secret, &hand_id), commitment);
}
