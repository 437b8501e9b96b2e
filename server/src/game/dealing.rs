//! Hand start: commit-reveal setup, shuffle, dealing, and blinds.

use holdem_shared::{ActionEvent, BlindKind, Event, GameAction, Phase};

use crate::game::Game;
use crate::rng::{self, ShuffleRng};

impl Game {
    /// Start a new hand: generate fresh commit-reveal provenance, shuffle,
    /// deal hole cards, and post blinds. Called from `join`'s auto-start and
    /// from the showdown-to-waiting transition; both call sites are bounded
    /// (hand start never itself solicits a synchronous action).
    pub(crate) fn start_hand(&mut self) -> Vec<Event> {
        self.phase = Phase::Preflop;
        self.pot = 0;
        self.community.clear();
        self.current_bet = 0;
        self.actions_this_round = 0;
        self.winner_ids.clear();

        let hand_id = uuid::Uuid::new_v4().to_string();
        let secret = rng::generate_secret();
        let commitment = rng::compute_commitment(&secret, &hand_id);

        let mut deck = holdem_shared::canonical_deck();
        let mut shuffle_rng = ShuffleRng::from_secret_and_hand(&secret, &hand_id);
        rng::shuffle(&mut shuffle_rng, &mut deck);
        self.deck = deck.into();

        for p in &mut self.players {
            p.folded = false;
            p.current_bet = 0;
            p.hole_cards.clear();
            p.all_in = p.chips == 0;
        }

        // Two dealing passes, left of dealer first, one card per pass.
        let n = self.players.len();
        for pass in 0..2 {
            for i in 0..n {
                let seat = (self.dealer_index + 1 + i) % n;
                if let Some(card) = self.deck.pop_back() {
                    self.players[seat].hole_cards.push(card);
                }
            }
            let _ = pass;
        }
        for seat in 0..n {
            self.log(ActionEvent::game(GameAction::DealtHole {
                player_id: self.players[seat].id.clone(),
            }));
        }

        let sb_seat = (self.dealer_index + 1) % n;
        let bb_seat = (self.dealer_index + 2) % n;
        self.post_blind(sb_seat, BlindKind::SmallBlind, self.small_blind());
        self.post_blind(bb_seat, BlindKind::BigBlind, self.min_bet);
        self.current_bet = self.min_bet;

        self.current_turn_index = self.first_actionable_seat_from((self.dealer_index + 3) % n);

        self.hand_id = Some(hand_id.clone());
        self.server_secret = Some(secret);
        self.commitment = Some(commitment.clone());

        let mut events = vec![Event::HandStarted {
            hand_id,
            dealer_seat: self.dealer_index,
            commitment,
        }];

        // Everyone already all-in (or only one seat with chips): no betting
        // is possible, run the board out straight to showdown.
        if self.actionable_seats().len() <= 1 {
            events.extend(self.advance_until_actionable());
        }

        events
    }

    fn post_blind(&mut self, seat: usize, kind: BlindKind, amount: u32) {
        let paid = amount.min(self.players[seat].chips);
        self.players[seat].chips -= paid;
        self.players[seat].current_bet += paid;
        self.pot += paid;
        if self.players[seat].chips == 0 {
            self.players[seat].all_in = true;
        }
        self.log(ActionEvent::player(
            self.players[seat].id.clone(),
            holdem_shared::ActionKind::PostBlind { kind, amount: paid },
        ));
    }

    fn first_actionable_seat_from(&self, start: usize) -> Option<usize> {
        let n = self.players.len();
        if n == 0 {
            return None;
        }
        for i in 0..n {
            let idx = (start + i) % n;
            if !self.players[idx].folded && !self.players[idx].all_in {
                return Some(idx);
            }
        }
        None
    }
}
