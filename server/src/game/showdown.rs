//! Showdown resolution: hand evaluation, tie-break, pot award, and reveal.

use holdem_shared::{ActionEvent, Event, GameAction, HandResult, Phase};

use crate::game::Game;
use crate::poker::{evaluate_best_hand, pick_best_five};

impl Game {
    /// Resolve the hand: evaluate all live hands (or short-circuit to the
    /// lone survivor of a fold-out), award the pot to a single winner, reveal
    /// the commit-reveal secret, and roll into the next hand if enough
    /// players remain.
    pub(crate) fn finish_showdown(&mut self) -> Vec<Event> {
        self.phase = Phase::Showdown;
        let active = self.active_seats();

        let (results, winner_seat, winning_hand) = if active.len() == 1 {
            (Vec::new(), active[0], "opponent folded".to_string())
        } else {
            let mut results: Vec<HandResult> = active
                .iter()
                .map(|&seat| {
                    let hole: [holdem_shared::Card; 2] = [
                        self.players[seat].hole_cards[0],
                        self.players[seat].hole_cards[1],
                    ];
                    let rank = evaluate_best_hand(hole, &self.community);
                    let best_five = pick_best_five(hole, &self.community);
                    HandResult {
                        player_id: self.players[seat].id.clone(),
                        category_label: rank.category.label().to_string(),
                        rank_value: rank.rank_value(),
                        rank,
                        best_five,
                    }
                })
                .collect();
            results.sort_by(|a, b| b.rank.cmp(&a.rank));
            let best_rank = results[0].rank.clone();

            // Deterministic tie-break: earliest seat clockwise from dealer+1
            // among the tied top hands, rather than splitting the pot.
            let n = self.players.len();
            let winner_seat = active
                .iter()
                .copied()
                .filter(|&seat| {
                    results
                        .iter()
                        .find(|r| r.player_id == self.players[seat].id)
                        .map(|r| r.rank == best_rank)
                        .unwrap_or(false)
                })
                .min_by_key(|&seat| (seat + n - (self.dealer_index + 1) % n) % n)
                .expect("at least one winner after evaluation");

            let label = results
                .iter()
                .find(|r| r.player_id == self.players[winner_seat].id)
                .map(|r| r.category_label.clone())
                .unwrap_or_default();
            (results, winner_seat, label)
        };

        let amount = self.pot;
        self.players[winner_seat].chips += amount;
        self.winner_ids = vec![self.players[winner_seat].id.clone()];
        self.pot = 0;

        self.log(ActionEvent::game(GameAction::Showdown {
            hand_results: results.clone(),
        }));
        self.log(ActionEvent::game(GameAction::PotAwarded {
            winners: self.winner_ids.clone(),
            amount,
        }));

        let hand_id = self.hand_id.clone().unwrap_or_default();
        let server_secret = self.server_secret.clone().unwrap_or_default();
        let commitment = self.commitment.clone().unwrap_or_default();

        let mut events = vec![Event::Showdown {
            results,
            winners: self.winner_ids.clone(),
            pot: amount,
            winning_hand,
            hand_id,
            server_secret,
            commitment,
        }];

        self.phase = Phase::Waiting;
        self.hand_id = None;
        self.server_secret = None;
        self.commitment = None;
        if !self.players.is_empty() {
            self.dealer_index = (self.dealer_index + 1) % self.players.len();
        }

        if self.eligible_player_count() >= 2 {
            events.extend(self.start_hand());
        }

        events
    }
}
