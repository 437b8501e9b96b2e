//! Turn rotation, betting-round completion, and phase advancement.

use holdem_shared::{ActionEvent, GameAction, Phase};

use crate::game::Game;
use crate::poker::card_str;

impl Game {
    /// Seats still live in the hand (not folded), independent of chip count.
    pub(crate) fn active_seats(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&i| !self.players[i].folded)
            .collect()
    }

    /// Seats that can still take a betting action: live and with chips.
    pub(crate) fn actionable_seats(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&i| !self.players[i].folded && !self.players[i].all_in)
            .collect()
    }

    fn round_complete(&self) -> bool {
        let active = self.active_seats();
        let matched_or_all_in = active.iter().all(|&i| {
            self.players[i].all_in || self.players[i].current_bet == self.current_bet
        });
        matched_or_all_in && self.actions_this_round >= active.len() as u32
    }

    /// After an action changes state, resolve fold-outs, round completion,
    /// and phase advancement, producing the events those transitions emit.
    pub(crate) fn post_action_update(&mut self, _actor: usize) -> Vec<holdem_shared::Event> {
        let mut events = Vec::new();

        if self.active_seats().len() <= 1 {
            events.extend(self.finish_showdown());
            return events;
        }

        if self.round_complete() {
            events.extend(self.advance_until_actionable());
        } else {
            self.current_turn_index = self.next_actionable_seat_from(self.current_turn_index);
        }

        events
    }

    fn next_actionable_seat_from(&self, from: Option<usize>) -> Option<usize> {
        let actionable = self.actionable_seats();
        if actionable.is_empty() {
            return None;
        }
        let n = self.players.len();
        let start = from.map(|s| (s + 1) % n).unwrap_or(0);
        for i in 0..n {
            let idx = (start + i) % n;
            if actionable.contains(&idx) {
                return Some(idx);
            }
        }
        None
    }

    /// Reset the street and advance phases, dealing community cards as each
    /// phase is entered. Keeps advancing without soliciting action while at
    /// most one seat remains able to act (the classic "everyone's all-in, run
    /// it out" boundary case), stopping once betting resumes or showdown is
    /// reached.
    pub(crate) fn advance_until_actionable(&mut self) -> Vec<holdem_shared::Event> {
        let mut events = Vec::new();
        loop {
            self.actions_this_round = 0;
            for p in &mut self.players {
                p.current_bet = 0;
            }
            self.current_bet = 0;

            events.extend(self.advance_phase());
            if self.phase == Phase::Showdown {
                events.extend(self.finish_showdown());
                return events;
            }

            self.current_turn_index = self.next_actionable_seat_from(Some(self.dealer_index));
            if self.actionable_seats().len() > 1 {
                return events;
            }
            // Fewer than two seats can still act: deal straight through.
        }
    }

    fn advance_phase(&mut self) -> Vec<holdem_shared::Event> {
        let mut dealt = Vec::new();
        match self.phase {
            Phase::Preflop => {
                for _ in 0..3 {
                    if let Some(c) = self.deck.pop_back() {
                        dealt.push(c);
                    }
                }
                self.community.extend(&dealt);
                self.phase = Phase::Flop;
            }
            Phase::Flop => {
                if let Some(c) = self.deck.pop_back() {
                    dealt.push(c);
                }
                self.community.extend(&dealt);
                self.phase = Phase::Turn;
            }
            Phase::Turn => {
                if let Some(c) = self.deck.pop_back() {
                    dealt.push(c);
                }
                self.community.extend(&dealt);
                self.phase = Phase::River;
            }
            Phase::River => {
                self.phase = Phase::Showdown;
            }
            Phase::Waiting | Phase::Showdown => {}
        }

        if !dealt.is_empty() {
            self.log(ActionEvent::game(GameAction::DealtCommunity {
                cards: self.community.clone(),
            }));
            tracing::info!(
                table = %self.table_id,
                cards = %dealt.iter().map(|&c| card_str(c)).collect::<Vec<_>>().join(" "),
                phase = ?self.phase,
                "dealt community cards"
            );
        }
        self.log(ActionEvent::game(GameAction::PhaseChanged(self.phase)));

        vec![holdem_shared::Event::PhaseChange {
            phase: self.phase,
            community: self.community.clone(),
        }]
    }
}
