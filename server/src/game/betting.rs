//! Legality checks and chip movement for player-initiated actions.

use holdem_shared::{ActionEvent, ActionKind, Event, Phase, PlayerId};

use crate::game::Game;

impl Game {
    /// Shared turn-validation wrapper for fold/check/call/raise. `apply` must
    /// be a seat-local mutator returning whether the action was legal; when
    /// it returns `false` no state has changed and no event is emitted.
    pub(crate) fn apply_betting_action(
        &mut self,
        player_id: PlayerId,
        apply: impl FnOnce(&mut Game, usize) -> bool,
    ) -> Vec<Event> {
        if !matches!(
            self.phase,
            Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River
        ) {
            return Vec::new();
        }
        let Some(seat) = self.seat_of(&player_id) else {
            return Vec::new();
        };
        if self.current_turn_index != Some(seat) {
            return Vec::new();
        }
        if self.players[seat].folded || self.players[seat].all_in {
            return Vec::new();
        }

        if !apply(self, seat) {
            return Vec::new();
        }

        self.actions_this_round += 1;
        let mut events = vec![player_action_event(self.recent_actions.last())];
        events.extend(self.post_action_update(seat));
        events
    }

    /// `true` iff the player owes nothing this round (check is legal).
    fn call_need(&self, seat: usize) -> u32 {
        self.current_bet
            .saturating_sub(self.players[seat].current_bet)
    }

    pub(crate) fn do_fold(&mut self, seat: usize) {
        self.players[seat].folded = true;
        self.log(ActionEvent::player(
            self.players[seat].id.clone(),
            ActionKind::Fold,
        ));
    }

    pub(crate) fn do_check(&mut self, seat: usize) -> bool {
        if self.call_need(seat) != 0 {
            return false;
        }
        self.log(ActionEvent::player(
            self.players[seat].id.clone(),
            ActionKind::Check,
        ));
        true
    }

    pub(crate) fn do_call(&mut self, seat: usize) {
        let need = self.call_need(seat).min(self.players[seat].chips);
        self.players[seat].chips -= need;
        self.players[seat].current_bet += need;
        self.pot += need;
        if self.players[seat].chips == 0 {
            self.players[seat].all_in = true;
        }
        self.log(ActionEvent::player(
            self.players[seat].id.clone(),
            ActionKind::Call(need),
        ));
    }

    /// `amount` is the player's desired *total* commitment this round. A
    /// raise must reach `current_bet + min_bet` unless the player does not
    /// have enough chips to reach it, in which case going all-in with the
    /// entire remaining stack is still accepted as a (possibly short) raise.
    pub(crate) fn do_raise(&mut self, seat: usize, amount: u32) -> bool {
        if amount <= self.current_bet {
            return false;
        }
        let available_total = self.players[seat].chips + self.players[seat].current_bet;
        let min_required_to = self.current_bet + self.min_bet;
        if amount < min_required_to && amount < available_total {
            return false;
        }

        let target_to = amount.min(available_total);
        let add = target_to - self.players[seat].current_bet;
        let by = target_to.saturating_sub(self.current_bet);

        self.players[seat].chips -= add;
        self.players[seat].current_bet = target_to;
        self.pot += add;
        self.current_bet = target_to;
        if self.players[seat].chips == 0 {
            self.players[seat].all_in = true;
        }

        self.log(ActionEvent::player(
            self.players[seat].id.clone(),
            ActionKind::Raise { to: target_to, by },
        ));
        true
    }
}

/// Translate the internal history record just appended by a betting action
/// into the stable, externally-observed `player_action` event.
fn player_action_event(last: Option<&ActionEvent>) -> Event {
    let ActionEvent::PlayerAction { player_id, action } = last.expect("betting action always logs")
    else {
        unreachable!("betting actions only ever log PlayerAction entries")
    };
    let (name, amount) = match action {
        ActionKind::Fold => ("fold", None),
        ActionKind::Check => ("check", None),
        ActionKind::Call(n) => ("call", Some(*n)),
        ActionKind::Raise { to, .. } => ("raise", Some(*to)),
        ActionKind::PostBlind { amount, .. } => ("post_blind", Some(*amount)),
    };
    Event::PlayerAction {
        player_id: player_id.clone(),
        action: name.to_string(),
        amount,
    }
}
