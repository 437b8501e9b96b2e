//! Table state: the seating ring, per-hand fields, and the hand's
//! commit-reveal provenance.

use holdem_shared::{Action, ActionEvent, Card, Event, Phase, PlayerId, PlayerPublic};
use std::collections::VecDeque;

pub(crate) const MAX_RECENT_ACTIONS: usize = 200;

#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub chips: u32,
    pub current_bet: u32,
    pub folded: bool,
    pub all_in: bool,
    pub hole_cards: Vec<Card>,
}

impl Player {
    fn new(id: PlayerId, username: String, chips: u32) -> Self {
        Player {
            id,
            username,
            chips,
            current_bet: 0,
            folded: false,
            all_in: false,
            hole_cards: Vec::new(),
        }
    }
}

/// A single table's complete game state, including the hand-in-progress
/// commit-reveal provenance. One `Game` is owned exclusively by one table's
/// engine task (see [`crate::table`]).
#[derive(Clone, Debug)]
pub struct Game {
    pub table_id: String,

    pub players: Vec<Player>,
    pub deck: VecDeque<Card>,
    pub community: Vec<Card>,

    pub pot: u32,
    pub phase: Phase,
    pub dealer_index: usize,
    pub current_turn_index: Option<usize>,
    pub current_bet: u32,
    pub actions_this_round: u32,

    /// Big blind; small blind is always `min_bet / 2`.
    pub min_bet: u32,

    pub hand_id: Option<String>,
    pub server_secret: Option<String>,
    pub commitment: Option<String>,

    pub recent_actions: Vec<ActionEvent>,
    pub winner_ids: Vec<PlayerId>,
}

impl Game {
    pub fn new(table_id: String, min_bet: u32) -> Self {
        Game {
            table_id,
            players: Vec::new(),
            deck: VecDeque::new(),
            community: Vec::new(),
            pot: 0,
            phase: Phase::Waiting,
            dealer_index: 0,
            current_turn_index: None,
            current_bet: 0,
            actions_this_round: 0,
            min_bet,
            hand_id: None,
            server_secret: None,
            commitment: None,
            recent_actions: Vec::new(),
            winner_ids: Vec::new(),
        }
    }

    pub fn small_blind(&self) -> u32 {
        self.min_bet / 2
    }

    pub fn seat_of(&self, player_id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == player_id)
    }

    /// Apply one client action to the table, mutating state in place and
    /// returning the ordered events produced. Illegal actions (wrong turn,
    /// malformed field, unknown phase) are silently ignored: the returned
    /// vector is empty and no state changes.
    pub fn apply(&mut self, action: Action) -> Vec<Event> {
        match action {
            Action::Join {
                player_id,
                username,
                buyin,
            } => self.apply_join(player_id, username, buyin),
            Action::Fold { player_id } => self.apply_betting_action(player_id, |g, seat| {
                g.do_fold(seat);
                true
            }),
            Action::Check { player_id } => {
                self.apply_betting_action(player_id, |g, seat| g.do_check(seat))
            }
            Action::Call { player_id } => self.apply_betting_action(player_id, |g, seat| {
                g.do_call(seat);
                true
            }),
            Action::Raise { player_id, amount } => {
                self.apply_betting_action(player_id, move |g, seat| g.do_raise(seat, amount))
            }
        }
    }

    fn apply_join(&mut self, player_id: PlayerId, username: String, buyin: u32) -> Vec<Event> {
        if self.seat_of(&player_id).is_some() {
            // Idempotent: re-joining an already-seated player is a no-op.
            return Vec::new();
        }

        let seat = self.players.len();
        self.players
            .push(Player::new(player_id.clone(), username.clone(), buyin));

        let mut events = vec![Event::PlayerJoined {
            player_id,
            username,
            seat,
        }];
        events.push(Event::StateUpdate);

        if self.phase == Phase::Waiting && self.eligible_player_count() >= 2 {
            events.extend(self.start_hand());
        }

        events
    }

    pub(crate) fn eligible_player_count(&self) -> usize {
        self.players.iter().filter(|p| p.chips > 0).count()
    }

    pub(crate) fn log(&mut self, ev: ActionEvent) {
        self.recent_actions.push(ev);
        super::utils::cap_logs(self);
    }

    pub fn public(&self) -> holdem_shared::TableStatePublic {
        let players: Vec<PlayerPublic> = self
            .players
            .iter()
            .map(|p| PlayerPublic {
                id: p.id.clone(),
                username: p.username.clone(),
                chips: p.chips,
                current_bet: p.current_bet,
                folded: p.folded,
                all_in: p.all_in,
                hole_cards: p.hole_cards.clone(),
            })
            .collect();

        holdem_shared::TableStatePublic {
            table_id: self.table_id.clone(),
            players,
            community: self.community.clone(),
            pot: self.pot,
            sb: self.small_blind(),
            bb: self.min_bet,
            dealer_seat: self.dealer_index,
            to_act: self
                .current_turn_index
                .and_then(|i| self.players.get(i))
                .map(|p| p.id.clone()),
            phase: self.phase,
            winner_ids: self.winner_ids.clone(),
            current_bet: self.current_bet,
            min_raise: self.min_bet,
        }
    }
}
