use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::TrickCard;
use crate::deck::Deck;
use crate::player::{PlayerRoster, PlayerUpdate};

/// How many consecutive landed leader tricks before leadership passes anyway.
/// House rule keeping one strong skater from leading forever.
pub const DEFAULT_LEADER_STREAK_CAP: u32 = 3;

/// Phase of the current turn.
/// The leader sets a trick; followers then attempt the same trick in order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnPhase {
    Leader,
    Follower,
}

/// Outcome of one trick attempt, as reported by the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptResult {
    Landed,
    Failed,
}

/// One completed attempt, immutable once recorded in the turn log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub player_id: usize,
    pub player_name: String,
    /// Snapshot of the card that was attempted
    pub card: TrickCard,
    pub result: AttemptResult,
    /// RFC3339 timestamp of the attempt
    pub ts: String,
    pub turn_type: TurnPhase,
    /// Points credited for a landed attempt
    #[serde(default)]
    pub points_awarded: Option<u32>,
}

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Orchestrates leader/follower turns for one match.
///
/// Owns the deck and the append-only turn log, tracks whose turn it is and
/// which card is in play, and mutates the [`PlayerRoster`] as attempts come
/// in. The active-player list is re-derived from the roster on every
/// transition, so an elimination mid-turn never leaves the machine pointing
/// at a stale id.
#[derive(Debug, Clone)]
pub struct TurnManager {
    leader_id: usize,
    follower_id: Option<usize>,
    phase: TurnPhase,
    current_card: Option<TrickCard>,
    deck: Deck,
    turns: Vec<Turn>,
    round: u32,
    streak_cap: u32,
}

impl TurnManager {
    /// New machine in leader phase with the first roster entry leading.
    /// No card is in play until [`deal_first_card`](Self::deal_first_card).
    pub fn new(deck: Deck, streak_cap: u32) -> Self {
        Self {
            leader_id: 0,
            follower_id: None,
            phase: TurnPhase::Leader,
            current_card: None,
            deck,
            turns: Vec::new(),
            round: 0,
            streak_cap,
        }
    }

    /// Draws the opening card for the first leader.
    pub fn deal_first_card(&mut self) {
        let card = self.draw_card();
        self.current_card = Some(card);
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn leader_id(&self) -> usize {
        self.leader_id
    }

    pub fn follower_id(&self) -> Option<usize> {
        self.follower_id
    }

    pub fn current_card(&self) -> Option<&TrickCard> {
        self.current_card.as_ref()
    }

    /// The completed-attempt log, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Full leadership passes so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Applies one attempt outcome for whoever is on the clock.
    ///
    /// Mutates the roster (scores, streaks, letters) and advances the phase
    /// per the house rules. Unknown or missing actors leave all state
    /// unchanged; the facade's game-over check governs degenerate rosters.
    pub fn apply(&mut self, result: AttemptResult, roster: &mut PlayerRoster) {
        match self.phase {
            TurnPhase::Leader => self.leader_turn(result, roster),
            TurnPhase::Follower => self.follower_turn(result, roster),
        }
    }

    fn leader_turn(&mut self, result: AttemptResult, roster: &mut PlayerRoster) {
        let Some(leader) = roster.get(self.leader_id).cloned() else {
            return;
        };
        let card = match &self.current_card {
            Some(card) => card.clone(),
            None => {
                let card = self.draw_card();
                self.current_card = Some(card.clone());
                card
            }
        };

        match result {
            AttemptResult::Landed => {
                roster.update_player(
                    leader.id,
                    PlayerUpdate::default()
                        .score(leader.score + card.points)
                        .streak(leader.streak + 1)
                        .tricks_landed(leader.tricks_landed + 1)
                        .tricks_attempted(leader.tricks_attempted + 1),
                );
                self.record_turn(&leader.name, leader.id, &card, result, Some(card.points));
                // same card stays in play for every follower
                self.prepare_followers(roster);
            }
            AttemptResult::Failed => {
                roster.update_player(
                    leader.id,
                    PlayerUpdate::default()
                        .streak(0)
                        .tricks_attempted(leader.tricks_attempted + 1),
                );
                roster.add_letter(leader.id);
                self.record_turn(&leader.name, leader.id, &card, result, None);
                self.pass_leadership(roster);
            }
        }
    }

    fn follower_turn(&mut self, result: AttemptResult, roster: &mut PlayerRoster) {
        let Some(follower_id) = self.follower_id else {
            return;
        };
        let Some(follower) = roster.get(follower_id).cloned() else {
            return;
        };
        let Some(card) = self.current_card.clone() else {
            return;
        };

        match result {
            AttemptResult::Landed => {
                roster.update_player(
                    follower.id,
                    PlayerUpdate::default()
                        .score(follower.score + card.points)
                        .streak(follower.streak + 1)
                        .tricks_landed(follower.tricks_landed + 1)
                        .tricks_attempted(follower.tricks_attempted + 1),
                );
                self.record_turn(&follower.name, follower.id, &card, result, Some(card.points));
            }
            AttemptResult::Failed => {
                roster.update_player(
                    follower.id,
                    PlayerUpdate::default()
                        .streak(0)
                        .tricks_attempted(follower.tricks_attempted + 1),
                );
                roster.add_letter(follower.id);
                self.record_turn(&follower.name, follower.id, &card, result, None);
            }
        }

        self.advance_follower(follower.id, result == AttemptResult::Failed, roster);
    }

    /// Enters follower phase with the first active player after the leader.
    /// With nobody left to follow the phase stays on the leader; the facade
    /// will already have flagged the match over in that case.
    fn prepare_followers(&mut self, roster: &PlayerRoster) {
        match self.next_active_after(self.leader_id, roster) {
            Some(next) if next != self.leader_id => {
                self.phase = TurnPhase::Follower;
                self.follower_id = Some(next);
            }
            _ => {}
        }
    }

    /// Moves to the next follower, or back to the leader when the scan wraps.
    ///
    /// A failed follower burns the shared card, so their successor gets a
    /// fresh one. Returning to the leader always draws fresh; if the leader
    /// has hit the streak cap the leadership passes preemptively instead.
    fn advance_follower(&mut self, from_id: usize, failed: bool, roster: &mut PlayerRoster) {
        let next = self.next_active_after(from_id, roster);
        match next {
            Some(next) if next != self.leader_id => {
                self.follower_id = Some(next);
                if failed {
                    let card = self.draw_card();
                    self.current_card = Some(card);
                }
            }
            _ => {
                self.phase = TurnPhase::Leader;
                self.follower_id = None;
                let capped = roster
                    .get(self.leader_id)
                    .map(|p| p.streak >= self.streak_cap)
                    .unwrap_or(false);
                if capped {
                    roster.update_player(self.leader_id, PlayerUpdate::default().streak(0));
                    self.pass_leadership(roster);
                } else {
                    let card = self.draw_card();
                    self.current_card = Some(card);
                }
            }
        }
    }

    /// Hands leadership to the next active player in round-robin order,
    /// counts the round, and draws the new leader a fresh card.
    fn pass_leadership(&mut self, roster: &mut PlayerRoster) {
        let Some(next) = self.next_active_after(self.leader_id, roster) else {
            return;
        };
        roster.update_player(next, PlayerUpdate::default().streak(0));
        self.leader_id = next;
        self.phase = TurnPhase::Leader;
        self.follower_id = None;
        self.round += 1;
        let card = self.draw_card();
        self.current_card = Some(card);
    }

    /// First non-eliminated player strictly after `id` in registry order,
    /// wrapping around. Returns `id` itself when it is the only active
    /// player left, and None when nobody is active.
    fn next_active_after(&self, id: usize, roster: &PlayerRoster) -> Option<usize> {
        let players = roster.players();
        let len = players.len();
        if len == 0 {
            return None;
        }
        let start = players.iter().position(|p| p.id == id).unwrap_or(0);
        for offset in 1..=len {
            let candidate = &players[(start + offset) % len];
            if !candidate.is_eliminated {
                return Some(candidate.id);
            }
        }
        None
    }

    fn record_turn(
        &mut self,
        name: &str,
        player_id: usize,
        card: &TrickCard,
        result: AttemptResult,
        points_awarded: Option<u32>,
    ) {
        self.turns.push(Turn {
            player_id,
            player_name: name.to_string(),
            card: card.clone(),
            result,
            ts: now_rfc3339(),
            turn_type: self.phase,
            points_awarded,
        });
    }

    fn used_card_ids(&self) -> HashSet<u32> {
        self.turns.iter().map(|t| t.card.id).collect()
    }

    fn draw_card(&mut self) -> TrickCard {
        let used = self.used_card_ids();
        self.deck.draw(&used)
    }
}
