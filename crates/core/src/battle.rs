//! Turn loop for a one-on-one creature battle.
//!
//! Creatures alternate turns, starting with the challenger. On its n-th turn a
//! creature uses skill `n % skills.len()`. The battle ends when either side is
//! defeated or the round cap is reached.

use crate::combat::{attack, AttackEvent, Creature};

/// Default number of full rounds before a battle is called a draw.
pub const DEFAULT_ROUND_CAP: u32 = 100;

/// Which side acts next or won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }
}

/// How a finished battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleResult {
    Winner(Side),
    Draw,
}

#[derive(Debug, Clone)]
pub struct Battle {
    challenger: Creature,
    opponent: Creature,
    next: Side,
    challenger_turns: u32,
    opponent_turns: u32,
    round_cap: u32,
}

impl Battle {
    pub fn new(challenger: Creature, opponent: Creature) -> Self {
        Self {
            challenger,
            opponent,
            next: Side::Challenger,
            challenger_turns: 0,
            opponent_turns: 0,
            round_cap: DEFAULT_ROUND_CAP,
        }
    }

    pub fn with_round_cap(mut self, round_cap: u32) -> Self {
        self.round_cap = round_cap;
        self
    }

    pub fn challenger(&self) -> &Creature {
        &self.challenger
    }

    pub fn opponent(&self) -> &Creature {
        &self.opponent
    }

    /// Completed rounds (both sides acted).
    pub fn rounds(&self) -> u32 {
        self.opponent_turns
    }

    /// Outcome once the battle is over, `None` while it is still running.
    pub fn result(&self) -> Option<BattleResult> {
        if self.opponent.is_defeated() {
            return Some(BattleResult::Winner(Side::Challenger));
        }
        if self.challenger.is_defeated() {
            return Some(BattleResult::Winner(Side::Opponent));
        }
        if self.rounds() >= self.round_cap {
            return Some(BattleResult::Draw);
        }
        None
    }

    /// Play the next turn.
    ///
    /// Returns `None` when the battle is over or the acting creature knows no
    /// skills (its turn is skipped).
    pub fn step(&mut self) -> Option<AttackEvent> {
        if self.result().is_some() {
            return None;
        }

        let side = self.next;
        self.next = side.other();

        let (actor, target, turns) = match side {
            Side::Challenger => (
                &self.challenger,
                &mut self.opponent,
                &mut self.challenger_turns,
            ),
            Side::Opponent => (
                &self.opponent,
                &mut self.challenger,
                &mut self.opponent_turns,
            ),
        };

        let turn = *turns;
        *turns += 1;

        let skill_count = actor.skills().len();
        if skill_count == 0 {
            tracing::debug!(creature = actor.name(), "no skills, turn skipped");
            return None;
        }
        let skill = &actor.skills()[turn as usize % skill_count];
        Some(attack(actor, target, skill))
    }

    /// Play until the battle ends, collecting every attack.
    pub fn run(&mut self) -> Vec<AttackEvent> {
        let mut events = Vec::new();
        while self.result().is_none() {
            if let Some(event) = self.step() {
                events.push(event);
            }
        }
        events
    }
}
