//! Combat module - skills, creatures and damage resolution
//!
//! Every attack is one deterministic arithmetic step:
//!
//! ```text
//! damage = max(1, skill.base_damage - defender.defense)
//! defender.health -= damage
//! ```
//!
//! There is no miss chance, cooldown or resource cost, and health is not
//! clamped at zero.

use std::fmt;

/// Elemental tag carried by a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Normal,
}

impl Element {
    /// Parse element from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "normal" => Some(Element::Normal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Normal => "normal",
        }
    }
}

/// An attack a creature knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    name: String,
    base_damage: i32,
    element: Element,
}

impl Skill {
    pub fn new(name: impl Into<String>, base_damage: i32, element: Element) -> Self {
        Self {
            name: name.into(),
            base_damage,
            element,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    pub fn element(&self) -> Element {
        self.element
    }
}

/// A battle participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    health: i32,
    attack: i32,
    defense: i32,
    skills: Vec<Skill>,
}

impl Creature {
    pub fn new(name: impl Into<String>, health: i32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
            defense,
            skills: Vec::new(),
        }
    }

    /// Fire-type rooster: 120 HP, 30 attack, 10 defense.
    pub fn flame_rooster(name: impl Into<String>) -> Self {
        let mut rooster = Self::new(name, 120, 30, 10);
        rooster.add_skill(Skill::new("Flame Peck", 35, Element::Fire));
        rooster.add_skill(Skill::new("Burning Crow", 45, Element::Fire));
        rooster.add_skill(Skill::new("Scratch", 20, Element::Normal));
        rooster
    }

    pub fn add_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn attack_stat(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }

    /// Subtract `amount` from health. Health may go negative.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// True once health has dropped to zero or below.
    ///
    /// Informational only: a defeated creature can still be attacked.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Attack `enemy` with `skill`. See [`attack`].
    pub fn attack(&self, enemy: &mut Creature, skill: &Skill) -> AttackEvent {
        attack(self, enemy, skill)
    }
}

/// Description of a resolved attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackEvent {
    pub attacker: String,
    pub skill: String,
    pub defender: String,
    pub damage: i32,
    pub defender_health: i32,
}

impl fmt::Display for AttackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} uses {} on {} for {} damage!",
            self.attacker, self.skill, self.defender, self.damage
        )
    }
}

/// Damage `skill` would deal to `defender`. Never below 1.
pub fn damage_for(skill: &Skill, defender: &Creature) -> i32 {
    (skill.base_damage - defender.defense).max(1)
}

/// Resolve one attack and apply its damage to `defender`.
pub fn attack(attacker: &Creature, defender: &mut Creature, skill: &Skill) -> AttackEvent {
    let damage = damage_for(skill, defender);
    defender.take_damage(damage);

    let event = AttackEvent {
        attacker: attacker.name.clone(),
        skill: skill.name.clone(),
        defender: defender.name.clone(),
        damage,
        defender_health: defender.health,
    };
    tracing::info!(
        attacker = %event.attacker,
        skill = %event.skill,
        defender = %event.defender,
        damage,
        remaining = event.defender_health,
        "{}",
        event
    );
    event
}
