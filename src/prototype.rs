//! Character templates with explicit duplication.
//!
//! Spawning from a template is an explicit, per-type `duplicate`: the
//! new value gets copies of the scalar stats and its own independently
//! owned inventory or ability list. There is no generic "copy whatever
//! is in there" operation; each type spells out what a copy means.

/// Scalar stats every character template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    pub height: u32,
    pub age: u32,
    pub defense: i32,
    pub attack: i32,
}

/// A merchant NPC template with a stock list of its own.
#[derive(Debug, PartialEq, Eq)]
pub struct Shopkeeper {
    stats: StatBlock,
    charisma: i32,
    stock: Vec<String>,
}

impl Shopkeeper {
    pub fn new(stats: StatBlock) -> Self {
        Self {
            stats,
            charisma: 30,
            stock: Vec::new(),
        }
    }

    pub fn stats(&self) -> StatBlock {
        self.stats
    }

    pub fn charisma(&self) -> i32 {
        self.charisma
    }

    pub fn restock(&mut self, item: impl Into<String>) {
        self.stock.push(item.into());
    }

    pub fn stock(&self) -> &[String] {
        &self.stock
    }

    pub fn greeting(&self) -> &'static str {
        "Welcome, brave adventurer! How can I help you today?"
    }

    pub fn offer_quest(&self, description: &str) -> String {
        format!("Listen. {description}. Do you accept?")
    }

    /// An independent copy: scalars are copied and the stock list is
    /// cloned into storage owned by the new shopkeeper.
    pub fn duplicate(&self) -> Self {
        Self {
            stats: self.stats,
            charisma: self.charisma,
            stock: self.stock.clone(),
        }
    }
}

/// A fighter template with stamina and an equipped weapon.
#[derive(Debug, PartialEq, Eq)]
pub struct Warrior {
    stats: StatBlock,
    stamina: i32,
    weapon: String,
}

impl Warrior {
    pub fn new(stats: StatBlock) -> Self {
        Self {
            stats,
            stamina: 60,
            weapon: "bare hands".to_string(),
        }
    }

    pub fn stats(&self) -> StatBlock {
        self.stats
    }

    pub fn stamina(&self) -> i32 {
        self.stamina
    }

    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    pub fn equip(&mut self, weapon: impl Into<String>) {
        self.weapon = weapon.into();
    }

    pub fn train(&mut self) -> i32 {
        self.stamina += 10;
        self.stamina
    }

    pub fn battle_cry(&self) -> &'static str {
        "AHHHHGGGG"
    }

    pub fn duplicate(&self) -> Self {
        Self {
            stats: self.stats,
            stamina: self.stamina,
            weapon: self.weapon.clone(),
        }
    }
}

/// A caster template with mana and a spellbook of its own.
#[derive(Debug, PartialEq, Eq)]
pub struct Mage {
    stats: StatBlock,
    mana: i32,
    spellbook: Vec<String>,
}

impl Mage {
    pub fn new(stats: StatBlock) -> Self {
        Self {
            stats,
            mana: 100,
            spellbook: Vec::new(),
        }
    }

    pub fn stats(&self) -> StatBlock {
        self.stats
    }

    pub fn mana(&self) -> i32 {
        self.mana
    }

    pub fn learn(&mut self, spell: impl Into<String>) {
        self.spellbook.push(spell.into());
    }

    pub fn spellbook(&self) -> &[String] {
        &self.spellbook
    }

    pub fn cast_fireball(&self, target: &str) -> String {
        format!("Fireball hurled at {target}")
    }

    pub fn rank(&self) -> &'static str {
        if self.stats.age >= 18 && self.stats.defense >= 50 {
            "archmage"
        } else {
            "apprentice"
        }
    }

    pub fn duplicate(&self) -> Self {
        Self {
            stats: self.stats,
            mana: self.mana,
            spellbook: self.spellbook.clone(),
        }
    }
}
