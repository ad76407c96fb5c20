use colored::Colorize;
use creational_workshop::prototype::{Mage, Shopkeeper, StatBlock, Warrior};

fn main() {
    println!("{}", "=== Templates ===".bold());
    let mut shopkeeper = Shopkeeper::new(StatBlock {
        height: 180,
        age: 22,
        defense: 5,
        attack: 8,
    });
    shopkeeper.restock("healing potion");
    shopkeeper.restock("iron dagger");
    println!("shopkeeper stock: {}", shopkeeper.stock().join(", "));
    println!("{}", shopkeeper.greeting());
    println!("{}", shopkeeper.offer_quest("A treasure lies hidden in the mountains"));

    let mut warrior = Warrior::new(StatBlock {
        height: 185,
        age: 22,
        defense: 4,
        attack: 21,
    });
    warrior.equip("longsword");
    println!("warrior shouts: {}", warrior.battle_cry());

    let mut mage = Mage::new(StatBlock {
        height: 172,
        age: 65,
        defense: 8,
        attack: 15,
    });
    mage.learn("fireball");
    println!("mage rank: {}", mage.rank());
    println!("{}", mage.cast_fireball("the training dummy"));

    println!("\n{}", "=== Duplicates diverge, templates stay put ===".bold());
    let mut veteran = warrior.duplicate();
    veteran.equip("war hammer");
    veteran.train();
    println!(
        "template warrior: {} ({} stamina)",
        warrior.weapon(),
        warrior.stamina()
    );
    println!(
        "duplicate warrior: {} ({} stamina)",
        veteran.weapon(),
        veteran.stamina()
    );

    let mut healer = mage.duplicate();
    healer.learn("healing word");
    println!("template spellbook: {}", mage.spellbook().join(", "));
    println!("duplicate spellbook: {}", healer.spellbook().join(", "));

    println!("\n{}", "=== Stamping out a population ===".bold());
    let recruits: Vec<Warrior> = (0..3).map(|_| warrior.duplicate()).collect();
    println!(
        "{} {} recruits armed with a {}",
        "✓".green(),
        recruits.len(),
        recruits[0].weapon()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_members_are_independent() {
        let template = Shopkeeper::new(StatBlock {
            height: 180,
            age: 22,
            defense: 5,
            attack: 8,
        });

        let mut clones: Vec<Shopkeeper> = (0..3).map(|_| template.duplicate()).collect();
        clones[1].restock("rare gem");

        assert!(template.stock().is_empty());
        assert!(clones[0].stock().is_empty());
        assert_eq!(clones[1].stock(), ["rare gem"]);
    }
}
