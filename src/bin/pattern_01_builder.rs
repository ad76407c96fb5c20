use colored::Colorize;
use creational_workshop::builder::{AirplaneBuilder, CheckedAirplaneBuilder, FoodTruckBuilder};
use creational_workshop::{BuildStep, Builder, Director, DirectorError, Product};

/// Runs one recipe against `builder` with a throwaway director and
/// reads the result out of the builder.
fn assemble(builder: &mut dyn Builder, recipe: &str) -> Result<Product, DirectorError> {
    let mut director = Director::new();
    director.set_builder(&mut *builder);
    director.run_recipe(recipe)?;
    Ok(builder.take_product())
}

fn report(title: &str, product: &Product) {
    println!("{} {}", "✓".green(), title.bold());
    println!("  parts: {}", product.describe());
}

fn main() {
    println!("{}", "=== Director-driven assembly ===".bold());
    let mut airplane = AirplaneBuilder::new();
    for recipe in ["minimal", "full", "partial"] {
        match assemble(&mut airplane, recipe) {
            Ok(product) => report(recipe, &product),
            Err(err) => println!("{} {recipe}: {err}", "✗".red()),
        }
    }

    println!("\n{}", "=== Same recipe, different builder ===".bold());
    let mut truck = FoodTruckBuilder::new();
    let product = assemble(&mut truck, "full").expect("stock recipe");
    report("full, food-truck themed", &product);

    println!("\n{}", "=== Direct builder use, no director ===".bold());
    let mut custom = AirplaneBuilder::new();
    for step in [BuildStep::PartA, BuildStep::PartB, BuildStep::PartB] {
        custom.produce(step).expect("plain builder accepts any order");
    }
    // Producing part-b twice hangs two turbines on the same side.
    report("custom build with a repeated slot", &custom.take_product());

    println!("\n{}", "=== Read-and-reset ===".bold());
    let mut builder = AirplaneBuilder::new();
    builder.produce(BuildStep::PartA).expect("plain builder");
    let populated = builder.take_product();
    let after_reset = builder.take_product();
    println!("first read:  {} part(s)", populated.len());
    println!("second read: {} part(s), the reset started a fresh product", after_reset.len());

    println!("\n{}", "=== Builder swap mid-sequence ===".bold());
    let mut first = AirplaneBuilder::new();
    let mut second = FoodTruckBuilder::new();
    {
        let mut director = Director::new();
        director.set_builder(&mut first);
        director.run_step(BuildStep::PartA).expect("plain builder");
        director.set_builder(&mut second);
        director.run_step(BuildStep::PartB).expect("plain builder");
        director.run_step(BuildStep::PartF).expect("plain builder");
    }
    let mut combined = first.take_product();
    for part in second.take_product().parts() {
        combined.add(part.clone());
    }
    report("mixed-theme run", &combined);

    println!("\n{}", "=== Validation is the builder's policy ===".bold());
    let mut checked = CheckedAirplaneBuilder::new();
    match assemble(&mut checked, "partial") {
        Ok(product) => report("partial on the checked builder", &product),
        Err(err) => println!("{} partial on the checked builder: {err}", "✗".red()),
    }
    let product = assemble(&mut checked, "full").expect("full starts with the body");
    report("full on the checked builder", &product);

    println!("\n{}", "=== Error paths ===".bold());
    let mut plain = AirplaneBuilder::new();
    let mut director = Director::new();
    if let Err(err) = director.run_recipe("minimal") {
        println!("{} {err}", "✗".red());
    }
    director.set_builder(&mut plain);
    if let Err(err) = director.run_recipe("imaginary") {
        println!("{} {err}", "✗".red());
    }

    println!("\n{}", "=== Product rendered as JSON ===".bold());
    let mut builder = AirplaneBuilder::new();
    let product = assemble(&mut builder, "full").expect("stock recipe");
    let json = serde_json::to_string_pretty(&product).expect("product serializes");
    println!("{json}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_reads_the_product_out_of_the_builder() {
        let mut builder = AirplaneBuilder::new();
        let product = assemble(&mut builder, "full").unwrap();
        assert_eq!(product.len(), 6);
        assert!(builder.take_product().is_empty());
    }

    #[test]
    fn checked_builder_rejects_partial_but_accepts_full() {
        let mut checked = CheckedAirplaneBuilder::new();
        assert!(assemble(&mut checked, "partial").is_err());
        assert_eq!(assemble(&mut checked, "full").unwrap().len(), 6);
    }

    #[test]
    fn product_json_lists_parts_in_order() {
        let mut builder = AirplaneBuilder::new();
        let product = assemble(&mut builder, "minimal").unwrap();
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"parts":[{"label":"airframe body"}]}"#);
    }
}
