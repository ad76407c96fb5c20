use colored::Colorize;
use creational_workshop::memo::{shared, FactorialCache};

fn main() {
    println!("{}", "=== One process-wide calculator ===".bold());
    let cache = shared().lock().expect("shared cache lock");

    for n in [0, 1, 5, 10] {
        match cache.value_for(n) {
            Ok(value) => println!("{} {n}! = {value}", "✓".green()),
            Err(err) => println!("{} {n}!: {err}", "✗".red()),
        }
    }
    println!("values computed so far: {}", cache.computations());

    println!("\n{}", "=== Hits cost nothing ===".bold());
    let before = cache.computations();
    let value = cache.value_for(7).expect("7 was filled in on the way to 10");
    println!(
        "7! = {value}, computed {} new value(s)",
        cache.computations() - before
    );
    drop(cache);

    println!("\n{}", "=== Failure paths ===".bold());
    // An isolated instance, so the demo failures leave the shared
    // calculator untouched.
    let isolated = FactorialCache::new();
    for n in [-1, 40] {
        match isolated.value_for(n) {
            Ok(value) => println!("{} {n}! = {value}", "✓".green()),
            Err(err) => println!("{} {err}", "✗".red()),
        }
    }
}
