use colored::Colorize;
use creational_workshop::factory::{
    create_delivery_handoff, create_tax_calculator, Burger, DeliveryKind, TaxKind, TaxStatus,
};

fn main() {
    let base = 1000.0;

    println!("{}", "=== Tax calculators by discriminator ===".bold());
    for kind in TaxKind::ALL {
        let discriminator = kind.discriminator();
        match create_tax_calculator(discriminator) {
            Ok(calculator) => println!(
                "{} {discriminator:<20} {base:.2} -> {:.2}",
                "✓".green(),
                calculator.adjusted_amount(base)
            ),
            Err(err) => println!("{} {discriminator}: {err}", "✗".red()),
        }
    }
    if let Err(err) = create_tax_calculator("ganancias") {
        println!("{} {err}", "✗".red());
    }

    println!("\n{}", "=== Delivery strategies ===".bold());
    let burger = Burger::new("lettuce-topped");
    for kind in DeliveryKind::ALL {
        let handoff = kind.handoff();
        println!("{} {}", "✓".green(), burger.handoff_line(handoff.as_ref()));
    }
    if let Err(err) = create_delivery_handoff("drone") {
        println!("{} {err}", "✗".red());
    }

    println!("\n{}", "=== Invoices by tax status ===".bold());
    for status in [TaxStatus::Registered, TaxStatus::Unregistered, TaxStatus::Exempt] {
        let invoice = status.issue_invoice(base);
        println!("{} {status:?}: total {:.2}", "✓".green(), invoice.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_creatable_through_its_own_discriminator() {
        for kind in TaxKind::ALL {
            assert!(create_tax_calculator(kind.discriminator()).is_ok());
        }
        for kind in DeliveryKind::ALL {
            assert!(create_delivery_handoff(kind.discriminator()).is_ok());
        }
    }
}
