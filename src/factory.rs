use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unknown variant '{discriminator}'")]
    UnknownVariant { discriminator: String },
}

/// The closed set of tax regimes the workshop bills under. Adding a
/// regime means adding a variant here, and the compiler then walks you
/// through every mapping that must handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxKind {
    ValueAdded,
    GrossReceipts,
    MunicipalContribution,
}

impl TaxKind {
    pub const ALL: [TaxKind; 3] = [
        TaxKind::ValueAdded,
        TaxKind::GrossReceipts,
        TaxKind::MunicipalContribution,
    ];

    /// The discriminator this regime answers to at the keyed-factory
    /// boundary.
    pub fn discriminator(self) -> &'static str {
        match self {
            TaxKind::ValueAdded => "iva",
            TaxKind::GrossReceipts => "iibb",
            TaxKind::MunicipalContribution => "contrib municipales",
        }
    }

    /// A fresh calculator for this regime. Total over the variant set.
    pub fn calculator(self) -> Box<dyn TaxCalculator> {
        match self {
            TaxKind::ValueAdded => Box::new(ValueAddedTax),
            TaxKind::GrossReceipts => Box::new(GrossReceiptsTax),
            TaxKind::MunicipalContribution => Box::new(MunicipalContributionTax),
        }
    }
}

impl FromStr for TaxKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminator() == s)
            .ok_or_else(|| FactoryError::UnknownVariant {
                discriminator: s.to_string(),
            })
    }
}

/// One-method strategy: adjust a base amount by this regime's rate.
pub trait TaxCalculator: std::fmt::Debug {
    fn adjusted_amount(&self, base: f64) -> f64;
}

/// 21% value-added tax.
#[derive(Debug)]
pub struct ValueAddedTax;

impl ValueAddedTax {
    pub const RATE: f64 = 1.21;
}

impl TaxCalculator for ValueAddedTax {
    fn adjusted_amount(&self, base: f64) -> f64 {
        base * Self::RATE
    }
}

/// 5% gross-receipts tax.
#[derive(Debug)]
pub struct GrossReceiptsTax;

impl GrossReceiptsTax {
    pub const RATE: f64 = 1.05;
}

impl TaxCalculator for GrossReceiptsTax {
    fn adjusted_amount(&self, base: f64) -> f64 {
        base * Self::RATE
    }
}

/// 1.2% municipal contribution.
#[derive(Debug)]
pub struct MunicipalContributionTax;

impl MunicipalContributionTax {
    pub const RATE: f64 = 1.012;
}

impl TaxCalculator for MunicipalContributionTax {
    fn adjusted_amount(&self, base: f64) -> f64 {
        base * Self::RATE
    }
}

/// Keyed factory boundary: looks the discriminator up and returns a
/// fresh strategy. An unknown discriminator is the caller's bug and is
/// always reported, never defaulted to some "safe" regime.
pub fn create_tax_calculator(discriminator: &str) -> Result<Box<dyn TaxCalculator>, FactoryError> {
    discriminator.parse::<TaxKind>().map(TaxKind::calculator)
}

/// How a finished order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryKind {
    Counter,
    Pickup,
    Courier,
}

impl DeliveryKind {
    pub const ALL: [DeliveryKind; 3] = [
        DeliveryKind::Counter,
        DeliveryKind::Pickup,
        DeliveryKind::Courier,
    ];

    pub fn discriminator(self) -> &'static str {
        match self {
            DeliveryKind::Counter => "counter",
            DeliveryKind::Pickup => "pickup",
            DeliveryKind::Courier => "courier",
        }
    }

    pub fn handoff(self) -> Box<dyn DeliveryHandoff> {
        match self {
            DeliveryKind::Counter => Box::new(CounterHandoff),
            DeliveryKind::Pickup => Box::new(PickupHandoff),
            DeliveryKind::Courier => Box::new(CourierHandoff),
        }
    }
}

impl FromStr for DeliveryKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminator() == s)
            .ok_or_else(|| FactoryError::UnknownVariant {
                discriminator: s.to_string(),
            })
    }
}

/// One-method strategy: describe the handoff to the customer.
pub trait DeliveryHandoff: std::fmt::Debug {
    fn describe(&self) -> String;
}

#[derive(Debug)]
pub struct CounterHandoff;

impl DeliveryHandoff for CounterHandoff {
    fn describe(&self) -> String {
        "ready at the counter".to_string()
    }
}

#[derive(Debug)]
pub struct PickupHandoff;

impl DeliveryHandoff for PickupHandoff {
    fn describe(&self) -> String {
        "picked up by the customer".to_string()
    }
}

#[derive(Debug)]
pub struct CourierHandoff;

impl DeliveryHandoff for CourierHandoff {
    fn describe(&self) -> String {
        "sent out with a courier".to_string()
    }
}

pub fn create_delivery_handoff(
    discriminator: &str,
) -> Result<Box<dyn DeliveryHandoff>, FactoryError> {
    discriminator.parse::<DeliveryKind>().map(DeliveryKind::handoff)
}

/// An order that renders its handoff line through whichever delivery
/// strategy it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burger {
    style: String,
}

impl Burger {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }

    pub fn handoff_line(&self, handoff: &dyn DeliveryHandoff) -> String {
        format!("{} burger: {}", self.style, handoff.describe())
    }
}

/// The customer's standing with the tax authority, which decides how an
/// invoice is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxStatus {
    Registered,
    Unregistered,
    Exempt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub total: f64,
}

impl TaxStatus {
    /// Issues an invoice for a net amount: registered customers pay VAT
    /// on top, the other two statuses are billed the net amount as is.
    pub fn issue_invoice(self, net: f64) -> Invoice {
        match self {
            TaxStatus::Registered => Invoice {
                total: net * ValueAddedTax::RATE,
            },
            TaxStatus::Unregistered | TaxStatus::Exempt => Invoice { total: net },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_rates_match_their_regimes() {
        let vat = create_tax_calculator("iva").unwrap();
        assert_eq!(vat.adjusted_amount(1000.0), 1210.0);

        let gross = create_tax_calculator("iibb").unwrap();
        assert_eq!(gross.adjusted_amount(1000.0), 1050.0);

        let municipal = create_tax_calculator("contrib municipales").unwrap();
        assert_eq!(municipal.adjusted_amount(1000.0), 1012.0);
    }

    #[test]
    fn unknown_tax_discriminator_is_reported() {
        let err = create_tax_calculator("ganancias").unwrap_err();
        assert_eq!(
            err,
            FactoryError::UnknownVariant {
                discriminator: "ganancias".to_string(),
            }
        );
    }

    #[test]
    fn discriminators_round_trip_through_from_str() {
        for kind in TaxKind::ALL {
            assert_eq!(kind.discriminator().parse::<TaxKind>().unwrap(), kind);
        }
        for kind in DeliveryKind::ALL {
            assert_eq!(kind.discriminator().parse::<DeliveryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn each_factory_call_returns_a_fresh_strategy() {
        let first = create_tax_calculator("iva").unwrap();
        let second = create_tax_calculator("iva").unwrap();
        assert_eq!(
            first.adjusted_amount(250.0),
            second.adjusted_amount(250.0)
        );
    }

    #[test]
    fn burger_renders_through_the_injected_handoff() {
        let burger = Burger::new("double");
        let line = burger.handoff_line(create_delivery_handoff("courier").unwrap().as_ref());
        assert_eq!(line, "double burger: sent out with a courier");
    }

    #[test]
    fn unknown_delivery_discriminator_is_reported() {
        assert!(matches!(
            create_delivery_handoff("drone").unwrap_err(),
            FactoryError::UnknownVariant { .. }
        ));
    }

    #[test]
    fn registered_invoices_carry_vat() {
        assert_eq!(TaxStatus::Registered.issue_invoice(1000.0).total, 1210.0);
        assert_eq!(TaxStatus::Unregistered.issue_invoice(1000.0).total, 1000.0);
        assert_eq!(TaxStatus::Exempt.issue_invoice(1000.0).total, 1000.0);
    }
}
