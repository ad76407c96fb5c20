use crate::product::{Part, Product};
use std::fmt;
use thiserror::Error;

/// The six generic build slots a builder can fill. Which concrete part
/// lands in each slot is the builder's choice; recipes only name slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStep {
    PartA,
    PartB,
    PartC,
    PartD,
    PartE,
    PartF,
}

impl BuildStep {
    /// Every slot, in declared assembly order.
    pub const ALL: [BuildStep; 6] = [
        BuildStep::PartA,
        BuildStep::PartB,
        BuildStep::PartC,
        BuildStep::PartD,
        BuildStep::PartE,
        BuildStep::PartF,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            BuildStep::PartA => "part-a",
            BuildStep::PartB => "part-b",
            BuildStep::PartC => "part-c",
            BuildStep::PartD => "part-d",
            BuildStep::PartE => "part-e",
            BuildStep::PartF => "part-f",
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("cannot assemble '{step}' before '{required}'")]
    Precondition { step: BuildStep, required: BuildStep },
}

/// Tag-dispatched assembly contract.
///
/// The contract imposes no call ordering (the director sequences steps
/// through recipes) and no completeness check; producing the same step
/// twice accumulates two parts, which is legal. Concrete builders pick
/// their own validation policy: the plain builders accept any order,
/// [`CheckedAirplaneBuilder`] rejects attachments before the body.
pub trait Builder {
    /// Appends this builder's part for `step` to the work in progress.
    fn produce(&mut self, step: BuildStep) -> Result<(), BuildError>;

    /// Hands over the assembled product and starts a fresh one.
    ///
    /// Read-and-reset: calling this twice in a row yields a populated
    /// product and then an empty one, so read exactly once per build
    /// cycle. The reset lets one builder instance run build after
    /// build without residue. A read with a side effect is surprising,
    /// so the `take_` name keeps that visible at call sites.
    fn take_product(&mut self) -> Product;
}

/// Assembles an airplane: airframe, two turbines, two wings, gear.
#[derive(Debug, Default)]
pub struct AirplaneBuilder {
    product: Product,
}

impl AirplaneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn part_for(step: BuildStep) -> Part {
        let label = match step {
            BuildStep::PartA => "airframe body",
            BuildStep::PartB => "left turbine",
            BuildStep::PartC => "right turbine",
            BuildStep::PartD => "left wing",
            BuildStep::PartE => "right wing",
            BuildStep::PartF => "landing gear",
        };
        Part::new(label)
    }
}

impl Builder for AirplaneBuilder {
    fn produce(&mut self, step: BuildStep) -> Result<(), BuildError> {
        self.product.add(Self::part_for(step));
        Ok(())
    }

    fn take_product(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}

/// Assembles a food truck out of the same six slots, so one recipe run
/// against this builder and the airplane builder yields structurally
/// identical but differently themed products.
#[derive(Debug, Default)]
pub struct FoodTruckBuilder {
    product: Product,
}

impl FoodTruckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn part_for(step: BuildStep) -> Part {
        let label = match step {
            BuildStep::PartA => "truck chassis",
            BuildStep::PartB => "griddle",
            BuildStep::PartC => "deep fryer",
            BuildStep::PartD => "serving hatch",
            BuildStep::PartE => "menu board",
            BuildStep::PartF => "awning",
        };
        Part::new(label)
    }
}

impl Builder for FoodTruckBuilder {
    fn produce(&mut self, step: BuildStep) -> Result<(), BuildError> {
        self.product.add(Self::part_for(step));
        Ok(())
    }

    fn take_product(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}

/// Airplane builder that refuses to attach anything before the body
/// slot has been produced. Validation is this builder's policy, not
/// part of the [`Builder`] contract.
#[derive(Debug, Default)]
pub struct CheckedAirplaneBuilder {
    product: Product,
    has_body: bool,
}

impl CheckedAirplaneBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for CheckedAirplaneBuilder {
    fn produce(&mut self, step: BuildStep) -> Result<(), BuildError> {
        if step == BuildStep::PartA {
            self.has_body = true;
        } else if !self.has_body {
            return Err(BuildError::Precondition {
                step,
                required: BuildStep::PartA,
            });
        }
        self.product.add(AirplaneBuilder::part_for(step));
        Ok(())
    }

    fn take_product(&mut self) -> Product {
        self.has_body = false;
        std::mem::take(&mut self.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_slot_order_is_body_turbines_wings_gear() {
        let mut builder = AirplaneBuilder::new();
        for step in BuildStep::ALL {
            builder.produce(step).unwrap();
        }

        let product = builder.take_product();
        assert_eq!(
            product.labels(),
            vec![
                "airframe body",
                "left turbine",
                "right turbine",
                "left wing",
                "right wing",
                "landing gear",
            ]
        );
    }

    #[test]
    fn repeated_steps_accumulate_repeated_parts() {
        let mut builder = AirplaneBuilder::new();
        builder.produce(BuildStep::PartB).unwrap();
        builder.produce(BuildStep::PartB).unwrap();

        let product = builder.take_product();
        assert_eq!(product.labels(), vec!["left turbine", "left turbine"]);
    }

    #[test]
    fn take_product_resets_for_the_next_build() {
        let mut builder = AirplaneBuilder::new();
        builder.produce(BuildStep::PartA).unwrap();

        let first = builder.take_product();
        let second = builder.take_product();
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());

        // The same instance keeps working after a read.
        builder.produce(BuildStep::PartF).unwrap();
        assert_eq!(builder.take_product().labels(), vec!["landing gear"]);
    }

    #[test]
    fn themed_builders_share_slot_structure() {
        let mut airplane = AirplaneBuilder::new();
        let mut truck = FoodTruckBuilder::new();
        for step in [BuildStep::PartA, BuildStep::PartB] {
            airplane.produce(step).unwrap();
            truck.produce(step).unwrap();
        }

        let plane = airplane.take_product();
        let cart = truck.take_product();
        assert_eq!(plane.len(), cart.len());
        assert_ne!(plane.labels(), cart.labels());
        assert_eq!(cart.labels(), vec!["truck chassis", "griddle"]);
    }

    #[test]
    fn checked_builder_requires_body_first() {
        let mut builder = CheckedAirplaneBuilder::new();
        let err = builder.produce(BuildStep::PartB).unwrap_err();
        assert_eq!(
            err,
            BuildError::Precondition {
                step: BuildStep::PartB,
                required: BuildStep::PartA,
            }
        );

        builder.produce(BuildStep::PartA).unwrap();
        builder.produce(BuildStep::PartB).unwrap();
        assert_eq!(
            builder.take_product().labels(),
            vec!["airframe body", "left turbine"]
        );
    }

    #[test]
    fn checked_builder_forgets_the_body_after_a_read() {
        let mut builder = CheckedAirplaneBuilder::new();
        builder.produce(BuildStep::PartA).unwrap();
        let _ = builder.take_product();

        assert!(builder.produce(BuildStep::PartF).is_err());
    }

    #[test]
    fn precondition_error_names_both_slots() {
        let err = BuildError::Precondition {
            step: BuildStep::PartC,
            required: BuildStep::PartA,
        };
        assert_eq!(err.to_string(), "cannot assemble 'part-c' before 'part-a'");
    }
}
