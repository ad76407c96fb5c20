use crate::builder::{BuildError, BuildStep, Builder};
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectorError {
    #[error("no builder configured; call set_builder first")]
    NoBuilder,

    #[error("unknown recipe '{name}'")]
    UnknownRecipe { name: String },

    #[error("build step failed: {0}")]
    Step(#[from] BuildError),
}

/// Sequences build steps against whichever builder is currently active.
///
/// A recipe is data: a name bound to an ordered list of build slots.
/// Running a recipe replays its slots, in order, on the active builder,
/// so the same recipe run against two builders yields structurally
/// identical but differently themed products. The director borrows its
/// builder rather than owning it; swapping builders between steps is
/// legal and takes effect on the next step.
pub struct Director<'a> {
    builder: Option<&'a mut dyn Builder>,
    recipes: FxHashMap<String, Vec<BuildStep>>,
}

impl<'a> Director<'a> {
    /// A director with the three stock recipes registered: `minimal`
    /// (the first slot only), `full` (every slot in declared order) and
    /// `partial` (a non-contiguous subset).
    pub fn new() -> Self {
        let mut recipes = FxHashMap::default();
        recipes.insert("minimal".to_string(), vec![BuildStep::PartA]);
        recipes.insert("full".to_string(), BuildStep::ALL.to_vec());
        recipes.insert(
            "partial".to_string(),
            vec![BuildStep::PartB, BuildStep::PartD],
        );
        Self {
            builder: None,
            recipes,
        }
    }

    /// Replaces the active builder. Nothing else changes: recipes stay
    /// registered and any in-progress product stays with the builder
    /// that was assembling it.
    pub fn set_builder(&mut self, builder: &'a mut dyn Builder) {
        self.builder = Some(builder);
    }

    /// Adds or replaces a named recipe.
    pub fn register_recipe(&mut self, name: impl Into<String>, steps: Vec<BuildStep>) {
        self.recipes.insert(name.into(), steps);
    }

    pub fn recipe(&self, name: &str) -> Option<&[BuildStep]> {
        self.recipes.get(name).map(Vec::as_slice)
    }

    pub fn recipe_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recipes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Drives a single step on the active builder.
    pub fn run_step(&mut self, step: BuildStep) -> Result<(), DirectorError> {
        match self.builder.as_mut() {
            Some(builder) => {
                builder.produce(step)?;
                Ok(())
            }
            None => Err(DirectorError::NoBuilder),
        }
    }

    /// Replays every step of the named recipe, in order, on the active
    /// builder.
    pub fn run_recipe(&mut self, name: &str) -> Result<(), DirectorError> {
        let steps = self
            .recipes
            .get(name)
            .cloned()
            .ok_or_else(|| DirectorError::UnknownRecipe {
                name: name.to_string(),
            })?;
        for step in steps {
            self.run_step(step)?;
        }
        Ok(())
    }
}

impl Default for Director<'_> {
    fn default() -> Self {
        Self::new()
    }
}
