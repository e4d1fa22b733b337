mod analyzer;
mod keyword_tables;
mod profile;

pub use analyzer::{analyze, contains_term, tokenize};
pub use profile::{
    Aesthetic, CoreScene, Energy, Environment, Location, Material, SceneObject, SemanticProfile,
    TimeOfDay,
};
