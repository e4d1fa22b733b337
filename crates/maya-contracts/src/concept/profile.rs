use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoreScene {
    Elevator,
    Car,
    Gym,
    Bathroom,
    Bedroom,
    Kitchen,
    Cafe,
    Restaurant,
    Office,
    Library,
    Hotel,
    Airport,
    Studio,
    Rooftop,
    Pool,
    Yacht,
    Beach,
    Garden,
    Forest,
    Mountain,
    Desert,
    Street,
}

impl CoreScene {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreScene::Elevator => "elevator",
            CoreScene::Car => "car",
            CoreScene::Gym => "gym",
            CoreScene::Bathroom => "bathroom",
            CoreScene::Bedroom => "bedroom",
            CoreScene::Kitchen => "kitchen",
            CoreScene::Cafe => "cafe",
            CoreScene::Restaurant => "restaurant",
            CoreScene::Office => "office",
            CoreScene::Library => "library",
            CoreScene::Hotel => "hotel",
            CoreScene::Airport => "airport",
            CoreScene::Studio => "studio",
            CoreScene::Rooftop => "rooftop",
            CoreScene::Pool => "pool",
            CoreScene::Yacht => "yacht",
            CoreScene::Beach => "beach",
            CoreScene::Garden => "garden",
            CoreScene::Forest => "forest",
            CoreScene::Mountain => "mountain",
            CoreScene::Desert => "desert",
            CoreScene::Street => "street",
        }
    }

    /// Coarse environment class implied by the scene.
    pub fn environment(&self) -> Environment {
        match self {
            CoreScene::Elevator | CoreScene::Gym => Environment::IndoorsMetal,
            CoreScene::Car => Environment::Vehicle,
            CoreScene::Bedroom
            | CoreScene::Kitchen
            | CoreScene::Cafe
            | CoreScene::Restaurant
            | CoreScene::Library => Environment::IndoorsCozy,
            CoreScene::Bathroom | CoreScene::Office | CoreScene::Hotel | CoreScene::Airport => {
                Environment::IndoorsModern
            }
            CoreScene::Studio => Environment::Studio,
            CoreScene::Rooftop | CoreScene::Street => Environment::OutdoorsUrban,
            CoreScene::Pool | CoreScene::Yacht | CoreScene::Beach => Environment::Coastal,
            CoreScene::Garden | CoreScene::Forest | CoreScene::Mountain | CoreScene::Desert => {
                Environment::OutdoorsNature
            }
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    IndoorsMetal,
    IndoorsCozy,
    IndoorsModern,
    #[default]
    IndoorsNeutral,
    Studio,
    Vehicle,
    OutdoorsUrban,
    OutdoorsNature,
    Coastal,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::IndoorsMetal => "indoors-metal",
            Environment::IndoorsCozy => "indoors-cozy",
            Environment::IndoorsModern => "indoors-modern",
            Environment::IndoorsNeutral => "indoors-neutral",
            Environment::Studio => "studio",
            Environment::Vehicle => "vehicle",
            Environment::OutdoorsUrban => "outdoors-urban",
            Environment::OutdoorsNature => "outdoors-nature",
            Environment::Coastal => "coastal",
        }
    }

    pub fn is_outdoors(&self) -> bool {
        matches!(
            self,
            Environment::OutdoorsUrban | Environment::OutdoorsNature | Environment::Coastal
        )
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    GoldenHour,
    BlueHour,
    Night,
    Morning,
    Midday,
    #[default]
    Daytime,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::GoldenHour => "golden-hour",
            TimeOfDay::BlueHour => "blue-hour",
            TimeOfDay::Night => "night",
            TimeOfDay::Morning => "morning",
            TimeOfDay::Midday => "midday",
            TimeOfDay::Daytime => "daytime",
        }
    }

    /// Short phrase used when describing the environment in a prompt.
    pub fn phrase(&self) -> &'static str {
        match self {
            TimeOfDay::GoldenHour => "at golden hour",
            TimeOfDay::BlueHour => "during blue hour",
            TimeOfDay::Night => "at night",
            TimeOfDay::Morning => "in the morning",
            TimeOfDay::Midday => "at midday",
            TimeOfDay::Daytime => "during the day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Energy {
    Mysterious,
    Dramatic,
    Confident,
    Playful,
    Calm,
    Romantic,
    Energetic,
    Tired,
}

impl Energy {
    pub const ALL: [Energy; 8] = [
        Energy::Mysterious,
        Energy::Dramatic,
        Energy::Confident,
        Energy::Playful,
        Energy::Calm,
        Energy::Romantic,
        Energy::Energetic,
        Energy::Tired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::Mysterious => "mysterious",
            Energy::Dramatic => "dramatic",
            Energy::Confident => "confident",
            Energy::Playful => "playful",
            Energy::Calm => "calm",
            Energy::Romantic => "romantic",
            Energy::Energetic => "energetic",
            Energy::Tired => "tired",
        }
    }

    pub fn from_key(raw: &str) -> Option<Energy> {
        let key = raw.trim().to_ascii_lowercase();
        Energy::ALL.into_iter().find(|energy| energy.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aesthetic {
    Editorial,
    Moody,
    Cinematic,
    CleanMinimal,
    Luxury,
    Glossy,
    Candid,
}

impl Aesthetic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aesthetic::Editorial => "editorial",
            Aesthetic::Moody => "moody",
            Aesthetic::Cinematic => "cinematic",
            Aesthetic::CleanMinimal => "clean-minimal",
            Aesthetic::Luxury => "luxury",
            Aesthetic::Glossy => "glossy",
            Aesthetic::Candid => "candid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Paris,
    London,
    NewYork,
    Tokyo,
    Milan,
    LosAngeles,
    Miami,
    Dubai,
    Amsterdam,
    Barcelona,
    Bali,
    Copenhagen,
    Santorini,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Paris => "paris",
            Location::London => "london",
            Location::NewYork => "new-york",
            Location::Tokyo => "tokyo",
            Location::Milan => "milan",
            Location::LosAngeles => "los-angeles",
            Location::Miami => "miami",
            Location::Dubai => "dubai",
            Location::Amsterdam => "amsterdam",
            Location::Barcelona => "barcelona",
            Location::Bali => "bali",
            Location::Copenhagen => "copenhagen",
            Location::Santorini => "santorini",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Paris => "Paris",
            Location::London => "London",
            Location::NewYork => "New York",
            Location::Tokyo => "Tokyo",
            Location::Milan => "Milan",
            Location::LosAngeles => "Los Angeles",
            Location::Miami => "Miami",
            Location::Dubai => "Dubai",
            Location::Amsterdam => "Amsterdam",
            Location::Barcelona => "Barcelona",
            Location::Bali => "Bali",
            Location::Copenhagen => "Copenhagen",
            Location::Santorini => "Santorini",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    Marble,
    Velvet,
    Leather,
    Silk,
    Satin,
    Linen,
    Denim,
    Knit,
    Cashmere,
    Chrome,
    Glass,
    Concrete,
    Wood,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Marble => "marble",
            Material::Velvet => "velvet",
            Material::Leather => "leather",
            Material::Silk => "silk",
            Material::Satin => "satin",
            Material::Linen => "linen",
            Material::Denim => "denim",
            Material::Knit => "knit",
            Material::Cashmere => "cashmere",
            Material::Chrome => "chrome",
            Material::Glass => "glass",
            Material::Concrete => "concrete",
            Material::Wood => "wood",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneObject {
    Coffee,
    Book,
    Phone,
    Mirror,
    Flowers,
    Wine,
    Laptop,
    Sunglasses,
    Candle,
    Handbag,
    Camera,
    Luggage,
    Plant,
}

impl SceneObject {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneObject::Coffee => "coffee",
            SceneObject::Book => "book",
            SceneObject::Phone => "phone",
            SceneObject::Mirror => "mirror",
            SceneObject::Flowers => "flowers",
            SceneObject::Wine => "wine",
            SceneObject::Laptop => "laptop",
            SceneObject::Sunglasses => "sunglasses",
            SceneObject::Candle => "candle",
            SceneObject::Handbag => "handbag",
            SceneObject::Camera => "camera",
            SceneObject::Luggage => "luggage",
            SceneObject::Plant => "plant",
        }
    }
}

/// Structured reading of a free-text creative brief.
///
/// Every field has a defined default, so an empty brief still yields a
/// usable profile (`indoors-neutral`, `daytime`, no tone or style tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticProfile {
    pub core_scene: Option<CoreScene>,
    pub environment: Environment,
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub energy: BTreeSet<Energy>,
    #[serde(default)]
    pub aesthetic: BTreeSet<Aesthetic>,
    pub location: Option<Location>,
    #[serde(default)]
    pub materials: BTreeSet<Material>,
    #[serde(default)]
    pub objects: BTreeSet<SceneObject>,
    #[serde(default)]
    pub raw_keywords: Vec<String>,
}

impl SemanticProfile {
    /// Tag vocabulary matched against catalog block tags.
    pub fn tags(&self) -> BTreeSet<&'static str> {
        let mut tags = BTreeSet::new();
        if let Some(scene) = self.core_scene {
            tags.insert(scene.as_str());
        }
        tags.insert(self.environment.as_str());
        tags.insert(self.time_of_day.as_str());
        tags.extend(self.energy.iter().map(Energy::as_str));
        tags.extend(self.aesthetic.iter().map(Aesthetic::as_str));
        if let Some(location) = self.location {
            tags.insert(location.as_str());
        }
        tags.extend(self.materials.iter().map(Material::as_str));
        tags.extend(self.objects.iter().map(SceneObject::as_str));
        tags
    }

    pub fn has_energy(&self, energy: Energy) -> bool {
        self.energy.contains(&energy)
    }

    pub fn has_aesthetic(&self, aesthetic: Aesthetic) -> bool {
        self.aesthetic.contains(&aesthetic)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreScene, Energy, Environment, SemanticProfile, TimeOfDay};

    #[test]
    fn default_profile_resolves_to_generic_classes() {
        let profile = SemanticProfile::default();
        assert_eq!(profile.environment, Environment::IndoorsNeutral);
        assert_eq!(profile.time_of_day, TimeOfDay::Daytime);
        let tags = profile.tags();
        assert!(tags.contains("indoors-neutral"));
        assert!(tags.contains("daytime"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn tags_include_scene_and_energy() {
        let mut profile = SemanticProfile {
            core_scene: Some(CoreScene::Elevator),
            environment: CoreScene::Elevator.environment(),
            time_of_day: TimeOfDay::Night,
            ..SemanticProfile::default()
        };
        profile.energy.insert(Energy::Dramatic);
        let tags = profile.tags();
        assert!(tags.contains("elevator"));
        assert!(tags.contains("indoors-metal"));
        assert!(tags.contains("night"));
        assert!(tags.contains("dramatic"));
    }

    #[test]
    fn energy_from_key_is_case_insensitive() {
        assert_eq!(Energy::from_key(" Playful "), Some(Energy::Playful));
        assert_eq!(Energy::from_key("sleepy"), None);
    }

    #[test]
    fn profile_serializes_kebab_case_classes() -> anyhow::Result<()> {
        let profile = SemanticProfile {
            core_scene: Some(CoreScene::Rooftop),
            environment: Environment::OutdoorsUrban,
            time_of_day: TimeOfDay::GoldenHour,
            ..SemanticProfile::default()
        };
        let value = serde_json::to_value(&profile)?;
        assert_eq!(value["core_scene"], serde_json::json!("rooftop"));
        assert_eq!(value["environment"], serde_json::json!("outdoors-urban"));
        assert_eq!(value["time_of_day"], serde_json::json!("golden-hour"));
        Ok(())
    }
}
