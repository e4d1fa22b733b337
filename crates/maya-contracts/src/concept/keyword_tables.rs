use super::profile::{
    Aesthetic, CoreScene, Energy, Environment, Location, Material, SceneObject, TimeOfDay,
};

/// One row of an ordered keyword table. Tables are evaluated top to bottom;
/// for single-valued fields the first row with a matching keyword wins.
#[derive(Clone, Copy, Debug)]
pub(crate) struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub result: T,
}

pub(crate) const SCENE_RULES: &[KeywordRule<CoreScene>] = &[
    KeywordRule {
        keywords: &["elevator", "lift"],
        result: CoreScene::Elevator,
    },
    KeywordRule {
        keywords: &[
            "car",
            "driver seat",
            "passenger seat",
            "road trip",
            "convertible",
            "backseat",
        ],
        result: CoreScene::Car,
    },
    KeywordRule {
        keywords: &["gym", "workout", "weights", "treadmill", "pilates"],
        result: CoreScene::Gym,
    },
    KeywordRule {
        keywords: &["bathroom", "bathtub", "bath", "vanity", "shower"],
        result: CoreScene::Bathroom,
    },
    KeywordRule {
        keywords: &["bedroom", "bed", "sheets", "pillow", "duvet"],
        result: CoreScene::Bedroom,
    },
    KeywordRule {
        keywords: &["kitchen", "cooking", "baking", "countertop"],
        result: CoreScene::Kitchen,
    },
    KeywordRule {
        keywords: &["cafe", "café", "coffee shop", "espresso bar", "bakery", "latte"],
        result: CoreScene::Cafe,
    },
    KeywordRule {
        keywords: &[
            "restaurant",
            "dinner",
            "bistro",
            "wine bar",
            "cocktail bar",
            "bar",
        ],
        result: CoreScene::Restaurant,
    },
    KeywordRule {
        keywords: &["office", "desk", "meeting", "boardroom", "coworking"],
        result: CoreScene::Office,
    },
    KeywordRule {
        keywords: &["library", "bookstore", "bookshop"],
        result: CoreScene::Library,
    },
    KeywordRule {
        keywords: &["hotel", "suite", "penthouse", "lobby"],
        result: CoreScene::Hotel,
    },
    KeywordRule {
        keywords: &["airport", "terminal", "airplane", "plane", "flight"],
        result: CoreScene::Airport,
    },
    KeywordRule {
        keywords: &["studio", "backdrop", "seamless", "photoshoot"],
        result: CoreScene::Studio,
    },
    KeywordRule {
        keywords: &["rooftop", "roof", "terrace", "skyline"],
        result: CoreScene::Rooftop,
    },
    KeywordRule {
        keywords: &["pool", "poolside", "swimming"],
        result: CoreScene::Pool,
    },
    KeywordRule {
        keywords: &["yacht", "boat", "sailing", "deck"],
        result: CoreScene::Yacht,
    },
    KeywordRule {
        keywords: &["beach", "shore", "sand", "waves", "ocean", "seaside"],
        result: CoreScene::Beach,
    },
    KeywordRule {
        keywords: &["garden", "park", "greenhouse", "meadow", "field"],
        result: CoreScene::Garden,
    },
    KeywordRule {
        keywords: &["forest", "woods", "trail", "hiking"],
        result: CoreScene::Forest,
    },
    KeywordRule {
        keywords: &["mountain", "cabin", "alps", "snow", "ski"],
        result: CoreScene::Mountain,
    },
    KeywordRule {
        keywords: &["desert", "dunes", "joshua tree"],
        result: CoreScene::Desert,
    },
    KeywordRule {
        keywords: &["street", "sidewalk", "crosswalk", "alley", "storefront", "boulevard"],
        result: CoreScene::Street,
    },
];

/// Only consulted when no scene matched.
pub(crate) const ENVIRONMENT_FALLBACK_RULES: &[KeywordRule<Environment>] = &[
    KeywordRule {
        keywords: &["city", "urban", "downtown", "neon", "nightlife", "skyscraper"],
        result: Environment::OutdoorsUrban,
    },
    KeywordRule {
        keywords: &["sea", "coast", "lake", "island", "tropical"],
        result: Environment::Coastal,
    },
    KeywordRule {
        keywords: &[
            "nature",
            "outdoor",
            "outdoors",
            "outside",
            "countryside",
            "wildflowers",
        ],
        result: Environment::OutdoorsNature,
    },
    KeywordRule {
        keywords: &[
            "home",
            "apartment",
            "living room",
            "couch",
            "sofa",
            "fireplace",
            "indoors",
        ],
        result: Environment::IndoorsCozy,
    },
    KeywordRule {
        keywords: &["modern", "loft", "gallery", "museum"],
        result: Environment::IndoorsModern,
    },
];

pub(crate) const TIME_RULES: &[KeywordRule<TimeOfDay>] = &[
    KeywordRule {
        keywords: &["golden hour", "sunset", "sunrise", "dusk", "magic hour"],
        result: TimeOfDay::GoldenHour,
    },
    KeywordRule {
        keywords: &["blue hour", "twilight"],
        result: TimeOfDay::BlueHour,
    },
    KeywordRule {
        keywords: &[
            "night",
            "midnight",
            "nighttime",
            "evening",
            "after dark",
            "nightlife",
        ],
        result: TimeOfDay::Night,
    },
    KeywordRule {
        keywords: &["morning", "breakfast", "dawn", "wake up", "brunch"],
        result: TimeOfDay::Morning,
    },
    KeywordRule {
        keywords: &["noon", "midday", "afternoon", "lunch", "harsh sun"],
        result: TimeOfDay::Midday,
    },
];

pub(crate) const ENERGY_RULES: &[KeywordRule<Energy>] = &[
    KeywordRule {
        keywords: &["mysterious", "mystery", "enigmatic", "secret", "shadow", "dark"],
        result: Energy::Mysterious,
    },
    KeywordRule {
        keywords: &["dramatic", "drama", "intense", "bold", "storm", "stormy"],
        result: Energy::Dramatic,
    },
    KeywordRule {
        keywords: &["confident", "boss", "ceo", "strong", "fierce", "power", "powerful"],
        result: Energy::Confident,
    },
    KeywordRule {
        keywords: &["playful", "fun", "silly", "laugh", "laughing", "cheeky", "flirty"],
        result: Energy::Playful,
    },
    KeywordRule {
        keywords: &[
            "calm", "peaceful", "serene", "quiet", "slow", "cozy", "relaxed", "chill",
        ],
        result: Energy::Calm,
    },
    KeywordRule {
        keywords: &["romantic", "love", "date", "candlelight", "intimate"],
        result: Energy::Romantic,
    },
    KeywordRule {
        keywords: &["energetic", "energy", "dynamic", "dance", "dancing", "running", "vibrant"],
        result: Energy::Energetic,
    },
    KeywordRule {
        keywords: &["tired", "sleepy", "exhausted", "lazy", "hungover"],
        result: Energy::Tired,
    },
];

pub(crate) const AESTHETIC_RULES: &[KeywordRule<Aesthetic>] = &[
    KeywordRule {
        keywords: &["editorial", "vogue", "magazine", "high fashion", "fashion shoot"],
        result: Aesthetic::Editorial,
    },
    KeywordRule {
        keywords: &["moody", "dark", "brooding", "noir", "shadowy"],
        result: Aesthetic::Moody,
    },
    KeywordRule {
        keywords: &["cinematic", "film", "movie", "35mm", "anamorphic"],
        result: Aesthetic::Cinematic,
    },
    KeywordRule {
        keywords: &["minimal", "minimalist", "clean", "simple", "white"],
        result: Aesthetic::CleanMinimal,
    },
    KeywordRule {
        keywords: &[
            "luxury",
            "luxurious",
            "expensive",
            "rich",
            "designer",
            "old money",
            "penthouse",
        ],
        result: Aesthetic::Luxury,
    },
    KeywordRule {
        keywords: &["glossy", "shiny", "flash", "y2k", "glam", "glamour"],
        result: Aesthetic::Glossy,
    },
    KeywordRule {
        keywords: &["candid", "casual", "selfie", "snapshot", "everyday", "iphone"],
        result: Aesthetic::Candid,
    },
];

pub(crate) const LOCATION_RULES: &[KeywordRule<Location>] = &[
    KeywordRule {
        keywords: &["paris", "parisian", "eiffel"],
        result: Location::Paris,
    },
    KeywordRule {
        keywords: &["london"],
        result: Location::London,
    },
    KeywordRule {
        keywords: &["new york", "nyc", "manhattan", "brooklyn"],
        result: Location::NewYork,
    },
    KeywordRule {
        keywords: &["tokyo", "shibuya"],
        result: Location::Tokyo,
    },
    KeywordRule {
        keywords: &["milan", "milano"],
        result: Location::Milan,
    },
    KeywordRule {
        keywords: &["los angeles", "hollywood", "malibu"],
        result: Location::LosAngeles,
    },
    KeywordRule {
        keywords: &["miami"],
        result: Location::Miami,
    },
    KeywordRule {
        keywords: &["dubai"],
        result: Location::Dubai,
    },
    KeywordRule {
        keywords: &["amsterdam"],
        result: Location::Amsterdam,
    },
    KeywordRule {
        keywords: &["barcelona"],
        result: Location::Barcelona,
    },
    KeywordRule {
        keywords: &["bali", "ubud"],
        result: Location::Bali,
    },
    KeywordRule {
        keywords: &["copenhagen", "scandinavian"],
        result: Location::Copenhagen,
    },
    KeywordRule {
        keywords: &["santorini", "greek island"],
        result: Location::Santorini,
    },
];

pub(crate) const MATERIAL_RULES: &[KeywordRule<Material>] = &[
    KeywordRule {
        keywords: &["marble"],
        result: Material::Marble,
    },
    KeywordRule {
        keywords: &["velvet"],
        result: Material::Velvet,
    },
    KeywordRule {
        keywords: &["leather"],
        result: Material::Leather,
    },
    KeywordRule {
        keywords: &["silk", "silky"],
        result: Material::Silk,
    },
    KeywordRule {
        keywords: &["satin"],
        result: Material::Satin,
    },
    KeywordRule {
        keywords: &["linen"],
        result: Material::Linen,
    },
    KeywordRule {
        keywords: &["denim", "jeans"],
        result: Material::Denim,
    },
    KeywordRule {
        keywords: &["knit", "knitted", "sweater", "wool"],
        result: Material::Knit,
    },
    KeywordRule {
        keywords: &["cashmere"],
        result: Material::Cashmere,
    },
    KeywordRule {
        keywords: &["chrome", "metal", "metallic", "steel"],
        result: Material::Chrome,
    },
    KeywordRule {
        keywords: &["glass", "window"],
        result: Material::Glass,
    },
    KeywordRule {
        keywords: &["concrete", "brutalist"],
        result: Material::Concrete,
    },
    KeywordRule {
        keywords: &["wood", "wooden", "oak"],
        result: Material::Wood,
    },
];

pub(crate) const OBJECT_RULES: &[KeywordRule<SceneObject>] = &[
    KeywordRule {
        keywords: &["coffee", "latte", "espresso", "cappuccino", "mug"],
        result: SceneObject::Coffee,
    },
    KeywordRule {
        keywords: &["book", "novel", "reading", "magazine"],
        result: SceneObject::Book,
    },
    KeywordRule {
        keywords: &["phone", "selfie", "iphone"],
        result: SceneObject::Phone,
    },
    KeywordRule {
        keywords: &["mirror", "reflection"],
        result: SceneObject::Mirror,
    },
    KeywordRule {
        keywords: &["flowers", "bouquet", "roses", "peonies"],
        result: SceneObject::Flowers,
    },
    KeywordRule {
        keywords: &["wine", "champagne", "cocktail", "martini"],
        result: SceneObject::Wine,
    },
    KeywordRule {
        keywords: &["laptop", "macbook", "computer"],
        result: SceneObject::Laptop,
    },
    KeywordRule {
        keywords: &["sunglasses", "shades"],
        result: SceneObject::Sunglasses,
    },
    KeywordRule {
        keywords: &["candle", "candles", "candlelight"],
        result: SceneObject::Candle,
    },
    KeywordRule {
        keywords: &["handbag", "purse", "bag", "tote"],
        result: SceneObject::Handbag,
    },
    KeywordRule {
        keywords: &["camera", "film camera", "polaroid"],
        result: SceneObject::Camera,
    },
    KeywordRule {
        keywords: &["luggage", "suitcase", "passport"],
        result: SceneObject::Luggage,
    },
    KeywordRule {
        keywords: &["plant", "plants", "monstera"],
        result: SceneObject::Plant,
    },
];
