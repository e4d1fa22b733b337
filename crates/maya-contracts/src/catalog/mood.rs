use super::blocks::MoodBlock;

pub const DEFAULT_MOOD: &str = "soft-natural-ease";

pub const MOOD_BLOCKS: &[MoodBlock] = &[
    MoodBlock {
        key: "quiet-luxury-calm",
        name: "Quiet Luxury Calm",
        description: "Understated wealth, unhurried and self-assured",
        emotion: "composed",
        expression: "soft closed-mouth smile, relaxed brow",
        atmosphere: "serene, expensive stillness with nothing to prove",
        color_grade: "creamy neutrals, lifted blacks",
        keywords: &["old money", "effortless", "refined", "understated"],
        tags: &[
            "luxury",
            "calm",
            "clean-minimal",
            "editorial",
            "indoors-modern",
            "hotel",
            "morning",
            "cashmere",
        ],
    },
    MoodBlock {
        key: "moody-night-energy",
        name: "Moody Night Energy",
        description: "After-dark tension with deep shadows and a hint of secrecy",
        emotion: "intrigued",
        expression: "direct gaze, lips slightly parted",
        atmosphere: "moody nocturnal tension, cinematic shadows",
        color_grade: "teal shadows, warm practical highlights",
        keywords: &["after dark", "noir", "tension", "mystery"],
        tags: &[
            "night",
            "blue-hour",
            "moody",
            "mysterious",
            "dramatic",
            "cinematic",
            "outdoors-urban",
            "elevator",
            "indoors-metal",
        ],
    },
    MoodBlock {
        key: "golden-warmth",
        name: "Golden Warmth",
        description: "Sun-kissed glow and tender warmth",
        emotion: "content",
        expression: "eyes softly squinting into the sun, gentle smile",
        atmosphere: "warm nostalgic glow, hazy and tender",
        color_grade: "honey highlights, warm film tones",
        keywords: &["sun-kissed", "warm", "nostalgic", "hazy"],
        tags: &[
            "golden-hour",
            "romantic",
            "calm",
            "coastal",
            "outdoors-nature",
            "rooftop",
            "candid",
            "linen",
        ],
    },
    MoodBlock {
        key: "playful-candid-joy",
        name: "Playful Candid Joy",
        description: "Mid-laugh spontaneity that feels caught rather than posed",
        emotion: "delighted",
        expression: "genuine laugh, crinkled eyes",
        atmosphere: "light, spontaneous and joyful",
        color_grade: "bright true-to-life color",
        keywords: &["laughing", "spontaneous", "carefree", "fun"],
        tags: &[
            "playful",
            "energetic",
            "candid",
            "daytime",
            "midday",
            "outdoors-urban",
            "street",
            "cafe",
        ],
    },
    MoodBlock {
        key: "confident-power",
        name: "Confident Power",
        description: "Boardroom-ready authority with editorial polish",
        emotion: "assured",
        expression: "steady chin-level gaze, neutral mouth",
        atmosphere: "commanding, polished and decisive",
        color_grade: "cool neutral grade, crisp contrast",
        keywords: &["powerful", "boss", "decisive", "sharp"],
        tags: &[
            "confident",
            "editorial",
            "dramatic",
            "luxury",
            "indoors-modern",
            "office",
            "leather",
        ],
    },
    MoodBlock {
        key: "cozy-intimate-softness",
        name: "Cozy Intimate Softness",
        description: "Slow, private moments wrapped in soft textures",
        emotion: "at ease",
        expression: "sleepy half-smile, eyes lowered",
        atmosphere: "soft, intimate and unhurried",
        color_grade: "warm muted pastels",
        keywords: &["cozy", "slow morning", "soft", "intimate"],
        tags: &[
            "calm",
            "tired",
            "romantic",
            "candid",
            "indoors-cozy",
            "bedroom",
            "morning",
            "knit",
            "book",
            "coffee",
        ],
    },
    MoodBlock {
        key: "cinematic-melancholy",
        name: "Cinematic Melancholy",
        description: "A quiet, wistful film-still feeling",
        emotion: "reflective",
        expression: "distant gaze past the lens",
        atmosphere: "wistful film-still melancholy",
        color_grade: "desaturated greens, soft grain",
        keywords: &["wistful", "film still", "rain", "longing"],
        tags: &[
            "cinematic",
            "moody",
            "mysterious",
            "blue-hour",
            "vehicle",
            "car",
            "airport",
            "glass",
        ],
    },
    MoodBlock {
        key: "clean-editorial-poise",
        name: "Clean Editorial Poise",
        description: "Minimal, magazine-cover precision",
        emotion: "poised",
        expression: "calm neutral expression, defined jaw",
        atmosphere: "clean, precise editorial calm",
        color_grade: "neutral grade, bright whites",
        keywords: &["magazine", "minimal", "crisp", "precise"],
        tags: &[
            "editorial",
            "clean-minimal",
            "glossy",
            "studio",
            "confident",
        ],
    },
    MoodBlock {
        key: "sun-drenched-freedom",
        name: "Sun-Drenched Freedom",
        description: "Vacation energy, salt air and bright light",
        emotion: "free",
        expression: "open smile, head tilted back",
        atmosphere: "bright, breezy vacation freedom",
        color_grade: "saturated blues, sunlit skin",
        keywords: &["vacation", "breezy", "salt air", "holiday"],
        tags: &[
            "energetic",
            "playful",
            "coastal",
            "beach",
            "pool",
            "yacht",
            "midday",
            "bali",
            "santorini",
        ],
    },
    MoodBlock {
        key: "glam-after-dark",
        name: "Glam After Dark",
        description: "Flash-lit glamour for a night out",
        emotion: "magnetic",
        expression: "knowing smirk over the shoulder",
        atmosphere: "glossy nightlife glamour",
        color_grade: "high-contrast flash, rich blacks",
        keywords: &["nightlife", "flash", "glam", "party"],
        tags: &[
            "glossy",
            "night",
            "luxury",
            "confident",
            "restaurant",
            "hotel",
            "wine",
            "satin",
        ],
    },
    MoodBlock {
        key: DEFAULT_MOOD,
        name: "Soft Natural Ease",
        description: "Relaxed, approachable everyday presence",
        emotion: "relaxed",
        expression: "natural soft smile",
        atmosphere: "easy, natural and approachable",
        color_grade: "true-to-life soft tones",
        keywords: &["natural", "approachable", "everyday"],
        tags: &["candid", "daytime", "indoors-neutral"],
    },
];
