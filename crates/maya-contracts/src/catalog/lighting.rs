use super::blocks::LightingBlock;

pub const DEFAULT_LIGHTING: &str = "window-natural";

pub const LIGHTING_BLOCKS: &[LightingBlock] = &[
    LightingBlock {
        key: DEFAULT_LIGHTING,
        name: "Window Natural",
        description: "soft natural window light",
        angle: "side light from a large window at 45 degrees",
        softness: "soft and diffused",
        shadows: "gentle falloff on the far cheek",
        texture: "visible natural skin texture",
        skin_treatment: "true-to-life skin tones",
        keywords: &["window", "daylight", "natural light"],
        tags: &[
            "indoors-cozy",
            "indoors-neutral",
            "bedroom",
            "cafe",
            "kitchen",
            "morning",
            "calm",
            "candid",
        ],
    },
    LightingBlock {
        key: "golden-hour-backlight",
        name: "Golden Hour Backlight",
        description: "warm golden hour backlight",
        angle: "low sun behind the subject",
        softness: "warm and hazy",
        shadows: "glowing rim light around hair and shoulders",
        texture: "subtle lens flare, soft haze",
        skin_treatment: "sun-warmed glowing skin",
        keywords: &["golden hour", "sunset", "backlit", "flare"],
        tags: &[
            "golden-hour",
            "coastal",
            "outdoors-nature",
            "rooftop",
            "romantic",
            "beach",
        ],
    },
    LightingBlock {
        key: "neon-night-glow",
        name: "Neon Night Glow",
        description: "colored neon and street light spill",
        angle: "mixed side sources from signage",
        softness: "hard-edged colored light",
        shadows: "deep shadows with colored edges",
        texture: "reflective highlights on wet surfaces",
        skin_treatment: "skin tinted by magenta and cyan spill",
        keywords: &["neon", "city lights", "signage"],
        tags: &[
            "night",
            "outdoors-urban",
            "street",
            "moody",
            "cinematic",
            "tokyo",
        ],
    },
    LightingBlock {
        key: "hard-flash-editorial",
        name: "Hard Flash Editorial",
        description: "direct on-camera flash",
        angle: "frontal flash at lens height",
        softness: "hard and punchy",
        shadows: "crisp drop shadow behind the subject",
        texture: "glossy specular highlights",
        skin_treatment: "luminous flash-lit skin",
        keywords: &["flash", "paparazzi", "party"],
        tags: &[
            "glossy",
            "editorial",
            "night",
            "confident",
            "restaurant",
            "wine",
        ],
    },
    LightingBlock {
        key: "overhead-practical-mix",
        name: "Overhead Practical Mix",
        description: "overhead practical lights mixed with ambient bounce",
        angle: "top-down from ceiling fixtures",
        softness: "moderately hard",
        shadows: "defined shadows under brows and chin",
        texture: "reflections on metal and mirror surfaces",
        skin_treatment: "neutral skin with controlled shine",
        keywords: &["overhead", "fluorescent", "mirror glow"],
        tags: &[
            "indoors-metal",
            "elevator",
            "gym",
            "dramatic",
            "mirror",
            "chrome",
        ],
    },
    LightingBlock {
        key: "soft-studio-key",
        name: "Soft Studio Key",
        description: "large softbox key light",
        angle: "key light at 30 degrees above eye line",
        softness: "very soft, wrapped",
        shadows: "minimal, filled from the opposite side",
        texture: "clean even texture",
        skin_treatment: "polished yet natural skin",
        keywords: &["softbox", "studio light", "beauty light"],
        tags: &["studio", "clean-minimal", "editorial", "glossy"],
    },
    LightingBlock {
        key: "overcast-diffused",
        name: "Overcast Diffused",
        description: "bright overcast sky light",
        angle: "broad top light from open sky",
        softness: "even and shadowless",
        shadows: "barely there",
        texture: "matte natural texture",
        skin_treatment: "even true-to-life tones",
        keywords: &["overcast", "cloudy", "open shade"],
        tags: &[
            "outdoors-urban",
            "outdoors-nature",
            "garden",
            "forest",
            "calm",
            "candid",
            "daytime",
            "london",
        ],
    },
    LightingBlock {
        key: "harsh-midday-sun",
        name: "Harsh Midday Sun",
        description: "bright high sun",
        angle: "overhead sun",
        softness: "hard and bright",
        shadows: "crisp graphic shadows",
        texture: "sparkling highlights on water and skin",
        skin_treatment: "sunlit dewy skin",
        keywords: &["summer sun", "bright", "high noon"],
        tags: &["midday", "coastal", "beach", "pool", "yacht", "energetic", "desert"],
    },
    LightingBlock {
        key: "candlelight-warm",
        name: "Candlelight Warm",
        description: "warm candle and tungsten glow",
        angle: "low warm sources below eye level",
        softness: "soft and flickering",
        shadows: "deep warm shadows",
        texture: "grainy low-light texture",
        skin_treatment: "warm amber skin",
        keywords: &["candles", "tungsten", "dinner light"],
        tags: &["romantic", "night", "indoors-cozy", "restaurant", "candle", "wine"],
    },
    LightingBlock {
        key: "blue-hour-ambient",
        name: "Blue Hour Ambient",
        description: "cool blue hour ambient light",
        angle: "soft sky light with distant city lights",
        softness: "soft and cool",
        shadows: "low contrast, bluish",
        texture: "smooth tonal gradations",
        skin_treatment: "cool tones balanced with warm practicals",
        keywords: &["blue hour", "twilight", "dusk sky"],
        tags: &["blue-hour", "cinematic", "mysterious", "rooftop", "outdoors-urban"],
    },
    LightingBlock {
        key: "car-window-daylight",
        name: "Car Window Daylight",
        description: "daylight through car windows",
        angle: "side light through the passenger window",
        softness: "soft with moving highlights",
        shadows: "framed shadows from the window pillar",
        texture: "reflections on glass",
        skin_treatment: "natural skin with light sheen",
        keywords: &["car window", "road trip", "passenger"],
        tags: &["vehicle", "car", "daytime", "candid", "glass"],
    },
];
