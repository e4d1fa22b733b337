use super::blocks::ScenarioBlock;

pub const DEFAULT_SCENARIO: &str = "apartment-lifestyle";

pub const SCENARIO_BLOCKS: &[ScenarioBlock] = &[
    ScenarioBlock {
        key: "elevator-mirror-moment",
        name: "Elevator Mirror Moment",
        description: "Outfit check in a mirrored elevator",
        setting: "inside a mirrored elevator",
        environment_detail: "brushed steel walls, mirrored panels, floor indicator glowing",
        props: "phone",
        keywords: &["elevator", "mirror", "steel", "outfit check"],
        tags: &["elevator", "indoors-metal", "mirror", "chrome", "phone", "night"],
    },
    ScenarioBlock {
        key: "bedroom-cozy",
        name: "Bedroom Cozy",
        description: "Slow morning in a soft, lived-in bedroom",
        setting: "in a sunlit bedroom",
        environment_detail: "rumpled white linen sheets, stacked pillows, a mug on the nightstand",
        props: "book, coffee mug",
        keywords: &["bed", "sheets", "pillows", "slow morning"],
        tags: &[
            "bedroom",
            "indoors-cozy",
            "morning",
            "calm",
            "tired",
            "book",
            "coffee",
            "linen",
        ],
    },
    ScenarioBlock {
        key: "cafe-window-seat",
        name: "Cafe Window Seat",
        description: "Window seat at a neighborhood cafe",
        setting: "at a cafe window seat",
        environment_detail: "marble table, latte art, street reflections in the glass",
        props: "coffee cup",
        keywords: &["cafe", "latte", "window seat", "espresso"],
        tags: &["cafe", "indoors-cozy", "coffee", "marble", "glass", "paris", "candid"],
    },
    ScenarioBlock {
        key: "kitchen-morning-ritual",
        name: "Kitchen Morning Ritual",
        description: "Breakfast ritual in a bright kitchen",
        setting: "in a bright home kitchen",
        environment_detail: "stone countertop, fresh fruit, morning light across the counter",
        props: "coffee, bowl of fruit",
        keywords: &["kitchen", "breakfast", "countertop"],
        tags: &["kitchen", "indoors-cozy", "morning", "coffee", "wood", "marble"],
    },
    ScenarioBlock {
        key: "rooftop-golden-skyline",
        name: "Rooftop Golden Skyline",
        description: "Rooftop terrace overlooking the skyline",
        setting: "on a rooftop terrace",
        environment_detail: "city skyline stretching behind, glass railing, string lights",
        props: "drink in hand",
        keywords: &["rooftop", "skyline", "terrace"],
        tags: &[
            "rooftop",
            "outdoors-urban",
            "golden-hour",
            "blue-hour",
            "new-york",
            "dubai",
            "confident",
        ],
    },
    ScenarioBlock {
        key: "city-street-stroll",
        name: "City Street Stroll",
        description: "Street-style stroll through the city",
        setting: "on a busy city sidewalk",
        environment_detail: "storefronts, crosswalk lines, passersby softly blurred",
        props: "handbag, sunglasses",
        keywords: &["street", "sidewalk", "crosswalk", "street style"],
        tags: &[
            "street",
            "outdoors-urban",
            "candid",
            "energetic",
            "handbag",
            "sunglasses",
            "paris",
            "milan",
            "london",
            "new-york",
        ],
    },
    ScenarioBlock {
        key: "neon-night-out",
        name: "Neon Night Out",
        description: "Night out under neon signage",
        setting: "on a nightlife street under neon signs",
        environment_detail: "glowing signage, wet pavement reflections, taxis passing",
        props: "small clutch",
        keywords: &["neon", "night out", "nightlife"],
        tags: &["night", "outdoors-urban", "moody", "glossy", "tokyo", "street"],
    },
    ScenarioBlock {
        key: "beach-sunset-walk",
        name: "Beach Sunset Walk",
        description: "Barefoot walk along the shoreline",
        setting: "on a wide sandy beach",
        environment_detail: "gentle waves, wet sand reflections, open horizon",
        props: "sandals in hand",
        keywords: &["beach", "shoreline", "waves", "sand"],
        tags: &["beach", "coastal", "golden-hour", "romantic", "calm", "bali", "miami"],
    },
    ScenarioBlock {
        key: "poolside-lounge",
        name: "Poolside Lounge",
        description: "Lounging by a resort pool",
        setting: "beside a resort pool",
        environment_detail: "turquoise water, white loungers, palm shadows",
        props: "sunglasses, iced drink",
        keywords: &["pool", "lounger", "resort"],
        tags: &["pool", "coastal", "midday", "luxury", "sunglasses", "dubai", "miami"],
    },
    ScenarioBlock {
        key: "yacht-deck-escape",
        name: "Yacht Deck Escape",
        description: "Sun on a yacht deck at sea",
        setting: "on the deck of a yacht",
        environment_detail: "teak deck, open sea, white rails",
        props: "towel, sunglasses",
        keywords: &["yacht", "deck", "sea", "sailing"],
        tags: &["yacht", "coastal", "luxury", "midday", "santorini", "wood"],
    },
    ScenarioBlock {
        key: "luxury-hotel-suite",
        name: "Luxury Hotel Suite",
        description: "Getting ready in a luxury hotel suite",
        setting: "in a luxury hotel suite",
        environment_detail: "floor-to-ceiling windows, velvet armchair, marble details",
        props: "champagne flute",
        keywords: &["hotel", "suite", "penthouse"],
        tags: &["hotel", "indoors-modern", "luxury", "velvet", "marble", "wine", "glossy"],
    },
    ScenarioBlock {
        key: "home-office-focus",
        name: "Home Office Focus",
        description: "Focused work session at a clean desk",
        setting: "at a minimalist desk",
        environment_detail: "laptop, neat stationery, plant in the corner",
        props: "laptop",
        keywords: &["desk", "office", "laptop", "work"],
        tags: &["office", "indoors-modern", "confident", "laptop", "clean-minimal", "plant"],
    },
    ScenarioBlock {
        key: "gym-mirror-grind",
        name: "Gym Mirror Grind",
        description: "Post-workout moment in a gym mirror",
        setting: "in a modern gym",
        environment_detail: "racks of weights, rubber floor, wall-length mirror",
        props: "water bottle",
        keywords: &["gym", "workout", "weights"],
        tags: &["gym", "indoors-metal", "energetic", "mirror", "chrome"],
    },
    ScenarioBlock {
        key: "car-passenger-seat",
        name: "Car Passenger Seat",
        description: "Road trip from the passenger seat",
        setting: "in the passenger seat of a car",
        environment_detail: "leather seats, dashboard edge, scenery streaking past",
        props: "sunglasses",
        keywords: &["car", "road trip", "passenger"],
        tags: &["car", "vehicle", "leather", "sunglasses", "los-angeles", "candid"],
    },
    ScenarioBlock {
        key: "garden-bloom",
        name: "Garden Bloom",
        description: "Among flowers in a blooming garden",
        setting: "in a blooming garden",
        environment_detail: "climbing roses, gravel path, dappled leaf shadows",
        props: "bouquet",
        keywords: &["garden", "flowers", "bloom", "park"],
        tags: &["garden", "outdoors-nature", "flowers", "romantic", "calm", "daytime"],
    },
    ScenarioBlock {
        key: "forest-trail",
        name: "Forest Trail",
        description: "Quiet walk on a forest trail",
        setting: "on a forest trail",
        environment_detail: "tall trees, mossy ground, light through the canopy",
        props: "",
        keywords: &["forest", "trail", "trees", "hike"],
        tags: &["forest", "mountain", "outdoors-nature", "calm", "mysterious"],
    },
    ScenarioBlock {
        key: "desert-dunes",
        name: "Desert Dunes",
        description: "Wind-swept dunes in open desert",
        setting: "among desert dunes",
        environment_detail: "rippled sand, vast sky, long shadows",
        props: "flowing scarf",
        keywords: &["desert", "dunes", "sand"],
        tags: &["desert", "outdoors-nature", "dramatic", "cinematic", "dubai"],
    },
    ScenarioBlock {
        key: "restaurant-dinner-date",
        name: "Restaurant Dinner Date",
        description: "Candlelit dinner at an intimate restaurant",
        setting: "at a candlelit restaurant table",
        environment_detail: "linen tablecloth, candle glow, wine glasses, blurred diners",
        props: "wine glass",
        keywords: &["dinner", "restaurant", "date night"],
        tags: &["restaurant", "indoors-cozy", "night", "romantic", "candle", "wine"],
    },
    ScenarioBlock {
        key: "bathroom-vanity-glow",
        name: "Bathroom Vanity Glow",
        description: "Getting-ready moment at the vanity",
        setting: "at a bathroom vanity",
        environment_detail: "round mirror, marble basin, skincare bottles",
        props: "skincare",
        keywords: &["vanity", "bathroom", "getting ready"],
        tags: &["bathroom", "indoors-modern", "mirror", "marble", "clean-minimal"],
    },
    ScenarioBlock {
        key: "library-quiet-corner",
        name: "Library Quiet Corner",
        description: "Reading nook among tall shelves",
        setting: "in a quiet library corner",
        environment_detail: "tall wooden shelves, reading lamp, worn armchair",
        props: "open book",
        keywords: &["library", "bookshelves", "reading"],
        tags: &["library", "indoors-cozy", "book", "wood", "calm", "cinematic"],
    },
    ScenarioBlock {
        key: "airport-lounge-travel",
        name: "Airport Lounge Travel",
        description: "Jet-set moment before a flight",
        setting: "in an airport terminal",
        environment_detail: "departure board, large windows onto the runway, carry-on luggage",
        props: "suitcase, passport",
        keywords: &["airport", "travel", "terminal"],
        tags: &["airport", "indoors-modern", "luggage", "glass", "confident"],
    },
    ScenarioBlock {
        key: "studio-seamless",
        name: "Studio Seamless",
        description: "Clean seamless backdrop in a photo studio",
        setting: "in a photo studio",
        environment_detail: "seamless paper backdrop, polished concrete floor",
        props: "",
        keywords: &["studio", "backdrop", "seamless"],
        tags: &["studio", "clean-minimal", "editorial", "glossy", "concrete"],
    },
    ScenarioBlock {
        key: DEFAULT_SCENARIO,
        name: "Apartment Lifestyle",
        description: "Everyday moment in a bright apartment",
        setting: "in a bright apartment",
        environment_detail: "neutral walls, a sofa, houseplants and soft daylight",
        props: "",
        keywords: &["apartment", "home", "living room"],
        tags: &["indoors-neutral", "daytime", "candid", "plant"],
    },
];
