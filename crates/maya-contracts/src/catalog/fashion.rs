use super::blocks::FashionBlock;

/// Registry default only; fashion selection always ranks the full pool.
pub const DEFAULT_FASHION: &str = "blazer-and-denim";

pub const FASHION_BLOCKS: &[FashionBlock] = &[
    FashionBlock {
        category: "quiet-luxury-knit",
        description: "fine-gauge cashmere knit with tailored wide-leg trousers",
        keywords: &["cashmere", "knit", "tailored", "old money", "quiet luxury"],
        scenario_affinity: &["hotel", "cafe", "airport", "yacht"],
        materials: &["cashmere", "wool"],
        palette: "camel, cream and oatmeal neutrals",
    },
    FashionBlock {
        category: "tailored-power-suit",
        description: "sharp oversized blazer suit with a silk camisole",
        keywords: &["suit", "blazer", "power", "office", "tailored"],
        scenario_affinity: &["office", "rooftop", "airport"],
        materials: &["wool", "silk"],
        palette: "charcoal, black and ivory",
    },
    FashionBlock {
        category: "slip-dress-evening",
        description: "bias-cut satin slip dress with delicate straps",
        keywords: &["slip dress", "satin", "evening", "date"],
        scenario_affinity: &["restaurant", "hotel", "rooftop", "neon"],
        materials: &["satin", "silk"],
        palette: "champagne, black and deep burgundy",
    },
    FashionBlock {
        category: "matching-athleisure-set",
        description: "sculpting matching athleisure set with fresh sneakers",
        keywords: &["athleisure", "workout", "gym", "sporty", "leggings"],
        scenario_affinity: &["gym", "street", "elevator"],
        materials: &["nylon", "spandex"],
        palette: "sage, mocha and soft grey",
    },
    FashionBlock {
        category: "blazer-and-denim",
        description: "oversized blazer over a white tee with straight-leg denim",
        keywords: &["blazer", "denim", "jeans", "street style", "casual"],
        scenario_affinity: &["street", "cafe", "elevator", "airport"],
        materials: &["denim", "cotton", "wool"],
        palette: "indigo, white and tan",
    },
    FashionBlock {
        category: "linen-resort",
        description: "breezy linen shirt and matching relaxed trousers",
        keywords: &["linen", "resort", "vacation", "breezy"],
        scenario_affinity: &["beach", "yacht", "pool", "garden"],
        materials: &["linen"],
        palette: "white, sand and soft terracotta",
    },
    FashionBlock {
        category: "cozy-loungewear",
        description: "oversized knit loungewear with thick socks",
        keywords: &["cozy", "lounge", "sweater", "pajamas", "bed"],
        scenario_affinity: &["bedroom", "kitchen", "apartment"],
        materials: &["knit", "cotton"],
        palette: "oatmeal, cream and dusty pink",
    },
    FashionBlock {
        category: "trench-layers",
        description: "belted trench coat over fine knitwear and loafers",
        keywords: &["trench", "coat", "layers", "loafers", "parisian"],
        scenario_affinity: &["street", "cafe", "airport", "library"],
        materials: &["gabardine", "knit", "leather"],
        palette: "beige, navy and chocolate brown",
    },
    FashionBlock {
        category: "little-black-dress",
        description: "structured little black dress with minimal gold jewelry",
        keywords: &["black dress", "evening", "elegant", "night out"],
        scenario_affinity: &["restaurant", "neon", "hotel", "elevator"],
        materials: &["crepe"],
        palette: "black with gold accents",
    },
    FashionBlock {
        category: "crisp-white-shirt",
        description: "crisp oversized white shirt with tailored black trousers",
        keywords: &["white shirt", "minimal", "clean", "crisp"],
        scenario_affinity: &["studio", "office", "kitchen", "apartment"],
        materials: &["cotton poplin"],
        palette: "white and black",
    },
    FashionBlock {
        category: "leather-jacket-night",
        description: "cropped leather jacket over a fitted top and slim trousers",
        keywords: &["leather", "jacket", "edgy", "night", "moody"],
        scenario_affinity: &["neon", "street", "elevator", "car"],
        materials: &["leather"],
        palette: "black, oxblood and silver",
    },
    FashionBlock {
        category: "swim-and-cover-up",
        description: "sculpted one-piece swimsuit under a sheer cover-up",
        keywords: &["swimsuit", "swim", "bikini", "cover-up", "pool"],
        scenario_affinity: &["pool", "beach", "yacht"],
        materials: &["lycra", "chiffon"],
        palette: "white, cobalt and sun-yellow",
    },
    FashionBlock {
        category: "floral-sundress",
        description: "flowing floral midi sundress with woven sandals",
        keywords: &["sundress", "floral", "romantic", "summer"],
        scenario_affinity: &["garden", "beach", "cafe"],
        materials: &["cotton voile"],
        palette: "soft florals, butter yellow and sage",
    },
    FashionBlock {
        category: "monochrome-knit-set",
        description: "monochrome ribbed knit set with a long coat",
        keywords: &["monochrome", "knit set", "minimal", "tonal"],
        scenario_affinity: &["studio", "airport", "hotel", "car"],
        materials: &["ribbed knit", "wool"],
        palette: "tonal greige",
    },
    FashionBlock {
        category: "outdoor-utility",
        description: "utility jacket, fitted base layer and sturdy boots",
        keywords: &["hiking", "utility", "boots", "outdoor", "trail"],
        scenario_affinity: &["forest", "desert", "mountain"],
        materials: &["canvas", "fleece"],
        palette: "olive, rust and stone",
    },
    FashionBlock {
        category: "sequin-party",
        description: "light-catching sequin mini dress with sleek heels",
        keywords: &["sequin", "party", "glam", "sparkle", "flash"],
        scenario_affinity: &["neon", "restaurant", "hotel", "rooftop"],
        materials: &["sequins", "mesh"],
        palette: "silver, black and metallic bronze",
    },
];
