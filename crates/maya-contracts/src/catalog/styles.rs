use super::blocks::PersonalStyle;

pub const PERSONAL_STYLES: &[PersonalStyle] = &[
    PersonalStyle {
        key: "old-money",
        aliases: &["quiet luxury", "classic"],
        keywords: &["refined", "heritage", "understated"],
        colors: &["camel", "cream", "navy"],
        wardrobe: &["cashmere knit", "tailored trousers", "loafers"],
    },
    PersonalStyle {
        key: "minimalist",
        aliases: &["minimal", "clean"],
        keywords: &["clean lines", "understated", "monochrome"],
        colors: &["white", "black", "greige"],
        wardrobe: &["crisp white shirt", "tailored trousers", "monochrome knit"],
    },
    PersonalStyle {
        key: "streetwear",
        aliases: &["street", "urban"],
        keywords: &["oversized", "graphic", "relaxed"],
        colors: &["black", "olive", "grey"],
        wardrobe: &["oversized hoodie", "cargo pants", "chunky sneakers"],
    },
    PersonalStyle {
        key: "boho",
        aliases: &["bohemian", "free spirit"],
        keywords: &["flowing", "earthy", "layered"],
        colors: &["terracotta", "sand", "sage"],
        wardrobe: &["flowing maxi dress", "crochet top", "layered jewelry"],
    },
    PersonalStyle {
        key: "glam",
        aliases: &["glamour", "glamorous"],
        keywords: &["polished", "statement", "luminous"],
        colors: &["black", "gold", "champagne"],
        wardrobe: &["satin slip dress", "statement earrings", "sleek heels"],
    },
    PersonalStyle {
        key: "clean-girl",
        aliases: &["natural", "effortless"],
        keywords: &["dewy", "slicked back", "fresh"],
        colors: &["cream", "white", "soft beige"],
        wardrobe: &["ribbed tank", "linen trousers", "gold hoops"],
    },
    PersonalStyle {
        key: "sporty",
        aliases: &["athletic", "athleisure"],
        keywords: &["active", "sleek", "functional"],
        colors: &["grey", "white", "sage"],
        wardrobe: &["matching set", "fresh sneakers", "zip jacket"],
    },
    PersonalStyle {
        key: "parisian",
        aliases: &["french", "french girl"],
        keywords: &["effortless", "chic", "undone"],
        colors: &["navy", "white", "red"],
        wardrobe: &["striped top", "trench coat", "ballet flats"],
    },
    PersonalStyle {
        key: "edgy",
        aliases: &["grunge", "rock"],
        keywords: &["bold", "dark", "textured"],
        colors: &["black", "oxblood", "silver"],
        wardrobe: &["leather jacket", "combat boots", "silver rings"],
    },
    PersonalStyle {
        key: "romantic",
        aliases: &["feminine", "soft"],
        keywords: &["delicate", "soft", "dreamy"],
        colors: &["blush", "ivory", "lavender"],
        wardrobe: &["lace blouse", "floral midi dress", "pearl earrings"],
    },
    PersonalStyle {
        key: "coastal",
        aliases: &["coastal grandmother", "resort"],
        keywords: &["breezy", "relaxed", "sun-washed"],
        colors: &["white", "sand", "sky blue"],
        wardrobe: &["linen shirt", "straw hat", "woven sandals"],
    },
];

/// Seasonal looks mixed into every style blend regardless of user input.
pub const TRENDING_LOOKS: &[&str] = &[
    "butter yellow accents",
    "sheer layering",
    "burgundy leather",
    "oversized tailoring",
    "mocha mousse tones",
    "ballet flats with socks",
];
