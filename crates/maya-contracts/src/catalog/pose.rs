use super::blocks::PoseBlock;

pub const DEFAULT_POSE: &str = "relaxed-natural-stance";

pub const POSE_BLOCKS: &[PoseBlock] = &[
    PoseBlock {
        category: "mirror-selfie-hip-pop",
        description: "standing with weight on one hip, phone raised to the mirror, free hand at the waist",
        keywords: &["mirror", "selfie", "phone", "hip"],
        scenario_affinity: &["elevator", "gym", "bathroom"],
    },
    PoseBlock {
        category: "leaning-wall-casual",
        description: "leaning one shoulder against the wall, arms loosely crossed",
        keywords: &["leaning", "wall", "casual", "arms crossed"],
        scenario_affinity: &["elevator", "street", "neon"],
    },
    PoseBlock {
        category: "lying-in-bed-reading",
        description: "lying on the side propped on one elbow, book open on the sheets",
        keywords: &["lying", "bed", "book", "reading", "sheets"],
        scenario_affinity: &["bedroom"],
    },
    PoseBlock {
        category: "seated-window-gaze",
        description: "seated sideways by the window, chin resting on one hand, gazing outside",
        keywords: &["seated", "window", "gaze", "coffee"],
        scenario_affinity: &["cafe", "car", "airport", "library"],
    },
    PoseBlock {
        category: "cup-in-both-hands",
        description: "holding a warm cup in both hands close to the chest, shoulders relaxed",
        keywords: &["cup", "coffee", "mug", "latte", "morning"],
        scenario_affinity: &["cafe", "kitchen", "bedroom"],
    },
    PoseBlock {
        category: "walking-over-shoulder",
        description: "walking away mid-stride and glancing back over the shoulder",
        keywords: &["walking", "stride", "glance", "street"],
        scenario_affinity: &["street", "airport", "beach"],
    },
    PoseBlock {
        category: "hand-in-hair-laugh",
        description: "one hand pushing hair back, caught mid-laugh",
        keywords: &["laugh", "hair", "wind", "playful"],
        scenario_affinity: &["beach", "rooftop", "garden", "yacht"],
    },
    PoseBlock {
        category: "railing-lean-skyline",
        description: "forearms resting on the railing, body turned three-quarters to camera",
        keywords: &["railing", "skyline", "view", "terrace"],
        scenario_affinity: &["rooftop", "yacht", "hotel"],
    },
    PoseBlock {
        category: "lounger-recline",
        description: "reclining on a lounger, one knee bent, sunglasses pushed up",
        keywords: &["lounger", "recline", "sun", "sunglasses"],
        scenario_affinity: &["pool", "yacht", "beach"],
    },
    PoseBlock {
        category: "desk-power-lean",
        description: "standing and leaning forward with both palms on the desk, direct gaze",
        keywords: &["desk", "power", "office", "confident"],
        scenario_affinity: &["office", "studio"],
    },
    PoseBlock {
        category: "post-workout-stretch",
        description: "mid-stretch with one arm across the chest, slight glow of effort",
        keywords: &["workout", "stretch", "gym", "fitness"],
        scenario_affinity: &["gym"],
    },
    PoseBlock {
        category: "passenger-seat-lounge",
        description: "slouched in the passenger seat, elbow on the window ledge",
        keywords: &["car", "passenger", "road trip", "window"],
        scenario_affinity: &["car"],
    },
    PoseBlock {
        category: "flower-touch-wander",
        description: "wandering slowly with fingertips brushing the flowers",
        keywords: &["flowers", "garden", "wander", "bloom"],
        scenario_affinity: &["garden", "forest"],
    },
    PoseBlock {
        category: "dinner-table-lean",
        description: "leaning in over the table, chin on folded hands, soft smile",
        keywords: &["dinner", "table", "wine", "date"],
        scenario_affinity: &["restaurant", "cafe"],
    },
    PoseBlock {
        category: "vanity-getting-ready",
        description: "turned toward the vanity mirror, applying lipstick",
        keywords: &["vanity", "mirror", "makeup", "getting ready"],
        scenario_affinity: &["bathroom", "hotel"],
    },
    PoseBlock {
        category: "editorial-contrapposto",
        description: "contrapposto stance, shoulders back, chin slightly lifted",
        keywords: &["editorial", "stance", "studio", "fashion"],
        scenario_affinity: &["studio", "hotel"],
    },
    PoseBlock {
        category: "wind-swept-wide-stance",
        description: "wide confident stance with clothing caught by the wind",
        keywords: &["wind", "dunes", "dramatic", "wide"],
        scenario_affinity: &["desert", "beach", "forest"],
    },
    PoseBlock {
        category: DEFAULT_POSE,
        description: "relaxed natural stance, arms at ease, weight shifted slightly",
        keywords: &["natural", "relaxed"],
        scenario_affinity: &["apartment"],
    },
];
