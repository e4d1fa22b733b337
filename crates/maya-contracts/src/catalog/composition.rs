use super::blocks::CompositionBlock;

pub const DEFAULT_COMPOSITION: &str = "medium-portrait";

pub const COMPOSITION_BLOCKS: &[CompositionBlock] = &[
    CompositionBlock {
        key: "mirror-selfie-full-length",
        name: "Mirror Selfie Full Length",
        description: "Full-length mirror selfie with the phone visible",
        framing: "full-length mirror selfie, phone held at chest height",
        camera_angle: "straight-on through the mirror",
        lens: "smartphone wide lens look",
        depth_of_field: "deep focus, background readable",
        keywords: &["mirror", "selfie", "outfit check"],
        tags: &[
            "elevator",
            "bathroom",
            "gym",
            "mirror",
            "phone",
            "candid",
            "indoors-metal",
        ],
    },
    CompositionBlock {
        key: "close-up-portrait",
        name: "Close-Up Portrait",
        description: "Tight head-and-shoulders portrait",
        framing: "close-up from collarbones up",
        camera_angle: "eye level",
        lens: "85mm portrait lens",
        depth_of_field: "shallow depth of field, creamy background",
        keywords: &["close-up", "beauty", "headshot"],
        tags: &["editorial", "clean-minimal", "studio", "romantic", "glossy"],
    },
    CompositionBlock {
        key: "environmental-wide",
        name: "Environmental Wide",
        description: "Subject small in a sweeping setting",
        framing: "wide environmental frame, subject in the lower third",
        camera_angle: "slightly elevated",
        lens: "24mm wide lens",
        depth_of_field: "deep focus",
        keywords: &["wide", "landscape", "scale"],
        tags: &[
            "outdoors-nature",
            "coastal",
            "mountain",
            "desert",
            "beach",
            "forest",
            "cinematic",
        ],
    },
    CompositionBlock {
        key: "over-the-shoulder-candid",
        name: "Over The Shoulder Candid",
        description: "Caught glancing back over the shoulder",
        framing: "medium shot from behind, face turned over the shoulder",
        camera_angle: "eye level, slightly behind",
        lens: "50mm lens",
        depth_of_field: "moderate depth of field",
        keywords: &["glance", "candid", "walking away"],
        tags: &["candid", "playful", "street", "airport", "outdoors-urban", "paris"],
    },
    CompositionBlock {
        key: "low-angle-power",
        name: "Low Angle Power",
        description: "Heroic low angle that adds presence",
        framing: "three-quarter length from below",
        camera_angle: "low angle looking up",
        lens: "35mm lens",
        depth_of_field: "moderate depth of field",
        keywords: &["heroic", "tall", "power"],
        tags: &["confident", "dramatic", "rooftop", "office", "new-york"],
    },
    CompositionBlock {
        key: "seated-lifestyle-medium",
        name: "Seated Lifestyle Medium",
        description: "Seated medium shot within a lived-in space",
        framing: "medium shot, seated at a table or window",
        camera_angle: "eye level across the table",
        lens: "35mm lens",
        depth_of_field: "shallow depth of field, soft foreground",
        keywords: &["seated", "table", "lifestyle"],
        tags: &[
            "cafe",
            "restaurant",
            "library",
            "kitchen",
            "indoors-cozy",
            "coffee",
            "book",
            "wine",
        ],
    },
    CompositionBlock {
        key: "walking-full-body",
        name: "Walking Full Body",
        description: "Full-body stride caught mid-step",
        framing: "full body, mid-stride",
        camera_angle: "eye level from the front three-quarter",
        lens: "50mm lens",
        depth_of_field: "subject sharp, background compressed",
        keywords: &["walking", "stride", "street style"],
        tags: &["street", "outdoors-urban", "energetic", "editorial", "milan", "new-york"],
    },
    CompositionBlock {
        key: "overhead-lifestyle",
        name: "Overhead Lifestyle",
        description: "Top-down frame over a bed or table",
        framing: "overhead frame, subject lying among props",
        camera_angle: "directly above",
        lens: "35mm lens",
        depth_of_field: "even focus across the plane",
        keywords: &["top-down", "flat lay", "lying down"],
        tags: &["bedroom", "tired", "calm", "book", "flowers"],
    },
    CompositionBlock {
        key: "car-window-frame",
        name: "Car Window Frame",
        description: "Framed through or inside a car window",
        framing: "medium close-up framed by the car window",
        camera_angle: "eye level from the driver seat",
        lens: "35mm lens",
        depth_of_field: "shallow depth of field",
        keywords: &["car", "window frame", "passenger"],
        tags: &["car", "vehicle", "cinematic", "sunglasses"],
    },
    CompositionBlock {
        key: "editorial-three-quarter",
        name: "Editorial Three Quarter",
        description: "Three-quarter length editorial stance",
        framing: "three-quarter length, body angled to camera",
        camera_angle: "eye level",
        lens: "70mm lens",
        depth_of_field: "shallow depth of field",
        keywords: &["editorial", "stance", "campaign"],
        tags: &["editorial", "luxury", "hotel", "studio", "glossy", "indoors-modern"],
    },
    CompositionBlock {
        key: DEFAULT_COMPOSITION,
        name: "Medium Portrait",
        description: "Waist-up portrait with breathing room",
        framing: "medium portrait from the waist up",
        camera_angle: "eye level",
        lens: "50mm lens",
        depth_of_field: "soft background blur",
        keywords: &["portrait", "waist-up"],
        tags: &["indoors-neutral", "daytime"],
    },
];
