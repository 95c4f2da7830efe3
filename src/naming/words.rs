//! Word lists used by the name synthesizer

pub const PREFIXES: &[&str] = &[
    "Neo", "Retro", "Cyber", "Quantum", "Astro", "Techno", "Synth", "Vapor", "Pixel", "Neon",
    "Hyper", "Micro", "Macro", "Ultra", "Mega", "Giga", "Nano", "Cosmic", "Stellar", "Lunar",
    "Solar", "Galactic", "Atomic", "Nebula", "Plasma", "Fusion", "Photon", "Quark", "Void", "Flux",
    "Pulse", "Wave", "Beam", "Core", "Node", "Grid", "Mesh", "Nexus", "Vortex",
];

pub const SUFFIXES: &[&str] = &[
    "wave", "punk", "core", "soft", "hard", "tech", "flux", "glow", "shine", "spark", "burn",
    "fade", "shift", "drift", "flow", "pulse", "beam", "ray", "haze", "mist", "dust", "aura",
    "nova", "storm", "breeze", "wind", "current", "tide", "surge", "burst", "bloom", "flare",
    "flash", "gleam", "glint", "glimmer", "glitter", "shimmer", "sheen", "luster",
];

pub const COMPOUNDS: &[&str] = &[
    "Nightfall", "Daybreak", "Sunburst", "Moonbeam", "Stardust", "Skyline", "Seashore",
    "Treeline", "Cloudscape", "Firefly", "Rainbowdrop", "Thunderbolt", "Snowflake", "Leafstorm",
    "Sandstorm", "Iceberg", "Volcano", "Earthquake", "Tidepool", "Windmill", "Sunflower",
    "Moonstone", "Stargaze", "Raindrop", "Snowdrift", "Firestorm", "Icecrystal", "Sandcastle",
    "Waterfalls", "Skyscraper",
];

/// Stems and endings combined into invented words such as "Lumarium"
pub const INVENTED_STEMS: &[&str] = &[
    "Lum", "Chrom", "Spec", "Pris", "Aur", "Sol", "Lun", "Stel", "Cos", "Astr", "Neb", "Phos",
    "Zeph", "Crys", "Aeth",
];

pub const INVENTED_ENDINGS: &[&str] = &[
    "escence", "arium", "opia", "ology", "orama", "osyne", "osphere", "olith", "onomy", "ium",
    "eon", "alis", "ora", "yx",
];

pub const ADJECTIVES: &[&str] = &[
    "Ethereal", "Vivid", "Serene", "Dynamic", "Mellow", "Vibrant", "Tranquil", "Radiant",
    "Subtle", "Bold", "Elegant", "Rustic", "Sleek", "Vintage", "Modern", "Classic", "Dreamy",
    "Energetic", "Calm", "Lively", "Soft", "Intense", "Gentle", "Fierce", "Mystical",
    "Enchanted", "Whimsical", "Surreal", "Fantastical", "Otherworldly", "Harmonious",
    "Balanced", "Contrasting", "Complementary", "Unified", "Diverse",
];

pub const NOUNS: &[&str] = &[
    "Horizon", "Cascade", "Prism", "Spectrum", "Mirage", "Oasis", "Zenith", "Abyss", "Echo",
    "Whisper", "Tempest", "Serenity", "Harmony", "Rhythm", "Melody", "Symphony", "Essence",
    "Spirit", "Soul", "Aura", "Nimbus", "Halo", "Veil", "Shroud", "Crystal", "Gem", "Jewel",
    "Pearl", "Diamond", "Sapphire", "Emerald", "Ruby", "Nebula", "Galaxy", "Cosmos", "Universe",
    "Infinity", "Eternity", "Dimension", "Realm",
];

/// Hue family names, one per 8 degrees of hue starting at red
pub const HUE_FAMILIES: &[&str] = &[
    "Red", "Crimson", "Scarlet", "Ruby", "Vermilion", "Orange", "Amber", "Gold", "Marigold",
    "Tangerine", "Yellow", "Lemon", "Canary", "Saffron", "Mustard", "Lime", "Chartreuse", "Olive",
    "Sage", "Emerald", "Green", "Jade", "Forest", "Mint", "Pine", "Cyan", "Turquoise", "Aqua",
    "Teal", "Azure", "Blue", "Cobalt", "Sapphire", "Navy", "Indigo", "Purple", "Violet",
    "Lavender", "Plum", "Amethyst", "Magenta", "Fuchsia", "Pink", "Rose", "Cerise",
];

/// Names used instead of a hue family for low-saturation colors
pub const GRAYS: &[&str] = &["Gray", "Ash", "Slate", "Stone", "Pewter"];

/// Endings stripped before two words are fused into one
pub const FUSION_ENDINGS: &[&str] = &[
    "tion", "sion", "ism", "ity", "ness", "ment", "er", "or", "ous", "ive", "al", "ic", "ly",
];
