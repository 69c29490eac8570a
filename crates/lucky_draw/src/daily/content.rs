//! Built-in content tables.
#[cfg(feature = "serde")]
use serde::Serialize;

/// A dream motif and what it is said to foretell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DreamSymbol {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub meaning: &'static str,
}

/// Lucky numbers and colour for a group of zodiac animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZodiacPoint {
    pub id: &'static str,
    pub animals: [&'static str; 3],
    pub numbers: [u32; 2],
    pub color: &'static str,
}

/// Fortune of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Fortune {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub tip: &'static str,
}

/// Canned result of the simulated analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnalysisText {
    pub id: &'static str,
    pub headline: &'static str,
    pub detail: &'static str,
    pub score: u8,
}

pub const DREAM_SYMBOLS: &[DreamSymbol] = &[
    DreamSymbol {
        id: "ancestor",
        icon: "👴",
        title: "Ancestor dream",
        meaning: "An ancestor smiling and handing you something means today is the day.",
    },
    DreamSymbol {
        id: "dung",
        icon: "💩",
        title: "Dung dream",
        meaning: "The discomfort passes. Being covered in it is a strong omen of wealth.",
    },
    DreamSymbol {
        id: "fire",
        icon: "🔥",
        title: "Fire dream",
        meaning: "Roaring flames are a sign that your fortune is about to flourish.",
    },
];

pub const ZODIAC_POINTS: &[ZodiacPoint] = &[
    ZodiacPoint {
        id: "rat-dragon-monkey",
        animals: ["Rat", "Dragon", "Monkey"],
        numbers: [1, 6],
        color: "Blue",
    },
    ZodiacPoint {
        id: "ox-snake-rooster",
        animals: ["Ox", "Snake", "Rooster"],
        numbers: [2, 7],
        color: "Red",
    },
    ZodiacPoint {
        id: "tiger-horse-dog",
        animals: ["Tiger", "Horse", "Dog"],
        numbers: [3, 8],
        color: "Green",
    },
    ZodiacPoint {
        id: "rabbit-goat-pig",
        animals: ["Rabbit", "Goat", "Pig"],
        numbers: [4, 9],
        color: "White",
    },
];

pub const FORTUNES: &[Fortune] = &[
    Fortune {
        id: "steady",
        title: "Steady tide",
        body: "Small, patient steps pay off today. Keep to your plan.",
        tip: "Carry something blue.",
    },
    Fortune {
        id: "windfall",
        title: "Unexpected windfall",
        body: "Luck arrives from a direction you were not watching.",
        tip: "Say yes to the first invitation you get.",
    },
    Fortune {
        id: "reunion",
        title: "Old friends",
        body: "A familiar face brings good news before the evening.",
        tip: "Answer the message you have been putting off.",
    },
    Fortune {
        id: "bold",
        title: "Bold move",
        body: "Fortune favours a decision you have hesitated over.",
        tip: "Pick the odd number when in doubt.",
    },
    Fortune {
        id: "rest",
        title: "Quiet luck",
        body: "Rest is the luckiest thing you can do today.",
        tip: "Go to bed early; tonight's dreams matter.",
    },
];

pub const ANALYSIS_TEXTS: &[AnalysisText] = &[
    AnalysisText {
        id: "golden",
        headline: "A golden aura surrounds you",
        detail: "Your energy lines up with prosperity. Numbers in the 40s resonate with you.",
        score: 92,
    },
    AnalysisText {
        id: "rising",
        headline: "Your luck is on the rise",
        detail: "The coming week builds momentum. Trust the second number that comes to mind.",
        score: 81,
    },
    AnalysisText {
        id: "balanced",
        headline: "Calm and balanced",
        detail: "Nothing dramatic, nothing missing. Even numbers keep you grounded.",
        score: 74,
    },
    AnalysisText {
        id: "spark",
        headline: "A hidden spark",
        detail: "Something small today hints at a bigger win. Watch for repeating digits.",
        score: 88,
    },
];
