use once_cell::sync::Lazy;
use regex::{RegexSet, RegexSetBuilder};

/// Phrasings that only make sense next to an illustration: references to a
/// specific mark, buoy, vessel or light pattern, route/heading questions, and
/// explicit "in the picture" wording. The exam corpus is French, so the
/// patterns are too.
///
/// Kept as one named, compiled set so the rule list can be unit-tested and
/// extended without touching the sanitize/validate call sites.
const VISUAL_PHRASES: &[&str] = &[
    r"cette marque",
    r"ce bateau",
    r"ce navire",
    r"ce balisage",
    r"cette bou[eé]e",
    r"ces bou[eé]es",
    r"que signifie ce panneau",
    r"quelle est la balise",
    r"dans cette situation",
    r"route\s*[ab]",
    r"ce(?:s)? feux",
    r"sur le navire\s*[ab]",
    r"vous [eê]tes sur le navire\s*[ab]",
    r"quelle route suivez[- ]vous",
    r"quel est votre sens de navigation",
    r"quelle est la balise qui montre ces feux",
    r"vous voyez cette bou[eé]e",
    r"vous voyez ces",
    r"cap au\s*\d+",
    r"sur l[’']image",
    r"ci-contre",
];

static VISUAL_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSetBuilder::new(VISUAL_PHRASES)
        .case_insensitive(true)
        .build()
        .expect("visual phrase patterns are hard-coded and must compile")
});

/// True when the prompt text cannot be answered without an image.
pub fn needs_image(text: &str) -> bool {
    VISUAL_PATTERNS.is_match(text.trim())
}
