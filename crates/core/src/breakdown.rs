//! Script breakdown: scene, location and character counts, a shoot-day
//! estimate and a per-scene shooting schedule derived from raw script text.
//!
//! Location and character counts come from an [`EntityRecognizer`]. The
//! default [`ScreenplayRecognizer`] reads standard screenplay conventions
//! (scene headings and character cues). Because any recognizer under-counts
//! on loosely formatted scripts, recognized counts are padded by a small
//! random amount, and a category with no hits at all falls back to a random
//! draw within a plausible range.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::Days;
use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::ShootDate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Scenes grouped onto one shooting day in the generated schedule.
pub const SCENES_PER_SHOOT_DAY: usize = 5;
/// Largest scene count a script may declare before it is rejected.
pub const MAX_SCENES: u32 = 1000;

/// Shoot days contributed by each location.
pub const DAYS_PER_LOCATION: f64 = 2.5;
/// Shoot days contributed by each character.
pub const DAYS_PER_CHARACTER: f64 = 0.5;
/// Script characters that add up to one extra shoot day.
pub const CHARS_PER_EXTRA_DAY: f64 = 7000.0;

/// Complexity points per location.
pub const COMPLEXITY_PER_LOCATION: u32 = 5;
/// Complexity points per character.
pub const COMPLEXITY_PER_CHARACTER: u32 = 3;
/// Upper bound of the complexity score.
pub const MAX_COMPLEXITY: u32 = 100;

/// Random padding added to a non-empty recognized location count.
const LOCATION_PADDING: std::ops::RangeInclusive<u32> = 1..=3;
/// Random padding added to a non-empty recognized character count.
const CHARACTER_PADDING: std::ops::RangeInclusive<u32> = 2..=5;
/// Fallback location count when nothing was recognized.
const FALLBACK_LOCATIONS: std::ops::RangeInclusive<u32> = 5..=15;
/// Fallback character count when nothing was recognized.
const FALLBACK_CHARACTERS: std::ops::RangeInclusive<u32> = 10..=30;

/// Cast labels sampled per scene (1-4 of them).
pub const CAST_ROLES: &[&str] = &[
    "Lead Actor",
    "Lead Actress",
    "Supporting Actor",
    "Supporting Actress",
    "Antagonist",
    "Child Artist",
    "Cameo",
    "Junior Artists",
];
const CAST_PER_SCENE: std::ops::RangeInclusive<usize> = 1..=4;

/// Crew labels sampled per scene (3-5 of them).
pub const CREW_ROLES: &[&str] = &[
    "Director",
    "Director of Photography",
    "Gaffer",
    "Sound Recordist",
    "Art Director",
    "Makeup Artist",
    "Costume Designer",
    "Stunt Coordinator",
    "Focus Puller",
    "Script Supervisor",
];
const CREW_PER_SCENE: std::ops::RangeInclusive<usize> = 3..=5;

/// Location labels assigned to scheduled scenes.
pub const SCHEDULE_LOCATIONS: &[&str] = &[
    "Studio Floor A",
    "Studio Floor B",
    "City Street",
    "Apartment Interior",
    "Warehouse",
    "Forest Exterior",
    "Beachfront",
];

/// Free-text description tags assigned to scheduled scenes.
pub const SCENE_DESCRIPTIONS: &[&str] = &[
    "Action sequence",
    "Dialogue",
    "Emotional drama",
    "Song sequence",
    "Chase",
    "Establishing shot",
    "Montage",
];

/// Duration labels assigned to scheduled scenes.
pub const ESTIMATED_TIMES: &[&str] = &["1 hour", "2 hours", "3 hours", "4 hours", "Half day", "Full day"];

/// Visual elements when the script mentions action.
pub const ACTION_VISUAL_ELEMENTS: [&str; 3] = ["VFX shots", "Practical effects", "Stunt coordination"];
/// Visual elements for every other script.
pub const STANDARD_VISUAL_ELEMENTS: [&str; 1] = ["Standard shots"];

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One entry of the generated shooting schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneRecord {
    /// 1-based, sequential.
    pub scene_number: u32,
    pub description: String,
    pub location: String,
    pub scheduled_day: ShootDate,
    pub estimated_time: String,
    pub cast: Vec<String>,
    pub crew: Vec<String>,
    /// Non-empty subset of the parent breakdown's visual elements, in the
    /// parent's order.
    pub visual_elements: Vec<String>,
}

/// Full breakdown of one script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownResult {
    pub estimated_shoot_days: u32,
    pub scene_count: u32,
    pub location_count: u32,
    pub character_count: u32,
    pub complexity_score: u32,
    pub visual_elements: Vec<String>,
    /// Location names the recognizer found, sorted.
    pub locations: Vec<String>,
    /// Character names the recognizer found, sorted.
    pub characters: Vec<String>,
    pub scenes: Vec<SceneRecord>,
}

impl BreakdownResult {
    /// The result for blank input: every count zero, every list empty.
    pub fn empty() -> Self {
        Self {
            estimated_shoot_days: 0,
            scene_count: 0,
            location_count: 0,
            character_count: 0,
            complexity_score: 0,
            visual_elements: Vec::new(),
            locations: Vec::new(),
            characters: Vec::new(),
            scenes: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Entity recognition
// ---------------------------------------------------------------------------

/// Distinct named entities found in a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizedEntities {
    pub locations: BTreeSet<String>,
    pub characters: BTreeSet<String>,
}

/// A text-analysis pass that extracts location and character mentions.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> RecognizedEntities;
}

/// Scene heading, optionally prefixed by a `Scene 12:` style label.
///
/// Capture 1 is the location, with any trailing ` - DAY` part removed.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:scene\s*\d*\s*[:.\-]?\s*)?(?:INT\.?\s?/\s?EXT|EXT\.?\s?/\s?INT|I/E|INT|EXT)[.\s]+(.+?)(?:\s+-+\s+.*)?$",
    )
    .expect("valid regex")
});

/// All-caps character cue with an optional `(V.O.)` style extension.
static CUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9 .'\-]{0,29}?)\s*(?:\([^)]*\))?$").expect("valid regex")
});

/// Cue-shaped lines that are screenplay directions, not characters.
const NON_CHARACTER_CUES: &[&str] = &[
    "CONTINUED",
    "THE END",
    "FADE IN",
    "FADE OUT",
    "FADE TO BLACK",
    "BLACK",
    "TITLE",
    "INTERCUT",
    "MONTAGE",
    "END MONTAGE",
    "FLASHBACK",
    "END FLASHBACK",
    "LATER",
    "MOMENTS LATER",
    "SUPER",
    "CONTINUOUS",
    "DAY",
    "NIGHT",
    "MORNING",
    "AFTERNOON",
    "EVENING",
    "DAWN",
    "DUSK",
    "SUNRISE",
    "SUNSET",
];

/// Regex-driven recognizer for screenplay-formatted text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenplayRecognizer;

impl ScreenplayRecognizer {
    fn location_from_heading(line: &str) -> Option<String> {
        let caps = HEADING_RE.captures(line)?;
        let name = caps.get(1)?.as_str().trim().trim_end_matches('.').trim();
        (!name.is_empty()).then(|| name.to_uppercase())
    }

    fn character_from_cue(line: &str) -> Option<String> {
        let caps = CUE_RE.captures(line)?;
        let name = caps.get(1)?.as_str().trim();
        // A full stop after an all-caps run ends a sentence of action.
        if name.ends_with('.') {
            return None;
        }
        if name.len() < 2 || name.split_whitespace().count() > 4 {
            return None;
        }
        if name.ends_with(" TO") || name.starts_with("SCENE") {
            return None;
        }
        if NON_CHARACTER_CUES.contains(&name) {
            return None;
        }
        Some(name.to_string())
    }
}

impl EntityRecognizer for ScreenplayRecognizer {
    fn recognize(&self, text: &str) -> RecognizedEntities {
        let mut found = RecognizedEntities::default();
        for line in script_lines(text).map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(location) = Self::location_from_heading(line) {
                found.locations.insert(location);
            } else if line.ends_with(':') {
                // Transitions (`CUT TO:`) and labels are never cues.
                continue;
            } else if let Some(character) = Self::character_from_cue(line) {
                found.characters.insert(character);
            }
        }
        found
    }
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// Lines of `text`, split on `\n`, `\r\n` and bare `\r`.
fn script_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// Lines whose trimmed text starts with "scene" (any case), floored at 1.
pub fn count_scenes(text: &str) -> u32 {
    let headers = script_lines(text)
        .filter(|line| {
            line.trim_start()
                .get(..5)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("scene"))
        })
        .count();
    u32::try_from(headers).unwrap_or(u32::MAX).max(1)
}

/// Reject scripts declaring more than [`MAX_SCENES`] scenes.
pub fn check_scene_limit(text: &str) -> Result<u32, CoreError> {
    let scenes = count_scenes(text);
    if scenes > MAX_SCENES {
        return Err(CoreError::Validation(format!(
            "Script declares {scenes} scenes; at most {MAX_SCENES} can be scheduled"
        )));
    }
    Ok(scenes)
}

/// Visual element tags for the whole script.
pub fn visual_elements_for(text: &str) -> Vec<String> {
    let tags: &[&str] = if text.to_lowercase().contains("action") {
        &ACTION_VISUAL_ELEMENTS
    } else {
        &STANDARD_VISUAL_ELEMENTS
    };
    tags.iter().map(|t| (*t).to_string()).collect()
}

/// Shoot-day estimate, rounded half away from zero and floored at 1.
pub fn estimate_shoot_days(location_count: u32, character_count: u32, text_len: usize) -> u32 {
    let days = f64::from(location_count) * DAYS_PER_LOCATION
        + f64::from(character_count) * DAYS_PER_CHARACTER
        + text_len as f64 / CHARS_PER_EXTRA_DAY;
    (days.round() as u32).max(1)
}

/// Weighted complexity of a production, capped at [`MAX_COMPLEXITY`].
pub fn complexity_score(location_count: u32, character_count: u32) -> u32 {
    location_count
        .saturating_mul(COMPLEXITY_PER_LOCATION)
        .saturating_add(character_count.saturating_mul(COMPLEXITY_PER_CHARACTER))
        .min(MAX_COMPLEXITY)
}

/// Padded count for a recognized category, or a fallback draw when empty.
fn padded_count<R: Rng + ?Sized>(
    recognized: usize,
    padding: std::ops::RangeInclusive<u32>,
    fallback: std::ops::RangeInclusive<u32>,
    rng: &mut R,
) -> u32 {
    if recognized == 0 {
        rng.random_range(fallback)
    } else {
        u32::try_from(recognized)
            .unwrap_or(u32::MAX)
            .saturating_add(rng.random_range(padding))
    }
}

fn sample_labels<R: Rng + ?Sized>(
    labels: &[&str],
    amount: std::ops::RangeInclusive<usize>,
    rng: &mut R,
) -> Vec<String> {
    let n = rng.random_range(amount).min(labels.len());
    labels
        .choose_multiple(rng, n)
        .map(|label| (*label).to_string())
        .collect()
}

fn pick<R: Rng + ?Sized>(labels: &[&str], rng: &mut R) -> String {
    labels.choose(rng).copied().unwrap_or_default().to_string()
}

/// A random non-empty subset of `elements`, preserving their order.
fn sample_subset<R: Rng + ?Sized>(elements: &[String], rng: &mut R) -> Vec<String> {
    if elements.is_empty() {
        return Vec::new();
    }
    let amount = rng.random_range(1..=elements.len());
    let mut picked = rand::seq::index::sample(rng, elements.len(), amount).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| elements[i].clone()).collect()
}

/// Build the shooting schedule: five scenes per day starting at `start`.
pub fn build_schedule<R: Rng + ?Sized>(
    scene_count: u32,
    start: ShootDate,
    visual_elements: &[String],
    rng: &mut R,
) -> Vec<SceneRecord> {
    (0..scene_count as usize)
        .map(|i| {
            let day_offset = (i / SCENES_PER_SHOOT_DAY) as u64;
            SceneRecord {
                scene_number: i as u32 + 1,
                description: pick(SCENE_DESCRIPTIONS, rng),
                location: pick(SCHEDULE_LOCATIONS, rng),
                scheduled_day: start
                    .checked_add_days(Days::new(day_offset))
                    .unwrap_or(start),
                estimated_time: pick(ESTIMATED_TIMES, rng),
                cast: sample_labels(CAST_ROLES, CAST_PER_SCENE, rng),
                crew: sample_labels(CREW_ROLES, CREW_PER_SCENE, rng),
                visual_elements: sample_subset(visual_elements, rng),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Breakdown analyzer parameterised over its entity recognizer.
#[derive(Debug, Clone, Default)]
pub struct ScriptAnalyzer<E = ScreenplayRecognizer> {
    recognizer: E,
}

impl<E: EntityRecognizer> ScriptAnalyzer<E> {
    pub fn new(recognizer: E) -> Self {
        Self { recognizer }
    }

    /// Analyze `text`, scheduling the first shoot day on `start`.
    ///
    /// Blank text yields [`BreakdownResult::empty`].
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        text: &str,
        start: ShootDate,
        rng: &mut R,
    ) -> BreakdownResult {
        if text.trim().is_empty() {
            return BreakdownResult::empty();
        }

        let entities = self.recognizer.recognize(text);
        let scene_count = count_scenes(text);
        let location_count = padded_count(
            entities.locations.len(),
            LOCATION_PADDING,
            FALLBACK_LOCATIONS,
            rng,
        );
        let character_count = padded_count(
            entities.characters.len(),
            CHARACTER_PADDING,
            FALLBACK_CHARACTERS,
            rng,
        );
        let visual_elements = visual_elements_for(text);
        let scenes = build_schedule(scene_count, start, &visual_elements, rng);

        BreakdownResult {
            estimated_shoot_days: estimate_shoot_days(
                location_count,
                character_count,
                text.chars().count(),
            ),
            scene_count,
            location_count,
            character_count,
            complexity_score: complexity_score(location_count, character_count),
            visual_elements,
            locations: entities.locations.into_iter().collect(),
            characters: entities.characters.into_iter().collect(),
            scenes,
        }
    }
}

/// Analyze `text` with the screenplay recognizer, today's date and the
/// thread-local RNG.
pub fn analyze(text: &str) -> BreakdownResult {
    let today = chrono::Utc::now().date_naive();
    ScriptAnalyzer::<ScreenplayRecognizer>::default().analyze(text, today, &mut rand::rng())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
