use serde::{Deserialize, Serialize};

/// Difficulty tier of a trick card. Higher tiers reward more points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Difficulty {
    /// Entry-level tricks (ollie, shuvit)
    Beginner,
    /// Flip and grind basics
    Intermediate,
    /// Technical combinations
    Advanced,
    /// Contest-level tricks
    Pro,
}

pub fn all_difficulties() -> [Difficulty; 4] {
    [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Pro,
    ]
}

/// Reserved id for the sentinel card returned when the catalog is exhausted.
pub const EXHAUSTED_CARD_ID: u32 = u32::MAX;

/// A single trick card from the catalog.
/// Catalog entries are created once at startup and never mutated; the cards
/// attempted during a match are snapshots of these entries.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrickCard {
    /// Unique catalog id
    pub id: u32,
    /// Display name of the trick
    pub name: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Points awarded for landing the trick
    pub points: u32,
    /// Short description shown to players
    pub description: String,
}

impl TrickCard {
    /// Sentinel card handed out when the deck and catalog are both empty.
    /// Worth zero points so a card-starved match can keep advancing turns.
    pub fn exhausted() -> Self {
        Self {
            id: EXHAUSTED_CARD_ID,
            name: "No More Cards".to_string(),
            difficulty: Difficulty::Beginner,
            points: 0,
            description: "All cards have been used".to_string(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.id == EXHAUSTED_CARD_ID
    }
}

fn card(id: u32, name: &str, difficulty: Difficulty, points: u32, description: &str) -> TrickCard {
    TrickCard {
        id,
        name: name.to_string(),
        difficulty,
        points,
        description: description.to_string(),
    }
}

/// The built-in trick catalog.
pub fn trick_catalog() -> Vec<TrickCard> {
    use Difficulty::*;
    vec![
        card(1, "Ollie", Beginner, 10, "Pop the tail and level out in the air"),
        card(2, "Shuvit", Beginner, 10, "Spin the board 180 under your feet"),
        card(3, "Manual", Beginner, 15, "Roll on the back wheels without the tail touching"),
        card(4, "Frontside 180", Beginner, 15, "Ollie while rotating 180 frontside"),
        card(5, "Backside 180", Beginner, 15, "Ollie while rotating 180 backside"),
        card(6, "Kickflip", Intermediate, 25, "Flick the nose to flip the board once"),
        card(7, "Heelflip", Intermediate, 25, "Flip the board with the heel off the nose"),
        card(8, "Pop Shuvit", Intermediate, 20, "Pop the tail into a 180 board spin"),
        card(9, "50-50 Grind", Intermediate, 25, "Grind a ledge on both trucks"),
        card(10, "Boardslide", Intermediate, 20, "Slide a rail on the middle of the board"),
        card(11, "Varial Kickflip", Advanced, 35, "Kickflip combined with a backside shuvit"),
        card(12, "Hardflip", Advanced, 40, "Frontside shuvit with a kickflip"),
        card(13, "360 Flip", Advanced, 45, "Full kickflip with a 360 board spin"),
        card(14, "Crooked Grind", Advanced, 35, "Grind the front truck with the nose pinched"),
        card(15, "Smith Grind", Advanced, 40, "Back truck grinds while the front dips below"),
        card(16, "Laser Flip", Pro, 60, "Frontside 360 shuvit with a heelflip"),
        card(17, "Nollie Inward Heel", Pro, 55, "Inward heelflip popped off the nose"),
        card(18, "Switch Tre Flip", Pro, 65, "360 flip ridden in switch stance"),
        card(19, "Kickflip Backside Tailslide", Pro, 70, "Kickflip into a backside tailslide"),
        card(20, "Impossible", Pro, 60, "Wrap the board vertically around the back foot"),
    ]
}
