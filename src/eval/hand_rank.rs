use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Короткое имя категории: "One Pair", "Straight", ...
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl HandRank {
    /// Собрать HandRank из категории и 5 рангов (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Rank: 2..14 (2..A) влазит в 4 бита.
    pub fn from_category_and_ranks(category: HandCategory, ranks: [Rank; 5]) -> Self {
        let value = ranks
            .iter()
            .fold((category as u32) & 0x0F, |acc, r| (acc << 4) | (*r as u32));
        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(cat_id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Достать 5 рангов (от старшего к младшему) из HandRank.
    pub fn ranks(&self) -> [Rank; 5] {
        let nibble = |shift: u32| {
            Rank::from_value(((self.0 >> shift) & 0x0F) as u8).unwrap_or(Rank::Two)
        };
        [nibble(16), nibble(12), nibble(8), nibble(4), nibble(0)]
    }

    /// Главный ранг комбинации: ранг пары/сета/каре или старшая карта.
    pub fn high(&self) -> Rank {
        self.ranks()[0]
    }
}

/// Подробное имя руки: "Pair of Kings", "Flush (Ace high)".
pub fn detailed_hand_name(rank: HandRank) -> String {
    let high = rank.high();
    match rank.category() {
        HandCategory::HighCard => format!("High Card ({})", high.name()),
        HandCategory::OnePair => format!("Pair of {}", high.plural_name()),
        HandCategory::TwoPair => format!("Two Pair ({} high)", high.name()),
        HandCategory::ThreeOfAKind => format!("Three {}", high.plural_name()),
        HandCategory::Straight => format!("Straight ({} high)", high.name()),
        HandCategory::Flush => format!("Flush ({} high)", high.name()),
        HandCategory::FullHouse => "Full House".to_string(),
        HandCategory::FourOfAKind => format!("Four {}", high.plural_name()),
        HandCategory::StraightFlush => format!("Straight Flush ({} high)", high.name()),
    }
}

/// Имена двух рук для шоудауна с одинаковой детализацией с обеих сторон:
/// одна категория – подробные имена (решает старшинство внутри категории),
/// разные категории – короткие.
pub fn describe_matchup(a: HandRank, b: HandRank) -> (String, String) {
    if a.category() == b.category() {
        (detailed_hand_name(a), detailed_hand_name(b))
    } else {
        (a.category().name().to_string(), b.category().name().to_string())
    }
}
