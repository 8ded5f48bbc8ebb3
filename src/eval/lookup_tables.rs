use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска "колеса" A2345: туз играет как единица.
const WHEEL_MASK: RankMask = 0b1_0000_0000_1111;

/// Маска пяти подряд идущих рангов, старший – `high` (6..=A).
const fn run_mask(high: u8) -> RankMask {
    0b1_1111 << (high - 6)
}

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << ((rank as u8) - 2)
}

/// Маска из набора рангов.
pub fn mask_of(ranks: impl IntoIterator<Item = Rank>) -> RankMask {
    ranks.into_iter().fold(0, |m, r| m | rank_to_bit(r))
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита; для колеса (A2345) – `Rank::Five`.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // От бродвея вниз.
    for high in (6u8..=14).rev() {
        let m = run_mask(high);
        if rank_mask & m == m {
            return Rank::from_value(high);
        }
    }
    if rank_mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }
    None
}

/// Ранги стрита от старшего к младшему.
pub fn straight_ranks(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let h = high as u8;
    let r = |d: u8| Rank::from_value(h - d).unwrap_or(Rank::Two);
    [r(0), r(1), r(2), r(3), r(4)]
}
