// src/components/stack.rs

use serde::{Deserialize, Serialize};

/// 場札の列の数。
pub const TABLEAU_COLUMNS: usize = 7;
/// 組札の数 (スートごとに1つ)。
pub const FOUNDATION_COUNT: usize = 4;

/// カードが置かれる場所の種類を示す Enum だよ。
/// 山札にあるのか、場札の何列目にあるのか、などを区別するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。スート番号 (0-3) を持つ。
    Foundation(u8),
    /// 山札 (Stock)。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl StackType {
    /// 全部の置き場所 (場札7 + 組札4 + 山札 + 捨て札)。
    pub fn all() -> impl Iterator<Item = StackType> {
        (0..TABLEAU_COLUMNS as u8)
            .map(StackType::Tableau)
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain([StackType::Stock, StackType::Waste])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_pile_once() {
        let piles: Vec<StackType> = StackType::all().collect();
        assert_eq!(piles.len(), TABLEAU_COLUMNS + FOUNDATION_COUNT + 2);
        assert_eq!(piles[0], StackType::Tableau(0));
        assert_eq!(piles[7], StackType::Foundation(0));
        assert!(piles.contains(&StackType::Waste));
    }
}
