// src/game/piles.rs
//! 盤面の全部の山 (場札 7 + 組札 4 + 捨て札 + 山札) をまとめて持つ構造体だよ。

use std::collections::HashSet;

use itertools::chain;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{Pile, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};

/// 12 個の山の中身。カードは全部値で持つので、clone すれば完全なディープコピーになる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    pub tableaus: [Pile; TABLEAU_COUNT],
    pub foundations: [Pile; FOUNDATION_COUNT],
    pub waste: Pile,
    pub stock: Pile,
}

impl Piles {
    /// StackType から山を引く。番号が範囲外なら None。
    pub fn get(&self, stack: StackType) -> Option<&Pile> {
        match stack {
            StackType::Tableau(i) => self.tableaus.get(i),
            StackType::Foundation(i) => self.foundations.get(i),
            StackType::Waste => Some(&self.waste),
            StackType::Stock => Some(&self.stock),
        }
    }

    pub fn get_mut(&mut self, stack: StackType) -> Option<&mut Pile> {
        match stack {
            StackType::Tableau(i) => self.tableaus.get_mut(i),
            StackType::Foundation(i) => self.foundations.get_mut(i),
            StackType::Waste => Some(&mut self.waste),
            StackType::Stock => Some(&mut self.stock),
        }
    }

    /// 全部の山を (StackType, &Pile) で列挙する。描画用。
    pub fn iter(&self) -> impl Iterator<Item = (StackType, &Pile)> + '_ {
        chain!(
            self.tableaus.iter().enumerate().map(|(i, pile)| (StackType::Tableau(i), pile)),
            self.foundations.iter().enumerate().map(|(i, pile)| (StackType::Foundation(i), pile)),
            [(StackType::Waste, &self.waste), (StackType::Stock, &self.stock)],
        )
    }

    /// 全カードを列挙する。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.iter().flat_map(|(_, pile)| pile.iter())
    }

    pub fn card_count(&self) -> usize {
        self.iter().map(|(_, pile)| pile.len()).sum()
    }

    pub fn foundation_sizes(&self) -> [usize; FOUNDATION_COUNT] {
        let mut sizes = [0; FOUNDATION_COUNT];
        for (size, pile) in sizes.iter_mut().zip(self.foundations.iter()) {
            *size = pile.len();
        }
        sizes
    }

    /// 52 枚がちょうど 1 枚ずつ揃ってるか (重複なし、消失なし)。
    pub fn is_complete_deck(&self) -> bool {
        let unique: HashSet<_> = self.all_cards().map(Card::identity).collect();
        self.card_count() == DECK_SIZE && unique.len() == DECK_SIZE
    }
}
