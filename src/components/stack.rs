// src/components/stack.rs

use std::fmt;

// serde を使うためにインポート！StackType は JSON でプレゼン層とやり取りするよ。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// カードが存在する場所の種類を示す Enum だよ。
/// 場札と組札は列番号 (0 始まり) を持つ。
/// 範囲チェックはエンジン側でやるので、ここでは任意の数値を持てる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7 列 (0-6)。
    Tableau(usize),
    /// 組札 (Foundation)。4 つ (0-3)。最初に置いた A でスートが決まる。
    Foundation(usize),
    /// 山札からめくったカードを置く場所。
    Waste,
    /// 山札 (Stock)。裏向きの予備カード。
    Stock,
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Tableau(i) => write!(f, "tableau {}", i),
            StackType::Foundation(i) => write!(f, "foundation {}", i),
            StackType::Waste => write!(f, "waste"),
            StackType::Stock => write!(f, "stock"),
        }
    }
}

/// カードの山 (Pile) だよ。末尾 (tail) が一番上のカード。
///
/// 追加も取り出しも末尾だけ (スタック規律)。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 下 (index 0) から上への読み取り専用ビュー。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// 一番上のカード。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 上から `count` 枚のスライス。枚数が足りなければ None。
    pub fn top_run(&self, count: usize) -> Option<&[Card]> {
        let start = self.cards.len().checked_sub(count)?;
        Some(&self.cards[start..])
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 上から `count` 枚をまとめて取り出す。相対順序はそのまま。
    /// 呼び出し側で `count <= len` を確認しておくこと。
    pub fn take_top(&mut self, count: usize) -> Vec<Card> {
        let start = self.cards.len().saturating_sub(count);
        self.cards.split_off(start)
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// 全部取り出して空にする。
    pub fn drain_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// 一番上が裏向きなら表にする。めくったら true。
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                true
            }
            _ => false,
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
