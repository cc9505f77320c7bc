// src/game/engine.rs
//! ゲームエンジン本体だよ！🎮
//!
//! 全部の山を持ってて、移動リクエストを「検証 → スナップショット → 書き換え」の
//! 順で処理する。検証に落ちたら何も変えずにエラーを返すので、中途半端な状態は
//! 絶対に残らない。

use std::fmt;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::selection::SelectionHandle;
use crate::components::stack::{Pile, StackType};
use crate::config::GameConfig;
use crate::error::{MoveError, Violation};
use crate::game::piles::Piles;
use crate::game::undo::UndoManager;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::{create_standard_deck, deal_initial_piles, shuffle_deck};
use crate::logic::rules::{self, check_placement, is_movable_run};

/// 山札クリックの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// 山札から 1 枚めくって捨て札へ。
    Drew(Card),
    /// 山札が空だったので捨て札を全部山札に戻した (枚数)。
    Recycled(usize),
    /// 山札も捨て札も空。なにもしない。
    Idle,
}

/// クロンダイクの盤面と操作。
pub struct Solitaire {
    piles: Piles,
    undo: UndoManager,
    selection: Option<SelectionHandle>,
    status: GameStatus,
    config: GameConfig,
    rng: StdRng,
}

impl Default for Solitaire {
    fn default() -> Self {
        Self::new()
    }
}

impl Solitaire {
    /// デフォルト設定で新しいゲームを配る。
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// 設定からゲームを作る。シードがあれば配りは再現可能。
    pub fn with_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// 乱数生成器を直接注入する。
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut game = Self::from_piles(Piles::default(), config);
        game.rng = rng;
        game.deal();
        game
    }

    /// 任意の盤面から始める (パズルやテスト用)。履歴は空。
    pub fn from_piles(piles: Piles, config: GameConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        let mut game = Self {
            piles,
            undo: UndoManager::with_limit(config.undo_limit),
            selection: None,
            status: GameStatus::Playing,
            config,
            rng,
        };
        game.refresh_status();
        game
    }

    fn deal(&mut self) {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, &mut self.rng);
        self.piles = deal_initial_piles(deck);
        self.refresh_status();
        if !self.piles.is_complete_deck() {
            warn!("Dealt layout does not hold a complete 52-card deck");
        }
    }

    // --- 読み取り (描画用) ---

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn pile(&self, stack: StackType) -> Option<&Pile> {
        self.piles.get(stack)
    }

    pub fn selection(&self) -> Option<SelectionHandle> {
        self.selection
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 戻せる手の数。
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// 4 つの組札が全部 13 枚ならクリア。
    pub fn is_won(&self) -> bool {
        rules::check_win_condition(self.piles.foundation_sizes())
    }

    // --- 山札 ---

    /// 山札をクリックしたときの処理。
    ///
    /// 山札にカードがあれば一番上を表にして捨て札へ。山札が空なら捨て札を
    /// 逆順・裏向きにして全部山札へ戻す。両方空ならなにもしない (履歴も積まない)。
    pub fn draw_stock(&mut self) -> DrawOutcome {
        let outcome = if rules::can_deal_from_stock(&self.piles.stock) {
            self.undo.snapshot(&self.piles);
            match self.piles.stock.pop() {
                Some(card) => {
                    let card = Card { is_face_up: true, ..card };
                    self.piles.waste.push(card);
                    info!("Drew {} from stock ({} left)", card, self.piles.stock.len());
                    DrawOutcome::Drew(card)
                }
                None => DrawOutcome::Idle,
            }
        } else if rules::can_reset_stock_from_waste(&self.piles.stock, &self.piles.waste) {
            self.undo.snapshot(&self.piles);
            let recycled = self.piles.waste.drain_all();
            let count = recycled.len();
            self.piles
                .stock
                .extend(recycled.into_iter().rev().map(|card| Card { is_face_up: false, ..card }));
            info!("Recycled {} waste cards back into stock", count);
            DrawOutcome::Recycled(count)
        } else {
            debug!("Stock and waste are both empty, nothing to draw");
            DrawOutcome::Idle
        };

        if outcome != DrawOutcome::Idle {
            // 捨て札の一番上が変わったので掴んでたカードは無効
            self.selection = None;
            self.refresh_status();
        }
        outcome
    }

    // --- 移動 ---

    /// 場札 `from` の上から `count` 枚を場札 `to` へまとめて動かす。
    pub fn move_tableau_to_tableau(&mut self, from: usize, to: usize, count: usize) -> Result<(), MoveError> {
        let result = self.transfer_run(from, to, count);
        log_rejection(result, StackType::Tableau(from), StackType::Tableau(to))
    }

    /// 場札の一番上を組札へ。
    pub fn move_tableau_to_foundation(&mut self, from: usize, to: usize) -> Result<Card, MoveError> {
        self.logged_single(StackType::Tableau(from), StackType::Foundation(to))
    }

    /// 捨て札の一番上を場札へ。
    pub fn move_waste_to_tableau(&mut self, to: usize) -> Result<Card, MoveError> {
        self.logged_single(StackType::Waste, StackType::Tableau(to))
    }

    /// 捨て札の一番上を組札へ。
    pub fn move_waste_to_foundation(&mut self, to: usize) -> Result<Card, MoveError> {
        self.logged_single(StackType::Waste, StackType::Foundation(to))
    }

    /// 組札の一番上を場札へ戻す。
    pub fn move_foundation_to_tableau(&mut self, from: usize, to: usize) -> Result<Card, MoveError> {
        self.logged_single(StackType::Foundation(from), StackType::Tableau(to))
    }

    /// `source` の一番上のカードを、受け入れてくれる最初の組札へ送る。
    /// 送った組札の番号を返す。
    pub fn auto_move_to_foundation(&mut self, source: StackType) -> Result<usize, MoveError> {
        let result = self.send_to_first_foundation(source);
        log_rejection(result, source, "first open foundation")
    }

    fn transfer_run(&mut self, from: usize, to: usize, count: usize) -> Result<(), MoveError> {
        let source = StackType::Tableau(from);
        let target = StackType::Tableau(to);
        let source_pile = self.pile_checked(source)?;
        let target_pile = self.pile_checked(target)?;

        if from == to {
            return Err(Violation::SamePile.into());
        }
        if source_pile.is_empty() {
            return Err(MoveError::EmptySource(source));
        }
        let run = match source_pile.top_run(count) {
            Some(run) if count > 0 => run,
            _ => {
                return Err(Violation::InvalidCount { count, len: source_pile.len() }.into());
            }
        };
        if run.iter().any(|card| !card.is_face_up) {
            return Err(Violation::FaceDownInRun.into());
        }
        if !is_movable_run(run) {
            return Err(Violation::BrokenRun.into());
        }
        let bottom = run[0];
        check_placement(&bottom, target, target_pile.top())?;

        self.apply_transfer(source, target, count);
        Ok(())
    }

    fn send_to_first_foundation(&mut self, source: StackType) -> Result<usize, MoveError> {
        if !matches!(source, StackType::Tableau(_) | StackType::Waste) {
            return Err(Violation::UnsupportedRoute { from: source, to: StackType::Foundation(0) }.into());
        }
        let card = *self
            .pile_checked(source)?
            .top()
            .ok_or(MoveError::EmptySource(source))?;
        let index = find_automatic_foundation_move(&card, &self.piles.foundations)
            .ok_or(Violation::NoFoundationAccepts { card })?;
        self.move_single(source, StackType::Foundation(index))?;
        Ok(index)
    }

    // --- 選択 ---

    /// `source` の一番上のカードを掴む。空や掴めない山なら None。
    pub fn select_source(&mut self, source: StackType) -> Option<SelectionHandle> {
        self.select_run(source, 1)
    }

    /// `source` の上から `count` 枚を掴む。複数枚を掴めるのは場札だけ。
    pub fn select_run(&mut self, source: StackType, count: usize) -> Option<SelectionHandle> {
        let pile = self.piles.get(source)?;
        let selectable = match source {
            StackType::Tableau(_) => pile.top_run(count).map_or(false, is_movable_run),
            StackType::Waste | StackType::Foundation(_) => {
                count == 1 && pile.top().map_or(false, |card| card.is_face_up)
            }
            StackType::Stock => false,
        };
        if !selectable {
            debug!("Cannot select {} card(s) from {}", count, source);
            return None;
        }
        let handle = SelectionHandle::new(source, count);
        self.selection = Some(handle);
        debug!("Selected {:?}", handle);
        Some(handle)
    }

    /// 掴んでるカードを離す。山は変えない。
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// 掴んでるカードを `target` に置こうとする。成否にかかわらず選択はクリア。
    pub fn request_move(&mut self, target: StackType) -> Result<(), MoveError> {
        let Some(selection) = self.selection.take() else {
            debug!("Move to {} rejected: nothing selected", target);
            return Err(MoveError::NoSelection);
        };
        let result = match (selection.source, target) {
            (StackType::Tableau(from), StackType::Tableau(to)) => self.transfer_run(from, to, selection.count),
            (StackType::Tableau(_), StackType::Foundation(_)) if selection.count != 1 => {
                Err(Violation::RunToFoundation { count: selection.count }.into())
            }
            (source @ (StackType::Tableau(_) | StackType::Waste), StackType::Foundation(_))
            | (source @ (StackType::Waste | StackType::Foundation(_)), StackType::Tableau(_)) => {
                self.move_single(source, target).map(|_| ())
            }
            (from, to) => Err(Violation::UnsupportedRoute { from, to }.into()),
        };
        log_rejection(result, selection.source, target)
    }

    // --- undo / reset ---

    /// 一手戻す。戻せる手がなければ false で、なにも変わらない。
    pub fn undo(&mut self) -> bool {
        match self.undo.undo() {
            Some(snapshot) => {
                self.piles = snapshot.into_piles();
                self.selection = None;
                self.refresh_status();
                info!("Undo applied ({} step(s) left)", self.undo.len());
                true
            }
            None => {
                debug!("Nothing to undo");
                false
            }
        }
    }

    /// 全部捨てて配り直す。
    ///
    /// それまでの履歴は捨てるけど、配り直す直前の盤面だけは積んでおく。
    /// だから undo 1 回で前のゲームに戻れる。
    pub fn reset_game(&mut self) {
        self.selection = None;
        self.undo.clear();
        self.undo.snapshot(&self.piles);
        self.deal();
        info!("Game reset, new deal ready");
    }

    // --- 内部ヘルパー ---

    fn logged_single(&mut self, source: StackType, target: StackType) -> Result<Card, MoveError> {
        let result = self.move_single(source, target);
        log_rejection(result, source, target)
    }

    fn pile_checked(&self, stack: StackType) -> Result<&Pile, MoveError> {
        self.piles.get(stack).ok_or(MoveError::InvalidIndex(stack))
    }

    /// 1 枚だけの移動 (場札→組札、捨て札→場札/組札、組札→場札)。
    fn move_single(&mut self, source: StackType, target: StackType) -> Result<Card, MoveError> {
        let source_pile = self.pile_checked(source)?;
        let target_pile = self.pile_checked(target)?;
        let card = *source_pile.top().ok_or(MoveError::EmptySource(source))?;
        if !card.is_face_up {
            return Err(Violation::FaceDownInRun.into());
        }
        check_placement(&card, target, target_pile.top())?;

        self.apply_transfer(source, target, 1);
        Ok(card)
    }

    /// 検証済みの移動を実行する。ここで初めてスナップショットを積む。
    fn apply_transfer(&mut self, source: StackType, target: StackType, count: usize) {
        self.undo.snapshot(&self.piles);

        let moved = match self.piles.get_mut(source) {
            Some(pile) => pile.take_top(count),
            None => return,
        };
        let moved_len = moved.len();
        if let Some(pile) = self.piles.get_mut(target) {
            pile.extend(moved.into_iter().map(|card| Card { is_face_up: true, ..card }));
        }

        let revealed = matches!(source, StackType::Tableau(_))
            && self.config.auto_reveal
            && self.piles.get_mut(source).map_or(false, Pile::reveal_top);

        info!(
            "Moved {} card(s) from {} to {}{}",
            moved_len,
            source,
            target,
            if revealed { ", revealed new top" } else { "" }
        );
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let status = GameStatus::from_win(self.is_won());
        if status == GameStatus::Won && self.status != GameStatus::Won {
            info!("All foundations complete, game won! 🏆");
        }
        self.status = status;
    }
}

/// 公開操作の出口で 1 回だけ拒否理由をログに出す。
fn log_rejection<T>(result: Result<T, MoveError>, source: StackType, target: impl fmt::Display) -> Result<T, MoveError> {
    if let Err(err) = &result {
        debug!("Move {} -> {} rejected: {}", source, target, err);
    }
    result
}

// テストコードは engine_tests.rs にあるよ
#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
