//! Key events queued by input callbacks and folded into a `MoveIntent`
//! once per frame.

use crate::avatar::MoveIntent;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Down(MoveKey),
    Up(MoveKey),
}

#[inline]
pub fn move_key_for(key: &str) -> Option<MoveKey> {
    match key {
        "w" | "W" | "ArrowUp" => Some(MoveKey::Forward),
        "s" | "S" | "ArrowDown" => Some(MoveKey::Back),
        "a" | "A" | "ArrowLeft" => Some(MoveKey::Left),
        "d" | "D" | "ArrowRight" => Some(MoveKey::Right),
        _ => None,
    }
}

/// Apply one key transition to the intent.
///
/// A press sets its axis; releasing either key of an axis zeroes it.
pub fn apply_key(intent: &mut MoveIntent, ev: KeyEvent) {
    match ev {
        KeyEvent::Down(MoveKey::Forward) => intent.forward = 1,
        KeyEvent::Down(MoveKey::Back) => intent.forward = -1,
        KeyEvent::Down(MoveKey::Left) => intent.right = -1,
        KeyEvent::Down(MoveKey::Right) => intent.right = 1,
        KeyEvent::Up(MoveKey::Forward | MoveKey::Back) => intent.forward = 0,
        KeyEvent::Up(MoveKey::Left | MoveKey::Right) => intent.right = 0,
    }
}

#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<KeyEvent>,
    intent: MoveIntent,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a raw key name; returns whether it was a movement key.
    ///
    /// Auto-repeat presses are dropped so holding a key never accumulates.
    pub fn key_down(&mut self, key: &str, repeat: bool) -> bool {
        match move_key_for(key) {
            Some(k) => {
                if !repeat {
                    self.pending.push_back(KeyEvent::Down(k));
                }
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match move_key_for(key) {
            Some(k) => {
                self.pending.push_back(KeyEvent::Up(k));
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, ev: KeyEvent) {
        self.pending.push_back(ev);
    }

    /// Fold everything queued since the last frame into the held intent.
    pub fn consume(&mut self) -> MoveIntent {
        while let Some(ev) = self.pending.pop_front() {
            apply_key(&mut self.intent, ev);
        }
        self.intent
    }

    /// Drop all held keys, e.g. when the page loses focus.
    pub fn release_all(&mut self) {
        self.pending.clear();
        self.intent = MoveIntent::default();
    }

    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
