use std::iter::{Cycle, Peekable};

use smallvec::{IntoIter, SmallVec};

pub trait Player {
    type Id;

    fn id(&self) -> Self::Id;
}

pub trait PlayerQueue {
    type Id: PartialEq;
    type Item: Player<Id = Self::Id>;

    fn as_slice(&self) -> &[Self::Item];

    fn get_current(&mut self) -> Option<&Self::Item>;

    fn next(&mut self) -> Option<&Self::Item>;
}

/// Endless turn-rotation queue over a fixed roster of player ids.
#[derive(Debug)]
pub struct PlayerIdQueue<T: Clone> {
    players: SmallVec<[T; 2]>,
    players_queue: Peekable<Cycle<IntoIter<[T; 2]>>>,
}

impl<T: Clone> PlayerIdQueue<T> {
    pub fn new(players: Vec<T>) -> Self {
        let players = SmallVec::from_vec(players);
        Self {
            players: players.clone(),
            players_queue: players.into_iter().cycle().peekable(),
        }
    }
}

impl<T: Clone + Player<Id = T> + PartialEq> PlayerQueue for PlayerIdQueue<T> {
    type Id = T;
    type Item = T;

    fn as_slice(&self) -> &[Self::Item] {
        self.players.as_slice()
    }

    /// Get next element from pool without advancing iterator.
    /// &mut self is needed because Peekable can call next() on the underlying iterator
    fn get_current(&mut self) -> Option<&Self::Item> {
        self.players_queue.peek()
    }

    /// Advance iterator by one and return the next element from the pool
    fn next(&mut self) -> Option<&Self::Item> {
        self.players_queue.next()?;
        self.players_queue.peek()
    }
}
