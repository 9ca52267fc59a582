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

/// Queue that stores only player ids
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

    /// Get the current element from the queue without advancing it.
    /// &mut self is needed because Peekable can call next() on the underlying iterator
    fn get_current(&mut self) -> Option<&Self::Item> {
        self.players_queue.peek()
    }

    /// Advance the queue by one and return the new current element
    fn next(&mut self) -> Option<&Self::Item> {
        self.players_queue.next()?;
        self.players_queue.peek()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    impl Player for u64 {
        type Id = u64;

        fn id(&self) -> Self::Id {
            *self
        }
    }

    #[test]
    fn test_get_current() {
        let mut pool = PlayerIdQueue::new(vec![5u64, 1, 2]);

        // starting with the first element
        assert_eq!(*pool.get_current().unwrap(), 5);
        // calling multiple times doesn't change anything
        assert_eq!(*pool.get_current().unwrap(), 5);

        // skip one
        let _ = pool.next().unwrap();

        // now getting the second element
        assert_eq!(*pool.get_current().unwrap(), 1);
    }

    #[test]
    fn test_cyclic_iteration() {
        let mut pool = PlayerIdQueue::new(vec![1u64, 2]);
        // check that we are starting with the first element
        assert_eq!(pool.get_current(), Some(&1));
        // check that elements cycle endlessly
        itertools::assert_equal(
            std::iter::from_fn(|| pool.next().cloned()).take(7),
            [2, 1, 2, 1, 2, 1, 2],
        );
    }

    #[test]
    fn test_as_slice() {
        let mut pool = PlayerIdQueue::new(vec![1u64, 2]);

        // initial sequence is returned
        itertools::assert_equal(pool.as_slice(), &[1, 2]);

        // advancing the queue doesn't affect as_slice
        pool.next();
        itertools::assert_equal(pool.as_slice(), &[1, 2]);
    }
}
