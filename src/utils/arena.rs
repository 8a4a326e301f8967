use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use super::handle::{Handle, HandleIndex};

struct Slot<T> {
    version: HandleIndex,
    value: Option<T>,
}

/// Values addressed by typed, versioned handles. Removing a value bumps the version of
/// its slot, so every handle issued before that resolves to `None` from then on. Vacant
/// slots are refilled lowest index first.
pub struct Arena<H, T> {
    slots: Vec<Slot<T>>,
    vacants: BinaryHeap<Reverse<HandleIndex>>,
    _phantom: PhantomData<H>,
}

impl<H, T> Default for Arena<H, T>
where
    H: Copy + From<Handle> + Into<Handle>,
{
    fn default() -> Self {
        Arena::new()
    }
}

impl<H, T> Arena<H, T>
where
    H: Copy + From<Handle> + Into<Handle>,
{
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            vacants: BinaryHeap::new(),
            _phantom: PhantomData,
        }
    }

    /// Stores `value` and returns the handle that addresses it.
    pub fn insert(&mut self, value: T) -> H {
        let index = match self.vacants.pop() {
            Some(Reverse(index)) => {
                self.slots[index as usize].value = Some(value);
                index
            }
            None => {
                self.slots.push(Slot {
                    version: 1,
                    value: Some(value),
                });

                (self.slots.len() - 1) as HandleIndex
            }
        };

        Handle::new(index, self.slots[index as usize].version).into()
    }

    #[inline]
    pub fn get(&self, handle: H) -> Option<&T> {
        let handle = handle.into();
        match self.slots.get(handle.index() as usize) {
            Some(slot) if slot.version == handle.version() => slot.value.as_ref(),
            _ => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        let handle = handle.into();
        match self.slots.get_mut(handle.index() as usize) {
            Some(slot) if slot.version == handle.version() => slot.value.as_mut(),
            _ => None,
        }
    }

    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        self.get(handle).is_some()
    }

    /// Takes the value out of the arena. Stale handles give `None`.
    pub fn remove(&mut self, handle: H) -> Option<T> {
        let handle = handle.into();
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.version != handle.version() {
            return None;
        }

        let value = slot.value.take()?;
        slot.version = slot.version.wrapping_add(1);
        self.vacants.push(Reverse(handle.index()));
        Some(value)
    }

    /// Removes every value in `handles`, returns how many of them were alive.
    pub fn remove_all<I>(&mut self, handles: I) -> usize
    where
        I: IntoIterator<Item = H>,
    {
        handles
            .into_iter()
            .filter(|&v| self.remove(v).is_some())
            .count()
    }

    /// Gets the number of alive values.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() - self.vacants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stale_after_remove() {
        let mut arena = Arena::<Handle, i32>::new();

        let e1 = arena.insert(3);
        assert_eq!(arena.get(e1), Some(&3));
        assert_eq!(arena.remove(e1), Some(3));
        assert_eq!(arena.get(e1), None);
        assert_eq!(arena.remove(e1), None);
        assert!(arena.is_empty());

        let e2 = arena.insert(4);
        assert_eq!(e2.index(), e1.index());
        assert_ne!(e2.version(), e1.version());
        assert_eq!(arena.get(e1), None);
        assert_eq!(arena.get(e2), Some(&4));
    }
}
