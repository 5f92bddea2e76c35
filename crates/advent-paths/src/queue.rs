//! Indexed min-priority queue with decrease-key and lazy deletion.
//!
//! Entries live in a binary min-heap keyed by `(priority, stamp)`. A side
//! map records, for every live item, the priority and stamp of its current
//! heap entry. Re-pushing an item at a new priority or removing it only
//! touches the map; the superseded heap entry becomes stale and is
//! discarded when it surfaces at [`pop`](IndexedPriorityQueue::pop).

use std::cmp::{Ordering, Reverse};
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::error::QueueError;

#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    /// Unique per push. An entry is live only while the map holds its stamp.
    stamp: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.stamp == other.stamp
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.stamp.cmp(&other.stamp))
    }
}

/// A min-priority queue keyed by item identity.
///
/// Each distinct item has at most one live entry. Pushing an item that is
/// already queued at a different priority replaces its entry, so the item
/// always pops at its most recent priority.
///
/// Ties between equal priorities are not part of the contract.
#[derive(Debug)]
pub struct IndexedPriorityQueue<T, P> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    live: HashMap<T, (P, u64)>,
    next_stamp: u64,
}

impl<T, P> IndexedPriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Clone,
{
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_stamp: 0,
        }
    }

    /// Queue `item` at `priority`, replacing any live entry for it.
    ///
    /// Pushing an item again at its current priority does nothing.
    pub fn push(&mut self, item: T, priority: P) {
        let stamp = self.next_stamp;
        match self.live.entry(item) {
            MapEntry::Occupied(mut slot) => {
                if slot.get().0 == priority {
                    return;
                }
                // The old heap entry goes stale once its stamp is replaced.
                slot.insert((priority.clone(), stamp));
                let item = slot.key().clone();
                self.heap.push(Reverse(Entry {
                    priority,
                    stamp,
                    item,
                }));
            }
            MapEntry::Vacant(slot) => {
                let item = slot.key().clone();
                slot.insert((priority.clone(), stamp));
                self.heap.push(Reverse(Entry {
                    priority,
                    stamp,
                    item,
                }));
            }
        }
        self.next_stamp += 1;
    }

    /// Remove and return the item with the lowest priority.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    /// Remove and return the lowest-priority item together with its priority.
    pub fn pop_with_priority(&mut self) -> Result<(T, P), QueueError> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            // Skip stale entries.
            let is_live = matches!(self.live.get(&entry.item), Some((_, s)) if *s == entry.stamp);
            if is_live {
                self.live.remove(&entry.item);
                return Ok((entry.item, entry.priority));
            }
        }
        Err(QueueError::Empty)
    }

    /// Logically delete `item`. Its heap entry is purged by a later pop.
    ///
    /// Does nothing if `item` is not queued.
    pub fn remove(&mut self, item: &T) {
        self.live.remove(item);
    }

    /// Whether `item` has a live entry.
    pub fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }

    /// Whether no live items remain.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Drop every entry, live or stale.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
    }
}

impl<T, P> Default for IndexedPriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Extend<(T, P)> for IndexedPriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Clone,
{
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.push(item, priority);
        }
    }
}

impl<T, P> FromIterator<(T, P)> for IndexedPriorityQueue<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}
