/// Slot sentinel for nodes that are not currently queued.
const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy)]
struct Entry {
    node: i32,
    priority: f64,
}

/// Min-heap priority queue over integer node ids with indexed membership.
///
/// Node ids are drawn from the range `[0, capacity)` fixed at construction.
/// Alongside the dense heap array, `slot_of` maps every id to its current
/// heap slot (or [`ABSENT`]), which makes membership, find-min, and priority
/// lookups O(1) and lets [`reprioritize`](IndexedPriorityQueue::reprioritize)
/// restore heap order in O(log n) without searching the heap.
///
/// Ties in priority are broken arbitrarily; the queue is not stable.
pub struct IndexedPriorityQueue {
    heap: Vec<Entry>,
    slot_of: Box<[usize]>,
}

impl IndexedPriorityQueue {
    pub fn new(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: vec![],
            slot_of: vec![ABSENT; capacity].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline(always)]
    pub fn contains(&self, node: i32) -> bool {
        self.slot_of[node as usize] != ABSENT
    }

    /// The queued priority of `node`. Panics if the node is not queued.
    #[track_caller]
    #[inline(always)]
    pub fn priority_of(&self, node: i32) -> f64 {
        let slot = self.slot_of[node as usize];
        assert!(slot != ABSENT, "node is not queued");
        self.heap[slot].priority
    }

    /// The minimum-priority element, without removing it.
    #[inline(always)]
    pub fn peek(&self) -> Option<(i32, f64)> {
        self.heap.first().map(|entry| (entry.node, entry.priority))
    }

    /// Queues `node` at the given priority. Panics if it is already queued.
    #[track_caller]
    pub fn insert(&mut self, node: i32, priority: f64) {
        assert!(!self.contains(node), "node is already queued");
        let entry = Entry { node, priority };
        let slot = self.heap.len();
        self.heap.push(entry);
        self.sift_up(entry, slot);
    }

    /// Removes and returns the minimum-priority element.
    pub fn pop_min(&mut self) -> Option<(i32, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let ret = self.heap.swap_remove(0);
        self.slot_of[ret.node as usize] = ABSENT;
        if let Some(&moved) = self.heap.first() {
            self.sift_down(moved, 0);
        }
        Some((ret.node, ret.priority))
    }

    /// Re-queues `node` at a new priority, sifting in whichever direction
    /// restores heap order. Panics if the node is not queued.
    #[track_caller]
    pub fn reprioritize(&mut self, node: i32, priority: f64) {
        let slot = self.slot_of[node as usize];
        assert!(slot != ABSENT, "node is not queued");
        let entry = Entry { node, priority };
        if slot > 0 && priority < self.heap[(slot - 1) / 2].priority {
            self.sift_up(entry, slot);
        } else {
            self.sift_down(entry, slot);
        }
    }

    // The sift loops move displaced entries into the hole left by `entry`
    // and write `entry` once at its final slot, keeping `slot_of` exact for
    // every element they touch.

    fn sift_up(&mut self, entry: Entry, mut slot: usize) {
        while slot > 0 {
            let parent_slot = (slot - 1) / 2;
            let parent = self.heap[parent_slot];
            if parent.priority <= entry.priority {
                break;
            }
            self.heap[slot] = parent;
            self.slot_of[parent.node as usize] = slot;
            slot = parent_slot;
        }
        self.heap[slot] = entry;
        self.slot_of[entry.node as usize] = slot;
    }

    fn sift_down(&mut self, entry: Entry, mut slot: usize) {
        loop {
            let mut child_slot = slot * 2 + 1;
            if child_slot >= self.heap.len() {
                break;
            }
            let mut child = self.heap[child_slot];

            let right_slot = child_slot + 1;
            if right_slot < self.heap.len() {
                let right = self.heap[right_slot];
                if right.priority < child.priority {
                    child_slot = right_slot;
                    child = right;
                }
            }

            if entry.priority <= child.priority {
                break;
            }

            self.heap[slot] = child;
            self.slot_of[child.node as usize] = slot;
            slot = child_slot;
        }
        self.heap[slot] = entry;
        self.slot_of[entry.node as usize] = slot;
    }
}
