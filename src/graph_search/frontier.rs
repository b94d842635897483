//! Frontier nodes and the priority queue used by the cost-ordered strategies.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Successor;

/// A frontier entry: a state, the actions that reached it, and what they cost.
#[derive(Clone, Debug)]
pub(crate) struct Node<S, A> {
    pub state: S,
    pub actions: Vec<A>,
    pub cost: f64,
}

impl<S, A: Clone> Node<S, A> {
    pub fn root(state: S) -> Self {
        Self {
            state,
            actions: Vec::new(),
            cost: 0.0,
        }
    }

    /// Extends this node's plan along one successor edge.
    pub fn child(&self, successor: Successor<S, A>) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(successor.action);

        Self {
            state: successor.state,
            actions,
            cost: self.cost + successor.cost,
        }
    }
}

struct Entry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // `BinaryHeap` pops the greatest entry, so both keys are reversed: lowest
    // priority first, and among equal priorities the earliest insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue with first-in-first-out ordering among equal priorities.
pub(crate) struct PriorityFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_sequence: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        self.heap.push(Entry {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_priority_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("c", 3.0);
        frontier.push("a", 1.0);
        frontier.push("b", 2.0);

        assert_eq!(Some("a"), frontier.pop());
        assert_eq!(Some("b"), frontier.pop());
        assert_eq!(Some("c"), frontier.pop());
        assert_eq!(None, frontier.pop());
    }

    #[test]
    fn test_equal_priorities_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("first", 1.0);
        frontier.push("second", 1.0);
        frontier.push("cheap", 0.5);
        frontier.push("third", 1.0);

        assert_eq!(4, frontier.len());
        assert_eq!(Some("cheap"), frontier.pop());
        assert_eq!(Some("first"), frontier.pop());
        assert_eq!(Some("second"), frontier.pop());
        assert_eq!(Some("third"), frontier.pop());
    }

    #[test]
    fn test_child_extends_plan_and_cost() {
        let root: Node<u8, char> = Node::root(0);
        let child = root.child(Successor {
            state: 1,
            action: 'a',
            cost: 2.5,
        });
        let grandchild = child.child(Successor {
            state: 2,
            action: 'b',
            cost: 1.0,
        });

        assert!(root.actions.is_empty());
        assert_eq!(vec!['a', 'b'], grandchild.actions);
        assert_eq!(3.5, grandchild.cost);
        assert_eq!(2, grandchild.state);
    }
}
