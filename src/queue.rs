//! Bounded FIFO ring buffer of axial coordinates, used only by the
//! diffusion engine's BFS. Capacity is the grid's cell count; since each
//! hex is enqueued at most once per diffusion, overflow cannot happen.

use crate::coords::Axial;

pub struct AxialQueue {
    data: Vec<Axial>,
    head: usize,
    tail: usize,
    len: usize,
}

impl AxialQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![Axial { r: 0, q: 0 }; capacity.max(1)],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, value: Axial) {
        debug_assert!(self.len < self.data.len(), "axial queue overflow");
        self.data[self.tail] = value;
        self.tail = (self.tail + 1) % self.data.len();
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Axial {
        debug_assert!(self.len > 0, "dequeue from empty axial queue");
        let value = self.data[self.head];
        self.head = (self.head + 1) % self.data.len();
        self.len -= 1;
        value
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order_preserved() {
        let mut q = AxialQueue::with_capacity(4);
        q.enqueue(Axial { r: 0, q: 0 });
        q.enqueue(Axial { r: 1, q: 1 });
        assert_eq!(q.dequeue(), Axial { r: 0, q: 0 });
        q.enqueue(Axial { r: 2, q: 2 });
        assert_eq!(q.dequeue(), Axial { r: 1, q: 1 });
        assert_eq!(q.dequeue(), Axial { r: 2, q: 2 });
        assert!(q.is_empty());
    }

    #[test]
    fn wraps_around_ring_buffer() {
        let mut q = AxialQueue::with_capacity(3);
        for i in 0..3 {
            q.enqueue(Axial { r: i, q: 0 });
        }
        for i in 0..3 {
            assert_eq!(q.dequeue().r, i);
        }
        q.enqueue(Axial { r: 9, q: 0 });
        assert_eq!(q.dequeue().r, 9);
    }
}
