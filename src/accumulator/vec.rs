use std::collections::VecDeque;

use super::Accumulator;

impl<T> Accumulator<T> for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Vec::new()
    }

    #[inline]
    fn concat_mut(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Accumulator<T> for VecDeque<T> {
    #[inline]
    fn empty() -> Self {
        VecDeque::new()
    }

    #[inline]
    fn concat_mut(&mut self, item: T) {
        self.push_back(item);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::{into, tail};

    #[test]
    fn vec_deque_keeps_order() {
        let out = into(VecDeque::from([0]), tail(), [1, 2, 3]);
        assert_eq!(out, [0, 2, 3]);
    }
}
