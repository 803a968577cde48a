use crate::cpu::{Cpu, StackPair};

impl Cpu {
    pub(super) fn exec_push(&mut self, pair: StackPair) {
        let value = self.read_stack_pair(pair);
        self.push(value);
    }

    pub(super) fn exec_pop(&mut self, pair: StackPair) {
        let value = self.pop();
        self.write_stack_pair(pair, value);
    }
}
