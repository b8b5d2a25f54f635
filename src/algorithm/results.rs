//! Named multi-value results.

/// Final input and output positions of a copying algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InOut<I, O> {
    pub input: I,
    pub output: O,
}

/// Final positions in two input sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InIn<I1, I2> {
    pub input1: I1,
    pub input2: I2,
}

/// Final input position and the callable, with whatever state it gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InFun<I, F> {
    pub input: I,
    pub fun: F,
}

impl<I, O> InOut<I, O> {
    #[inline]
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

impl<I1, I2> InIn<I1, I2> {
    #[inline]
    pub fn into_parts(self) -> (I1, I2) {
        (self.input1, self.input2)
    }
}
