use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op {
    /// Insert a record with this id and name. `i8` ids keep collisions frequent.
    Insert(i8, String),
    /// Delete the record with this id
    Remove(i8),
    /// Compare iterators
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g), String::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
