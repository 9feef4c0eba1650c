use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// an `OrderedTree` in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove the K from the data structure
    Remove(K),
    /// Strip every leaf off the data structure
    RemoveLeaves,
    /// Compare the keys in the inclusive range between the two Ks
    Range(K, K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are weighted
    /// heavier so the trees don't stay tiny.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::RemoveLeaves,
            3 => Op::Range(K::arbitrary(g), K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
