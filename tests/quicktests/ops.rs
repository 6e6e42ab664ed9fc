use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Delete the K from the data structure
    Delete(K),
    /// Rebuild the tree from its keys
    Rebalance,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Rebalancing is
    /// rarer so the tree gets a chance to drift out of balance in between.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Delete(K::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
