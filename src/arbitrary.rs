use compare::Compare;
use quickcheck::{Arbitrary, Gen};
use super::tree::OrderedTree;

impl<T, C> Arbitrary for OrderedTree<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default {

    fn arbitrary(gen: &mut Gen) -> Self { distinct(Vec::<T>::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let items: Vec<T> = self.iter().cloned().collect();
        Box::new(items.shrink().map(distinct))
    }
}

// Generated items may repeat; later copies are dropped.
fn distinct<T, C>(items: Vec<T>) -> OrderedTree<T, C> where C: Compare<T> + Default {
    let mut tree = OrderedTree::default();
    for item in items { tree.insert(item).ok(); }
    tree
}
