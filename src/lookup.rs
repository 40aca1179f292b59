use core::borrow::Borrow;

pub trait Lookup<K> {
    fn matches(&self, key: Option<&K>) -> bool;
}

impl<Q, K> Lookup<K> for &Q
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    fn matches(&self, key: Option<&K>) -> bool {
        key.map(|k| k.borrow() == *self).unwrap_or(false)
    }
}

impl<'a, K: Eq> Lookup<K> for Option<&'a K> {
    fn matches(&self, key: Option<&K>) -> bool {
        match (*self, key) {
            (None, None) => true,
            (Some(this), Some(other)) => this == other,
            _ => false,
        }
    }
}
