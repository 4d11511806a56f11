impl<T> FirstMax for T where T: ?Sized {}

pub trait FirstMax {
    /// Select the pair with the maximal value.
    ///
    /// Ties resolve to the earliest pair in iteration order, which matches
    /// a stable descending sort followed by taking the head.
    #[must_use]
    fn first_max<K, V>(self) -> Option<(K, V)>
    where
        Self: Sized + IntoIterator<Item = (K, V)>,
        V: Ord,
    {
        self.into_iter().fold(None, |peak, (key, value)| match peak {
            Some(current) if current.1 >= value => Some(current),
            _ => Some((key, value)),
        })
    }
}
