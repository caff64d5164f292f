use rayon::prelude::*;

/// Performs map reduce operation in parallel.
pub fn map_reduce<'a, T, S, FM, FR, FD, R>(source: &'a S, map_op: FM, default_op: FD, reduce_op: FR) -> R
where
    T: Send + Sync,
    S: IntoParallelRefIterator<'a, Item = T> + ?Sized,
    FM: Fn(T) -> R + Sync + Send,
    FR: Fn(R, R) -> R + Sync + Send,
    FD: Fn() -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).reduce(default_op, reduce_op)
}
